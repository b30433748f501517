/// An element that owns a heap allocation. `None` is the null pointer and
/// releases nothing.
pub trait Owned {
    fn is_live(&self) -> bool;
}

impl<T: ?Sized> Owned for Box<T> {
    fn is_live(&self) -> bool {
        true
    }
}

impl<T: ?Sized> Owned for Option<Box<T>> {
    fn is_live(&self) -> bool {
        self.is_some()
    }
}
