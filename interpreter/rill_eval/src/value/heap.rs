//! Reference-counted heap wrapper with factory-only construction.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Shared, immutable heap allocation.
///
/// `Heap::new` is `pub(super)`, so all heap values are built through the
/// factory methods on `Value` and external code cannot wrap arbitrary
/// allocations. Clones bump a reference count; the payload is never
/// mutated after construction.
#[repr(transparent)]
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    /// Create a new heap allocation. Only `Value` factories may call this.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }

    /// Check whether two handles share the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_deref() {
        let h = Heap::new(42i64);
        assert_eq!(*h, 42);
    }

    #[test]
    fn test_heap_clone_shares_allocation() {
        let h1 = Heap::new(String::from("hello"));
        let h2 = h1.clone();
        assert_eq!(h1, h2);
        assert!(Heap::ptr_eq(&h1, &h2));
    }

    #[test]
    fn test_heap_eq_by_content() {
        let h1 = Heap::new(String::from("hello"));
        let h2 = Heap::new(String::from("hello"));
        let h3 = Heap::new(String::from("world"));
        assert_eq!(h1, h2);
        assert!(!Heap::ptr_eq(&h1, &h2));
        assert_ne!(h1, h3);
    }
}
