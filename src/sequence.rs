//! The storage seam of the sort: random access to caller-owned elements.

/// A mutable, finite, randomly-indexable collection of homogeneous elements.
///
/// This is the only view of the data the sort ever sees. The surface is
/// deliberately minimal: element count, read by index, and pairwise swap.
/// `swap` is the sole mutation channel, so the sort can reorder elements in
/// caller-owned storage without ever copying them out, regardless of how that
/// storage is laid out.
///
/// Implementations must keep `len` stable for the duration of a sort call.
pub trait Sequence {
    /// The element type.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn at(&self, index: usize) -> &Self::Item;

    /// Exchanges the elements at `a` and `b` in place.
    ///
    /// # Panics
    ///
    /// Panics if `a >= self.len()` or `b >= self.len()`.
    fn swap(&mut self, a: usize, b: usize);

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T] as Sequence>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        <[T] as Sequence>::at(self, index)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T] as Sequence>::swap(self, a, b);
    }
}
