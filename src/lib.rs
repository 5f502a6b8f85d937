//! An unstable, in-place quicksort over any indexable/swappable sequence.
//!
//! The algorithm is decoupled from its storage through the [`Sequence`]
//! trait: element count, read by index, and pairwise swap are the only
//! operations the sort performs, so it works unchanged over slices, `Vec`s,
//! or any caller-defined backing storage, contiguous or not. Ordering is
//! supplied either by `Ord` ([`sort`]) or by a strict less-than predicate
//! ([`sort_by`]).
//!
//! The engine is exactly one algorithm: a recursive quicksort using the
//! Hoare partition scheme with a midpoint pivot. There is no fallback for
//! pathological inputs, no stability guarantee and no parallelism.

pub mod patterns;
mod quicksort;
mod sequence;

pub use sequence::Sequence;

/// Sorts the sequence in ascending order, but might not preserve the order
/// of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., element movement happens only through [`Sequence::swap`]), and
/// *O*(*n* \* log(*n*)) on average. The midpoint pivot choice degrades to
/// *O*(*n*^2) comparisons on adversarial input.
///
/// Elements must be `Clone` because the partition step captures the pivot
/// by value before scanning; the captured pivot is thereby insulated from
/// the swaps that follow.
///
/// # Examples
///
/// ```
/// let mut v = vec![4, 5, 6, 7, 8, 9, 1, 2, 3];
///
/// seqsort::sort(&mut v);
/// assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
#[inline]
pub fn sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    quicksort::quicksort(seq, &mut |a: &S::Item, b: &S::Item| a.lt(b));
}

/// Sorts the sequence with a strict less-than predicate, but might not
/// preserve the order of equal elements.
///
/// `is_less(a, b)` must return `true` iff `a` strictly precedes `b`, and
/// must form a strict weak ordering of the elements: irreflexive
/// (`is_less(a, a)` is never `true`), asymmetric and transitive. This is an
/// unchecked precondition. If it is violated the resulting order is
/// unspecified and the call may panic or fail to terminate, but every
/// element stays in the sequence since all movement happens through
/// whole-element swaps.
///
/// Any panic raised by the sequence or the predicate propagates unchanged
/// to the caller; the engine performs no error handling of its own.
///
/// # Examples
///
/// ```
/// let mut v = vec![1, 2, 3];
///
/// // Descending order.
/// seqsort::sort_by(&mut v, |a, b| a > b);
/// assert_eq!(v, [3, 2, 1]);
/// ```
#[inline]
pub fn sort_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    quicksort::quicksort(seq, &mut is_less);
}
