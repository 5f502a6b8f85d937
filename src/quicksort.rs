use crate::sequence::Sequence;

/// Sorts `seq` in place with a recursive Hoare-partition quicksort.
///
/// Sequences of length 0 or 1 are left untouched.
pub(crate) fn quicksort<S, F>(seq: &mut S, is_less: &mut F)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.len();
    if len <= 1 {
        return;
    }

    quicksort_range(seq, 0, len - 1, is_less);
}

/// Sorts the inclusive sub-range `[lo, hi]`.
///
/// Recurses into the shorter partition and loops on the longer one, which
/// bounds stack depth to `O(log n)` even when the midpoint pivot degrades to
/// `O(n^2)` comparisons on adversarial input.
fn quicksort_range<S, F>(seq: &mut S, mut lo: usize, mut hi: usize, is_less: &mut F)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    loop {
        if lo >= hi {
            return;
        }

        let p = partition(seq, lo, hi, is_less);

        // The left sub-range keeps `p` as its inclusive upper bound. Hoare
        // partitioning only guarantees that [lo, p] and [p + 1, hi] are
        // mutually ordered, not that the element at `p` is in final position.
        if p - lo < hi - p {
            quicksort_range(seq, lo, p, is_less);
            lo = p + 1;
        } else {
            quicksort_range(seq, p + 1, hi, is_less);
            hi = p;
        }
    }
}

/// Hoare partition of the inclusive sub-range `[lo, hi]`, `lo < hi`, around
/// the value at its midpoint.
///
/// Returns a split index `p` in `[lo, hi)` such that no element of
/// `[lo, p]` compares greater than any element of `[p + 1, hi]`.
fn partition<S, F>(seq: &mut S, lo: usize, hi: usize, is_less: &mut F) -> usize
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    // Capture the pivot by value before scanning. `at` hands out a reference
    // into the sequence, and comparing against that while swapping would let
    // the pivot shift mid-partition.
    let pivot = seq.at(lo + (hi - lo) / 2).clone();

    let mut i = lo;
    let mut j = hi;

    loop {
        // Scan past elements already on the correct side. Both scans stop at
        // the pivot value at the latest, which keeps `i` and `j` inside
        // `[lo, hi]` as long as `is_less` is a strict weak ordering.
        while is_less(seq.at(i), &pivot) {
            i += 1;
        }
        while is_less(&pivot, seq.at(j)) {
            j -= 1;
        }

        if i >= j {
            return j;
        }

        seq.swap(i, j);

        // i < j here, so neither cursor can step out of [lo, hi].
        i += 1;
        j -= 1;
    }
}
