//! Permutations of a finite sequence, with optional restricted length
//! and element repetition.
//!
//! Two generation strategies sit behind one public type. The
//! full-length, no-repetition request is served by Heap's algorithm,
//! which permutes a working array in place through element swaps.
//! Every other request goes through the mixed-radix index counter,
//! with duplicate-index tuples filtered out when repetition is
//! disallowed. Each strategy's order is deterministic and exhaustive,
//! but the two orders differ.

use crate::counter::MixedRadixCounter;
use itertools::Itertools;

/// Returns an iterator over the permutations of `domain`.
///
/// `length` is the number of output positions and defaults to the
/// domain size when `None`. With `allow_repetition` an element may
/// occupy several positions at once.
///
/// An empty domain, a `length` of zero, or a `length` exceeding the
/// domain size without repetition all produce an empty sequence.
///
/// ```
/// use combiter::permutations;
///
/// let mut values = permutations(vec![1, 2, 3], Some(2), false);
/// assert_eq!(values.next(), Some(vec![1, 2]));
/// assert_eq!(values.next(), Some(vec![1, 3]));
/// assert_eq!(values.next(), Some(vec![2, 1]));
/// ```
pub fn permutations<D>(
    domain: D,
    length: Option<usize>,
    allow_repetition: bool,
) -> Permutations<D::Item>
where
    D: IntoIterator,
{
    let values: Vec<D::Item> = domain.into_iter().collect();
    log::debug!(
        "permutations of {} elements, length {:?}, repetition {}",
        values.len(),
        length,
        allow_repetition,
    );
    let inner = match (length, allow_repetition) {
        (None, false) => PermutationsImpl::Heap(HeapPermutations::new(values)),
        (length, _) => {
            let length = length.unwrap_or(values.len());
            PermutationsImpl::Indexed(IndexPermutations::new(values, length, allow_repetition))
        }
    };
    Permutations { inner }
}

/// An iterator over the permutations of a sequence. See
/// [`permutations`].
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    inner: PermutationsImpl<T>,
}

/// The strategy selected at construction: in-place swaps for the
/// full-length no-repetition case, index counting otherwise.
#[derive(Debug, Clone)]
enum PermutationsImpl<T> {
    Heap(HeapPermutations<T>),
    Indexed(IndexPermutations<T>),
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            PermutationsImpl::Heap(heap) => heap.next(),
            PermutationsImpl::Indexed(indexed) => indexed.next(),
        }
    }
}

/// Heap's algorithm over an in-place working array.
///
/// This is the one generator that mutates values rather than indices,
/// so a clone must deep-copy the working array; two cursors may never
/// share it.
#[derive(Debug, Clone)]
struct HeapPermutations<T> {
    values: Vec<T>,
    counts: Vec<usize>,
    current_index: usize,
    has_returned_first: bool,
}

impl<T> HeapPermutations<T> {
    fn new(values: Vec<T>) -> Self {
        let counts = vec![0; values.len()];
        Self {
            values,
            counts,
            current_index: 0,
            has_returned_first: false,
        }
    }
}

impl<T: Clone> HeapPermutations<T> {
    fn next(&mut self) -> Option<Vec<T>> {
        // Covers both exhaustion and the empty domain.
        if self.current_index >= self.values.len() {
            return None;
        }

        if !self.has_returned_first {
            self.has_returned_first = true;
            return Some(self.values.clone());
        }

        loop {
            if self.current_index >= self.values.len() {
                return None;
            }
            if self.counts[self.current_index] < self.current_index {
                if self.current_index % 2 == 0 {
                    self.values.swap(0, self.current_index);
                } else {
                    let count = self.counts[self.current_index];
                    self.values.swap(count, self.current_index);
                }
                self.counts[self.current_index] += 1;
                self.current_index = 0;
                return Some(self.values.clone());
            } else {
                self.counts[self.current_index] = 0;
                self.current_index += 1;
            }
        }
    }
}

/// Index-counter strategy for restricted lengths and repetition.
#[derive(Debug, Clone)]
struct IndexPermutations<T> {
    values: Vec<T>,
    counter: MixedRadixCounter,
    allow_repetition: bool,
}

impl<T> IndexPermutations<T> {
    fn new(values: Vec<T>, length: usize, allow_repetition: bool) -> Self {
        let counter = MixedRadixCounter::repeated(values.len(), length);
        Self {
            values,
            counter,
            allow_repetition,
        }
    }
}

impl<T: Clone> IndexPermutations<T> {
    fn next(&mut self) -> Option<Vec<T>> {
        // Rejected tuples are retried in a loop; a long run of
        // rejections must not grow the stack.
        loop {
            let indices = self.counter.next()?;
            if !self.allow_repetition && !indices.iter().all_unique() {
                continue;
            }
            return Some(
                indices
                    .iter()
                    .map(|&index| self.values[index].clone())
                    .collect(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counting::permutation_count;

    #[test]
    fn heap_order_of_three() {
        let mut values = permutations(vec![1, 2, 3], None, false);
        assert_eq!(values.next(), Some(vec![1, 2, 3]));
        assert_eq!(values.next(), Some(vec![2, 1, 3]));
        assert_eq!(values.next(), Some(vec![3, 1, 2]));
        assert_eq!(values.next(), Some(vec![1, 3, 2]));
        assert_eq!(values.next(), Some(vec![2, 3, 1]));
        assert_eq!(values.next(), Some(vec![3, 2, 1]));
        assert_eq!(values.next(), None);
    }

    #[test]
    fn heap_of_two() {
        let values: Vec<_> = permutations(vec![1, 2], None, false).collect();
        assert_eq!(values, vec![vec![1, 2], vec![2, 1]]);
    }

    #[test]
    fn heap_of_one() {
        let values: Vec<_> = permutations(vec![1], None, false).collect();
        assert_eq!(values, vec![vec![1]]);
    }

    #[test]
    fn heap_of_empty() {
        let mut values = permutations(Vec::<i32>::new(), None, false);
        assert_eq!(values.next(), None);
    }

    #[test]
    fn heap_counts_are_factorial() {
        for n in 0..=6 {
            let count = permutations(0..n, None, false).count();
            assert_eq!(count, permutation_count(n, None, false).unwrap());
        }
    }

    #[test]
    fn heap_permutations_are_distinct() {
        let values: Vec<_> = permutations(0..5, None, false).collect();
        assert_eq!(values.len(), 120);
        let mut sorted = values.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 120);
    }

    #[test]
    fn strategies_agree_as_multisets() {
        // Heap order differs from counter order, but the emitted
        // permutations are the same set.
        let mut heap: Vec<_> = permutations(vec![1, 2, 3, 4], None, false).collect();
        let mut indexed: Vec<_> = permutations(vec![1, 2, 3, 4], Some(4), false).collect();
        assert_ne!(heap, indexed);
        heap.sort();
        indexed.sort();
        assert_eq!(heap, indexed);
    }

    #[test]
    fn restricted_length() {
        let values: Vec<_> = permutations(vec![1, 2, 3], Some(2), false).collect();
        let expected = vec![
            vec![1, 2],
            vec![1, 3],
            vec![2, 1],
            vec![2, 3],
            vec![3, 1],
            vec![3, 2],
        ];
        assert_eq!(values, expected);
    }

    #[test]
    fn restricted_length_of_four() {
        let values: Vec<_> = permutations(vec![1, 2, 3, 4], Some(2), false).collect();
        let expected = vec![
            vec![1, 2],
            vec![1, 3],
            vec![1, 4],
            vec![2, 1],
            vec![2, 3],
            vec![2, 4],
            vec![3, 1],
            vec![3, 2],
            vec![3, 4],
            vec![4, 1],
            vec![4, 2],
            vec![4, 3],
        ];
        assert_eq!(values, expected);
    }

    #[test]
    fn length_longer_than_domain() {
        let mut values = permutations(vec![1, 2, 3], Some(4), false);
        assert_eq!(values.next(), None);
    }

    #[test]
    fn length_one() {
        let values: Vec<_> = permutations(vec![1, 2, 3], Some(1), false).collect();
        assert_eq!(values, vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn length_zero() {
        let mut values = permutations(vec![1, 2, 3], Some(0), false);
        assert_eq!(values.next(), None);
        let mut values = permutations(vec![1, 2, 3], Some(0), true);
        assert_eq!(values.next(), None);
    }

    #[test]
    fn with_repetition_of_length_two() {
        let values: Vec<_> = permutations(vec![1, 2, 3], Some(2), true).collect();
        let expected = vec![
            vec![1, 1],
            vec![1, 2],
            vec![1, 3],
            vec![2, 1],
            vec![2, 2],
            vec![2, 3],
            vec![3, 1],
            vec![3, 2],
            vec![3, 3],
        ];
        assert_eq!(values, expected);
    }

    #[test]
    fn with_repetition_of_longer_length() {
        let values: Vec<_> = permutations(vec![1, 2], Some(3), true).collect();
        let expected = vec![
            vec![1, 1, 1],
            vec![1, 1, 2],
            vec![1, 2, 1],
            vec![1, 2, 2],
            vec![2, 1, 1],
            vec![2, 1, 2],
            vec![2, 2, 1],
            vec![2, 2, 2],
        ];
        assert_eq!(values, expected);
    }

    #[test]
    fn with_repetition_defaults_to_full_length() {
        let values: Vec<_> = permutations(vec![1, 2, 3], None, true).collect();
        assert_eq!(values.len(), 27);
        assert_eq!(values[0], vec![1, 1, 1]);
        assert_eq!(values[26], vec![3, 3, 3]);
    }

    #[test]
    fn with_repetition_of_empty_domain() {
        let mut values = permutations(Vec::<i32>::new(), Some(1), true);
        assert_eq!(values.next(), None);
    }

    #[test]
    fn eager_equals_lazy() {
        let eager: Vec<_> = permutations(vec![1, 2, 3], None, false).collect();
        let mut lazy = permutations(vec![1, 2, 3], None, false);
        for row in &eager {
            assert_eq!(lazy.next().as_ref(), Some(row));
        }
        assert_eq!(lazy.next(), None);
    }

    #[test]
    fn clones_do_not_share_the_working_array() {
        let mut original = permutations(vec![1, 2, 3], None, false);
        assert_eq!(original.next(), Some(vec![1, 2, 3]));
        let mut copy = original.clone();
        // Advancing the original must not disturb the copy.
        assert_eq!(original.next(), Some(vec![2, 1, 3]));
        assert_eq!(original.next(), Some(vec![3, 1, 2]));
        assert_eq!(copy.next(), Some(vec![2, 1, 3]));
    }

    #[test]
    fn counts_match_closed_forms() {
        for (n, length, allow_repetition) in
            [(4, Some(2), false), (4, Some(2), true), (3, None, true)]
        {
            let count = permutations(0..n, length, allow_repetition).count();
            assert_eq!(
                count,
                permutation_count(n, length, allow_repetition).unwrap()
            );
        }
    }
}
