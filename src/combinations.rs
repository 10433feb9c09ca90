//! Combinations of a finite sequence, with and without replacement.
//!
//! A combination is a permutation restricted to canonical sorted index
//! order: the repeated-domain index stream is filtered to strictly
//! increasing index tuples (without replacement) or non-decreasing
//! ones (with replacement), so each combination is emitted exactly
//! once, in lexicographic order by element index.

use crate::counter::MixedRadixCounter;

/// Returns an iterator over the length-`length` combinations of
/// `domain`.
///
/// With `allow_repetition` an element may be chosen more than once.
/// A `length` of zero or an empty domain produce an empty sequence,
/// as does a `length` exceeding the domain size without repetition.
///
/// ```
/// use combiter::combinations;
///
/// let values: Vec<_> = combinations(vec![1, 2, 3], 2, false).collect();
/// assert_eq!(values, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// ```
pub fn combinations<D>(domain: D, length: usize, allow_repetition: bool) -> Combinations<D::Item>
where
    D: IntoIterator,
{
    let values: Vec<D::Item> = domain.into_iter().collect();
    log::debug!(
        "combinations of {} elements, length {}, repetition {}",
        values.len(),
        length,
        allow_repetition,
    );
    let counter = MixedRadixCounter::repeated(values.len(), length);
    Combinations {
        values,
        counter,
        allow_repetition,
    }
}

/// An iterator over the combinations of a sequence. See
/// [`combinations`].
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    values: Vec<T>,
    counter: MixedRadixCounter,
    allow_repetition: bool,
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        // Rejected tuples are retried in a loop; runs of rejections
        // near the end of a large domain must not grow the stack.
        loop {
            let indices = self.counter.next()?;
            let sorted = if self.allow_repetition {
                indices.windows(2).all(|pair| pair[0] <= pair[1])
            } else {
                indices.windows(2).all(|pair| pair[0] < pair[1])
            };
            if !sorted {
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
