//! Mixed-radix counting over index tuples.
//!
//! The counter is the index engine behind [`crate::product`],
//! [`crate::permutations`] (restricted-length path) and
//! [`crate::combinations`]: it enumerates every tuple of digits with
//! per-position radices, last position varying fastest, carrying left
//! on overflow.

/// A mixed-radix counter producing index tuples in lexicographic order.
///
/// Each position holds a digit in `[0, radix)` for that position's
/// radix. Incrementing advances the rightmost digit; a digit reaching
/// its radix resets to zero and carries into its left neighbour. A
/// carry past the leftmost digit exhausts the counter permanently.
///
/// A counter with zero positions, or with any radix of zero, is
/// exhausted at construction: its sequence is empty rather than a
/// single empty tuple.
#[derive(Debug, Clone)]
pub struct MixedRadixCounter {
    radices: Vec<usize>,
    digits: Vec<usize>,
    exhausted: bool,
}

impl MixedRadixCounter {
    /// Creates a counter with one position per radix in `radices`.
    pub fn new(radices: Vec<usize>) -> Self {
        let exhausted = radices.is_empty() || radices.iter().any(|&radix| radix == 0);
        let digits = vec![0; radices.len()];
        Self {
            radices,
            digits,
            exhausted,
        }
    }

    /// Creates a counter with `length` positions all sharing `radix`,
    /// for a single domain repeated across every output slot.
    pub fn repeated(radix: usize, length: usize) -> Self {
        Self::new(vec![radix; length])
    }

    /// Advances the digits by one, setting the exhaustion flag when
    /// the leftmost digit carries.
    fn increment(&mut self) {
        let mut position = self.digits.len();
        loop {
            if position == 0 {
                self.exhausted = true;
                return;
            }
            position -= 1;
            self.digits[position] += 1;
            if self.digits[position] < self.radices[position] {
                return;
            }
            self.digits[position] = 0;
        }
    }
}

impl Iterator for MixedRadixCounter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.digits.clone();
        self.increment();
        Some(current)
    }
}
