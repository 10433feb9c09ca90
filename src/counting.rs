//! Closed-form result counts for the generators.
//!
//! All arithmetic is checked: index counts are assumed to fit a
//! `usize`, and a count that doesn't is reported as
//! [`CombiterError::CountOverflow`] rather than wrapped. The
//! `*_count` functions mirror the generators' empty-result policy
//! (a requested length of zero counts as zero results, not one), so
//! they can be compared directly against exhaustive enumeration.

use crate::CombiterError;

/// Returns `n!`.
pub fn factorial(n: usize) -> Result<usize, CombiterError> {
    (2..=n).try_fold(1usize, |accumulated, factor| {
        accumulated
            .checked_mul(factor)
            .ok_or(CombiterError::CountOverflow {
                operation: format!("{}!", n),
            })
    })
}

/// Returns the binomial coefficient `C(n, k)`, zero when `k > n`.
pub fn binomial(n: usize, k: usize) -> Result<usize, CombiterError> {
    if k > n {
        return Ok(0);
    }
    let k = k.min(n - k);
    let mut result = 1usize;
    for i in 1..=k {
        // Multiply before dividing; the division is exact at every
        // step.
        result = result
            .checked_mul(n - k + i)
            .ok_or(CombiterError::CountOverflow {
                operation: format!("C({}, {})", n, k),
            })?
            / i;
    }
    Ok(result)
}

/// Returns the number of results [`crate::permutations`] yields for a
/// domain of `n` elements.
pub fn permutation_count(
    n: usize,
    length: Option<usize>,
    allow_repetition: bool,
) -> Result<usize, CombiterError> {
    let k = length.unwrap_or(n);
    if k == 0 {
        return Ok(0);
    }
    if allow_repetition {
        let mut result = 1usize;
        for _ in 0..k {
            result = result
                .checked_mul(n)
                .ok_or(CombiterError::CountOverflow {
                    operation: format!("{}^{}", n, k),
                })?;
        }
        Ok(result)
    } else if k > n {
        Ok(0)
    } else {
        // n! / (n - k)!
        (n - k + 1..=n).try_fold(1usize, |accumulated, factor| {
            accumulated
                .checked_mul(factor)
                .ok_or(CombiterError::CountOverflow {
                    operation: format!("{}! / {}!", n, n - k),
                })
        })
    }
}

/// Returns the number of results [`crate::combinations`] yields for a
/// domain of `n` elements.
pub fn combination_count(
    n: usize,
    length: usize,
    allow_repetition: bool,
) -> Result<usize, CombiterError> {
    if length == 0 {
        return Ok(0);
    }
    if allow_repetition {
        if n == 0 {
            return Ok(0);
        }
        let multiset_size = n
            .checked_add(length - 1)
            .ok_or(CombiterError::CountOverflow {
                operation: format!("C({} + {} - 1, {})", n, length, length),
            })?;
        binomial(multiset_size, length)
    } else {
        binomial(n, length)
    }
}

/// Returns the number of tuples [`crate::product`] yields for domains
/// of the given sizes. A product of zero domains is empty.
pub fn product_count(sizes: &[usize]) -> Result<usize, CombiterError> {
    if sizes.is_empty() {
        return Ok(0);
    }
    sizes.iter().try_fold(1usize, |accumulated, &size| {
        accumulated
            .checked_mul(size)
            .ok_or(CombiterError::CountOverflow {
                operation: format!("product of domain sizes {:?}", sizes),
            })
    })
}
