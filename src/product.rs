//! Cartesian products of finite sequences.
//!
//! Three forms: [`product`] over any number of same-type domains,
//! [`product_repeated`] over a single domain reused across a fixed
//! number of positions, and [`mixed_product`] over a pair of
//! differently-typed sequences. All enumerate with the last position
//! varying fastest.

use crate::counter::MixedRadixCounter;

/// Returns an iterator over the cartesian product of `domains`.
///
/// Each domain is materialized into an array at construction; the
/// elements never need to be comparable, generation works purely on
/// indices. If a domain turns out empty, the remaining domains are not
/// materialized at all and the product is immediately empty. A product
/// of zero domains is also empty.
///
/// ```
/// use combiter::product;
///
/// let mut pairs = product(vec![vec![1, 2], vec![3, 4]]);
/// assert_eq!(pairs.next(), Some(vec![1, 3]));
/// assert_eq!(pairs.next(), Some(vec![1, 4]));
/// assert_eq!(pairs.next(), Some(vec![2, 3]));
/// assert_eq!(pairs.next(), Some(vec![2, 4]));
/// assert_eq!(pairs.next(), None);
/// ```
pub fn product<I, D>(domains: I) -> CartesianProduct<D::Item>
where
    I: IntoIterator<Item = D>,
    D: IntoIterator,
{
    let mut materialized = Vec::new();
    for domain in domains {
        let domain: Vec<D::Item> = domain.into_iter().collect();
        let empty = domain.is_empty();
        materialized.push(domain);
        if empty {
            // Any empty domain empties the whole product; don't
            // consume the remaining domains.
            break;
        }
    }
    log::debug!(
        "cartesian product over {} domains, sizes {:?}",
        materialized.len(),
        materialized.iter().map(Vec::len).collect::<Vec<_>>(),
    );
    let counter = MixedRadixCounter::new(materialized.iter().map(Vec::len).collect());
    CartesianProduct {
        domains: materialized,
        counter,
    }
}

/// An iterator over the cartesian product of multiple domains.
/// See [`product`].
#[derive(Debug, Clone)]
pub struct CartesianProduct<T> {
    domains: Vec<Vec<T>>,
    counter: MixedRadixCounter,
}

impl<T: Clone> Iterator for CartesianProduct<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let indices = self.counter.next()?;
        Some(
            indices
                .iter()
                .zip(&self.domains)
                .map(|(&index, domain)| domain[index].clone())
                .collect(),
        )
    }
}

/// Returns an iterator over the cartesian product of `domain` with
/// itself across `repeated` positions.
///
/// The domain is materialized once and shared by all positions through
/// the index counter. `repeated == 0` or an empty domain produce an
/// empty sequence; `repeated == 1` produces the length-1 tuples in
/// domain order.
pub fn product_repeated<D>(domain: D, repeated: usize) -> RepeatedProduct<D::Item>
where
    D: IntoIterator,
{
    let domain: Vec<D::Item> = domain.into_iter().collect();
    let counter = MixedRadixCounter::repeated(domain.len(), repeated);
    RepeatedProduct { domain, counter }
}

/// An iterator over the cartesian product of a single domain with
/// itself. See [`product_repeated`].
#[derive(Debug, Clone)]
pub struct RepeatedProduct<T> {
    domain: Vec<T>,
    counter: MixedRadixCounter,
}

impl<T: Clone> Iterator for RepeatedProduct<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let indices = self.counter.next()?;
        Some(
            indices
                .iter()
                .map(|&index| self.domain[index].clone())
                .collect(),
        )
    }
}

/// Returns an iterator over the cartesian product of two
/// differently-typed sequences, as pairs.
///
/// Only the second sequence is materialized; the first is kept lazy
/// and advanced by one element per full sweep of the second. An empty
/// second sequence reports exhaustion on the first pull without
/// consuming the first sequence at all, so an unbounded first sequence
/// is safe in that case.
pub fn mixed_product<A, B>(first: A, second: B) -> MixedProduct<A::IntoIter, B::Item>
where
    A: IntoIterator,
    B: IntoIterator,
{
    MixedProduct {
        second: second.into_iter().collect(),
        first: first.into_iter(),
        current: None,
        position: 0,
    }
}

/// An iterator over pairs from two differently-typed sequences.
/// See [`mixed_product`].
#[derive(Debug, Clone)]
pub struct MixedProduct<I: Iterator, U> {
    first: I,
    second: Vec<U>,
    current: Option<I::Item>,
    position: usize,
}

impl<I, U> Iterator for MixedProduct<I, U>
where
    I: Iterator,
    I::Item: Clone,
    U: Clone,
{
    type Item = (I::Item, U);

    fn next(&mut self) -> Option<Self::Item> {
        if self.second.is_empty() {
            return None;
        }
        if self.position >= self.second.len() {
            self.current = None;
            self.position = 0;
        }
        if self.current.is_none() {
            self.current = Some(self.first.next()?);
        }
        let first = self.current.clone()?;
        let second = self.second[self.position].clone();
        self.position += 1;
        Some((first, second))
    }
}
