//! Simple single-pass iterator transforms that compose with the
//! generators: running accumulation, selector-based filtering, bounded
//! cycling, run-length grouping, inverse filtering, teeing and zipping
//! with fill values.
//!
//! Everything here is a single-cursor wrapper; none of it shares
//! machinery with the index generators.

/// Extension methods on any [`Iterator`].
pub trait IterTools: Iterator {
    /// Returns an iterator of consecutively accumulated values. The
    /// first element passes through unchanged.
    ///
    /// ```
    /// use combiter::IterTools;
    ///
    /// let values: Vec<_> = [1, 2, 3, 4].into_iter().accumulate(|a, b| a + b).collect();
    /// assert_eq!(values, vec![1, 3, 6, 10]);
    /// ```
    fn accumulate<F>(self, accumulate: F) -> Accumulate<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        Accumulate {
            iter: self,
            accumulate,
            total: None,
        }
    }

    /// Returns an iterator keeping only the elements whose paired
    /// selector is `true`. Stops when either side is exhausted.
    fn compress<S>(self, selectors: S) -> Compress<Self, S::IntoIter>
    where
        Self: Sized,
        S: IntoIterator<Item = bool>,
    {
        Compress {
            data: self,
            selectors: selectors.into_iter(),
        }
    }

    /// Returns an iterator of exactly `times` passes over the
    /// underlying iterator. The unbounded variant is
    /// [`Iterator::cycle`].
    fn cycle_times(self, times: usize) -> CycleTimes<Self>
    where
        Self: Sized + Clone,
    {
        CycleTimes {
            original: self.clone(),
            iter: self,
            remaining: times,
        }
    }

    /// Returns an iterator of consecutive `(key, group)` pairs, where
    /// a group is cut as soon as the key function's output changes.
    /// Sort by the same key first to group all equal keys together.
    fn grouped_by<K, F>(self, key: F) -> Grouped<Self, F, K>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: PartialEq,
    {
        Grouped {
            iter: self,
            key,
            current: None,
        }
    }

    /// Returns an iterator of the elements for which `predicate` is
    /// false.
    fn reject<P>(self, predicate: P) -> Reject<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Reject {
            iter: self,
            predicate,
        }
    }

    /// Returns `n` independent cursors over the iterator. Each is a
    /// deep copy of the current iteration state; advancing one never
    /// affects another.
    fn tee(self, n: usize) -> Vec<Self>
    where
        Self: Sized + Clone,
    {
        (0..n).map(|_| self.clone()).collect()
    }
}

impl<I: Iterator> IterTools for I {}

/// An iterator accumulating a running fold. See
/// [`IterTools::accumulate`].
#[derive(Debug, Clone)]
pub struct Accumulate<I: Iterator, F> {
    iter: I,
    accumulate: F,
    total: Option<I::Item>,
}

impl<I, F> Iterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.iter.next()?;
        let total = match self.total.take() {
            Some(total) => (self.accumulate)(total, next),
            None => next,
        };
        self.total = Some(total.clone());
        Some(total)
    }
}

/// An iterator filtering data by paired boolean selectors. See
/// [`IterTools::compress`].
#[derive(Debug, Clone)]
pub struct Compress<I, S> {
    data: I,
    selectors: S,
}

impl<I, S> Iterator for Compress<I, S>
where
    I: Iterator,
    S: Iterator<Item = bool>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let data = self.data.next()?;
            let selected = self.selectors.next()?;
            if selected {
                return Some(data);
            }
        }
    }
}

/// An iterator of a fixed number of passes over another iterator. See
/// [`IterTools::cycle_times`].
#[derive(Debug, Clone)]
pub struct CycleTimes<I> {
    original: I,
    iter: I,
    remaining: usize,
}

impl<I> Iterator for CycleTimes<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        if let Some(item) = self.iter.next() {
            return Some(item);
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            return None;
        }
        self.iter = self.original.clone();
        self.iter.next()
    }
}

/// An iterator of consecutive key/group pairs. See
/// [`IterTools::grouped_by`].
#[derive(Debug, Clone)]
pub struct Grouped<I: Iterator, F, K> {
    iter: I,
    key: F,
    current: Option<(K, Vec<I::Item>)>,
}

impl<I, F, K> Iterator for Grouped<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = (K, Vec<I::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        let (current_key, mut current_values) = match self.current.take() {
            Some(group) => group,
            None => {
                let item = self.iter.next()?;
                let key = (self.key)(&item);
                (key, vec![item])
            }
        };
        while let Some(item) = self.iter.next() {
            let key = (self.key)(&item);
            if key == current_key {
                current_values.push(item);
            } else {
                // The new item opens the next group.
                self.current = Some((key, vec![item]));
                return Some((current_key, current_values));
            }
        }
        Some((current_key, current_values))
    }
}

/// An inverse filter. See [`IterTools::reject`].
#[derive(Debug, Clone)]
pub struct Reject<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> Iterator for Reject<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if !(self.predicate)(&item) {
                return Some(item);
            }
        }
    }
}

/// Returns an iterator of pairs continuing until the longer of the
/// two sequences is exhausted, substituting the corresponding fill
/// value for the shorter side.
///
/// ```
/// use combiter::adaptors::zip_longest;
///
/// let values: Vec<_> = zip_longest(vec![1, 2, 3, 4], vec![5, 6], 0, -1).collect();
/// assert_eq!(values, vec![(1, 5), (2, 6), (3, -1), (4, -1)]);
/// ```
pub fn zip_longest<A, B>(
    first: A,
    second: B,
    first_fill: A::Item,
    second_fill: B::Item,
) -> ZipLongest<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    ZipLongest {
        first: first.into_iter(),
        second: second.into_iter(),
        first_fill,
        second_fill,
    }
}

/// An iterator zipping to the longer sequence. See [`zip_longest`].
#[derive(Debug, Clone)]
pub struct ZipLongest<A: Iterator, B: Iterator> {
    first: A,
    second: B,
    first_fill: A::Item,
    second_fill: B::Item,
}

impl<A, B> Iterator for ZipLongest<A, B>
where
    A: Iterator,
    B: Iterator,
    A::Item: Clone,
    B::Item: Clone,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.first.next(), self.second.next()) {
            (None, None) => None,
            (first, second) => Some((
                first.unwrap_or_else(|| self.first_fill.clone()),
                second.unwrap_or_else(|| self.second_fill.clone()),
            )),
        }
    }
}

/// Returns an unbounded counter starting at `start` and stepping by
/// `step`.
pub fn counter(start: f64, step: f64) -> Counter {
    Counter {
        current: start,
        step,
    }
}

/// A simple arithmetic counter. See [`counter`].
#[derive(Debug, Clone)]
pub struct Counter {
    current: f64,
    step: f64,
}

impl Iterator for Counter {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current;
        self.current += self.step;
        Some(current)
    }
}
