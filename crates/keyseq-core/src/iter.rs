// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Iterator Adapters
//!
//! Two small adapters used when producing key sequences.
//!
//! `Counted<I>` pulls from an underlying iterator and yields `0, 1, 2, ...`,
//! one position per element pulled. Elements are never buffered, so wrapping a
//! single-pass source keeps it single-pass: the counter advances the source
//! exactly as far as the caller advances the counter.
//!
//! `MaybeIter<I>` wraps an `Option<I>` and behaves as an empty iterator when
//! there is nothing to iterate.
//!
//! ## Usage
//!
//! ```rust
//! use keyseq_core::iter::{Counted, MaybeIter};
//!
//! let positions: Vec<usize> = Counted::new("héllo".chars()).collect();
//! assert_eq!(positions, vec![0, 1, 2, 3, 4]);
//!
//! let absent: MaybeIter<std::vec::IntoIter<u8>> = MaybeIter::new(None);
//! assert_eq!(absent.count(), 0);
//! ```

use std::iter::FusedIterator;

/// Yields the running position of every element of the wrapped iterator.
///
/// Once the wrapped iterator reports exhaustion, `Counted` stays exhausted,
/// even if the wrapped iterator would resume.
///
/// # Examples
///
/// ```rust
/// # use keyseq_core::iter::Counted;
///
/// let mut counted = Counted::new(["a", "b"].into_iter());
/// assert_eq!(counted.next(), Some(0));
/// assert_eq!(counted.next(), Some(1));
/// assert_eq!(counted.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Counted<I> {
    inner: Option<I>,
    position: usize,
}

impl<I> Counted<I> {
    /// Wraps `inner`; the first element pulled is reported as position `0`.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self {
            inner: Some(inner),
            position: 0,
        }
    }

    /// Returns the number of positions yielded so far.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keyseq_core::iter::Counted;
    ///
    /// let mut counted = Counted::new(0..10);
    /// counted.next();
    /// counted.next();
    /// assert_eq!(counted.yielded(), 2);
    /// ```
    #[inline]
    pub fn yielded(&self) -> usize {
        self.position
    }

    /// Returns `true` once the wrapped iterator has been exhausted.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.inner.is_none()
    }
}

impl<I: Iterator> Iterator for Counted<I> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let inner = self.inner.as_mut()?;
        match inner.next() {
            Some(_) => {
                let position = self.position;
                self.position += 1;
                Some(position)
            }
            None => {
                // Drop the source so a resumable iterator cannot restart us.
                self.inner = None;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), |i| i.size_hint())
    }
}

impl<I: Iterator> FusedIterator for Counted<I> {}

impl<I: ExactSizeIterator> ExactSizeIterator for Counted<I> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, |i| i.len())
    }
}

/// An iterator that may or may not be present.
///
/// # Examples
///
/// ```rust
/// # use keyseq_core::iter::MaybeIter;
///
/// let present = MaybeIter::new(Some(1..3));
/// let absent: MaybeIter<std::ops::Range<i32>> = MaybeIter::new(None);
///
/// assert_eq!(present.collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(absent.collect::<Vec<_>>(), Vec::<i32>::new());
/// ```
#[derive(Debug, Clone)]
pub struct MaybeIter<I> {
    inner: Option<I>,
}

impl<I> MaybeIter<I> {
    #[inline]
    pub fn new(inner: Option<I>) -> Self {
        Self { inner }
    }

    /// An iterator that yields nothing.
    #[inline]
    pub fn empty() -> Self {
        Self { inner: None }
    }
}

impl<I> Default for MaybeIter<I> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<I: Iterator> Iterator for MaybeIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), |i| i.size_hint())
    }
}

impl<I: FusedIterator> FusedIterator for MaybeIter<I> {}

impl<I: ExactSizeIterator> ExactSizeIterator for MaybeIter<I> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, |i| i.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Yields `None` once after `pause_at` elements, then resumes.
    struct Hiccup {
        next: usize,
        end: usize,
        pause_at: usize,
        paused: bool,
    }

    impl Iterator for Hiccup {
        type Item = usize;

        fn next(&mut self) -> Option<usize> {
            if self.next == self.pause_at && !self.paused {
                self.paused = true;
                return None;
            }
            if self.next >= self.end {
                return None;
            }
            self.next += 1;
            Some(self.next - 1)
        }
    }

    #[test]
    fn test_counted_yields_positions_not_elements() {
        let counted = Counted::new(vec!["x", "y", "z"].into_iter());
        assert_eq!(counted.collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_counted_empty_source() {
        let mut counted = Counted::new(std::iter::empty::<u8>());
        assert_eq!(counted.next(), None);
        assert!(counted.is_exhausted());
        assert_eq!(counted.yielded(), 0);
    }

    #[test]
    fn test_counted_pulls_lazily() {
        let pulled = Cell::new(0);
        let source = std::iter::from_fn(|| {
            pulled.set(pulled.get() + 1);
            Some(())
        });
        let mut counted = Counted::new(source);

        assert_eq!(pulled.get(), 0);
        assert_eq!(counted.next(), Some(0));
        assert_eq!(pulled.get(), 1);
        assert_eq!(counted.next(), Some(1));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_counted_stays_exhausted() {
        let source = Hiccup {
            next: 0,
            end: 4,
            pause_at: 2,
            paused: false,
        };
        let mut counted = Counted::new(source);

        assert_eq!(counted.next(), Some(0));
        assert_eq!(counted.next(), Some(1));
        assert_eq!(counted.next(), None);
        // The source would resume here, the counter must not.
        assert_eq!(counted.next(), None);
        assert_eq!(counted.yielded(), 2);
    }

    #[test]
    fn test_counted_exact_size() {
        let mut counted = Counted::new(0..5);
        assert_eq!(counted.len(), 5);
        counted.next();
        assert_eq!(counted.len(), 4);
        counted.by_ref().for_each(drop);
        assert_eq!(counted.len(), 0);
        assert_eq!(counted.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_maybe_iter_some_and_none() {
        let mut some = MaybeIter::new(Some([7, 8].into_iter()));
        assert_eq!(some.len(), 2);
        assert_eq!(some.next(), Some(7));
        assert_eq!(some.next(), Some(8));
        assert_eq!(some.next(), None);

        let mut none: MaybeIter<std::vec::IntoIter<i32>> = MaybeIter::default();
        assert_eq!(none.size_hint(), (0, Some(0)));
        assert_eq!(none.next(), None);
    }
}
