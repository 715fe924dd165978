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

//! # Key Sequences
//!
//! `Keys` is the lazy sequence handed out by the classifier. It is a plain
//! Rust iterator: `Some(key)` is the next key, `None` marks the end. A `Keys`
//! is single-pass and fused: once it has returned `None` it never yields
//! again, even if the value behind it would.
//!
//! Every variant pulls on demand. In particular, keys of an iterator value are
//! produced by counting the iterator's elements as they are pulled, so the
//! iterator is advanced exactly as far as the keys are consumed.

use crate::classifier::Strategy;
use keyseq_core::iter::{Counted, MaybeIter};
use keyseq_model::key::Key;
use keyseq_model::object::PropertyKeys;
use keyseq_model::value::{DeclaredKeys, Elements};
use std::iter::FusedIterator;
use std::str::Chars;

pub(crate) enum Source<'a> {
    Count(Counted<Elements<'a>>),
    CharOffsets(Counted<Chars<'a>>),
    Declared(DeclaredKeys<'a>),
    Properties(MaybeIter<PropertyKeys<'a>>),
    Empty,
}

/// A lazy, single-pass sequence of keys.
pub struct Keys<'a> {
    strategy: Strategy,
    source: Source<'a>,
    finished: bool,
}

impl<'a> Keys<'a> {
    pub(crate) fn new(strategy: Strategy, source: Source<'a>) -> Self {
        Self {
            strategy,
            source,
            finished: false,
        }
    }

    /// An empty sequence.
    pub fn empty() -> Self {
        Self::new(Strategy::Empty, Source::Empty)
    }

    /// The strategy that produced this sequence.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns `true` once the sequence has reported its end.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn pull(&mut self) -> Option<Key> {
        match &mut self.source {
            Source::Count(counted) => counted.next().map(Key::Index),
            Source::CharOffsets(counted) => counted.next().map(Key::Index),
            Source::Declared(keys) => keys.next(),
            Source::Properties(keys) => keys.next().cloned().map(Key::Property),
            Source::Empty => None,
        }
    }
}

impl Iterator for Keys<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        if self.finished {
            return None;
        }
        let key = self.pull();
        if key.is_none() {
            self.finished = true;
            self.source = Source::Empty;
        }
        key
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        match &self.source {
            Source::Count(counted) => counted.size_hint(),
            Source::CharOffsets(counted) => counted.size_hint(),
            Source::Declared(keys) => keys.size_hint(),
            Source::Properties(keys) => keys.size_hint(),
            Source::Empty => (0, Some(0)),
        }
    }
}

impl FusedIterator for Keys<'_> {}

impl std::fmt::Debug for Keys<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keys")
            .field("strategy", &self.strategy)
            .field("finished", &self.finished)
            .finish()
    }
}

impl Default for Keys<'_> {
    fn default() -> Self {
        Self::empty()
    }
}
