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

//! # Keyseq Core
//!
//! Foundational building blocks shared by the keyseq crates. Nothing in here
//! knows about dynamic values; these are plain, generic helpers.
//!
//! ## Modules
//!
//! - `iter`: Iterator adapters. `Counted<I>` replaces every element of an
//!   underlying iterator with its running position, and `MaybeIter<I>` turns
//!   an `Option<I>` into an iterator that is empty for `None`.
//! - `ordered`: `OrderedMap<K, V>`, a hash map that remembers insertion order,
//!   backed by a dense entry vector and an `FxHashMap` position index.
//!
//! Refer to each module for detailed APIs and examples.

pub mod iter;
pub mod ordered;
