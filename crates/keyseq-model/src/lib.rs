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

//! # Keyseq Model
//!
//! The dynamic value model that key sequences are produced from. Rust values
//! carry no runtime shape information, so the values a caller wants to
//! classify are expressed in this model first.
//!
//! ## Modules
//!
//! - `class`: Runtime type identity (`Class`) with ancestor chains and the
//!   built-in class singletons.
//! - `key`: `Key`, `PropertyKey`, `MapKey` and `Symbol`.
//! - `value`: `Value`, single-pass iterator values (`IterValue`), the
//!   `HostObject` extension trait and the element and declared-key iterators.
//! - `collection`: `Array`, `Map` and `Set`.
//! - `typed`: Fixed-width numeric arrays (`TypedArray`, `TypedArrayKind`).
//! - `object`: Structured records with prototypes and enumerability
//!   (`Object`, `ObjectBuilder`, `PropertyKeys`).
//! - `json`: `From<serde_json::Value> for Value`.

pub mod class;
pub mod collection;
pub mod json;
pub mod key;
pub mod object;
pub mod typed;
pub mod value;
