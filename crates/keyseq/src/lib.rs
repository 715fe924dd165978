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

//! # Keyseq
//!
//! Lazy key sequences for values of unknown shape. Given any [`Value`], the
//! classifier works out which key domain describes it (positions of a
//! sequence, stored keys of a dictionary, property names of a record, or
//! nothing at all) and yields those keys one at a time.
//!
//! ## Modules
//!
//! - `classifier`: The dispatch rules (`select_strategy`) and the entry
//!   points `classify` and `keys`.
//! - `keys`: `Keys`, the lazy, single-pass, fused key iterator.
//! - `options`: `KeysOptions`, its builder and JSON loading, plus the type
//!   identifiers (`TypeRef`, `TypeMatcher`) that extend the built-in rules.
//! - `bind`: Partial application (`bind`, `BoundKeys`) and the `KeysExt`
//!   method-call extension.
//!
//! ## Example
//!
//! ```rust
//! use keyseq::bind::KeysExt;
//! use keyseq::options::KeysOptions;
//! use keyseq_model::collection::Map;
//! use keyseq_model::object::Object;
//! use keyseq_model::value::Value;
//!
//! let mut map = Map::new();
//! map.insert("key", "value");
//! let map = Value::from(map);
//! assert_eq!(map.keys().map(|k| k.to_string()).collect::<Vec<_>>(), vec!["key"]);
//!
//! let proto = Object::builder().property("key", 1).build();
//! let record = Value::from(Object::builder().prototype(proto).build());
//! let options = KeysOptions::builder().inherited(true).build();
//! assert_eq!(record.keys_with(&options).count(), 1);
//! ```
//!
//! [`Value`]: keyseq_model::value::Value

pub mod bind;
pub mod classifier;
pub mod keys;
pub mod options;
