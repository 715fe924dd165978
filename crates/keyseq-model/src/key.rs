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

//! # Keys
//!
//! The vocabulary of key sequences:
//!
//! - `Symbol`: a unique, optionally described identity usable as a property key
//!   or map key.
//! - `PropertyKey`: the name of a record property, a string or a symbol.
//! - `MapKey`: the hashable subset of values that maps and sets store. Numbers
//!   compare with SameValueZero semantics: every NaN equals every other NaN and
//!   `-0` equals `+0`.
//! - `Key`: one element of a key sequence: a position, a property key or a
//!   stored map key.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// A unique identity. Every call to [`Symbol::new`] yields a symbol that is
/// equal only to itself and its clones, regardless of description.
#[derive(Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(Arc::from),
        }
    }

    /// Shorthand for a described symbol.
    #[inline]
    pub fn described(description: &str) -> Self {
        Self::new(Some(description))
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// The name of a record property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(String),
    Symbol(Symbol),
}

impl PropertyKey {
    /// Returns the numeric value of an array-index key: a canonical decimal
    /// integer (no sign, no leading zeros) below `u32::MAX`.
    ///
    /// ```rust
    /// # use keyseq_model::key::PropertyKey;
    /// assert_eq!(PropertyKey::from("42").array_index(), Some(42));
    /// assert_eq!(PropertyKey::from("042").array_index(), None);
    /// assert_eq!(PropertyKey::from("4294967295").array_index(), None);
    /// ```
    pub fn array_index(&self) -> Option<u32> {
        let Self::String(s) = self else {
            return None;
        };
        if s.is_empty() || (s.len() > 1 && s.starts_with('0')) {
            return None;
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        s.parse::<u32>().ok().filter(|&n| n != u32::MAX)
    }

    #[inline]
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Symbol(_) => None,
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(s: Symbol) -> Self {
        Self::Symbol(s)
    }
}

impl std::fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Symbol(s) => write!(f, "{}", s),
        }
    }
}

/// A value that can be stored as a map key or set member.
#[derive(Debug, Clone)]
pub enum MapKey {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
}

impl MapKey {
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Bit pattern used for hashing and equality; collapses every NaN into
    /// one and `-0` into `+0`.
    fn number_bits(n: f64) -> u64 {
        if n.is_nan() {
            f64::NAN.to_bits()
        } else if n == 0.0 {
            0
        } else {
            n.to_bits()
        }
    }
}

impl PartialEq for MapKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => Self::number_bits(*a) == Self::number_bits(*b),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for MapKey {}

impl std::hash::Hash for MapKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Undefined | Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Number(n) => Self::number_bits(*n).hash(state),
            Self::String(s) => s.hash(state),
            Self::Symbol(s) => s.hash(state),
        }
    }
}

impl From<&str> for MapKey {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for MapKey {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<f64> for MapKey {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for MapKey {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for MapKey {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Symbol> for MapKey {
    fn from(s: Symbol) -> Self {
        Self::Symbol(s)
    }
}

/// One element of a key sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A position: an array index, a character offset or an element count.
    Index(usize),
    /// A record property name.
    Property(PropertyKey),
    /// A key stored in a dictionary collection.
    Entry(MapKey),
}

impl Key {
    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the text of a string-valued property or entry key.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Property(p) => p.as_str(),
            Self::Entry(e) => e.as_str(),
        }
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

impl From<PropertyKey> for Key {
    fn from(p: PropertyKey) -> Self {
        Self::Property(p)
    }
}

impl From<MapKey> for Key {
    fn from(e: MapKey) -> Self {
        Self::Entry(e)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{}", i),
            Self::Property(p) => write!(f, "{}", p),
            Self::Entry(MapKey::Number(n)) => write!(f, "{}", n),
            Self::Entry(MapKey::String(s)) => f.write_str(s),
            Self::Entry(MapKey::Symbol(s)) => write!(f, "{}", s),
            Self::Entry(MapKey::Bool(b)) => write!(f, "{}", b),
            Self::Entry(MapKey::Null) => f.write_str("null"),
            Self::Entry(MapKey::Undefined) => f.write_str("undefined"),
        }
    }
}
