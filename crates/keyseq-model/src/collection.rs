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

//! # Collections
//!
//! The three built-in collection shapes:
//!
//! - `Array`: a sequential collection of values.
//! - `Map`: a dictionary from [`MapKey`] to values, in insertion order.
//! - `Set`: a collection of distinct [`MapKey`] members, in insertion order.
//!
//! Each carries a class so that subclasses (or unrelated classes registered
//! by the caller) can be attached to the same storage.

use crate::class::Class;
use crate::key::MapKey;
use crate::value::Value;
use keyseq_core::ordered::OrderedMap;

/// A sequential collection.
#[derive(Debug, Clone)]
pub struct Array {
    class: Class,
    items: Vec<Value>,
}

impl Array {
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            class: Class::array().clone(),
            items,
        }
    }

    /// Replaces the class of the array.
    pub fn with_class(mut self, class: Class) -> Self {
        self.class = class;
        self
    }

    #[inline]
    pub fn class(&self) -> &Class {
        &self.class
    }

    #[inline]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }
}

impl Default for Array {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A dictionary collection that remembers insertion order.
#[derive(Debug, Clone)]
pub struct Map {
    class: Class,
    entries: OrderedMap<MapKey, Value>,
}

impl Map {
    pub fn new() -> Self {
        Self {
            class: Class::map().clone(),
            entries: OrderedMap::new(),
        }
    }

    pub fn with_class(mut self, class: Class) -> Self {
        self.class = class;
        self
    }

    #[inline]
    pub fn class(&self) -> &Class {
        &self.class
    }

    /// Stores `value` under `key`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<MapKey>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    #[inline]
    pub fn get(&self, key: &MapKey) -> Option<&Value> {
        self.entries.get(key)
    }

    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &MapKey> + '_ {
        self.entries.keys()
    }

    #[inline]
    pub fn entries(&self) -> std::slice::Iter<'_, (MapKey, Value)> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<MapKey>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// A collection of distinct members that remembers insertion order.
#[derive(Debug, Clone)]
pub struct Set {
    class: Class,
    members: OrderedMap<MapKey, ()>,
}

impl Set {
    pub fn new() -> Self {
        Self {
            class: Class::set().clone(),
            members: OrderedMap::new(),
        }
    }

    pub fn with_class(mut self, class: Class) -> Self {
        self.class = class;
        self
    }

    #[inline]
    pub fn class(&self) -> &Class {
        &self.class
    }

    /// Adds `member`, returning `false` if it was already present.
    pub fn insert(&mut self, member: impl Into<MapKey>) -> bool {
        self.members.insert(member.into(), ()).is_none()
    }

    #[inline]
    pub fn contains(&self, member: &MapKey) -> bool {
        self.members.contains_key(member)
    }

    #[inline]
    pub fn members(&self) -> impl ExactSizeIterator<Item = &MapKey> + Clone + '_ {
        self.members.keys()
    }

    #[inline]
    pub(crate) fn slots(&self) -> std::slice::Iter<'_, (MapKey, ())> {
        self.members.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for Set {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<MapKey>> FromIterator<K> for Set {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut set = Self::new();
        for member in iter {
            set.insert(member);
        }
        set
    }
}
