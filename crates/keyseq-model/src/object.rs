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

//! # Structured Records
//!
//! An `Object` is a record of named properties. Every property carries a value
//! and an `enumerable` flag, and an object may delegate to a prototype object
//! whose properties it inherits.
//!
//! Property keys of one object are reported in a fixed order: array-index
//! keys in ascending numeric order, then the remaining string keys in
//! insertion order, then symbol keys in insertion order. When inherited keys
//! are requested, the own object comes first and each prototype follows; a key
//! that an object closer to the start already has (enumerable or not) hides
//! the same key further up the chain.
//!
//! ```rust
//! use keyseq_model::object::{KeyFilter, Object};
//!
//! let base = Object::builder().property("inherited", 1).build();
//! let object = Object::builder()
//!     .prototype(base)
//!     .property("own", 2)
//!     .hidden("secret", 3)
//!     .build();
//!
//! let names = |filter| {
//!     object
//!         .property_keys(filter)
//!         .map(|k| k.to_string())
//!         .collect::<Vec<_>>()
//! };
//! assert_eq!(names(KeyFilter::default()), vec!["own"]);
//! assert_eq!(names(KeyFilter::all()), vec!["own", "secret", "inherited"]);
//! ```

use crate::class::Class;
use crate::key::PropertyKey;
use crate::value::Value;
use keyseq_core::ordered::OrderedMap;
use rustc_hash::FxHashSet;
use std::rc::Rc;

/// A property slot.
#[derive(Debug, Clone)]
pub struct Property {
    pub value: Value,
    pub enumerable: bool,
}

/// Selects which property keys [`Object::property_keys`] reports.
///
/// The default reports own, enumerable keys only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeyFilter {
    /// Also report keys inherited through the prototype chain.
    pub inherited: bool,
    /// Also report keys whose property is not enumerable.
    pub non_enumerable: bool,
}

impl KeyFilter {
    /// Reports every key: own and inherited, enumerable or not.
    #[inline]
    pub const fn all() -> Self {
        Self {
            inherited: true,
            non_enumerable: true,
        }
    }
}

/// A structured record with an optional prototype.
#[derive(Debug, Clone)]
pub struct Object {
    class: Class,
    properties: OrderedMap<PropertyKey, Property>,
    prototype: Option<Rc<Object>>,
}

impl Object {
    /// An empty plain object without prototype.
    pub fn new() -> Self {
        Self {
            class: Class::object().clone(),
            properties: OrderedMap::new(),
            prototype: None,
        }
    }

    #[inline]
    pub fn builder() -> ObjectBuilder {
        ObjectBuilder::new()
    }

    #[inline]
    pub fn class(&self) -> &Class {
        &self.class
    }

    #[inline]
    pub fn prototype(&self) -> Option<&Rc<Object>> {
        self.prototype.as_ref()
    }

    /// Number of own properties, enumerable or not.
    #[inline]
    pub fn own_len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn get_own(&self, key: &PropertyKey) -> Option<&Property> {
        self.properties.get(key)
    }

    /// Looks `key` up on this object, then along the prototype chain.
    pub fn get(&self, key: &PropertyKey) -> Option<&Value> {
        self.chain()
            .find_map(|o| o.properties.get(key))
            .map(|p| &p.value)
    }

    /// Iterates this object followed by its prototypes.
    pub fn chain(&self) -> impl Iterator<Item = &Object> + '_ {
        std::iter::successors(Some(self), |o| o.prototype.as_deref())
    }

    /// Own keys of this object alone, in reporting order.
    pub fn own_keys(&self) -> Vec<&PropertyKey> {
        let mut indices: Vec<(u32, &PropertyKey)> = Vec::new();
        let mut strings = Vec::new();
        let mut symbols = Vec::new();
        for key in self.properties.keys() {
            match key.array_index() {
                Some(index) => indices.push((index, key)),
                None if key.is_symbol() => symbols.push(key),
                None => strings.push(key),
            }
        }
        indices.sort_unstable_by_key(|(index, _)| *index);

        let mut keys = Vec::with_capacity(self.properties.len());
        keys.extend(indices.into_iter().map(|(_, key)| key));
        keys.extend(strings);
        keys.extend(symbols);
        keys
    }

    /// Lazily reports property keys selected by `filter`.
    #[inline]
    pub fn property_keys(&self, filter: KeyFilter) -> PropertyKeys<'_> {
        PropertyKeys::new(self, filter)
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Object`].
#[derive(Debug, Clone)]
pub struct ObjectBuilder {
    class: Class,
    properties: OrderedMap<PropertyKey, Property>,
    prototype: Option<Rc<Object>>,
}

impl ObjectBuilder {
    pub fn new() -> Self {
        Self {
            class: Class::object().clone(),
            properties: OrderedMap::new(),
            prototype: None,
        }
    }

    /// Sets the class of the object. Defaults to `Object`.
    pub fn class(mut self, class: Class) -> Self {
        self.class = class;
        self
    }

    /// Sets the object the built object inherits from.
    pub fn prototype(mut self, prototype: impl Into<Rc<Object>>) -> Self {
        self.prototype = Some(prototype.into());
        self
    }

    /// Defines an enumerable property.
    pub fn property(self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.define(key, value, true)
    }

    /// Defines a non-enumerable property.
    pub fn hidden(self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.define(key, value, false)
    }

    /// Defines a property. Redefining a key keeps its original position.
    pub fn define(
        mut self,
        key: impl Into<PropertyKey>,
        value: impl Into<Value>,
        enumerable: bool,
    ) -> Self {
        self.properties.insert(
            key.into(),
            Property {
                value: value.into(),
                enumerable,
            },
        );
        self
    }

    pub fn build(self) -> Object {
        Object {
            class: self.class,
            properties: self.properties,
            prototype: self.prototype,
        }
    }
}

impl Default for ObjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over the property keys of an object.
///
/// Keys are produced one prototype level at a time; a level is only inspected
/// once every key of the previous level has been pulled.
#[derive(Debug)]
pub struct PropertyKeys<'a> {
    filter: KeyFilter,
    level: Option<&'a Object>,
    pending: std::vec::IntoIter<&'a PropertyKey>,
    seen: FxHashSet<&'a PropertyKey>,
}

impl<'a> PropertyKeys<'a> {
    fn new(object: &'a Object, filter: KeyFilter) -> Self {
        let mut keys = Self {
            filter,
            level: None,
            pending: Vec::new().into_iter(),
            seen: FxHashSet::default(),
        };
        keys.load(object);
        keys
    }

    fn load(&mut self, object: &'a Object) {
        let mut selected = Vec::with_capacity(object.own_len());
        for key in object.own_keys() {
            if self.seen.contains(key) {
                continue;
            }
            let enumerable = object.properties.get(key).is_some_and(|p| p.enumerable);
            if enumerable || self.filter.non_enumerable {
                selected.push(key);
            }
        }
        if self.filter.inherited {
            self.seen.extend(object.properties.keys());
        }
        self.level = Some(object);
        self.pending = selected.into_iter();
    }
}

impl<'a> Iterator for PropertyKeys<'a> {
    type Item = &'a PropertyKey;

    fn next(&mut self) -> Option<&'a PropertyKey> {
        loop {
            if let Some(key) = self.pending.next() {
                return Some(key);
            }
            if !self.filter.inherited {
                self.level = None;
                return None;
            }
            let prototype = self.level?.prototype.as_deref();
            match prototype {
                Some(proto) => self.load(proto),
                None => {
                    self.level = None;
                    return None;
                }
            }
        }
    }
}

impl std::iter::FusedIterator for PropertyKeys<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Symbol;

    fn names(keys: PropertyKeys<'_>) -> Vec<String> {
        keys.map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_own_enumerable_by_default() {
        let object = Object::builder()
            .property("a", 1)
            .hidden("b", 2)
            .property("c", 3)
            .build();
        assert_eq!(names(object.property_keys(KeyFilter::default())), vec!["a", "c"]);
    }

    #[test]
    fn test_non_enumerable_included_on_request() {
        let object = Object::builder().property("a", 1).hidden("b", 2).build();
        let filter = KeyFilter {
            non_enumerable: true,
            ..KeyFilter::default()
        };
        assert_eq!(names(object.property_keys(filter)), vec!["a", "b"]);
    }

    #[test]
    fn test_key_order_indices_strings_symbols() {
        let tag = Symbol::described("tag");
        let object = Object::builder()
            .property(tag.clone(), true)
            .property("b", 1)
            .property("10", 2)
            .property("a", 3)
            .property("2", 4)
            .build();

        let keys: Vec<&PropertyKey> = object.own_keys();
        assert_eq!(keys.len(), 5);
        assert_eq!(keys[0], &PropertyKey::from("2"));
        assert_eq!(keys[1], &PropertyKey::from("10"));
        assert_eq!(keys[2], &PropertyKey::from("b"));
        assert_eq!(keys[3], &PropertyKey::from("a"));
        assert_eq!(keys[4], &PropertyKey::Symbol(tag));
    }

    #[test]
    fn test_inherited_keys_follow_own_keys() {
        let grand = Object::builder().property("g", 0).build();
        let parent = Object::builder().prototype(grand).property("p", 0).build();
        let child = Object::builder().prototype(parent).property("c", 0).build();

        let inherited = KeyFilter {
            inherited: true,
            ..KeyFilter::default()
        };
        assert_eq!(names(child.property_keys(inherited)), vec!["c", "p", "g"]);
        assert_eq!(names(child.property_keys(KeyFilter::default())), vec!["c"]);
    }

    #[test]
    fn test_shadowed_keys_are_reported_once() {
        let parent = Object::builder()
            .property("shared", 0)
            .property("masked", 0)
            .build();
        let child = Object::builder()
            .prototype(parent)
            .property("shared", 1)
            .hidden("masked", 1)
            .build();

        let inherited = KeyFilter {
            inherited: true,
            ..KeyFilter::default()
        };
        // `masked` is hidden on the child and hides the enumerable parent slot.
        assert_eq!(names(child.property_keys(inherited)), vec!["shared"]);
        assert_eq!(
            names(child.property_keys(KeyFilter::all())),
            vec!["shared", "masked"]
        );
    }

    #[test]
    fn test_lookup_walks_prototypes() {
        let parent = Object::builder().property("x", 1).build();
        let child = Object::builder().prototype(parent).property("y", 2).build();

        assert!(child.get(&"x".into()).is_some());
        assert!(child.get_own(&"x".into()).is_none());
        assert!(child.get(&"z".into()).is_none());
        assert_eq!(child.chain().count(), 2);
    }

    #[test]
    fn test_property_keys_is_fused() {
        let object = Object::builder().property("only", 1).build();
        let mut keys = object.property_keys(KeyFilter::all());
        assert!(keys.next().is_some());
        assert!(keys.next().is_none());
        assert!(keys.next().is_none());
    }
}
