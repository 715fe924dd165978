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

//! # Dynamic Values
//!
//! `Value` is a value of unknown shape: a primitive, a character sequence, one
//! of the built-in collections, a typed array, a single-pass iterator, a
//! structured record, or a host object supplied by the embedding application.
//!
//! Two capabilities of every value are exposed here, independently of any
//! classification policy:
//!
//! - [`Value::elements`]: what iterating the value yields.
//! - [`Value::declared_keys`]: the key sequence the value itself declares.
//!
//! ## Iterators
//!
//! `Value::Iterator` wraps a shared, single-pass source. Clones of the value
//! share one cursor, so pulling through any clone advances all of them.
//!
//! ```rust
//! use keyseq_model::value::Value;
//!
//! let it = Value::iterator(vec![Value::from("a"), Value::from("b")].into_iter());
//! let alias = it.clone();
//! assert_eq!(it.elements().count(), 2);
//! assert_eq!(alias.elements().count(), 0);
//! ```
//!
//! ## Host objects
//!
//! Types the model does not know about implement [`HostObject`] and are
//! wrapped with [`Value::host`]. Every method except `class` has a default
//! that describes a value with nothing to iterate.

use crate::class::Class;
use crate::collection::{Array, Map, Set};
use crate::key::{Key, MapKey, PropertyKey, Symbol};
use crate::object::Object;
use crate::typed::{TypedArray, TypedValues};
use std::borrow::Cow;
use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

/// A value type defined outside the model.
pub trait HostObject: std::fmt::Debug {
    /// The runtime class of the value.
    fn class(&self) -> &Class;

    /// Returns `true` if the value is itself a pull-based iterator.
    fn is_iterator(&self) -> bool {
        false
    }

    /// What iterating the value yields.
    fn elements(&self) -> Box<dyn Iterator<Item = Value> + '_> {
        Box::new(std::iter::empty())
    }

    /// The key sequence the value declares for itself.
    fn keys(&self) -> Box<dyn Iterator<Item = Key> + '_> {
        Box::new(std::iter::empty())
    }

    /// Named properties of the value, if it has any.
    fn properties(&self) -> Option<&Object> {
        None
    }
}

/// A shared single-pass source of values.
#[derive(Clone)]
pub struct IterValue(Rc<RefCell<Box<dyn Iterator<Item = Value>>>>);

impl IterValue {
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Value> + 'static,
    {
        Self(Rc::new(RefCell::new(Box::new(iter))))
    }

    /// Pulls the next value. A source that is already being pulled (a
    /// re-entrant pull from inside the source itself) reports exhaustion.
    pub fn pull(&self) -> Option<Value> {
        self.0.try_borrow_mut().ok()?.next()
    }

    /// Returns `true` if both handles share one source.
    #[inline]
    pub fn ptr_eq(&self, other: &IterValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for IterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("IterValue(..)")
    }
}

/// A value of unknown shape.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
    Array(Array),
    Map(Map),
    Set(Set),
    TypedArray(TypedArray),
    Iterator(IterValue),
    Object(Object),
    Host(Rc<dyn HostObject>),
}

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Bool,
    Number,
    String,
    Symbol,
    Array,
    Map,
    Set,
    TypedArray,
    Iterator,
    Object,
    Host,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::Array => "array",
            Self::Map => "map",
            Self::Set => "set",
            Self::TypedArray => "typed_array",
            Self::Iterator => "iterator",
            Self::Object => "object",
            Self::Host => "host",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Wraps a single-pass source.
    pub fn iterator<I>(iter: I) -> Self
    where
        I: Iterator<Item = Value> + 'static,
    {
        Self::Iterator(IterValue::new(iter))
    }

    /// Wraps a host object.
    pub fn host<H>(host: H) -> Self
    where
        H: HostObject + 'static,
    {
        Self::Host(Rc::new(host))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined => ValueKind::Undefined,
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Symbol(_) => ValueKind::Symbol,
            Self::Array(_) => ValueKind::Array,
            Self::Map(_) => ValueKind::Map,
            Self::Set(_) => ValueKind::Set,
            Self::TypedArray(_) => ValueKind::TypedArray,
            Self::Iterator(_) => ValueKind::Iterator,
            Self::Object(_) => ValueKind::Object,
            Self::Host(_) => ValueKind::Host,
        }
    }

    /// The runtime class, for values that have one. Primitives, strings and
    /// iterators have none.
    pub fn class(&self) -> Option<&Class> {
        match self {
            Self::Array(a) => Some(a.class()),
            Self::Map(m) => Some(m.class()),
            Self::Set(s) => Some(s.class()),
            Self::TypedArray(t) => Some(t.class()),
            Self::Object(o) => Some(o.class()),
            Self::Host(h) => Some(h.class()),
            _ => None,
        }
    }

    /// Returns `true` for values without identity or structure: `undefined`,
    /// `null`, booleans, numbers, strings and symbols.
    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Undefined
                | Self::Null
                | Self::Bool(_)
                | Self::Number(_)
                | Self::String(_)
                | Self::Symbol(_)
        )
    }

    /// Returns `true` if the value is a pull-based iterator.
    pub fn is_iterator(&self) -> bool {
        match self {
            Self::Iterator(_) => true,
            Self::Host(h) => h.is_iterator(),
            _ => false,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Named properties, for records and host objects that have them.
    pub fn properties(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            Self::Host(h) => h.properties(),
            _ => None,
        }
    }

    /// What iterating the value yields.
    ///
    /// Arrays yield their items, maps `[key, value]` pairs, sets their members,
    /// strings one string per character, typed arrays their numbers, iterators
    /// whatever they pull and host objects their elements. Records and the
    /// remaining primitives are not iterable and yield nothing.
    pub fn elements(&self) -> Elements<'_> {
        let inner = match self {
            Self::Array(a) => ElementsInner::Items(a.items().iter()),
            Self::Map(m) => ElementsInner::Entries(m.entries()),
            Self::Set(s) => ElementsInner::Members(s.slots()),
            Self::String(s) => ElementsInner::Chars(s.chars()),
            Self::TypedArray(t) => ElementsInner::Numbers(t.values()),
            Self::Iterator(i) => ElementsInner::Pull(i),
            Self::Host(h) => ElementsInner::Host(h.elements()),
            _ => ElementsInner::Empty,
        };
        Elements { inner }
    }

    /// The key sequence the value declares.
    ///
    /// Arrays and typed arrays declare their indices, maps their stored keys,
    /// sets their members and host objects whatever their `keys` reports.
    /// Everything else declares nothing.
    pub fn declared_keys(&self) -> DeclaredKeys<'_> {
        let inner = match self {
            Self::Array(a) => DeclaredInner::Indices(0..a.len()),
            Self::TypedArray(t) => DeclaredInner::Indices(0..t.len()),
            Self::Map(m) => DeclaredInner::Entries(m.entries()),
            Self::Set(s) => DeclaredInner::Members(s.slots()),
            Self::Host(h) => DeclaredInner::Host(h.keys()),
            _ => DeclaredInner::Empty,
        };
        DeclaredKeys { inner }
    }
}

enum ElementsInner<'a> {
    Items(std::slice::Iter<'a, Value>),
    Entries(std::slice::Iter<'a, (MapKey, Value)>),
    Members(std::slice::Iter<'a, (MapKey, ())>),
    Chars(std::str::Chars<'a>),
    Numbers(TypedValues<'a>),
    Pull(&'a IterValue),
    Host(Box<dyn Iterator<Item = Value> + 'a>),
    Empty,
}

/// Iterator over the elements of a value. See [`Value::elements`].
pub struct Elements<'a> {
    inner: ElementsInner<'a>,
}

impl<'a> Iterator for Elements<'a> {
    type Item = Cow<'a, Value>;

    fn next(&mut self) -> Option<Cow<'a, Value>> {
        match &mut self.inner {
            ElementsInner::Items(it) => it.next().map(Cow::Borrowed),
            ElementsInner::Entries(it) => it.next().map(|(k, v)| {
                Cow::Owned(Value::Array(Array::new(vec![
                    Value::from(k.clone()),
                    v.clone(),
                ])))
            }),
            ElementsInner::Members(it) => {
                it.next().map(|(k, _)| Cow::Owned(Value::from(k.clone())))
            }
            ElementsInner::Chars(it) => {
                it.next().map(|c| Cow::Owned(Value::String(c.to_string())))
            }
            ElementsInner::Numbers(it) => it.next().map(|n| Cow::Owned(Value::Number(n))),
            ElementsInner::Pull(source) => source.pull().map(Cow::Owned),
            ElementsInner::Host(it) => it.next().map(Cow::Owned),
            ElementsInner::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            ElementsInner::Items(it) => it.size_hint(),
            ElementsInner::Entries(it) => it.size_hint(),
            ElementsInner::Members(it) => it.size_hint(),
            ElementsInner::Chars(it) => it.size_hint(),
            ElementsInner::Numbers(it) => it.size_hint(),
            ElementsInner::Pull(_) => (0, None),
            ElementsInner::Host(it) => it.size_hint(),
            ElementsInner::Empty => (0, Some(0)),
        }
    }
}

impl std::fmt::Debug for Elements<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Elements")
            .field("size_hint", &self.size_hint())
            .finish()
    }
}

enum DeclaredInner<'a> {
    Indices(Range<usize>),
    Entries(std::slice::Iter<'a, (MapKey, Value)>),
    Members(std::slice::Iter<'a, (MapKey, ())>),
    Host(Box<dyn Iterator<Item = Key> + 'a>),
    Empty,
}

/// Iterator over the declared keys of a value. See [`Value::declared_keys`].
pub struct DeclaredKeys<'a> {
    inner: DeclaredInner<'a>,
}

impl Iterator for DeclaredKeys<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        match &mut self.inner {
            DeclaredInner::Indices(range) => range.next().map(Key::Index),
            DeclaredInner::Entries(it) => it.next().map(|(k, _)| Key::Entry(k.clone())),
            DeclaredInner::Members(it) => it.next().map(|(k, _)| Key::Entry(k.clone())),
            DeclaredInner::Host(it) => it.next(),
            DeclaredInner::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            DeclaredInner::Indices(range) => range.size_hint(),
            DeclaredInner::Entries(it) => it.size_hint(),
            DeclaredInner::Members(it) => it.size_hint(),
            DeclaredInner::Host(it) => it.size_hint(),
            DeclaredInner::Empty => (0, Some(0)),
        }
    }
}

impl std::fmt::Debug for DeclaredKeys<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeclaredKeys")
            .field("size_hint", &self.size_hint())
            .finish()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Self::Symbol(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(Array::new(items))
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Self::Map(m)
    }
}

impl From<Set> for Value {
    fn from(s: Set) -> Self {
        Self::Set(s)
    }
}

impl From<TypedArray> for Value {
    fn from(t: TypedArray) -> Self {
        Self::TypedArray(t)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Self::Object(o)
    }
}

impl From<IterValue> for Value {
    fn from(i: IterValue) -> Self {
        Self::Iterator(i)
    }
}

impl From<MapKey> for Value {
    fn from(k: MapKey) -> Self {
        match k {
            MapKey::Undefined => Self::Undefined,
            MapKey::Null => Self::Null,
            MapKey::Bool(b) => Self::Bool(b),
            MapKey::Number(n) => Self::Number(n),
            MapKey::String(s) => Self::String(s),
            MapKey::Symbol(s) => Self::Symbol(s),
        }
    }
}

impl From<PropertyKey> for Value {
    fn from(k: PropertyKey) -> Self {
        match k {
            PropertyKey::String(s) => Self::String(s),
            PropertyKey::Symbol(s) => Self::Symbol(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typed::TypedArrayKind;

    #[derive(Debug)]
    struct Ring {
        class: Class,
        slots: Vec<i32>,
    }

    impl HostObject for Ring {
        fn class(&self) -> &Class {
            &self.class
        }

        fn elements(&self) -> Box<dyn Iterator<Item = Value> + '_> {
            Box::new(self.slots.iter().map(|&n| Value::from(n)))
        }

        fn keys(&self) -> Box<dyn Iterator<Item = Key> + '_> {
            Box::new((0..self.slots.len()).map(Key::Index))
        }
    }

    fn ring() -> Value {
        Value::host(Ring {
            class: Class::new("Ring", None),
            slots: vec![4, 5, 6],
        })
    }

    #[test]
    fn test_kind_and_class() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::from("s").kind(), ValueKind::String);
        assert_eq!(Value::from("s").class(), None);
        assert_eq!(Value::from(Array::default()).class(), Some(Class::array()));
        assert_eq!(ring().class().map(Class::name), Some("Ring"));
        assert_eq!(ValueKind::TypedArray.to_string(), "typed_array");
    }

    #[test]
    fn test_predicates() {
        assert!(Value::from(1.5).is_primitive());
        assert!(!Value::from(Object::new()).is_primitive());
        assert!(Value::iterator(std::iter::empty()).is_iterator());
        assert!(!ring().is_iterator());
    }

    #[test]
    fn test_elements_of_collections() {
        let array = Value::from(vec![Value::from(1), Value::from(2)]);
        assert_eq!(array.elements().count(), 2);

        let map: Map = [("a", 1), ("b", 2)].into_iter().collect();
        let map = Value::from(map);
        let pairs: Vec<_> = map.elements().collect();
        assert_eq!(pairs.len(), 2);
        assert!(matches!(pairs[0].as_ref(), Value::Array(a) if a.len() == 2));

        let text = Value::from("h\u{1F600}i");
        let chars: Vec<_> = text.elements().collect();
        assert_eq!(chars.len(), 3);
        assert_eq!(chars[1].as_str(), Some("\u{1F600}"));

        let typed = Value::from(TypedArray::zeroed(TypedArrayKind::Uint8, 4));
        assert_eq!(typed.elements().count(), 4);

        assert_eq!(ring().elements().count(), 3);
        assert_eq!(Value::from(Object::new()).elements().count(), 0);
        assert_eq!(Value::from(3).elements().count(), 0);
    }

    #[test]
    fn test_iterator_is_single_pass() {
        let value = Value::iterator((0..3).map(Value::from));
        let mut first = value.elements();
        assert!(first.next().is_some());
        drop(first);

        assert_eq!(value.elements().count(), 2);
        assert_eq!(value.elements().count(), 0);
    }

    #[test]
    fn test_declared_keys() {
        let array = Value::from(vec![Value::Null, Value::Null]);
        assert_eq!(
            array.declared_keys().collect::<Vec<_>>(),
            vec![Key::Index(0), Key::Index(1)]
        );

        let mut map = Map::new();
        map.insert("k", 1);
        map.insert(2, 1);
        assert_eq!(
            Value::from(map).declared_keys().collect::<Vec<_>>(),
            vec![Key::Entry(MapKey::from("k")), Key::Entry(MapKey::from(2))]
        );

        let set: Set = ["m"].into_iter().collect();
        assert_eq!(
            Value::from(set).declared_keys().collect::<Vec<_>>(),
            vec![Key::Entry(MapKey::from("m"))]
        );

        assert_eq!(ring().declared_keys().count(), 3);
        assert_eq!(Value::from(Object::new()).declared_keys().count(), 0);
        assert_eq!(Value::from("abc").declared_keys().count(), 0);
    }
}
