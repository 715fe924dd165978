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

//! # Runtime Classes
//!
//! A `Class` is the runtime type identity of a non-primitive value: a name and
//! an optional parent class. Two classes are the *same* class only when they
//! are the same allocation; two distinct classes may share a name. Both
//! notions matter, because type identifiers can be given either as a class
//! reference or as a class name.
//!
//! The built-in classes (`Object`, `Array`, `Map`, `Set`, `TypedArray` and one
//! class per typed-array kind) are process-wide singletons.
//!
//! ```rust
//! use keyseq_model::class::Class;
//!
//! let list = Class::with_parent("NodeList", Class::array());
//! assert!(list.extends(Class::array()));
//! assert!(list.extends(Class::object()));
//! assert!(list.extends_named("Array"));
//! assert!(!list.extends(Class::map()));
//! ```

use crate::typed::TypedArrayKind;
use std::sync::{Arc, OnceLock};

struct ClassInfo {
    name: String,
    parent: Option<Class>,
}

/// Runtime type identity of a value, compared by reference.
#[derive(Clone)]
pub struct Class(Arc<ClassInfo>);

struct Builtins {
    object: Class,
    array: Class,
    map: Class,
    set: Class,
    typed_array: Class,
    typed: Vec<Class>,
}

static BUILTINS: OnceLock<Builtins> = OnceLock::new();

fn builtins() -> &'static Builtins {
    BUILTINS.get_or_init(|| {
        let object = Class::new("Object", None);
        let typed_array = Class::with_parent("TypedArray", &object);
        let typed = TypedArrayKind::ALL
            .iter()
            .map(|kind| Class::with_parent(kind.name(), &typed_array))
            .collect();
        Builtins {
            array: Class::with_parent("Array", &object),
            map: Class::with_parent("Map", &object),
            set: Class::with_parent("Set", &object),
            typed_array,
            typed,
            object,
        }
    })
}

impl Class {
    /// Creates a new class, distinct from every existing class.
    pub fn new(name: impl Into<String>, parent: Option<&Class>) -> Self {
        Self(Arc::new(ClassInfo {
            name: name.into(),
            parent: parent.cloned(),
        }))
    }

    /// Creates a new class deriving from `parent`.
    #[inline]
    pub fn with_parent(name: impl Into<String>, parent: &Class) -> Self {
        Self::new(name, Some(parent))
    }

    /// The root `Object` class.
    #[inline]
    pub fn object() -> &'static Class {
        &builtins().object
    }

    #[inline]
    pub fn array() -> &'static Class {
        &builtins().array
    }

    #[inline]
    pub fn map() -> &'static Class {
        &builtins().map
    }

    #[inline]
    pub fn set() -> &'static Class {
        &builtins().set
    }

    /// The abstract parent of every typed-array class.
    #[inline]
    pub fn typed_array() -> &'static Class {
        &builtins().typed_array
    }

    /// The class of typed arrays of the given `kind`, e.g. `Int32Array`.
    #[inline]
    pub fn typed_array_of(kind: TypedArrayKind) -> &'static Class {
        &builtins().typed[kind.ordinal()]
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    #[inline]
    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// Iterates this class followed by every ancestor, nearest first.
    #[inline]
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            current: Some(self),
        }
    }

    /// Returns `true` if `self` and `other` are the same class.
    #[inline]
    pub fn is(&self, other: &Class) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns `true` if `other` is this class or one of its ancestors.
    pub fn extends(&self, other: &Class) -> bool {
        self.ancestors().any(|c| c.is(other))
    }

    /// Returns `true` if this class or one of its ancestors is named `name`.
    pub fn extends_named(&self, name: &str) -> bool {
        self.ancestors().any(|c| c.name() == name)
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for Class {}

impl std::hash::Hash for Class {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl std::fmt::Debug for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Class({})", self.name())
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Iterator over a class and its ancestors. See [`Class::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    current: Option<&'a Class>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Class;

    fn next(&mut self) -> Option<&'a Class> {
        let class = self.current?;
        self.current = class.parent();
        Some(class)
    }
}

impl std::iter::FusedIterator for Ancestors<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_singletons() {
        assert!(Class::array().is(Class::array()));
        assert_eq!(Class::map(), Class::map());
        assert_ne!(Class::map(), Class::set());
    }

    #[test]
    fn test_builtin_hierarchy() {
        assert_eq!(Class::array().parent(), Some(Class::object()));
        assert_eq!(Class::object().parent(), None);

        let int32 = Class::typed_array_of(TypedArrayKind::Int32);
        assert_eq!(int32.name(), "Int32Array");
        let names: Vec<&str> = int32.ancestors().map(Class::name).collect();
        assert_eq!(names, vec!["Int32Array", "TypedArray", "Object"]);
    }

    #[test]
    fn test_same_name_is_not_same_class() {
        let a = Class::new("Thing", None);
        let b = Class::new("Thing", None);
        assert!(!a.is(&b));
        assert!(a.extends_named("Thing"));
        assert!(b.extends_named("Thing"));
        assert!(a.is(&a.clone()));
    }

    #[test]
    fn test_extends_walks_the_chain() {
        let base = Class::with_parent("Base", Class::object());
        let derived = Class::with_parent("Derived", &base);

        assert!(derived.extends(&base));
        assert!(derived.extends(Class::object()));
        assert!(!base.extends(&derived));
        assert!(derived.extends_named("Base"));
        assert!(!derived.extends_named("Array"));
    }

    #[test]
    fn test_display_and_debug() {
        let class = Class::new("Deque", None);
        assert_eq!(format!("{}", class), "Deque");
        assert_eq!(format!("{:?}", class), "Class(Deque)");
    }
}
