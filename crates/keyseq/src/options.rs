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

//! # Classification Options
//!
//! `KeysOptions` tunes how values are classified:
//!
//! | Option           | JSON name    | Default | Effect |
//! | :---             | :---         | :---    | :--- |
//! | `inherited`      | `inObj`      | `false` | Records also report keys inherited through their prototypes. |
//! | `non_enumerable` | `reflectObj` | `false` | Records also report non-enumerable keys. |
//! | `arrays`         | `arrays`     | empty   | Extra types treated as sequential collections. |
//! | `maps`           | `maps`       | empty   | Extra types treated as dictionary collections. |
//! | `sets`           | `sets`       | empty   | Extra types treated as set collections. |
//!
//! Type identifiers are [`TypeRef`]s: a class reference, matched by identity,
//! or a class name, matched by text. A [`TypeMatcher`] holds any number of
//! them and matches a class if the class or any of its ancestors is listed.
//!
//! Options are never validated. When loaded from JSON, any field with an
//! unexpected shape is ignored and keeps its default, so a malformed option
//! simply fails to match anything.
//!
//! ```rust
//! use keyseq::options::KeysOptions;
//! use keyseq_model::class::Class;
//!
//! let deque = Class::new("Deque", None);
//! let options = KeysOptions::builder()
//!     .inherited(true)
//!     .arrays(["NodeList"])
//!     .sets(deque.clone())
//!     .build();
//!
//! assert!(options.inherited());
//! assert!(options.sets().matches(&deque));
//! assert!(!options.maps().matches(&deque));
//!
//! let parsed = KeysOptions::from_json_str(r#"{ "inObj": true, "arrays": "NodeList" }"#).unwrap();
//! assert!(parsed.inherited());
//! assert_eq!(parsed.arrays().len(), 1);
//! ```

use keyseq_model::class::Class;
use keyseq_model::object::KeyFilter;
use serde::Deserialize;
use std::fmt::Display;

/// A type identifier: a class reference or a class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Matches this exact class and its subclasses.
    Class(Class),
    /// Matches any class with this name and the subclasses of such classes.
    Name(String),
}

impl TypeRef {
    /// Returns `true` if `class` or one of its ancestors is identified by
    /// this reference.
    pub fn matches(&self, class: &Class) -> bool {
        match self {
            Self::Class(target) => class.extends(target),
            Self::Name(name) => class.extends_named(name),
        }
    }
}

impl From<Class> for TypeRef {
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}

impl From<&Class> for TypeRef {
    fn from(class: &Class) -> Self {
        Self::Class(class.clone())
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Class(class) => write!(f, "class {}", class),
            Self::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

/// A list of type identifiers. Empty by default, matching nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMatcher {
    refs: Vec<TypeRef>,
}

impl TypeMatcher {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an identifier.
    pub fn push(&mut self, type_ref: impl Into<TypeRef>) {
        self.refs.push(type_ref.into());
    }

    /// Adds an identifier, by value.
    pub fn with(mut self, type_ref: impl Into<TypeRef>) -> Self {
        self.push(type_ref);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, TypeRef> {
        self.refs.iter()
    }

    /// Returns `true` if any listed identifier matches `class`.
    pub fn matches(&self, class: &Class) -> bool {
        self.refs.iter().any(|r| r.matches(class))
    }

    /// Reads identifiers from JSON: a single string or an array of strings.
    /// Anything else, including non-string array entries, is skipped.
    pub fn from_json(field: &str, json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::new(),
            serde_json::Value::String(name) => Self::from(name.as_str()),
            serde_json::Value::Array(entries) => entries
                .iter()
                .filter_map(|entry| {
                    let name = entry.as_str();
                    if name.is_none() {
                        tracing::debug!(
                            field,
                            entry = %entry,
                            "ignoring non-string type identifier"
                        );
                    }
                    name
                })
                .collect(),
            other => {
                tracing::debug!(field, value = %other, "ignoring malformed type identifier list");
                Self::new()
            }
        }
    }
}

impl From<TypeRef> for TypeMatcher {
    fn from(type_ref: TypeRef) -> Self {
        Self {
            refs: vec![type_ref],
        }
    }
}

impl From<Class> for TypeMatcher {
    fn from(class: Class) -> Self {
        Self::from(TypeRef::from(class))
    }
}

impl From<&Class> for TypeMatcher {
    fn from(class: &Class) -> Self {
        Self::from(TypeRef::from(class))
    }
}

impl From<&str> for TypeMatcher {
    fn from(name: &str) -> Self {
        Self::from(TypeRef::from(name))
    }
}

impl From<String> for TypeMatcher {
    fn from(name: String) -> Self {
        Self::from(TypeRef::from(name))
    }
}

impl<T: Into<TypeRef>> From<Vec<T>> for TypeMatcher {
    fn from(refs: Vec<T>) -> Self {
        refs.into_iter().collect()
    }
}

impl<T: Into<TypeRef>, const N: usize> From<[T; N]> for TypeMatcher {
    fn from(refs: [T; N]) -> Self {
        refs.into_iter().collect()
    }
}

impl<T: Into<TypeRef>> FromIterator<T> for TypeMatcher {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            refs: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TypeMatcher {
    type Item = &'a TypeRef;
    type IntoIter = std::slice::Iter<'a, TypeRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.refs.iter()
    }
}

/// The error type for loading options from JSON text.
#[derive(Debug)]
pub enum OptionsError {
    /// The text is not valid JSON.
    Json(serde_json::Error),
}

impl Display for OptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "Invalid options JSON: {}", e),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for OptionsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Options for a single classification. See the module documentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub struct KeysOptions {
    inherited: bool,
    non_enumerable: bool,
    arrays: TypeMatcher,
    maps: TypeMatcher,
    sets: TypeMatcher,
}

impl KeysOptions {
    #[inline]
    pub fn builder() -> KeysOptionsBuilder {
        KeysOptionsBuilder::new()
    }

    /// Whether records also report inherited keys (`inObj`).
    #[inline]
    pub fn inherited(&self) -> bool {
        self.inherited
    }

    /// Whether records also report non-enumerable keys (`reflectObj`).
    #[inline]
    pub fn non_enumerable(&self) -> bool {
        self.non_enumerable
    }

    #[inline]
    pub fn arrays(&self) -> &TypeMatcher {
        &self.arrays
    }

    #[inline]
    pub fn maps(&self) -> &TypeMatcher {
        &self.maps
    }

    #[inline]
    pub fn sets(&self) -> &TypeMatcher {
        &self.sets
    }

    /// The record key filter these options select.
    #[inline]
    pub fn key_filter(&self) -> KeyFilter {
        KeyFilter {
            inherited: self.inherited,
            non_enumerable: self.non_enumerable,
        }
    }

    /// Reads options from a JSON document. Never fails: a non-object document
    /// yields the defaults and malformed fields are ignored.
    pub fn from_json_value(json: &serde_json::Value) -> Self {
        let Some(fields) = json.as_object() else {
            if !json.is_null() {
                tracing::debug!(value = %json, "ignoring non-object options");
            }
            return Self::default();
        };
        let matcher = |name: &str| {
            fields
                .get(name)
                .map(|v| TypeMatcher::from_json(name, v))
                .unwrap_or_default()
        };
        Self {
            inherited: fields.get("inObj").is_some_and(truthy),
            non_enumerable: fields.get("reflectObj").is_some_and(truthy),
            arrays: matcher("arrays"),
            maps: matcher("maps"),
            sets: matcher("sets"),
        }
    }

    /// Parses options from JSON text. Only syntactically invalid JSON is an
    /// error; see [`KeysOptions::from_json_value`].
    pub fn from_json_str(text: &str) -> Result<Self, OptionsError> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::from_json_value(&json))
    }
}

impl From<serde_json::Value> for KeysOptions {
    fn from(json: serde_json::Value) -> Self {
        Self::from_json_value(&json)
    }
}

/// Truthiness of an option flag.
fn truthy(json: &serde_json::Value) -> bool {
    match json {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

/// Builder for [`KeysOptions`]. Unset options keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct KeysOptionsBuilder {
    options: KeysOptions,
}

impl KeysOptionsBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Include keys inherited through the prototype chain of records.
    pub fn inherited(mut self, inherited: bool) -> Self {
        self.options.inherited = inherited;
        self
    }

    /// Include non-enumerable keys of records.
    pub fn non_enumerable(mut self, non_enumerable: bool) -> Self {
        self.options.non_enumerable = non_enumerable;
        self
    }

    /// Types to treat as sequential collections.
    pub fn arrays(mut self, types: impl Into<TypeMatcher>) -> Self {
        self.options.arrays = types.into();
        self
    }

    /// Types to treat as dictionary collections.
    pub fn maps(mut self, types: impl Into<TypeMatcher>) -> Self {
        self.options.maps = types.into();
        self
    }

    /// Types to treat as set collections.
    pub fn sets(mut self, types: impl Into<TypeMatcher>) -> Self {
        self.options.sets = types.into();
        self
    }

    pub fn build(self) -> KeysOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = KeysOptions::default();
        assert!(!options.inherited());
        assert!(!options.non_enumerable());
        assert!(options.arrays().is_empty());
        assert!(options.maps().is_empty());
        assert!(options.sets().is_empty());
        assert_eq!(options.key_filter(), KeyFilter::default());
    }

    #[test]
    fn test_type_ref_matching() {
        let base = Class::with_parent("Base", Class::object());
        let derived = Class::with_parent("Derived", &base);
        let twin = Class::with_parent("Base", Class::object());

        assert!(TypeRef::from(&base).matches(&derived));
        assert!(!TypeRef::from(&base).matches(&twin));
        assert!(TypeRef::from("Base").matches(&twin));
        assert!(TypeRef::from("Base").matches(&derived));
        assert!(!TypeRef::from("Derived").matches(&base));
    }

    #[test]
    fn test_matcher_accepts_single_or_many() {
        let class = Class::new("Queue", None);
        assert_eq!(TypeMatcher::from("Queue").len(), 1);
        assert_eq!(TypeMatcher::from(class.clone()).len(), 1);
        assert_eq!(TypeMatcher::from(vec!["A", "B"]).len(), 2);

        let mixed = TypeMatcher::new().with("Other").with(&class);
        assert!(mixed.matches(&class));
        assert!(!mixed.matches(Class::object()));
        assert!(!TypeMatcher::new().matches(&class));
    }

    #[test]
    fn test_json_fields() {
        let options = KeysOptions::from_json_value(&json!({
            "inObj": true,
            "reflectObj": 1,
            "arrays": ["NodeList", "HTMLCollection"],
            "maps": "Headers",
            "sets": []
        }));
        assert!(options.inherited());
        assert!(options.non_enumerable());
        assert_eq!(options.arrays().len(), 2);
        assert_eq!(
            options.maps().iter().collect::<Vec<_>>(),
            vec![&TypeRef::Name("Headers".into())]
        );
        assert!(options.sets().is_empty());
    }

    #[test]
    fn test_malformed_json_fields_are_ignored() {
        let options = KeysOptions::from_json_value(&json!({
            "inObj": 0,
            "reflectObj": "",
            "arrays": 42,
            "maps": { "name": "Headers" },
            "sets": ["Bag", 7, null]
        }));
        assert!(!options.inherited());
        assert!(!options.non_enumerable());
        assert!(options.arrays().is_empty());
        assert!(options.maps().is_empty());
        assert_eq!(options.sets().len(), 1);

        assert_eq!(KeysOptions::from_json_value(&json!([1, 2])), KeysOptions::default());
        assert_eq!(KeysOptions::from_json_value(&json!(null)), KeysOptions::default());
    }

    #[test]
    fn test_json_text() {
        assert!(KeysOptions::from_json_str(r#"{"reflectObj": true}"#)
            .map(|o| o.non_enumerable())
            .unwrap_or(false));

        let err = KeysOptions::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, OptionsError::Json(_)));
        assert!(err.to_string().starts_with("Invalid options JSON"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_serde_deserialize_is_lenient() {
        let options: KeysOptions =
            serde_json::from_str(r#"{"inObj": "yes", "arrays": "NodeList", "sets": 3}"#)
                .expect("any JSON document deserializes");
        assert!(options.inherited());
        assert_eq!(options.arrays().len(), 1);
        assert!(options.sets().is_empty());
    }

    #[test]
    fn test_builder() {
        let options = KeysOptions::builder()
            .non_enumerable(true)
            .maps(["Headers", "FormData"])
            .build();
        assert!(options.non_enumerable());
        assert!(!options.inherited());
        assert_eq!(options.maps().len(), 2);
        assert_eq!(
            options.key_filter(),
            KeyFilter {
                inherited: false,
                non_enumerable: true
            }
        );
    }
}
