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

//! # Binding
//!
//! The classifier can be prepared with a value first and given its options
//! later. Both forms below behave exactly like calling
//! [`classify`](crate::classifier::classify) with the value and options
//! positionally.
//!
//! - [`bind`] returns a [`BoundKeys`], a reusable partial application.
//! - [`KeysExt`] adds method-call syntax to [`Value`].
//!
//! ```rust
//! use keyseq::bind::{bind, KeysExt};
//! use keyseq::options::KeysOptions;
//! use keyseq_model::key::Key;
//! use keyseq_model::value::Value;
//!
//! let value = Value::from(vec![Value::from("test")]);
//!
//! let bound = bind(&value);
//! assert_eq!(bound.call_default().collect::<Vec<_>>(), vec![Key::Index(0)]);
//! assert_eq!(value.keys_with(&KeysOptions::default()).count(), 1);
//! ```

use crate::classifier::classify;
use crate::keys::Keys;
use crate::options::KeysOptions;
use keyseq_model::value::Value;

/// A classifier with its value already supplied.
#[derive(Debug, Clone, Copy)]
pub struct BoundKeys<'a> {
    value: &'a Value,
}

/// Binds `value`, leaving the options to be supplied at call time.
#[inline]
pub fn bind(value: &Value) -> BoundKeys<'_> {
    BoundKeys { value }
}

impl<'a> BoundKeys<'a> {
    /// The bound value.
    #[inline]
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Classifies the bound value under `options`.
    #[inline]
    pub fn call(&self, options: &KeysOptions) -> Keys<'a> {
        classify(self.value, options)
    }

    /// Classifies the bound value under default options.
    #[inline]
    pub fn call_default(&self) -> Keys<'a> {
        self.call(&KeysOptions::default())
    }
}

impl<'a> From<&'a Value> for BoundKeys<'a> {
    fn from(value: &'a Value) -> Self {
        bind(value)
    }
}

/// Method-call access to the classifier.
pub trait KeysExt {
    /// Key sequence under default options.
    fn keys(&self) -> Keys<'_>;

    /// Key sequence under `options`.
    fn keys_with(&self, options: &KeysOptions) -> Keys<'_>;
}

impl KeysExt for Value {
    #[inline]
    fn keys(&self) -> Keys<'_> {
        classify(self, &KeysOptions::default())
    }

    #[inline]
    fn keys_with(&self, options: &KeysOptions) -> Keys<'_> {
        classify(self, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyseq_model::key::Key;
    use keyseq_model::object::Object;

    fn sample() -> Value {
        let proto = Object::builder().property("base", 1).build();
        Value::from(
            Object::builder()
                .prototype(proto)
                .property("own", 1)
                .hidden("secret", 1)
                .build(),
        )
    }

    #[test]
    fn test_bound_matches_positional() {
        let value = sample();
        let options = KeysOptions::builder()
            .inherited(true)
            .non_enumerable(true)
            .build();

        let positional: Vec<Key> = classify(&value, &options).collect();
        let bound: Vec<Key> = bind(&value).call(&options).collect();
        let method: Vec<Key> = value.keys_with(&options).collect();

        assert_eq!(positional.len(), 3);
        assert_eq!(bound, positional);
        assert_eq!(method, positional);
    }

    #[test]
    fn test_bound_is_reusable() {
        let value = Value::from(vec![Value::from("test")]);
        let bound = BoundKeys::from(&value);
        assert_eq!(bound.call_default().collect::<Vec<_>>(), vec![Key::Index(0)]);
        assert_eq!(bound.call_default().collect::<Vec<_>>(), vec![Key::Index(0)]);
        assert!(std::ptr::eq(bound.value(), &value));
    }

    #[test]
    fn test_default_method_uses_default_options() {
        let value = sample();
        assert_eq!(value.keys().count(), 1);
        assert_eq!(bind(&value).call_default().count(), 1);
    }
}
