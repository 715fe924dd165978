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

//! # Key Classifier
//!
//! Decides, for a value of unknown shape, which key sequence describes it, and
//! produces that sequence lazily.
//!
//! ## Dispatch
//!
//! Rules are tried in order and the first match wins. The order matters: a
//! host object may well be an iterator *and* carry properties.
//!
//! | # | Applies to | Strategy | Keys |
//! | - | :--- | :--- | :--- |
//! | 1 | iterators; classes extending `Set` or listed in `sets` | `Count` | `0, 1, ...`, one per element pulled |
//! | 2 | strings | `CharOffsets` | `0..n`, `n` counted in `char`s, not bytes |
//! | 3 | classes extending `Array`, `Map`, `TypedArray`, or listed in `arrays`/`maps` | `Declared` | the value's own declared keys |
//! | 4 | any other non-primitive (records, host objects) | `Properties` | property keys, filtered by the options |
//! | 5 | `undefined`, `null`, booleans, numbers, symbols | `Empty` | nothing |
//!
//! Built-in classes are matched by identity, so an unrelated class that only
//! shares a built-in's name is not a collection. Names are compared only for
//! the identifiers listed in the options.
//!
//! Classification depends only on the shape of the value and the options, so
//! the same kind of value under the same options always takes the same rule.
//! Nothing is cached between calls and nothing can fail: a value that fits no
//! rule produces an empty sequence.
//!
//! ```rust
//! use keyseq::classifier::{classify, keys, Strategy};
//! use keyseq::options::KeysOptions;
//! use keyseq_model::key::Key;
//! use keyseq_model::value::Value;
//!
//! let list = Value::from(vec![Value::from("a"), Value::from("b")]);
//! assert_eq!(keys(&list).collect::<Vec<_>>(), vec![Key::Index(0), Key::Index(1)]);
//!
//! let word = Value::from("h\u{e9}");
//! let offsets = classify(&word, &KeysOptions::default());
//! assert_eq!(offsets.strategy(), Strategy::CharOffsets);
//! assert_eq!(offsets.count(), 2);
//! ```

use crate::keys::{Keys, Source};
use crate::options::{KeysOptions, TypeMatcher};
use keyseq_core::iter::{Counted, MaybeIter};
use keyseq_model::class::Class;
use keyseq_model::value::Value;

/// The rule a value was classified by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// One position per element the value yields when iterated.
    Count,
    /// One position per character of a string.
    CharOffsets,
    /// The keys the collection declares for itself.
    Declared,
    /// Property keys of a record.
    Properties,
    /// No keys.
    Empty,
}

impl Strategy {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::CharOffsets => "char_offsets",
            Self::Declared => "declared",
            Self::Properties => "properties",
            Self::Empty => "empty",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
fn class_matches(class: Option<&Class>, builtin: &Class, extra: &TypeMatcher) -> bool {
    class.is_some_and(|c| c.extends(builtin) || extra.matches(c))
}

/// Selects the rule `value` is classified by under `options`.
///
/// # Examples
///
/// ```rust
/// use keyseq::classifier::{select_strategy, Strategy};
/// use keyseq::options::KeysOptions;
/// use keyseq_model::collection::Set;
/// use keyseq_model::value::Value;
///
/// let options = KeysOptions::default();
/// assert_eq!(select_strategy(&Value::from(Set::new()), &options), Strategy::Count);
/// assert_eq!(select_strategy(&Value::Null, &options), Strategy::Empty);
/// ```
pub fn select_strategy(value: &Value, options: &KeysOptions) -> Strategy {
    let class = value.class();

    if value.is_iterator() || class_matches(class, Class::set(), options.sets()) {
        return Strategy::Count;
    }
    if matches!(value, Value::String(_)) {
        return Strategy::CharOffsets;
    }
    if class_matches(class, Class::array(), options.arrays())
        || class_matches(class, Class::map(), options.maps())
        || class.is_some_and(|c| c.extends(Class::typed_array()))
    {
        return Strategy::Declared;
    }
    if !value.is_primitive() {
        return Strategy::Properties;
    }
    Strategy::Empty
}

/// Produces the lazy key sequence of `value` under `options`.
///
/// The returned sequence borrows `value` but not `options`.
pub fn classify<'a>(value: &'a Value, options: &KeysOptions) -> Keys<'a> {
    let strategy = select_strategy(value, options);
    tracing::trace!(kind = %value.kind(), %strategy, "classified value");

    let source = match (strategy, value) {
        (Strategy::Count, _) => Source::Count(Counted::new(value.elements())),
        (Strategy::CharOffsets, Value::String(s)) => Source::CharOffsets(Counted::new(s.chars())),
        (Strategy::Declared, _) => Source::Declared(value.declared_keys()),
        (Strategy::Properties, _) => {
            let filter = options.key_filter();
            Source::Properties(MaybeIter::new(
                value.properties().map(|o| o.property_keys(filter)),
            ))
        }
        _ => Source::Empty,
    };
    Keys::new(strategy, source)
}

/// Produces the key sequence of `value` under default options.
#[inline]
pub fn keys(value: &Value) -> Keys<'_> {
    classify(value, &KeysOptions::default())
}
