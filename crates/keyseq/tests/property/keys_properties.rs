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

use keyseq::bind::bind;
use keyseq::classifier::{classify, keys, select_strategy};
use keyseq::options::KeysOptions;
use keyseq_model::collection::{Map, Set};
use keyseq_model::key::{Key, MapKey, PropertyKey};
use keyseq_model::object::Object;
use keyseq_model::value::Value;
use proptest::prelude::*;

fn indices(n: usize) -> Vec<Key> {
    (0..n).map(Key::Index).collect()
}

fn options() -> impl Strategy<Value = KeysOptions> {
    (any::<bool>(), any::<bool>()).prop_map(|(inherited, non_enumerable)| {
        KeysOptions::builder()
            .inherited(inherited)
            .non_enumerable(non_enumerable)
            .build()
    })
}

proptest! {
    #[test]
    fn arrays_yield_every_index(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let n = items.len();
        let value = Value::from(items.into_iter().map(Value::from).collect::<Vec<_>>());
        prop_assert_eq!(keys(&value).collect::<Vec<_>>(), indices(n));
    }

    #[test]
    fn maps_yield_distinct_keys_in_insertion_order(
        names in prop::collection::vec("[a-z]{1,6}", 0..32)
    ) {
        let mut map = Map::new();
        let mut expected: Vec<Key> = Vec::new();
        for name in &names {
            if map.insert(name.as_str(), 0).is_none() {
                expected.push(Key::Entry(MapKey::from(name.as_str())));
            }
        }
        prop_assert_eq!(keys(&Value::from(map)).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn sets_yield_positions_not_members(members in prop::collection::vec(any::<i32>(), 0..64)) {
        let set: Set = members.into_iter().collect();
        let n = set.len();
        prop_assert_eq!(keys(&Value::from(set)).collect::<Vec<_>>(), indices(n));
    }

    #[test]
    fn strings_yield_char_offsets(text in ".{0,48}") {
        let n = text.chars().count();
        prop_assert_eq!(keys(&Value::from(text)).collect::<Vec<_>>(), indices(n));
    }

    #[test]
    fn iterators_yield_one_position_per_element(n in 0usize..128) {
        let value = Value::iterator((0..n).map(|_| Value::Null));
        prop_assert_eq!(keys(&value).collect::<Vec<_>>(), indices(n));
        prop_assert_eq!(keys(&value).count(), 0);
    }

    #[test]
    fn primitives_yield_nothing(n in any::<f64>(), b in any::<bool>(), opts in options()) {
        for value in [Value::Null, Value::Undefined, Value::from(n), Value::from(b)] {
            prop_assert_eq!(classify(&value, &opts).count(), 0);
        }
    }

    #[test]
    fn record_key_counts_follow_filters(
        own in prop::collection::btree_set("[a-m]{1,4}", 0..8),
        hidden in prop::collection::btree_set("[n-z]{1,4}", 0..8),
        inherited in prop::collection::btree_set("[A-Z]{1,4}", 0..8),
        opts in options(),
    ) {
        let proto = inherited
            .iter()
            .fold(Object::builder(), |b, k| b.property(k.as_str(), 0))
            .build();
        let record = own
            .iter()
            .fold(Object::builder().prototype(proto), |b, k| b.property(k.as_str(), 0));
        let record = hidden.iter().fold(record, |b, k| b.hidden(k.as_str(), 0)).build();
        let value = Value::from(record);

        let got: Vec<Key> = classify(&value, &opts).collect();
        let mut expected = own.len();
        if opts.non_enumerable() {
            expected += hidden.len();
        }
        if opts.inherited() {
            expected += inherited.len();
        }
        prop_assert_eq!(got.len(), expected);
        for name in &own {
            prop_assert!(got.contains(&Key::Property(PropertyKey::from(name.as_str()))));
        }
    }

    #[test]
    fn reusable_inputs_are_idempotent(
        items in prop::collection::vec("[a-z]{0,3}", 0..16),
        opts in options(),
    ) {
        let values = [
            Value::from(items.iter().map(|s| Value::from(s.as_str())).collect::<Vec<_>>()),
            Value::from(items.concat()),
            Value::from(items.iter().map(|s| (s.as_str(), 0)).collect::<Map>()),
            Value::from(items.iter().map(String::as_str).collect::<Set>()),
            Value::from(
                items
                    .iter()
                    .fold(Object::builder(), |b, k| b.property(k.as_str(), 0))
                    .build(),
            ),
        ];
        for value in &values {
            let first: Vec<Key> = classify(value, &opts).collect();
            let second: Vec<Key> = classify(value, &opts).collect();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(bind(value).call(&opts).collect::<Vec<_>>(), first);
            prop_assert_eq!(select_strategy(value, &opts), select_strategy(value, &opts));
        }
    }
}
