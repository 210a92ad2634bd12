//! Property-based tests for the round-trip guarantees
//!
//! Generated value trees must read back unchanged at every inline threshold, and
//! serde types must survive `to_string` followed by `from_str`.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_yamlite::{dump, from_str, parse, to_string, Mapping, Value};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        "[a-z0-9 :#'\\-]{0,10}",
        "[a-z \n]{0,12}",
        Just("true".to_string()),
        Just("~".to_string()),
        Just("12".to_string()),
    ]
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::Float),
        text().prop_map(Value::String),
    ]
}

fn key() -> impl Strategy<Value = Value> {
    prop_oneof![
        text().prop_map(Value::String),
        any::<i32>().prop_map(|i| Value::Int(i64::from(i))),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
            prop::collection::vec((key(), inner), 0..6)
                .prop_map(|entries| Value::Mapping(entries.into_iter().collect::<Mapping>())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_value_tree_expanded(value in tree()) {
        let text = dump(&value, usize::MAX, 0);
        prop_assert_eq!(parse(&text).unwrap(), value, "text:\n{}", text);
    }

    #[test]
    fn prop_value_tree_flow(value in tree()) {
        let text = dump(&value, 0, 0);
        prop_assert_eq!(parse(&text).unwrap(), value, "text:\n{}", text);
    }

    #[test]
    fn prop_value_tree_mixed(value in tree(), inline in 1usize..4) {
        let text = dump(&value, inline, 0);
        prop_assert_eq!(parse(&text).unwrap(), value, "text:\n{}", text);
    }

    #[test]
    fn prop_dump_is_stable(value in tree()) {
        let first = dump(&value, 2, 0);
        let second = dump(&parse(&first).unwrap(), 2, 0);
        prop_assert_eq!(first, second);
    }

    // Test primitive types
    #[test]
    fn prop_i32(n in any::<i32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u32(n in any::<u32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&b));
    }

    #[test]
    fn prop_f64(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        prop_assert!(roundtrip(&f));
    }

    #[test]
    fn prop_string(s in "\\PC{0,16}") {
        prop_assert!(roundtrip(&s));
    }

    // Test collections
    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_vec_string(v in prop::collection::vec(text(), 0..8)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        prop_assert!(roundtrip(&opt));
    }

    #[test]
    fn prop_tuple_i32_bool(t in (any::<i32>(), any::<bool>())) {
        prop_assert!(roundtrip(&t));
    }
}
