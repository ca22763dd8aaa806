//! Proptest strategies for generating tree values.
//!
//! Each strategy produces random but valid data with an emphasis on
//! edge cases: boundary integers, empty strings, empty composites,
//! deeply nested trees.

use proptest::{prelude::*, string::string_regex};

use cachelens::Value;

/// Scalar leaves, including the boundary values that tend to break
/// fixed-width encodings. Floats are kept finite and round-trippable so
/// `PartialEq` comparison stays meaningful.
pub fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        prop_oneof![
            Just(i64::MIN),
            Just(i64::MAX),
            Just(0i64),
            Just(-1i64),
            any::<i64>(),
        ]
        .prop_map(Value::Int),
        prop_oneof![
            Just(0.0f64),
            Just(-0.0f64),
            Just(f64::MIN_POSITIVE),
            Just(f64::MAX),
            any::<i32>().prop_map(f64::from),
        ]
        .prop_map(Value::Float),
        string_strategy().prop_map(Value::Str),
        prop::collection::vec(any::<u8>(), 0..64).prop_map(Value::Bytes),
    ]
}

/// Strings from empty through unicode to moderately long.
pub fn string_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        string_regex("[a-zA-Z0-9:_-]{1,20}").expect("static regex"),
        string_regex(r"[\u{80}-\u{10FF}]{1,10}").expect("static regex"),
    ]
}

/// Arbitrary trees: scalars composed into lists and maps, up to four
/// levels deep.
pub fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec((string_strategy(), inner), 0..8)
                .prop_map(|entries| Value::Map(dedup_keys(entries))),
        ]
    })
}

/// Trees restricted to what JSON can express: no byte-strings (JSON
/// would reshape them into number arrays on the way back).
pub fn json_value_strategy() -> impl Strategy<Value = Value> {
    let scalar = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<i32>().prop_map(|i| Value::Float(f64::from(i))),
        string_strategy().prop_map(Value::Str),
    ];
    scalar.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec((string_strategy(), inner), 0..8)
                .prop_map(|entries| Value::Map(dedup_keys(entries))),
        ]
    })
}

/// Map keys must be unique for roundtrip comparison to hold.
fn dedup_keys(entries: Vec<(String, Value)>) -> Vec<(String, Value)> {
    let mut seen = std::collections::HashSet::new();
    entries
        .into_iter()
        .filter(|(key, _)| seen.insert(key.clone()))
        .collect()
}
