#![cfg(feature = "serde")]

use optio::Opt;
use pretty_assertions::assert_eq;

#[test]
fn test_serialize_variants() {
    assert_eq!(serde_json::to_string(&Opt::some(1)).unwrap(), r#"{"Some":1}"#);
    assert_eq!(serde_json::to_string(&Opt::<i32>::none()).unwrap(), r#""None""#);
}

#[test]
fn test_some_null_survives_serialization() {
    let json = serde_json::to_string(&Opt::some(None::<i32>)).unwrap();
    assert_eq!(json, r#"{"Some":null}"#);

    let back: Opt<Option<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Opt::some(None));
}

#[test]
fn test_deserialize_none() {
    let back: Opt<String> = serde_json::from_str(r#""None""#).unwrap();
    assert!(back.is_empty());
}
