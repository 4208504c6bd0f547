//! Unit tests for params module.

use super::*;

// ============================================================================
// Merge Tests
// ============================================================================

#[test]
fn test_merge_empty_other_keeps_self() {
    let a = QueryParams::from([("api_user", "test"), ("lang", "en")]);

    let merged = a.merge(&QueryParams::new(), false);

    assert_eq!(merged, a);
}

#[test]
fn test_merge_into_empty_yields_other() {
    let b = QueryParams::from([("api_user", "test")]);

    let merged = QueryParams::new().merge(&b, false);

    assert_eq!(merged, b);
}

#[test]
fn test_merge_other_wins_on_conflict() {
    let a = QueryParams::from([("api_user", "test"), ("lang", "en")]);
    let b = QueryParams::from([("lang", "fr"), ("limit", "10")]);

    let merged = a.merge(&b, false);

    assert_eq!(merged.len(), 3);
    assert_eq!(merged.get("api_user"), Some(&ParamValue::from("test")));
    assert_eq!(merged.get("lang"), Some(&ParamValue::from("fr")));
    assert_eq!(merged.get("limit"), Some(&ParamValue::from("10")));
}

#[test]
fn test_merge_keeps_original_key_order() {
    let a = QueryParams::from([("api_user", "test"), ("lang", "en")]);
    let b = QueryParams::from([("limit", "10"), ("api_user", "other")]);

    let merged = a.merge(&b, false);
    let keys: Vec<&str> = merged.iter().map(|(k, _)| k).collect();

    assert_eq!(keys, vec!["api_user", "lang", "limit"]);
}

#[test]
fn test_merge_unique_drops_repeated_values() {
    let a = QueryParams::from([("api_user", "test"), ("a", "x")]);
    let b = QueryParams::from([("b", "x"), ("c", "y")]);

    let merged = a.merge(&b, true);
    let keys: Vec<&str> = merged.iter().map(|(k, _)| k).collect();

    assert_eq!(keys, vec!["api_user", "a", "c"]);
}

#[test]
fn test_merge_does_not_touch_inputs() {
    let a = QueryParams::from([("api_user", "test")]);
    let b = QueryParams::from([("lang", "en")]);

    let _ = a.merge(&b, false);

    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 1);
}

// ============================================================================
// Encoding Tests
// ============================================================================

#[test]
fn test_query_string_single_values() {
    let params = QueryParams::from([("api_user", "test"), ("lang", "en")]);

    assert_eq!(params.to_query_string().unwrap(), "api_user=test&lang=en");
}

#[test]
fn test_query_string_escapes_values() {
    let params = QueryParams::from([("q", "a b&c")]);

    assert_eq!(params.to_query_string().unwrap(), "q=a+b%26c");
}

#[test]
fn test_query_string_many_values_are_indexed() {
    let mut params = QueryParams::new();
    params.insert("ids", ["1", "2"]);

    assert_eq!(params.to_query_string().unwrap(), "ids%5B0%5D=1&ids%5B1%5D=2");
}

#[test]
fn test_query_string_empty() {
    assert_eq!(QueryParams::new().to_query_string().unwrap(), "");
}

// ============================================================================
// Mapping Tests
// ============================================================================

#[test]
fn test_insert_replaces_in_place() {
    let mut params = QueryParams::from([("a", "1"), ("b", "2")]);
    params.insert("a", "3");

    let entries: Vec<(&str, String)> = params.iter().map(|(k, v)| (k, v.to_string())).collect();
    assert_eq!(
        entries,
        vec![("a", "3".to_string()), ("b", "2".to_string())]
    );
}

#[test]
fn test_param_value_display() {
    assert_eq!(ParamValue::from("x").to_string(), "x");
    assert_eq!(ParamValue::from(vec!["a", "b"]).to_string(), "a,b");
}

#[test]
fn test_deserialize_from_json_map() {
    let params: QueryParams =
        serde_json::from_str(r#"{"api_user":"test","ids":["1","2"]}"#).unwrap();

    assert!(params.contains_key("api_user"));
    assert_eq!(params.get("ids"), Some(&ParamValue::from(vec!["1", "2"])));
}

#[test]
fn test_serialize_to_json_map() {
    let params = QueryParams::from([("api_user", "test")]);

    let json = serde_json::to_string(&params).unwrap();
    assert_eq!(json, r#"{"api_user":"test"}"#);
}
