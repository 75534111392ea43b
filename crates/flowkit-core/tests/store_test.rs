use flowkit_core::{FlowStore, Value, ValueKind, ACTION_KEY, ERROR_ACTION};

#[test]
fn test_fail_stamps_all_error_keys() {
    let mut store = FlowStore::new();
    store.fail("Checker", "boom");

    assert_eq!(store.action(), Some(ERROR_ACTION));
    assert!(store.is_errored());
    assert_eq!(store.error(), Some("boom"));
    assert_eq!(store.error_node(), Some("Checker"));
}

#[test]
fn test_action_accessors() {
    let mut store = FlowStore::new();
    assert!(store.action().is_none());
    assert!(!store.is_errored());

    store.set_action("next");
    assert_eq!(store.action(), Some("next"));
    assert!(!store.is_errored());

    // A non-string action reads as unset
    store.insert(ACTION_KEY, 7i64);
    assert!(store.action().is_none());
}

#[test]
fn test_arbitrary_keys_round_trip_through_json() {
    let mut store = FlowStore::new();
    store.insert("flow_id", "test_flow");
    store.insert("attempts", 3i64);
    store.insert("done", true);
    store.insert(
        "output",
        vec![Value::from("hello"), Value::from(2.5)],
    );

    let json = store.to_json().unwrap();
    let loaded = FlowStore::from_json(&json).unwrap();

    assert_eq!(loaded, store);
    assert_eq!(loaded.get("flow_id").and_then(|v| v.as_str()), Some("test_flow"));
    assert_eq!(loaded.get("attempts").and_then(|v| v.as_f64()), Some(3.0));
}

#[test]
fn test_remove_and_len() {
    let mut store = FlowStore::new();
    assert!(store.is_empty());

    store.insert("a", 1i64);
    store.insert("b", 2i64);
    assert_eq!(store.len(), 2);

    let removed = store.remove("a");
    assert_eq!(removed.and_then(|v| v.as_f64()), Some(1.0));
    assert_eq!(store.len(), 1);
    assert!(store.remove("a").is_none());
}

#[test]
fn test_value_kinds() {
    assert_eq!(Value::Null.kind(), ValueKind::Null);
    assert_eq!(Value::from(true).kind(), ValueKind::Bool);
    assert_eq!(Value::from(1.5).kind(), ValueKind::Number);
    assert_eq!(Value::from("s").kind(), ValueKind::String);
    assert_eq!(Value::from(vec![Value::Null]).kind(), ValueKind::Array);
    assert_eq!(ValueKind::Object.to_string(), "object");
}

#[test]
fn test_json_value_conversion_is_structural() {
    let json: serde_json::Value = serde_json::json!({
        "name": "flow",
        "count": 2,
        "tags": ["a", "b"],
        "nothing": null,
    });

    let value = Value::from(json.clone());
    let object = value.as_object().unwrap();
    assert_eq!(object.get("name").and_then(|v| v.as_str()), Some("flow"));
    assert_eq!(object.get("count").and_then(|v| v.as_f64()), Some(2.0));
    assert_eq!(object.get("tags").and_then(|v| v.as_array()).map(|a| a.len()), Some(2));
    assert!(object.get("nothing").unwrap().is_null());

    let back: serde_json::Value = value.into();
    assert_eq!(back["name"], json["name"]);
    assert_eq!(back["tags"], json["tags"]);
}
