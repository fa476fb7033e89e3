//! Property tests for the classifier and validator.

use oeval_core::{FieldPath, ViolationKind};
use oeval_schema::{classify, validate, ItemSchema, SchemaNode, ValidationKind};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Arbitrary JSON values, including floats.
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6f64).prop_map(|f| json!(f)),
        "[a-zA-Z0-9_ \\[\\],]{0,30}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,10}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Base-type tokens that may open a tag.
fn base_token() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "", "str", "any", "int", "float", "bool", "int or float", "list[str]", "str or dict",
    ])
}

fn modifier() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["auto", "optional", "AUTO", "Optional"])
}

fn kind_of_field(value: Value) -> &'static str {
    classify(&SchemaNode::from_value(&value)).name()
}

fn required_descriptor() -> impl Strategy<Value = Value> {
    prop::sample::select(vec![
        json!("title text"),
        json!("[str] name"),
        json!("[any] payload"),
        json!("[int or float] score"),
        json!("[bool] flag"),
        json!({"inner": "text"}),
        json!("[list[str]] aliases"),
        json!(["keyword"]),
        json!([{"text": "t"}]),
    ])
}

proptest! {
    /// Classification never panics and always yields a kind.
    #[test]
    fn classify_is_total(value in json_value()) {
        let node = SchemaNode::from_value(&value);
        let name = classify(&node).name();
        prop_assert!(!name.is_empty());
    }

    /// A modifier token anywhere in the tag makes the field skippable.
    #[test]
    fn modifier_tokens_make_fields_skippable(
        base in base_token(),
        modifier in modifier(),
        before in any::<bool>(),
        desc in "[a-z ]{0,20}",
    ) {
        let tag = if before { format!("{modifier}, {base}") } else { format!("{base}, {modifier}") };
        let text = format!("[{tag}] {desc}");
        let node = SchemaNode::from_value(&Value::String(text.clone()));
        prop_assert!(classify(&node).is_skippable(), "{text} not skippable");
    }

    /// Skippable fields never produce violations, whatever the record holds.
    #[test]
    fn skippable_fields_never_violate(
        modifier in modifier(),
        value in proptest::option::of(json_value()),
    ) {
        let schema = ItemSchema::from_value("p", &json!({
            "field": format!("[{modifier}] anything"),
            "list": [format!("[{modifier}] element")],
        })).unwrap();
        let mut record = serde_json::Map::new();
        if let Some(v) = value {
            record.insert("field".to_string(), v.clone());
            record.insert("list".to_string(), v);
        }
        let mut out = Vec::new();
        validate(&Value::Object(record), schema.fields(), &FieldPath::root(), &mut out);
        prop_assert!(out.is_empty(), "{out:?}");
    }

    /// A required field that is absent yields exactly one MissingField.
    #[test]
    fn absent_required_field_is_one_missing_violation(desc in required_descriptor()) {
        prop_assume!(kind_of_field(desc.clone()) != "auto");
        let schema = ItemSchema::from_value("p", &json!({"field": desc})).unwrap();
        let mut out = Vec::new();
        validate(&json!({"other": 1}), schema.fields(), &FieldPath::root(), &mut out);
        prop_assert_eq!(out.len(), 1);
        prop_assert_eq!(out[0].field.as_str(), "field");
        prop_assert_eq!(out[0].violation_type, ViolationKind::MissingField);
    }

    /// Validation never panics and every violation path lies under the
    /// caller's path.
    #[test]
    fn violations_stay_under_caller_path(record in json_value(), desc in required_descriptor()) {
        let schema = ItemSchema::from_value("p", &json!({"field": desc, "responses": [{"t": "[int] t"}]})).unwrap();
        let base = FieldPath::root().child("batch").index(0);
        let mut out = Vec::new();
        validate(&record, schema.fields(), &base, &mut out);
        for v in &out {
            prop_assert!(v.field.as_str().starts_with("batch[0]"), "{}", v.field);
        }
    }

    /// Non-object records always produce exactly one TypeMismatch at the root.
    #[test]
    fn non_object_record_single_violation(record in json_value(), desc in required_descriptor()) {
        prop_assume!(!record.is_object());
        let schema = ItemSchema::from_value("p", &json!({"field": desc})).unwrap();
        let mut out = Vec::new();
        validate(&record, schema.fields(), &FieldPath::root(), &mut out);
        prop_assert_eq!(out.len(), 1);
        prop_assert_eq!(out[0].violation_type, ViolationKind::TypeMismatch);
        prop_assert!(out[0].field.is_root());
    }

    /// `[int or float]` accepts every number and nothing else.
    #[test]
    fn int_or_float_accepts_exactly_numbers(value in json_value()) {
        let schema = ItemSchema::from_value("p", &json!({"score": "[int or float] s"})).unwrap();
        let mut out = Vec::new();
        validate(&json!({"score": value.clone()}), schema.fields(), &FieldPath::root(), &mut out);
        prop_assert_eq!(out.is_empty(), value.is_number());
    }

    /// Emptiness of a `_content` list is reported at most once, and only
    /// when the list is empty.
    #[test]
    fn content_lists_must_be_non_empty(items in prop::collection::vec(json_value(), 0..4)) {
        let schema = ItemSchema::from_value("p", &json!({"tags_content": ["tag text"]})).unwrap();
        let empty = items.is_empty();
        let mut out = Vec::new();
        validate(&json!({"tags_content": items}), schema.fields(), &FieldPath::root(), &mut out);
        let empties = out.iter().filter(|v| v.violation_type == ViolationKind::NullOrEmptyValue).count();
        prop_assert_eq!(empties, usize::from(empty));
    }
}

#[test]
fn mapping_kind_borrows_the_nested_fields() {
    let node = SchemaNode::from_value(&json!({"a": "x", "b": "[int] b"}));
    match classify(&node) {
        ValidationKind::RequiredObject(fields) => assert_eq!(fields.len(), 2),
        other => panic!("expected RequiredObject, got {other:?}"),
    }
}
