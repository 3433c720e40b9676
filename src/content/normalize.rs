//! Normalization of a locale document against the default locale.
//!
//! The merged document always has the default document's shape, so consumers
//! never need per-field fallbacks.

use serde_json::Value;

/// Merge `localized` over `default`.
///
/// - objects merge key-wise; keys the locale omits take the default value, and
///   keys the default does not have are dropped
/// - `null` takes the default value
/// - arrays whose elements all carry a string `id` are matched by id: the
///   result has the default's elements in the default's order, each merged with
///   the locale element of the same id; ids only the locale has are dropped
/// - other arrays take the locale's elements, each merged with the default
///   element at the same index when there is one
/// - a type mismatch keeps the default value
/// - otherwise the locale's scalar wins
pub fn merge(default: &Value, localized: &Value) -> Value {
    match (default, localized) {
        (_, Value::Null) => default.clone(),
        (Value::Object(base), Value::Object(over)) => Value::Object(
            base.iter()
                .map(|(key, base_value)| {
                    let merged = match over.get(key) {
                        Some(over_value) => merge(base_value, over_value),
                        None => base_value.clone(),
                    };
                    (key.clone(), merged)
                })
                .collect(),
        ),
        (Value::Array(base), Value::Array(over)) if is_id_keyed(base) && is_id_keyed(over) => {
            Value::Array(
                base.iter()
                    .map(|base_value| match find_by_id(over, element_id(base_value)) {
                        Some(over_value) => merge(base_value, over_value),
                        None => base_value.clone(),
                    })
                    .collect(),
            )
        }
        (Value::Array(base), Value::Array(over)) => Value::Array(
            over.iter()
                .enumerate()
                .map(|(index, over_value)| match base.get(index) {
                    Some(base_value) => merge(base_value, over_value),
                    None => over_value.clone(),
                })
                .collect(),
        ),
        (Value::String(_), Value::String(_))
        | (Value::Number(_), Value::Number(_))
        | (Value::Bool(_), Value::Bool(_)) => localized.clone(),
        _ => default.clone(),
    }
}

/// The string `id` of an array element, if it has one.
pub fn element_id(value: &Value) -> Option<&str> {
    value.get("id").and_then(Value::as_str)
}

/// Whether every element of a non-empty array carries a string `id`.
pub fn is_id_keyed(items: &[Value]) -> bool {
    !items.is_empty() && items.iter().all(|item| element_id(item).is_some())
}

/// First element whose `id` equals `id`.
pub fn find_by_id<'a>(items: &'a [Value], id: Option<&str>) -> Option<&'a Value> {
    id.and_then(|id| items.iter().find(|item| element_id(item) == Some(id)))
}

/// Human-readable JSON type name, for validation messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether two documents have the same keys, array lengths and leaf types.
pub fn same_shape(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, value)| {
                    right
                        .get(key)
                        .is_some_and(|other| same_shape(value, other))
                })
        }
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len() && left.iter().zip(right).all(|(l, r)| same_shape(l, r))
        }
        _ => type_name(a) == type_name(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== merge Tests ====================

    #[test]
    fn test_merge_missing_key_takes_default() {
        let default = json!({"hero": {"title": "Hello", "cta": "Go"}});
        let localized = json!({"hero": {"title": "Hola"}});

        assert_eq!(
            merge(&default, &localized),
            json!({"hero": {"title": "Hola", "cta": "Go"}})
        );
    }

    #[test]
    fn test_merge_drops_unknown_keys() {
        let default = json!({"title": "Hello"});
        let localized = json!({"title": "Hola", "extra": "x"});

        assert_eq!(merge(&default, &localized), json!({"title": "Hola"}));
    }

    #[test]
    fn test_merge_null_takes_default() {
        let default = json!({"title": "Hello"});
        let localized = json!({"title": null});

        assert_eq!(merge(&default, &localized), json!({"title": "Hello"}));
    }

    #[test]
    fn test_merge_type_mismatch_keeps_default() {
        let default = json!({"items": ["a", "b"], "title": "Hello"});
        let localized = json!({"items": "oops", "title": ["nope"]});

        assert_eq!(merge(&default, &localized), default);
    }

    #[test]
    fn test_merge_arrays_use_locale_length() {
        let default = json!([{"q": "Q1", "a": "A1"}, {"q": "Q2", "a": "A2"}]);
        let localized = json!([{"q": "P1"}, {"q": "P2", "a": "R2"}, {"q": "P3", "a": "R3"}]);

        assert_eq!(
            merge(&default, &localized),
            json!([{"q": "P1", "a": "A1"}, {"q": "P2", "a": "R2"}, {"q": "P3", "a": "R3"}])
        );
    }

    #[test]
    fn test_merge_complete_document_is_identity() {
        let default = json!({"a": {"b": [1, 2]}, "c": true});
        let localized = json!({"a": {"b": [3, 4]}, "c": false});

        assert_eq!(merge(&default, &localized), localized);
    }

    #[test]
    fn test_merge_id_keyed_arrays_match_by_id() {
        let default = json!([
            {"id": "investors", "title": "Investors", "links": ["/invest"]},
            {"id": "company", "title": "Company", "links": ["/about", "/faq"]},
        ]);
        let localized = json!([
            {"id": "company", "title": "公司"},
            {"id": "investors", "title": "投资者"},
        ]);

        assert_eq!(
            merge(&default, &localized),
            json!([
                {"id": "investors", "title": "投资者", "links": ["/invest"]},
                {"id": "company", "title": "公司", "links": ["/about", "/faq"]},
            ])
        );
    }

    #[test]
    fn test_merge_id_keyed_arrays_restore_omitted_elements() {
        let default = json!([
            {"id": "creators", "title": "Creators"},
            {"id": "company", "title": "Company"},
        ]);
        let localized = json!([
            {"id": "creators", "title": "Creadores"},
            {"id": "press", "title": "Prensa"},
        ]);

        let merged = merge(&default, &localized);
        assert_eq!(
            merged,
            json!([
                {"id": "creators", "title": "Creadores"},
                {"id": "company", "title": "Company"},
            ])
        );
        assert!(same_shape(&default, &merged));
    }

    #[test]
    fn test_merge_arrays_without_ids_stay_positional() {
        let default = json!([{"id": "a", "title": "A"}, {"title": "B"}]);
        let localized = json!([{"title": "X"}]);

        assert_eq!(merge(&default, &localized), json!([{"id": "a", "title": "X"}]));
    }

    // ==================== same_shape Tests ====================

    #[test]
    fn test_same_shape_ignores_text() {
        assert!(same_shape(
            &json!({"title": "Hello", "items": ["a"]}),
            &json!({"title": "こんにちは", "items": ["b"]})
        ));
    }

    #[test]
    fn test_same_shape_detects_differences() {
        assert!(!same_shape(&json!({"a": "x"}), &json!({"b": "x"})));
        assert!(!same_shape(&json!({"a": ["x"]}), &json!({"a": ["x", "y"]})));
        assert!(!same_shape(&json!({"a": "x"}), &json!({"a": 1})));
        assert!(!same_shape(&json!({"a": "x"}), &json!({"a": "x", "b": "y"})));
    }
}
