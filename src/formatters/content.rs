use serde_json::Value;

use crate::schemas::ResultContent;

/// Top-level object keys that carry bulk payload data and drown out the
/// fields worth reading. Stripped from re-parsed string content only.
const NOISY_KEYS: &[&str] = &["data", "field_definitions"];

/// Number of array elements shown while a result is collapsed.
pub const ARRAY_PREVIEW_LEN: usize = 5;

/// Display form of a tool-result payload, decided once at parse time.
/// `Json` only ever holds a complex value (object or array); everything
/// else flows through `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayContent {
    Text(String),
    Json(Value),
}

/// True iff the value is an array or an object.
pub fn is_complex(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Classify a tool-result payload for display.
///
/// String content is strictly JSON-parsed; a complex parse result has the
/// noisy keys stripped (the parse produced a fresh value, the caller's
/// message is untouched). A scalar parse result or a parse failure falls
/// back to the raw string verbatim. Pre-parsed content is classified
/// directly and never key-stripped.
pub fn parse_result_content(content: &ResultContent) -> DisplayContent {
    match content {
        ResultContent::Text(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(mut value) if is_complex(&value) => {
                strip_noisy_keys(&mut value);
                DisplayContent::Json(value)
            }
            _ => DisplayContent::Text(raw.clone()),
        },
        ResultContent::Value(value) => {
            if is_complex(value) {
                DisplayContent::Json(value.clone())
            } else {
                DisplayContent::Text(scalar_text(value))
            }
        }
    }
}

fn strip_noisy_keys(value: &mut Value) {
    if let Value::Object(map) = value {
        for key in NOISY_KEYS {
            map.shift_remove(*key);
        }
    }
}

/// Plain-text coercion of a scalar: strings unquoted, everything else as
/// its JSON text.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The full (untruncated) display string for a payload. Structured values
/// are pretty-printed with stable 2-space indentation.
pub fn display_string(content: &DisplayContent) -> String {
    match content {
        DisplayContent::Text(text) => text.clone(),
        DisplayContent::Json(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

/// Key/value rows for the structured table view.
///
/// Arrays use zero-based index keys and cap at [`ARRAY_PREVIEW_LEN`] rows
/// while collapsed; objects always show every key in insertion order. The
/// asymmetry is deliberate and matches the expand toggle in
/// [`can_toggle`].
pub fn table_rows(value: &Value, expanded: bool) -> Vec<(String, String)> {
    match value {
        Value::Array(items) => {
            let shown = if expanded {
                items.len()
            } else {
                items.len().min(ARRAY_PREVIEW_LEN)
            };
            items[..shown]
                .iter()
                .enumerate()
                .map(|(idx, item)| (idx.to_string(), cell_text(item)))
                .collect()
        }
        Value::Object(map) => map
            .iter()
            .map(|(key, item)| (key.clone(), cell_text(item)))
            .collect(),
        _ => Vec::new(),
    }
}

fn cell_text(value: &Value) -> String {
    if is_complex(value) {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    } else {
        scalar_text(value)
    }
}

/// Whether an expand/collapse control applies: plain text that truncates,
/// or an array with more elements than the collapsed preview shows.
/// Objects never toggle.
pub fn can_toggle(content: &DisplayContent) -> bool {
    match content {
        DisplayContent::Text(text) => super::truncation::should_truncate(text),
        DisplayContent::Json(Value::Array(items)) => items.len() > ARRAY_PREVIEW_LEN,
        DisplayContent::Json(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_complex_for_scalars() {
        assert!(!is_complex(&Value::Null));
        assert!(!is_complex(&json!(true)));
        assert!(!is_complex(&json!(42)));
        assert!(!is_complex(&json!(1.5)));
        assert!(!is_complex(&json!("text")));
    }

    #[test]
    fn test_is_complex_for_containers() {
        assert!(is_complex(&json!([])));
        assert!(is_complex(&json!([1, 2])));
        assert!(is_complex(&json!({})));
        assert!(is_complex(&json!({"a": 1})));
    }

    #[test]
    fn test_parse_strips_noisy_keys_from_reparsed_object() {
        let raw = r#"{"rows": 2, "data": [1, 2, 3], "field_definitions": {"a": "int"}}"#;
        let content = ResultContent::Text(raw.to_string());

        match parse_result_content(&content) {
            DisplayContent::Json(value) => {
                let obj = value.as_object().unwrap();
                assert!(obj.contains_key("rows"));
                assert!(!obj.contains_key("data"));
                assert!(!obj.contains_key("field_definitions"));
            }
            other => panic!("expected json content, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_does_not_strip_preparsed_content() {
        let content = ResultContent::Value(json!({"data": [1], "rows": 1}));

        match parse_result_content(&content) {
            DisplayContent::Json(value) => {
                assert!(value.as_object().unwrap().contains_key("data"));
            }
            other => panic!("expected json content, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_failure_falls_back_to_raw_string() {
        let raw = "not json {";
        let content = ResultContent::Text(raw.to_string());
        assert_eq!(
            parse_result_content(&content),
            DisplayContent::Text(raw.to_string())
        );
    }

    #[test]
    fn test_scalar_json_string_stays_raw_text() {
        // "42" parses, but a number is not complex; the raw string wins.
        let content = ResultContent::Text("42".to_string());
        assert_eq!(
            parse_result_content(&content),
            DisplayContent::Text("42".to_string())
        );

        // Same for a quoted JSON string: the original text is kept verbatim.
        let content = ResultContent::Text("\"hello\"".to_string());
        assert_eq!(
            parse_result_content(&content),
            DisplayContent::Text("\"hello\"".to_string())
        );
    }

    #[test]
    fn test_preparsed_scalar_coerces_to_plain_text() {
        assert_eq!(
            parse_result_content(&ResultContent::Value(json!("plain"))),
            DisplayContent::Text("plain".to_string())
        );
        assert_eq!(
            parse_result_content(&ResultContent::Value(json!(7))),
            DisplayContent::Text("7".to_string())
        );
        assert_eq!(
            parse_result_content(&ResultContent::Value(Value::Null)),
            DisplayContent::Text("null".to_string())
        );
    }

    #[test]
    fn test_display_string_pretty_prints_json() {
        let content = DisplayContent::Json(json!({"a": 1}));
        assert_eq!(display_string(&content), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_display_string_keeps_object_key_order() {
        let raw = r#"{"zeta": 1, "alpha": 2, "mid": 3}"#;
        let content = parse_result_content(&ResultContent::Text(raw.to_string()));
        let rendered = display_string(&content);
        let zeta = rendered.find("zeta").unwrap();
        let alpha = rendered.find("alpha").unwrap();
        let mid = rendered.find("mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_table_rows_array_collapsed_caps_at_five() {
        let value = json!([10, 11, 12, 13, 14, 15, 16, 17]);
        let rows = table_rows(&value, false);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], ("0".to_string(), "10".to_string()));
        assert_eq!(rows[4], ("4".to_string(), "14".to_string()));
    }

    #[test]
    fn test_table_rows_array_expanded_shows_all() {
        let value = json!([10, 11, 12, 13, 14, 15, 16, 17]);
        let rows = table_rows(&value, true);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[7], ("7".to_string(), "17".to_string()));
    }

    #[test]
    fn test_table_rows_object_ignores_expanded_flag() {
        let value = json!({
            "a": 1, "b": 2, "c": 3, "d": 4, "e": 5, "f": 6, "g": 7
        });
        assert_eq!(table_rows(&value, false).len(), 7);
        assert_eq!(table_rows(&value, true).len(), 7);
    }

    #[test]
    fn test_table_rows_object_keeps_insertion_order() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<String> = table_rows(&value, false)
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_table_rows_nested_complex_cell_is_pretty_printed() {
        let value = json!({"nested": {"x": 1}, "flat": "text"});
        let rows = table_rows(&value, false);
        assert_eq!(rows[0].1, "{\n  \"x\": 1\n}");
        assert_eq!(rows[1].1, "text");
    }

    #[test]
    fn test_table_rows_scalar_input_is_empty() {
        assert!(table_rows(&json!(5), false).is_empty());
        assert!(table_rows(&json!("s"), true).is_empty());
    }

    #[test]
    fn test_can_toggle_text() {
        let short = DisplayContent::Text("one line".to_string());
        assert!(!can_toggle(&short));

        let long = DisplayContent::Text("x".repeat(501));
        assert!(can_toggle(&long));

        let many_lines = DisplayContent::Text("a\nb\nc\nd\ne".to_string());
        assert!(can_toggle(&many_lines));
    }

    #[test]
    fn test_can_toggle_array_only_when_longer_than_preview() {
        let five = DisplayContent::Json(json!([1, 2, 3, 4, 5]));
        assert!(!can_toggle(&five));

        let six = DisplayContent::Json(json!([1, 2, 3, 4, 5, 6]));
        assert!(can_toggle(&six));
    }

    #[test]
    fn test_can_toggle_never_for_objects() {
        let big: Value = serde_json::to_value(
            (0..50)
                .map(|i| (format!("key{i}"), i))
                .collect::<std::collections::BTreeMap<_, _>>(),
        )
        .unwrap();
        assert!(!can_toggle(&DisplayContent::Json(big)));
    }

    #[test]
    fn test_parse_is_pure() {
        let content = ResultContent::Text(r#"{"data": 1, "keep": 2}"#.to_string());
        let first = parse_result_content(&content);
        let second = parse_result_content(&content);
        assert_eq!(first, second);
        // The caller's content is untouched by the stripping.
        assert_eq!(
            content,
            ResultContent::Text(r#"{"data": 1, "keep": 2}"#.to_string())
        );
    }
}
