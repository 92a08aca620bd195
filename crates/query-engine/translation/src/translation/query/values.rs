//! Handle the translation of literal values.

use query_engine_sql::sql;

/// Convert a JSON value into a SQL value.
///
/// Integers stay integers, using `u64` above `i64::MAX`. Every other number
/// becomes a float. Arrays and objects are passed through as JSON documents.
pub fn translate_json_value(value: &serde_json::Value) -> sql::ast::Value {
    match value {
        serde_json::Value::Number(num) => match (num.as_i64(), num.as_u64()) {
            (Some(int), _) => sql::ast::Value::Int8(int),
            (None, Some(uint)) => sql::ast::Value::UInt8(uint),
            (None, None) => sql::ast::Value::Float8(num.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::Bool(b) => sql::ast::Value::Bool(*b),
        serde_json::Value::String(s) => sql::ast::Value::String(s.to_string()),
        serde_json::Value::Null => sql::ast::Value::Null,
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            sql::ast::Value::JsonValue(value.clone())
        }
    }
}

/// The text a pattern is built from: strings as-is, anything else in its JSON
/// spelling (`5`, `true`, `null`).
pub fn json_value_to_pattern_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_stay_integers() {
        assert_eq!(translate_json_value(&json!(18)), sql::ast::Value::Int8(18));
        assert_eq!(translate_json_value(&json!(-3)), sql::ast::Value::Int8(-3));
    }

    #[test]
    fn integers_above_i64_keep_every_digit() {
        let value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(
            translate_json_value(&value),
            sql::ast::Value::UInt8(18_446_744_073_709_551_615)
        );
    }

    #[test]
    fn fractions_become_floats() {
        assert_eq!(translate_json_value(&json!(2.5)), sql::ast::Value::Float8(2.5));
    }

    #[test]
    fn scalars_map_directly() {
        assert_eq!(translate_json_value(&json!(true)), sql::ast::Value::Bool(true));
        assert_eq!(translate_json_value(&json!(null)), sql::ast::Value::Null);
        assert_eq!(
            translate_json_value(&json!("x")),
            sql::ast::Value::String("x".to_string())
        );
    }

    #[test]
    fn documents_pass_through() {
        assert_eq!(
            translate_json_value(&json!({"a": [1]})),
            sql::ast::Value::JsonValue(json!({"a": [1]}))
        );
    }

    #[test]
    fn pattern_text_spells_out_non_strings() {
        assert_eq!(json_value_to_pattern_text(&json!("foo")), "foo");
        assert_eq!(json_value_to_pattern_text(&json!(5)), "5");
        assert_eq!(json_value_to_pattern_text(&json!(null)), "null");
    }
}
