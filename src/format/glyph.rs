use serde_json::Value;

/// Glyph shown for truthy values.
pub const SUCCESS_GLYPH: &str = "✅";

/// Glyph shown for falsy or missing values.
pub const FAILURE_GLYPH: &str = "❌";

/// Map a value to a fixed success or failure glyph.
#[must_use]
pub fn bool_glyph(val: Option<&Value>) -> &'static str {
    if val.is_some_and(is_truthy) { SUCCESS_GLYPH } else { FAILURE_GLYPH }
}

/// Truthiness in the sense the fixture data relies on: null, `false`, zero and
/// the empty string are falsy; everything else is truthy.
#[must_use]
pub fn is_truthy(val: &Value) -> bool {
    match val {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthy_values() {
        assert_eq!(bool_glyph(Some(&json!(true))), SUCCESS_GLYPH);
        assert_eq!(bool_glyph(Some(&json!(1))), SUCCESS_GLYPH);
        assert_eq!(bool_glyph(Some(&json!("WASM"))), SUCCESS_GLYPH);
    }

    #[test]
    fn test_falsy_values() {
        assert_eq!(bool_glyph(Some(&json!(false))), FAILURE_GLYPH);
        assert_eq!(bool_glyph(Some(&json!(0))), FAILURE_GLYPH);
        assert_eq!(bool_glyph(Some(&json!(""))), FAILURE_GLYPH);
        assert_eq!(bool_glyph(Some(&Value::Null)), FAILURE_GLYPH);
        assert_eq!(bool_glyph(None), FAILURE_GLYPH);
    }
}
