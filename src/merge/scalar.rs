use serde_json::Value;

/// Renders a JSON scalar as flag text.
///
/// Booleans become `true`/`false`, integers have no decimal point, floats use
/// the shortest representation that parses back to the same `f64`, and
/// strings are passed through unchanged. Any other value is rejected with the
/// name of its JSON type.
pub fn scalar_text(value: &Value) -> Result<String, &'static str> {
    match value {
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Ok(u.to_string())
            } else if let Some(f) = n.as_f64() {
                Ok(f.to_string())
            } else {
                Err("number")
            }
        }
        Value::String(s) => Ok(s.clone()),
        Value::Null => Err("null"),
        Value::Array(_) => Err("array"),
        Value::Object(_) => Err("object"),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
