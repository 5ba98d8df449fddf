use serde_json::Value;

/// Text bound for a JSON field. The column type decides whether it is
/// accepted, e.g. `"0.11"` and `0.11` both land in a DECIMAL column.
pub fn sql_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(if *flag { "1" } else { "0" }.to_string()),
        other => Some(other.to_string()),
    }
}

pub fn bind_text(value: &Option<Value>) -> Option<String> {
    value.as_ref().and_then(sql_text)
}

/// `""`, `0`, `false` and `null`.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
