use crate::config::ConfigurationParserError;
use serde_yaml::Value;

type Result<T> = std::result::Result<T, ConfigurationParserError>;

fn required<'a>(entry: &'a Value, key: &str, name: &str) -> Result<&'a Value> {
    match entry.get(key) {
        Some(Value::Null) | None => Err(ConfigurationParserError::AdapterParsingError(format!(
            "{} ({}) is required.",
            name, key
        ))),
        Some(v) => Ok(v),
    }
}

fn mistyped(key: &str, name: &str, expected: &str) -> ConfigurationParserError {
    ConfigurationParserError::AdapterParsingError(format!(
        "{} ({}) should be {}.",
        name, key, expected
    ))
}

fn string_or_int(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

/// Canonical form of an entry id: strings as-is, integers in decimal.
/// Anything else counts as no id at all.
pub(super) fn identifier(entry: &Value) -> Option<String> {
    entry.get("id").and_then(string_or_int)
}

pub(super) fn required_str(entry: &Value, key: &str, name: &str) -> Result<String> {
    required(entry, key, name)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| mistyped(key, name, "a string"))
}

/// Like [`required_str`] but also takes integers, so a numeric password
/// written without quotes still works.
pub(super) fn required_string_or_int(entry: &Value, key: &str, name: &str) -> Result<String> {
    string_or_int(required(entry, key, name)?).ok_or_else(|| mistyped(key, name, "a string"))
}

pub(super) fn required_int(entry: &Value, key: &str, name: &str) -> Result<i64> {
    required(entry, key, name)?
        .as_i64()
        .ok_or_else(|| mistyped(key, name, "an integer"))
}

pub(super) fn required_port(entry: &Value, key: &str, name: &str) -> Result<u16> {
    let port = required_int(entry, key, name)?;
    if port < 0 || port > i64::from(u16::MAX) {
        return Err(mistyped(key, name, "an integer between 0 and 65535"));
    }
    Ok(port as u16)
}

/// Delay in milliseconds.
pub(super) fn required_delay(entry: &Value, key: &str, name: &str) -> Result<u64> {
    let delay = required_int(entry, key, name)?;
    if delay < 0 {
        return Err(mistyped(key, name, "a non-negative integer"));
    }
    Ok(delay as u64)
}

pub(super) fn optional_bool(entry: &Value, key: &str, name: &str, default: bool) -> Result<bool> {
    match entry.get(key) {
        Some(Value::Null) | None => Ok(default),
        Some(v) => v.as_bool().ok_or_else(|| mistyped(key, name, "a boolean")),
    }
}
