//! Value formatting for `string(...)` and diagnostics.

use super::Value;

impl Value {
    /// Readable rendering of a value.
    ///
    /// Strings are quoted, containers summarised. Nested arrays inside an
    /// array render as `<array>`, so self-containing arrays are safe to
    /// format.
    pub fn repr(&self) -> String {
        match self {
            Value::Array(items) => {
                let items = items.borrow();
                let elements: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        Value::Array(_) => "<array>".to_string(),
                        other => other.repr(),
                    })
                    .collect();
                format!("(size: {}) [{}]", items.len(), elements.join(", "))
            }
            other => scalar_repr(other),
        }
    }
}

fn scalar_repr(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::Str(s) => quote(s),
        Value::Array(_) => "<array>".to_string(),
        Value::Dict(_) => "<dict>".to_string(),
        Value::Function(_) => "<function>".to_string(),
    }
}

/// Quote a string with whichever quote it doesn't contain, preferring `'`.
fn quote(text: &str) -> String {
    if !text.contains('\'') {
        format!("'{text}'")
    } else if !text.contains('"') {
        format!("\"{text}\"")
    } else {
        format!("'{}'", text.replace('\'', "\\'"))
    }
}

/// Shortest round-trip rendering of a number.
///
/// Magnitudes from `1e-6` up to `1e21` print positionally, everything else
/// in exponent form; `-0` prints as `0`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
