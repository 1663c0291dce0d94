//! Loose accessors for Gingr records, whose field types vary between
//! tenants (`"1"` vs `1`, `""` vs `null`).

use serde_json::Value;

/// The elements of a collection payload, or nothing when it is not an array.
pub fn records(payload: &Value) -> &[Value] {
    payload.as_array().map(Vec::as_slice).unwrap_or_default()
}

/// JavaScript-style truthiness.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// A string or array with at least one element.
pub fn has_items(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        _ => false,
    }
}

/// Text of a grouping field, or `"Unknown"` when the field is falsy.
pub fn label(record: &Value, field: &str) -> String {
    let value = record.get(field);
    if !is_truthy(value) {
        return "Unknown".to_string();
    }
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "Unknown".to_string(),
    }
}

/// Format with two decimals, rounding exact halves away from zero.
pub fn fixed_cents(value: f64) -> String {
    // Only multiples of 1/8 can sit exactly on a half cent.
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let rounded = (value * 100.0).round() / 100.0;
        return format!("{rounded:.2}");
    }
    format!("{value:.2}")
}

/// Parse a monetary amount the way a lenient float parser would: numbers as
/// is, strings by their leading numeric prefix, anything else as zero.
pub fn amount(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => leading_float(s),
        _ => None,
    };
    parsed.filter(|f| f.is_finite()).unwrap_or(0.0)
}

fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let candidate: &str = {
        let end = s
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        &s[..end]
    };

    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
}
