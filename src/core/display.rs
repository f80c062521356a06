//! Rendering of medication records into display lines.
//!
//! Everything here is a pure function of a single record, shared by the
//! one-shot `search` command and the interactive prompt.

use serde_json::Value;

use crate::core::medication::MedicationRecord;

/// Suffix appended to rendered prices
pub const CURRENCY_SUFFIX: &str = "L.E.";

/// Separator used when joining list-valued fields
pub const LIST_SEPARATOR: &str = " - ";

/// Placeholder for empty values
pub const EMPTY_VALUE: &str = "N/A";

/// Full `Key: Value` rendering of every field in the record.
///
/// Known fields come first (name, category, active ingredient, price),
/// followed by any extra fields in source order.
#[must_use]
pub fn detail_lines(record: &MedicationRecord) -> Vec<String> {
    let mut lines = vec![
        format!("Name: {}", or_empty(&record.name)),
        format!("Category: {}", or_empty(record.category.label())),
        format!("Active Ingredient: {}", or_empty(&record.active_ingredient)),
        format!("Price: {}", format_price(record.price)),
    ];

    for (key, value) in &record.extra {
        lines.push(format!("{}: {}", title_case(key), format_value(value)));
    }

    lines
}

/// Compact three-line card used when listing alternatives
#[must_use]
pub fn summary_lines(record: &MedicationRecord) -> Vec<String> {
    vec![
        format!("{} ({})", record.name, record.category.label()),
        format!("Ingredient: {}", or_empty(&record.active_ingredient)),
        format!("Price: {}", format_price(record.price)),
    ]
}

/// Render a price without trailing zero noise, followed by the currency
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{} {CURRENCY_SUFFIX}", format_number(price))
}

/// Title-case a field key: `active_ingredient` becomes `Active Ingredient`
#[must_use]
pub fn title_case(key: &str) -> String {
    key.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Render an arbitrary JSON value for display
#[must_use]
pub fn format_value(value: &Value) -> String {
    if is_falsy(value) {
        return EMPTY_VALUE.to_string();
    }

    match value {
        Value::Array(items) => items
            .iter()
            .map(format_scalar)
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR),
        other => format_scalar(other),
    }
}

fn format_scalar(value: &Value) -> String {
    match value {
        Value::Null => EMPTY_VALUE.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n
            .as_i64()
            .map(|i| i.to_string())
            .or_else(|| n.as_f64().map(format_number))
            .unwrap_or_else(|| n.to_string()),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

// f64 Display drops a trailing ".0"
fn format_number(n: f64) -> String {
    format!("{n}")
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn or_empty(s: &str) -> &str {
    if s.trim().is_empty() {
        EMPTY_VALUE
    } else {
        s
    }
}
