//! Value coercion from raw extractor output to canonical field values.

use tbi_model::{FieldKind, FieldValue, RawValue};

/// Coerces a raw value to the declared shape of its canonical field.
///
/// Returns `None` when the value cannot be coerced; the caller records a
/// type-coercion anomaly and drops the field.
#[must_use]
pub fn coerce(kind: FieldKind, raw: &RawValue) -> Option<FieldValue> {
    match kind {
        FieldKind::Percentile => coerce_percentile(raw),
        FieldKind::Numeric => coerce_number(raw),
        FieldKind::Text => match raw {
            RawValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(FieldValue::Text(trimmed.to_string()))
                }
            }
            RawValue::Number(n) => Some(FieldValue::Text(tbi_model::format_numeric(*n))),
        },
    }
}

fn coerce_percentile(raw: &RawValue) -> Option<FieldValue> {
    let value = match raw {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => f64::from(parse_percentile_text(s)?),
    };
    FieldValue::percentile(value).ok()
}

fn coerce_number(raw: &RawValue) -> Option<FieldValue> {
    match raw {
        RawValue::Number(n) => Some(FieldValue::Number(*n)),
        RawValue::Text(s) => parse_number_text(s).map(FieldValue::Number),
    }
}

/// Parses a percentile that may arrive as "12", "12th", "12%", or
/// "12th %ile": the leading integer wins, anything after it is treated as
/// suffix decoration.
#[must_use]
pub fn parse_percentile_text(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    let digits: String = trimmed
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Parses a numeric measurement, tolerating unit suffixes ("53.2 cm").
#[must_use]
pub fn parse_number_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return Some(value);
    }
    let mut token = String::new();
    for ch in trimmed.chars() {
        if ch.is_ascii_digit() || ch == '.' || (token.is_empty() && ch == '-') {
            token.push(ch);
        } else if !token.is_empty() {
            break;
        }
    }
    token.parse().ok()
}
