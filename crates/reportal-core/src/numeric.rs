//! Cell value coercion: decide whether table cell text is a number.

use serde::Serialize;

/// Outcome of coercing a cell's text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    /// The input was empty.
    Null,
    /// The input did not start with a number; kept verbatim.
    Text(String),
}

/// Coerces cell text into a number where its prefix parses as one.
///
/// When the text has a numeric prefix, the first comma is dropped as a
/// thousands delimiter and the prefix is parsed again. Only the first comma
/// goes, so `"1,300,000"` becomes `1300`; callers rely on that, keep it.
///
/// Empty text is [`CellValue::Null`]; anything else without a numeric prefix
/// comes back unchanged as [`CellValue::Text`].
pub fn coerce_number(s: &str) -> CellValue {
    match parse_float_prefix(s) {
        Some(first) => {
            let stripped = s.replacen(',', "", 1);
            CellValue::Number(parse_float_prefix(&stripped).unwrap_or(first))
        }
        None if s.is_empty() => CellValue::Null,
        None => CellValue::Text(s.to_string()),
    }
}

/// Parses the longest numeric prefix of `s` the way JavaScript `parseFloat` does.
///
/// Leading whitespace is skipped; then an optional sign followed by
/// `Infinity` or decimal digits with an optional fraction and exponent.
/// Trailing content is ignored. `None` where `parseFloat` yields `NaN`.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let src = s.trim_start();
    let bytes = src.as_bytes();
    let mut i = 0usize;

    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    if src[i..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let mut int_digits = 0usize;
    while matches!(bytes.get(i), Some(b) if b.is_ascii_digit()) {
        int_digits += 1;
        i += 1;
    }

    let mut frac_digits = 0usize;
    if bytes.get(i) == Some(&b'.') {
        let dot = i;
        i += 1;
        while matches!(bytes.get(i), Some(b) if b.is_ascii_digit()) {
            frac_digits += 1;
            i += 1;
        }
        if frac_digits == 0 {
            i = dot;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let exp_start = i;
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let mut exp_digits = 0usize;
        while matches!(bytes.get(i), Some(b) if b.is_ascii_digit()) {
            exp_digits += 1;
            i += 1;
        }
        if exp_digits == 0 {
            i = exp_start;
        }
    }

    src[..i].parse::<f64>().ok()
}
