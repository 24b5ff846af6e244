//! Best-effort type inference for raw field text
//!
//! Every string maps to exactly one [`TypedValue`]. Rules are tried in a
//! fixed order and the first match wins:
//!
//! 1. empty after trimming -> `""`
//! 2. `null` / `none` (any case) -> null
//! 3. `true` / `yes` -> true, `false` / `no` -> false (any case)
//! 4. base-10 integer of any width, unless the text contains `.`, `e`, `E` or `+`
//! 5. finite decimal float, exponents and a leading `+` allowed
//! 6. otherwise the original, untrimmed text

use crate::types::{Integer, RawRecord, TypedRecord, TypedValue};

const NULL_WORDS: [&str; 2] = ["null", "none"];
const TRUE_WORDS: [&str; 2] = ["true", "yes"];
const FALSE_WORDS: [&str; 2] = ["false", "no"];

/// Characters that keep a string away from integer parsing.
///
/// This means `"+5"` is never an integer: it fails here and is picked up
/// by the float rule as `5.0`.
const NON_INTEGER_CHARS: [char; 4] = ['.', 'e', 'E', '+'];

/// Infer the native type of a single raw field value
pub fn infer(raw: &str) -> TypedValue {
    let s = raw.trim();
    if s.is_empty() {
        return TypedValue::String(String::new());
    }

    if matches_word(s, &NULL_WORDS) {
        return TypedValue::Null;
    }
    if matches_word(s, &TRUE_WORDS) {
        return TypedValue::Boolean(true);
    }
    if matches_word(s, &FALSE_WORDS) {
        return TypedValue::Boolean(false);
    }

    if is_integer_candidate(s) {
        if let Some(n) = Integer::parse(s) {
            return TypedValue::Integer(n);
        }
    }

    if let Some(f) = parse_float(s) {
        return TypedValue::Float(f);
    }

    TypedValue::String(raw.to_string())
}

/// Infer every field of a record, keeping key order
pub fn infer_record(raw: &RawRecord) -> TypedRecord {
    raw.iter()
        .map(|(key, value)| (key.clone(), infer(value)))
        .collect()
}

fn matches_word(s: &str, words: &[&str]) -> bool {
    words.iter().any(|w| s.eq_ignore_ascii_case(w))
}

fn is_integer_candidate(s: &str) -> bool {
    !s.contains(NON_INTEGER_CHARS)
}

/// Finite floats only; `inf` and `nan` have no JSON representation.
fn parse_float(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}
