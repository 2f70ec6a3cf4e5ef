use serde_json::{Number, Value};
use tracing::{debug, warn};

use crate::constants::{AGE_KEY, NAME_KEY};
use crate::types::{PatientRecord, RawRecord};

/// Normalizes one raw record: title-cases `name` and coerces `age` to an integer.
///
/// Both keys keep their position in the record; a missing key is appended.
/// No other field is touched and no input makes this fail.
pub fn normalize_record(mut raw: RawRecord) -> PatientRecord {
    let name = normalize_name(raw.get(NAME_KEY));
    let age = coerce_age(raw.get(AGE_KEY));

    raw.insert(NAME_KEY.to_string(), Value::String(name));
    raw.insert(AGE_KEY.to_string(), Value::Number(Number::from(age)));

    PatientRecord::from_normalized(raw)
}

fn normalize_name(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(name)) => title_case(name),
        None | Some(Value::Null) => String::new(),
        Some(other) => {
            warn!("Non-text patient name {} replaced with empty name", other);
            String::new()
        }
    }
}

/// Upper-cases the first character of every whitespace-delimited word and
/// lower-cases the rest. Whitespace itself is preserved.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            // multi-char mappings (ß -> SS) keep only their first letter upper
            let mut upper = c.to_uppercase();
            out.extend(upper.next());
            out.extend(upper.flat_map(char::to_lowercase));
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// Coerces a raw age to an integer; anything unusable becomes `0`.
pub fn coerce_age(value: Option<&Value>) -> i64 {
    let age = match value {
        Some(Value::Number(n)) => number_to_age(n),
        Some(Value::String(s)) => parse_int_literal(s),
        Some(Value::Bool(b)) => Some(i64::from(*b)),
        _ => None,
    };

    age.unwrap_or_else(|| {
        debug!("Unusable age {:?} coerced to 0", value);
        0
    })
}

fn number_to_age(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if n.as_u64().is_some() {
        // only reachable above i64::MAX
        return Some(i64::MAX);
    }
    // `as` saturates; fractional ages truncate toward zero
    n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)
}

/// Parses base-10 integer text: surrounding whitespace, an optional sign and
/// single underscores between digits are accepted.
fn parse_int_literal(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.as_bytes().first()? {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    let mut value: i64 = 0;
    for c in digits.chars().filter(|c| *c != '_') {
        let d = i64::from(c.to_digit(10)?);
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(d)?
        } else {
            value.checked_add(d)?
        };
    }

    Some(value)
}
