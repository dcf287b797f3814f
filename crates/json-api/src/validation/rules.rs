//! Field rules and the value coercions they share with typed extraction.

use std::borrow::Cow;

use serde_json::Value;

/// A predicate over one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    /// Present and textually non-empty; `null` counts as empty.
    NotEmpty,

    /// Textual form is a decimal number.
    Numeric,

    /// A number strictly greater than zero.
    Positive,

    /// A number greater than or equal to zero.
    NonNegative,

    /// A boolean, or one of `true`, `false`, `1`, `0`.
    Boolean,

    /// A base-10 integer, leading zeros allowed, that fits in an `i64`.
    Integer,
}

impl Rule {
    /// Whether `value` (absent when `None`) satisfies this rule.
    pub(crate) fn check(self, value: Option<&Value>) -> bool {
        match self {
            Self::NotEmpty => text(value).is_some_and(|text| !text.is_empty()),
            Self::Numeric => text(value).is_some_and(|text| is_numeric(&text)),
            Self::Positive => number(value).is_some_and(|number| number > 0.0),
            Self::NonNegative => number(value).is_some_and(|number| number >= 0.0),
            Self::Boolean => boolean(value).is_some(),
            Self::Integer => integer(value).is_some(),
        }
    }
}

/// Textual form of a scalar field. Arrays and objects have none.
pub(crate) fn text(value: Option<&Value>) -> Option<Cow<'_, str>> {
    match value? {
        Value::Null => Some(Cow::Borrowed("")),
        Value::String(text) => Some(Cow::Borrowed(text)),
        Value::Number(number) => Some(Cow::Owned(number.to_string())),
        Value::Bool(flag) => Some(Cow::Owned(flag.to_string())),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// JSON numbers and numeric strings as a finite `f64`.
pub(crate) fn number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) if is_numeric(text) => text.parse().ok()?,
        _ => return None,
    };

    number.is_finite().then_some(number)
}

pub(crate) fn boolean(value: Option<&Value>) -> Option<bool> {
    if let Some(Value::Bool(flag)) = value {
        return Some(*flag);
    }

    match value {
        Some(Value::String(_) | Value::Number(_)) => match text(value)?.as_ref() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn integer(value: Option<&Value>) -> Option<i64> {
    let text = text(value)?;

    if is_integer(&text) {
        text.parse().ok()
    } else {
        None
    }
}

/// `[+-]?([0-9]*\.)?[0-9]+`
fn is_numeric(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    let (whole, fraction) = unsigned.split_once('.').unwrap_or(("", unsigned));

    !fraction.is_empty() && all_digits(whole) && all_digits(fraction)
}

/// `[+-]?[0-9]+`
fn is_integer(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    !unsigned.is_empty() && all_digits(unsigned)
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|byte| byte.is_ascii_digit())
}
