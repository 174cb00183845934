//! Numeric and boolean literals.

use serde_json::{Number, Value};

use crate::error::{Error, Result};

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

pub(crate) fn parse_float(value: &Value) -> Option<f64> {
    value.as_number().and_then(Number::as_f64)
}

/// Integral values within the exact `f64` range are emitted as JSON integers,
/// so `3` reads back as `3` rather than `3.0`. Negative zero keeps its sign.
pub(crate) fn format_float(value: f64) -> Result<Value> {
    if !value.is_finite() {
        return Err(Error::NonFiniteNumber { value });
    }
    let negative_zero = value == 0.0 && value.is_sign_negative();
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER && !negative_zero {
        #[allow(clippy::cast_possible_truncation)]
        return Ok(Value::from(value as i64));
    }
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or(Error::NonFiniteNumber { value })
}

pub(crate) fn parse_non_negative_integer(value: &Value) -> Option<u64> {
    value.as_u64()
}

pub(crate) fn format_non_negative_integer(value: u64) -> Value {
    Value::from(value)
}

pub(crate) fn parse_boolean(value: &Value) -> Option<bool> {
    value.as_bool()
}

pub(crate) fn format_boolean(value: bool) -> Value {
    Value::Bool(value)
}
