//! Scalar conversion accessors.
//!
//! Every accessor comes in two flavours:
//!
//! - `try_as_*` is strict and returns [`ValueError::TypeMismatch`] for
//!   strings and containers read as numbers, and [`ValueError::OutOfRange`]
//!   for numbers that do not fit the target type;
//! - `as_*` is lenient and returns the supplied default on any failure.
//!
//! Both return the default for Null. Numbers convert freely between numeric
//! types and booleans when the value is representable; doubles are
//! truncated toward zero.

use super::{Value, ValueType};
use crate::error::{Result, ValueError};

fn mismatch(expected: &'static str, found: ValueType) -> ValueError {
    ValueError::TypeMismatch { expected, found }
}

fn out_of_range(target: &'static str, value: impl ToString) -> ValueError {
    ValueError::OutOfRange {
        target,
        value: value.to_string(),
    }
}

fn lenient<T>(result: Result<T>, default: T) -> T {
    result.unwrap_or_else(|err| {
        tracing::debug!(error = %err, "conversion failed, using default");
        default
    })
}

/// `lo <= value <= hi` for a double bound check; NaN fails.
fn within(value: f64, lo: f64, hi: f64) -> bool {
    value >= lo && value <= hi
}

impl Value {
    pub fn try_as_int(&self, default: i32) -> Result<i32> {
        const TARGET: &str = "i32";
        match *self {
            Value::Null => Ok(default),
            Value::Int(n) => i32::try_from(n).map_err(|_| out_of_range(TARGET, n)),
            Value::UInt(n) => i32::try_from(n).map_err(|_| out_of_range(TARGET, n)),
            Value::Double(d) if within(d, f64::from(i32::MIN), f64::from(i32::MAX)) => Ok(d as i32),
            Value::Double(d) => Err(out_of_range(TARGET, d)),
            Value::Bool(b) => Ok(i32::from(b)),
            _ => Err(mismatch(TARGET, self.value_type())),
        }
    }

    pub fn try_as_uint(&self, default: u32) -> Result<u32> {
        const TARGET: &str = "u32";
        match *self {
            Value::Null => Ok(default),
            Value::Int(n) => u32::try_from(n).map_err(|_| out_of_range(TARGET, n)),
            Value::UInt(n) => u32::try_from(n).map_err(|_| out_of_range(TARGET, n)),
            Value::Double(d) if within(d, 0.0, f64::from(u32::MAX)) => Ok(d as u32),
            Value::Double(d) => Err(out_of_range(TARGET, d)),
            Value::Bool(b) => Ok(u32::from(b)),
            _ => Err(mismatch(TARGET, self.value_type())),
        }
    }

    pub fn try_as_int64(&self, default: i64) -> Result<i64> {
        const TARGET: &str = "i64";
        // 2^63 is exactly representable; i64::MAX is not.
        const UPPER: f64 = 9_223_372_036_854_775_808.0;
        match *self {
            Value::Null => Ok(default),
            Value::Int(n) => Ok(n),
            Value::UInt(n) => i64::try_from(n).map_err(|_| out_of_range(TARGET, n)),
            Value::Double(d) if d >= -UPPER && d < UPPER => Ok(d as i64),
            Value::Double(d) => Err(out_of_range(TARGET, d)),
            Value::Bool(b) => Ok(i64::from(b)),
            _ => Err(mismatch(TARGET, self.value_type())),
        }
    }

    pub fn try_as_uint64(&self, default: u64) -> Result<u64> {
        const TARGET: &str = "u64";
        const UPPER: f64 = 18_446_744_073_709_551_616.0;
        match *self {
            Value::Null => Ok(default),
            Value::Int(n) => u64::try_from(n).map_err(|_| out_of_range(TARGET, n)),
            Value::UInt(n) => Ok(n),
            Value::Double(d) if d >= 0.0 && d < UPPER => Ok(d as u64),
            Value::Double(d) => Err(out_of_range(TARGET, d)),
            Value::Bool(b) => Ok(u64::from(b)),
            _ => Err(mismatch(TARGET, self.value_type())),
        }
    }

    pub fn try_as_double(&self, default: f64) -> Result<f64> {
        match *self {
            Value::Null => Ok(default),
            Value::Int(n) => Ok(n as f64),
            Value::UInt(n) => Ok(n as f64),
            Value::Double(d) => Ok(d),
            Value::Bool(b) => Ok(if b { 1.0 } else { 0.0 }),
            _ => Err(mismatch("f64", self.value_type())),
        }
    }

    /// Narrows through `f64`; magnitudes beyond `f32` become infinite.
    pub fn try_as_float(&self, default: f32) -> Result<f32> {
        match *self {
            Value::Null => Ok(default),
            _ => self
                .try_as_double(0.0)
                .map(|d| d as f32)
                .map_err(|_| mismatch("f32", self.value_type())),
        }
    }

    /// Strings as-is, booleans as `"true"` / `"false"`.
    pub fn try_as_string(&self, default: &str) -> Result<String> {
        match self {
            Value::Null => Ok(default.to_owned()),
            Value::String(s) => Ok(s.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(mismatch("string", self.value_type())),
        }
    }

    pub fn as_int(&self, default: i32) -> i32 {
        lenient(self.try_as_int(default), default)
    }

    pub fn as_uint(&self, default: u32) -> u32 {
        lenient(self.try_as_uint(default), default)
    }

    pub fn as_int64(&self, default: i64) -> i64 {
        lenient(self.try_as_int64(default), default)
    }

    pub fn as_uint64(&self, default: u64) -> u64 {
        lenient(self.try_as_uint64(default), default)
    }

    pub fn as_double(&self, default: f64) -> f64 {
        lenient(self.try_as_double(default), default)
    }

    pub fn as_float(&self, default: f32) -> f32 {
        lenient(self.try_as_float(default), default)
    }

    pub fn as_string(&self, default: &str) -> String {
        match self.try_as_string(default) {
            Ok(s) => s,
            Err(err) => {
                tracing::debug!(error = %err, "conversion failed, using default");
                default.to_owned()
            }
        }
    }

    /// Truthiness; defined for every type.
    ///
    /// Numbers are true when non-zero, strings and containers when
    /// non-empty. Null yields `default`.
    pub fn as_bool(&self, default: bool) -> bool {
        match self {
            Value::Null => default,
            Value::Int(n) => *n != 0,
            Value::UInt(n) => *n != 0,
            Value::Double(d) => *d != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Bool(b) => *b,
            Value::Array(map) | Value::Object(map) => !map.is_empty(),
        }
    }

    /// The text of a string value without copying it.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this value converts to `target` without loss.
    ///
    /// `Int` and `UInt` refer to the 32-bit accessors [`as_int`](Self::as_int)
    /// and [`as_uint`](Self::as_uint).
    ///
    /// Null converts to anything. Converting *to* Null is only possible from
    /// "zero-like" values: `0`, `0.0`, `false`, `""` and empty containers.
    pub fn is_convertible_to(&self, target: ValueType) -> bool {
        match target {
            ValueType::Null => match self {
                Value::Null => true,
                Value::Int(n) => *n == 0,
                Value::UInt(n) => *n == 0,
                Value::Double(d) => *d == 0.0,
                Value::String(s) => s.is_empty(),
                Value::Bool(b) => !b,
                Value::Array(map) | Value::Object(map) => map.is_empty(),
            },
            ValueType::Int => self.has_integral_value() && self.try_as_int(0).is_ok(),
            ValueType::UInt => self.has_integral_value() && self.try_as_uint(0).is_ok(),
            ValueType::Double | ValueType::Bool => self.is_null() || self.is_numeric(),
            ValueType::String => matches!(self, Value::Null | Value::String(_) | Value::Bool(_)),
            ValueType::Array => self.is_array(),
            ValueType::Object => self.is_object(),
        }
    }

    /// Doubles must have no fractional part to count as integers.
    fn has_integral_value(&self) -> bool {
        match self {
            Value::Double(d) => d.fract() == 0.0,
            _ => true,
        }
    }
}
