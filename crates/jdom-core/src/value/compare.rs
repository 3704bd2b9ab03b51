//! Total ordering and equality of values.
//!
//! Values of different types order by [`ValueType`] ordinal
//! (`Null < Int < UInt < Double < String < Bool < Array < Object`), so an
//! `Int(1)` and a `UInt(1)` are different values. Within a type:
//!
//! - numbers and booleans compare by value; doubles use numeric order with
//!   `0.0 == -0.0`, and NaNs fall back to `f64::total_cmp` so the order
//!   stays total
//! - strings compare byte-wise
//! - arrays and objects compare by entry count first, then entry by entry
//!   in key order, `(key, value)` pairwise

use super::{Value, ValueType};
use std::cmp::Ordering;

impl Value {
    /// `-1`, `0` or `1` as `self` is less than, equal to, or greater than
    /// `other`.
    pub fn compare(&self, other: &Value) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

fn cmp_double(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::UInt(a), Value::UInt(b)) => a.cmp(b),
            (Value::Double(a), Value::Double(b)) => cmp_double(*a, *b),
            (Value::String(a), Value::String(b)) => a.as_bytes().cmp(b.as_bytes()),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) | (Value::Object(a), Value::Object(b)) => a
                .len()
                .cmp(&b.len())
                .then_with(|| a.iter().cmp(b.iter())),
            _ => self.value_type().cmp(&other.value_type()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialEq<ValueType> for Value {
    fn eq(&self, other: &ValueType) -> bool {
        self.value_type() == *other
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::String(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(n) if n == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}
