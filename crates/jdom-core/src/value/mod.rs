//! The JSON value tree.
//!
//! [`Value`] is a tagged union over the eight JSON-ish variants. Arrays and
//! objects share one representation, an [`ObjectValues`] map; arrays are
//! keyed by [`Key::Index`] and objects by [`Key::Name`]. Because an array is
//! a map, it may be sparse: `size()` is the highest stored index plus one,
//! not the number of stored entries.
//!
//! Mutating access promotes Null in place: indexing a Null value by position
//! turns it into an empty array first, indexing it by name turns it into an
//! empty object. Read-only access never mutates and reports misses as
//! `None` or as the shared [`Value::null_ref`] constant.
//!
//! # Example
//! ```
//! use jdom_core::Value;
//!
//! let mut v = Value::Null;
//! v["x"].append(1).unwrap();
//! v["x"].append(2).unwrap();
//! assert!(v.is_object());
//! assert_eq!(v["x"].size(), 2);
//! assert_eq!(v["x"][1].as_int(0), 2);
//! ```

mod compare;
mod convert;
mod index;

pub use index::StaticStr;

use crate::error::{Result, ValueError};
use crate::key::{self, ArrayIndex, Key, KeyRef, ObjectValues};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Type tag of a [`Value`].
///
/// The declaration order is the ordinal order used when values of different
/// types are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Null,
    Int,
    UInt,
    Double,
    String,
    Bool,
    Array,
    Object,
}

impl ValueType {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Int => "int",
            ValueType::UInt => "uint",
            ValueType::Double => "double",
            ValueType::String => "string",
            ValueType::Bool => "bool",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a comment would be attached relative to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentPlacement {
    /// On the line before the value.
    Before,
    /// After the value, on the same line.
    AfterOnSameLine,
    /// On the line after the value (root value only).
    After,
}

/// A JSON value.
///
/// `Clone` is a deep copy: owned strings and containers are duplicated,
/// strings borrowed from `'static` storage keep aliasing it.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Int(i64),
    UInt(u64),
    Double(f64),
    /// UTF-8 text, either owned or borrowed from static storage.
    String(Cow<'static, str>),
    Bool(bool),
    /// Index-keyed entries.
    Array(ObjectValues),
    /// Name-keyed entries.
    Object(ObjectValues),
}

/// Returned by read-only lookups that miss.
static NULL: Value = Value::Null;

fn structural(operation: &'static str, found: ValueType) -> ValueError {
    ValueError::Structural { operation, found }
}

impl Value {
    /// The default value of a type: `0`, `0.0`, `false`, `""`, or an empty
    /// container.
    pub fn new(value_type: ValueType) -> Self {
        match value_type {
            ValueType::Null => Value::Null,
            ValueType::Int => Value::Int(0),
            ValueType::UInt => Value::UInt(0),
            ValueType::Double => Value::Double(0.0),
            ValueType::String => Value::String(Cow::Borrowed("")),
            ValueType::Bool => Value::Bool(false),
            ValueType::Array => Value::Array(ObjectValues::new()),
            ValueType::Object => Value::Object(ObjectValues::new()),
        }
    }

    /// A string value aliasing `text` without copying it.
    pub const fn from_static(text: &'static str) -> Self {
        Value::String(Cow::Borrowed(text))
    }

    /// The shared read-only Null.
    pub fn null_ref() -> &'static Value {
        &NULL
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Int(_) => ValueType::Int,
            Value::UInt(_) => ValueType::UInt,
            Value::Double(_) => ValueType::Double,
            Value::String(_) => ValueType::String,
            Value::Bool(_) => ValueType::Bool,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_uint(&self) -> bool {
        matches!(self, Value::UInt(_))
    }

    /// Int, UInt or Bool.
    pub fn is_integral(&self) -> bool {
        matches!(self, Value::Int(_) | Value::UInt(_) | Value::Bool(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// Integral or Double.
    pub fn is_numeric(&self) -> bool {
        self.is_integral() || self.is_double()
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// True for arrays and for Null, which indexing promotes to an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Null | Value::Array(_))
    }

    /// True for objects and for Null, which member access promotes to an
    /// object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Null | Value::Object(_))
    }

    /// Number of logical elements.
    ///
    /// - scalars: `0`
    /// - arrays: highest stored index + 1, so gaps count
    /// - objects: number of members
    pub fn size(&self) -> ArrayIndex {
        match self {
            Value::Array(map) => map
                .last_key_value()
                .and_then(|(key, _)| key.index())
                .map_or(0, |last| last.saturating_add(1)),
            Value::Object(map) => ArrayIndex::try_from(map.len()).unwrap_or(ArrayIndex::MAX),
            _ => 0,
        }
    }

    /// True for Null and for containers of size 0. Scalars such as `0`,
    /// `false` or `""` are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null | Value::Array(_) | Value::Object(_) => self.size() == 0,
            _ => false,
        }
    }

    /// `index < size()`. The slot may still be a gap in a sparse array.
    pub fn is_valid_index(&self, index: ArrayIndex) -> bool {
        index < self.size()
    }

    /// The backing map of an array or object.
    pub fn items(&self) -> Option<&ObjectValues> {
        match self {
            Value::Array(map) | Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Member names of an object in key order; empty for anything else.
    pub fn member_names(&self) -> Vec<&str> {
        match self {
            Value::Object(map) => map.keys().map(Key::member_name).collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_member(&self, name: &str) -> bool {
        self.try_get_member(name).is_some()
    }

    /// The stored element at `index`. Never mutates; `None` for gaps,
    /// out-of-range indices and non-arrays.
    pub fn try_get(&self, index: ArrayIndex) -> Option<&Value> {
        match self {
            Value::Array(map) => key::find(map, KeyRef::Index(index)),
            _ => None,
        }
    }

    pub fn try_get_mut(&mut self, index: ArrayIndex) -> Option<&mut Value> {
        match self {
            Value::Array(map) => key::find_mut(map, KeyRef::Index(index)),
            _ => None,
        }
    }

    /// The member called `name`. Never mutates; `None` when absent or when
    /// this is not an object.
    pub fn try_get_member(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => key::find(map, KeyRef::Name(name)),
            _ => None,
        }
    }

    pub fn try_get_member_mut(&mut self, name: &str) -> Option<&mut Value> {
        match self {
            Value::Object(map) => key::find_mut(map, KeyRef::Name(name)),
            _ => None,
        }
    }

    /// The stored element at `index`, required to be present.
    ///
    /// # Errors
    /// `Structural` if this is neither Null nor an array, `NotFound` if the
    /// slot is not stored.
    pub fn get(&self, index: ArrayIndex) -> Result<&Value> {
        if !self.is_array() {
            return Err(structural("get an array element", self.value_type()));
        }
        self.try_get(index)
            .ok_or(ValueError::NotFound(Key::Index(index)))
    }

    /// The member called `name`, required to be present.
    ///
    /// # Errors
    /// `Structural` if this is neither Null nor an object, `NotFound` if the
    /// member is absent.
    pub fn get_member(&self, name: &str) -> Result<&Value> {
        if !self.is_object() {
            return Err(structural("get an object member", self.value_type()));
        }
        self.try_get_member(name)
            .ok_or_else(|| ValueError::NotFound(Key::owned(name)))
    }

    /// A copy of the element at `index`, or a copy of `default`.
    pub fn get_or(&self, index: ArrayIndex, default: &Value) -> Value {
        self.try_get(index).unwrap_or(default).clone()
    }

    /// A copy of the member called `name`, or a copy of `default`.
    pub fn get_member_or(&self, name: &str, default: &Value) -> Value {
        self.try_get_member(name).unwrap_or(default).clone()
    }

    /// The element at `index`, created as Null if missing. A Null value is
    /// promoted to an empty array first.
    ///
    /// `ArrayIndex::MAX` is never stored, so `size()` always fits an
    /// `ArrayIndex`.
    ///
    /// # Errors
    /// `Structural` if this is neither Null nor an array, `OutOfRange` for
    /// `ArrayIndex::MAX`.
    pub fn element_mut(&mut self, index: ArrayIndex) -> Result<&mut Value> {
        if !self.is_array() {
            return Err(structural("index an array element", self.value_type()));
        }
        if index == ArrayIndex::MAX {
            return Err(ValueError::OutOfRange {
                target: "array index",
                value: index.to_string(),
            });
        }
        if self.is_null() {
            *self = Value::new(ValueType::Array);
        }
        match self {
            Value::Array(map) => Ok(key::find_or_insert_null(
                map,
                KeyRef::Index(index),
                || Key::Index(index),
            )),
            other => Err(structural("index an array element", other.value_type())),
        }
    }

    /// The member called `name`, created as Null if missing. A Null value is
    /// promoted to an empty object first. A newly stored key owns a copy of
    /// `name`; lookups of existing members do not allocate.
    ///
    /// # Errors
    /// `Structural` if this is neither Null nor an object.
    pub fn member_mut(&mut self, name: &str) -> Result<&mut Value> {
        self.member_mut_with(name, || Key::owned(name))
    }

    /// Like [`member_mut`](Self::member_mut), but a newly stored key aliases
    /// `name` instead of copying it.
    ///
    /// # Errors
    /// `Structural` if this is neither Null nor an object.
    pub fn static_member_mut(&mut self, name: &'static str) -> Result<&mut Value> {
        self.member_mut_with(name, || Key::from_static(name))
    }

    fn member_mut_with(&mut self, name: &str, make_key: impl FnOnce() -> Key) -> Result<&mut Value> {
        if self.is_null() {
            *self = Value::new(ValueType::Object);
        }
        match self {
            Value::Object(map) => Ok(key::find_or_insert_null(map, KeyRef::Name(name), make_key)),
            other => Err(structural("access an object member", other.value_type())),
        }
    }

    /// Stores `value` at index `size()` and returns a reference to it.
    ///
    /// # Errors
    /// `Structural` if this is neither Null nor an array, `OutOfRange` once
    /// the array is full.
    pub fn append(&mut self, value: impl Into<Value>) -> Result<&mut Value> {
        let index = self.size();
        let slot = self.element_mut(index)?;
        *slot = value.into();
        Ok(slot)
    }

    /// Changes the logical size of an array.
    ///
    /// Null is promoted to an empty array first. Growing stores Null at
    /// `new_size - 1` only; the slots in between stay gaps. Shrinking drops
    /// every stored index `>= new_size`.
    ///
    /// # Errors
    /// `Structural` if this is neither Null nor an array.
    pub fn resize(&mut self, new_size: ArrayIndex) -> Result<()> {
        if !self.is_array() {
            return Err(structural("resize", self.value_type()));
        }
        if self.is_null() {
            *self = Value::new(ValueType::Array);
        }
        let old_size = self.size();
        if new_size == old_size {
            return Ok(());
        }
        if new_size == 0 {
            return self.clear();
        }
        if new_size > old_size {
            self.element_mut(new_size - 1)?;
        } else if let Value::Array(map) = self {
            drop(map.split_off(&Key::Index(new_size)));
        }
        Ok(())
    }

    /// Removes every entry of an array or object, keeping its type.
    ///
    /// # Errors
    /// `Structural` for scalars other than Null.
    pub fn clear(&mut self) -> Result<()> {
        match self {
            Value::Null => Ok(()),
            Value::Array(map) | Value::Object(map) => {
                map.clear();
                Ok(())
            }
            other => Err(structural("clear", other.value_type())),
        }
    }

    /// Removes and returns the member called `name`, or Null if it is absent.
    ///
    /// # Errors
    /// `Structural` if this is neither Null nor an object.
    pub fn remove_member(&mut self, name: &str) -> Result<Value> {
        match self {
            Value::Null => Ok(Value::Null),
            Value::Object(map) => Ok(key::take(map, KeyRef::Name(name)).unwrap_or_default()),
            other => Err(structural("remove a member", other.value_type())),
        }
    }

    /// Removes and returns the element stored at `index`, or Null if it is
    /// a gap. Later elements keep their indices.
    ///
    /// # Errors
    /// `Structural` if this is neither Null nor an array.
    pub fn remove_index(&mut self, index: ArrayIndex) -> Result<Value> {
        match self {
            Value::Null => Ok(Value::Null),
            Value::Array(map) => Ok(key::take(map, KeyRef::Index(index)).unwrap_or_default()),
            other => Err(structural("remove an element", other.value_type())),
        }
    }

    /// Exchanges the contents of two values in O(1).
    pub fn swap(&mut self, other: &mut Value) {
        std::mem::swap(self, other);
    }

    /// Moves the contents out, leaving the default value of the same type
    /// behind (an empty array stays an array). `std::mem::take` leaves Null
    /// instead.
    pub fn take(&mut self) -> Value {
        let empty = Value::new(self.value_type());
        std::mem::replace(self, empty)
    }

    // Comments are accepted for parser compatibility but not retained.

    pub fn set_comment(&mut self, _comment: &str, _placement: CommentPlacement) {}

    pub fn has_comment(&self, _placement: CommentPlacement) -> bool {
        false
    }

    pub fn comment(&self, _placement: CommentPlacement) -> Option<&str> {
        None
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::UInt(u64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::UInt(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Double(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

/// Copies the text; use [`Value::from_static`] to alias it instead.
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(Cow::Owned(value.to_owned()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for Value {
    fn from(value: Cow<'static, str>) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

/// Collects into a dense array indexed from 0. Items past the largest
/// storable index are dropped.
impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let map = (0..ArrayIndex::MAX)
            .zip(iter)
            .map(|(index, value): (ArrayIndex, T)| (Key::Index(index), value.into()))
            .collect();
        Value::Array(map)
    }
}
