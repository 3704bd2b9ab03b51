//! `value[i]` and `value["name"]` operators.
//!
//! Reading never mutates: a miss, a gap or a wrong type yields the shared
//! Null. Writing goes through [`Value::element_mut`] /
//! [`Value::member_mut`], so Null is promoted and missing entries are
//! created; using the wrong kind of key on a scalar or on the other kind of
//! container panics.

use super::{Value, NULL};
use crate::key::ArrayIndex;
use std::borrow::Cow;
use std::ops::{Index, IndexMut};

/// A string with static lifetime that should be aliased, not copied.
///
/// Converting it into a [`Value`] gives a borrowed string, and indexing an
/// object with it stores a key that aliases the same bytes.
///
/// ```
/// use jdom_core::{StaticStr, Value};
///
/// const CODE: StaticStr = StaticStr("code");
/// let mut object = Value::Null;
/// object[CODE] = Value::from(1234);
/// assert!(object.items().unwrap().keys().next().unwrap().is_static());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaticStr(pub &'static str);

impl From<StaticStr> for Value {
    fn from(text: StaticStr) -> Self {
        Value::String(Cow::Borrowed(text.0))
    }
}

impl Index<ArrayIndex> for Value {
    type Output = Value;

    fn index(&self, index: ArrayIndex) -> &Value {
        self.try_get(index).unwrap_or(&NULL)
    }
}

impl IndexMut<ArrayIndex> for Value {
    fn index_mut(&mut self, index: ArrayIndex) -> &mut Value {
        match self.element_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        self.try_get_member(name).unwrap_or(&NULL)
    }
}

impl IndexMut<&str> for Value {
    fn index_mut(&mut self, name: &str) -> &mut Value {
        match self.member_mut(name) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Index<&String> for Value {
    type Output = Value;

    fn index(&self, name: &String) -> &Value {
        &self[name.as_str()]
    }
}

impl IndexMut<&String> for Value {
    fn index_mut(&mut self, name: &String) -> &mut Value {
        &mut self[name.as_str()]
    }
}

impl Index<StaticStr> for Value {
    type Output = Value;

    fn index(&self, name: StaticStr) -> &Value {
        &self[name.0]
    }
}

impl IndexMut<StaticStr> for Value {
    fn index_mut(&mut self, name: StaticStr) -> &mut Value {
        match self.static_member_mut(name.0) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
