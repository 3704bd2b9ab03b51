//! Iteration over array and object entries.
//!
//! Iterators walk the backing map in key order and yield `(&Key, &Value)`
//! pairs; [`Key::index`], [`Key::member_name`] and [`Key::to_value`] give
//! the array-index, member-name and key-as-value views of each entry.
//!
//! Iterating a scalar is legal and yields nothing. Such an iterator is
//! *unbound*: it is not attached to any container, and every unbound
//! iterator behaves identically whatever value produced it.
//!
//! The remaining length is known in O(1) (the map tracks it), so
//! `iter.len()` is the distance to the end without walking it.
//!
//! Two [`Iter`]s are equal when both are unbound, or when both are bound
//! and have the same entries left, by identity rather than content.

use crate::key::{Key, ObjectValues};
use crate::value::Value;
use std::collections::btree_map;
use std::iter::FusedIterator;

/// Shared iterator over the entries of an array or object.
#[derive(Debug, Clone, Default)]
pub struct Iter<'a> {
    inner: Option<btree_map::Iter<'a, Key, Value>>,
}

/// Mutable iterator over the entries of an array or object.
#[derive(Debug, Default)]
pub struct IterMut<'a> {
    inner: Option<btree_map::IterMut<'a, Key, Value>>,
}

impl<'a> Iter<'a> {
    fn bound(map: &'a ObjectValues) -> Self {
        Self {
            inner: Some(map.iter()),
        }
    }

    /// False for the iterator of a scalar value.
    pub fn is_bound(&self) -> bool {
        self.inner.is_some()
    }
}

/// Identity of the first and last remaining entries.
fn position(
    iter: &btree_map::Iter<'_, Key, Value>,
) -> (Option<*const Value>, Option<*const Value>) {
    let mut iter = iter.clone();
    let front = iter.next().map(|(_, value)| value as *const Value);
    let back = iter.next_back().map(|(_, value)| value as *const Value);
    (front, back)
}

impl PartialEq for Iter<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (None, None) => true,
            (Some(a), Some(b)) => a.len() == b.len() && position(a) == position(b),
            _ => false,
        }
    }
}

impl Eq for Iter<'_> {}

impl<'a> IterMut<'a> {
    fn bound(map: &'a mut ObjectValues) -> Self {
        Self {
            inner: Some(map.iter_mut()),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.inner.is_some()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> Iterator for IterMut<'a> {
    type Item = (&'a Key, &'a mut Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl DoubleEndedIterator for IterMut<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back()
    }
}

impl ExactSizeIterator for IterMut<'_> {}

impl FusedIterator for IterMut<'_> {}

impl Value {
    /// Entries of an array or object in key order; empty and unbound for
    /// scalars.
    pub fn iter(&self) -> Iter<'_> {
        match self {
            Value::Array(map) | Value::Object(map) => Iter::bound(map),
            _ => Iter::default(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_> {
        match self {
            Value::Array(map) | Value::Object(map) => IterMut::bound(map),
            _ => IterMut::default(),
        }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator + '_ {
        self.iter().map(|(_, value)| value)
    }
}

impl<'a> IntoIterator for &'a Value {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Value {
    type Item = (&'a Key, &'a mut Value);
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
