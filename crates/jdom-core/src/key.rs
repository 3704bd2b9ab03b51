//! Container keys shared by array and object values.
//!
//! Arrays and objects are stored in the same ordered map, [`ObjectValues`].
//! What tells them apart at the key level is whether a key carries a name:
//!
//! - [`Key::Index`]: an array slot (`0`, `1`, ...)
//! - [`Key::Name`]: an object member, either borrowed from `'static`
//!   storage (no-duplication) or owned (duplicate)
//!
//! Lookups go through [`KeyRef`], a borrowed view that never allocates.
//! A `KeyRef` is only duplicated into an owned [`Key`] when it is actually
//! stored in a map (duplicate-on-copy), so probing an object with a
//! transient `&str` costs nothing.
//!
//! Ordering compares indices numerically and names byte-wise. A name is
//! never compared by index. Indices sort before names so the order stays
//! total, although a well-formed tree never mixes the two in one container.

use crate::value::Value;
use std::borrow::{Borrow, Cow};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Array position type. Sizes and indices of array values use this width.
pub type ArrayIndex = u32;

/// Backing store of both array and object values.
pub type ObjectValues = BTreeMap<Key, Value>;

/// How a member name handed to [`Key::with_policy`] is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuplicationPolicy {
    /// Alias the caller's `'static` buffer; copies alias it too.
    NoDuplication,
    /// Own a heap copy; every copy duplicates again.
    Duplicate,
    /// Alias while transient, duplicate once stored. Transient keys are
    /// [`KeyRef`]s; a `Key` built with this policy is the stored copy and
    /// therefore owns its bytes.
    DuplicateOnCopy,
}

/// A key stored in an [`ObjectValues`] map.
#[derive(Debug, Clone)]
pub enum Key {
    /// Array slot.
    Index(ArrayIndex),
    /// Object member name.
    Name(Cow<'static, str>),
}

impl Key {
    /// Key aliasing a name with static lifetime. Never allocates.
    pub const fn from_static(name: &'static str) -> Self {
        Key::Name(Cow::Borrowed(name))
    }

    /// Key owning a copy of `name`.
    pub fn owned(name: impl Into<String>) -> Self {
        Key::Name(Cow::Owned(name.into()))
    }

    pub fn with_policy(name: &'static str, policy: DuplicationPolicy) -> Self {
        match policy {
            DuplicationPolicy::NoDuplication => Key::from_static(name),
            DuplicationPolicy::Duplicate | DuplicationPolicy::DuplicateOnCopy => {
                Key::owned(name)
            }
        }
    }

    /// The array index, or `None` for a member name.
    pub fn index(&self) -> Option<ArrayIndex> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    /// The member name, or `None` for an array index.
    pub fn name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }

    /// The member name, or `""` for an array index.
    pub fn member_name(&self) -> &str {
        self.name().unwrap_or("")
    }

    /// True for a name that aliases static storage.
    pub fn is_static(&self) -> bool {
        matches!(self, Key::Name(Cow::Borrowed(_)))
    }

    /// The key as a value: a UInt for an index, a String for a name.
    /// Static names stay borrowed.
    pub fn to_value(&self) -> Value {
        match self {
            Key::Index(index) => Value::UInt(u64::from(*index)),
            Key::Name(name) => Value::String(name.clone()),
        }
    }

    /// Borrowed view used for comparisons and lookups.
    pub fn as_key_ref(&self) -> KeyRef<'_> {
        match self {
            Key::Index(index) => KeyRef::Index(*index),
            Key::Name(name) => KeyRef::Name(name),
        }
    }
}

impl From<ArrayIndex> for Key {
    fn from(index: ArrayIndex) -> Self {
        Key::Index(index)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(Cow::Owned(name))
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::owned(name)
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.as_key_ref() == other.as_key_ref()
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_key_ref().cmp(&other.as_key_ref())
    }
}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_key_ref().hash(state);
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_key_ref(), f)
    }
}

/// A borrowed key used to search a map without allocating.
///
/// Derived ordering matches [`Key`]: indices first, numerically, then names
/// byte-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyRef<'a> {
    Index(ArrayIndex),
    Name(&'a str),
}

impl KeyRef<'_> {
    /// Duplicates the name (if any) into an owned, storable key.
    pub fn to_key(self) -> Key {
        match self {
            KeyRef::Index(index) => Key::Index(index),
            KeyRef::Name(name) => Key::owned(name),
        }
    }
}

impl From<ArrayIndex> for KeyRef<'_> {
    fn from(index: ArrayIndex) -> Self {
        KeyRef::Index(index)
    }
}

impl<'a> From<&'a str> for KeyRef<'a> {
    fn from(name: &'a str) -> Self {
        KeyRef::Name(name)
    }
}

impl fmt::Display for KeyRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRef::Index(index) => write!(f, "[{index}]"),
            KeyRef::Name(name) => write!(f, "{name:?}"),
        }
    }
}

/// Lookup seam that lets `ObjectValues` be searched with a [`KeyRef`].
///
/// `Key` borrows as `dyn KeyLookup`, and both `Key` and `KeyRef` implement
/// it, so `map.get(&key_ref as &dyn KeyLookup)` finds owned entries from a
/// borrowed lookup key.
pub trait KeyLookup {
    fn key_ref(&self) -> KeyRef<'_>;
}

impl KeyLookup for Key {
    fn key_ref(&self) -> KeyRef<'_> {
        self.as_key_ref()
    }
}

impl KeyLookup for KeyRef<'_> {
    fn key_ref(&self) -> KeyRef<'_> {
        *self
    }
}

impl<'a> Borrow<dyn KeyLookup + 'a> for Key {
    fn borrow(&self) -> &(dyn KeyLookup + 'a) {
        self
    }
}

impl PartialEq for dyn KeyLookup + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.key_ref() == other.key_ref()
    }
}

impl Eq for dyn KeyLookup + '_ {}

impl PartialOrd for dyn KeyLookup + '_ {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for dyn KeyLookup + '_ {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key_ref().cmp(&other.key_ref())
    }
}

/// Looks up `key` without allocating.
pub(crate) fn find<'m>(map: &'m ObjectValues, key: KeyRef<'_>) -> Option<&'m Value> {
    let lookup: &dyn KeyLookup = &key;
    map.get(lookup)
}

pub(crate) fn find_mut<'m>(map: &'m mut ObjectValues, key: KeyRef<'_>) -> Option<&'m mut Value> {
    let lookup: &dyn KeyLookup = &key;
    map.get_mut(lookup)
}

pub(crate) fn take(map: &mut ObjectValues, key: KeyRef<'_>) -> Option<Value> {
    let lookup: &dyn KeyLookup = &key;
    map.remove(lookup)
}

/// Returns the entry for `key`, inserting Null under `make_key()` first when
/// it is missing. `make_key` only runs (and only allocates) on a miss.
pub(crate) fn find_or_insert_null<'m>(
    map: &'m mut ObjectValues,
    key: KeyRef<'_>,
    make_key: impl FnOnce() -> Key,
) -> &'m mut Value {
    let lookup: &dyn KeyLookup = &key;
    if !map.contains_key(lookup) {
        map.insert(make_key(), Value::Null);
    }
    match map.get_mut(lookup) {
        Some(value) => value,
        None => unreachable!("entry inserted above"),
    }
}
