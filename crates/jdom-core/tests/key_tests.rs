//! Key identity, ordering and ownership.

use jdom_core::{DuplicationPolicy, Key, KeyRef, Value};
use std::cmp::Ordering;

#[test]
fn indices_compare_numerically() {
    assert!(Key::Index(2) < Key::Index(10));
    assert_eq!(Key::Index(3), Key::from(3u32));
}

#[test]
fn names_compare_bytewise() {
    assert!(Key::from("Zebra") < Key::from("apple"));
    assert!(Key::from("a") < Key::from("ab"));
}

#[test]
fn ownership_does_not_affect_identity() {
    let borrowed = Key::from_static("name");
    let owned = Key::owned("name");
    assert!(borrowed.is_static());
    assert!(!owned.is_static());
    assert_eq!(borrowed, owned);
    assert_eq!(borrowed.cmp(&owned), Ordering::Equal);
}

#[test]
fn numeric_looking_names_are_not_indices() {
    let name = Key::from("0");
    assert_ne!(name, Key::Index(0));
    assert_eq!(name.index(), None);
    assert!(Key::Index(u32::MAX) < name);
}

#[test]
fn policies_choose_storage() {
    let aliased = Key::with_policy("k", DuplicationPolicy::NoDuplication);
    let copied = Key::with_policy("k", DuplicationPolicy::Duplicate);
    let stored = Key::with_policy("k", DuplicationPolicy::DuplicateOnCopy);
    assert!(aliased.is_static());
    assert!(!copied.is_static());
    assert!(!stored.is_static());
    assert_eq!(aliased, stored);
}

#[test]
fn static_names_alias_across_clones() {
    const NAME: &str = "alias";
    let key = Key::from_static(NAME);
    let copy = key.clone();
    assert_eq!(copy.name().map(str::as_ptr), Some(NAME.as_ptr()));
}

#[test]
fn key_ref_duplicates_when_stored() {
    let buffer = String::from("transient");
    let borrowed = KeyRef::from(buffer.as_str());
    let stored = borrowed.to_key();
    drop(buffer);
    assert_eq!(stored.member_name(), "transient");
    assert!(!stored.is_static());
    assert_eq!(KeyRef::from(4u32).to_key(), Key::Index(4));
}

#[test]
fn key_views() {
    let index = Key::Index(7);
    assert_eq!(index.index(), Some(7));
    assert_eq!(index.name(), None);
    assert_eq!(index.member_name(), "");
    assert_eq!(index.to_value(), Value::UInt(7));

    let name = Key::from("title");
    assert_eq!(name.index(), None);
    assert_eq!(name.name(), Some("title"));
    assert_eq!(name.to_value(), "title");
}

#[test]
fn key_value_of_a_static_name_stays_borrowed() {
    const NAME: &str = "static-name";
    let value = Key::from_static(NAME).to_value();
    assert_eq!(value.as_str().map(str::as_ptr), Some(NAME.as_ptr()));
}

#[test]
fn display_forms() {
    assert_eq!(Key::Index(3).to_string(), "[3]");
    assert_eq!(Key::from("a b").to_string(), "\"a b\"");
}
