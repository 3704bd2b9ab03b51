//! # jdom-core
//!
//! In-memory JSON value tree ("DOM") with unified array/object storage.
//!
//! Arrays and objects live in the same ordered map keyed by [`Key`], which is
//! either an array index or a member name. Member names are stored either as
//! aliases of `'static` strings (no allocation) or as owned copies, and
//! lookups with a borrowed `&str` never allocate. A small path language
//! ([`Path`]) compiles accessors such as `.items[2].name` once and applies
//! them to any tree.
//!
//! ## Quick start
//!
//! ```rust
//! use jdom_core::{Path, Value};
//!
//! let mut doc = Value::Null;
//! doc["name"] = Value::from("Alice");
//! doc["scores"].append(95).unwrap();
//! doc["scores"].append(87).unwrap();
//!
//! assert_eq!(doc["scores"].size(), 2);
//! assert_eq!(doc["scores"][1].as_int(0), 87);
//!
//! let path: Path = ".scores[0]".parse().unwrap();
//! assert_eq!(path.resolve(&doc).as_int(0), 95);
//! assert!(path.resolve(&Value::Null).is_null());
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value`, `ValueType`, conversions, ordering, `[]` operators
//! - [`key`]: `Key`, `KeyRef`, the shared `ObjectValues` container
//! - [`path`]: `Path` compilation, `resolve` / `resolve_or` / `make`
//! - [`iter`]: `Iter` / `IterMut` over array and object entries
//! - [`error`]: `ValueError` and `PathError`
//!
//! With `serde`, `Value` implements `Serialize` and `Deserialize`, so any
//! serde format (e.g. `serde_json`) can parse into and render from a tree.

pub mod error;
pub mod iter;
pub mod key;
pub mod path;
mod serde_impl;
pub mod value;

pub use error::{PathError, ValueError};
pub use iter::{Iter, IterMut};
pub use key::{ArrayIndex, DuplicationPolicy, Key, KeyRef, ObjectValues};
pub use path::{Path, PathArgument, MAX_PATH_ARGUMENTS};
pub use value::{CommentPlacement, StaticStr, Value, ValueType};
