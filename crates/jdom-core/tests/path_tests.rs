//! Path compilation, resolution and node creation.

use jdom_core::{Path, PathArgument, PathError, Value, ValueError, ValueType, MAX_PATH_ARGUMENTS};

fn sample() -> Value {
    let mut doc = Value::Null;
    doc["items"].append("zero").unwrap();
    doc["items"][1]["name"] = Value::from("one");
    doc["count"] = Value::from(2);
    doc
}

// ============================================================================
// Compilation
// ============================================================================

#[test]
fn placeholders_bind_arguments_in_order() {
    let path = Path::new(
        ".%[%].%",
        &[
            PathArgument::from("items"),
            PathArgument::from(1),
            PathArgument::from("name"),
        ],
    )
    .unwrap();
    assert_eq!(path.to_string(), ".items[1].name");
}

#[test]
fn canonical_form_roundtrips() {
    for expr in [".a[0].b", "[3][4]", ".x", "."] {
        let path: Path = expr.parse().unwrap();
        let again: Path = path.to_string().parse().unwrap();
        assert_eq!(path, again, "{expr}");
    }
}

#[test]
fn leading_dot_is_optional() {
    let with_dot: Path = ".a.b".parse().unwrap();
    let without: Path = "a.b".parse().unwrap();
    assert_eq!(with_dot, without);
}

#[test]
fn missing_argument_is_an_error() {
    assert_eq!(
        Path::new(".a.%", &[]),
        Err(PathError::MissingArgument { position: 3 })
    );
}

#[test]
fn argument_kind_must_match_placeholder() {
    assert_eq!(
        Path::new("[%]", &[PathArgument::from("name")]),
        Err(PathError::ArgumentKindMismatch {
            position: 1,
            expected: "an index",
        })
    );
    assert_eq!(
        Path::new(".%", &[PathArgument::from(0)]),
        Err(PathError::ArgumentKindMismatch {
            position: 1,
            expected: "a name",
        })
    );
}

#[test]
fn too_many_arguments_is_an_error() {
    let args: Vec<PathArgument> = (0..=MAX_PATH_ARGUMENTS as u32).map(PathArgument::from).collect();
    assert_eq!(
        Path::new(".", &args),
        Err(PathError::TooManyArguments(MAX_PATH_ARGUMENTS + 1))
    );
}

#[test]
fn unused_arguments_are_ignored() {
    let path = Path::new(".a", &[PathArgument::from(1)]).unwrap();
    assert_eq!(path.steps(), &[PathArgument::from("a")]);
}

#[test]
fn malformed_indices_are_errors() {
    assert!(matches!(
        Path::new("[abc]", &[]),
        Err(PathError::InvalidIndex { position: 1 })
    ));
    assert!(matches!(
        Path::new(".a[", &[]),
        Err(PathError::UnterminatedIndex { position: 2 })
    ));
    assert!(matches!(
        Path::new("[99999999999]", &[]),
        Err(PathError::InvalidIndex { .. })
    ));
    assert!(matches!(
        Path::new("[%", &[PathArgument::from(0)]),
        Err(PathError::UnterminatedIndex { position: 0 })
    ));
}

// ============================================================================
// resolve / resolve_or
// ============================================================================

#[test]
fn resolve_follows_existing_nodes() {
    let doc = sample();
    let path: Path = ".items[1].name".parse().unwrap();
    assert_eq!(path.resolve(&doc), "one");
    let root: Path = ".".parse().unwrap();
    assert_eq!(root.resolve(&doc), &doc);
}

#[test]
fn resolve_yields_null_on_any_miss() {
    let doc = sample();
    for expr in [".missing", ".items[9]", ".count.x", ".items.name", "[0]"] {
        let path: Path = expr.parse().unwrap();
        assert!(path.resolve(&doc).is_null(), "{expr}");
    }
}

#[test]
fn resolve_or_returns_default_without_mutating() {
    let doc = sample();
    let before = doc.clone();
    let default = Value::from("fallback");

    let missing: Path = ".nested.deeper".parse().unwrap();
    assert_eq!(missing.resolve_or(&doc, &default), default);

    let present: Path = ".count".parse().unwrap();
    assert_eq!(present.resolve_or(&doc, &default), Value::Int(2));
    assert_eq!(doc, before);
}

#[test]
fn resolve_or_keeps_a_stored_null() {
    let mut doc = Value::Null;
    doc["empty"] = Value::Null;
    let path: Path = ".empty".parse().unwrap();
    assert!(path.resolve_or(&doc, &Value::from(1)).is_null());
}

// ============================================================================
// make
// ============================================================================

#[test]
fn make_creates_intermediate_nodes() {
    let mut root = Value::Null;
    let path: Path = ".a[2].b".parse().unwrap();
    *path.make(&mut root).unwrap() = Value::from(true);

    assert_eq!(root.value_type(), ValueType::Object);
    assert_eq!(root["a"].value_type(), ValueType::Array);
    assert_eq!(root["a"].size(), 3);
    assert!(root["a"].try_get(0).is_none());
    assert_eq!(path.resolve(&root), &Value::Bool(true));
}

#[test]
fn make_returns_existing_nodes_unchanged() {
    let mut doc = sample();
    let path: Path = ".count".parse().unwrap();
    assert_eq!(path.make(&mut doc).unwrap(), &Value::Int(2));
    assert_eq!(doc, sample());
}

#[test]
fn make_through_a_scalar_fails() {
    let mut doc = sample();
    let path: Path = ".count.x".parse().unwrap();
    assert!(matches!(
        path.make(&mut doc),
        Err(ValueError::Structural {
            found: ValueType::Int,
            ..
        })
    ));
}

#[test]
fn make_with_the_wrong_container_fails() {
    let mut doc = sample();
    let path: Path = ".items.name".parse().unwrap();
    assert!(path.make(&mut doc).is_err());
    let path: Path = "[0]".parse().unwrap();
    assert!(path.make(&mut doc).is_err());
}

#[test]
fn one_path_applies_to_many_trees() {
    let path = Path::new(".%", &[PathArgument::from("id")]).unwrap();
    let mut trees = vec![Value::Null, Value::Null, Value::Null];
    for (id, tree) in (0u32..).zip(trees.iter_mut()) {
        *path.make(tree).unwrap() = Value::from(id);
    }
    let ids: Vec<u32> = trees.iter().map(|t| path.resolve(t).as_uint(99)).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}
