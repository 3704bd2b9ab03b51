//! Compiled paths into a value tree.
//!
//! A [`Path`] is compiled once from a small expression language and can
//! then be applied to any number of trees.
//!
//! # Syntax
//!
//! - `.`: separator (a lone `.` is the root itself)
//! - `[N]`: element `N` of an array
//! - `name`: member `name` of an object, up to the next `.` or `[`
//! - `%`: member whose name is the next positional argument
//! - `[%]`: element whose index is the next positional argument
//!
//! For example `.items[2].name`, `.[0][1].x`, or `.%[%]` with the arguments
//! `"items"` and `2`. Arguments are bound at compile time, left to right;
//! a path takes at most [`MAX_PATH_ARGUMENTS`] of them.
//!
//! # Example
//! ```
//! use jdom_core::{Path, PathArgument, Value};
//!
//! let path = Path::new(".a[%].b", &[PathArgument::from(0)]).unwrap();
//! let mut root = Value::Null;
//! *path.make(&mut root).unwrap() = Value::from("hello");
//! assert_eq!(path.resolve(&root).as_str(), Some("hello"));
//! ```

use crate::error::{PathError, Result};
use crate::key::ArrayIndex;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Largest number of positional arguments a path accepts.
pub const MAX_PATH_ARGUMENTS: usize = 5;

/// One step of a compiled path, also used as a positional argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathArgument {
    Index(ArrayIndex),
    Name(String),
}

impl PathArgument {
    fn kind(&self) -> &'static str {
        match self {
            PathArgument::Index(_) => "an index",
            PathArgument::Name(_) => "a name",
        }
    }
}

impl From<ArrayIndex> for PathArgument {
    fn from(index: ArrayIndex) -> Self {
        PathArgument::Index(index)
    }
}

impl From<&str> for PathArgument {
    fn from(name: &str) -> Self {
        PathArgument::Name(name.to_owned())
    }
}

impl From<String> for PathArgument {
    fn from(name: String) -> Self {
        PathArgument::Name(name)
    }
}

/// A compiled, immutable path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    steps: Vec<PathArgument>,
}

impl Path {
    /// Compiles `expr`, binding `%` / `[%]` placeholders to `args` in order.
    ///
    /// # Errors
    /// Returns a [`PathError`] for an unterminated or non-numeric `[...]`,
    /// a placeholder without a matching argument, an argument of the wrong
    /// kind, or more than [`MAX_PATH_ARGUMENTS`] arguments. Unused trailing
    /// arguments are ignored.
    pub fn new(expr: &str, args: &[PathArgument]) -> Result<Self, PathError> {
        if args.len() > MAX_PATH_ARGUMENTS {
            return Err(PathError::TooManyArguments(args.len()));
        }
        let mut parser = Parser {
            expr,
            pos: 0,
            args: args.iter(),
            steps: Vec::new(),
        };
        parser.run()?;
        Ok(Self {
            steps: parser.steps,
        })
    }

    pub fn steps(&self) -> &[PathArgument] {
        &self.steps
    }

    /// Follows the path without mutating `root`.
    ///
    /// Any step that cannot be taken (wrong container type or missing entry)
    /// yields the shared Null.
    pub fn resolve<'v>(&self, root: &'v Value) -> &'v Value {
        self.walk(root).unwrap_or(Value::null_ref())
    }

    /// Like [`resolve`](Self::resolve), but returns a copy of `default` as
    /// soon as a step cannot be taken.
    pub fn resolve_or(&self, root: &Value, default: &Value) -> Value {
        self.walk(root).unwrap_or(default).clone()
    }

    fn walk<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        self.steps.iter().try_fold(root, |node, step| match step {
            PathArgument::Index(index) => node.try_get(*index),
            PathArgument::Name(name) => node.try_get_member(name),
        })
    }

    /// Creates every missing node along the path and returns the last one.
    ///
    /// Null nodes are promoted to arrays or objects as the next step
    /// requires.
    ///
    /// # Errors
    /// `ValueError::Structural` when a node on the way is a scalar, or the
    /// other kind of container than the step needs.
    pub fn make<'v>(&self, root: &'v mut Value) -> Result<&'v mut Value> {
        tracing::trace!(path = %self, "making path");
        let mut node = root;
        for step in &self.steps {
            node = match step {
                PathArgument::Index(index) => node.element_mut(*index)?,
                PathArgument::Name(name) => node.member_mut(name)?,
            };
        }
        Ok(node)
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(expr: &str) -> Result<Self, PathError> {
        Path::new(expr, &[])
    }
}

/// Canonical form: `.name` and `[N]` steps, `.` for the root.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str(".");
        }
        for step in &self.steps {
            match step {
                PathArgument::Index(index) => write!(f, "[{index}]")?,
                PathArgument::Name(name) => write!(f, ".{name}")?,
            }
        }
        Ok(())
    }
}

struct Parser<'e, 'a> {
    expr: &'e str,
    pos: usize,
    args: std::slice::Iter<'a, PathArgument>,
    steps: Vec<PathArgument>,
}

impl Parser<'_, '_> {
    fn peek(&self) -> Option<u8> {
        self.expr.as_bytes().get(self.pos).copied()
    }

    fn run(&mut self) -> Result<(), PathError> {
        while let Some(byte) = self.peek() {
            match byte {
                b'[' => self.index_step()?,
                b'%' => {
                    let step = self.placeholder(PathArgument::Name(String::new()))?;
                    self.steps.push(step);
                    self.pos += 1;
                }
                b'.' => self.pos += 1,
                _ => self.name_step(),
            }
        }
        Ok(())
    }

    fn index_step(&mut self) -> Result<(), PathError> {
        let open = self.pos;
        self.pos += 1;
        let step = if self.peek() == Some(b'%') {
            let step = self.placeholder(PathArgument::Index(0))?;
            self.pos += 1;
            step
        } else {
            let start = self.pos;
            while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                self.pos += 1;
            }
            if start == self.pos {
                return Err(self.bad_index(open));
            }
            let index = self.expr[start..self.pos]
                .parse::<ArrayIndex>()
                .map_err(|_| PathError::InvalidIndex { position: start })?;
            PathArgument::Index(index)
        };
        if self.peek() != Some(b']') {
            return Err(self.bad_index(open));
        }
        self.pos += 1;
        self.steps.push(step);
        Ok(())
    }

    fn bad_index(&self, open: usize) -> PathError {
        if self.pos >= self.expr.len() {
            PathError::UnterminatedIndex { position: open }
        } else {
            PathError::InvalidIndex { position: self.pos }
        }
    }

    fn name_step(&mut self) {
        let start = self.pos;
        while self.peek().is_some_and(|b| b != b'.' && b != b'[') {
            self.pos += 1;
        }
        self.steps
            .push(PathArgument::Name(self.expr[start..self.pos].to_owned()));
    }

    /// Consumes the next argument, which must be of the same kind as
    /// `expected`.
    fn placeholder(&mut self, expected: PathArgument) -> Result<PathArgument, PathError> {
        let position = self.pos;
        match self.args.next() {
            None => Err(PathError::MissingArgument { position }),
            Some(arg) if std::mem::discriminant(arg) == std::mem::discriminant(&expected) => {
                Ok(arg.clone())
            }
            Some(_) => Err(PathError::ArgumentKindMismatch {
                position,
                expected: expected.kind(),
            }),
        }
    }
}
