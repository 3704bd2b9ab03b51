//! `jdom` CLI: resolve, edit, and inspect JSON documents with jdom paths.
//!
//! ## Usage
//!
//! ```sh
//! # Read a node (stdin → stdout)
//! echo '{"items":[{"name":"a"}]}' | jdom get .items[0].name
//!
//! # Bind placeholders: all-digit arguments are indices, `name:` forces a name
//! jdom get '.%[%]' --arg items --arg 0 -i data.json
//!
//! # Fall back to a default when the path is missing
//! jdom get .settings.theme --default '"light"' -i data.json
//!
//! # Create the path and assign a value, writing the whole document
//! jdom set .settings.theme '"dark"' -i data.json -o data.json
//!
//! # Show type, size and keys of a node
//! jdom inspect -i data.json .items
//! ```
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jdom_core::{Path, PathArgument, Value};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "jdom",
    version,
    about = "Resolve, edit, and inspect JSON documents with jdom paths"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the node at a path as JSON (null when it does not exist)
    Get {
        /// Path expression, e.g. `.items[0].name`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Argument for a `%` or `[%]` placeholder (repeatable)
        #[arg(long = "arg")]
        args: Vec<String>,
        /// JSON value printed when the path cannot be followed
        #[arg(long)]
        default: Option<String>,
    },
    /// Create the path, assign a JSON value, and print the document
    Set {
        /// Path expression, e.g. `.items[0].name`
        path: String,
        /// JSON value to assign
        value: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Argument for a `%` or `[%]` placeholder (repeatable)
        #[arg(long = "arg")]
        args: Vec<String>,
    },
    /// Show the type, size, and keys of a node
    Inspect {
        /// Path expression (the document root if omitted)
        path: Option<String>,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Argument for a `%` or `[%]` placeholder (repeatable)
        #[arg(long = "arg")]
        args: Vec<String>,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Get {
            path,
            input,
            args,
            default,
        } => {
            let doc = load_document(input.as_deref())?;
            let path = compile_path(&path, &args)?;
            tracing::debug!(%path, "resolving");
            let node = match default {
                Some(raw) => {
                    let default = parse_json(&raw).context("Failed to parse --default value")?;
                    path.resolve_or(&doc, &default)
                }
                None => path.resolve(&doc).clone(),
            };
            write_output(None, &render(&node, cli.pretty)?)?;
        }
        Commands::Set {
            path,
            value,
            input,
            output,
            args,
        } => {
            let mut doc = load_document(input.as_deref())?;
            let path = compile_path(&path, &args)?;
            let value = parse_json(&value).context("Failed to parse value to assign")?;
            tracing::debug!(%path, "assigning");
            *path
                .make(&mut doc)
                .with_context(|| format!("Cannot create path '{}'", path))? = value;
            write_output(output.as_deref(), &render(&doc, cli.pretty)?)?;
        }
        Commands::Inspect { path, input, args } => {
            let doc = load_document(input.as_deref())?;
            let path = compile_path(path.as_deref().unwrap_or("."), &args)?;
            write_output(None, &describe(path.resolve(&doc)))?;
        }
    }

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Interpret a `--arg` value.
///
/// - `3` (all digits) is an array index
/// - `name:3` is the member name `3`
/// - anything else is a member name
fn parse_argument(raw: &str) -> Result<PathArgument> {
    if let Some(name) = raw.strip_prefix("name:") {
        return Ok(PathArgument::from(name));
    }
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        let index = raw
            .parse::<u32>()
            .with_context(|| format!("Index argument out of range: {}", raw))?;
        return Ok(PathArgument::Index(index));
    }
    Ok(PathArgument::from(raw))
}

fn compile_path(expr: &str, raw_args: &[String]) -> Result<Path> {
    let args = raw_args
        .iter()
        .map(|raw| parse_argument(raw))
        .collect::<Result<Vec<_>>>()?;
    Path::new(expr, &args).with_context(|| format!("Invalid path: '{}'", expr))
}

fn parse_json(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

fn load_document(input: Option<&str>) -> Result<Value> {
    let text = read_input(input)?;
    parse_json(&text).context("Failed to parse JSON input")
}

fn render(value: &Value, pretty: bool) -> Result<String> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    Ok(text)
}

fn describe(node: &Value) -> String {
    let mut out = format!("type: {}\nsize: {}\n", node.value_type(), node.size());
    let mut keys = node.keys().peekable();
    if keys.peek().is_some() {
        out.push_str("keys:\n");
        for key in keys {
            out.push_str(&format!("  {}\n", key));
        }
    }
    out
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_arguments_are_indices() {
        assert_eq!(parse_argument("12").unwrap(), PathArgument::Index(12));
        assert_eq!(parse_argument("name:12").unwrap(), PathArgument::from("12"));
        assert_eq!(parse_argument("title").unwrap(), PathArgument::from("title"));
        assert_eq!(parse_argument("").unwrap(), PathArgument::from(""));
        assert!(parse_argument("99999999999").is_err());
    }

    #[test]
    fn describe_lists_keys() {
        let mut v = Value::Null;
        v["b"] = Value::from(1);
        v["a"] = Value::from(2);
        assert_eq!(describe(&v), "type: object\nsize: 2\nkeys:\n  \"a\"\n  \"b\"\n");
        assert_eq!(describe(&Value::from(3)), "type: int\nsize: 0\n");
    }
}
