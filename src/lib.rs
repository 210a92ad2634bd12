//! # serde_yamlite
//!
//! A Serde-compatible engine for the everyday subset of YAML: configuration
//! files with block and flow collections, block scalars, anchors and tags.
//!
//! ## What is covered?
//!
//! The crate reads one document into a [`Value`] tree and writes any tree back as
//! text that reads back to the same tree. See [`syntax`] for the accepted
//! format and its limitations.
//!
//! ## Key Features
//!
//! - **Strict Errors**: every failure names its kind, line number and the text near it
//! - **Round Trips**: `parse(dump(v)) == v` for every tree without custom tags
//! - **Configurable Layout**: choose the depth from which containers are written
//!   inline, the indentation step and a base indentation
//! - **Serde Compatible**: works with `#[derive(Serialize, Deserialize)]`
//! - **Custom Tags**: unknown tags go through an injectable [`TagCodec`]
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_yamlite = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Basic Serialization and Deserialization
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_yamlite::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     roles: Vec<String>,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     roles: vec!["admin".to_string(), "dev".to_string()],
//! };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "id: 123\nname: Alice\nroles:\n  - admin\n  - dev\n");
//!
//! let user_back: User = from_str(&text).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Working with Values
//!
//! ```rust
//! use serde_yamlite::{dump, parse, Value};
//!
//! let value = parse("defaults: &d { retries: 3 }\njob:\n  <<: *d\n  name: nightly\n").unwrap();
//! let job = value.get("job").unwrap();
//! assert_eq!(job.get("retries"), Some(&Value::Int(3)));
//!
//! assert_eq!(dump(job, 1, 0), "retries: 3\nname: nightly\n");
//! ```
//!
//! ### Errors
//!
//! ```rust
//! use serde_yamlite::{parse, ErrorKind};
//!
//! let err = parse("foo:\n\tbar").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TabIndentation);
//! assert_eq!(err.line(), Some(2));
//! ```
//!
//! ## Logging
//!
//! Parsing emits records through the [`log`](https://docs.rs/log) facade:
//! document-level events at `debug`, per-construct events at `trace` and ignored
//! directives at `warn`. The library installs no logger.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Nesting is bounded by [`ParseOptions::max_depth`]
//! - Parsing is all-or-nothing: no partial tree is returned on error
//! - Dumping never fails
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - serializing and reading back a struct
//! - **`macro.rs`** - building values with the `yaml!` macro
//! - **`dynamic_values.rs`** - walking a parsed [`Value`] tree
//! - **`custom_options.rs`** - layout options and a custom [`TagCodec`]
//!
//! Run any demo with: `cargo run --example <name>`

pub mod de;
pub mod dumper;
pub mod error;
pub mod escape;
pub mod inline;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod syntax;
pub mod tag;
pub mod value;

pub use de::Deserializer;
pub use dumper::{dump, Dumper};
pub use error::{Error, ErrorKind, Result};
pub use inline::{parse_fragment, AnchorTable, InlineParser};
pub use map::Mapping;
pub use options::{DumpOptions, ParseOptions, DEFAULT_MAX_DEPTH};
pub use parser::Parser;
pub use ser::ValueSerializer;
pub use tag::{PassThrough, TagCodec};
pub use value::{Tagged, Value};

use serde::{Deserialize, Serialize};
use std::io;

/// Parses a document into a [`Value`] with default options.
///
/// # Examples
///
/// ```rust
/// use serde_yamlite::{parse, Value};
///
/// let value = parse("- 1\n- two\n- [3]\n").unwrap();
/// assert_eq!(
///     value,
///     Value::Sequence(vec![
///         Value::Int(1),
///         Value::from("two"),
///         Value::Sequence(vec![Value::Int(3)]),
///     ])
/// );
/// ```
///
/// # Errors
///
/// Returns the first syntax error, with its line number.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<Value> {
    Parser::new(input).parse()
}

/// Parses a document into a [`Value`] with custom options.
///
/// # Errors
///
/// Returns the first syntax error, or [`ErrorKind::RecursionLimit`] when nesting
/// exceeds [`ParseOptions::max_depth`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Value> {
    Parser::new(input).with_options(options.clone()).parse()
}

/// Renders a [`Value`] with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_yamlite::{dump_with_options, yaml, DumpOptions};
///
/// let value = yaml!({"a": {"b": 1}});
/// let text = dump_with_options(&value, &DumpOptions::expanded().with_indent(4));
/// assert_eq!(text, "a:\n    b: 1\n");
/// ```
#[must_use]
pub fn dump_with_options(value: &Value, options: &DumpOptions) -> String {
    Dumper::new(options.clone()).dump(value)
}

/// Serialize any `T: Serialize` to a string.
///
/// Uses [`DumpOptions::new`]: block form for the first two levels, flow form
/// below.
///
/// # Errors
///
/// Returns an error if the value's `Serialize` implementation fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &DumpOptions::new())
}

/// Serialize any `T: Serialize` with every non-empty container in block form.
///
/// # Examples
///
/// ```rust
/// use serde_yamlite::to_string_pretty;
/// use std::collections::BTreeMap;
///
/// let mut grid = BTreeMap::new();
/// grid.insert("rows", vec![vec![1, 2], vec![3]]);
/// assert_eq!(
///     to_string_pretty(&grid).unwrap(),
///     "rows:\n  -\n    - 1\n    - 2\n  -\n    - 3\n"
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the value's `Serialize` implementation fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &DumpOptions::expanded())
}

/// Serialize any `T: Serialize` with custom layout options.
///
/// # Errors
///
/// Returns an error if the value's `Serialize` implementation fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &DumpOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(dump_with_options(&value, options))
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_yamlite::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_mapping());
/// assert_eq!(value.get("y"), Some(&Value::Int(2)));
/// ```
///
/// # Errors
///
/// Returns an error if the value's `Serialize` implementation fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to a writer.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::custom(e.to_string()))
}

/// Deserialize an instance of type `T` from a document.
///
/// # Examples
///
/// ```rust
/// use serde_yamlite::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the text does not parse or does not match type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_str(s);
    T::deserialize(&mut deserializer)
}

/// Deserialize an instance of type `T` from bytes of UTF-8 text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, do not parse, or do not
/// match type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Deserialize an instance of type `T` from an I/O stream.
///
/// # Errors
///
/// Returns an error if reading fails, the text does not parse, or it does not
/// match type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::custom(e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from an already parsed [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_yamlite::{from_value, yaml};
///
/// let ports: Vec<u16> = from_value(yaml!([80, 443])).unwrap();
/// assert_eq!(ports, vec![80, 443]);
/// ```
///
/// # Errors
///
/// Returns an error if the value does not match type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    T::deserialize(de::ValueDeserializer::new(value))
}
