//! Configuration options for parsing and dumping.
//!
//! - [`ParseOptions`]: limits applied while reading text
//! - [`DumpOptions`]: layout of the text the dumper writes
//!
//! ## Examples
//!
//! ```rust
//! use serde_yamlite::{to_string_with_options, DumpOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let points = vec![Point { x: 1, y: 2 }];
//!
//! // Everything in block form
//! let text = to_string_with_options(&points, &DumpOptions::expanded()).unwrap();
//! assert_eq!(text, "-\n  x: 1\n  y: 2\n");
//!
//! // Flow form below the first level
//! let text = to_string_with_options(&points, &DumpOptions::new().with_inline(1)).unwrap();
//! assert_eq!(text, "- { x: 1, y: 2 }\n");
//! ```

/// Default limit on nested block and flow constructs.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options for [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```rust
/// use serde_yamlite::{parse_with_options, ErrorKind, ParseOptions};
///
/// let options = ParseOptions::new().with_max_depth(2);
/// let err = parse_with_options("[[[1]]]", &options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::RecursionLimit);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Creates default options (depth limit of [`DEFAULT_MAX_DEPTH`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth accepted before failing with
    /// [`ErrorKind::RecursionLimit`](crate::ErrorKind::RecursionLimit).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Options for [`Dumper`](crate::Dumper).
///
/// - `inline`: nesting level from which containers are written in single-line
///   flow form; `0` writes everything inline
/// - `indent`: spaces added per nested block level (at least 1 is used)
/// - `base_indent`: spaces before every line of the output
///
/// # Examples
///
/// ```rust
/// use serde_yamlite::DumpOptions;
///
/// let options = DumpOptions::new();
/// assert_eq!(options.inline, 2);
/// assert_eq!(options.indent, 2);
///
/// let options = DumpOptions::expanded().with_indent(4);
/// assert_eq!(options.inline, usize::MAX);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpOptions {
    pub inline: usize,
    pub indent: usize,
    pub base_indent: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            inline: 2,
            indent: 2,
            base_indent: 0,
        }
    }
}

impl DumpOptions {
    /// Creates default options: block form for the first two levels, flow form
    /// below, two spaces per level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that write every non-empty container in block form.
    #[must_use]
    pub fn expanded() -> Self {
        DumpOptions {
            inline: usize::MAX,
            ..Default::default()
        }
    }

    /// Sets the nesting level from which containers are written inline.
    #[must_use]
    pub fn with_inline(mut self, inline: usize) -> Self {
        self.inline = inline;
        self
    }

    /// Sets the number of spaces per nested block level.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the indentation applied to every line of the output.
    #[must_use]
    pub fn with_base_indent(mut self, base_indent: usize) -> Self {
        self.base_indent = base_indent;
        self
    }
}
