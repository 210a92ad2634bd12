//! Error types for parsing and Serde conversion.
//!
//! Every parse failure carries the 1-based line where it was detected and a short
//! snippet of the offending text, so messages point at the exact spot:
//!
//! - **Indentation errors**: tabs in indentation, lines that match no open level
//! - **Structure errors**: sequence items inside a mapping and vice versa,
//!   a second document, a colon inside a plain mapping value
//! - **Scalar errors**: bad quotes, escapes, tags or flow collections
//! - **Anchor errors**: aliases that reference an undefined anchor
//! - **Depth errors**: nesting deeper than [`ParseOptions::max_depth`](crate::ParseOptions)
//!
//! Dumping never fails, so only parsing and Serde conversion produce errors.
//!
//! ## Examples
//!
//! ```rust
//! use serde_yamlite::{parse, ErrorKind};
//!
//! let err = parse("foo:\n\tbar").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TabIndentation);
//! assert_eq!(err.line(), Some(2));
//! assert_eq!(err.snippet(), Some("\tbar"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing or converting values.
///
/// Each parse variant includes the line number and a snippet of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A line's leading indentation contains a tab character.
    #[error("A YAML file cannot contain tabs as indentation at line {line} (near \"{snippet}\").")]
    TabIndentation { line: usize, snippet: String },

    /// A line's indentation matches no open collection level.
    #[error("Unindented collection at line {line} (near \"{snippet}\").")]
    UnindentedCollection { line: usize, snippet: String },

    /// A `key: value` entry appears at the level of an open sequence.
    #[error("You cannot define a mapping item when in a sequence at line {line} (near \"{snippet}\").")]
    MappingInSequence { line: usize, snippet: String },

    /// A `- item` appears at the level of an open mapping.
    #[error("You cannot define a sequence item when in a mapping at line {line} (near \"{snippet}\").")]
    SequenceInMapping { line: usize, snippet: String },

    /// An unquoted mapping value contains a colon followed by whitespace.
    #[error("A colon cannot be used in an unquoted mapping value at line {line} (near \"{snippet}\").")]
    ColonInMappingValue { line: usize, snippet: String },

    /// The input contains more than one document.
    #[error("Multiple documents are not supported at line {line} (near \"{snippet}\").")]
    MultipleDocuments { line: usize, snippet: String },

    /// An alias references an anchor that was never defined.
    #[error("Reference \"{name}\" does not exist at line {line} (near \"{snippet}\").")]
    UndefinedAlias {
        line: usize,
        name: String,
        snippet: String,
    },

    /// A scalar, flow collection, tag or directive could not be parsed.
    #[error("{msg} at line {line} (near \"{snippet}\").")]
    MalformedScalar {
        line: usize,
        snippet: String,
        msg: String,
    },

    /// Nesting exceeded the configured depth limit.
    #[error("Maximum nesting depth of {limit} exceeded at line {line} (near \"{snippet}\").")]
    RecursionLimit {
        line: usize,
        limit: usize,
        snippet: String,
    },

    /// Custom error raised through Serde.
    #[error("{0}")]
    Custom(String),
}

/// The category of an [`Error`], without its location details.
///
/// # Examples
///
/// ```rust
/// use serde_yamlite::{parse, ErrorKind};
///
/// let err = parse("foo: bar: baz").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::ColonInMappingValue);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TabIndentation,
    UnindentedCollection,
    MappingInSequence,
    SequenceInMapping,
    ColonInMappingValue,
    MultipleDocuments,
    UndefinedAlias,
    MalformedScalar,
    RecursionLimit,
    Custom,
}

impl Error {
    /// Creates a malformed scalar error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_yamlite::{Error, ErrorKind};
    ///
    /// let err = Error::malformed(3, "\"abc", "Malformed inline YAML string");
    /// assert_eq!(err.kind(), ErrorKind::MalformedScalar);
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn malformed(line: usize, snippet: &str, msg: &str) -> Self {
        Error::MalformedScalar {
            line,
            snippet: snippet.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an undefined alias error for `*name`.
    pub fn undefined_alias(line: usize, name: &str, snippet: &str) -> Self {
        Error::UndefinedAlias {
            line,
            name: name.to_string(),
            snippet: snippet.to_string(),
        }
    }

    /// Creates a recursion limit error.
    pub fn recursion_limit(line: usize, limit: usize, snippet: &str) -> Self {
        Error::RecursionLimit {
            line,
            limit,
            snippet: snippet.to_string(),
        }
    }

    /// Creates an error of a location-only kind (every kind except
    /// `UndefinedAlias`, `MalformedScalar`, `RecursionLimit` and `Custom`,
    /// which fall back to a generic malformed scalar).
    pub(crate) fn at(kind: ErrorKind, line: usize, snippet: &str) -> Self {
        let snippet = snippet.to_string();
        match kind {
            ErrorKind::TabIndentation => Error::TabIndentation { line, snippet },
            ErrorKind::UnindentedCollection => Error::UnindentedCollection { line, snippet },
            ErrorKind::MappingInSequence => Error::MappingInSequence { line, snippet },
            ErrorKind::SequenceInMapping => Error::SequenceInMapping { line, snippet },
            ErrorKind::ColonInMappingValue => Error::ColonInMappingValue { line, snippet },
            ErrorKind::MultipleDocuments => Error::MultipleDocuments { line, snippet },
            _ => Error::MalformedScalar {
                line,
                snippet,
                msg: "Unable to parse".to_string(),
            },
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_yamlite::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TabIndentation { .. } => ErrorKind::TabIndentation,
            Error::UnindentedCollection { .. } => ErrorKind::UnindentedCollection,
            Error::MappingInSequence { .. } => ErrorKind::MappingInSequence,
            Error::SequenceInMapping { .. } => ErrorKind::SequenceInMapping,
            Error::ColonInMappingValue { .. } => ErrorKind::ColonInMappingValue,
            Error::MultipleDocuments { .. } => ErrorKind::MultipleDocuments,
            Error::UndefinedAlias { .. } => ErrorKind::UndefinedAlias,
            Error::MalformedScalar { .. } => ErrorKind::MalformedScalar,
            Error::RecursionLimit { .. } => ErrorKind::RecursionLimit,
            Error::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Returns the 1-based line number where a parse error was detected.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::TabIndentation { line, .. }
            | Error::UnindentedCollection { line, .. }
            | Error::MappingInSequence { line, .. }
            | Error::SequenceInMapping { line, .. }
            | Error::ColonInMappingValue { line, .. }
            | Error::MultipleDocuments { line, .. }
            | Error::UndefinedAlias { line, .. }
            | Error::MalformedScalar { line, .. }
            | Error::RecursionLimit { line, .. } => Some(*line),
            Error::Custom(_) => None,
        }
    }

    /// Returns the snippet of input text near the error.
    #[must_use]
    pub fn snippet(&self) -> Option<&str> {
        match self {
            Error::TabIndentation { snippet, .. }
            | Error::UnindentedCollection { snippet, .. }
            | Error::MappingInSequence { snippet, .. }
            | Error::SequenceInMapping { snippet, .. }
            | Error::ColonInMappingValue { snippet, .. }
            | Error::MultipleDocuments { snippet, .. }
            | Error::UndefinedAlias { snippet, .. }
            | Error::MalformedScalar { snippet, .. }
            | Error::RecursionLimit { snippet, .. } => Some(snippet),
            Error::Custom(_) => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_line_and_snippet() {
        let err = Error::at(ErrorKind::SequenceInMapping, 4, "- item");
        assert_eq!(err.kind(), ErrorKind::SequenceInMapping);
        assert_eq!(err.line(), Some(4));
        assert_eq!(err.snippet(), Some("- item"));
    }

    #[test]
    fn test_tab_message() {
        let err = Error::at(ErrorKind::TabIndentation, 2, "\tbar");
        assert_eq!(
            err.to_string(),
            "A YAML file cannot contain tabs as indentation at line 2 (near \"\tbar\")."
        );
    }

    #[test]
    fn test_custom_has_no_location() {
        let err = <Error as serde::de::Error>::custom("missing field `x`");
        assert_eq!(err.kind(), ErrorKind::Custom);
        assert_eq!(err.line(), None);
        assert_eq!(err.snippet(), None);
    }
}
