//! Custom tag handling.
//!
//! The core understands the standard `!!` tags (`!!str`, `!!int`, `!!float`,
//! `!!bool`, `!!null`, and `!!seq`/`!!map`/`!!set`/`!!omap` on collections) and the
//! non-specific `!`. Every other tag, such as `!color red` or the legacy
//! `!!php/object:O:8:"stdClass":0:{}`, is handed to a [`TagCodec`]. The default
//! [`PassThrough`] codec keeps them as [`Value::Tagged`] so they survive a round trip.
//!
//! ## Examples
//!
//! ```rust
//! use serde_yamlite::{Parser, Result, TagCodec, Tagged, Value};
//!
//! struct Upper;
//!
//! impl TagCodec for Upper {
//!     fn resolve_tag(&self, tag: &str, payload: &str) -> Result<Value> {
//!         match tag {
//!             "!upper" => Ok(Value::from(payload.to_uppercase())),
//!             _ => Ok(Value::Tagged(Tagged::new(tag, payload))),
//!         }
//!     }
//! }
//!
//! let value = Parser::new("name: !upper alice").with_codec(&Upper).parse().unwrap();
//! assert_eq!(value.get("name"), Some(&Value::from("ALICE")));
//! ```

use crate::escape;
use crate::{Error, Result, Tagged, Value};

/// Hook for tags the core does not interpret.
///
/// Both methods have defaults that preserve the tag untouched, so an
/// implementation only overrides the direction it cares about.
pub trait TagCodec {
    /// Builds a value from a tag (including its leading `!`) and raw payload text.
    fn resolve_tag(&self, tag: &str, payload: &str) -> Result<Value> {
        Ok(Value::Tagged(Tagged::new(tag, payload)))
    }

    /// Returns the tag and payload to write for a tagged value, or `None` to
    /// write it as `null`.
    fn render_tag(&self, tagged: &Tagged) -> Option<(String, String)> {
        Some((tagged.tag.clone(), tagged.payload.clone()))
    }
}

/// The default codec: custom tags become [`Value::Tagged`] and are written back
/// unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassThrough;

impl TagCodec for PassThrough {}

/// Tags the parser understands on flow or block collections.
pub(crate) fn is_collection_tag(tag: &str) -> bool {
    matches!(tag, "!!seq" | "!!map" | "!!set" | "!!omap")
}

/// Resolves a tagged scalar: standard tags are handled here, anything else goes
/// to the codec.
pub(crate) fn resolve_scalar(
    codec: &dyn TagCodec,
    tag: &str,
    payload: &str,
    line: usize,
) -> Result<Value> {
    let text = payload.trim();
    let invalid = |kind: &str| {
        Error::malformed(
            line,
            &format!("{} {}", tag, payload),
            &format!("Invalid {} value", kind),
        )
    };

    match tag {
        "!" | "!!str" => Ok(Value::String(payload.to_string())),
        "!!null" => match text {
            "" | "~" => Ok(Value::Null),
            _ if text.eq_ignore_ascii_case("null") => Ok(Value::Null),
            _ => Err(invalid("!!null")),
        },
        "!!bool" => {
            if text.eq_ignore_ascii_case("true") {
                Ok(Value::Bool(true))
            } else if text.eq_ignore_ascii_case("false") {
                Ok(Value::Bool(false))
            } else {
                Err(invalid("!!bool"))
            }
        }
        "!!int" => {
            if escape::is_integer_literal(text) || escape::is_hex_literal(text) {
                Ok(crate::inline::coerce_plain(text))
            } else {
                Err(invalid("!!int"))
            }
        }
        "!!float" => {
            if escape::is_float_literal(text) || escape::is_integer_literal(text) {
                crate::inline::parse_float(text)
                    .map(Value::Float)
                    .ok_or_else(|| invalid("!!float"))
            } else {
                Err(invalid("!!float"))
            }
        }
        _ => codec.resolve_tag(tag, payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tags() {
        let codec = PassThrough;
        assert_eq!(
            resolve_scalar(&codec, "!!str", "123", 1).unwrap(),
            Value::from("123")
        );
        assert_eq!(
            resolve_scalar(&codec, "!!float", "1", 1).unwrap(),
            Value::Float(1.0)
        );
        assert_eq!(
            resolve_scalar(&codec, "!!int", "0x10", 1).unwrap(),
            Value::Int(16)
        );
        assert_eq!(
            resolve_scalar(&codec, "!!bool", "TRUE", 1).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(resolve_scalar(&codec, "!!null", "", 1).unwrap(), Value::Null);
    }

    #[test]
    fn test_invalid_standard_payload() {
        let err = resolve_scalar(&PassThrough, "!!int", "abc", 7).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::MalformedScalar);
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_custom_tag_passes_through() {
        let value = resolve_scalar(&PassThrough, "!color", "red", 1).unwrap();
        assert_eq!(value, Value::Tagged(Tagged::new("!color", "red")));
        assert_eq!(
            PassThrough.render_tag(&Tagged::new("!color", "red")),
            Some(("!color".to_string(), "red".to_string()))
        );
    }
}
