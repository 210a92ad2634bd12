//! Inline (flow-style) fragment parsing.
//!
//! This module parses the single-line pieces the block parser hands over: mapping
//! keys, scalar values, and flow collections such as `[a, b]` or `{ k: v }`.
//!
//! ## Overview
//!
//! - **Flow collections**: `[...]` and `{...}`, nested to any depth (bounded by
//!   [`ParseOptions::max_depth`](crate::ParseOptions))
//! - **Quoted scalars**: `'single'` with `''` escapes, `"double"` with backslash escapes
//! - **Plain scalars**: coerced to null, booleans, integers and floats by the
//!   patterns in [`escape`](crate::escape); everything else stays a string
//! - **Anchors and aliases**: `&name value` records a value in the [`AnchorTable`],
//!   `*name` copies it back out
//! - **Tags**: `!!str`, `!!float` and friends are applied here, custom tags go to
//!   the [`TagCodec`]
//!
//! ## Usage
//!
//! ```rust
//! use serde_yamlite::{parse_fragment, AnchorTable, Value};
//!
//! let mut anchors = AnchorTable::new();
//! let (value, consumed) = parse_fragment("[&x 1, *x, 'two']", &mut anchors).unwrap();
//! assert_eq!(consumed, 17);
//! assert_eq!(
//!     value,
//!     Value::Sequence(vec![Value::Int(1), Value::Int(1), Value::from("two")])
//! );
//! assert_eq!(anchors.resolve("x"), Some(Value::Int(1)));
//! ```

use crate::escape;
use crate::options::DEFAULT_MAX_DEPTH;
use crate::tag::{self, PassThrough, TagCodec};
use crate::{Error, Mapping, Result, Value};
use std::collections::HashMap;

/// Total number of nodes aliases may copy out during one parse.
pub const MAX_ALIAS_NODES: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq)]
struct Anchor {
    value: Value,
    depth: usize,
    nodes: usize,
}

/// Anchor name to resolved value, scoped to a single parse call.
///
/// Aliases copy the stored value, so later changes to one occurrence never show
/// up in another. Each anchor remembers how deeply its value nests and how many
/// nodes it holds, so an alias can be charged against the depth limit and the
/// [`MAX_ALIAS_NODES`] budget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorTable {
    anchors: HashMap<String, Anchor>,
    expanded: usize,
}

impl AnchorTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` under `name`, replacing any earlier anchor of that name.
    pub fn register(&mut self, name: impl Into<String>, value: Value) {
        let (depth, nodes) = measure(&value);
        self.anchors.insert(name.into(), Anchor { value, depth, nodes });
    }

    /// Returns a copy of the value recorded under `name`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Value> {
        self.anchors.get(name).map(|anchor| anchor.value.clone())
    }

    /// Returns the nesting depth of the value recorded under `name`.
    #[must_use]
    pub fn depth(&self, name: &str) -> Option<usize> {
        self.anchors.get(name).map(|anchor| anchor.depth)
    }

    /// Copies out the value under `name` for an alias found at nesting `depth`.
    ///
    /// Fails with `RecursionLimit` when the copy would nest deeper than
    /// `max_depth` or push the copied node count past [`MAX_ALIAS_NODES`].
    pub(crate) fn expand(
        &mut self,
        name: &str,
        depth: usize,
        max_depth: usize,
        line: usize,
    ) -> Result<Value> {
        let snippet = format!("*{}", name);
        let anchor = self
            .anchors
            .get(name)
            .ok_or_else(|| Error::undefined_alias(line, name, &snippet))?;
        if depth + anchor.depth > max_depth {
            return Err(Error::recursion_limit(line, max_depth, &snippet));
        }
        self.expanded = self.expanded.saturating_add(anchor.nodes);
        if self.expanded > MAX_ALIAS_NODES {
            log::warn!("alias expansion passed {} nodes at line {}", MAX_ALIAS_NODES, line);
            return Err(Error::recursion_limit(line, max_depth, &snippet));
        }
        Ok(anchor.value.clone())
    }

    /// Returns the number of recorded anchors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Returns `true` if no anchor has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

/// Collection nesting depth and node count of `value`.
fn measure(value: &Value) -> (usize, usize) {
    match value {
        Value::Sequence(items) => items.iter().fold((1, 1), |(depth, nodes), item| {
            let (d, n) = measure(item);
            (depth.max(d + 1), nodes + n)
        }),
        Value::Mapping(map) => map.iter().fold((1, 1), |(depth, nodes), (k, v)| {
            let (kd, kn) = measure(k);
            let (vd, vn) = measure(v);
            (depth.max(kd.max(vd) + 1), nodes + kn + vn)
        }),
        _ => (0, 1),
    }
}

/// Parses one inline value from the start of `text`.
///
/// Returns the value and the byte offset just past it. Anchors defined in the
/// fragment are recorded in `anchors`; aliases are resolved against it.
///
/// # Errors
///
/// Returns [`ErrorKind::MalformedScalar`](crate::ErrorKind::MalformedScalar) for
/// unterminated quotes or collections and invalid escapes, and
/// [`ErrorKind::UndefinedAlias`](crate::ErrorKind::UndefinedAlias) for unknown aliases.
pub fn parse_fragment(text: &str, anchors: &mut AnchorTable) -> Result<(Value, usize)> {
    let mut parser = InlineParser::new(text, anchors);
    let value = parser.parse_value()?;
    Ok((value, parser.position()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Context {
    /// A whole value: a plain scalar runs to the end of the fragment.
    Block,
    /// Inside `[...]` or `{...}`: a plain scalar stops at flow indicators.
    Flow,
}

/// Cursor over a single inline fragment.
pub struct InlineParser<'a, 'b> {
    input: &'a str,
    position: usize,
    line: usize,
    depth: usize,
    max_depth: usize,
    anchors: &'b mut AnchorTable,
    codec: &'b dyn TagCodec,
}

impl<'a, 'b> InlineParser<'a, 'b> {
    pub fn new(input: &'a str, anchors: &'b mut AnchorTable) -> Self {
        InlineParser {
            input,
            position: 0,
            line: 1,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            anchors,
            codec: &PassThrough,
        }
    }

    /// Sets the line number reported in errors.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Sets the nesting depth already used by enclosing constructs and the limit.
    #[must_use]
    pub fn with_depth(mut self, depth: usize, max_depth: usize) -> Self {
        self.depth = depth;
        self.max_depth = max_depth;
        self
    }

    /// Sets the codec used for custom tags.
    #[must_use]
    pub fn with_codec(mut self, codec: &'b dyn TagCodec) -> Self {
        self.codec = codec;
        self
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Parses one value at the cursor.
    pub fn parse_value(&mut self) -> Result<Value> {
        self.value(Context::Block)
    }

    /// Parses one value and fails if anything but whitespace follows it.
    pub fn parse_complete(&mut self) -> Result<Value> {
        let value = self.value(Context::Block)?;
        self.skip_whitespace();
        if !self.at_end() {
            return Err(self.error(&format!(
                "Unexpected characters near \"{}\"",
                &self.input[self.position..]
            )));
        }
        Ok(value)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.input[self.position..].chars().nth(1)
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.position += ch.len_utf8();
            } else {
                break;
            }
        }
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn error(&self, msg: &str) -> Error {
        Error::malformed(self.line, self.input, msg)
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(Error::recursion_limit(self.line, self.max_depth, self.input));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// True at `:` followed by whitespace, a flow indicator, or the end.
    fn at_value_indicator(&self) -> bool {
        self.peek_char() == Some(':')
            && matches!(
                self.peek_second(),
                None | Some(' ' | '\t' | ',' | ']' | '}')
            )
    }

    fn at_flow_end(&self) -> bool {
        matches!(self.peek_char(), None | Some(',' | ']' | '}'))
    }

    fn value(&mut self, ctx: Context) -> Result<Value> {
        self.skip_whitespace();
        match self.peek_char() {
            None => Ok(Value::Null),
            Some('[') => self.sequence(),
            Some('{') => self.mapping(),
            Some('"') => self.double_quoted().map(Value::String),
            Some('\'') => self.single_quoted().map(Value::String),
            Some('&') => self.anchor(ctx),
            Some('*') => self.alias(),
            Some('!') => self.tagged(ctx),
            Some('@' | '`') => Err(self.error(
                "The reserved indicators \"@\" and \"`\" cannot start a plain scalar",
            )),
            Some(_) => {
                let text = self.scan_plain(ctx);
                Ok(coerce_plain(text))
            }
        }
    }

    fn sequence(&mut self) -> Result<Value> {
        self.enter()?;
        self.position += 1;
        let mut items = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek_char() {
                None => return Err(self.error("Malformed inline YAML string: unclosed \"[\"")),
                Some(']') => {
                    self.position += 1;
                    break;
                }
                _ => {}
            }

            let item = self.value(Context::Flow)?;
            self.skip_whitespace();
            // `[ key: value ]` holds a single-pair mapping
            let item = if self.at_value_indicator() {
                self.position += 1;
                self.skip_whitespace();
                let value = if self.at_flow_end() {
                    Value::Null
                } else {
                    self.value(Context::Flow)?
                };
                let mut pair = Mapping::with_capacity(1);
                pair.insert(item, value);
                Value::Mapping(pair)
            } else {
                item
            };
            items.push(item);

            self.skip_whitespace();
            match self.peek_char() {
                Some(',') => self.position += 1,
                Some(']') | None => {}
                Some(_) => {
                    return Err(self.error(&format!(
                        "Unexpected characters near \"{}\"",
                        &self.input[self.position..]
                    )))
                }
            }
        }

        self.leave();
        Ok(Value::Sequence(items))
    }

    fn mapping(&mut self) -> Result<Value> {
        self.enter()?;
        self.position += 1;
        let mut map = Mapping::new();

        loop {
            self.skip_whitespace();
            match self.peek_char() {
                None => return Err(self.error("Malformed inline YAML string: unclosed \"{\"")),
                Some('}') => {
                    self.position += 1;
                    break;
                }
                _ => {}
            }

            let key = self.value(Context::Flow)?;
            self.skip_whitespace();
            let value = if self.peek_char() == Some(':') {
                self.position += 1;
                self.skip_whitespace();
                if self.at_flow_end() {
                    Value::Null
                } else {
                    self.value(Context::Flow)?
                }
            } else {
                Value::Null
            };
            map.insert(key, value);

            self.skip_whitespace();
            match self.peek_char() {
                Some(',') => self.position += 1,
                Some('}') | None => {}
                Some(_) => {
                    return Err(self.error(&format!(
                        "Unexpected characters near \"{}\"",
                        &self.input[self.position..]
                    )))
                }
            }
        }

        self.leave();
        Ok(Value::Mapping(map))
    }

    fn single_quoted(&mut self) -> Result<String> {
        self.position += 1;
        let mut out = String::new();
        loop {
            match self.next_char() {
                None => return Err(self.error("Malformed inline YAML string")),
                Some('\'') => {
                    if self.peek_char() == Some('\'') {
                        self.position += 1;
                        out.push('\'');
                    } else {
                        return Ok(out);
                    }
                }
                Some(ch) => out.push(ch),
            }
        }
    }

    fn double_quoted(&mut self) -> Result<String> {
        self.position += 1;
        let mut out = String::new();
        loop {
            match self.next_char() {
                None => return Err(self.error("Malformed inline YAML string")),
                Some('"') => return Ok(out),
                Some('\\') => {
                    let escaped = match self.next_char() {
                        Some('0') => '\0',
                        Some('a') => '\x07',
                        Some('b') => '\x08',
                        Some('t' | '\t') => '\t',
                        Some('n') => '\n',
                        Some('v') => '\x0b',
                        Some('f') => '\x0c',
                        Some('r') => '\r',
                        Some('e') => '\x1b',
                        Some(' ') => ' ',
                        Some('"') => '"',
                        Some('/') => '/',
                        Some('\\') => '\\',
                        Some('N') => '\u{85}',
                        Some('_') => '\u{a0}',
                        Some('L') => '\u{2028}',
                        Some('P') => '\u{2029}',
                        Some('x') => self.hex_escape(2)?,
                        Some('u') => self.hex_escape(4)?,
                        Some('U') => self.hex_escape(8)?,
                        Some(other) => {
                            return Err(self.error(&format!("Found unknown escape character \"\\{}\"", other)))
                        }
                        None => return Err(self.error("Malformed inline YAML string")),
                    };
                    out.push(escaped);
                }
                Some(ch) => out.push(ch),
            }
        }
    }

    fn hex_escape(&mut self, len: usize) -> Result<char> {
        let input = self.input;
        let digits = input
            .get(self.position..self.position + len)
            .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| self.error("Invalid hexadecimal escape"))?;
        self.position += len;
        u32::from_str_radix(digits, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| self.error("Invalid unicode escape"))
    }

    /// Reads an anchor or alias name.
    fn name(&mut self) -> &'a str {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() || matches!(ch, ',' | '[' | ']' | '{' | '}') {
                break;
            }
            self.position += ch.len_utf8();
        }
        let input = self.input;
        &input[start..self.position]
    }

    fn anchor(&mut self, ctx: Context) -> Result<Value> {
        self.position += 1;
        let name = self.name();
        if name.is_empty() {
            return Err(self.error("Anchor name cannot be empty"));
        }
        self.skip_whitespace();
        let value = if ctx == Context::Flow && self.at_flow_end() {
            Value::Null
        } else {
            self.value(ctx)?
        };
        log::trace!("anchor &{} at line {}", name, self.line);
        self.anchors.register(name, value.clone());
        Ok(value)
    }

    fn alias(&mut self) -> Result<Value> {
        self.position += 1;
        let name = self.name();
        if name.is_empty() {
            return Err(self.error("Alias name cannot be empty"));
        }
        self.anchors
            .expand(name, self.depth, self.max_depth, self.line)
    }

    fn tagged(&mut self, ctx: Context) -> Result<Value> {
        let input = self.input;
        let tag = scan_tag(&input[self.position..]);
        self.position += tag.len();

        match self.peek_char() {
            // legacy `!tag:payload` form
            Some(':') => {
                self.position += 1;
                let payload = self.scan_plain(ctx);
                tag::resolve_scalar(self.codec, tag, payload, self.line)
            }
            Some(ch) if ch.is_whitespace() => {
                self.skip_whitespace();
                self.tagged_payload(tag, ctx)
            }
            _ => tag::resolve_scalar(self.codec, tag, "", self.line),
        }
    }

    fn tagged_payload(&mut self, tag: &str, ctx: Context) -> Result<Value> {
        match self.peek_char() {
            Some('[' | '{') => {
                let start = self.position;
                let value = if self.peek_char() == Some('[') {
                    self.sequence()?
                } else {
                    self.mapping()?
                };
                if tag == "!" || tag::is_collection_tag(tag) {
                    Ok(value)
                } else {
                    self.codec
                        .resolve_tag(tag, &self.input[start..self.position])
                }
            }
            Some('"') => {
                let payload = self.double_quoted()?;
                tag::resolve_scalar(self.codec, tag, &payload, self.line)
            }
            Some('\'') => {
                let payload = self.single_quoted()?;
                tag::resolve_scalar(self.codec, tag, &payload, self.line)
            }
            Some('&' | '*') => self.value(ctx),
            _ => {
                let payload = self.scan_plain(ctx);
                tag::resolve_scalar(self.codec, tag, payload, self.line)
            }
        }
    }

    /// Reads raw plain-scalar text, trimmed of trailing whitespace.
    fn scan_plain(&mut self, ctx: Context) -> &'a str {
        let start = self.position;
        match ctx {
            Context::Block => self.position = self.input.len(),
            Context::Flow => {
                while let Some(ch) = self.peek_char() {
                    if matches!(ch, ',' | ']' | '}') || self.at_value_indicator() {
                        break;
                    }
                    self.position += ch.len_utf8();
                }
            }
        }
        let input = self.input;
        input[start..self.position].trim_end()
    }
}

/// Returns the tag token at the start of `text` (which begins with `!`).
///
/// The token ends at whitespace, a flow indicator, or a `:` (the legacy
/// `!tag:payload` separator).
pub(crate) fn scan_tag(text: &str) -> &str {
    let end = text
        .char_indices()
        .skip(1)
        .find(|&(_, ch)| ch.is_whitespace() || matches!(ch, ':' | ',' | '[' | ']' | '{' | '}'))
        .map_or(text.len(), |(i, _)| i);
    &text[..end]
}

/// Coerces an unquoted token to null, bool, int or float, or keeps it as a string.
pub(crate) fn coerce_plain(text: &str) -> Value {
    if text.is_empty() || text == "~" || text.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    if text.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if escape::is_integer_literal(text) {
        return match text.parse::<i64>() {
            Ok(i) => Value::Int(i),
            Err(_) => parse_float(text).map_or_else(|| Value::from(text), Value::Float),
        };
    }
    if escape::is_hex_literal(text) {
        let digits = &text[2..];
        return match i64::from_str_radix(digits, 16) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Float(digits.chars().fold(0.0, |acc, ch| {
                acc * 16.0 + f64::from(ch.to_digit(16).unwrap_or(0))
            })),
        };
    }
    if escape::is_float_literal(text) {
        if let Some(f) = parse_float(text) {
            return Value::Float(f);
        }
    }
    Value::String(text.to_string())
}

/// Parses a float token, including the `.inf` and `.nan` spellings.
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    match text.to_ascii_lowercase().as_str() {
        ".inf" | "+.inf" => Some(f64::INFINITY),
        "-.inf" => Some(f64::NEG_INFINITY),
        ".nan" => Some(f64::NAN),
        _ => text.parse::<f64>().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Value> {
        let mut anchors = AnchorTable::new();
        InlineParser::new(text, &mut anchors).parse_complete()
    }

    #[test]
    fn test_plain_coercion() {
        assert_eq!(coerce_plain("~"), Value::Null);
        assert_eq!(coerce_plain("NULL"), Value::Null);
        assert_eq!(coerce_plain("True"), Value::Bool(true));
        assert_eq!(coerce_plain("-12"), Value::Int(-12));
        assert_eq!(coerce_plain("+12"), Value::Int(12));
        assert_eq!(coerce_plain("0x4D2"), Value::Int(1234));
        assert_eq!(coerce_plain("1.5e3"), Value::Float(1500.0));
        assert_eq!(coerce_plain("-.INF"), Value::Float(f64::NEG_INFINITY));
        assert!(coerce_plain(".nan").as_f64().unwrap().is_nan());
        assert_eq!(
            coerce_plain("99999999999999999999"),
            Value::Float(99999999999999999999.0)
        );
        assert_eq!(coerce_plain("2001-12-14"), Value::from("2001-12-14"));
        assert_eq!(coerce_plain("1_000"), Value::from("1_000"));
    }

    #[test]
    fn test_quoted_scalars_are_not_coerced() {
        assert_eq!(parse("'123'").unwrap(), Value::from("123"));
        assert_eq!(parse("\"true\"").unwrap(), Value::from("true"));
        assert_eq!(parse("'it''s'").unwrap(), Value::from("it's"));
    }

    #[test]
    fn test_double_quoted_escapes() {
        assert_eq!(
            parse(r#""a\tb\nc\\d\"e\x41\u00e9\U0001F600\N\_\L\P""#).unwrap(),
            Value::from("a\tb\nc\\d\"eA\u{e9}\u{1F600}\u{85}\u{a0}\u{2028}\u{2029}")
        );
        assert_eq!(
            parse(r#""\q""#).unwrap_err().kind(),
            crate::ErrorKind::MalformedScalar
        );
    }

    #[test]
    fn test_flow_collections() {
        let value = parse("{ a: [1, 2], b: { c: 'x, y' }, d: }").unwrap();
        let map = value.as_mapping().unwrap();
        assert_eq!(
            map.get_str("a"),
            Some(&Value::Sequence(vec![Value::Int(1), Value::Int(2)]))
        );
        assert_eq!(
            map.get_str("b").and_then(|b| b.get("c")),
            Some(&Value::from("x, y"))
        );
        assert_eq!(map.get_str("d"), Some(&Value::Null));
    }

    #[test]
    fn test_pair_inside_flow_sequence() {
        let value = parse("[ key: value, other ]").unwrap();
        let seq = value.as_sequence().unwrap();
        assert_eq!(seq[0].get("key"), Some(&Value::from("value")));
        assert_eq!(seq[1], Value::from("other"));
    }

    #[test]
    fn test_plain_in_flow_keeps_urls() {
        let value = parse("[http://example.com, a:b]").unwrap();
        assert_eq!(
            value,
            Value::Sequence(vec![Value::from("http://example.com"), Value::from("a:b")])
        );
    }

    #[test]
    fn test_unterminated() {
        assert!(parse("[1, 2").is_err());
        assert!(parse("{a: 1").is_err());
        assert!(parse("'open").is_err());
        assert!(parse("\"open").is_err());
        assert!(parse("[1] x").is_err());
    }

    #[test]
    fn test_anchor_and_alias() {
        let mut anchors = AnchorTable::new();
        let (value, _) = parse_fragment("[&a { b: 1 }, *a]", &mut anchors).unwrap();
        let seq = value.as_sequence().unwrap();
        assert_eq!(seq[0], seq[1]);

        let err = parse("*missing").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::UndefinedAlias);
    }

    #[test]
    fn test_tags() {
        assert_eq!(parse("!!str 123").unwrap(), Value::from("123"));
        assert_eq!(parse("!!float 1").unwrap(), Value::Float(1.0));
        assert_eq!(parse("! 12").unwrap(), Value::from("12"));
        assert_eq!(
            parse("!!php/object:O:8:\"stdClass\":0:{}").unwrap(),
            Value::Tagged(crate::Tagged::new(
                "!!php/object",
                "O:8:\"stdClass\":0:{}"
            ))
        );
        assert_eq!(
            parse("!!set { a, b }").unwrap().as_mapping().map(Mapping::len),
            Some(2)
        );
    }

    #[test]
    fn test_alias_counts_toward_depth() {
        let mut anchors = AnchorTable::new();
        anchors.register("pair", Value::Sequence(vec![Value::Sequence(vec![])]));
        assert_eq!(anchors.depth("pair"), Some(2));

        let ok = InlineParser::new("[*pair]", &mut anchors)
            .with_depth(0, 3)
            .parse_complete();
        assert!(ok.is_ok());

        let err = InlineParser::new("[*pair]", &mut anchors)
            .with_depth(1, 3)
            .parse_complete()
            .unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::RecursionLimit);
    }

    #[test]
    fn test_alias_expansion_budget() {
        let mut anchors = AnchorTable::new();
        let wide = Value::Sequence(vec![Value::Int(0); 1000]);
        anchors.register("wide", wide);
        let text = format!("[{}]", vec!["*wide"; 1001].join(", "));
        let err = InlineParser::new(&text, &mut anchors)
            .parse_complete()
            .unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::RecursionLimit);
    }

    #[test]
    fn test_depth_limit() {
        let mut anchors = AnchorTable::new();
        let err = InlineParser::new("[[[]]]", &mut anchors)
            .with_depth(0, 2)
            .parse_complete()
            .unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::RecursionLimit);
    }

    #[test]
    fn test_scan_tag() {
        assert_eq!(scan_tag("!!str foo"), "!!str");
        assert_eq!(scan_tag("!!php/object:O"), "!!php/object");
        assert_eq!(scan_tag("!"), "!");
        assert_eq!(scan_tag("![a]"), "!");
    }
}
