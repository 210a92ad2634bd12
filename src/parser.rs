//! Block-level parsing.
//!
//! This module provides the [`Parser`], which reads a whole document line by line,
//! tracks indentation levels, and hands single-line values to the
//! [`InlineParser`](crate::InlineParser).
//!
//! ## Overview
//!
//! - **Indentation levels**: every block collection lives at one indentation;
//!   deeper lines belong to the previous entry, shallower lines close it
//! - **Document framing**: `%YAML` directives, one optional `---` start marker,
//!   an optional `...` end marker
//! - **Comments**: whole-line and trailing `#` comments are dropped everywhere
//!   except inside block scalars
//! - **Block scalars**: literal `|` and folded `>` with strip, clip and keep chomping
//!   and an optional indentation digit
//! - **Errors**: every failure carries the 1-based line number; parsing is
//!   all-or-nothing
//!
//! ## Usage
//!
//! ```rust
//! use serde_yamlite::{Parser, ParseOptions, Value};
//!
//! let text = "\
//! ## servers
//! servers:
//!   - name: alpha
//!     ports: [80, 443]
//!   - name: beta
//! motd: |
//!   line one
//!   line two
//! ";
//! let value = Parser::new(text).with_options(ParseOptions::new()).parse().unwrap();
//!
//! let servers = value.get("servers").and_then(Value::as_sequence).unwrap();
//! assert_eq!(servers.len(), 2);
//! assert_eq!(servers[0].get("name"), Some(&Value::from("alpha")));
//! assert_eq!(value.get("motd"), Some(&Value::from("line one\nline two\n")));
//! ```

use crate::inline::{self, AnchorTable, InlineParser};
use crate::tag::{self, PassThrough, TagCodec};
use crate::{Error, ErrorKind, Mapping, ParseOptions, Result, Value};
use log::{debug, trace, warn};
use std::borrow::Cow;

/// Parser for a complete document.
///
/// Holds no state between calls: each [`Parser::parse`] starts with a fresh
/// anchor table.
pub struct Parser<'a> {
    input: &'a str,
    options: ParseOptions,
    codec: &'a dyn TagCodec,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            input,
            options: ParseOptions::default(),
            codec: &PassThrough,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the codec used for custom tags.
    #[must_use]
    pub fn with_codec(mut self, codec: &'a dyn TagCodec) -> Self {
        self.codec = codec;
        self
    }

    /// Parses the input into a value tree.
    ///
    /// # Errors
    ///
    /// Returns the first error found; no partial tree is ever produced.
    pub fn parse(&self) -> Result<Value> {
        let text: Cow<'_, str> = if self.input.contains('\r') {
            Cow::Owned(self.input.replace("\r\n", "\n").replace('\r', "\n"))
        } else {
            Cow::Borrowed(self.input)
        };
        // a final newline terminates the last line rather than opening a new one
        let body = text.strip_suffix('\n').unwrap_or(&text);

        let lines: Vec<Line<'_>> = body
            .split('\n')
            .enumerate()
            .map(|(i, raw)| Line::new(i + 1, raw))
            .collect();
        debug!("parsing document of {} lines", lines.len());

        check_tabs(&lines)?;
        let (lines, end_marker) = frame_document(lines)?;

        let mut state = BlockState {
            lines,
            pos: 0,
            end_marker,
            anchors: AnchorTable::new(),
            options: &self.options,
            codec: self.codec,
        };
        state.document()
    }
}

#[derive(Clone, Copy, Debug)]
struct Line<'t> {
    number: usize,
    indent: usize,
    /// Content after the indentation.
    text: &'t str,
    raw: &'t str,
}

impl<'t> Line<'t> {
    fn new(number: usize, raw: &'t str) -> Self {
        let text = raw.trim_start_matches(' ');
        Line {
            number,
            indent: raw.len() - text.len(),
            text,
            raw,
        }
    }

    fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn is_comment(&self) -> bool {
        self.text.starts_with('#')
    }

    fn is_insignificant(&self) -> bool {
        self.is_blank() || self.is_comment()
    }
}

fn check_tabs(lines: &[Line<'_>]) -> Result<()> {
    for line in lines {
        let content = line.raw.trim_start_matches([' ', '\t']);
        let leading = &line.raw[..line.raw.len() - content.len()];
        if let Some(tab) = leading.find('\t') {
            return Err(Error::at(
                ErrorKind::TabIndentation,
                line.number,
                &line.raw[tab..],
            ));
        }
    }
    Ok(())
}

fn is_marker(raw: &str, marker: &str) -> bool {
    raw.strip_prefix(marker)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with([' ', '\t']))
}

/// Applies directives and document markers, returning the document's lines and
/// whether a `...` marker closed them.
fn frame_document(lines: Vec<Line<'_>>) -> Result<(Vec<Line<'_>>, bool)> {
    let mut out = Vec::with_capacity(lines.len());
    let mut started = false;
    let mut has_content = false;

    for line in lines {
        if is_marker(line.raw, "...") {
            debug!("document end marker at line {}, ignoring the rest", line.number);
            return Ok((out, true));
        }

        if is_marker(line.raw, "---") {
            if started || has_content {
                return Err(Error::at(
                    ErrorKind::MultipleDocuments,
                    line.number,
                    line.raw,
                ));
            }
            started = true;
            let rest = line.raw[3..].trim();
            if rest.is_empty() || rest.starts_with('%') || rest.starts_with('#') {
                continue;
            }
            has_content = true;
            out.push(Line {
                number: line.number,
                indent: 0,
                text: rest,
                raw: rest,
            });
            continue;
        }

        if !started && !has_content && line.indent == 0 && line.text.starts_with('%') {
            directive(&line)?;
            continue;
        }

        if !line.is_insignificant() {
            has_content = true;
        }
        out.push(line);
    }

    Ok((out, false))
}

fn directive(line: &Line<'_>) -> Result<()> {
    let text = strip_comment(line.text).trim_end();
    if let Some(rest) = text.strip_prefix("%YAML") {
        let version = rest.strip_prefix([' ', ':']).map(str::trim_start);
        match version {
            Some(version) if is_version(version) => {
                debug!("%YAML {} directive", version);
                Ok(())
            }
            _ => Err(Error::malformed(
                line.number,
                line.raw,
                "Malformed %YAML directive",
            )),
        }
    } else if text.starts_with("%TAG") {
        debug!("ignoring %TAG directive at line {}", line.number);
        Ok(())
    } else {
        warn!("ignoring unknown directive {:?} at line {}", text, line.number);
        Ok(())
    }
}

fn is_version(text: &str) -> bool {
    match text.split_once('.') {
        Some((major, minor)) => {
            !major.is_empty()
                && !minor.is_empty()
                && major.bytes().all(|b| b.is_ascii_digit())
                && minor.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

fn is_sequence_item(text: &str) -> bool {
    text == "-" || text.starts_with("- ") || text.starts_with("-\t")
}

/// Byte index of the `:` that separates a mapping key from its value, if `text`
/// is a mapping entry.
fn entry_separator(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let key_end = match bytes.first()? {
        b'"' | b'\'' => quoted_end(text)?,
        b'[' | b'{' => flow_end(text)?,
        b'#' => return None,
        b'-' if is_sequence_item(text) => return None,
        _ => {
            let mut prev = b' ';
            for (i, &b) in bytes.iter().enumerate() {
                if b == b':' && matches!(bytes.get(i + 1), None | Some(b' ' | b'\t')) {
                    return Some(i);
                }
                if b == b'#' && matches!(prev, b' ' | b'\t') {
                    return None;
                }
                prev = b;
            }
            return None;
        }
    };

    let after = &text[key_end..];
    let colon = key_end + (after.len() - after.trim_start_matches([' ', '\t']).len());
    (bytes.get(colon) == Some(&b':') && matches!(bytes.get(colon + 1), None | Some(b' ' | b'\t')))
        .then_some(colon)
}

/// Index just past the closing quote of the quoted scalar at the start of `text`.
fn quoted_end(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let quote = *bytes.first()?;
    let mut i = 1;
    while i < bytes.len() {
        let b = bytes[i];
        if quote == b'"' && b == b'\\' {
            i += 2;
            continue;
        }
        if b == quote {
            if quote == b'\'' && bytes.get(i + 1) == Some(&b'\'') {
                i += 2;
                continue;
            }
            return Some(i + 1);
        }
        i += 1;
    }
    None
}

/// Index just past the bracket closing the flow collection at the start of `text`.
fn flow_end(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut prev: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'[' | b'{' => depth += 1,
            b']' | b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            b'"' | b'\'' if opens_quote(prev) => {
                i += quoted_end(&text[i..])?;
                prev = Some(b);
                continue;
            }
            _ => {}
        }
        prev = Some(b);
        i += 1;
    }
    None
}

fn opens_quote(prev: Option<u8>) -> bool {
    matches!(prev, None | Some(b' ' | b'\t' | b'[' | b'{' | b','))
}

/// Drops a trailing `#` comment: one that starts the text or follows whitespace,
/// outside any quoted scalar.
fn strip_comment(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut quote: Option<u8> = None;
    let mut prev: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if q == b'"' && b == b'\\' {
                    i += 2;
                    continue;
                }
                if b == q {
                    if q == b'\'' && bytes.get(i + 1) == Some(&b'\'') {
                        i += 2;
                        continue;
                    }
                    quote = None;
                }
            }
            None => {
                if (b == b'"' || b == b'\'') && opens_quote(prev) {
                    quote = Some(b);
                } else if b == b'#' && matches!(prev, None | Some(b' ' | b'\t')) {
                    return &text[..i];
                }
            }
        }
        prev = Some(b);
        i += 1;
    }
    text
}

/// An unquoted value that is neither a flow collection nor tagged, after any
/// leading anchor.
fn is_plain_value(text: &str) -> bool {
    let mut body = text;
    if body.starts_with('&') {
        body = body
            .find(char::is_whitespace)
            .map_or("", |end| body[end..].trim_start());
    }
    !body.is_empty() && !body.starts_with(['"', '\'', '[', '{', '!', '*'])
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Chomping {
    Clip,
    Strip,
    Keep,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct BlockHeader {
    literal: bool,
    chomping: Chomping,
    indent: Option<usize>,
}

impl BlockHeader {
    /// Parses `|`, `>-`, `|2+`, `>+1` and similar headers.
    fn parse(text: &str) -> Option<Self> {
        let text = strip_comment(text).trim_end();
        let mut chars = text.chars();
        let literal = match chars.next()? {
            '|' => true,
            '>' => false,
            _ => return None,
        };
        let mut chomping = None;
        let mut indent = None;
        for ch in chars {
            match ch {
                '-' if chomping.is_none() => chomping = Some(Chomping::Strip),
                '+' if chomping.is_none() => chomping = Some(Chomping::Keep),
                '1'..='9' if indent.is_none() => indent = ch.to_digit(10).map(|d| d as usize),
                _ => return None,
            }
        }
        Some(BlockHeader {
            literal,
            chomping: chomping.unwrap_or(Chomping::Clip),
            indent,
        })
    }
}

/// Anchor and tag written before a nested block or a block scalar header.
struct Properties<'t> {
    anchor: Option<&'t str>,
    tag: Option<&'t str>,
    rest: &'t str,
}

impl<'t> Properties<'t> {
    /// Splits leading `&anchor` / `!tag` tokens off `text`. Returns `None` when
    /// what follows is an inline value, which handles its own properties.
    fn split(text: &'t str) -> Option<Self> {
        let mut props = Properties {
            anchor: None,
            tag: None,
            rest: text,
        };
        loop {
            if props.anchor.is_none() && props.rest.starts_with('&') {
                let end = props.rest.find(char::is_whitespace).unwrap_or(props.rest.len());
                if end == 1 {
                    return None;
                }
                props.anchor = Some(&props.rest[1..end]);
                props.rest = props.rest[end..].trim_start();
            } else if props.tag.is_none() && props.rest.starts_with('!') {
                let tag = inline::scan_tag(props.rest);
                let after = &props.rest[tag.len()..];
                if !after.is_empty() && !after.starts_with(char::is_whitespace) {
                    return None;
                }
                props.tag = Some(tag);
                props.rest = after.trim_start();
            } else {
                break;
            }
        }
        (props.rest.is_empty() || BlockHeader::parse(props.rest).is_some()).then_some(props)
    }
}

/// Joins continuation lines onto the first line of a multi-line value: lines
/// are separated by one space, each blank line becomes a newline.
fn fold_continuation(first: &str, rest: &[Option<Line<'_>>], strip: bool) -> String {
    let mut out = first.to_string();
    let mut after_break = false;
    for line in rest {
        match line {
            None => {
                out.push('\n');
                after_break = true;
            }
            Some(line) => {
                let text = if strip {
                    strip_comment(line.text)
                } else {
                    line.text
                };
                if !after_break {
                    out.push(' ');
                }
                out.push_str(text.trim());
                after_break = false;
            }
        }
    }
    out
}

/// Folds block scalar lines: runs of base-indented lines join with a space,
/// blank lines become newlines, more-indented lines keep their own lines.
fn fold_block(lines: &[&str]) -> String {
    let mut text = String::new();
    let mut prev_indented = false;
    let mut prev_blank = false;
    let mut has_content = false;
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            text.push('\n');
            prev_indented = false;
            prev_blank = true;
        } else if line.starts_with(' ') {
            if has_content {
                text.push('\n');
            }
            text.push_str(line);
            prev_indented = true;
            prev_blank = false;
        } else if prev_indented {
            text.push('\n');
            text.push_str(line);
            prev_indented = false;
            prev_blank = false;
        } else if prev_blank || i == 0 {
            text.push_str(line);
            prev_blank = false;
        } else {
            text.push(' ');
            text.push_str(line);
        }
        has_content |= !line.is_empty();
    }
    text
}

struct BlockState<'t, 'o> {
    lines: Vec<Line<'t>>,
    pos: usize,
    /// A `...` marker followed the last line.
    end_marker: bool,
    anchors: AnchorTable,
    options: &'o ParseOptions,
    codec: &'o dyn TagCodec,
}

impl<'t, 'o> BlockState<'t, 'o> {
    fn document(&mut self) -> Result<Value> {
        let value = self.block(None, 0)?.unwrap_or(Value::Null);
        self.skip_insignificant();
        if let Some(line) = self.current() {
            return Err(Error::at(
                ErrorKind::UnindentedCollection,
                line.number,
                line.text,
            ));
        }
        Ok(value)
    }

    fn current(&self) -> Option<Line<'t>> {
        self.lines.get(self.pos).copied()
    }

    fn skip_insignificant(&mut self) {
        while self.current().is_some_and(|line| line.is_insignificant()) {
            self.pos += 1;
        }
    }

    /// Parses the block whose lines are deeper than `parent`, or returns `None`
    /// when the next significant line is not deeper.
    fn block(&mut self, parent: Option<usize>, depth: usize) -> Result<Option<Value>> {
        self.skip_insignificant();
        let Some(line) = self.current() else {
            return Ok(None);
        };
        if parent.is_some_and(|p| line.indent <= p) {
            return Ok(None);
        }

        if is_sequence_item(line.text) || entry_separator(line.text).is_some() {
            let depth = depth + 1;
            if depth > self.options.max_depth {
                return Err(Error::recursion_limit(
                    line.number,
                    self.options.max_depth,
                    line.text,
                ));
            }
            if is_sequence_item(line.text) {
                return self.sequence(line.indent, depth).map(Some);
            }
            return self.mapping(line.indent, depth).map(Some);
        }

        let text = strip_comment(line.text).trim();
        self.node(text, line, line.indent, parent, depth).map(Some)
    }

    fn sequence(&mut self, indent: usize, depth: usize) -> Result<Value> {
        let mut items = Vec::new();
        loop {
            self.skip_insignificant();
            let Some(line) = self.current() else { break };
            if line.indent < indent {
                break;
            }
            if line.indent > indent {
                return Err(Error::at(
                    ErrorKind::UnindentedCollection,
                    line.number,
                    line.text,
                ));
            }
            if !is_sequence_item(line.text) {
                if entry_separator(line.text).is_some() {
                    return Err(Error::at(
                        ErrorKind::MappingInSequence,
                        line.number,
                        line.text,
                    ));
                }
                return Err(Error::malformed(line.number, line.text, "Unable to parse"));
            }

            let rest = line.text[1..].trim_start_matches([' ', '\t']);
            let column = indent + (line.text.len() - rest.len());
            let item = self.item(rest, line, indent, column, depth)?;
            items.push(item);
        }
        trace!("sequence of {} items at indent {}", items.len(), indent);
        Ok(Value::Sequence(items))
    }

    fn item(
        &mut self,
        rest: &'t str,
        line: Line<'t>,
        indent: usize,
        column: usize,
        depth: usize,
    ) -> Result<Value> {
        if is_sequence_item(rest) || entry_separator(rest).is_some() {
            // `- - x` and `- key: v` open a collection at the item's content column
            self.lines[self.pos] = Line {
                number: line.number,
                indent: column,
                text: rest,
                raw: line.raw,
            };
            return Ok(self.block(Some(indent), depth)?.unwrap_or(Value::Null));
        }
        let text = strip_comment(rest).trim();
        self.node(text, line, indent, Some(indent), depth)
    }

    fn mapping(&mut self, indent: usize, depth: usize) -> Result<Value> {
        let mut map = Mapping::new();
        let mut after_empty_value = false;
        loop {
            self.skip_insignificant();
            let Some(line) = self.current() else { break };
            if line.indent < indent {
                break;
            }
            if line.indent > indent {
                return Err(Error::at(
                    ErrorKind::UnindentedCollection,
                    line.number,
                    line.text,
                ));
            }
            let Some(separator) = entry_separator(line.text) else {
                if line.text.starts_with('-') {
                    let kind = if after_empty_value {
                        ErrorKind::UnindentedCollection
                    } else {
                        ErrorKind::SequenceInMapping
                    };
                    return Err(Error::at(kind, line.number, line.text));
                }
                return Err(Error::malformed(line.number, line.text, "Unable to parse"));
            };

            let key_text = line.text[..separator].trim_end();
            let value_text = strip_comment(&line.text[separator + 1..]).trim();
            if is_plain_value(value_text)
                && (value_text.contains(": ") || value_text.contains(":\t") || value_text.ends_with(':'))
            {
                return Err(Error::at(
                    ErrorKind::ColonInMappingValue,
                    line.number,
                    line.text,
                ));
            }

            let key = self.inline(key_text, line.number, depth)?;
            let value = self.node(value_text, line, indent, Some(indent), depth)?;
            after_empty_value = value_text.is_empty() && value.is_null();

            if key_text == "<<" {
                merge_into(&mut map, value, &line)?;
            } else {
                map.insert(key, value);
            }
        }
        trace!("mapping of {} entries at indent {}", map.len(), indent);
        Ok(Value::Mapping(map))
    }

    /// Parses the value that starts with `text` on `line`: a nested block, a
    /// block scalar, or an inline value with its continuation lines.
    fn node(
        &mut self,
        text: &'t str,
        line: Line<'t>,
        owner: usize,
        parent: Option<usize>,
        depth: usize,
    ) -> Result<Value> {
        if let Some(props) = Properties::split(text) {
            let value = if props.rest.is_empty() {
                self.pos += 1;
                match self.block(Some(owner), depth)? {
                    Some(value) => {
                        if let Some(tag) = props.tag {
                            trace!("tag {} on a nested block at line {} is ignored", tag, line.number);
                        }
                        value
                    }
                    None => match props.tag {
                        Some(tag) => tag::resolve_scalar(self.codec, tag, "", line.number)?,
                        None => Value::Null,
                    },
                }
            } else {
                let header = BlockHeader::parse(props.rest)
                    .ok_or_else(|| Error::malformed(line.number, text, "Invalid block scalar header"))?;
                let content = self.block_scalar(header, owner);
                match props.tag {
                    Some(tag) => tag::resolve_scalar(self.codec, tag, &content, line.number)?,
                    None => Value::String(content),
                }
            };
            if let Some(name) = props.anchor {
                self.anchors.register(name, value.clone());
            }
            return Ok(value);
        }

        self.scalar(text, line, parent, depth)
    }

    fn scalar(
        &mut self,
        text: &str,
        line: Line<'t>,
        parent: Option<usize>,
        depth: usize,
    ) -> Result<Value> {
        self.pos += 1;
        let continuation = self.continuation(parent);
        if continuation.is_empty() {
            return self.inline(text, line.number, depth);
        }

        let joined = match text.chars().next() {
            Some('"' | '\'') => fold_continuation(text, &continuation, false),
            Some('[' | '{') => fold_continuation(text, &continuation, true),
            _ => {
                if let Some(entry) = continuation
                    .iter()
                    .flatten()
                    .find(|l| entry_separator(l.text).is_some())
                {
                    return Err(Error::malformed(entry.number, entry.text, "Indentation problem"));
                }
                fold_continuation(text, &continuation, true)
            }
        };
        self.inline(&joined, line.number, depth)
    }

    /// Collects the lines deeper than `parent` that continue a multi-line value;
    /// `None` marks a blank line.
    fn continuation(&mut self, parent: Option<usize>) -> Vec<Option<Line<'t>>> {
        let mut lines = Vec::new();
        let mut blanks = 0;
        while let Some(line) = self.current() {
            if line.is_blank() {
                blanks += 1;
            } else if !line.is_comment() {
                if parent.is_some_and(|p| line.indent <= p) {
                    break;
                }
                lines.extend(std::iter::repeat(None).take(blanks));
                blanks = 0;
                lines.push(Some(line));
            }
            self.pos += 1;
        }
        lines
    }

    fn block_scalar(&mut self, header: BlockHeader, owner: usize) -> String {
        self.pos += 1;
        let mut content_indent = header.indent.map(|d| owner + d);
        let mut lines: Vec<&str> = Vec::new();
        let mut trailing_blanks = 0;

        while let Some(line) = self.current() {
            if line.is_blank() {
                lines.push(content_indent.and_then(|ci| line.raw.get(ci..)).unwrap_or(""));
                trailing_blanks += 1;
                self.pos += 1;
                continue;
            }
            let ci = *content_indent.get_or_insert(line.indent);
            if line.indent < ci || line.indent <= owner {
                break;
            }
            lines.push(&line.raw[ci..]);
            trailing_blanks = 0;
            self.pos += 1;
        }
        let len = lines.len();
        for blank in &mut lines[len - trailing_blanks..] {
            *blank = "";
        }

        let mut text = if header.literal {
            lines.join("\n")
        } else {
            fold_block(&lines)
        };
        if self.pos < self.lines.len() || self.end_marker {
            text.push('\n');
        }

        match header.chomping {
            Chomping::Strip => text.truncate(text.trim_end_matches('\n').len()),
            Chomping::Clip => {
                text.truncate(text.trim_end_matches('\n').len());
                if !text.is_empty() {
                    text.push('\n');
                }
            }
            Chomping::Keep => {}
        }
        trace!("block scalar of {} lines ({:?})", lines.len(), header.chomping);
        text
    }

    fn inline(&mut self, text: &str, line: usize, depth: usize) -> Result<Value> {
        InlineParser::new(text, &mut self.anchors)
            .with_line(line)
            .with_depth(depth, self.options.max_depth)
            .with_codec(self.codec)
            .parse_complete()
    }
}

/// Applies a `<<` merge key: entries of the merged mapping(s) are added when the
/// key is not already present.
fn merge_into(map: &mut Mapping, value: Value, line: &Line<'_>) -> Result<()> {
    let invalid = || {
        Error::malformed(
            line.number,
            line.text,
            "Merge key value must be a mapping or a sequence of mappings",
        )
    };
    let sources = match value {
        Value::Mapping(source) => vec![source],
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Mapping(source) => Ok(source),
                _ => Err(invalid()),
            })
            .collect::<Result<Vec<_>>>()?,
        _ => return Err(invalid()),
    };
    for source in sources {
        for (key, value) in source {
            if !map.contains_key(&key) {
                map.insert(key, value);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_separator() {
        assert_eq!(entry_separator("key: value"), Some(3));
        assert_eq!(entry_separator("key:"), Some(3));
        assert_eq!(entry_separator("'a: b': c"), Some(6));
        assert_eq!(entry_separator("\"a\\\"b\" : c"), Some(7));
        assert_eq!(entry_separator("[a, b]: c"), Some(6));
        assert_eq!(entry_separator("{ a: 1 }: c"), Some(8));
        assert_eq!(entry_separator("http://example.com"), None);
        assert_eq!(entry_separator("- a: b"), None);
        assert_eq!(entry_separator("a # b: c"), None);
        assert_eq!(entry_separator("[a, b]"), None);
        assert_eq!(entry_separator("\"missing colon\""), None);
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("bar # Note: a comment"), "bar ");
        assert_eq!(strip_comment("'a # b' # c"), "'a # b' ");
        assert_eq!(strip_comment("\"a \\\" # b\""), "\"a \\\" # b\"");
        assert_eq!(strip_comment("it's # c"), "it's ");
        assert_eq!(strip_comment("a#b"), "a#b");
        assert_eq!(strip_comment("# all"), "");
    }

    #[test]
    fn test_block_header() {
        assert_eq!(
            BlockHeader::parse("|"),
            Some(BlockHeader {
                literal: true,
                chomping: Chomping::Clip,
                indent: None
            })
        );
        assert_eq!(
            BlockHeader::parse(">2-"),
            Some(BlockHeader {
                literal: false,
                chomping: Chomping::Strip,
                indent: Some(2)
            })
        );
        assert_eq!(BlockHeader::parse("|+1 # note").map(|h| h.indent), Some(Some(1)));
        assert_eq!(BlockHeader::parse("|--"), None);
        assert_eq!(BlockHeader::parse("| x"), None);
        assert_eq!(BlockHeader::parse(">=1.0"), None);
    }

    #[test]
    fn test_fold_block() {
        assert_eq!(fold_block(&["a", "b"]), "a b");
        assert_eq!(fold_block(&["a", "", "b"]), "a\nb");
        assert_eq!(fold_block(&["a", "  b", "c"]), "a\n  b\nc");
        assert_eq!(fold_block(&["", "", "a"]), "\n\na");
        assert_eq!(fold_block(&["  a", "  b"]), "  a\n  b");
        assert_eq!(fold_block(&["", "  a", "b"]), "\n  a\nb");

        let long = vec!["  more"; 50_000];
        let folded = fold_block(&long);
        assert_eq!(folded.lines().count(), 50_000);
    }

    #[test]
    fn test_properties_split() {
        let props = Properties::split("&a").unwrap();
        assert_eq!(props.anchor, Some("a"));
        assert!(props.rest.is_empty());

        let props = Properties::split("!!str |").unwrap();
        assert_eq!(props.tag, Some("!!str"));
        assert_eq!(props.rest, "|");

        assert!(Properties::split("&a value").is_none());
        assert!(Properties::split("!!php/object:O:1").is_none());
    }

    #[test]
    fn test_version_directive() {
        assert!(is_version("1.2"));
        assert!(!is_version("1"));
        assert!(!is_version("1.x"));
    }
}
