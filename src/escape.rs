//! Quoting rules and literal patterns shared by the parser and the dumper.
//!
//! The dumper asks two questions of every string it writes:
//!
//! 1. [`requires_double_quoting`]: does it contain a character that can only be
//!    written as a backslash escape?
//! 2. [`requires_single_quoting`]: would it read back as something else (a number,
//!    a boolean, a structural indicator) if written plain?
//!
//! The inline parser uses the same literal patterns ([`is_integer_literal`],
//! [`is_float_literal`], [`is_hex_literal`], [`is_timestamp`]) to decide how a plain
//! token is coerced, which is what keeps the two directions in agreement.
//!
//! ## Examples
//!
//! ```rust
//! use serde_yamlite::escape;
//!
//! assert!(escape::requires_double_quoting("tab\there"));
//! assert!(escape::requires_single_quoting("123"));
//! assert!(escape::requires_single_quoting("true"));
//! assert!(!escape::requires_single_quoting("hello world"));
//!
//! assert_eq!(escape::escape_with_single_quotes("it's"), "'it''s'");
//! assert_eq!(escape::escape_with_double_quotes("a\nb"), "\"a\\nb\"");
//! ```

/// Returns `true` if `s` contains a character that must be written as a
/// backslash escape inside double quotes.
#[must_use]
pub fn requires_double_quoting(s: &str) -> bool {
    s.chars().any(needs_escape)
}

fn needs_escape(c: char) -> bool {
    c < ' '
        || c == '\x7f'
        || matches!(c, '\u{85}' | '\u{a0}' | '\u{2028}' | '\u{2029}' | '\u{feff}')
}

/// Returns `true` if leaving `s` unquoted would change its parsed meaning.
///
/// # Examples
///
/// ```rust
/// use serde_yamlite::escape::requires_single_quoting;
///
/// assert!(requires_single_quoting(""));
/// assert!(requires_single_quoting(" padded"));
/// assert!(requires_single_quoting("- item"));
/// assert!(requires_single_quoting("key: value"));
/// assert!(requires_single_quoting("a, b"));
/// assert!(requires_single_quoting("~"));
/// assert!(requires_single_quoting("1.5e3"));
/// assert!(requires_single_quoting("0x1F"));
/// assert!(requires_single_quoting("2001-12-14"));
/// assert!(!requires_single_quoting("plain text"));
/// ```
#[must_use]
pub fn requires_single_quoting(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return true;
    };

    if first.is_whitespace() || s.ends_with(char::is_whitespace) {
        return true;
    }

    if matches!(
        first,
        '-' | '?'
            | ':'
            | ','
            | '['
            | ']'
            | '{'
            | '}'
            | '#'
            | '&'
            | '*'
            | '!'
            | '|'
            | '>'
            | '\''
            | '"'
            | '%'
            | '@'
            | '`'
            | '<'
            | '='
    ) {
        return true;
    }

    if s.contains(": ")
        || s.contains(":\t")
        || s.ends_with(':')
        || s.contains(" #")
        || s.contains("\t#")
        || s.contains(" '")
        || s.contains(" \"")
        || s.contains([',', '[', ']', '{', '}'])
    {
        return true;
    }

    if s == "..." || s.starts_with("... ") {
        return true;
    }

    let lower = s.to_ascii_lowercase();
    if matches!(
        lower.as_str(),
        "null" | "~" | "true" | "false" | "y" | "n" | "yes" | "no" | "on" | "off"
    ) {
        return true;
    }

    is_integer_literal(s) || is_float_literal(s) || is_hex_literal(s) || is_timestamp(s)
}

/// Wraps `s` in single quotes, doubling any embedded single quote.
#[must_use]
pub fn escape_with_single_quotes(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Wraps `s` in double quotes, escaping backslashes, quotes and every
/// character that [`requires_double_quoting`] flags.
#[must_use]
pub fn escape_with_double_quotes(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\0' => out.push_str("\\0"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\x0b' => out.push_str("\\v"),
            '\x0c' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '\x1b' => out.push_str("\\e"),
            '\u{85}' => out.push_str("\\N"),
            '\u{a0}' => out.push_str("\\_"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            '\u{feff}' => out.push_str("\\uFEFF"),
            c if c < ' ' || c == '\x7f' => out.push_str(&format!("\\x{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Returns `true` for `[-+]?[0-9]+`.
#[must_use]
pub fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` for `0x` followed by one or more hex digits (either case).
#[must_use]
pub fn is_hex_literal(s: &str) -> bool {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Returns `true` for decimal or exponent numbers that are not plain integers,
/// and for the `.inf`, `-.inf`, `+.inf` and `.nan` spellings (any case).
#[must_use]
pub fn is_float_literal(s: &str) -> bool {
    if s.eq_ignore_ascii_case(".nan") {
        return true;
    }
    let body = s.strip_prefix(['-', '+']).unwrap_or(s);
    if body.eq_ignore_ascii_case(".inf") {
        return true;
    }

    let bytes = body.as_bytes();
    let mut pos = 0;
    let mut mantissa_digits = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
        mantissa_digits += 1;
    }
    let mut has_dot = false;
    if pos < bytes.len() && bytes[pos] == b'.' {
        has_dot = true;
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }
    let mut has_exponent = false;
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        pos += 1;
        if pos < bytes.len() && (bytes[pos] == b'-' || bytes[pos] == b'+') {
            pos += 1;
        }
        let start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == start {
            return false;
        }
        has_exponent = true;
    }
    pos == bytes.len() && (has_dot || has_exponent)
}

/// Returns `true` if `s` matches the unquoted timestamp pattern:
/// `YYYY-M-D`, optionally followed by `T` or spaces, `H:MM:SS`, a fraction and a
/// `Z` or `±H[:MM]` zone.
///
/// # Examples
///
/// ```rust
/// use serde_yamlite::escape::is_timestamp;
///
/// assert!(is_timestamp("2001-12-14"));
/// assert!(is_timestamp("2001-12-14t21:59:43.10-05:00"));
/// assert!(is_timestamp("2001-12-14 21:59:43.10 -5"));
/// assert!(!is_timestamp("2001-12"));
/// ```
#[must_use]
pub fn is_timestamp(s: &str) -> bool {
    timestamp_parts(s).is_some()
}

/// Components of a string matching the timestamp pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TimestampParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nanos: u32,
    /// Offset east of UTC in seconds; `None` when no zone was written.
    pub offset: Option<i32>,
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn number(&mut self, min: usize, max: usize) -> Option<u32> {
        let start = self.pos;
        let mut value = 0u32;
        while self.pos - start < max {
            match self.peek() {
                Some(b) if b.is_ascii_digit() => {
                    value = value * 10 + u32::from(b - b'0');
                    self.pos += 1;
                }
                _ => break,
            }
        }
        (self.pos - start >= min).then_some(value)
    }

    fn skip_blanks(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }
}

pub(crate) fn timestamp_parts(s: &str) -> Option<TimestampParts> {
    let mut cur = Cursor {
        bytes: s.as_bytes(),
        pos: 0,
    };

    let year = cur.number(4, 4)? as i32;
    if !cur.eat(b'-') {
        return None;
    }
    let month = cur.number(1, 2)?;
    if !cur.eat(b'-') {
        return None;
    }
    let day = cur.number(1, 2)?;
    let mut parts = TimestampParts {
        year,
        month,
        day,
        hour: 0,
        minute: 0,
        second: 0,
        nanos: 0,
        offset: None,
    };
    if cur.at_end() {
        return Some(parts);
    }

    if !(cur.eat(b'T') || cur.eat(b't') || cur.skip_blanks() > 0) {
        return None;
    }
    parts.hour = cur.number(1, 2)?;
    if !cur.eat(b':') {
        return None;
    }
    parts.minute = cur.number(2, 2)?;
    if !cur.eat(b':') {
        return None;
    }
    parts.second = cur.number(2, 2)?;

    if cur.eat(b'.') {
        let mut scale = 100_000_000u32;
        while let Some(b) = cur.peek().filter(u8::is_ascii_digit) {
            parts.nanos += u32::from(b - b'0') * scale;
            scale /= 10;
            cur.pos += 1;
        }
    }

    cur.skip_blanks();
    if cur.at_end() {
        return Some(parts);
    }
    if cur.eat(b'Z') {
        parts.offset = Some(0);
    } else {
        let sign = match cur.peek() {
            Some(b'+') => 1,
            Some(b'-') => -1,
            _ => return None,
        };
        cur.pos += 1;
        let hours = cur.number(1, 2)?;
        let minutes = if cur.eat(b':') { cur.number(2, 2)? } else { 0 };
        parts.offset = Some(sign * (hours * 3600 + minutes * 60) as i32);
    }
    cur.at_end().then_some(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_quoting_detects_controls() {
        assert!(requires_double_quoting("line\nbreak"));
        assert!(requires_double_quoting("\u{2028}"));
        assert!(requires_double_quoting("nb\u{a0}sp"));
        assert!(!requires_double_quoting("caf\u{e9}"));
    }

    #[test]
    fn test_single_quoting_indicators() {
        for s in ["-", "?x", ":x", "#c", "&a", "*a", "!tag", "|", ">", "%x", "@x", "`x", "<<"] {
            assert!(requires_single_quoting(s), "{s:?} should need quotes");
        }
        assert!(requires_single_quoting("a #b"));
        assert!(requires_single_quoting("ends:"));
        assert!(requires_single_quoting("..."));
        assert!(!requires_single_quoting("a#b"));
        assert!(!requires_single_quoting("http://example.com"));
        assert!(!requires_single_quoting("it's"));
        assert!(requires_single_quoting("say 'hi'"));
    }

    #[test]
    fn test_single_quoting_literals() {
        for s in ["Null", "TRUE", "off", "42", "-7", "+3", ".5", "1e10", ".INF", "-.inf", ".NaN"] {
            assert!(requires_single_quoting(s), "{s:?} should need quotes");
        }
        assert!(!requires_single_quoting("1_000"));
        assert!(!requires_single_quoting("1.2.3"));
    }

    #[test]
    fn test_float_literal_grammar() {
        assert!(is_float_literal("1."));
        assert!(is_float_literal("-0.5"));
        assert!(is_float_literal("6.8523015e+5"));
        assert!(!is_float_literal("1"));
        assert!(!is_float_literal("e5"));
        assert!(!is_float_literal("1e"));
        assert!(!is_float_literal("."));
    }

    #[test]
    fn test_hex_literal() {
        assert!(is_hex_literal("0x4D2"));
        assert!(is_hex_literal("0XfF"));
        assert!(!is_hex_literal("0x"));
        assert!(!is_hex_literal("0xZZ"));
    }

    #[test]
    fn test_double_escapes() {
        assert_eq!(escape_with_double_quotes("q\"b\\"), "\"q\\\"b\\\\\"");
        assert_eq!(escape_with_double_quotes("\x01"), "\"\\x01\"");
        assert_eq!(escape_with_double_quotes("\u{2029}"), "\"\\P\"");
    }

    #[test]
    fn test_timestamp_parts() {
        let parts = timestamp_parts("2001-12-14t21:59:43.10-05:00").unwrap();
        assert_eq!((parts.year, parts.month, parts.day), (2001, 12, 14));
        assert_eq!((parts.hour, parts.minute, parts.second), (21, 59, 43));
        assert_eq!(parts.nanos, 100_000_000);
        assert_eq!(parts.offset, Some(-5 * 3600));

        assert_eq!(timestamp_parts("2002-12-14").unwrap().offset, None);
        assert_eq!(timestamp_parts("2001-12-15T02:59:43.1Z").unwrap().offset, Some(0));
        assert!(timestamp_parts("2001-12-14 21:59").is_none());
        assert!(timestamp_parts("2001-12-14x").is_none());
    }
}
