//! Supported Syntax
//!
//! This module documents the subset of YAML read by the [`Parser`](crate::Parser)
//! and written by the [`Dumper`](crate::Dumper).
//!
//! # Overview
//!
//! The format covers what configuration files actually use: indentation-based
//! mappings and sequences, single-line flow collections, quoted and plain
//! scalars, block scalars, anchors and aliases, and tags. One file holds one
//! document.
//!
//! # Block Collections
//!
//! ## Mappings
//!
//! ```text
//! name: Alice
//! address:
//!   city: Paris
//!   zip: "75001"
//! ```
//!
//! **Rules**:
//! - A key ends at the first `:` followed by a space, a tab or the end of the line
//! - Keys may be quoted (`'a: b': 1`) or flow collections (`[a, b]: pair`)
//! - A nested block must be indented deeper than its key
//! - A repeated key keeps its first position and its last value
//! - `<<: *base` merges the entries of an aliased mapping that are not already set
//! - A plain value containing `: ` is rejected; quote it instead
//!
//! ## Sequences
//!
//! ```text
//! - apple
//! - - nested
//!   - list
//! - name: compact
//!   size: 3
//! ```
//!
//! **Rules**:
//! - Items start with `- ` (or a lone `-` followed by an indented block)
//! - A sequence under a key may sit at the key's own indentation only when the
//!   key has no other content: `key:\n- item` is rejected, `key:\n  - item` is not
//! - `- key: value` opens a mapping at the column after the dash
//!
//! # Flow Collections
//!
//! ```text
//! ports: [80, 443]
//! limits: { cpu: 2, memory: 512M }
//! pairs: [a: 1, b: 2]
//! ```
//!
//! Flow collections nest freely and may span several lines when indented deeper
//! than their key. `[a: 1]` holds a single-pair mapping.
//!
//! # Scalars
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Null | `null`, `~`, empty | `value: ~` |
//! | Boolean | `true`, `false` (any case) | `active: TRUE` |
//! | Integer | `[-+]?[0-9]+`, `0x` hex | `mask: 0xFF` |
//! | Float | decimal or exponent, `.inf`, `-.inf`, `.nan` | `ratio: 1.5e3` |
//! | String | plain, `'single'`, `"double"` | `name: 'it''s'` |
//!
//! Integers beyond the `i64` range read back as floats. Leading zeros are
//! decimal: `010` is ten. Timestamps stay strings;
//! [`Value::as_timestamp`](crate::Value::as_timestamp) converts them on demand.
//!
//! ## Quoting
//!
//! - Single quotes escape only the quote itself (`''`)
//! - Double quotes support `\0 \a \b \t \n \v \f \r \e \" \/ \\ \N \_ \L \P`,
//!   `\xXX`, `\uXXXX` and `\UXXXXXXXX`
//! - Plain scalars spanning several lines are folded with single spaces; a
//!   blank line becomes a newline
//!
//! The [`escape`](crate::escape) module decides which quoting the dumper uses.
//!
//! ## Block Scalars
//!
//! ```text
//! literal: |
//!   kept
//!   as is
//! folded: >-
//!   joined into
//!   one line
//! ```
//!
//! | Indicator | Meaning |
//! |-----------|---------|
//! | `\|` | keep line breaks |
//! | `>` | fold lines into spaces, blank lines into newlines |
//! | `-` | strip the final line breaks |
//! | `+` | keep all final line breaks |
//! | (none) | keep exactly one final line break |
//! | `1`-`9` | content indentation relative to the parent |
//!
//! # Comments
//!
//! `#` starts a comment at the start of a line or after whitespace, outside
//! quotes. Comments are dropped everywhere except inside block scalars, and are
//! not written back by the dumper.
//!
//! # Anchors, Aliases and Tags
//!
//! ```text
//! base: &defaults { retries: 3 }
//! job:
//!   <<: *defaults
//!   name: nightly
//! when: !!float 3
//! color: !rgb ff0000
//! ```
//!
//! - `&name` records the value that follows; `*name` copies it
//! - An alias to an unknown anchor fails with
//!   [`ErrorKind::UndefinedAlias`](crate::ErrorKind::UndefinedAlias)
//! - `!!str`, `!!int`, `!!float`, `!!bool` and `!!null` convert their payload;
//!   `!!seq`, `!!map`, `!!set` and `!!omap` are accepted on collections
//! - Any other tag goes to the [`TagCodec`](crate::TagCodec)
//!
//! # Documents
//!
//! ```text
//! %YAML 1.2
//! ---
//! key: value
//! ...
//! ignored: after the end marker
//! ```
//!
//! A second `---` fails with
//! [`ErrorKind::MultipleDocuments`](crate::ErrorKind::MultipleDocuments).
//!
//! # Limitations
//!
//! - **Tabs**: never allowed in indentation
//! - **Multi-line flow collections**: the closing bracket must still be indented
//!   deeper than the key
//! - **Complex keys**: the `? key` form is not supported
//! - **Streams**: one document per input

// This module contains only documentation; no implementation code
