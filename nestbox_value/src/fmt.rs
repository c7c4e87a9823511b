// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical text forms for values.
//!
//! The compact form is what `Display` renders: a single-line literal with
//! double-quoted strings, `null` for absent markers, and shortest-form
//! numbers. [`Value::pretty`] renders the same literal with two-space
//! indentation, one element per line. Both forms parse back to a deep-equal
//! value.

use alloc::string::String;
use core::fmt::{self, Display, Formatter, Write};

use crate::Value;

const INDENT: &str = "  ";

/// Formats a number the way canonical literals and labels render it.
///
/// Integral values drop the fractional part (`3.0` renders as `3`) and
/// negative zero normalizes to `0`.
#[must_use]
pub fn number_text(n: f64) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_number(&mut out, n);
    out
}

fn write_number<W: Write>(w: &mut W, n: f64) -> fmt::Result {
    if n == 0.0 {
        // Also covers -0.0, which would otherwise keep its sign.
        return w.write_char('0');
    }
    write!(w, "{n}")
}

fn write_text<W: Write>(w: &mut W, text: &str) -> fmt::Result {
    w.write_char('"')?;
    for c in text.chars() {
        match c {
            '"' => w.write_str("\\\"")?,
            '\\' => w.write_str("\\\\")?,
            '\n' => w.write_str("\\n")?,
            '\t' => w.write_str("\\t")?,
            '\r' => w.write_str("\\r")?,
            c if (c as u32) < 0x20 => write!(w, "\\u{:04x}", c as u32)?,
            c => w.write_char(c)?,
        }
    }
    w.write_char('"')
}

fn write_pretty<W: Write>(w: &mut W, value: &Value, level: usize) -> fmt::Result {
    match value {
        Value::List(items) if !items.is_empty() => {
            w.write_str("[\n")?;
            for (i, item) in items.iter().enumerate() {
                for _ in 0..=level {
                    w.write_str(INDENT)?;
                }
                write_pretty(w, item, level + 1)?;
                if i + 1 < items.len() {
                    w.write_char(',')?;
                }
                w.write_char('\n')?;
            }
            for _ in 0..level {
                w.write_str(INDENT)?;
            }
            w.write_char(']')
        }
        other => write!(w, "{other}"),
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write_number(f, *n),
            Self::Text(text) => write_text(f, text),
            Self::Absent => f.write_str("null"),
            Self::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    Display::fmt(item, f)?;
                }
                f.write_char(']')
            }
        }
    }
}

impl Value {
    /// Renders the canonical literal with two-space indentation.
    ///
    /// Empty lists stay on one line; everything else gets one element per
    /// line, matching the pretty form editors display after validation.
    #[must_use]
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_pretty(&mut out, self, 0);
        out
    }
}
