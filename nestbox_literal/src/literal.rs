// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The parsed literal tree, before value checking.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

/// A parsed literal.
///
/// This is a superset of what layout accepts: booleans, object literals, and
/// non-finite numerics parse into this tree so the value check can reject
/// them by name instead of reporting a parse failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A numeric literal. Non-finite values (`NaN`, `Infinity`, overflowed
    /// exponents) live here too until the value check.
    Number(f64),
    /// A single- or double-quoted string literal, unescaped.
    Text(String),
    /// The `null` keyword.
    Null,
    /// The `undefined` keyword.
    Undefined,
    /// A `true` or `false` keyword.
    Bool(bool),
    /// A `[ ... ]` list literal.
    List(Vec<Literal>),
    /// A `{ ... }` object literal, keys in source order.
    Object(Vec<(String, Literal)>),
}

impl Literal {
    /// The kind tag diagnostics use to name this literal.
    #[must_use]
    pub fn kind(&self) -> LiteralKind {
        match self {
            Self::Number(n) if !n.is_finite() => LiteralKind::NonFinite,
            Self::Number(_) => LiteralKind::Number,
            Self::Text(_) => LiteralKind::Text,
            Self::Null => LiteralKind::Null,
            Self::Undefined => LiteralKind::Undefined,
            Self::Bool(_) => LiteralKind::Bool,
            Self::List(_) => LiteralKind::List,
            Self::Object(_) => LiteralKind::Object,
        }
    }
}

/// Kinds of literal, as named by diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// A finite number.
    Number,
    /// `NaN`, `Infinity`, or another non-finite numeric.
    NonFinite,
    /// A string.
    Text,
    /// The `null` keyword.
    Null,
    /// The `undefined` keyword.
    Undefined,
    /// A boolean.
    Bool,
    /// A list.
    List,
    /// An object.
    Object,
}

impl Display for LiteralKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "a number",
            Self::NonFinite => "a non-finite number",
            Self::Text => "text",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Bool => "a boolean",
            Self::List => "a list",
            Self::Object => "an object",
        };
        f.write_str(name)
    }
}
