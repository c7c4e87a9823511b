// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The validation error taxonomy.
//!
//! Every rejection is one of three kinds, detected in stage order: the text
//! does not parse ([`ParseError`]), it parses but is not a non-empty list
//! ([`ShapeError`]), or the list holds a value kind layout cannot represent
//! ([`ValueError`]). Nothing here is retried; the caller corrects the input.

use alloc::string::String;
use thiserror::Error;

use crate::LiteralKind;

/// Failure to parse input text as a literal, with the failure position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse literal at line {line}, column {column}: {message}")]
pub struct ParseError {
    /// 1-based line of the failure.
    pub line: usize,
    /// 1-based column of the failure, counted in characters.
    pub column: usize,
    /// What the parser expected or rejected there.
    pub message: String,
}

/// The parsed literal has the wrong overall shape for layout input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The top-level literal is not a list.
    #[error("top-level value must be a list")]
    NotAList,
    /// The top-level list has no elements.
    #[error("top-level list must not be empty")]
    Empty,
}

/// A well-formed literal contains a value kind layout cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("lists may only hold numbers, text, null, or undefined; found {kind}")]
pub struct ValueError {
    /// The first unsupported kind, depth-first in element order.
    pub kind: LiteralKind,
}

/// Any way [`validate`](crate::validate) can reject input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// The text is not a parsable literal.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The literal parsed but is not a non-empty list.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// The list holds an unsupported value kind.
    #[error(transparent)]
    Value(#[from] ValueError),
}

#[cfg(test)]
mod tests {
    use super::{ParseError, ShapeError, ValidateError, ValueError};
    use crate::LiteralKind;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_failure() {
        let parse: ValidateError = ParseError {
            line: 2,
            column: 7,
            message: "expected a literal".into(),
        }
        .into();
        assert_eq!(
            parse.to_string(),
            "cannot parse literal at line 2, column 7: expected a literal"
        );

        let shape: ValidateError = ShapeError::NotAList.into();
        assert_eq!(shape.to_string(), "top-level value must be a list");

        let value: ValidateError = ValueError {
            kind: LiteralKind::Object,
        }
        .into();
        assert_eq!(
            value.to_string(),
            "lists may only hold numbers, text, null, or undefined; found an object"
        );
    }
}
