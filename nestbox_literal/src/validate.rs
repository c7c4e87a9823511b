// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation: parse the text, then check shape and element kinds.

use alloc::vec::Vec;

use nestbox_value::Value;

use crate::{Literal, ShapeError, ValidateError, ValueError, parse_literal};

/// Parses `text` and checks that it is a non-empty list holding only
/// numbers, text, `null`, and `undefined`, at any nesting depth.
///
/// `null` and `undefined` both lower to [`Value::Absent`]. Checking is
/// depth-first and left to right, so the first offending element decides
/// the error.
pub fn validate(text: &str) -> Result<Value, ValidateError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("validate", bytes = text.len()).entered();

    let result = check(text);
    #[cfg(feature = "tracing")]
    match &result {
        Ok(value) => tracing::debug!(items = value.as_list().map_or(0, <[_]>::len), "accepted"),
        Err(err) => tracing::debug!(%err, "rejected"),
    }
    result
}

fn check(text: &str) -> Result<Value, ValidateError> {
    let Literal::List(items) = parse_literal(text)? else {
        return Err(ShapeError::NotAList.into());
    };
    if items.is_empty() {
        return Err(ShapeError::Empty.into());
    }
    Ok(Value::List(lower_items(items)?))
}

fn lower_items(items: Vec<Literal>) -> Result<Vec<Value>, ValueError> {
    items.into_iter().map(lower).collect()
}

// Recursion here is bounded by the parser's nesting limit.
fn lower(item: Literal) -> Result<Value, ValueError> {
    match item {
        Literal::Number(n) if n.is_finite() => Ok(Value::Number(n)),
        Literal::Text(text) => Ok(Value::Text(text)),
        Literal::Null | Literal::Undefined => Ok(Value::Absent),
        Literal::List(items) => Ok(Value::List(lower_items(items)?)),
        other => Err(ValueError { kind: other.kind() }),
    }
}
