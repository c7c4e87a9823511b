// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=nestbox_literal --heading-base-level=0

//! Nestbox Literal: a safe literal parser and validator for layout input.
//!
//! Free-form input text becomes a validated
//! [`Value`](nestbox_value::Value) tree in three stages, all synchronous and
//! side-effect free (the text is untrusted and is never evaluated as code):
//!
//! 1. [`parse_literal`]: a grammar over a *superset* of the accepted value
//!    space. Lists, numbers (including exponents and the bare `.5`/`5.`
//!    forms), single- or double-quoted strings with escapes, the keywords
//!    `null`/`undefined`/`true`/`false`/`NaN`/`Infinity`, and object
//!    literals all parse here, so that well-formed-but-unsupported input is
//!    rejected by name rather than as a parse failure. Nesting is limited to
//!    [`MAX_DEPTH`] levels, which keeps adversarially deep input from
//!    exhausting the stack anywhere downstream.
//! 2. Shape check: the top-level literal must be a non-empty list.
//! 3. Value check and lowering: depth-first over the tree, in element order,
//!    only finite numbers, text, `null`/`undefined`, and nested lists may
//!    remain; the first offender rejects the input. Survivors lower to
//!    [`Value`](nestbox_value::Value) with structure and order unchanged.
//!
//! Failures are the three-kind taxonomy of [`ValidateError`]:
//! [`ParseError`] (with 1-based line and column), [`ShapeError`], and
//! [`ValueError`].
//!
//! # Example
//!
//! ```rust
//! use nestbox_literal::{validate, ShapeError, ValidateError};
//!
//! let tree = validate("['Hello', [1, null], 2.5]").unwrap();
//! assert_eq!(tree.to_string(), r#"["Hello", [1, null], 2.5]"#);
//!
//! // The taxonomy distinguishes garbage, wrong shape, and unsupported values.
//! assert!(matches!(
//!     validate("not-an-array-literal"),
//!     Err(ValidateError::Parse(_))
//! ));
//! assert!(matches!(
//!     validate("[]"),
//!     Err(ValidateError::Shape(ShapeError::Empty))
//! ));
//! assert!(matches!(validate("[{}]"), Err(ValidateError::Value(_))));
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: forwards `std` to dependencies. The crate itself
//!   never needs it.
//! - `tracing`: emits a debug span per [`validate`] call.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod literal;
mod parse;
mod validate;

pub use error::{ParseError, ShapeError, ValidateError, ValueError};
pub use literal::{Literal, LiteralKind};
pub use parse::{MAX_DEPTH, parse_literal};
pub use validate::validate;
