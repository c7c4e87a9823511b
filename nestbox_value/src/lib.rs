// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=nestbox_value --heading-base-level=0

//! Nestbox Value: the validated nested-sequence data model.
//!
//! A [`Value`] is one element of a finite, acyclic, ordered tree of scalars:
//!
//! - [`Value::Number`]: a finite, non-NaN number.
//! - [`Value::Text`]: a text string.
//! - [`Value::Absent`]: the absent marker (`null` or `undefined` in input text).
//! - [`Value::List`]: an ordered sequence of further values, nested to any depth.
//!
//! Values are immutable once validated and carry no identity beyond their
//! position in the tree. This crate owns their canonical text forms:
//!
//! - [`Display`](core::fmt::Display) renders the compact literal, with
//!   double-quoted strings and `null` for absent markers.
//! - [`Value::pretty`] renders the same literal with two-space indentation.
//! - [`number_text`] is the shared number formatting (`3.0` renders as `3`),
//!   reused wherever a number becomes user-visible text.
//!
//! Parsing free-form text *into* a [`Value`] lives in the companion literal
//! crate; producing a spatial layout *from* one lives in the layout crate.
//!
//! # Example
//!
//! ```rust
//! use nestbox_value::Value;
//!
//! let tree = Value::list([
//!     Value::text("Hello"),
//!     Value::list([Value::number(1.0), Value::Absent]),
//! ]);
//!
//! assert_eq!(tree.to_string(), r#"["Hello", [1, null]]"#);
//! assert!(tree.as_list().is_some_and(|items| items.len() == 2));
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: forwards `std` to optional dependencies. The crate
//!   itself never needs it.
//! - `serde`: `Serialize`/`Deserialize` derives on [`Value`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod fmt;
mod value;

pub use fmt::number_text;
pub use value::Value;
