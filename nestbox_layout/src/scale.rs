// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The size scaling rule applied at each nesting level.

#[cfg(not(feature = "std"))]
use crate::util::FloatExt as _;

/// Scales `value` by `ratio` and truncates the result to one decimal place.
///
/// The result is `floor(value * 10 * ratio) / 10`, so scaled sizes always
/// round down. Deterministic, with no error conditions.
///
/// # Example
///
/// ```
/// use nestbox_layout::scale;
///
/// assert_eq!(scale(4.5, 0.9), 4.0);
/// assert_eq!(scale(5.0, 0.9), 4.5);
/// ```
#[must_use]
pub fn scale(value: f64, ratio: f64) -> f64 {
    (value * 10.0 * ratio).floor() / 10.0
}
