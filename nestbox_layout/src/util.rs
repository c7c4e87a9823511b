// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float functions for builds without `std`.

/// `libm` stand-ins for the inherent float methods the layout math needs.
///
/// Import it as `use crate::util::FloatExt as _;` behind
/// `#[cfg(not(feature = "std"))]`; with `std` enabled the inherent methods
/// are used directly and neither this trait nor `libm` is compiled in.
pub(crate) trait FloatExt: Sized {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
}

impl FloatExt for f64 {
    #[inline]
    fn floor(self) -> Self {
        libm::floor(self)
    }

    #[inline]
    fn ceil(self) -> Self {
        libm::ceil(self)
    }
}
