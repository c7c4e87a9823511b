// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene output types: the box, label, and light specifications a
//! rendering backend consumes.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::RangeInclusive;

use bitflags::bitflags;
use glam::DVec3;

use crate::color::Rgb;
#[cfg(not(feature = "std"))]
use crate::util::FloatExt as _;

/// Default edge length of a top-level box.
pub const DEFAULT_ROOT_EDGE: f64 = 10.0;

/// Root edge lengths the [`SceneBuilder`] control surface accepts.
///
/// [`SceneBuilder`]: crate::SceneBuilder
pub const ROOT_EDGE_RANGE: RangeInclusive<f64> = 1.0..=150.0;

/// Ink color of emitted labels.
pub const LABEL_INK: Rgb = Rgb::from_hex(0x20_20_20);

/// Extrusion thickness of emitted labels.
pub const LABEL_THICKNESS: f64 = 0.05;

bitflags! {
    /// Material flags a backend applies when drawing a box.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BoxFlags: u8 {
        /// Draw the box translucently, honoring [`BoxSpec::opacity`].
        const TRANSPARENT = 1 << 0;
        /// Draw back faces as well as front faces.
        const DOUBLE_SIDED = 1 << 1;
        /// Write the depth buffer when drawing.
        const DEPTH_WRITE = 1 << 2;
    }
}

/// One axis-aligned cube in the layout.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxSpec {
    /// Position of the box along the layout axis.
    pub position: DVec3,
    /// Edge length; width, height, and depth are all this value.
    pub edge: f64,
    /// 1-based nesting depth of the group this box belongs to.
    pub depth: usize,
    /// Shared sibling color chosen by the palette.
    pub color: Rgb,
    /// Translucency in `[0, 1]`, increasing with depth.
    pub opacity: f64,
    /// Material flags.
    pub flags: BoxFlags,
}

/// Text drawn at a scalar element's slot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelSpec {
    /// The text to draw.
    pub text: String,
    /// Position, identical to the slot box position.
    pub position: DVec3,
    /// Ink color.
    pub color: Rgb,
    /// Size of one character, chosen so the text spans the box edge.
    pub char_size: f64,
    /// Extrusion thickness.
    pub thickness: f64,
}

/// A directional light illuminating the strip.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightSpec {
    /// Position of the light.
    pub position: DVec3,
    /// Light color.
    pub color: Rgb,
    /// Intensity, `1.0` for the emitted default.
    pub intensity: f64,
}

/// A complete computed layout: ordered specification lists plus the overall
/// extent of the top-level strip.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    /// Boxes in emission order.
    pub boxes: Vec<BoxSpec>,
    /// Labels in emission order.
    pub labels: Vec<LabelSpec>,
    /// Lights along the strip.
    pub lights: Vec<LightSpec>,
    /// Top-level element count times the root edge.
    pub extent: f64,
}

impl Scene {
    /// The x translation a backend applies to center the strip.
    #[must_use]
    pub fn center_shift(&self) -> f64 {
        -(self.extent / 2.0).floor()
    }
}

#[cfg(test)]
mod tests {
    use super::{BoxFlags, Scene};
    use alloc::vec::Vec;

    fn scene_with_extent(extent: f64) -> Scene {
        Scene {
            boxes: Vec::new(),
            labels: Vec::new(),
            lights: Vec::new(),
            extent,
        }
    }

    #[test]
    fn center_shift_floors_the_half_extent() {
        assert_eq!(scene_with_extent(20.0).center_shift(), -10.0);
        assert_eq!(scene_with_extent(33.0).center_shift(), -16.0);
        assert_eq!(scene_with_extent(0.0).center_shift(), 0.0);
    }

    #[test]
    fn flags_combine_and_query() {
        let flags = BoxFlags::TRANSPARENT | BoxFlags::DOUBLE_SIDED;
        assert!(flags.contains(BoxFlags::TRANSPARENT));
        assert!(!flags.contains(BoxFlags::DEPTH_WRITE));
    }
}
