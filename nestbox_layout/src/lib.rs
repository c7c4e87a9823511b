// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=nestbox_layout --heading-base-level=0

//! Nestbox Layout: deterministic spatial layout for nested sequences.
//!
//! This crate turns a validated nested sequence of scalars into a renderer-agnostic
//! scene description: one cube per element, one implicit grouping cube per nested
//! list, labels on scalar elements, and strip lights over the whole run. Nesting
//! depth reads straight off the output, deeper groups shrink and grow more
//! translucent.
//!
//! The core pieces are:
//!
//! - [`scale`]: the shrink rule applied at each nesting level, truncating sizes
//!   to one decimal place.
//! - [`compute_scene`]: the pure engine mapping a slice of
//!   [`Value`](nestbox_value::Value)s and a root edge length to ordered
//!   [`BoxSpec`]/[`LabelSpec`]/[`LightSpec`] lists in a [`Scene`].
//! - [`Palette`]: the injectable color seam, with [`WheelPalette`] as the
//!   deterministic default, plus [`SolidPalette`], the caching [`MemoPalette`],
//!   and a `rand`-gated `RngPalette`.
//! - [`SceneBuilder`]: a small controller owning the current root edge (clamped
//!   into [`ROOT_EDGE_RANGE`]) and the palette, rebuilding a fresh [`Scene`] on
//!   every call.
//!
//! This crate deliberately does **not** render anything. A host backend walks
//! the returned lists and owns meshes, materials, fonts, and the camera.
//!
//! ## Minimal example
//!
//! ```rust
//! use nestbox_layout::{DEFAULT_ROOT_EDGE, SceneBuilder};
//! use nestbox_value::Value;
//!
//! let items = [
//!     Value::text("Hello"),
//!     Value::list([Value::number(1.0), Value::Absent]),
//! ];
//! let mut builder = SceneBuilder::new();
//! let scene = builder.build(&items);
//!
//! // One cube per top-level element plus the two nested ones.
//! assert_eq!(scene.boxes.len(), 4);
//! // Scalars are labeled; the absent element and the list are not.
//! assert_eq!(scene.labels.len(), 2);
//! assert_eq!(scene.extent, 2.0 * DEFAULT_ROOT_EDGE);
//! ```
//!
//! Positions are [`glam::DVec3`] values along the x axis;
//! [`Scene::center_shift`] gives the translation that centers the strip.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("nestbox_layout requires either the `std` or `libm` feature");

extern crate alloc;

mod color;
mod engine;
mod palette;
mod scale;
mod scene_builder;
mod types;
#[cfg(not(feature = "std"))]
mod util;

pub use color::Rgb;
pub use engine::compute_scene;
pub use palette::{GroupInfo, MemoPalette, Palette, SolidPalette, WheelPalette};
#[cfg(feature = "rand")]
pub use palette::RngPalette;
pub use scale::scale;
pub use scene_builder::SceneBuilder;
pub use types::{
    BoxFlags, BoxSpec, DEFAULT_ROOT_EDGE, LABEL_INK, LABEL_THICKNESS, LabelSpec, LightSpec,
    ROOT_EDGE_RANGE, Scene,
};
