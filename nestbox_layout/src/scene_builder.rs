// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A retained controller over the pure layout computation.

use nestbox_value::Value;

use crate::engine::compute_scene;
use crate::palette::{Palette, WheelPalette};
use crate::types::{DEFAULT_ROOT_EDGE, ROOT_EDGE_RANGE, Scene};

/// Owns the layout controls and rebuilds scenes on demand.
///
/// The builder pairs the current root edge with a palette and re-runs
/// [`compute_scene`] on every [`build`](Self::build) call. Assigned edges
/// are clamped into [`ROOT_EDGE_RANGE`], matching the control surface a
/// host exposes. The data is borrowed per call, so one builder serves
/// changing inputs and changing sizes alike.
///
/// # Example
///
/// ```
/// use nestbox_layout::SceneBuilder;
/// use nestbox_value::Value;
///
/// let items = [Value::number(1.0), Value::number(2.0)];
/// let mut builder = SceneBuilder::new();
/// builder.set_root_edge(20.0);
/// let scene = builder.build(&items);
/// assert_eq!(scene.boxes[1].position.x, 22.0);
/// ```
#[derive(Clone, Debug)]
pub struct SceneBuilder<P = WheelPalette> {
    root_edge: f64,
    palette: P,
}

impl SceneBuilder<WheelPalette> {
    /// Creates a builder with the default edge and the wheel palette.
    #[must_use]
    pub fn new() -> Self {
        Self::with_palette(WheelPalette::new())
    }
}

impl Default for SceneBuilder<WheelPalette> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Palette> SceneBuilder<P> {
    /// Creates a builder with the default edge over `palette`.
    pub fn with_palette(palette: P) -> Self {
        Self {
            root_edge: DEFAULT_ROOT_EDGE,
            palette,
        }
    }

    /// The current root edge.
    #[must_use]
    pub fn root_edge(&self) -> f64 {
        self.root_edge
    }

    /// Sets the root edge, clamping into [`ROOT_EDGE_RANGE`].
    ///
    /// A NaN edge is ignored and the current value kept.
    pub fn set_root_edge(&mut self, edge: f64) {
        if edge.is_nan() {
            return;
        }
        self.root_edge = edge.clamp(*ROOT_EDGE_RANGE.start(), *ROOT_EDGE_RANGE.end());
    }

    /// The palette in use.
    pub fn palette_mut(&mut self) -> &mut P {
        &mut self.palette
    }

    /// Computes a fresh scene for `items` at the current root edge.
    pub fn build(&mut self, items: &[Value]) -> Scene {
        compute_scene(items, self.root_edge, &mut self.palette)
    }
}
