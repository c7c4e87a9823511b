// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color selection for sibling groups.
//!
//! The engine asks its palette for one color per group frame; every box in
//! that frame shares it. Palettes are injectable, so deterministic tests,
//! memoized re-renders, and random presentation colors all go through the
//! same seam.

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::color::Rgb;

/// Everything a palette may key its choice on for one group frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupInfo {
    /// 1-based nesting depth of the group.
    pub depth: usize,
    /// Index of this frame in emission order, counted from zero.
    pub ordinal: usize,
    /// Number of elements in the group.
    pub len: usize,
}

/// Supplies the shared sibling color for each group frame.
pub trait Palette {
    /// Returns the color for the group described by `group`.
    fn color_for(&mut self, group: GroupInfo) -> Rgb;
}

impl<F: FnMut(GroupInfo) -> Rgb> Palette for F {
    fn color_for(&mut self, group: GroupInfo) -> Rgb {
        self(group)
    }
}

/// A palette that always answers with one fixed color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SolidPalette(pub Rgb);

impl Palette for SolidPalette {
    fn color_for(&mut self, _group: GroupInfo) -> Rgb {
        self.0
    }
}

/// The deterministic default palette.
///
/// Steps the hue wheel by the golden angle per frame ordinal at fixed
/// saturation and brightness, so consecutive groups get well-separated
/// colors and the same input always colors the same way.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelPalette {
    saturation: f64,
    value: f64,
}

const GOLDEN_ANGLE: f64 = 137.50776405003785;

impl WheelPalette {
    /// Creates the default wheel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            saturation: 0.6,
            value: 0.95,
        }
    }
}

impl Default for WheelPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette for WheelPalette {
    fn color_for(&mut self, group: GroupInfo) -> Rgb {
        let hue = group.ordinal as f64 * GOLDEN_ANGLE;
        hsv_to_rgb(hue, self.saturation, self.value)
    }
}

/// Wraps a palette and caches its answers by `(depth, ordinal)`, so
/// re-rendering the same data repeats the same colors even over a
/// non-deterministic inner palette.
#[derive(Clone, Debug)]
pub struct MemoPalette<P> {
    inner: P,
    cache: HashMap<(usize, usize), Rgb>,
}

impl<P> MemoPalette<P> {
    /// Wraps `inner` with an empty cache.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: HashMap::new(),
        }
    }

    /// Drops all cached colors, e.g. when switching datasets.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl<P: Palette> Palette for MemoPalette<P> {
    fn color_for(&mut self, group: GroupInfo) -> Rgb {
        match self.cache.entry((group.depth, group.ordinal)) {
            Entry::Occupied(slot) => *slot.get(),
            Entry::Vacant(slot) => *slot.insert(self.inner.color_for(group)),
        }
    }
}

/// A palette drawing a uniform random color per frame.
#[cfg(feature = "rand")]
#[derive(Clone, Debug)]
pub struct RngPalette<R> {
    rng: R,
}

#[cfg(feature = "rand")]
impl<R: rand::RngCore> RngPalette<R> {
    /// Creates a palette over `rng`.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

#[cfg(feature = "rand")]
impl<R: rand::RngCore> Palette for RngPalette<R> {
    fn color_for(&mut self, _group: GroupInfo) -> Rgb {
        Rgb::from_hex(self.rng.next_u32() & 0xFF_FFFF)
    }
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    // Hue is never negative here, so `%` suffices and stays core-only.
    let h = (hue % 360.0) / 60.0;
    // Truncation is floor here, `h` is non-negative.
    let sector = h as u32;
    let f = h - sector as f64;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));
    let (r, g, b) = match sector % 6 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };
    Rgb::new(channel(r), channel(g), channel(b))
}

fn channel(unit: f64) -> u8 {
    (unit * 255.0 + 0.5) as u8
}
