// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout engine: nested sequences in, box/label/light specs out.

use alloc::string::String;
use alloc::vec::Vec;

use glam::DVec3;
use smallvec::SmallVec;

use nestbox_value::{Value, number_text};

use crate::color::Rgb;
use crate::palette::{GroupInfo, Palette};
use crate::scale::scale;
use crate::types::{BoxFlags, BoxSpec, LABEL_INK, LABEL_THICKNESS, LabelSpec, LightSpec, Scene};
#[cfg(not(feature = "std"))]
use crate::util::FloatExt as _;

/// Shrink ratio for a nested group with a single element.
const SINGLETON_RATIO: f64 = 0.8;
/// Shrink ratio for a nested group with two or more elements.
const GROUP_RATIO: f64 = 0.9;

/// Flags on every emitted box: translucent, both faces drawn, depth writes
/// off.
const BOX_FLAGS: BoxFlags = BoxFlags::TRANSPARENT.union(BoxFlags::DOUBLE_SIDED);

/// One group of siblings waiting to be laid out.
struct Frame<'a> {
    items: &'a [Value],
    edge: f64,
    origin: f64,
    depth: usize,
}

/// Computes the spatial layout of `items` as a fresh [`Scene`].
///
/// Starting from the top-level slice at depth 1, each group lays its
/// elements along the x axis as `edge`-sized cubes separated by a gap of
/// one tenth of the edge. A nested list keeps its slot cube and also
/// becomes a child group: scaled by the 0.8/0.9 shrink rule, shifted into
/// the slot, one depth level down. Scalar elements label their cube; absent
/// elements stay blank. The palette supplies one color per group, and white
/// strip lights are spaced over the top-level extent.
///
/// The walk is iterative with an explicit stack, so input depth cannot
/// overflow the call stack. The scene is rebuilt from scratch on every
/// call; nothing is retained between invocations.
///
/// # Example
///
/// ```
/// use nestbox_layout::{Rgb, SolidPalette, compute_scene};
/// use nestbox_value::Value;
///
/// let items = [Value::text("Hello"), Value::text("World!")];
/// let mut palette = SolidPalette(Rgb::from_hex(0x44_88_CC));
/// let scene = compute_scene(&items, 10.0, &mut palette);
///
/// assert_eq!(scene.boxes.len(), 2);
/// assert_eq!(scene.boxes[1].position.x, 11.0);
/// assert_eq!(scene.labels[0].text, "Hello");
/// ```
pub fn compute_scene<P: Palette + ?Sized>(
    items: &[Value],
    root_edge: f64,
    palette: &mut P,
) -> Scene {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("compute_scene", items = items.len(), root_edge).entered();

    debug_assert!(
        root_edge.is_finite() && root_edge > 0.0,
        "root edge must be positive and finite"
    );

    let mut scene = Scene {
        boxes: Vec::new(),
        labels: Vec::new(),
        lights: Vec::new(),
        extent: items.len() as f64 * root_edge,
    };
    let mut stack: SmallVec<[Frame<'_>; 8]> = SmallVec::new();
    if !items.is_empty() {
        stack.push(Frame {
            items,
            edge: root_edge,
            origin: 0.0,
            depth: 1,
        });
    }

    // Frames on the stack are never empty, so every pop colors and emits.
    let mut ordinal = 0;
    while let Some(frame) = stack.pop() {
        let color = palette.color_for(GroupInfo {
            depth: frame.depth,
            ordinal,
            len: frame.items.len(),
        });
        ordinal += 1;
        let gap = frame.edge / 10.0;
        let opacity = opacity_for_depth(frame.depth);

        // Sibling pass: one slot cube per element, labels on scalars.
        for (i, item) in frame.items.iter().enumerate() {
            let position = DVec3::new(frame.origin + i as f64 * (frame.edge + gap), 0.0, 0.0);
            scene.boxes.push(BoxSpec {
                position,
                edge: frame.edge,
                depth: frame.depth,
                color,
                opacity,
                flags: BOX_FLAGS,
            });
            if let Some(text) = label_text(item) {
                let char_size = label_char_size(&text, frame.edge);
                scene.labels.push(LabelSpec {
                    text,
                    position,
                    color: LABEL_INK,
                    char_size,
                    thickness: LABEL_THICKNESS,
                });
            }
        }

        // Child pass, reversed so nested groups pop in element order.
        for (i, item) in frame.items.iter().enumerate().rev() {
            let Some(children) = item.as_list() else {
                continue;
            };
            if children.is_empty() {
                continue;
            }
            let len = children.len() as f64;
            let ratio = if children.len() == 1 {
                SINGLETON_RATIO
            } else {
                GROUP_RATIO
            };
            stack.push(Frame {
                items: children,
                edge: scale(frame.edge / len, ratio),
                origin: frame.origin + i as f64 * (frame.edge + gap) + gap / len,
                depth: frame.depth + 1,
            });
        }
    }

    push_lights(&mut scene, items.len(), root_edge);

    debug_assert!(
        scene.labels.len() <= scene.boxes.len(),
        "every label shares its slot with a box"
    );
    #[cfg(feature = "tracing")]
    tracing::debug!(
        boxes = scene.boxes.len(),
        labels = scene.labels.len(),
        lights = scene.lights.len(),
        "computed scene"
    );
    scene
}

/// Opacity for a group at `depth`: 0.15 at the root level, then stepping
/// by 0.05 per level, clamped to 1.
fn opacity_for_depth(depth: usize) -> f64 {
    if depth <= 1 {
        0.15
    } else {
        (0.15 + depth as f64 * 0.05).min(1.0)
    }
}

/// The label text for a scalar element; lists and absent values have none.
fn label_text(item: &Value) -> Option<String> {
    match item {
        Value::Number(n) => Some(number_text(*n)),
        Value::Text(text) => Some(text.clone()),
        Value::Absent | Value::List(_) => None,
    }
}

/// Character size spanning the box edge: half the edge for labels of at
/// most one character, otherwise the edge divided over the count.
fn label_char_size(text: &str, edge: f64) -> f64 {
    let chars = text.chars().count();
    if chars <= 1 {
        edge / 2.0
    } else {
        edge / chars as f64
    }
}

/// Emits white strip lights spaced every `4.5 * root_edge` over the
/// top-level extent.
fn push_lights(scene: &mut Scene, count: usize, root_edge: f64) {
    if count == 0 {
        return;
    }
    let spacing = root_edge * 4.5;
    let lights = (scene.extent / spacing).ceil() as usize;
    for i in 0..lights {
        scene.lights.push(LightSpec {
            position: DVec3::new(i as f64 * spacing, root_edge, (root_edge / 2.0).floor()),
            color: Rgb::WHITE,
            intensity: 1.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{compute_scene, label_char_size, label_text, opacity_for_depth};
    use crate::color::Rgb;
    use crate::palette::{GroupInfo, SolidPalette};
    use alloc::vec::Vec;
    use nestbox_value::Value;

    fn solid() -> SolidPalette {
        SolidPalette(Rgb::new(10, 20, 30))
    }

    #[test]
    fn opacity_starts_at_the_floor_and_steps_per_depth() {
        assert_eq!(opacity_for_depth(1), 0.15);
        assert_eq!(opacity_for_depth(2), 0.25);
        assert!(opacity_for_depth(3) > opacity_for_depth(2));
        assert_eq!(opacity_for_depth(40), 1.0);
    }

    #[test]
    fn label_text_covers_scalars_only() {
        assert_eq!(label_text(&Value::number(3.0)).as_deref(), Some("3"));
        assert_eq!(label_text(&Value::number(2.5)).as_deref(), Some("2.5"));
        assert_eq!(label_text(&Value::text("hi")).as_deref(), Some("hi"));
        assert_eq!(label_text(&Value::Absent), None);
        assert_eq!(label_text(&Value::list([])), None);
    }

    #[test]
    fn char_size_spans_the_edge() {
        assert_eq!(label_char_size("", 10.0), 5.0);
        assert_eq!(label_char_size("A", 10.0), 5.0);
        assert_eq!(label_char_size("World!", 10.0), 10.0 / 6.0);
        assert_eq!(label_char_size("☃☃", 10.0), 5.0);
    }

    #[test]
    fn lays_out_a_flat_pair() {
        let items = [Value::text("Hello"), Value::text("World!")];
        let scene = compute_scene(&items, 10.0, &mut solid());

        assert_eq!(scene.boxes.len(), 2);
        assert_eq!(scene.boxes[0].position.x, 0.0);
        assert_eq!(scene.boxes[1].position.x, 11.0);
        assert!(scene.boxes.iter().all(|b| b.edge == 10.0));
        assert!(scene.boxes.iter().all(|b| b.opacity == 0.15));
        assert_eq!(scene.labels.len(), 2);
        assert_eq!(scene.extent, 20.0);
        assert_eq!(scene.center_shift(), -10.0);
        assert_eq!(scene.lights.len(), 1);
    }

    #[test]
    fn nests_a_group_into_its_slot() {
        let items = [
            Value::list([Value::number(1.0), Value::number(2.0)]),
            Value::number(3.0),
        ];
        let scene = compute_scene(&items, 10.0, &mut solid());

        assert_eq!(scene.boxes.len(), 4);
        assert_eq!(scene.boxes[0].position.x, 0.0);
        assert_eq!(scene.boxes[1].position.x, 11.0);
        assert_eq!(scene.boxes[2].position.x, 0.5);
        assert_eq!(scene.boxes[2].edge, 4.5);
        assert_eq!(scene.boxes[2].depth, 2);
        assert_eq!(scene.boxes[2].opacity, 0.25);
        assert_eq!(scene.boxes[3].position.x, 5.45);
        assert_eq!(scene.labels.len(), 3);
    }

    #[test]
    fn an_empty_nested_list_keeps_its_slot_and_nothing_else() {
        let items = [Value::list([])];
        let scene = compute_scene(&items, 10.0, &mut solid());
        assert_eq!(scene.boxes.len(), 1);
        assert!(scene.labels.is_empty());
    }

    #[test]
    fn empty_input_emits_nothing() {
        let scene = compute_scene(&[], 10.0, &mut solid());
        assert!(scene.boxes.is_empty());
        assert!(scene.labels.is_empty());
        assert!(scene.lights.is_empty());
        assert_eq!(scene.extent, 0.0);
    }

    #[test]
    fn groups_are_visited_depth_first_in_element_order() {
        let mut seen: Vec<GroupInfo> = Vec::new();
        let mut recorder = |info: GroupInfo| {
            seen.push(info);
            Rgb::new(0, 0, 0)
        };
        let items = [
            Value::list([Value::list([Value::number(3.0)])]),
            Value::list([Value::number(4.0), Value::number(5.0)]),
        ];
        let _ = compute_scene(&items, 10.0, &mut recorder);

        let order: Vec<(usize, usize, usize)> =
            seen.iter().map(|g| (g.depth, g.ordinal, g.len)).collect();
        assert_eq!(order, [(1, 0, 2), (2, 1, 1), (3, 2, 1), (2, 3, 2)]);
    }

    #[test]
    fn identical_calls_produce_identical_scenes() {
        let items = [
            Value::text("a"),
            Value::list([Value::number(1.0), Value::Absent]),
        ];
        let first = compute_scene(&items, 10.0, &mut solid());
        let second = compute_scene(&items, 10.0, &mut solid());
        assert_eq!(first, second);
    }

    #[test]
    fn singleton_groups_shrink_harder() {
        let singleton = [Value::list([Value::number(1.0)])];
        let pair = [Value::list([Value::number(1.0), Value::number(2.0)])];
        let single_scene = compute_scene(&singleton, 10.0, &mut solid());
        let pair_scene = compute_scene(&pair, 10.0, &mut solid());

        // One element: scale(10 / 1, 0.8). Two: scale(10 / 2, 0.9).
        assert_eq!(single_scene.boxes[1].edge, 8.0);
        assert_eq!(pair_scene.boxes[1].edge, 4.5);
    }

    #[test]
    fn lights_cover_the_strip() {
        let items: Vec<Value> = (0..5).map(|n| Value::number(f64::from(n))).collect();
        let scene = compute_scene(&items, 10.0, &mut solid());
        assert_eq!(scene.lights.len(), 2);
        assert_eq!(scene.lights[0].position.x, 0.0);
        assert_eq!(scene.lights[1].position.x, 45.0);
        assert!(scene.lights.iter().all(|l| l.intensity == 1.0));
        assert_eq!(scene.lights[0].position.y, 10.0);
        assert_eq!(scene.lights[0].position.z, 5.0);
    }
}
