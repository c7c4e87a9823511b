// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for the layout engine.
//!
//! These must hold for any validated input tree and any root edge in the
//! control range:
//!
//! 1. Same-frame siblings never overlap along x and keep a positive gap.
//! 2. Opacity starts at 0.15, never exceeds 1, and never decreases with depth.
//! 3. The largest edge at each depth decays by at least the 0.9 ratio.
//! 4. Box and label counts match the slot and scalar counts of the input.
//! 5. Every label sits on a box position.
//! 6. Light count and positions follow the 4.5-edge spacing rule.
//! 7. The engine is deterministic.

use std::collections::{BTreeMap, HashMap};

use nestbox_layout::{BoxSpec, GroupInfo, Rgb, compute_scene};
use nestbox_value::Value;
use proptest::prelude::*;

fn node_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        (-1.0e6..1.0e6f64).prop_map(Value::number),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::text),
        Just(Value::Absent),
    ];
    leaf.prop_recursive(5, 40, 6, |inner| {
        proptest::collection::vec(inner, 0..6).prop_map(Value::list)
    })
}

fn items_strategy() -> impl Strategy<Value = Vec<Value>> {
    proptest::collection::vec(node_strategy(), 1..6)
}

fn edge_strategy() -> impl Strategy<Value = f64> {
    1.0..150.0f64
}

/// A palette whose colors are injective over the frame ordinal, so boxes can
/// be regrouped into their frames from the output alone.
fn tagging_palette() -> impl FnMut(GroupInfo) -> Rgb {
    |g: GroupInfo| {
        Rgb::new(
            (g.ordinal & 0xFF) as u8,
            ((g.ordinal >> 8) & 0xFF) as u8,
            (g.depth & 0xFF) as u8,
        )
    }
}

fn frames_by_color(boxes: &[BoxSpec]) -> HashMap<Rgb, Vec<&BoxSpec>> {
    let mut frames: HashMap<Rgb, Vec<&BoxSpec>> = HashMap::new();
    for b in boxes {
        frames.entry(b.color).or_default().push(b);
    }
    frames
}

/// Expected `(boxes, labels)` for an input: one box per element of every
/// non-empty list, one label per scalar.
fn count_slots(items: &[Value]) -> (usize, usize) {
    let mut boxes = items.len();
    let mut labels = 0;
    for item in items {
        match item {
            Value::Number(_) | Value::Text(_) => labels += 1,
            Value::List(children) if !children.is_empty() => {
                let (b, l) = count_slots(children);
                boxes += b;
                labels += l;
            }
            _ => {}
        }
    }
    (boxes, labels)
}

proptest! {
    #[test]
    fn siblings_never_overlap(items in items_strategy(), edge in edge_strategy()) {
        let mut palette = tagging_palette();
        let scene = compute_scene(&items, edge, &mut palette);
        for siblings in frames_by_color(&scene.boxes).values() {
            for pair in siblings.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if a.edge > 0.0 {
                    prop_assert!(
                        b.position.x > a.position.x + a.edge,
                        "siblings at x={} and x={} overlap at edge {}",
                        a.position.x,
                        b.position.x,
                        a.edge
                    );
                } else {
                    prop_assert!(b.position.x >= a.position.x);
                }
            }
        }
    }

    #[test]
    fn opacity_is_bounded_and_monotone(items in items_strategy(), edge in edge_strategy()) {
        let mut palette = tagging_palette();
        let scene = compute_scene(&items, edge, &mut palette);
        for b in &scene.boxes {
            prop_assert!(b.opacity >= 0.15 && b.opacity <= 1.0);
            if b.depth == 1 {
                prop_assert_eq!(b.opacity, 0.15);
            }
        }
        for a in &scene.boxes {
            for b in &scene.boxes {
                if a.depth < b.depth {
                    prop_assert!(a.opacity <= b.opacity);
                }
            }
        }
    }

    #[test]
    fn edges_shrink_per_depth(items in items_strategy(), edge in edge_strategy()) {
        let mut palette = tagging_palette();
        let scene = compute_scene(&items, edge, &mut palette);
        let mut max_edge: BTreeMap<usize, f64> = BTreeMap::new();
        for b in &scene.boxes {
            let slot = max_edge.entry(b.depth).or_insert(0.0);
            if b.edge > *slot {
                *slot = b.edge;
            }
        }
        let depths: Vec<usize> = max_edge.keys().copied().collect();
        for w in depths.windows(2) {
            if w[1] == w[0] + 1 {
                prop_assert!(max_edge[&w[1]] <= 0.9 * max_edge[&w[0]] + 1e-12);
            }
        }
    }

    #[test]
    fn spec_counts_match_the_input(items in items_strategy(), edge in edge_strategy()) {
        let mut palette = tagging_palette();
        let scene = compute_scene(&items, edge, &mut palette);
        let (boxes, labels) = count_slots(&items);
        prop_assert_eq!(scene.boxes.len(), boxes);
        prop_assert_eq!(scene.labels.len(), labels);
    }

    #[test]
    fn labels_sit_on_boxes(items in items_strategy(), edge in edge_strategy()) {
        let mut palette = tagging_palette();
        let scene = compute_scene(&items, edge, &mut palette);
        for label in &scene.labels {
            prop_assert!(scene.boxes.iter().any(|b| b.position == label.position));
        }
    }

    #[test]
    fn lights_follow_the_spacing_rule(items in items_strategy(), edge in edge_strategy()) {
        let mut palette = tagging_palette();
        let scene = compute_scene(&items, edge, &mut palette);
        let spacing = edge * 4.5;
        let extent = items.len() as f64 * edge;
        prop_assert_eq!(scene.extent, extent);
        prop_assert_eq!(scene.lights.len(), (extent / spacing).ceil() as usize);
        for (i, light) in scene.lights.iter().enumerate() {
            prop_assert_eq!(light.position.x, i as f64 * spacing);
            prop_assert_eq!(light.position.y, edge);
        }
    }

    #[test]
    fn identical_inputs_build_identical_scenes(items in items_strategy(), edge in edge_strategy()) {
        let mut first_palette = tagging_palette();
        let mut second_palette = tagging_palette();
        let first = compute_scene(&items, edge, &mut first_palette);
        let second = compute_scene(&items, edge, &mut second_palette);
        prop_assert_eq!(first, second);
    }
}
