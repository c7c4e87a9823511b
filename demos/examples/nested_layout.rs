// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end walkthrough: validate a literal, lay it out, print the scene.
//!
//! This example shows how to combine:
//! - `nestbox_literal` for safe parsing and validation of the input text,
//! - `nestbox_layout` for the box/label/light layout itself.
//!
//! Run:
//! - `cargo run -p nestbox_examples --example nested_layout`
//! - `cargo run -p nestbox_examples --example nested_layout -- "[[1, 2], 'three']"`

use std::env;
use std::process::ExitCode;

use nestbox_layout::SceneBuilder;
use nestbox_literal::{ValidateError, validate};

const DEFAULT_INPUT: &str = "['Hello', 'World!']";

fn main() -> ExitCode {
    let input = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());

    let value = match validate(&input) {
        Ok(value) => value,
        Err(err) => {
            match &err {
                ValidateError::Parse(_) => eprintln!("input is not a literal: {err}"),
                ValidateError::Shape(_) => eprintln!("input has the wrong shape: {err}"),
                ValidateError::Value(_) => eprintln!("input holds unsupported values: {err}"),
            }
            return ExitCode::FAILURE;
        }
    };

    println!("Accepted input, canonical form:\n{}\n", value.pretty());

    let items = value.as_list().unwrap_or_default();
    let mut builder = SceneBuilder::new();
    let scene = builder.build(items);

    println!(
        "Scene: {} boxes, {} labels, {} lights over extent {} (center shift {})",
        scene.boxes.len(),
        scene.labels.len(),
        scene.lights.len(),
        scene.extent,
        scene.center_shift(),
    );

    println!("\nBoxes:");
    for b in &scene.boxes {
        println!(
            "  depth {} @ x={:<8} edge={:<6} opacity={:.2} color=#{:06x}",
            b.depth,
            b.position.x,
            b.edge,
            b.opacity,
            b.color.to_hex()
        );
    }

    println!("\nLabels:");
    for l in &scene.labels {
        println!("  {:?} @ x={} char size {}", l.text, l.position.x, l.char_size);
    }

    println!("\nLights:");
    for l in &scene.lights {
        println!(
            "  @ ({}, {}, {}) intensity {}",
            l.position.x, l.position.y, l.position.z, l.intensity
        );
    }

    // Resize the way a host control panel would, then rebuild.
    builder.set_root_edge(20.0);
    let larger = builder.build(items);
    println!("\nAfter resizing the root edge to {}:", builder.root_edge());
    println!(
        "  first box edge {} -> {}, extent {} -> {}",
        scene.boxes[0].edge, larger.boxes[0].edge, scene.extent, larger.extent
    );

    ExitCode::SUCCESS
}
