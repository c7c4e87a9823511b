// Copyright 2025 the Nestbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dump a computed scene as JSON for inspection or piping into other tools.
//!
//! Uses a solid palette so the output is stable across runs.
//!
//! Run:
//! - `cargo run -p nestbox_examples --example scene_json`
//! - `cargo run -p nestbox_examples --example scene_json -- "[1, [2, null]]"`

use std::env;
use std::process::ExitCode;

use nestbox_layout::{Rgb, SceneBuilder, SolidPalette};
use nestbox_literal::validate;

const DEFAULT_INPUT: &str = "['Hello', 'World!']";

fn main() -> ExitCode {
    let input = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());

    let value = match validate(&input) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = SceneBuilder::with_palette(SolidPalette(Rgb::from_hex(0x44_88_CC)));
    let scene = builder.build(value.as_list().unwrap_or_default());

    match serde_json::to_string_pretty(&scene) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to serialize scene: {err}");
            ExitCode::FAILURE
        }
    }
}
