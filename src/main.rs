// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! COCOVIZ - COCO annotation overlay renderer
//!
//! A command-line utility that draws the polygon outlines and bounding
//! boxes from a COCO-style annotation file onto the first image the
//! file references, then writes the result to disk as a PNG.

mod app;
mod error;
mod io;
mod models;
mod render;
mod util;

use std::path::Path;
use std::process::ExitCode;

/// Annotation document consumed on every run.
const INPUT_PATH: &str = "dataset/coco-label.json";

/// Annotated raster written on every successful run.
const OUTPUT_PATH: &str = "first_image_with_annotations.png";

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    match app::run(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
