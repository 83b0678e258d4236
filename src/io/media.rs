// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Raster acquisition and persistence.
//!
//! Loads the picture a dataset image record points at, substituting a
//! blank canvas of the declared dimensions when the file is missing or
//! undecodable, and writes the annotated result back out.

use crate::error::VizError;
use anyhow::Context;
use image::{Rgb, RgbImage};
use std::path::Path;

/// Background fill for placeholder canvases.
const PLACEHOLDER_FILL: Rgb<u8> = Rgb([255, 255, 255]);

/// Load the picture for an image record, converting to RGB, or
/// synthesize a white placeholder of the declared size when it cannot
/// be read. The fallback is recoverable: the run continues and the
/// overlays are drawn on the blank canvas.
pub fn load_or_placeholder(file_name: &str, width: u32, height: u32) -> RgbImage {
    match decode_rgb(Path::new(file_name)) {
        Ok(canvas) => {
            log::info!(
                "Loaded image: {} ({}x{})",
                file_name,
                canvas.width(),
                canvas.height()
            );
            canvas
        }
        Err(e) => {
            log::warn!("{:#}; using a blank {}x{} canvas instead", e, width, height);
            RgbImage::from_pixel(width, height, PLACEHOLDER_FILL)
        }
    }
}

fn decode_rgb(path: &Path) -> anyhow::Result<RgbImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to load image '{}'", path.display()))?;
    Ok(img.to_rgb8())
}

/// Persist the annotated canvas, overwriting any existing file. The
/// format is inferred from the output extension (PNG in normal runs).
pub fn save(canvas: &RgbImage, path: &Path) -> Result<(), VizError> {
    canvas.save(path).map_err(|e| VizError::WriteFailure {
        path: path.to_path_buf(),
        source: e,
    })
}
