// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pipeline orchestration.
//!
//! Wires the loader, selection, and rendering stages together in one
//! sequential pass: load the document, pick the first image, draw
//! every annotation attached to it, and persist the result.

use crate::error::VizError;
use crate::io::{loader, media};
use crate::models::coco;
use crate::render::{overlay, palette::Palette};
use std::path::Path;

/// Run the whole pipeline: parse `input`, render overlays for the
/// first image the document references, write the result to `output`.
pub fn run(input: &Path, output: &Path) -> Result<(), VizError> {
    let dataset = loader::load(input)?;
    log::info!(
        "Loaded {}: {} images, {} annotations, {} categories",
        input.display(),
        dataset.images.len(),
        dataset.annotations.len(),
        dataset.categories.len()
    );

    let target = dataset.first_image().ok_or(VizError::NoImages)?;
    log::info!(
        "First image: id={} file={} ({}x{})",
        target.id,
        target.file_name,
        target.width,
        target.height
    );

    let mut canvas = media::load_or_placeholder(&target.file_name, target.width, target.height);

    let selected = dataset.annotations_for(target.id);
    if selected.is_empty() {
        log::info!("No annotations found for image id {}", target.id);
    }

    let names = dataset.category_names();
    let palette = Palette::new();
    for (index, annotation) in selected.iter().enumerate() {
        let category_name = coco::resolve_category(&names, annotation.category_id);
        log::info!(
            "Annotation {}: category id {} ({})",
            index + 1,
            annotation.category_id,
            category_name
        );
        overlay::draw_annotation(&mut canvas, annotation, category_name, &palette);
    }

    media::save(&canvas, output)?;
    log::info!("Saved annotated image to {}", output.display());
    Ok(())
}
