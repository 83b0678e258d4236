// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation document loading.
//!
//! Reads a COCO-style JSON file into the in-memory dataset. The only
//! side effect is the file read itself.

use crate::error::VizError;
use crate::models::coco::Dataset;
use std::path::Path;

/// Load and parse the annotation document at `path`.
pub fn load(path: &Path) -> Result<Dataset, VizError> {
    let content = std::fs::read_to_string(path).map_err(|e| VizError::NotFound {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(&content).map_err(|e| VizError::MalformedDocument {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse a document from already-read JSON text.
pub fn parse(content: &str) -> Result<Dataset, serde_json::Error> {
    serde_json::from_str(content)
}
