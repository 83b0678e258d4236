// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error taxonomy for the rendering pipeline.
//!
//! Only fatal conditions live here. Recoverable conditions (a missing
//! picture file, an unsupported segmentation encoding) are logged at
//! their call sites and the run continues with degraded output.

use std::path::PathBuf;
use thiserror::Error;

/// A failure that aborts the whole run.
#[derive(Debug, Error)]
pub enum VizError {
    /// The annotation document could not be opened.
    #[error("Annotation file not found: {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The annotation document is not valid COCO-shaped JSON.
    #[error("Malformed annotation document {}: {source}", path.display())]
    MalformedDocument {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document carries no image records.
    #[error("Annotation document contains no images")]
    NoImages,

    /// The annotated raster could not be persisted.
    #[error("Failed to write output image {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl VizError {
    /// Process exit code reported for this failure, distinct per kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            VizError::NotFound { .. } => 2,
            VizError::MalformedDocument { .. } => 3,
            VizError::NoImages => 4,
            VizError::WriteFailure { .. } => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            VizError::NotFound {
                path: PathBuf::from("x"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "x"),
            }
            .exit_code(),
            VizError::NoImages.exit_code(),
        ];
        assert_ne!(codes[0], codes[1]);
        assert!(codes.iter().all(|&c| c != 0));
    }
}
