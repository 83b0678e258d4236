// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! COCO annotation document records.
//!
//! A document is a single JSON object with top-level `images`,
//! `annotations`, and `categories` lists linked by integer ids.
//! Records are read-only once parsed.

use serde::Deserialize;
use std::collections::HashMap;

/// Name reported when an annotation's `category_id` matches no
/// category record. Resolution never fails; it degrades to this.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Root of a parsed annotation document.
///
/// `annotations` and `categories` may be absent from the document and
/// default to empty. An absent `images` list also parses, but the
/// selection step rejects it before any rendering happens.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub images: Vec<ImageInfo>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// One source picture referenced by the document.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageInfo {
    pub id: i64,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

/// One labeled region on an image. Either field may be absent;
/// an annotation with neither draws nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct Annotation {
    pub image_id: i64,
    pub category_id: i64,
    #[serde(default)]
    pub segmentation: Option<Segmentation>,
    #[serde(default)]
    pub bbox: Option<[f64; 4]>,
}

/// One label class.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Segmentation payload of an annotation.
///
/// COCO stores either a list of flat polygon coordinate lists or an
/// RLE-style object. Only polygon lists are drawable here; any other
/// shape is carried as raw JSON and reported as unsupported at render
/// time. Individual polygons are also kept raw: a malformed entry is
/// skipped during rendering without affecting its siblings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Segmentation {
    Polygons(Vec<serde_json::Value>),
    Other(serde_json::Value),
}

impl Dataset {
    /// The target image: always the first record in the `images` list.
    pub fn first_image(&self) -> Option<&ImageInfo> {
        self.images.first()
    }

    /// All annotations attached to `image_id`, in document order.
    pub fn annotations_for(&self, image_id: i64) -> Vec<&Annotation> {
        self.annotations
            .iter()
            .filter(|a| a.image_id == image_id)
            .collect()
    }

    /// Build the category id -> name table consulted while rendering.
    pub fn category_names(&self) -> HashMap<i64, String> {
        self.categories
            .iter()
            .map(|c| (c.id, c.name.clone()))
            .collect()
    }
}

/// Resolve a category id against the name table, falling back to the
/// unknown sentinel.
pub fn resolve_category(names: &HashMap<i64, String>, category_id: i64) -> &str {
    names
        .get(&category_id)
        .map(String::as_str)
        .unwrap_or(UNKNOWN_CATEGORY)
}
