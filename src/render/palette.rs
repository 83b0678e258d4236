// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Category color configuration.
//!
//! Maps resolved category names to outline colors. The special-case
//! list lives here as data so new categories can be added without
//! touching the drawing code.

use image::Rgb;
use std::collections::HashMap;

pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
pub const RED: Rgb<u8> = Rgb([255, 0, 0]);

/// Category-name to outline-color mapping with a fixed fallback.
pub struct Palette {
    colors: HashMap<String, Rgb<u8>>,
    fallback: Rgb<u8>,
}

impl Palette {
    /// The built-in mapping: "nose" draws blue, "nostril" draws green,
    /// and every other name (including the unknown-category sentinel)
    /// falls back to red.
    pub fn new() -> Self {
        Self::from_entries(&[("nose", BLUE), ("nostril", GREEN)], RED)
    }

    /// Build a palette from (name, color) pairs and a fallback color.
    pub fn from_entries(entries: &[(&str, Rgb<u8>)], fallback: Rgb<u8>) -> Self {
        Self {
            colors: entries
                .iter()
                .map(|(name, color)| (name.to_string(), *color))
                .collect(),
            fallback,
        }
    }

    /// Outline color for a category name.
    pub fn color_for(&self, category_name: &str) -> Rgb<u8> {
        self.colors
            .get(category_name)
            .copied()
            .unwrap_or(self.fallback)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_mapping() {
        let palette = Palette::new();
        assert_eq!(palette.color_for("nose"), BLUE);
        assert_eq!(palette.color_for("nostril"), GREEN);
        assert_eq!(palette.color_for("whisker"), RED);
        assert_eq!(palette.color_for("unknown"), RED);
    }

    #[test]
    fn test_custom_entries_extend_the_mapping() {
        let yellow = Rgb([255, 255, 0]);
        let palette = Palette::from_entries(&[("ear", yellow)], RED);
        assert_eq!(palette.color_for("ear"), yellow);
        assert_eq!(palette.color_for("nose"), RED);
    }
}
