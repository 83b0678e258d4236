// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module decodes the flat coordinate lists used by COCO polygon
//! segmentations into point sequences suitable for drawing.

/// Decode a flat `[x1, y1, x2, y2, ...]` list into (x, y) point pairs,
/// consuming two numbers at a time in original order.
///
/// Returns `None` when the value is not a list of numbers, is empty,
/// or has an odd number of entries. Callers skip such polygons and
/// continue with the rest of the annotation.
pub fn polygon_points(flat: &serde_json::Value) -> Option<Vec<(f32, f32)>> {
    let entries = flat.as_array()?;
    if entries.is_empty() || entries.len() % 2 != 0 {
        return None;
    }

    let mut coords = Vec::with_capacity(entries.len());
    for entry in entries {
        coords.push(entry.as_f64()? as f32);
    }

    Some(coords.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_square() {
        let points = polygon_points(&json!([0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0]));
        assert_eq!(
            points,
            Some(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
        );
    }

    #[test]
    fn test_decode_preserves_order() {
        let points = polygon_points(&json!([3.0, 4.0, 1.0, 2.0])).unwrap();
        assert_eq!(points, vec![(3.0, 4.0), (1.0, 2.0)]);
    }

    #[test]
    fn test_odd_length_is_rejected() {
        assert_eq!(polygon_points(&json!([0.0, 0.0, 10.0])), None);
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert_eq!(polygon_points(&json!([])), None);
    }

    #[test]
    fn test_non_numeric_entries_are_rejected() {
        assert_eq!(polygon_points(&json!([0.0, "y", 10.0, 10.0])), None);
    }

    #[test]
    fn test_non_list_is_rejected() {
        assert_eq!(polygon_points(&json!({"counts": [1, 2]})), None);
    }
}
