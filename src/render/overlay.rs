// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation overlay drawing.
//!
//! Draws polygon outlines and bounding boxes onto an RGB canvas. The
//! canvas is mutated in place; nothing here reads the dataset beyond
//! the single annotation being drawn.

use crate::models::coco::{Annotation, Segmentation};
use crate::render::palette::Palette;
use crate::util::geometry;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

/// Stroke width for polygon outlines.
pub const POLYGON_STROKE: u32 = 3;

/// Stroke width for bounding box outlines.
pub const BBOX_STROKE: u32 = 2;

/// Draw one annotation's overlays onto the canvas. Polygon and
/// bounding-box draws are independent: zero, one, or both happen
/// depending on which fields the annotation carries.
pub fn draw_annotation(
    canvas: &mut RgbImage,
    annotation: &Annotation,
    category_name: &str,
    palette: &Palette,
) {
    let color = palette.color_for(category_name);

    if let Some(segmentation) = &annotation.segmentation {
        draw_segmentation(canvas, segmentation, category_name, color);
    }

    if let Some(bbox) = annotation.bbox {
        draw_bbox_outline(canvas, bbox, color, BBOX_STROKE);
        log::info!("Drew '{}' bounding box {:?}", category_name, color.0);
    }
}

fn draw_segmentation(
    canvas: &mut RgbImage,
    segmentation: &Segmentation,
    category_name: &str,
    color: Rgb<u8>,
) {
    match segmentation {
        Segmentation::Polygons(polygons) => {
            for polygon in polygons {
                match geometry::polygon_points(polygon) {
                    Some(points) => {
                        draw_polygon_outline(canvas, &points, color, POLYGON_STROKE);
                        log::info!(
                            "Drew '{}' segmentation outline {:?}",
                            category_name,
                            color.0
                        );
                    }
                    None => {
                        log::warn!(
                            "Skipping malformed or empty polygon for '{}'",
                            category_name
                        );
                    }
                }
            }
        }
        Segmentation::Other(_) => {
            log::warn!(
                "Unsupported segmentation encoding for '{}' (RLE?); skipping",
                category_name
            );
        }
    }
}

/// Draw a closed polygon outline, connecting the points in sequence
/// and closing the last point back to the first.
///
/// Stroke width is approximated by restamping each edge at unit
/// offsets around the center line, which keeps corners joined for the
/// small widths used here.
pub fn draw_polygon_outline(
    canvas: &mut RgbImage,
    points: &[(f32, f32)],
    color: Rgb<u8>,
    stroke: u32,
) {
    for i in 0..points.len() {
        let start = points[i];
        let end = points[(i + 1) % points.len()];
        draw_thick_segment(canvas, start, end, color, stroke);
    }
}

fn draw_thick_segment(
    canvas: &mut RgbImage,
    start: (f32, f32),
    end: (f32, f32),
    color: Rgb<u8>,
    stroke: u32,
) {
    let reach = (stroke / 2) as i32;
    for dx in -reach..=reach {
        for dy in -reach..=reach {
            draw_line_segment_mut(
                canvas,
                (start.0 + dx as f32, start.1 + dy as f32),
                (end.0 + dx as f32, end.1 + dy as f32),
                color,
            );
        }
    }
}

/// Draw an unfilled rectangle from `(x, y)` to `(x + w, y + h)`, with
/// the stroke growing inward from the outer edge.
pub fn draw_bbox_outline(canvas: &mut RgbImage, bbox: [f64; 4], color: Rgb<u8>, stroke: u32) {
    let [x, y, w, h] = bbox;
    let (x0, y0) = (x.round() as i32, y.round() as i32);
    let (x1, y1) = ((x + w).round() as i32, (y + h).round() as i32);

    for inset in 0..stroke as i32 {
        let width = (x1 - x0 + 1) - 2 * inset;
        let height = (y1 - y0 + 1) - 2 * inset;
        if width <= 0 || height <= 0 {
            break;
        }
        let ring = Rect::at(x0 + inset, y0 + inset).of_size(width as u32, height as u32);
        draw_hollow_rect_mut(canvas, ring, color);
    }
}
