// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! RGBA pixel buffer implementation of the drawing surface

use ab_glyph::{Font, PxScale, ScaleFont};
use image::{imageops, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use tracing::debug;

use super::fonts::LabelFonts;
use super::surface::{DrawingSurface, FontSpec, RectF};
use crate::detection::Color;

/// Pixels kept past each canvas edge when clipping; a clipped outline edge
/// lands here and stays invisible
const CLIP_MARGIN: i64 = 2;

/// Clip the pixel span `[start, start + len)` to the canvas plus margin
fn clip_span(start: i64, len: i64, limit: u32) -> Option<(i32, u32)> {
    let lo = start.max(-CLIP_MARGIN);
    let hi = start
        .saturating_add(len)
        .min(i64::from(limit) + CLIP_MARGIN);
    if hi <= lo {
        return None;
    }
    Some((lo as i32, (hi - lo) as u32))
}

/// Drawing surface backed by an in-memory RGBA image
pub struct RasterSurface {
    canvas: RgbaImage,
    fonts: LabelFonts,
}

impl RasterSurface {
    /// Empty surface using the bundled label fonts
    pub fn new() -> Self {
        Self::with_fonts(LabelFonts::bundled())
    }

    pub fn with_fonts(fonts: LabelFonts) -> Self {
        Self {
            canvas: RgbaImage::new(0, 0),
            fonts,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    fn hollow_rect(&mut self, left: i64, top: i64, width: i64, height: i64, color: Color) {
        let (canvas_width, canvas_height) = self.canvas.dimensions();
        // Rect spans `size` pixels, so one extra reaches the far corner
        let Some((x, w)) = clip_span(left, width.saturating_add(1).max(1), canvas_width) else {
            return;
        };
        let Some((y, h)) = clip_span(top, height.saturating_add(1).max(1), canvas_height) else {
            return;
        };
        draw_hollow_rect_mut(&mut self.canvas, Rect::at(x, y).of_size(w, h), color.to_rgba());
    }
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface for RasterSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas = RgbaImage::new(width, height);
    }

    fn draw_image(&mut self, image: &RgbaImage, x: i64, y: i64) {
        imageops::replace(&mut self.canvas, image, x, y);
    }

    fn stroke_rect(&mut self, rect: RectF, color: Color, line_width: f64) {
        let rect = rect.normalized();
        // Float to int casts saturate, so far off-surface boxes stay finite
        let left = rect.x.round() as i64;
        let top = rect.y.round() as i64;
        let width = rect.width.round() as i64;
        let height = rect.height.round() as i64;

        // Concentric 1px outlines, the middle one on the rectangle itself
        let line_width = line_width.round().max(1.0) as i64;
        let inset = (line_width - 1) / 2;
        for i in 0..line_width {
            let grow = i - inset;
            self.hollow_rect(
                left.saturating_sub(grow),
                top.saturating_sub(grow),
                width.saturating_add(2 * grow),
                height.saturating_add(2 * grow),
                color,
            );
        }
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        let rect = rect.normalized();
        let (canvas_width, canvas_height) = self.canvas.dimensions();
        let Some((x, w)) = clip_span(rect.x.round() as i64, rect.width.round() as i64, canvas_width)
        else {
            return;
        };
        let Some((y, h)) = clip_span(rect.y.round() as i64, rect.height.round() as i64, canvas_height)
        else {
            return;
        };
        draw_filled_rect_mut(&mut self.canvas, Rect::at(x, y).of_size(w, h), color.to_rgba());
    }

    fn measure_text(&self, text: &str, font: FontSpec) -> f64 {
        let (width, _) = text_size(PxScale::from(font.size_px), self.fonts.face(font), text);
        width as f64
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color, font: FontSpec) {
        let face = self.fonts.face(font);
        let scale = PxScale::from(font.size_px);
        let top = y - face.as_scaled(scale).ascent() as f64;

        let (text_width, text_height) = text_size(scale, face, text);
        let (canvas_width, canvas_height) = self.canvas.dimensions();
        let reach = f64::from(text_width.max(text_height)) + f64::from(font.size_px);
        if x >= f64::from(canvas_width)
            || top >= f64::from(canvas_height)
            || x <= -reach
            || top <= -reach
        {
            debug!("Label '{}' lies off-surface, skipping", text);
            return;
        }

        draw_text_mut(
            &mut self.canvas,
            color.to_rgba(),
            x.round() as i32,
            top.round() as i32,
            scale,
            face,
            text,
        );
    }
}
