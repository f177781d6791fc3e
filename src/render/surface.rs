// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Drawing surface abstraction used by the annotation renderer

use image::RgbaImage;

use crate::detection::Color;

/// Rectangle in surface pixel space
///
/// Width and height are signed; a negative extent draws towards the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Same rectangle with non-negative width and height
    pub fn normalized(&self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Self::new(x, y, width, height)
    }
}

/// Font request for label text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub size_px: f32,
    pub bold: bool,
}

/// Target of the annotation renderer
///
/// Mirrors the operations of a 2D canvas context that the overlay needs.
pub trait DrawingSurface {
    /// Resize to exactly `width` x `height` pixels, clearing the contents
    fn resize(&mut self, width: u32, height: u32);

    /// Draw `image` unscaled with its top-left corner at (`x`, `y`)
    fn draw_image(&mut self, image: &RgbaImage, x: i64, y: i64);

    /// Stroke the outline of `rect`, centring the line on the outline
    fn stroke_rect(&mut self, rect: RectF, color: Color, line_width: f64);

    fn fill_rect(&mut self, rect: RectF, color: Color);

    /// Advance width of `text` in pixels
    fn measure_text(&self, text: &str, font: FontSpec) -> f64;

    /// Draw `text` with its alphabetic baseline starting at (`x`, `y`)
    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color, font: FontSpec);
}
