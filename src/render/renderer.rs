// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Composites detections over the source image

use image::RgbaImage;
use tracing::debug;

use super::fonts::LabelFonts;
use super::raster::RasterSurface;
use super::surface::{DrawingSurface, FontSpec, RectF};
use crate::detection::{class_color, Color, Detection};

/// Stroke width of bounding boxes
pub const BOX_LINE_WIDTH: f64 = 3.0;
/// Font used to measure and draw overlay labels
pub const LABEL_FONT: FontSpec = FontSpec {
    size_px: 16.0,
    bold: true,
};
/// Nominal text height of the label background
pub const LABEL_TEXT_HEIGHT: f64 = 20.0;
/// Extra height added under the label text
pub const LABEL_VERTICAL_PADDING: f64 = 4.0;
/// Extra width added to the measured label text
pub const LABEL_HORIZONTAL_PADDING: f64 = 10.0;
/// Text origin relative to the box's top-left corner
pub const LABEL_TEXT_OFFSET_X: f64 = 5.0;
pub const LABEL_TEXT_OFFSET_Y: f64 = 8.0;
/// Label text color
pub const LABEL_TEXT_COLOR: Color = Color::BLACK;

/// Draws bounding boxes and labels on top of a certificate image
///
/// Boxes arrive in the source image's pixel space, so the surface is sized
/// to the image's natural dimensions and nothing is scaled.
#[derive(Clone, Default)]
pub struct AnnotationRenderer {
    fonts: LabelFonts,
}

impl AnnotationRenderer {
    /// Renderer drawing labels in the bundled DejaVu Sans
    pub fn new() -> Self {
        Self::with_fonts(LabelFonts::bundled())
    }

    pub fn with_fonts(fonts: LabelFonts) -> Self {
        Self { fonts }
    }

    /// Paint `image` and then every detection, in the order given, onto `surface`
    pub fn render<S: DrawingSurface>(
        &self,
        surface: &mut S,
        image: &RgbaImage,
        detections: &[Detection],
    ) {
        let (width, height) = image.dimensions();
        surface.resize(width, height);
        surface.draw_image(image, 0, 0);

        for detection in detections {
            draw_detection(surface, detection);
        }
        debug!(
            "Rendered {} detection(s) on {}x{} surface",
            detections.len(),
            width,
            height
        );
    }

    /// Render onto a fresh raster surface and return its pixels
    pub fn annotate(&self, image: &RgbaImage, detections: &[Detection]) -> RgbaImage {
        let mut surface = RasterSurface::with_fonts(self.fonts.clone());
        self.render(&mut surface, image, detections);
        surface.into_image()
    }
}

fn draw_detection<S: DrawingSurface>(surface: &mut S, detection: &Detection) {
    let bbox = &detection.bbox;
    let color = class_color(&detection.class);

    // Not clamped: boxes past the edge draw partially off-surface
    surface.stroke_rect(
        RectF::new(bbox.x1, bbox.y1, bbox.width(), bbox.height()),
        color,
        BOX_LINE_WIDTH,
    );

    let label = detection.overlay_label();
    let text_width = surface.measure_text(&label, LABEL_FONT);
    let background_height = LABEL_TEXT_HEIGHT + LABEL_VERTICAL_PADDING;
    surface.fill_rect(
        RectF::new(
            bbox.x1,
            bbox.y1 - background_height,
            text_width + LABEL_HORIZONTAL_PADDING,
            background_height,
        ),
        color,
    );

    surface.fill_text(
        &label,
        bbox.x1 + LABEL_TEXT_OFFSET_X,
        bbox.y1 - LABEL_TEXT_OFFSET_Y,
        LABEL_TEXT_COLOR,
        LABEL_FONT,
    );
}
