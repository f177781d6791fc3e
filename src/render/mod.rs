// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Annotation rendering
//!
//! This module provides:
//! - The `DrawingSurface` trait the overlay is drawn through
//! - `RasterSurface`, an RGBA buffer drawn with imageproc
//! - `LabelFonts`, the bundled or user-supplied label typefaces
//! - `AnnotationRenderer`, which composites detections over the image
//! - The textual detection list

pub mod fonts;
pub mod raster;
pub mod renderer;
pub mod summary;
pub mod surface;

pub use fonts::{load_font, FontError, LabelFonts};
pub use raster::RasterSurface;
pub use renderer::{
    AnnotationRenderer, BOX_LINE_WIDTH, LABEL_FONT, LABEL_HORIZONTAL_PADDING, LABEL_TEXT_COLOR,
    LABEL_TEXT_HEIGHT, LABEL_TEXT_OFFSET_X, LABEL_TEXT_OFFSET_Y, LABEL_VERTICAL_PADDING,
};
pub use summary::{detection_list, DetectionListItem};
pub use surface::{DrawingSurface, FontSpec, RectF};
