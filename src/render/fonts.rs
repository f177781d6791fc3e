// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Label typefaces: bundled DejaVu Sans, or a font file supplied by the user

use ab_glyph::FontArc;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

use super::surface::FontSpec;

static REGULAR_TTF: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static BOLD_TTF: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

#[derive(Debug, Error)]
pub enum FontError {
    #[error("Cannot read font file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse font data from {0}")]
    Invalid(String),
}

/// Load a TTF/OTF font for label text
pub fn load_font(path: &Path) -> Result<FontArc, FontError> {
    let data = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.display().to_string(),
        source,
    })?;
    FontArc::try_from_vec(data).map_err(|_| FontError::Invalid(path.display().to_string()))
}

/// Regular and bold faces used to measure and draw labels
#[derive(Clone)]
pub struct LabelFonts {
    regular: FontArc,
    bold: FontArc,
}

impl LabelFonts {
    /// DejaVu Sans, compiled into the binary
    pub fn bundled() -> Self {
        static BUNDLED: OnceLock<LabelFonts> = OnceLock::new();
        BUNDLED
            .get_or_init(|| Self {
                regular: FontArc::try_from_slice(REGULAR_TTF)
                    .expect("bundled DejaVu Sans should always parse"),
                bold: FontArc::try_from_slice(BOLD_TTF)
                    .expect("bundled DejaVu Sans Bold should always parse"),
            })
            .clone()
    }

    /// Use one face for every weight
    pub fn single(font: FontArc) -> Self {
        Self {
            regular: font.clone(),
            bold: font,
        }
    }

    /// Load a user-supplied font file, replacing both bundled faces
    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        load_font(path).map(Self::single)
    }

    /// Face matching the requested weight
    pub fn face(&self, spec: FontSpec) -> &FontArc {
        if spec.bold {
            &self.bold
        } else {
            &self.regular
        }
    }
}

impl Default for LabelFonts {
    fn default() -> Self {
        Self::bundled()
    }
}
