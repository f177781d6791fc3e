// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Display colors for certificate classes

use image::Rgba;
use std::fmt;

use super::types::CertificateClass;

/// Opaque RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_rgba(&self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 0xFF])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Color used for labels outside the trained class set
pub const FALLBACK_COLOR: Color = Color::rgb(0x00, 0xFF, 0x00);

/// Resolve the display color of a class
///
/// The same color is used for the box stroke, the label background and the
/// list indicator.
pub fn class_color(class: &CertificateClass) -> Color {
    match class {
        CertificateClass::Cholera => Color::rgb(0x26, 0xA6, 0x9A),
        CertificateClass::Covid => Color::rgb(0x21, 0x96, 0xF3),
        CertificateClass::Date => Color::rgb(0x9C, 0x27, 0xB0),
        CertificateClass::Flu => Color::rgb(0x4C, 0xAF, 0x50),
        CertificateClass::Logo => Color::rgb(0x15, 0x65, 0xC0),
        CertificateClass::Meningo => Color::rgb(0xE9, 0x1E, 0x63),
        CertificateClass::Signature => Color::rgb(0x5E, 0x35, 0xB1),
        CertificateClass::YellowFever => Color::rgb(0xFF, 0x98, 0x00),
        CertificateClass::Other(_) => FALLBACK_COLOR,
    }
}
