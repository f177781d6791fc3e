// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detection result types returned by the certificate detection service

use serde::{Deserialize, Serialize};
use std::fmt;

/// Element classes the certificate model is trained on
///
/// Labels outside the trained set (the service reports unknown indices as
/// `class_<n>`) are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CertificateClass {
    Cholera,
    Covid,
    Date,
    Flu,
    Logo,
    Meningo,
    Signature,
    YellowFever,
    Other(String),
}

impl CertificateClass {
    /// All trained classes, in model index order
    pub const KNOWN: [CertificateClass; 8] = [
        CertificateClass::Cholera,
        CertificateClass::Covid,
        CertificateClass::Date,
        CertificateClass::Flu,
        CertificateClass::Logo,
        CertificateClass::Meningo,
        CertificateClass::Signature,
        CertificateClass::YellowFever,
    ];

    /// Wire label of this class
    pub fn as_str(&self) -> &str {
        match self {
            CertificateClass::Cholera => "cholera",
            CertificateClass::Covid => "covid",
            CertificateClass::Date => "date",
            CertificateClass::Flu => "flu",
            CertificateClass::Logo => "logo",
            CertificateClass::Meningo => "meningo",
            CertificateClass::Signature => "signature",
            CertificateClass::YellowFever => "yellowfever",
            CertificateClass::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, CertificateClass::Other(_))
    }
}

impl From<&str> for CertificateClass {
    fn from(label: &str) -> Self {
        match label {
            "cholera" => CertificateClass::Cholera,
            "covid" => CertificateClass::Covid,
            "date" => CertificateClass::Date,
            "flu" => CertificateClass::Flu,
            "logo" => CertificateClass::Logo,
            "meningo" => CertificateClass::Meningo,
            "signature" => CertificateClass::Signature,
            "yellowfever" => CertificateClass::YellowFever,
            other => CertificateClass::Other(other.to_string()),
        }
    }
}

impl From<String> for CertificateClass {
    fn from(label: String) -> Self {
        match CertificateClass::from(label.as_str()) {
            CertificateClass::Other(_) => CertificateClass::Other(label),
            known => known,
        }
    }
}

impl From<CertificateClass> for String {
    fn from(class: CertificateClass) -> Self {
        match class {
            CertificateClass::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CertificateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Axis-aligned box in source image pixel coordinates, as two corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Signed width; negative when the corners arrive swapped
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Signed height; negative when the corners arrive swapped
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }
}

/// One recognized certificate element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub class: CertificateClass,
    /// Confidence score (0.0-1.0)
    pub confidence: f64,
    pub bbox: BoundingBox,
}

impl Detection {
    /// Overlay label: class followed by the raw confidence value
    pub fn overlay_label(&self) -> String {
        format!("{} {}", self.class, self.confidence)
    }

    /// Confidence as a whole percentage, e.g. `93%`
    pub fn percent_label(&self) -> String {
        format!("{}%", (self.confidence * 100.0).round() as i64)
    }
}

/// Image dimensions reported alongside predictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Envelope returned by `POST /predict`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub detections: Vec<Detection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<ImageSize>,
}

/// Body of a non-2xx response, when the service provides one
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Service status from `GET /`
///
/// The probe only needs the call to succeed, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_loaded: Option<bool>,
}
