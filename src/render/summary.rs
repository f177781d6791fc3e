// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Textual detection list shown next to the annotated image

use serde::Serialize;
use std::fmt;

use crate::detection::{class_color, CertificateClass, Color, Detection};

/// One row of the detection list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionListItem {
    pub class: CertificateClass,
    /// Rounded percentage, e.g. `93%`
    pub percent_label: String,
    /// Indicator color, identical to the box color
    #[serde(serialize_with = "serialize_color")]
    pub color: Color,
}

impl DetectionListItem {
    pub fn from_detection(detection: &Detection) -> Self {
        Self {
            class: detection.class.clone(),
            percent_label: detection.percent_label(),
            color: class_color(&detection.class),
        }
    }
}

impl fmt::Display for DetectionListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.class, self.percent_label)
    }
}

fn serialize_color<S: serde::Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&color.to_hex())
}

/// List rows in service order
pub fn detection_list(detections: &[Detection]) -> Vec<DetectionListItem> {
    detections.iter().map(DetectionListItem::from_detection).collect()
}
