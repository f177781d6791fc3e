// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Certificate detection data model
//!
//! This module provides:
//! - The closed set of certificate element classes
//! - Detection and response envelope types for the detection service
//! - The class to display color mapping used by rendering

pub mod colors;
pub mod types;

pub use colors::{class_color, Color, FALLBACK_COLOR};
pub use types::{
    BoundingBox, CertificateClass, Detection, ErrorBody, HealthStatus, ImageSize,
    PredictResponse,
};
