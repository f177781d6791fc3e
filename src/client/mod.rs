// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detection service client

pub mod detection_client;
pub mod errors;

use async_trait::async_trait;

use crate::detection::{Detection, HealthStatus};
use crate::vision::ImageUpload;

pub use detection_client::{parse_predict_response, DetectionClient, FILE_FIELD};
pub use errors::{
    DetectionError, CONNECTIVITY_MESSAGE, DETECTION_FAILED_MESSAGE, HEALTH_CHECK_MESSAGE,
};

/// Remote certificate detection
#[async_trait]
pub trait DetectionService: Send + Sync {
    /// Upload one image and return the detections in service order
    async fn detect(&self, image: &ImageUpload) -> Result<Vec<Detection>, DetectionError>;

    /// Probe the service root
    async fn health(&self) -> Result<HealthStatus, DetectionError>;
}
