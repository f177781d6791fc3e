// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP client for the certificate detection service

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, info, warn};

use super::errors::DetectionError;
use super::DetectionService;
use crate::config::ClientConfig;
use crate::detection::{Detection, ErrorBody, HealthStatus, PredictResponse};
use crate::vision::ImageUpload;

/// Name of the single multipart field carrying the image
pub const FILE_FIELD: &str = "file";

/// Client for the detection service's `/predict` and health endpoints
pub struct DetectionClient {
    client: Client,
    endpoint: String,
}

impl DetectionClient {
    /// Create a client bound to the configured base URL
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate().map_err(|e| anyhow!(e))?;

        // Transport defaults only: no timeout, no retries
        let client = Client::builder().build()?;

        let endpoint = config.api_url.trim_end_matches('/').to_string();
        info!("Detection client configured: endpoint={}", endpoint);

        Ok(Self { client, endpoint })
    }

    /// Get the base URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.endpoint)
    }

    fn health_url(&self) -> String {
        format!("{}/", self.endpoint)
    }
}

#[async_trait]
impl DetectionService for DetectionClient {
    async fn detect(&self, image: &ImageUpload) -> Result<Vec<Detection>, DetectionError> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.mime_type())?;
        let form = Form::new().part(FILE_FIELD, part);

        let url = self.predict_url();
        debug!(
            "Detection POST {} file={} bytes={}",
            url,
            image.file_name(),
            image.bytes().len()
        );

        let response = self.client.post(&url).multipart(form).send().await.map_err(|e| {
            warn!("Detection request failed: {}", e);
            DetectionError::from(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        let result = parse_predict_response(status, &body);
        match &result {
            Ok(detections) => info!("Detection succeeded: {} element(s)", detections.len()),
            Err(e) => warn!("Detection failed: {}", e),
        }
        result
    }

    async fn health(&self) -> Result<HealthStatus, DetectionError> {
        let url = self.health_url();
        debug!("Health GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DetectionError::HealthCheck(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DetectionError::HealthCheck(format!(
                "service returned {}",
                status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DetectionError::HealthCheck(e.to_string()))?;

        // The probe only cares that the service answered
        Ok(serde_json::from_slice(&body).unwrap_or_default())
    }
}

/// Interpret a `/predict` response
pub fn parse_predict_response(status: u16, body: &[u8]) -> Result<Vec<Detection>, DetectionError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty());
        return Err(match message {
            Some(message) => DetectionError::Server { status, message },
            None => DetectionError::Status(status),
        });
    }

    let envelope: PredictResponse = serde_json::from_slice(body)
        .map_err(|e| DetectionError::InvalidResponse(e.to_string()))?;

    if !envelope.success {
        return Err(DetectionError::Rejected);
    }

    Ok(envelope.detections)
}
