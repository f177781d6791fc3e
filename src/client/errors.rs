// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Error taxonomy for detection service calls

use thiserror::Error;

/// Shown when the request never produced a structured error
pub const CONNECTIVITY_MESSAGE: &str = "Failed to connect to server";
/// Shown when the service answered but did not report success
pub const DETECTION_FAILED_MESSAGE: &str = "Detection failed";
/// Shown when the health probe fails for any reason
pub const HEALTH_CHECK_MESSAGE: &str = "Failed to connect to API";

/// Failure of a detection service call
///
/// Kinds stay distinct for logging and callers, while `user_message`
/// collapses them into the short text a user sees.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DetectionError {
    /// The request could not complete
    #[error("connection failed: {0}")]
    Connectivity(String),

    /// Non-2xx response without a structured error body
    #[error("service returned status {0}")]
    Status(u16),

    /// Non-2xx response carrying an `error` message
    #[error("service returned {status}: {message}")]
    Server { status: u16, message: String },

    /// 2xx response with `success: false`
    #[error("service reported failure")]
    Rejected,

    /// 2xx response whose body is not a detection envelope
    #[error("invalid response body: {0}")]
    InvalidResponse(String),

    /// Health probe failed
    #[error("health check failed: {0}")]
    HealthCheck(String),
}

impl DetectionError {
    /// Single user-facing message for this failure
    pub fn user_message(&self) -> String {
        match self {
            DetectionError::Server { message, .. } => message.clone(),
            DetectionError::Rejected | DetectionError::InvalidResponse(_) => {
                DETECTION_FAILED_MESSAGE.to_string()
            }
            DetectionError::Connectivity(_) | DetectionError::Status(_) => {
                CONNECTIVITY_MESSAGE.to_string()
            }
            DetectionError::HealthCheck(_) => HEALTH_CHECK_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for DetectionError {
    fn from(err: reqwest::Error) -> Self {
        DetectionError::Connectivity(err.to_string())
    }
}
