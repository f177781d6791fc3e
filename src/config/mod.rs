// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the detection client

use std::env;
use std::path::PathBuf;

/// Base URL used when no environment override is present
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Configuration for talking to the detection service
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the detection service
    pub api_url: String,
    /// TTF/OTF font used for overlay labels
    pub font_path: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            font_path: None,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("YELLOWCERT_API_URL")
                .or_else(|_| env::var("API_URL"))
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            font_path: env::var("YELLOWCERT_FONT_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn with_font_path(mut self, font_path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(font_path.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let parsed = url::Url::parse(&self.api_url)
            .map_err(|e| format!("Invalid API URL '{}': {}", self.api_url, e))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(format!(
                "API URL must use http or https, got '{}'",
                parsed.scheme()
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
