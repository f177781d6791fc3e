// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod detection;
pub mod render;
pub mod vision;

// Re-export main types
pub use client::{DetectionClient, DetectionError, DetectionService};
pub use config::ClientConfig;
pub use controller::{AnalysisPhase, ControllerError, ControllerView, ImagePanel, UploadController};
pub use detection::{BoundingBox, CertificateClass, Color, Detection, HealthStatus};
pub use render::{AnnotationRenderer, DetectionListItem, DrawingSurface, LabelFonts, RasterSurface};
pub use vision::ImageUpload;
