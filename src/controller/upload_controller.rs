// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Mediates file selection and analysis against the detection service

use image::RgbaImage;
use std::path::Path;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::state::{AnalysisPhase, UiState};
use crate::client::{DetectionError, DetectionService};
use crate::detection::Detection;
use crate::render::{detection_list, AnnotationRenderer, DetectionListItem};
use crate::vision::{ImageError, ImageUpload};

/// Shown when analysis is triggered before a file is chosen
pub const NO_IMAGE_MESSAGE: &str = "Please select an image first";

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Please select an image first")]
    NoImageSelected,

    #[error("An analysis is already in progress")]
    AnalysisInFlight,

    #[error("Analysis result discarded: a new image was selected")]
    Superseded,

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error("{}", .0.user_message())]
    Detection(DetectionError),
}

/// What the image area shows
#[derive(Debug, Clone, PartialEq)]
pub enum ImagePanel {
    /// No file selected yet
    Placeholder,
    /// The selected image, unannotated
    Preview(RgbaImage),
    /// The selected image with detections drawn over it
    Annotated(RgbaImage),
}

/// Snapshot of everything the UI renders
#[derive(Debug, Clone)]
pub struct ControllerView {
    pub phase: AnalysisPhase,
    pub file_name: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub items: Vec<DetectionListItem>,
    pub panel: ImagePanel,
}

/// Owns the UI state and drives one analysis at a time
pub struct UploadController<S: DetectionService> {
    service: S,
    renderer: AnnotationRenderer,
    state: RwLock<UiState>,
}

impl<S: DetectionService> UploadController<S> {
    pub fn new(service: S) -> Self {
        Self::with_renderer(service, AnnotationRenderer::new())
    }

    pub fn with_renderer(service: S, renderer: AnnotationRenderer) -> Self {
        Self {
            service,
            renderer,
            state: RwLock::new(UiState::default()),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Select a decoded image, discarding previous results and errors
    pub async fn select_image(&self, image: ImageUpload) {
        let mut state = self.state.write().await;
        if state.loading {
            debug!("Selection replaces an in-flight analysis");
        }
        info!(
            "Selected {} ({}x{}, {} bytes)",
            image.file_name(),
            image.info().width,
            image.info().height,
            image.bytes().len()
        );
        state.select(image);
    }

    /// Select raw file contents; non-image data is refused and state is kept
    pub async fn select_bytes(
        &self,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<(), ControllerError> {
        let image = ImageUpload::from_bytes(file_name, bytes)?;
        self.select_image(image).await;
        Ok(())
    }

    /// Read a file from disk and select it
    pub async fn select_path(&self, path: &Path) -> Result<(), ControllerError> {
        let image = ImageUpload::from_path(path)?;
        self.select_image(image).await;
        Ok(())
    }

    /// Send the selected image for detection
    ///
    /// Returns the number of detections stored. Every failure is also stored
    /// as the user-facing error, except a rejected re-entrant call and a
    /// response that arrives after a newer selection.
    pub async fn analyze(&self) -> Result<usize, ControllerError> {
        let (image, generation) = {
            let mut state = self.state.write().await;
            let Some(image) = state.selected.clone() else {
                warn!("Analysis requested with no image selected");
                state.error = Some(NO_IMAGE_MESSAGE.to_string());
                return Err(ControllerError::NoImageSelected);
            };
            if state.loading {
                debug!("Analysis already in flight, ignoring request");
                return Err(ControllerError::AnalysisInFlight);
            }
            state.loading = true;
            state.error = None;
            state.detections.clear();
            state.analyzed = false;
            (image, state.generation)
        };

        info!("Starting analysis of {}", image.file_name());
        let result = self.service.detect(&image).await;

        let mut state = self.state.write().await;
        if state.generation != generation {
            debug!(
                "Dropping response for {} (generation {} superseded by {})",
                image.file_name(),
                generation,
                state.generation
            );
            return Err(ControllerError::Superseded);
        }
        state.loading = false;

        match result {
            Ok(detections) => {
                info!("Analysis complete: {} detection(s)", detections.len());
                let count = detections.len();
                state.detections = detections;
                state.analyzed = true;
                Ok(count)
            }
            Err(e) => {
                warn!("Analysis failed: {}", e);
                state.error = Some(e.user_message());
                Err(ControllerError::Detection(e))
            }
        }
    }

    pub async fn phase(&self) -> AnalysisPhase {
        self.state.read().await.phase()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn detections(&self) -> Vec<Detection> {
        self.state.read().await.detections.clone()
    }

    pub async fn selected_file_name(&self) -> Option<String> {
        let state = self.state.read().await;
        state.selected.as_ref().map(|s| s.file_name().to_string())
    }

    /// Build the display snapshot
    ///
    /// The annotated surface replaces the preview only when there is at
    /// least one detection.
    pub async fn view(&self) -> ControllerView {
        let state = self.state.read().await;

        let panel = match &state.selected {
            None => ImagePanel::Placeholder,
            Some(image) if state.detections.is_empty() => ImagePanel::Preview(image.preview_rgba()),
            Some(image) => ImagePanel::Annotated(
                self.renderer
                    .annotate(&image.preview_rgba(), &state.detections),
            ),
        };

        ControllerView {
            phase: state.phase(),
            file_name: state.selected.as_ref().map(|s| s.file_name().to_string()),
            loading: state.loading,
            error: state.error.clone(),
            items: detection_list(&state.detections),
            panel,
        }
    }
}
