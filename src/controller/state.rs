// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! UI state owned by the upload controller

use std::fmt;
use std::sync::Arc;

use crate::detection::Detection;
use crate::vision::ImageUpload;

/// Where the current analysis cycle stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Nothing selected yet
    Idle,
    /// A file is selected and not yet analyzed
    FileSelected,
    /// A request is in flight
    Analyzing,
    /// The last analysis succeeded (possibly with zero detections)
    ResultsReady,
    /// The last action failed; the message is in `UiState::error`
    Error,
}

impl fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnalysisPhase::Idle => "idle",
            AnalysisPhase::FileSelected => "file-selected",
            AnalysisPhase::Analyzing => "analyzing",
            AnalysisPhase::ResultsReady => "results-ready",
            AnalysisPhase::Error => "error",
        };
        f.write_str(name)
    }
}

/// Everything the UI displays, mutated only by `UploadController`
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub selected: Option<Arc<ImageUpload>>,
    pub detections: Vec<Detection>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set once a response has been accepted for the current selection
    pub analyzed: bool,
    /// Bumped on every selection; responses for older generations are dropped
    pub generation: u64,
}

impl UiState {
    pub fn phase(&self) -> AnalysisPhase {
        if self.loading {
            AnalysisPhase::Analyzing
        } else if self.error.is_some() {
            AnalysisPhase::Error
        } else if self.selected.is_none() {
            AnalysisPhase::Idle
        } else if self.analyzed {
            AnalysisPhase::ResultsReady
        } else {
            AnalysisPhase::FileSelected
        }
    }

    /// Reset for a newly selected file
    pub fn select(&mut self, image: ImageUpload) {
        self.selected = Some(Arc::new(image));
        self.detections.clear();
        self.error = None;
        self.loading = false;
        self.analyzed = false;
        self.generation += 1;
    }
}
