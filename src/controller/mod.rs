// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Upload controller: UI state and the select/analyze cycle

pub mod state;
pub mod upload_controller;

pub use state::{AnalysisPhase, UiState};
pub use upload_controller::{
    ControllerError, ControllerView, ImagePanel, UploadController, NO_IMAGE_MESSAGE,
};
