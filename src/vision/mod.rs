// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image input handling
//!
//! This module provides:
//! - Format sniffing and decoding of selected certificate images
//! - The `ImageUpload` handle shared by the controller and the client

pub mod image_utils;
pub mod upload;

pub use image_utils::{decode_image_bytes, detect_format, ImageError, ImageInfo};
pub use upload::ImageUpload;
