// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! A selected certificate image, ready to preview and upload

use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;

use super::image_utils::{decode_image_bytes, read_image_file, ImageError, ImageInfo};

/// File chosen by the user, with its decoded preview
#[derive(Debug, Clone)]
pub struct ImageUpload {
    file_name: String,
    bytes: Vec<u8>,
    preview: DynamicImage,
    info: ImageInfo,
}

impl ImageUpload {
    /// Build an upload from raw file contents
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ImageError> {
        let (preview, info) = decode_image_bytes(&bytes)?;
        Ok(Self {
            file_name: file_name.into(),
            bytes,
            preview,
            info,
        })
    }

    /// Read and decode an image file from disk
    pub fn from_path(path: &Path) -> Result<Self, ImageError> {
        let (file_name, bytes) = read_image_file(path)?;
        Self::from_bytes(file_name, bytes)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Original file contents, sent untouched to the service
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> ImageFormat {
        self.info.format
    }

    pub fn mime_type(&self) -> &'static str {
        self.info.format.to_mime_type()
    }

    pub fn info(&self) -> &ImageInfo {
        &self.info
    }

    /// Natural (unscaled) pixel dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.info.width, self.info.height)
    }

    pub fn preview(&self) -> &DynamicImage {
        &self.preview
    }

    pub fn preview_rgba(&self) -> RgbaImage {
        self.preview.to_rgba8()
    }
}
