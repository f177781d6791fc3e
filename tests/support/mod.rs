// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared helpers: sample images and an in-process detection service
#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::Multipart;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use serde_json::{json, Value};
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use yellowcert_client::ImageUpload;

/// PNG bytes of a white image
pub fn white_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

pub fn white_upload(name: &str, width: u32, height: u32) -> ImageUpload {
    ImageUpload::from_bytes(name, white_png(width, height)).unwrap()
}

/// One multipart field as the mock service saw it
#[derive(Debug, Clone)]
pub struct UploadedField {
    pub name: Option<String>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub len: usize,
}

/// Canned `/predict` behaviour
#[derive(Clone)]
pub enum PredictReply {
    Json(StatusCode, Value),
    Text(StatusCode, String),
    Empty(StatusCode),
}

#[derive(Clone)]
struct MockState {
    reply: PredictReply,
    health: PredictReply,
    uploads: Arc<Mutex<Vec<Vec<UploadedField>>>>,
}

/// A running mock detection service
pub struct MockDetectionService {
    pub base_url: String,
    uploads: Arc<Mutex<Vec<Vec<UploadedField>>>>,
}

impl MockDetectionService {
    pub async fn start(reply: PredictReply) -> Self {
        Self::start_with_health(
            reply,
            PredictReply::Json(
                StatusCode::OK,
                json!({
                    "message": "YellowCert Detection API",
                    "status": "running",
                    "version": "1.0.0",
                    "model_loaded": true
                }),
            ),
        )
        .await
    }

    pub async fn start_with_health(reply: PredictReply, health: PredictReply) -> Self {
        let uploads = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply,
            health,
            uploads: uploads.clone(),
        };
        let router = Router::new()
            .route("/", get(health_handler))
            .route("/predict", post(predict_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            uploads,
        }
    }

    /// Fields of every request received so far
    pub fn uploads(&self) -> Vec<Vec<UploadedField>> {
        self.uploads.lock().unwrap().clone()
    }
}

fn into_response(reply: PredictReply) -> Response {
    match reply {
        PredictReply::Json(status, body) => (status, Json(body)).into_response(),
        PredictReply::Text(status, body) => (status, body).into_response(),
        PredictReply::Empty(status) => status.into_response(),
    }
}

async fn health_handler(State(state): State<MockState>) -> Response {
    into_response(state.health)
}

async fn predict_handler(State(state): State<MockState>, mut multipart: Multipart) -> Response {
    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let len = field.bytes().await.map(|b| b.len()).unwrap_or(0);
        fields.push(UploadedField {
            name,
            file_name,
            content_type,
            len,
        });
    }
    state.uploads.lock().unwrap().push(fields);
    into_response(state.reply)
}

/// The worked example: one covid detection at (10,20)-(110,220)
pub fn covid_success() -> PredictReply {
    PredictReply::Json(
        StatusCode::OK,
        json!({
            "success": true,
            "detections": [{
                "class": "covid",
                "confidence": 0.93,
                "bbox": {"x1": 10, "y1": 20, "x2": 110, "y2": 220}
            }],
            "count": 1,
            "image_size": {"width": 300, "height": 300}
        }),
    )
}
