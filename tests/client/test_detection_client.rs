// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! DetectionClient against an in-process detection service

use axum::http::StatusCode;
use serde_json::json;

use crate::support::{covid_success, white_png, white_upload, MockDetectionService, PredictReply};
use yellowcert_client::client::{DetectionClient, DetectionError, DetectionService, FILE_FIELD};
use yellowcert_client::{BoundingBox, CertificateClass, ClientConfig, ImageUpload};

fn client_for(service: &MockDetectionService) -> DetectionClient {
    DetectionClient::new(&ClientConfig::new(service.base_url.clone())).unwrap()
}

#[tokio::test]
async fn test_detect_success() {
    let service = MockDetectionService::start(covid_success()).await;
    let client = client_for(&service);

    let detections = client
        .detect(&white_upload("cert.png", 300, 300))
        .await
        .unwrap();

    assert_eq!(detections.len(), 1);
    assert_eq!(detections[0].class, CertificateClass::Covid);
    assert!((detections[0].confidence - 0.93).abs() < 1e-9);
    assert_eq!(detections[0].bbox, BoundingBox::new(10.0, 20.0, 110.0, 220.0));
}

#[tokio::test]
async fn test_detect_sends_single_file_field() {
    let service = MockDetectionService::start(covid_success()).await;
    let client = client_for(&service);
    let bytes = white_png(12, 8);
    let upload = ImageUpload::from_bytes("scan.png", bytes.clone()).unwrap();

    client.detect(&upload).await.unwrap();

    let uploads = service.uploads();
    assert_eq!(uploads.len(), 1, "exactly one request");
    let fields = &uploads[0];
    assert_eq!(fields.len(), 1, "exactly one multipart field");
    assert_eq!(fields[0].name.as_deref(), Some(FILE_FIELD));
    assert_eq!(fields[0].file_name.as_deref(), Some("scan.png"));
    assert_eq!(fields[0].content_type.as_deref(), Some("image/png"));
    assert_eq!(fields[0].len, bytes.len());
}

#[tokio::test]
async fn test_detect_trailing_slash_base_url() {
    let service = MockDetectionService::start(covid_success()).await;
    let config = ClientConfig::new(format!("{}/", service.base_url));
    let client = DetectionClient::new(&config).unwrap();

    let detections = client
        .detect(&white_upload("cert.png", 4, 4))
        .await
        .unwrap();
    assert_eq!(detections.len(), 1);
}

#[tokio::test]
async fn test_detect_success_false() {
    let service =
        MockDetectionService::start(PredictReply::Json(StatusCode::OK, json!({"success": false})))
            .await;
    let client = client_for(&service);

    let err = client
        .detect(&white_upload("cert.png", 4, 4))
        .await
        .unwrap_err();
    assert_eq!(err, DetectionError::Rejected);
    assert_eq!(err.user_message(), "Detection failed");
}

#[tokio::test]
async fn test_detect_server_error_message() {
    let service = MockDetectionService::start(PredictReply::Json(
        StatusCode::BAD_REQUEST,
        json!({"success": false, "error": "Invalid image file. Please upload a valid image."}),
    ))
    .await;
    let client = client_for(&service);

    let err = client
        .detect(&white_upload("cert.png", 4, 4))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        DetectionError::Server {
            status: 400,
            message: "Invalid image file. Please upload a valid image.".to_string()
        }
    );
    assert_eq!(
        err.user_message(),
        "Invalid image file. Please upload a valid image."
    );
}

#[tokio::test]
async fn test_detect_server_error_without_body() {
    let service = MockDetectionService::start(PredictReply::Empty(StatusCode::BAD_GATEWAY)).await;
    let client = client_for(&service);

    let err = client
        .detect(&white_upload("cert.png", 4, 4))
        .await
        .unwrap_err();
    assert_eq!(err, DetectionError::Status(502));
    assert_eq!(err.user_message(), "Failed to connect to server");
}

#[tokio::test]
async fn test_detect_non_json_success_body() {
    let service =
        MockDetectionService::start(PredictReply::Text(StatusCode::OK, "ok".to_string())).await;
    let client = client_for(&service);

    let err = client
        .detect(&white_upload("cert.png", 4, 4))
        .await
        .unwrap_err();
    assert!(matches!(err, DetectionError::InvalidResponse(_)));
    assert_eq!(err.user_message(), "Detection failed");
}

#[tokio::test]
async fn test_detect_unreachable_service() {
    let client = DetectionClient::new(&ClientConfig::new("http://127.0.0.1:59997")).unwrap();

    let err = client
        .detect(&white_upload("cert.png", 4, 4))
        .await
        .unwrap_err();
    assert!(matches!(err, DetectionError::Connectivity(_)));
    let message = err.user_message();
    assert!(!message.is_empty());
    assert_eq!(message, "Failed to connect to server");
}

#[tokio::test]
async fn test_health_reports_status() {
    let service = MockDetectionService::start(covid_success()).await;
    let client = client_for(&service);

    let health = client.health().await.unwrap();
    assert_eq!(health.status.as_deref(), Some("running"));
    assert_eq!(health.version.as_deref(), Some("1.0.0"));
    assert_eq!(health.model_loaded, Some(true));
}

#[tokio::test]
async fn test_health_opaque_body() {
    let service = MockDetectionService::start_with_health(
        covid_success(),
        PredictReply::Text(StatusCode::OK, "alive".to_string()),
    )
    .await;
    let client = client_for(&service);

    let health = client.health().await.unwrap();
    assert!(health.status.is_none());
}

#[tokio::test]
async fn test_health_failure_status() {
    let service = MockDetectionService::start_with_health(
        covid_success(),
        PredictReply::Empty(StatusCode::SERVICE_UNAVAILABLE),
    )
    .await;
    let client = client_for(&service);

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, DetectionError::HealthCheck(_)));
    assert_eq!(err.user_message(), "Failed to connect to API");
}

#[tokio::test]
async fn test_health_does_not_call_predict() {
    let service = MockDetectionService::start(covid_success()).await;
    let client = client_for(&service);

    client.health().await.unwrap();
    assert!(service.uploads().is_empty());
}
