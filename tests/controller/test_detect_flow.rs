// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Full select -> analyze -> view cycle over HTTP

use axum::http::StatusCode;
use image::Rgba;
use serde_json::json;

use crate::support::{covid_success, white_png, MockDetectionService, PredictReply};
use yellowcert_client::controller::{AnalysisPhase, ImagePanel, UploadController};
use yellowcert_client::{ClientConfig, DetectionClient};

const BLUE: Rgba<u8> = Rgba([0x21, 0x96, 0xF3, 0xFF]);
const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

async fn controller_for(service: &MockDetectionService) -> UploadController<DetectionClient> {
    let client = DetectionClient::new(&ClientConfig::new(service.base_url.clone())).unwrap();
    UploadController::new(client)
}

#[tokio::test]
async fn test_worked_example_overlay() {
    let service = MockDetectionService::start(covid_success()).await;
    let controller = controller_for(&service).await;

    controller
        .select_bytes("cert.png", white_png(300, 300))
        .await
        .unwrap();
    assert_eq!(controller.analyze().await.unwrap(), 1);

    let view = controller.view().await;
    assert_eq!(view.phase, AnalysisPhase::ResultsReady);
    assert_eq!(view.items[0].to_string(), "covid 93%");

    let ImagePanel::Annotated(annotated) = view.panel else {
        panic!("expected an annotated panel");
    };
    assert_eq!(annotated.dimensions(), (300, 300));
    // Box corners (10,20) and (110,220)
    assert_eq!(annotated.get_pixel(10, 120), &BLUE);
    assert_eq!(annotated.get_pixel(110, 120), &BLUE);
    assert_eq!(annotated.get_pixel(60, 220), &BLUE);
    assert_eq!(annotated.get_pixel(60, 20), &BLUE);
    // Inside and outside the box the image is untouched
    assert_eq!(annotated.get_pixel(60, 120), &WHITE);
    assert_eq!(annotated.get_pixel(200, 260), &WHITE);
    // Label background directly above the top-left corner
    assert_eq!(annotated.get_pixel(12, 5), &BLUE);
}

#[tokio::test]
async fn test_empty_detections_keep_plain_preview() {
    let service = MockDetectionService::start(PredictReply::Json(
        StatusCode::OK,
        json!({"success": true, "detections": [], "count": 0}),
    ))
    .await;
    let controller = controller_for(&service).await;

    controller
        .select_bytes("blank.png", white_png(64, 48))
        .await
        .unwrap();
    assert_eq!(controller.analyze().await.unwrap(), 0);

    let view = controller.view().await;
    assert!(view.items.is_empty());
    match view.panel {
        ImagePanel::Preview(preview) => {
            assert_eq!(preview.dimensions(), (64, 48));
            assert!(preview.pixels().all(|p| *p == WHITE));
        }
        other => panic!("expected plain preview, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_surfaces_server_message() {
    let service = MockDetectionService::start(PredictReply::Json(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"success": false, "error": "Prediction failed: CUDA out of memory"}),
    ))
    .await;
    let controller = controller_for(&service).await;

    controller
        .select_bytes("cert.png", white_png(16, 16))
        .await
        .unwrap();
    controller.analyze().await.unwrap_err();

    assert_eq!(
        controller.error().await.as_deref(),
        Some("Prediction failed: CUDA out of memory")
    );
    assert_eq!(controller.phase().await, AnalysisPhase::Error);
}

#[tokio::test]
async fn test_unreachable_service_surfaces_connectivity_message() {
    let client = DetectionClient::new(&ClientConfig::new("http://127.0.0.1:59996")).unwrap();
    let controller = UploadController::new(client);

    controller
        .select_bytes("cert.png", white_png(16, 16))
        .await
        .unwrap();
    controller.analyze().await.unwrap_err();

    assert_eq!(
        controller.error().await.as_deref(),
        Some("Failed to connect to server")
    );
    assert!(!controller.is_loading().await);
}

#[tokio::test]
async fn test_select_path_reads_file_from_disk() {
    let service = MockDetectionService::start(covid_success()).await;
    let controller = controller_for(&service).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vaccination-card.png");
    std::fs::write(&path, white_png(300, 300)).unwrap();

    controller.select_path(&path).await.unwrap();
    controller.analyze().await.unwrap();

    let uploads = service.uploads();
    assert_eq!(
        uploads[0][0].file_name.as_deref(),
        Some("vaccination-card.png")
    );
}
