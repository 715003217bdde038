// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET / and GET /health

use super::helpers::*;
use axum::http::StatusCode;
use pose_landmark_api::api::{HealthResponse, HomeResponse};
use pose_landmark_api::version::API_VERSION;

#[tokio::test]
async fn test_home_reports_service_info() {
    let (status, body) = send(
        app_with(TestDetector::new(Behaviour::NoPose)),
        get_request("/"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let home: HomeResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(home.message, "Pose Landmark API");
    assert_eq!(home.status, "running");
    assert_eq!(home.version, API_VERSION);
}

#[tokio::test]
async fn test_health_reports_versions() {
    let detector = TestDetector::new(Behaviour::Fail);
    let (status, body) = send(app_with(detector.clone()), get_request("/health")).await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.mediapipe_version, TEST_DETECTOR_VERSION);
    assert_eq!(health.api_version, API_VERSION);
    // Health never runs a detection
    assert_eq!(detector.calls(), 0);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, _) = send(
        app_with(TestDetector::new(Behaviour::NoPose)),
        get_request("/v1/does-not-exist"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
