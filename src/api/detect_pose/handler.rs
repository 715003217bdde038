// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pose detection endpoint handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use super::request::DetectPoseRequest;
use super::response::DetectPoseResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::pose::{PoseDetector, PoseResult};
use crate::vision::decode_image_payload;

/// POST /detect_pose - Extract body landmarks from an image
///
/// # Request
/// - `image`: Base64-encoded image or `data:` URI (required)
///
/// # Response
/// - `success`: Whether a pose was found
/// - `landmarks`: 33 landmarks (`id`, `x`, `y`, `z`, `visibility`), or empty
/// - `connections`: Static skeletal edges
/// - `message`: Human-readable outcome
///
/// # Errors
/// - 400 Bad Request: Missing, oversized or undecodable image
/// - 500 Internal Server Error: Detector failed
pub async fn detect_pose_handler(
    State(state): State<AppState>,
    payload: Result<Json<DetectPoseRequest>, JsonRejection>,
) -> Result<Json<DetectPoseResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected pose request body: {}", e.body_text());
        ApiError::from(e)
    })?;

    let image_data = request.into_image().map_err(|e| {
        warn!("Pose request validation failed: {}", e);
        e
    })?;

    // Decoding and detection are CPU-bound; keep both off the async workers
    let detector = state.detector.clone();
    let started = Instant::now();
    let result =
        tokio::task::spawn_blocking(move || decode_and_detect(detector.as_ref(), &image_data))
            .await
            .map_err(|e| {
                error!("Pose detection task failed: {}", e);
                ApiError::DetectionFailure(e.to_string())
            })??;

    let elapsed_ms = started.elapsed().as_millis();
    match &result {
        PoseResult::Detected(pose) => {
            info!(
                "Pose detected in {}ms (mean visibility {:.2})",
                elapsed_ms,
                pose.mean_visibility()
            );
            if let Some(weakest) = pose.least_visible() {
                debug!(
                    "Least visible landmark: {} ({:.2})",
                    weakest.name(),
                    weakest.visibility
                );
            }
        }
        PoseResult::NoPose => info!("No pose detected ({}ms)", elapsed_ms),
    }

    Ok(Json(DetectPoseResponse::from_result(result)))
}

/// Decode the payload and run the detector on it. Runs on the blocking pool.
fn decode_and_detect(
    detector: &dyn PoseDetector,
    image_data: &str,
) -> Result<PoseResult, ApiError> {
    let (image, image_info) = decode_image_payload(image_data).map_err(|e| {
        warn!("Failed to decode image: {}", e);
        ApiError::from(e)
    })?;

    debug!(
        "Decoded image: {}x{}, {} bytes ({:?})",
        image_info.width, image_info.height, image_info.size_bytes, image_info.format
    );

    detector.detect(&image).map_err(|e| {
        error!("Pose detection failed: {:#}", e);
        ApiError::DetectionFailure(format!("{:#}", e))
    })
}
