// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::http_server::AppState;
use crate::version::API_VERSION;

pub const SERVICE_NAME: &str = "Pose Landmark API";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HomeResponse {
    pub message: String,
    pub status: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    /// Version string reported by the pose detector backend
    pub mediapipe_version: String,
    pub api_version: String,
}

/// GET / - liveness and service info
pub async fn home_handler() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: SERVICE_NAME.to_string(),
        status: "running".to_string(),
        version: API_VERSION.to_string(),
    })
}

/// GET /health - always healthy once the process is serving
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        mediapipe_version: state.detector.version(),
        api_version: API_VERSION.to_string(),
    })
}
