// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod detect_pose;
pub mod errors;
pub mod handlers;
pub mod http_server;

pub use detect_pose::{detect_pose_handler, DetectPoseRequest, DetectPoseResponse};
pub use errors::{ApiError, ErrorResponse};
pub use handlers::{HealthResponse, HomeResponse};
pub use http_server::{create_app, start_server, AppState, MAX_BODY_SIZE};
