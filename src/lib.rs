// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod pose;
pub mod version;
pub mod vision;

pub use api::{create_app, start_server, AppState};
pub use config::{DetectorConfig, ModelComplexity, ServerConfig};
pub use pose::{BlazePoseModel, Landmark, PoseDetector, PoseResult, POSE_CONNECTIONS};
