// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use pose_landmark_api::{
    api::{start_server, AppState},
    config::{DetectorConfig, ServerConfig},
    pose::{BlazePoseModel, PoseDetector},
    version,
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting {} (development server)...", version::get_version_string());
    println!("📦 BUILD VERSION: {}\n", version::VERSION);

    let detector_config = DetectorConfig::from_env();
    let detector = BlazePoseModel::new(&detector_config).await?;

    println!("📦 Detector: {}", detector.name());
    println!("📦 Detector version: {}", detector.version());

    let server_config = ServerConfig::from_env();
    println!("🌐 Listening on: http://localhost:{}", server_config.port);
    println!();

    let state = AppState::new(Arc::new(detector));
    start_server(&server_config, state).await
}
