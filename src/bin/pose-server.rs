// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Parser;
use pose_landmark_api::{
    api::{start_server, AppState},
    cli::ServeArgs,
    pose::{BlazePoseModel, PoseDetector},
    version,
};
use std::sync::Arc;

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let args = ServeArgs::parse();
    let server_config = args.server_config();
    let detector_config = args.detector_config();

    println!("🚀 {} - Production Server", version::get_version_string());
    println!("{}", "=".repeat(50));
    println!("📍 Server address: http://{}", server_config.bind_address());
    println!("🧵 Worker threads: {}", server_config.threads);
    println!("🧠 Model complexity: {}", detector_config.complexity);
    println!("🧩 Features: {}", version::FEATURES.join(", "));
    println!("🌐 Access at: http://localhost:{}", server_config.port);
    println!("{}", "=".repeat(50));

    // Async workers accept connections; the blocking pool runs detections,
    // one per thread.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(server_config.threads)
        .max_blocking_threads(server_config.threads)
        .thread_name("pose-server")
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    let result = runtime.block_on(async {
        let detector = BlazePoseModel::new(&detector_config).await?;
        println!("📦 Detector: {} ({})", detector.name(), detector.version());
        println!("✅ Server started, press Ctrl+C to stop");

        start_server(&server_config, AppState::new(Arc::new(detector))).await
    });

    match result {
        Ok(()) => {
            println!("\n🛑 Server stopped");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Startup failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
