// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Parser;
use std::path::PathBuf;

use crate::config::{DetectorConfig, ModelComplexity, ServerConfig};

/// Pose Landmark API production server
#[derive(Parser, Debug, Clone)]
#[command(name = "pose-server")]
#[command(version)]
#[command(about = "Serve pose landmark detection over HTTP", long_about = None)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Worker threads (also the number of concurrent detections)
    #[arg(long, env = "THREADS", default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    pub threads: u16,

    /// Directory holding pose_landmark_{lite,full,heavy}.onnx
    #[arg(long, env = "POSE_MODEL_DIR", default_value = "./models")]
    pub model_dir: PathBuf,

    /// Explicit model file, overrides --model-dir and --model-complexity
    #[arg(long, env = "POSE_MODEL_PATH")]
    pub model_path: Option<PathBuf>,

    /// 0 = lite, 1 = full, 2 = heavy
    #[arg(long, env = "MODEL_COMPLEXITY", default_value = "1")]
    pub model_complexity: ModelComplexity,

    /// Minimum pose presence score (0.0-1.0)
    #[arg(long, env = "MIN_DETECTION_CONFIDENCE", default_value_t = 0.5)]
    pub min_detection_confidence: f32,
}

impl ServeArgs {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            threads: self.threads as usize,
        }
    }

    pub fn detector_config(&self) -> DetectorConfig {
        DetectorConfig {
            model_dir: self.model_dir.clone(),
            model_path: self.model_path.clone(),
            complexity: self.model_complexity,
            min_detection_confidence: self.min_detection_confidence.clamp(0.0, 1.0),
            ..DetectorConfig::default()
        }
    }
}
