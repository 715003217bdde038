// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Landmark network variant. Heavier variants are slower and more accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelComplexity {
    Lite,
    #[default]
    Full,
    Heavy,
}

impl ModelComplexity {
    /// ONNX file name for this variant
    pub fn model_file_name(&self) -> &'static str {
        match self {
            ModelComplexity::Lite => "pose_landmark_lite.onnx",
            ModelComplexity::Full => "pose_landmark_full.onnx",
            ModelComplexity::Heavy => "pose_landmark_heavy.onnx",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelComplexity::Lite => "lite",
            ModelComplexity::Full => "full",
            ModelComplexity::Heavy => "heavy",
        }
    }
}

impl fmt::Display for ModelComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelComplexity {
    type Err = String;

    /// Accepts `0`/`1`/`2` or `lite`/`full`/`heavy`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "lite" => Ok(ModelComplexity::Lite),
            "1" | "full" => Ok(ModelComplexity::Full),
            "2" | "heavy" => Ok(ModelComplexity::Heavy),
            other => Err(format!(
                "unsupported model complexity '{}', expected 0, 1 or 2",
                other
            )),
        }
    }
}

/// Configuration for loading the pose landmark model
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    /// Directory searched for `pose_landmark_{lite,full,heavy}.onnx`
    pub model_dir: PathBuf,
    /// Explicit model file; overrides `model_dir` + `complexity`
    pub model_path: Option<PathBuf>,
    pub complexity: ModelComplexity,
    /// Minimum pose presence score to report a pose (0.0-1.0)
    pub min_detection_confidence: f32,
    /// ONNX Runtime intra-op threads per inference
    pub intra_threads: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("./models"),
            model_path: None,
            complexity: ModelComplexity::Full,
            min_detection_confidence: 0.5,
            intra_threads: 4,
        }
    }
}

impl DetectorConfig {
    /// Read `POSE_MODEL_DIR`, `POSE_MODEL_PATH`, `MODEL_COMPLEXITY` and
    /// `MIN_DETECTION_CONFIDENCE`, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            model_dir: env::var("POSE_MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_dir),
            model_path: env::var("POSE_MODEL_PATH").ok().map(PathBuf::from),
            complexity: env::var("MODEL_COMPLEXITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.complexity),
            min_detection_confidence: env::var("MIN_DETECTION_CONFIDENCE")
                .ok()
                .and_then(|v| v.parse::<f32>().ok())
                .map(|v| v.clamp(0.0, 1.0))
                .unwrap_or(defaults.min_detection_confidence),
            intra_threads: defaults.intra_threads,
        }
    }

    /// Path of the ONNX file to load
    pub fn resolved_model_path(&self) -> PathBuf {
        self.model_path
            .clone()
            .unwrap_or_else(|| self.model_dir.join(self.complexity.model_file_name()))
    }
}
