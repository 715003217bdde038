// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! BlazePose landmark model running on ONNX Runtime
//!
//! The network takes a 256x256 RGB image and returns 39 points, of which the
//! first 33 are body landmarks, plus a pose presence score.

use anyhow::{Context, Result};
use image::RgbImage;
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use super::detector::PoseDetector;
use super::landmarks::{Landmark, Pose, PoseResult, LANDMARK_COUNT};
use super::preprocessing::{preprocess_for_landmarks, Letterbox};
use crate::config::{DetectorConfig, ModelComplexity};
use crate::version::VERSION_NUMBER;

/// Points emitted by the network (33 body + 6 auxiliary ROI points)
pub const MODEL_POINT_COUNT: usize = 39;

/// Values per point: x, y, z, visibility, presence
pub const VALUES_PER_POINT: usize = 5;

/// BlazePose landmark model
///
/// Runs on CPU only. The session is behind a mutex because inference needs
/// exclusive access to it; concurrent requests queue on that lock.
#[derive(Clone)]
pub struct BlazePoseModel {
    /// ONNX Runtime session (thread-safe)
    session: Arc<Mutex<Session>>,
    /// Model input name
    input_name: String,
    /// Model file the session was built from
    model_path: PathBuf,
    complexity: ModelComplexity,
    /// Presence score below which no pose is reported
    min_detection_confidence: f32,
}

impl std::fmt::Debug for BlazePoseModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlazePoseModel")
            .field("input_name", &self.input_name)
            .field("model_path", &self.model_path)
            .field("complexity", &self.complexity)
            .field("min_detection_confidence", &self.min_detection_confidence)
            .finish_non_exhaustive()
    }
}

impl BlazePoseModel {
    /// Load the landmark model described by `config`
    ///
    /// # Errors
    /// Returns error if:
    /// - Model file not found
    /// - ONNX Runtime initialization fails
    pub async fn new(config: &DetectorConfig) -> Result<Self> {
        let model_path = config.resolved_model_path();

        if !model_path.exists() {
            anyhow::bail!("Pose landmark model not found: {}", model_path.display());
        }

        info!("Loading pose landmark model from {}", model_path.display());

        let session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("Failed to set optimization level")?
            .with_intra_threads(config.intra_threads)
            .context("Failed to set intra threads")?
            .commit_from_file(&model_path)
            .context(format!(
                "Failed to load pose landmark model from {}",
                model_path.display()
            ))?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .unwrap_or_else(|| "input_1".to_string());

        debug!(
            "Pose model loaded - input: {}, outputs: {}",
            input_name,
            session.outputs.len()
        );

        info!(
            "✅ Pose landmark model loaded ({}, CPU-only)",
            config.complexity
        );

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            input_name,
            model_path,
            complexity: config.complexity,
            min_detection_confidence: config.min_detection_confidence,
        })
    }

    /// Run the network and return raw landmark values plus presence score
    fn infer(&self, input: ndarray::Array4<f32>) -> Result<(Vec<f32>, f32)> {
        let mut session = self
            .session
            .lock()
            .map_err(|_| anyhow::anyhow!("Pose model session lock poisoned"))?;

        let input_value = Value::from_array(input).context("Failed to create input tensor")?;

        let outputs = session
            .run(ort::inputs![&self.input_name => input_value])
            .context("Pose inference failed")?;

        let raw_landmarks: Vec<f32> = outputs[0]
            .try_extract_array::<f32>()
            .context("Failed to extract landmark tensor")?
            .iter()
            .copied()
            .collect();

        let presence = outputs[1]
            .try_extract_array::<f32>()
            .context("Failed to extract pose presence tensor")?
            .iter()
            .copied()
            .next()
            .context("Pose presence tensor is empty")?;

        Ok((raw_landmarks, presence))
    }
}

impl PoseDetector for BlazePoseModel {
    fn detect(&self, image: &RgbImage) -> Result<PoseResult> {
        let (input, letterbox) = preprocess_for_landmarks(image);
        let (raw, presence) = self.infer(input)?;

        debug!("Pose presence score: {:.3}", presence);

        decode_landmarks(&raw, presence, &letterbox, self.min_detection_confidence)
    }

    fn version(&self) -> String {
        format!("blazepose-{}-onnx/{}", self.complexity, VERSION_NUMBER)
    }

    fn name(&self) -> String {
        format!("BlazePose ({})", self.model_path.display())
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Turn raw network output into a pose result.
///
/// `raw` holds `MODEL_POINT_COUNT * VALUES_PER_POINT` values in model-input
/// pixels; visibility is a logit. A presence score below `min_confidence`
/// yields `NoPose`. Non-finite presence or body values are an error.
pub fn decode_landmarks(
    raw: &[f32],
    presence: f32,
    letterbox: &Letterbox,
    min_confidence: f32,
) -> Result<PoseResult> {
    if !presence.is_finite() {
        anyhow::bail!("Pose presence score is not finite: {}", presence);
    }

    if !(presence >= min_confidence) {
        return Ok(PoseResult::NoPose);
    }

    let body_len = LANDMARK_COUNT * VALUES_PER_POINT;
    if raw.len() < body_len {
        anyhow::bail!(
            "Unexpected landmark tensor length {}, expected at least {}",
            raw.len(),
            body_len
        );
    }

    if let Some(position) = raw[..body_len].iter().position(|v| !v.is_finite()) {
        anyhow::bail!(
            "Landmark {} has a non-finite value",
            position / VALUES_PER_POINT
        );
    }

    let landmarks = raw
        .chunks_exact(VALUES_PER_POINT)
        .take(LANDMARK_COUNT)
        .enumerate()
        .map(|(id, values)| {
            // values are in model-input pixels
            let (x, y, z) = letterbox.to_normalized(values[0], values[1], values[2]);
            Landmark {
                id: id as u8,
                x,
                y,
                z,
                visibility: sigmoid(values[3]),
            }
        })
        .collect();

    Ok(PoseResult::Detected(Pose::new(landmarks)?))
}
