// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pose detection
//!
//! This module provides:
//! - The `PoseDetector` contract consumed by the HTTP layer
//! - Landmark types and the static skeletal connectivity table
//! - A BlazePose landmark backend on ONNX Runtime (CPU only)

pub mod detector;
pub mod landmarks;
pub mod onnx_model;
pub mod preprocessing;

pub use detector::PoseDetector;
pub use landmarks::{
    Landmark, Pose, PoseError, PoseResult, LANDMARK_COUNT, LANDMARK_NAMES, POSE_CONNECTIONS,
};
pub use onnx_model::BlazePoseModel;
pub use preprocessing::{preprocess_for_landmarks, Letterbox, POSE_INPUT_SIZE};
