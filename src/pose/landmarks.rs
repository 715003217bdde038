// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Landmark and pose result types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of body landmarks in a detected pose
pub const LANDMARK_COUNT: usize = 33;

/// Skeletal edges between landmark ids, as served to clients.
///
/// The table is an opaque constant: `[11, 12]` appears twice and is kept
/// that way so responses match what existing clients already render.
pub const POSE_CONNECTIONS: [[u8; 2]; 35] = [
    // Face
    [0, 1], [1, 2], [2, 3], [3, 7], [0, 4], [4, 5], [5, 6], [6, 8], [9, 10], [11, 12],
    // Torso
    [11, 12], [11, 23], [12, 24], [23, 24],
    // Left arm
    [11, 13], [13, 15], [15, 17], [15, 19], [15, 21],
    // Right arm
    [12, 14], [14, 16], [16, 18], [16, 20], [16, 22],
    // Left leg
    [23, 25], [25, 27], [27, 29], [29, 31],
    // Right leg
    [24, 26], [26, 28], [28, 30], [30, 32],
    // Hands
    [19, 20], [21, 22],
    // Feet
    [31, 32],
];

/// Landmark names, indexed by id
pub const LANDMARK_NAMES: [&str; LANDMARK_COUNT] = [
    "nose",
    "left_eye_inner",
    "left_eye",
    "left_eye_outer",
    "right_eye_inner",
    "right_eye",
    "right_eye_outer",
    "left_ear",
    "right_ear",
    "mouth_left",
    "mouth_right",
    "left_shoulder",
    "right_shoulder",
    "left_elbow",
    "right_elbow",
    "left_wrist",
    "right_wrist",
    "left_pinky",
    "right_pinky",
    "left_index",
    "right_index",
    "left_thumb",
    "right_thumb",
    "left_hip",
    "right_hip",
    "left_knee",
    "right_knee",
    "left_ankle",
    "right_ankle",
    "left_heel",
    "right_heel",
    "left_foot_index",
    "right_foot_index",
];

/// One tracked body point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Landmark id (0-32)
    pub id: u8,
    /// Horizontal position, normalized to image width (0.0-1.0)
    pub x: f32,
    /// Vertical position, normalized to image height (0.0-1.0)
    pub y: f32,
    /// Depth relative to the hips, same scale as `x`
    pub z: f32,
    /// Confidence that the point is visible (0.0-1.0)
    pub visibility: f32,
}

impl Landmark {
    /// Name of this landmark (e.g. "left_wrist")
    pub fn name(&self) -> &'static str {
        LANDMARK_NAMES
            .get(self.id as usize)
            .copied()
            .unwrap_or("unknown")
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PoseError {
    #[error("expected 33 landmarks, got {0}")]
    WrongLandmarkCount(usize),

    #[error("landmark at position {position} has id {id}")]
    MisorderedLandmark { position: usize, id: u8 },
}

/// A full body pose: exactly [`LANDMARK_COUNT`] landmarks ordered by id
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    landmarks: Vec<Landmark>,
}

impl Pose {
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self, PoseError> {
        if landmarks.len() != LANDMARK_COUNT {
            return Err(PoseError::WrongLandmarkCount(landmarks.len()));
        }

        if let Some((position, landmark)) = landmarks
            .iter()
            .enumerate()
            .find(|(i, l)| l.id as usize != *i)
        {
            return Err(PoseError::MisorderedLandmark {
                position,
                id: landmark.id,
            });
        }

        Ok(Self { landmarks })
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn into_landmarks(self) -> Vec<Landmark> {
        self.landmarks
    }

    /// Mean visibility over all landmarks
    pub fn mean_visibility(&self) -> f32 {
        self.landmarks.iter().map(|l| l.visibility).sum::<f32>() / LANDMARK_COUNT as f32
    }

    /// Landmark with the lowest visibility
    pub fn least_visible(&self) -> Option<&Landmark> {
        self.landmarks
            .iter()
            .min_by(|a, b| a.visibility.total_cmp(&b.visibility))
    }
}

/// Outcome of running the detector on one image
#[derive(Debug, Clone, PartialEq)]
pub enum PoseResult {
    Detected(Pose),
    NoPose,
}

impl PoseResult {
    pub fn is_detected(&self) -> bool {
        matches!(self, PoseResult::Detected(_))
    }
}
