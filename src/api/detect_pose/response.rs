// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pose detection response types

use serde::{Deserialize, Serialize};

use crate::pose::{Landmark, PoseResult, POSE_CONNECTIONS};

pub const POSE_DETECTED_MESSAGE: &str = "Pose detected successfully";
pub const NO_POSE_MESSAGE: &str = "No pose detected";

/// Response from POST /detect_pose
///
/// `success: false` with an empty landmark list is a valid answer meaning
/// the image holds no detectable person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectPoseResponse {
    pub success: bool,
    /// 33 landmarks ordered by id, or empty
    pub landmarks: Vec<Landmark>,
    /// Static skeletal edges, identical in every response
    pub connections: Vec<[u8; 2]>,
    pub message: String,
}

impl DetectPoseResponse {
    pub fn from_result(result: PoseResult) -> Self {
        match result {
            PoseResult::Detected(pose) => Self {
                success: true,
                landmarks: pose.into_landmarks(),
                connections: POSE_CONNECTIONS.to_vec(),
                message: POSE_DETECTED_MESSAGE.to_string(),
            },
            PoseResult::NoPose => Self {
                success: false,
                landmarks: Vec::new(),
                connections: POSE_CONNECTIONS.to_vec(),
                message: NO_POSE_MESSAGE.to_string(),
            },
        }
    }
}
