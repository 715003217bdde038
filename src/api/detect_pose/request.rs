// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pose detection request types and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Request body for POST /detect_pose
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectPoseRequest {
    /// Base64-encoded image, optionally as a `data:` URI
    #[serde(default)]
    pub image: Option<String>,
}

impl DetectPoseRequest {
    /// Take the image payload, or `MissingInput` if it is absent or blank
    pub fn into_image(self) -> Result<String, ApiError> {
        match self.image {
            Some(image) if !image.trim().is_empty() => Ok(image),
            _ => Err(ApiError::MissingInput),
        }
    }
}
