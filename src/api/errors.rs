// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::vision::ImageError;

/// Message attached to every failed detection response
pub const DETECTION_FAILED_MESSAGE: &str = "Pose detection failed";

/// JSON body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Body is not a JSON object with a non-empty `image` field
    MissingInput,
    /// `image` could not be decoded into a picture
    InvalidImage(String),
    /// The detector failed; carries the underlying error text unchanged
    DetectionFailure(String),
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        let error = match self {
            ApiError::MissingInput => "No image data".to_string(),
            ApiError::InvalidImage(detail) => format!("Invalid image: {}", detail),
            ApiError::DetectionFailure(msg) => msg.clone(),
        };

        ErrorResponse {
            success: false,
            error,
            message: DETECTION_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MissingInput | ApiError::InvalidImage(_) => 400,
            ApiError::DetectionFailure(_) => 500,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingInput => write!(f, "Missing input: no image data"),
            ApiError::InvalidImage(detail) => write!(f, "Invalid image: {}", detail),
            ApiError::DetectionFailure(msg) => write!(f, "Detection failure: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ImageError> for ApiError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::EmptyData => ApiError::MissingInput,
            other => ApiError::InvalidImage(other.to_string()),
        }
    }
}

/// A body that is not a JSON object counts as missing input. A body that
/// could not be read (over the size limit) or whose `image` has the wrong
/// type is an invalid image.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::BytesRejection(e) => ApiError::InvalidImage(format!(
                "Image data is too large or unreadable ({})",
                e.body_text()
            )),
            JsonRejection::JsonDataError(e) => ApiError::InvalidImage(e.body_text()),
            _ => ApiError::MissingInput,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.to_response())).into_response()
    }
}
