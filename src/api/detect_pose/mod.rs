// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pose detection endpoint module
//!
//! Provides POST /detect_pose for extracting body landmarks from images.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::detect_pose_handler;
pub use request::DetectPoseRequest;
pub use response::DetectPoseResponse;
