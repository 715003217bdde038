// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pose detector contract

use anyhow::Result;
use image::RgbImage;

use super::landmarks::PoseResult;

/// A pose detector turns one RGB image into zero or one pose.
///
/// One instance is built at startup and shared by every request through
/// `Arc<dyn PoseDetector>`. Handlers call it without any lock of their own,
/// so implementations must synchronize internally if they need to.
#[cfg_attr(test, mockall::automock)]
pub trait PoseDetector: Send + Sync {
    /// Run detection on an image.
    ///
    /// `Ok(PoseResult::NoPose)` is a normal outcome. `Err` means detection
    /// itself failed; its message is returned to the client verbatim.
    fn detect(&self, image: &RgbImage) -> Result<PoseResult>;

    /// Backend version reported by `/health`
    fn version(&self) -> String;

    /// Short backend name for startup logs
    fn name(&self) -> String;
}
