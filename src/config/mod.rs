// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Runtime configuration for the server and the pose detector

pub mod detector;
pub mod server;

pub use detector::{DetectorConfig, ModelComplexity};
pub use server::ServerConfig;
