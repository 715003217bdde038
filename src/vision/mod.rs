// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image payload handling
//!
//! Turns the `image` field of a request (raw base64 or a data URI) into an
//! 8-bit RGB image ready for pose detection.

pub mod image_utils;

pub use image_utils::{
    decode_image_bytes, decode_image_payload, detect_format, strip_data_uri, ImageError,
    ImageInfo, MAX_IMAGE_SIZE,
};
