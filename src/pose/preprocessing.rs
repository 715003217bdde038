// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image preprocessing for the pose landmark network

use image::{imageops, imageops::FilterType, Rgb, RgbImage};
use ndarray::Array4;

/// Side length of the square landmark model input
pub const POSE_INPUT_SIZE: u32 = 256;

/// Where the original image sits inside the square model input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    /// Original image width in pixels
    pub orig_width: u32,
    /// Original image height in pixels
    pub orig_height: u32,
    /// Scale applied to the original image
    pub scale: f32,
    /// Horizontal padding on the left, in model pixels
    pub pad_x: f32,
    /// Vertical padding on top, in model pixels
    pub pad_y: f32,
}

impl Letterbox {
    /// Compute the letterbox for an image of the given size
    pub fn fit(orig_width: u32, orig_height: u32, target_size: u32) -> Self {
        if orig_width == 0 || orig_height == 0 {
            return Self {
                orig_width,
                orig_height,
                scale: 1.0,
                pad_x: 0.0,
                pad_y: 0.0,
            };
        }

        let scale = (target_size as f32 / orig_width as f32)
            .min(target_size as f32 / orig_height as f32);
        let new_w = (orig_width as f32 * scale).round();
        let new_h = (orig_height as f32 * scale).round();

        Self {
            orig_width,
            orig_height,
            scale,
            pad_x: ((target_size as f32 - new_w) / 2.0).floor(),
            pad_y: ((target_size as f32 - new_h) / 2.0).floor(),
        }
    }

    /// Map a point in model pixels back to the original image, normalized
    /// to 0.0-1.0 on each axis. Depth uses the horizontal scale.
    pub fn to_normalized(&self, x: f32, y: f32, z: f32) -> (f32, f32, f32) {
        let content_w = (self.orig_width as f32 * self.scale).max(1.0);
        let content_h = (self.orig_height as f32 * self.scale).max(1.0);

        let nx = ((x - self.pad_x) / content_w).clamp(0.0, 1.0);
        let ny = ((y - self.pad_y) / content_h).clamp(0.0, 1.0);
        let nz = z / content_w;

        (nx, ny, nz)
    }
}

/// Scale an image into a square canvas, preserving aspect ratio and
/// padding the remainder with black.
pub fn letterbox_image(image: &RgbImage, target_size: u32) -> (RgbImage, Letterbox) {
    let (orig_w, orig_h) = image.dimensions();
    let letterbox = Letterbox::fit(orig_w, orig_h, target_size);

    let mut canvas = RgbImage::from_pixel(target_size, target_size, Rgb([0, 0, 0]));
    if orig_w == 0 || orig_h == 0 {
        return (canvas, letterbox);
    }

    let new_w = ((orig_w as f32 * letterbox.scale).round() as u32).clamp(1, target_size);
    let new_h = ((orig_h as f32 * letterbox.scale).round() as u32).clamp(1, target_size);
    let resized = imageops::resize(image, new_w, new_h, FilterType::Triangle);

    imageops::overlay(
        &mut canvas,
        &resized,
        letterbox.pad_x as i64,
        letterbox.pad_y as i64,
    );

    (canvas, letterbox)
}

/// Preprocess an image for the landmark model
///
/// Steps:
/// 1. Letterbox into POSE_INPUT_SIZE x POSE_INPUT_SIZE
/// 2. Scale pixel values to 0.0-1.0
/// 3. Lay out as NHWC tensor [1, H, W, 3]
pub fn preprocess_for_landmarks(image: &RgbImage) -> (Array4<f32>, Letterbox) {
    let (canvas, letterbox) = letterbox_image(image, POSE_INPUT_SIZE);
    let size = POSE_INPUT_SIZE as usize;

    let mut tensor = Array4::zeros((1, size, size, 3));
    for (x, y, pixel) in canvas.enumerate_pixels() {
        for c in 0..3 {
            tensor[[0, y as usize, x as usize, c]] = pixel[c] as f32 / 255.0;
        }
    }

    (tensor, letterbox)
}
