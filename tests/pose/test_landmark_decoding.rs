// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Raw landmark tensors to normalized poses

use image::{Rgb, RgbImage};
use pose_landmark_api::pose::{
    onnx_model::{decode_landmarks, MODEL_POINT_COUNT, VALUES_PER_POINT},
    preprocess_for_landmarks, Letterbox, PoseResult, LANDMARK_COUNT, POSE_INPUT_SIZE,
};

fn tensor_with(points: impl Fn(usize) -> [f32; 5]) -> Vec<f32> {
    (0..MODEL_POINT_COUNT).flat_map(points).collect()
}

#[test]
fn test_out_of_frame_points_are_clamped() {
    let letterbox = Letterbox::fit(640, 480, POSE_INPUT_SIZE);
    let raw = tensor_with(|i| {
        if i % 2 == 0 {
            [-500.0, -500.0, 10.0, 20.0, 0.0]
        } else {
            [9_000.0, 9_000.0, -10.0, -20.0, 0.0]
        }
    });

    let PoseResult::Detected(pose) = decode_landmarks(&raw, 0.99, &letterbox, 0.5).unwrap() else {
        panic!("expected a pose");
    };

    for landmark in pose.landmarks() {
        assert!((0.0..=1.0).contains(&landmark.x));
        assert!((0.0..=1.0).contains(&landmark.y));
        assert!((0.0..=1.0).contains(&landmark.visibility));
        if landmark.id % 2 == 0 {
            assert_eq!(landmark.x, 0.0);
            assert!(landmark.visibility > 0.99);
        } else {
            assert_eq!(landmark.y, 1.0);
            assert!(landmark.visibility < 0.01);
        }
    }
}

#[test]
fn test_only_body_points_are_kept() {
    let letterbox = Letterbox::fit(256, 256, POSE_INPUT_SIZE);
    let raw = tensor_with(|i| [i as f32, i as f32, 0.0, 0.0, 0.0]);
    assert_eq!(raw.len(), MODEL_POINT_COUNT * VALUES_PER_POINT);

    let PoseResult::Detected(pose) = decode_landmarks(&raw, 1.0, &letterbox, 0.5).unwrap() else {
        panic!("expected a pose");
    };

    assert_eq!(pose.landmarks().len(), LANDMARK_COUNT);
    let last = &pose.landmarks()[LANDMARK_COUNT - 1];
    assert_eq!(last.id as usize, LANDMARK_COUNT - 1);
    assert!((last.x - 32.0 / 256.0).abs() < 1e-5);
}

#[test]
fn test_presence_at_threshold_is_detected() {
    let letterbox = Letterbox::fit(100, 100, POSE_INPUT_SIZE);
    let raw = tensor_with(|_| [128.0, 128.0, 0.0, 0.0, 0.0]);

    assert!(decode_landmarks(&raw, 0.5, &letterbox, 0.5)
        .unwrap()
        .is_detected());
    assert!(!decode_landmarks(&raw, 0.49, &letterbox, 0.5)
        .unwrap()
        .is_detected());
}

#[test]
fn test_portrait_letterbox_round_trips_center() {
    let image = RgbImage::from_pixel(90, 300, Rgb([255, 255, 255]));
    let (tensor, letterbox) = preprocess_for_landmarks(&image);

    assert_eq!(tensor.shape(), &[1, 256, 256, 3]);
    assert!(letterbox.pad_x > 0.0);
    assert_eq!(letterbox.pad_y, 0.0);

    let (x, y, _) = letterbox.to_normalized(128.0, 128.0, 0.0);
    assert!((x - 0.5).abs() < 0.01);
    assert!((y - 0.5).abs() < 0.01);
}

#[test]
fn test_non_finite_network_output_is_rejected() {
    let letterbox = Letterbox::fit(320, 240, POSE_INPUT_SIZE);
    let good = tensor_with(|_| [128.0, 128.0, 0.0, 1.0, 0.0]);

    assert!(decode_landmarks(&good, f32::NAN, &letterbox, 0.5).is_err());

    let mut bad = good.clone();
    bad[0] = f32::NEG_INFINITY;
    assert!(decode_landmarks(&bad, 0.9, &letterbox, 0.5).is_err());
}

#[test]
fn test_nan_threshold_never_detects() {
    let letterbox = Letterbox::fit(320, 240, POSE_INPUT_SIZE);
    let raw = tensor_with(|_| [128.0, 128.0, 0.0, 1.0, 0.0]);

    let result = decode_landmarks(&raw, 0.99, &letterbox, f32::NAN).unwrap();
    assert_eq!(result, PoseResult::NoPose);
}
