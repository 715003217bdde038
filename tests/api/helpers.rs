// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared fixtures for API tests: detector doubles, synthetic images and
//! request helpers.
#![allow(dead_code)]

use anyhow::Result;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageFormat, Rgb, RgbImage};
use pose_landmark_api::{
    api::{create_app, AppState},
    pose::{Landmark, Pose, PoseDetector, PoseResult, LANDMARK_COUNT},
};
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

pub const TEST_DETECTOR_VERSION: &str = "test-detector/1.0";

/// What the test detector answers for every image
#[derive(Clone, Copy)]
pub enum Behaviour {
    /// Never finds a person
    NoPose,
    /// Finds a pose whose landmark x encodes the image width (width / 1000)
    EchoWidth,
    /// Fails with a fixed message
    Fail,
}

/// Detector double that counts calls
pub struct TestDetector {
    behaviour: Behaviour,
    calls: AtomicUsize,
}

impl TestDetector {
    pub fn new(behaviour: Behaviour) -> Arc<Self> {
        Arc::new(Self {
            behaviour,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PoseDetector for TestDetector {
    fn detect(&self, image: &RgbImage) -> Result<PoseResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.behaviour {
            Behaviour::NoPose => Ok(PoseResult::NoPose),
            Behaviour::EchoWidth => {
                let x = image.width() as f32 / 1000.0;
                let landmarks = (0..LANDMARK_COUNT)
                    .map(|i| Landmark {
                        id: i as u8,
                        x,
                        y: i as f32 / LANDMARK_COUNT as f32,
                        z: -0.05,
                        visibility: 0.8,
                    })
                    .collect();
                Ok(PoseResult::Detected(Pose::new(landmarks)?))
            }
            Behaviour::Fail => anyhow::bail!("inference backend unavailable"),
        }
    }

    fn version(&self) -> String {
        TEST_DETECTOR_VERSION.to_string()
    }

    fn name(&self) -> String {
        "test-detector".to_string()
    }
}

pub fn app_with(detector: Arc<TestDetector>) -> Router {
    create_app(AppState::new(detector))
}

/// Solid-colour PNG of the given size, base64-encoded
pub fn png_base64(width: u32, height: u32) -> String {
    let image = RgbImage::from_pixel(width, height, Rgb([40, 120, 200]));
    encode_png(&image)
}

/// PNG filled with pseudo-random noise so it does not compress
pub fn noisy_png_base64(width: u32, height: u32) -> String {
    let mut state: u32 = 0x1234_5678;
    let image = RgbImage::from_fn(width, height, |_, _| {
        let mut next = || {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        };
        Rgb([next(), next(), next()])
    });
    encode_png(&image)
}

fn encode_png(image: &RgbImage) -> String {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("PNG encoding failed");
    STANDARD.encode(bytes.into_inner())
}

pub fn detect_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/detect_pose")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn image_request(image: &str) -> Request<Body> {
    detect_request(serde_json::json!({ "image": image }).to_string())
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send a request and return status plus raw body bytes
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(app, request).await;
    let json = serde_json::from_slice(&body).expect("response body is not JSON");
    (status, json)
}
