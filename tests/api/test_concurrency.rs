// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Concurrent requests against one shared detector

use super::helpers::*;
use axum::http::StatusCode;
use futures_util::future::join_all;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_do_not_mix_results() {
    let detector = TestDetector::new(Behaviour::EchoWidth);
    let app = app_with(detector.clone());

    let requests = (1..=10u32).map(|width| {
        let app = app.clone();
        async move {
            let (status, body) = send_json(app, image_request(&png_base64(width, 1))).await;
            (width, status, body)
        }
    });

    let results = join_all(requests).await;
    assert_eq!(results.len(), 10);

    for (width, status, body) in results {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let expected_x = width as f64 / 1000.0;
        let landmarks = body["landmarks"].as_array().unwrap();
        for landmark in landmarks {
            let x = landmark["x"].as_f64().unwrap();
            assert!(
                (x - expected_x).abs() < 1e-6,
                "request for width {} got x = {}",
                width,
                x
            );
        }
    }

    assert_eq!(detector.calls(), 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_failures_do_not_poison_later_requests() {
    let failing = TestDetector::new(Behaviour::Fail);
    let (status, _) = send(app_with(failing.clone()), image_request(&png_base64(4, 4))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let app = app_with(failing.clone());
    let (status, _) = send(app.clone(), image_request(&png_base64(4, 4))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(app, get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(failing.calls(), 2);
}
