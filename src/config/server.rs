// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::env;

/// HTTP binding and worker pool settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Number of worker threads; also caps concurrent detections
    pub threads: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            threads: 4,
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `THREADS`, falling back to defaults for unset
    /// or unparseable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            threads: env::var("THREADS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|t| *t > 0)
                .unwrap_or(defaults.threads),
        }
    }

    /// `host:port` string accepted by `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
