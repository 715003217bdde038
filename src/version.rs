// Version information for the Pose Landmark API

/// Full version string with feature description
pub const VERSION: &str = "v2.0.0-pose-landmarks-2025-10-13";

/// Semantic version number
pub const VERSION_NUMBER: &str = "2.0.0";

/// API version reported by `/` and `/health`
pub const API_VERSION: &str = "2.0+";

/// Build date
pub const BUILD_DATE: &str = "2025-10-13";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "pose-landmarks",
    "data-uri-input",
    "onnx-runtime",
    "model-complexity",
    "cors-any-origin",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Pose Landmark API {} ({})", VERSION_NUMBER, BUILD_DATE)
}
