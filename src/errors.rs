use thiserror::Error;

/// Main error type for the tailwind-config crate
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to read config file {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to parse JavaScript config {path}: {message}")]
    JsParseError { path: String, message: String },

    #[error("Failed to write output to {path}: {message}")]
    OutputError { path: String, message: String },

    #[error("Unsupported config file format: {path}. Use .js, .cjs, .json, .yaml, or .yml")]
    UnsupportedFormat { path: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
