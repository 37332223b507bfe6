use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Invalid file type. Upload an image.")]
    InvalidFileType,

    #[error("No file uploaded.")]
    MissingFile,

    #[error("{provider} AI not configured.")]
    ServiceUnavailable { provider: String },

    #[error("Food analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("Empty analysis response from {provider} API")]
    EmptyResponse { provider: String },

    #[error("model call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}
