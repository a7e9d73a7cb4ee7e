use lambda_runtime::Diagnostic;
use thiserror::Error;

// Wire-level errorType strings reported back to the caller
pub const INVALID_JSON: &str = "InvalidJSON";
pub const DOWNLOAD_FAILURE: &str = "DownloadFailure";
pub const DECODE_FAILURE: &str = "DecodeFailure";
pub const ENCODE_FAILURE: &str = "EncodeFailure";

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Failed to parse input JSON")]
    Malformed(#[source] serde_json::Error),
    #[error("Missing input value s3bucket or s3key")]
    MissingLocation,
}

// Store-reported failure, message kept verbatim
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Terminal failure of a single invocation. None of these are retried.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    InvalidPayload(#[from] PayloadError),
    #[error(transparent)]
    FetchFailure(#[from] FetchError),
    #[error("couldn't read image")]
    DecodeFailure { source: Option<image::ImageError> },
    #[error("{0}")]
    EncodeFailure(#[source] image::ImageError),
}

impl PipelineError {
    pub fn error_type(&self) -> &'static str {
        match self {
            PipelineError::InvalidPayload(_) => INVALID_JSON,
            PipelineError::FetchFailure(_) => DOWNLOAD_FAILURE,
            PipelineError::DecodeFailure { .. } => DECODE_FAILURE,
            PipelineError::EncodeFailure(_) => ENCODE_FAILURE,
        }
    }
}

impl From<PipelineError> for Diagnostic {
    fn from(err: PipelineError) -> Self {
        Diagnostic {
            error_type: err.error_type().to_string(),
            error_message: err.to_string(),
        }
    }
}
