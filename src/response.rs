use base64::{engine::general_purpose::STANDARD, Engine as _};
use lambda_runtime::Diagnostic;
use serde::Serialize;

use crate::codec::EncodedImage;
use crate::error::PipelineError;

pub const CONTENT_TYPE: &str = "application/base64";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub body: String,
    pub content_type: String,
}

/// Outcome of one invocation, exactly one variant per request.
#[derive(Debug)]
pub enum InvocationResponse {
    Success(ImageResponse),
    Failure(Diagnostic),
}

impl InvocationResponse {
    pub fn build(outcome: Result<EncodedImage, PipelineError>) -> Self {
        match outcome {
            Ok(encoded) => InvocationResponse::Success(ImageResponse {
                body: STANDARD.encode(encoded.as_bytes()),
                content_type: CONTENT_TYPE.to_string(),
            }),
            Err(err) => InvocationResponse::Failure(err.into()),
        }
    }

    // Shape expected by the Lambda runtime: failures go to the error endpoint
    pub fn into_result(self) -> Result<ImageResponse, Diagnostic> {
        match self {
            InvocationResponse::Success(resp) => Ok(resp),
            InvocationResponse::Failure(diag) => Err(diag),
        }
    }
}
