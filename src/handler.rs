use lambda_runtime::{Diagnostic, LambdaEvent};
use serde_json::Value;
use tracing::warn;

use crate::codec::{self, EncodedImage};
use crate::error::{PayloadError, PipelineError};
use crate::request::FetchLocation;
use crate::response::{ImageResponse, InvocationResponse};
use crate::store::{self, ObjectStore};

// Parse -> fetch -> decode -> encode, stopping at the first failure.
// Holds nothing mutable, so concurrent invocations only share the store handle.
#[derive(Debug)]
pub struct Pipeline<S> {
    store: S,
}

impl<S: ObjectStore> Pipeline<S> {
    pub fn new(store: S) -> Self {
        Pipeline { store }
    }

    pub async fn handle_value(&self, payload: &Value) -> InvocationResponse {
        let outcome = self.run(FetchLocation::try_from(payload)).await;
        InvocationResponse::build(outcome)
    }

    pub async fn handle_bytes(&self, payload: &[u8]) -> InvocationResponse {
        let outcome = self.run(FetchLocation::from_slice(payload)).await;
        InvocationResponse::build(outcome)
    }

    async fn run(&self, location: Result<FetchLocation, PayloadError>) -> Result<EncodedImage, PipelineError> {
        let location = location.inspect_err(|err| warn!("Rejected payload: {err}"))?;
        let bits = store::fetch(&self.store, &location).await?;
        let decoded = codec::decode(bits).inspect_err(|err| warn!("{err} from {location}"))?;
        decoded.encode_png()
    }
}

// Lambda entry point; failures are reported through the runtime's error endpoint
pub async fn function_handler<S: ObjectStore>(
    event: LambdaEvent<Value>,
    pipeline: &Pipeline<S>,
) -> Result<ImageResponse, Diagnostic> {
    pipeline.handle_value(&event.payload).await.into_result()
}
