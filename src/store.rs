use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::Client;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::StoreConfig;
use crate::error::FetchError;
use crate::request::FetchLocation;

/// Key-addressed object storage. Implementations are shared read-only by
/// every in-flight invocation, so they must be safe for concurrent use.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the whole object body into memory.
    async fn get_object(&self, location: &FetchLocation) -> Result<Vec<u8>, FetchError>;
}

#[async_trait]
impl<T: ObjectStore + ?Sized> ObjectStore for Arc<T> {
    async fn get_object(&self, location: &FetchLocation) -> Result<Vec<u8>, FetchError> {
        (**self).get_object(location).await
    }
}

// Single get-whole-object call with the fetch log lines around it
pub async fn fetch<S: ObjectStore + ?Sized>(store: &S, location: &FetchLocation) -> Result<Vec<u8>, FetchError> {
    info!("Attempting to download file from {location}");
    match store.get_object(location).await {
        Ok(bits) => {
            info!(bytes = bits.len(), "Download completed!");
            Ok(bits)
        }
        Err(err) => {
            error!("Failed with error: {err}");
            Err(err)
        }
    }
}

#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    pub fn new(client: Client) -> Self {
        S3Store { client }
    }

    // Resolve region, credentials and endpoint once at cold start
    pub async fn from_config(config: &StoreConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let shared = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared).force_path_style(config.force_path_style);
        if let Some(url) = &config.endpoint_url {
            builder = builder.endpoint_url(url);
        }
        S3Store::new(Client::from_conf(builder.build()))
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn get_object(&self, location: &FetchLocation) -> Result<Vec<u8>, FetchError> {
        let output = self
            .client
            .get_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .send()
            .await
            .map_err(|err| {
                // Service errors carry S3's own text; transport errors only have the context chain
                FetchError::new(match err.message() {
                    Some(msg) => msg.to_string(),
                    None => DisplayErrorContext(&err).to_string(),
                })
            })?;

        let mut bits = Vec::new();
        if let Some(len) = output.content_length().and_then(|n| usize::try_from(n).ok()) {
            bits.reserve(len);
        }

        // Body stream is dropped on every return path
        let mut body = output.body;
        while let Some(chunk) = body
            .try_next()
            .await
            .map_err(|err| FetchError::new(DisplayErrorContext(&err).to_string()))?
        {
            bits.extend_from_slice(&chunk);
        }
        Ok(bits)
    }
}
