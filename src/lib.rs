//! Grayscale converter for S3-hosted images, run as an AWS Lambda function.
//!
//! Each invocation names an object with `{"s3bucket": ..., "s3key": ...}`.
//! The object is fetched, decoded as grayscale, re-encoded as PNG at maximum
//! compression and returned base64-encoded. Every failure is reported as a
//! typed error (`InvalidJSON`, `DownloadFailure`, `DecodeFailure`,
//! `EncodeFailure`) instead of aborting the process.

pub mod codec;
pub mod config;
pub mod error;
pub mod handler;
pub mod request;
pub mod response;
pub mod store;

pub use handler::{function_handler, Pipeline};
pub use store::{ObjectStore, S3Store};
