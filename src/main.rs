use grayscale_lambda::{config::StoreConfig, function_handler, Pipeline, S3Store};
use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Build the S3 client once at cold start (shared by every invocation)
    let config = StoreConfig::from_env();
    let pipeline = Pipeline::new(S3Store::from_config(&config).await);

    let result = run(service_fn(|event: LambdaEvent<Value>| function_handler(event, &pipeline))).await;

    drop(pipeline);
    tracing::info!("handler loop exited, S3 client released");
    result
}
