//! Lambda entry point: one event in, one blog post out

use aws_config::BehaviorVersion;
use blogwright::{Acknowledgment, BlogConfig, BlogHandler};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{debug, info};

async fn function_handler(
  event: LambdaEvent<serde_json::Value>
, sdk_config: &aws_config::SdkConfig
, config: &BlogConfig
) -> Result<Acknowledgment, Error>
{   debug!("Received request: {}", event.context.request_id);
    let handler = BlogHandler::from_sdk_config(sdk_config, config.clone());
    Ok(handler.handle(&event.payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error>
{   env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = BlogConfig::default();
    config.validate()?;

    let sdk_config = aws_config::load_defaults(
      BehaviorVersion::latest()
    ).await;
    info!(
      "blogwright ready: model {} -> s3://{}",
      config.model_id, config.bucket
    );

    run(service_fn(|event| {
      function_handler(event, &sdk_config, &config)
    })).await
}
