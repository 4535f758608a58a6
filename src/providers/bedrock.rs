use async_trait::async_trait;
use log::{debug, trace, error, info};
use aws_sdk_bedrockruntime::config::Region;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
use aws_sdk_bedrockruntime::primitives::Blob;

use crate::config::BlogConfig;
use crate::request::{GenerationRequest, GenerationResponse};
use crate::GenerationOutcome;
use super::ModelInvoker;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Bedrock runtime client bound to one model endpoint
pub struct BedrockInvoker
{   client: aws_sdk_bedrockruntime::Client
}

impl BedrockInvoker
{   /// Build a runtime client from ambient SDK config, overriding region,
    /// read timeout and attempt budget from `config`
    pub fn from_sdk_config(
      sdk_config: &aws_config::SdkConfig
    , config: &BlogConfig
    ) -> Self
    {   debug!("Creating BedrockInvoker in {}", config.region);
        let client_config
          = aws_sdk_bedrockruntime::config::Builder::from(sdk_config)
            .region(Region::new(config.region.clone()))
            .timeout_config(config.transport.timeout_config())
            .retry_config(config.transport.retry_config())
            .build();
        BedrockInvoker
        {   client: aws_sdk_bedrockruntime::Client::from_conf(
              client_config
            )
        }
    }
}

#[async_trait]
impl ModelInvoker for BedrockInvoker
{   async fn invoke_model(
      &self
    , model_id: &str
    , body: Vec<u8>
    ) -> Result<Vec<u8>, crate::error::Error>
    {   debug!("Invoking model: {}", model_id);

        let output = self.client
          .invoke_model()
          .model_id(model_id)
          .content_type(JSON_CONTENT_TYPE)
          .accept(JSON_CONTENT_TYPE)
          .body(Blob::new(body))
          .send()
          .await
          .map_err(|e| match e
          {   SdkError::TimeoutError(_) => {
                error!("Model invocation timed out");
                crate::error::Error::Timeout
              }
            , SdkError::ServiceError(service_err) => {
                let err = service_err.into_err();
                error!("Bedrock service error: {}", err);
                crate::error::Error::ApiError(err.to_string())
              }
            , other => {
                let msg = DisplayErrorContext(&other).to_string();
                error!("Bedrock transport error: {}", msg);
                crate::error::Error::InvokeError(msg)
              }
          })?;

        Ok(output.body.into_inner())
    }
}

async fn request_blog(
  invoker: &dyn ModelInvoker
, config: &BlogConfig
, topic: &str
) -> Result<String, crate::error::Error>
{   let request = GenerationRequest::for_topic(
      topic,
      &config.generation
    );
    trace!("Generation request: {:?}", request);

    let raw = invoker
      .invoke_model(&config.model_id, request.to_bytes()?)
      .await?;

    let value: serde_json::Value = serde_json::from_slice(&raw)
      .map_err(|e| {
        error!("Response body is not JSON: {}", e);
        crate::error::Error::ParseError(e.to_string())
      })?;
    debug!(
      "Model raw response: {}",
      serde_json::to_string_pretty(&value)
        .unwrap_or_else(|_| value.to_string())
    );

    let response: GenerationResponse
      = serde_json::from_value(value).map_err(|e| {
        error!("Unexpected response shape: {}", e);
        crate::error::Error::ParseError(e.to_string())
      })?;

    let text = response.first_text()?;
    if text.is_empty()
    {   return Err(crate::error::Error::NoContentInResponse);
    }
    Ok(text)
}

/// Ask the model for a blog post on `topic`.
///
/// Never fails outright: every error is logged and folded into
/// [`GenerationOutcome::Failed`].
pub async fn generate_blog(
  invoker: &dyn ModelInvoker
, config: &BlogConfig
, topic: &str
) -> GenerationOutcome
{   match request_blog(invoker, config, topic).await
    {   Ok(text) => {
          info!("Generated blog:\n{}", text);
          GenerationOutcome::Generated(text)
        }
      , Err(crate::error::Error::NoContentInResponse) => {
          error!("No content returned by the model");
          GenerationOutcome::Failed(
            crate::error::Error::NoContentInResponse
          )
        }
      , Err(e) => {
          error!("Error generating the blog: {}", e);
          GenerationOutcome::Failed(e)
        }
    }
}
