//! Configuration for the blog generation handler
//!
//! Every value here is a constant baked into `Default`; the struct exists so
//! the handler and its clients receive configuration explicitly instead of
//! reaching for process-wide state.

use serde::{Deserialize, Serialize};
use crate::transport::TransportPolicy;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str
  = "anthropic.claude-3-haiku-20240307-v1:0";
pub const DEFAULT_BUCKET: &str = "mahibucklamda25";
pub const DEFAULT_KEY_PREFIX: &str = "blog-output/";
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Sampling parameters sent with every generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams
{   /// Protocol version tag expected by the model endpoint
    pub anthropic_version: String
  , /// Output cap in tokens
    pub max_tokens: u32
  , /// Sampling temperature
    pub temperature: f32
  , /// Nucleus sampling threshold
    pub top_p: f32
}

impl Default for GenerationParams
{   fn default() -> Self
    {   GenerationParams
        {   anthropic_version: ANTHROPIC_VERSION.to_string()
          , max_tokens: 512
          , temperature: 0.5
          , top_p: 0.9
        }
    }
}

/// Handler configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogConfig
{   /// Region for both outbound clients
    pub region: String
  , /// Model identifier passed to InvokeModel
    pub model_id: String
  , /// Destination bucket for generated posts
    pub bucket: String
  , /// Object key prefix, joined with the HHMMSS stamp
    pub key_prefix: String
  , pub generation: GenerationParams
  , pub transport: TransportPolicy
}

impl Default for BlogConfig
{   fn default() -> Self
    {   BlogConfig
        {   region: DEFAULT_REGION.to_string()
          , model_id: DEFAULT_MODEL_ID.to_string()
          , bucket: DEFAULT_BUCKET.to_string()
          , key_prefix: DEFAULT_KEY_PREFIX.to_string()
          , generation: GenerationParams::default()
          , transport: TransportPolicy::default()
        }
    }
}

impl BlogConfig
{   /// Reject configurations that can never produce a successful call
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   if self.model_id.is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "model_id is empty".to_string()
            ));
        }
        if self.bucket.is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "bucket is empty".to_string()
            ));
        }
        if self.transport.read_timeout_secs == 0
        {   return Err(crate::error::Error::InvalidConfiguration(
              "read timeout must be non-zero".to_string()
            ));
        }
        Ok(())
    }
}
