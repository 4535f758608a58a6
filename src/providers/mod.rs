//! Model endpoint implementations

use async_trait::async_trait;

pub mod bedrock;

// Re-export for convenience
pub use bedrock::{generate_blog, BedrockInvoker};

/// Raw request/response exchange with a hosted model.
/// Implementations own transport concerns; callers own the payload.
#[async_trait]
pub trait ModelInvoker: Send + Sync
{   async fn invoke_model(
      &self
    , model_id: &str
    , body: Vec<u8>
    ) -> Result<Vec<u8>, crate::error::Error>;
}
