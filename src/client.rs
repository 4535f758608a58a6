use log::{debug, error, info};

use crate::config::BlogConfig;
use crate::providers::{generate_blog, BedrockInvoker, ModelInvoker};
use crate::storage::{object_key_now, save_blog, ObjectStore, S3Store};
use crate::{Acknowledgment, IncomingEvent};

/// Per-invocation handler - owns both outbound clients
pub struct BlogHandler
{   invoker: Box<dyn ModelInvoker>
  , store: Box<dyn ObjectStore>
  , config: BlogConfig
}

impl BlogHandler
{   /// Create a handler over arbitrary transports
    pub fn new(
      invoker: Box<dyn ModelInvoker>
    , store: Box<dyn ObjectStore>
    , config: BlogConfig
    ) -> Self
    {   BlogHandler
        {   invoker
          , store
          , config
        }
    }

    /// Create a handler with fresh Bedrock and S3 clients built from
    /// ambient SDK configuration
    pub fn from_sdk_config(
      sdk_config: &aws_config::SdkConfig
    , config: BlogConfig
    ) -> Self
    {   debug!("Building AWS clients for invocation");
        let invoker = BedrockInvoker::from_sdk_config(sdk_config, &config);
        let store = S3Store::from_sdk_config(sdk_config, &config);
        BlogHandler::new(Box::new(invoker), Box::new(store), config)
    }

    /// Run one event through generate-then-persist.
    ///
    /// Only a malformed event is visible to the caller (400). Generation
    /// and storage failures end up in the logs; the caller still gets 200.
    pub async fn handle(
      &self
    , event: &serde_json::Value
    ) -> Acknowledgment
    {   let topic = match IncomingEvent::topic_from_value(event)
        {   Ok(topic) => topic
          , Err(e) => {
              error!("❌ Error parsing event: {}", e);
              return Acknowledgment::invalid_input();
            }
        };
        info!("Generating blog for topic: {}", topic);

        let text = generate_blog(&*self.invoker, &self.config, &topic)
          .await
          .into_text();
        if text.is_empty()
        {   error!("❌ No blog was generated");
        } else
        {   let key = object_key_now(&self.config.key_prefix);
            save_blog(&*self.store, &key, &self.config.bucket, &text).await;
        }

        Acknowledgment::completed()
    }
}
