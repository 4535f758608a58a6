pub mod error;
pub mod config;
pub mod transport;
pub mod request;
pub mod providers;
pub mod storage;
pub mod client;
use serde::{Deserialize, Serialize};

pub use client::BlogHandler;
pub use config::BlogConfig;
pub use providers::ModelInvoker;
pub use storage::ObjectStore;

/// BLOGWRIGHT HANDLER INTERFACE:

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input format";
pub const COMPLETED_MESSAGE: &str = "✅ Blog generation completed";

// ===== Inbound =====

/// Invocation payload; `body` holds serialized JSON
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingEvent
{   pub body: String
}

/// Shape expected inside `IncomingEvent::body`
#[derive(Debug, Clone, Deserialize)]
pub struct BlogTopicBody
{   pub blog_topic: String
}

impl IncomingEvent
{   /// Extract the topic from a raw invocation payload
    pub fn topic_from_value(
      event: &serde_json::Value
    ) -> Result<String, crate::error::Error>
    {   let event: IncomingEvent
          = serde_json::from_value(event.clone()).map_err(|e| {
            crate::error::Error::InvalidInput(e.to_string())
          })?;
        event.topic()
    }

    pub fn topic(&self) -> Result<String, crate::error::Error>
    {   let body: BlogTopicBody
          = serde_json::from_str(&self.body).map_err(|e| {
            crate::error::Error::InvalidInput(e.to_string())
          })?;
        Ok(body.blog_topic)
    }
}

// ===== Outbound =====

/// Fixed-shape response handed back to the invoking environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment
{   #[serde(rename = "statusCode")]
    pub status_code: u16
  , /// JSON-encoded string literal
    pub body: String
}

impl Acknowledgment
{   fn with_message(status_code: u16, message: &str) -> Self
    {   Acknowledgment
        {   status_code
          , body: serde_json::Value::from(message).to_string()
        }
    }

    pub fn invalid_input() -> Self
    {   Acknowledgment::with_message(400, INVALID_INPUT_MESSAGE)
    }

    pub fn completed() -> Self
    {   Acknowledgment::with_message(200, COMPLETED_MESSAGE)
    }
}

// ===== Internal outcomes =====

/// Result of asking the model for a post
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome
{   Generated(String)
  , Failed(crate::error::Error)
}

impl GenerationOutcome
{   /// Generated text, or empty on failure
    pub fn into_text(self) -> String
    {   match self
        {   GenerationOutcome::Generated(text) => text
          , GenerationOutcome::Failed(_) => String::new()
        }
    }
}

/// Result of the best-effort storage write
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome
{   Written
  , Failed(crate::error::Error)
}

#[cfg(test)]
mod tests
{   use super::*;
    use serde_json::json;

    #[test]
    fn topic_is_extracted()
    {   let event = json!({"body": "{\"blog_topic\": \"ocean conservation\"}"});
        assert_eq!(
          IncomingEvent::topic_from_value(&event).unwrap(),
          "ocean conservation"
        );
    }

    #[test]
    fn malformed_events_are_invalid_input()
    {   let cases = [
          json!({}),
          json!({"body": 42}),
          json!({"body": "not json"}),
          json!({"body": "{\"topic\": \"x\"}"}),
          json!({"body": "{\"blog_topic\": 7}"}),
          json!("just a string"),
        ];
        for event in cases
        {   assert!(
              matches!(
                IncomingEvent::topic_from_value(&event),
                Err(crate::error::Error::InvalidInput(_))
              ),
              "expected invalid input for {}", event
            );
        }
    }

    #[test]
    fn acknowledgment_body_is_json_string()
    {   let ack = serde_json::to_value(Acknowledgment::completed()).unwrap();
        assert_eq!(ack["statusCode"], 200);
        assert_eq!(ack["body"], "\"✅ Blog generation completed\"");

        let bad = Acknowledgment::invalid_input();
        assert_eq!(bad.status_code, 400);
        assert_eq!(bad.body, "\"Invalid input format\"");
    }
}
