//! Wire types for the model endpoint

use serde::{Deserialize, Serialize};
use crate::config::GenerationParams;

/// Build the user prompt for a topic.
/// The topic is embedded verbatim, empty or not.
pub fn blog_prompt(topic: &str) -> String
{   format!(
      "You are a professional content writer. Write a detailed 200-word \
       blog post on the topic: '{}'. Use a hook in the introduction and \
       end with a clear conclusion or takeaway message.",
      topic
    )
}

/// One typed content block inside a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock
{   #[serde(rename = "type")]
    pub kind: String
  , #[serde(default)]
    pub text: Option<String>
}

impl ContentBlock
{   pub fn text(text: impl Into<String>) -> Self
    {   ContentBlock
        {   kind: "text".to_string()
          , text: Some(text.into())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: Vec<ContentBlock>
}

/// Request body for InvokeModel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest
{   pub anthropic_version: String
  , pub max_tokens: u32
  , pub temperature: f32
  , pub top_p: f32
  , pub messages: Vec<ChatMessage>
}

impl GenerationRequest
{   /// Single user turn asking for a post on `topic`
    pub fn for_topic(
      topic: &str
    , params: &GenerationParams
    ) -> Self
    {   GenerationRequest
        {   anthropic_version: params.anthropic_version.clone()
          , max_tokens: params.max_tokens
          , temperature: params.temperature
          , top_p: params.top_p
          , messages: vec![
              ChatMessage
              {   role: "user".to_string()
                , content: vec![ContentBlock::text(blog_prompt(topic))]
              }
            ]
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, crate::error::Error>
    {   Ok(serde_json::to_vec(self)?)
    }
}

/// Response body from InvokeModel; only `content` is read
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse
{   #[serde(default)]
    pub content: Vec<ContentBlock>
}

impl GenerationResponse
{   /// Text of the first content block
    pub fn first_text(&self) -> Result<String, crate::error::Error>
    {   let block = self.content.first()
          .ok_or(crate::error::Error::NoContentInResponse)?;
        block.text.clone().ok_or_else(|| {
          crate::error::Error::ParseError(
            format!("content block of type '{}' has no text", block.kind)
          )
        })
    }
}
