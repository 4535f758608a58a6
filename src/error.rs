use std::fmt;

/// Custom error type for blog generation and persistence
/// Implements Clone so outcomes can carry the reason around
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Inbound event could not be parsed
    InvalidInput(String)
  , /// Transport-level failure talking to the model endpoint
    InvokeError(String)
  , /// Model endpoint returned a service error
    ApiError(String)
  , /// Failed to parse the model response
    ParseError(String)
  , /// No content blocks in the model response
    NoContentInResponse
  , /// Object store rejected or failed the write
    StorageError(String)
  , /// Timeout error
    Timeout
  , /// Invalid configuration
    InvalidConfiguration(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::InvalidInput(msg) => {
              write!(f, "Invalid input: {}", msg)
            }
          , Error::InvokeError(msg) => {
              write!(f, "Model invocation failed: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoContentInResponse => {
              write!(f, "Model response contained no content")
            }
          , Error::StorageError(msg) => {
              write!(f, "Storage error: {}", msg)
            }
          , Error::Timeout => {
              write!(f, "Request timed out")
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error
{   fn from(e: serde_json::Error) -> Self
    {   Error::ParseError(e.to_string())
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn display_carries_context()
    {   let err = Error::StorageError("AccessDenied".to_string());
        assert_eq!(err.to_string(), "Storage error: AccessDenied");
        assert_eq!(
          Error::NoContentInResponse.to_string(),
          "Model response contained no content"
        );
    }

    #[test]
    fn json_errors_become_parse_errors()
    {   let err: Error = serde_json::from_str::<serde_json::Value>("{")
          .unwrap_err()
          .into();
        assert!(matches!(err, Error::ParseError(_)));
    }
}
