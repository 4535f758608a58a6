//! Transport policy for the outbound model call

use std::time::Duration;
use log::debug;
use serde::{Deserialize, Serialize};
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;

/// Read timeout and retry budget handed to the SDK transport.
/// The SDK owns the retry loop; nothing above it retries.
/// `max_retries` excludes the first request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportPolicy
{   pub max_retries: u32
  , pub read_timeout_secs: u64
}

impl TransportPolicy
{   /// Create a new transport policy
    pub fn new(
      max_retries: u32
    , read_timeout_secs: u64
    ) -> Self
    {   TransportPolicy
        {   max_retries
          , read_timeout_secs
        }
    }

    /// Total requests the SDK may send, first one included
    pub fn max_attempts(&self) -> u32
    {   self.max_retries.saturating_add(1)
    }

    pub fn read_timeout(&self) -> Duration
    {   Duration::from_secs(self.read_timeout_secs)
    }

    /// SDK timeout configuration for this policy
    pub fn timeout_config(&self) -> TimeoutConfig
    {   debug!(
          "Using read timeout of {}s",
          self.read_timeout_secs
        );
        TimeoutConfig::builder()
          .read_timeout(self.read_timeout())
          .build()
    }

    /// SDK retry configuration for this policy
    pub fn retry_config(&self) -> RetryConfig
    {   debug!(
          "Using {} retries ({} attempts)",
          self.max_retries,
          self.max_attempts()
        );
        RetryConfig::standard()
          .with_max_attempts(self.max_attempts())
    }
}

impl Default for TransportPolicy
{   fn default() -> Self
    {   TransportPolicy::new(3, 300)
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn default_policy_matches_endpoint_budget()
    {   let policy = TransportPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.retry_config().max_attempts(), 4);
        assert_eq!(policy.read_timeout(), Duration::from_secs(300));
    }

    #[test]
    fn sdk_configs_reflect_policy()
    {   let policy = TransportPolicy::new(5, 42);
        assert_eq!(policy.retry_config().max_attempts(), 6);
        assert_eq!(
          policy.timeout_config().read_timeout(),
          Some(Duration::from_secs(42))
        );
    }

    #[test]
    fn zero_retries_still_sends_once()
    {   let policy = TransportPolicy::new(0, 300);
        assert_eq!(policy.retry_config().max_attempts(), 1);
    }
}
