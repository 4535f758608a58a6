//! Object store sink for generated posts

use async_trait::async_trait;
use chrono::Timelike;
use log::{error, info};

use crate::WriteOutcome;

pub mod s3;

pub use s3::S3Store;

pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Create-or-overwrite write of one object
#[async_trait]
pub trait ObjectStore: Send + Sync
{   async fn put_object(
      &self
    , bucket: &str
    , key: &str
    , body: Vec<u8>
    , content_type: &str
    ) -> Result<(), crate::error::Error>;
}

/// `<prefix>HHMMSS.txt` for the given wall-clock time
pub fn object_key<T: Timelike>(prefix: &str, time: &T) -> String
{   format!(
      "{}{:02}{:02}{:02}.txt",
      prefix,
      time.hour(),
      time.minute(),
      time.second()
    )
}

/// Key for a write happening now, in local time
pub fn object_key_now(prefix: &str) -> String
{   object_key(prefix, &chrono::Local::now())
}

/// Best-effort write of `text` as a UTF-8 plain-text object.
/// Failures are logged and reported, never raised or retried.
pub async fn save_blog(
  store: &dyn ObjectStore
, key: &str
, bucket: &str
, text: &str
) -> WriteOutcome
{   match store
      .put_object(
        bucket,
        key,
        text.as_bytes().to_vec(),
        TEXT_CONTENT_TYPE
      )
      .await
    {   Ok(()) => {
          info!("✅ Blog saved to s3://{}/{}", bucket, key);
          WriteOutcome::Written
        }
      , Err(e) => {
          error!(
            "❌ Error when saving the blog to s3://{}/{}: {}",
            bucket, key, e
          );
          WriteOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests
{   use super::*;
    use chrono::NaiveTime;

    struct RejectingStore;

    #[async_trait]
    impl ObjectStore for RejectingStore
    {   async fn put_object(
          &self
        , _bucket: &str
        , _key: &str
        , _body: Vec<u8>
        , _content_type: &str
        ) -> Result<(), crate::error::Error>
        {   Err(crate::error::Error::StorageError("AccessDenied".to_string()))
        }
    }

    #[test]
    fn failed_write_is_reported_not_raised()
    {   let outcome = tokio_test::block_on(save_blog(
          &RejectingStore,
          "blog-output/120000.txt",
          "bucket",
          "text"
        ));
        assert_eq!(
          outcome,
          WriteOutcome::Failed(
            crate::error::Error::StorageError("AccessDenied".to_string())
          )
        );
    }

    #[test]
    fn key_is_zero_padded()
    {   let time = NaiveTime::from_hms_opt(7, 5, 9).unwrap();
        assert_eq!(
          object_key("blog-output/", &time),
          "blog-output/070509.txt"
        );
    }

    #[test]
    fn key_now_has_six_digits()
    {   let key = object_key_now("blog-output/");
        let stamp = key
          .strip_prefix("blog-output/")
          .and_then(|rest| rest.strip_suffix(".txt"))
          .unwrap();
        assert_eq!(stamp.len(), 6);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
