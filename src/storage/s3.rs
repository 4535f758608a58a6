use async_trait::async_trait;
use log::{debug, error};
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

use crate::config::BlogConfig;
use super::ObjectStore;

pub struct S3Store
{   client: aws_sdk_s3::Client
}

impl S3Store
{   pub fn new(client: aws_sdk_s3::Client) -> Self
    {   S3Store { client }
    }

    /// S3 client from ambient SDK config in the configured region
    pub fn from_sdk_config(
      sdk_config: &aws_config::SdkConfig
    , config: &BlogConfig
    ) -> Self
    {   debug!("Creating S3Store in {}", config.region);
        let client_config = aws_sdk_s3::config::Builder::from(sdk_config)
          .region(Region::new(config.region.clone()))
          .build();
        S3Store::new(aws_sdk_s3::Client::from_conf(client_config))
    }
}

#[async_trait]
impl ObjectStore for S3Store
{   async fn put_object(
      &self
    , bucket: &str
    , key: &str
    , body: Vec<u8>
    , content_type: &str
    ) -> Result<(), crate::error::Error>
    {   debug!("PutObject s3://{}/{} ({} bytes)", bucket, key, body.len());

        self.client
          .put_object()
          .bucket(bucket)
          .key(key)
          .body(ByteStream::from(body))
          .content_type(content_type)
          .send()
          .await
          .map_err(|e| {
            let msg = DisplayErrorContext(&e).to_string();
            error!("S3 upload failed: {}", msg);
            crate::error::Error::StorageError(msg)
          })?;
        Ok(())
    }
}
