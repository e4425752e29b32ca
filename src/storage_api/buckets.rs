//! Bucket operations (list, create, delete)

use super::error::ApiResult;
use super::response::NormalizedResult;
use super::types::{encode_segment, CreateBucketRequest, StorageApiClient, DEFAULT_REGION};
use reqwest::Method;

impl StorageApiClient {
    /// List all buckets visible to the gateway
    pub async fn list_buckets(&self) -> ApiResult<NormalizedResult> {
        let response = self
            .request(Method::GET, self.endpoint("/buckets"))
            .send()
            .await?;
        NormalizedResult::from_response(response).await
    }

    /// Create a bucket in the default region
    pub async fn create_bucket(&self, bucket_name: &str) -> ApiResult<NormalizedResult> {
        let body = CreateBucketRequest {
            bucket_name: bucket_name.to_string(),
            region: DEFAULT_REGION.to_string(),
        };

        let response = self
            .request(Method::POST, self.endpoint("/create-bucket"))
            .json(&body)
            .send()
            .await?;
        NormalizedResult::from_response(response).await
    }

    pub async fn delete_bucket(&self, bucket_name: &str) -> ApiResult<NormalizedResult> {
        let route = format!("/bucket/{}", encode_segment(bucket_name));
        let response = self
            .request(Method::DELETE, self.endpoint(&route))
            .send()
            .await?;
        NormalizedResult::from_response(response).await
    }
}
