//! Folder operations (create, delete)

use super::error::ApiResult;
use super::response::NormalizedResult;
use super::types::{FolderRequest, StorageApiClient};
use reqwest::Method;

impl StorageApiClient {
    pub async fn create_folder(
        &self,
        bucket_name: &str,
        folder_name: &str,
    ) -> ApiResult<NormalizedResult> {
        self.send_folder_request(Method::POST, "/create-folder", bucket_name, folder_name)
            .await
    }

    /// Delete a folder. The gateway expects a JSON body on this DELETE.
    pub async fn delete_folder(
        &self,
        bucket_name: &str,
        folder_name: &str,
    ) -> ApiResult<NormalizedResult> {
        self.send_folder_request(Method::DELETE, "/delete-folder", bucket_name, folder_name)
            .await
    }

    async fn send_folder_request(
        &self,
        method: Method,
        route: &str,
        bucket_name: &str,
        folder_name: &str,
    ) -> ApiResult<NormalizedResult> {
        let body = FolderRequest {
            bucket_name: bucket_name.to_string(),
            folder_name: folder_name.to_string(),
        };

        let response = self
            .request(method, self.endpoint(route))
            .json(&body)
            .send()
            .await?;
        NormalizedResult::from_response(response).await
    }
}
