//! One value per user action, dispatched to the matching client call

use super::error::ApiResult;
use super::response::NormalizedResult;
use super::types::{FilePayload, StorageApiClient};

#[derive(Debug, Clone, PartialEq)]
pub enum OperationRequest {
    ListBuckets,
    CreateBucket {
        bucket_name: String,
    },
    DeleteBucket {
        bucket_name: String,
    },
    CreateFolder {
        bucket_name: String,
        folder_name: String,
    },
    DeleteFolder {
        bucket_name: String,
        folder_name: String,
    },
    UploadFile {
        bucket_name: String,
        folder_name: String,
        file: Option<FilePayload>,
    },
    DeleteFile {
        bucket_name: String,
        file_name: String,
        folder_name: String,
    },
    CopyFile {
        bucket_name: String,
        file_name: String,
        source_folder: String,
        destination_folder: String,
    },
    MoveFile {
        bucket_name: String,
        file_name: String,
        source_folder: String,
        destination_folder: String,
    },
}

impl OperationRequest {
    pub fn name(&self) -> &'static str {
        match self {
            OperationRequest::ListBuckets => "list-buckets",
            OperationRequest::CreateBucket { .. } => "create-bucket",
            OperationRequest::DeleteBucket { .. } => "delete-bucket",
            OperationRequest::CreateFolder { .. } => "create-folder",
            OperationRequest::DeleteFolder { .. } => "delete-folder",
            OperationRequest::UploadFile { .. } => "upload-file",
            OperationRequest::DeleteFile { .. } => "delete-file",
            OperationRequest::CopyFile { .. } => "copy-file",
            OperationRequest::MoveFile { .. } => "move-file",
        }
    }
}

impl std::fmt::Display for OperationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl StorageApiClient {
    /// Issue the single request that `operation` stands for
    pub async fn execute(&self, operation: OperationRequest) -> ApiResult<NormalizedResult> {
        log::debug!("executing {}", operation);

        match operation {
            OperationRequest::ListBuckets => self.list_buckets().await,
            OperationRequest::CreateBucket { bucket_name } => {
                self.create_bucket(&bucket_name).await
            }
            OperationRequest::DeleteBucket { bucket_name } => {
                self.delete_bucket(&bucket_name).await
            }
            OperationRequest::CreateFolder {
                bucket_name,
                folder_name,
            } => self.create_folder(&bucket_name, &folder_name).await,
            OperationRequest::DeleteFolder {
                bucket_name,
                folder_name,
            } => self.delete_folder(&bucket_name, &folder_name).await,
            OperationRequest::UploadFile {
                bucket_name,
                folder_name,
                file,
            } => self.upload_file(&bucket_name, &folder_name, file).await,
            OperationRequest::DeleteFile {
                bucket_name,
                file_name,
                folder_name,
            } => self.delete_file(&bucket_name, &file_name, &folder_name).await,
            OperationRequest::CopyFile {
                bucket_name,
                file_name,
                source_folder,
                destination_folder,
            } => {
                self.copy_file(&bucket_name, &file_name, &source_folder, &destination_folder)
                    .await
            }
            OperationRequest::MoveFile {
                bucket_name,
                file_name,
                source_folder,
                destination_folder,
            } => {
                self.move_file(&bucket_name, &file_name, &source_folder, &destination_folder)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OperationRequest;

    #[test]
    fn operation_names_match_routes() {
        assert_eq!(OperationRequest::ListBuckets.to_string(), "list-buckets");
        let copy = OperationRequest::CopyFile {
            bucket_name: "b".to_string(),
            file_name: "f".to_string(),
            source_folder: String::new(),
            destination_folder: String::new(),
        };
        assert_eq!(copy.name(), "copy-file");
    }
}
