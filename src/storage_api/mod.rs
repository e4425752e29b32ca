//! Storage API module - client for the `/s3` gateway routes
//!
//! This module is organized into submodules:
//! - `types`: Configuration, request bodies and client creation
//! - `error`: Error taxonomy
//! - `response`: Response normalization and rendering
//! - `buckets`: Bucket operations (list, create, delete)
//! - `folders`: Folder operations (create, delete)
//! - `files`: File operations (upload, delete, copy, move)
//! - `operation`: Request union and dispatch

mod buckets;
mod error;
mod files;
mod folders;
mod operation;
mod response;
mod types;

// Re-export types
pub use types::{
    ApiConfig, CopyMoveFileRequest, CreateBucketRequest, FilePayload, FolderRequest,
    StorageApiClient, API_PREFIX, DEFAULT_BASE_URL, DEFAULT_REGION,
};

pub use error::{ApiError, ApiResult};
pub use files::guess_content_type;
pub use operation::OperationRequest;
pub use response::{NormalizedResult, ResponseBody};
