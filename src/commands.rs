//! Command-line front end
//!
//! Each subcommand mirrors one form of the console: it collects raw string
//! inputs, turns them into an [`OperationRequest`] and leaves validation to
//! the gateway.

use crate::storage_api::{ApiResult, FilePayload, OperationRequest, DEFAULT_BASE_URL};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Message shown when an upload is attempted without a file
pub const MISSING_FILE_MESSAGE: &str = "Please select a file to upload";

#[derive(Debug, Parser)]
#[command(
    name = "s3-console",
    version,
    about = "Manage buckets, folders and files through an S3 gateway"
)]
pub struct Cli {
    /// Gateway address; routes are resolved under `<base-url>/s3`
    #[arg(long, env = "S3_CONSOLE_API", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all buckets
    ListBuckets,
    /// Create a bucket
    CreateBucket { bucket: String },
    /// Delete a bucket
    DeleteBucket { bucket: String },
    /// Create a folder inside a bucket
    CreateFolder { bucket: String, folder: String },
    /// Delete a folder inside a bucket
    DeleteFolder { bucket: String, folder: String },
    /// Upload a local file
    UploadFile {
        bucket: String,
        #[arg(long, default_value = "")]
        folder: String,
        #[arg(long)]
        file: Option<PathBuf>,
        /// Override the content type inferred from the file extension
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Delete a file
    DeleteFile {
        bucket: String,
        file: String,
        #[arg(long, default_value = "")]
        folder: String,
    },
    /// Copy a file between folders of a bucket
    CopyFile {
        bucket: String,
        file: String,
        #[arg(long, default_value = "")]
        source: String,
        #[arg(long, default_value = "")]
        destination: String,
    },
    /// Move a file between folders of a bucket
    MoveFile {
        bucket: String,
        file: String,
        #[arg(long, default_value = "")]
        source: String,
        #[arg(long, default_value = "")]
        destination: String,
    },
}

impl Command {
    /// Build the request for this command, reading the upload file if any
    pub async fn into_operation(self) -> ApiResult<OperationRequest> {
        let operation = match self {
            Command::ListBuckets => OperationRequest::ListBuckets,
            Command::CreateBucket { bucket } => OperationRequest::CreateBucket {
                bucket_name: bucket,
            },
            Command::DeleteBucket { bucket } => OperationRequest::DeleteBucket {
                bucket_name: bucket,
            },
            Command::CreateFolder { bucket, folder } => OperationRequest::CreateFolder {
                bucket_name: bucket,
                folder_name: folder,
            },
            Command::DeleteFolder { bucket, folder } => OperationRequest::DeleteFolder {
                bucket_name: bucket,
                folder_name: folder,
            },
            Command::UploadFile {
                bucket,
                folder,
                file,
                content_type,
            } => {
                let file = match file {
                    Some(path) => {
                        Some(FilePayload::from_path(&path, content_type.as_deref()).await?)
                    }
                    None => None,
                };
                OperationRequest::UploadFile {
                    bucket_name: bucket,
                    folder_name: folder,
                    file,
                }
            }
            Command::DeleteFile {
                bucket,
                file,
                folder,
            } => OperationRequest::DeleteFile {
                bucket_name: bucket,
                file_name: file,
                folder_name: folder,
            },
            Command::CopyFile {
                bucket,
                file,
                source,
                destination,
            } => OperationRequest::CopyFile {
                bucket_name: bucket,
                file_name: file,
                source_folder: source,
                destination_folder: destination,
            },
            Command::MoveFile {
                bucket,
                file,
                source,
                destination,
            } => OperationRequest::MoveFile {
                bucket_name: bucket,
                file_name: file,
                source_folder: source,
                destination_folder: destination,
            },
        };

        Ok(operation)
    }
}
