//! File operations (upload, delete, copy, move)

use super::error::{ApiError, ApiResult};
use super::response::NormalizedResult;
use super::types::{encode_segment, CopyMoveFileRequest, FilePayload, StorageApiClient};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use std::path::Path;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

impl FilePayload {
    pub fn new(
        file_name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        content_type: impl Into<String>,
    ) -> Self {
        FilePayload {
            file_name: file_name.into(),
            bytes: bytes.into(),
            content_type: content_type.into(),
        }
    }

    /// Read a local file into a payload. The content type is taken from
    /// `content_type` when given, otherwise inferred from the extension.
    pub async fn from_path(path: &Path, content_type: Option<&str>) -> ApiResult<Self> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let content_type = content_type
            .map(str::to_string)
            .unwrap_or_else(|| guess_content_type(path).to_string());

        Ok(FilePayload {
            file_name,
            bytes,
            content_type,
        })
    }
}

/// Map a file extension to a MIME type
pub fn guess_content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("txt") | Some("log") => "text/plain",
        Some("csv") => "text/csv",
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz") => "application/gzip",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("mp3") => "audio/mpeg",
        Some("mp4") => "video/mp4",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

impl StorageApiClient {
    /// Upload a file as multipart form data.
    ///
    /// Fails with `MissingInput` before any request is made when no file is
    /// given. `folder_name` is only sent when it is non-empty.
    pub async fn upload_file(
        &self,
        bucket_name: &str,
        folder_name: &str,
        file: Option<FilePayload>,
    ) -> ApiResult<NormalizedResult> {
        let file = file.ok_or(ApiError::MissingInput { field: "file" })?;

        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)?;

        let mut form = Form::new().part("file", part);
        if !folder_name.is_empty() {
            form = form.text("folder_name", folder_name.to_string());
        }

        let route = format!("/upload-file/{}", encode_segment(bucket_name));
        let response = self
            .request(Method::POST, self.endpoint(&route))
            .multipart(form)
            .send()
            .await?;
        NormalizedResult::from_response(response).await
    }

    /// Delete a file. `folder_name` is only added to the query when non-empty.
    pub async fn delete_file(
        &self,
        bucket_name: &str,
        file_name: &str,
        folder_name: &str,
    ) -> ApiResult<NormalizedResult> {
        let route = format!("/delete-file/{}", encode_segment(bucket_name));
        let mut url = self.endpoint(&route);
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("file_name", file_name);
            if !folder_name.is_empty() {
                query.append_pair("folder_name", folder_name);
            }
        }

        let response = self.request(Method::DELETE, url).send().await?;
        NormalizedResult::from_response(response).await
    }

    pub async fn copy_file(
        &self,
        bucket_name: &str,
        file_name: &str,
        source_folder: &str,
        destination_folder: &str,
    ) -> ApiResult<NormalizedResult> {
        let body = copy_move_body(bucket_name, file_name, source_folder, destination_folder);
        self.send_copy_move("/copy-file", &body).await
    }

    /// Same request as [`copy_file`](Self::copy_file) on the move route
    pub async fn move_file(
        &self,
        bucket_name: &str,
        file_name: &str,
        source_folder: &str,
        destination_folder: &str,
    ) -> ApiResult<NormalizedResult> {
        let body = copy_move_body(bucket_name, file_name, source_folder, destination_folder);
        self.send_copy_move("/move-file", &body).await
    }

    async fn send_copy_move(
        &self,
        route: &str,
        body: &CopyMoveFileRequest,
    ) -> ApiResult<NormalizedResult> {
        let response = self
            .request(Method::POST, self.endpoint(route))
            .json(body)
            .send()
            .await?;
        NormalizedResult::from_response(response).await
    }
}

fn copy_move_body(
    bucket_name: &str,
    file_name: &str,
    source_folder: &str,
    destination_folder: &str,
) -> CopyMoveFileRequest {
    CopyMoveFileRequest {
        bucket_name: bucket_name.to_string(),
        file_name: file_name.to_string(),
        source_folder: source_folder.to_string(),
        destination_folder: destination_folder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn content_type_is_guessed_from_extension() {
        assert_eq!(guess_content_type(&PathBuf::from("report.PDF")), "application/pdf");
        assert_eq!(guess_content_type(&PathBuf::from("a/b/photo.jpeg")), "image/jpeg");
        assert_eq!(guess_content_type(&PathBuf::from("notes.txt")), "text/plain");
    }

    #[test]
    fn unknown_extension_defaults_to_octet_stream() {
        assert_eq!(guess_content_type(&PathBuf::from("archive.bin")), DEFAULT_CONTENT_TYPE);
        assert_eq!(guess_content_type(&PathBuf::from("Makefile")), DEFAULT_CONTENT_TYPE);
    }

    #[tokio::test]
    async fn payload_from_path_reads_bytes_and_name() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"{}").unwrap();

        let payload = FilePayload::from_path(file.path(), None).await.unwrap();
        assert_eq!(payload.bytes, b"{}".to_vec());
        assert_eq!(payload.content_type, "application/json");
        assert!(payload.file_name.ends_with(".json"));
    }

    #[tokio::test]
    async fn payload_content_type_override_wins() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let payload = FilePayload::from_path(file.path(), Some("text/markdown"))
            .await
            .unwrap();
        assert_eq!(payload.content_type, "text/markdown");
    }

    #[tokio::test]
    async fn payload_from_missing_path_is_io_error() {
        let err = FilePayload::from_path(Path::new("/definitely/not/here.txt"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Io { .. }));
    }
}
