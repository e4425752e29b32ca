//! Storage API types and client creation

use super::error::{ApiError, ApiResult};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use url::Url;

/// Gateway address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Every route of the gateway lives under this prefix
pub const API_PREFIX: &str = "/s3";

/// Region sent with every bucket creation request
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateBucketRequest {
    pub bucket_name: String,
    pub region: String,
}

/// Body shared by folder creation and deletion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderRequest {
    pub bucket_name: String,
    pub folder_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CopyMoveFileRequest {
    pub bucket_name: String,
    pub file_name: String,
    pub source_folder: String,
    pub destination_folder: String,
}

/// A file selected for upload
#[derive(Debug, Clone, PartialEq)]
pub struct FilePayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// HTTP client bound to one storage gateway.
///
/// Holds no state besides the base URL and the connection pool, so a single
/// instance can serve any number of concurrent operations.
#[derive(Debug, Clone)]
pub struct StorageApiClient {
    pub(super) http: Client,
    base_url: Url,
}

impl StorageApiClient {
    /// Create a client with a default `reqwest` transport
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        Self::with_client(config, Client::new())
    }

    /// Create a client on top of an existing `reqwest` transport
    pub fn with_client(config: &ApiConfig, http: Client) -> ApiResult<Self> {
        let trimmed = config.base_url.trim_end_matches('/');
        let base_url = Url::parse(trimmed).map_err(|source| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            source,
        })?;

        Ok(StorageApiClient { http, base_url })
    }

    /// Resolve a route (e.g. `/buckets`) to an absolute URL under `/s3`
    pub(super) fn endpoint(&self, route: &str) -> Url {
        let mut url = self.base_url.clone();
        let base_path = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{}{}{}", base_path, API_PREFIX, route));
        url
    }

    pub(super) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        log::debug!("{} {}", method, url);
        self.http.request(method, url)
    }
}

/// Encode a caller-supplied value for use as a single path segment.
///
/// `.` and `..` contain nothing to encode and are resolved as dot segments
/// when the URL is built, so such values do not stay a segment of their own.
pub(super) fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
