//! Error types for storage API operations

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Conditions that interrupt an operation before a renderable result exists.
///
/// HTTP error statuses and unparsable bodies are not errors here; they end up
/// in a regular [`NormalizedResult`](super::NormalizedResult).
#[derive(Error, Debug)]
pub enum ApiError {
    /// A caller-side precondition was not met. No request was sent.
    #[error("missing input: {field}")]
    MissingInput { field: &'static str },

    /// The request could not be built, sent, or its body could not be read.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Reading a local file for upload failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn missing_input_names_the_field() {
        let err = ApiError::MissingInput { field: "file" };
        assert_eq!(err.to_string(), "missing input: file");
    }
}
