//! Response normalization
//!
//! Every gateway response, successful or not, is turned into a
//! [`NormalizedResult`] that can be rendered as-is. The body is parsed as JSON
//! first; anything that does not parse is kept as text, and an empty body is
//! replaced by a placeholder carrying the status code.

use super::error::ApiResult;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResult {
    pub status: u16,
    pub body: ResponseBody,
}

impl NormalizedResult {
    /// Normalize a raw status and body
    pub fn from_parts(status: u16, body: &[u8]) -> Self {
        let body = match serde_json::from_slice::<Value>(body) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => {
                let text = String::from_utf8_lossy(body).into_owned();
                if text.is_empty() {
                    ResponseBody::Text(format!("Status: {}", status))
                } else {
                    ResponseBody::Text(text)
                }
            }
        };

        NormalizedResult { status, body }
    }

    /// Consume a response. Only a failure to read the body is an error.
    pub async fn from_response(response: reqwest::Response) -> ApiResult<Self> {
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        log::info!("response status {} ({} bytes)", status, bytes.len());
        Ok(Self::from_parts(status, &bytes))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn as_json(&self) -> Option<&Value> {
        match &self.body {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    /// Displayable form: indented JSON, or the text verbatim
    pub fn render(&self) -> String {
        match &self.body {
            ResponseBody::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            ResponseBody::Text(text) => text.clone(),
        }
    }
}
