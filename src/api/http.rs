//! HTTP utilities for products REST API calls

use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Maximum length of response body to log
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Failure of a single API call
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status
    #[error("Error HTTP: {status} - {reason}")]
    Status { status: u16, reason: String },

    /// The request never got a response
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON
    #[error("Respuesta JSON inválida: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Sanitize response body for logging
/// Truncates long responses and drops control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let cut = (0..=MAX_LOG_BODY_LENGTH)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| c.is_control(), "")
}

/// HTTP client wrapper for the products API
#[derive(Clone)]
pub struct ApiHttpClient {
    client: Client,
}

impl ApiHttpClient {
    /// Create a new HTTP client
    pub fn new(user_agent: &str) -> Result<Self, ApiError> {
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self { client })
    }

    /// Make a GET request
    pub async fn get(&self, url: &str) -> Result<Value, ApiError> {
        tracing::debug!("GET {}", url);
        execute(self.client.get(url)).await
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<Value, ApiError> {
        tracing::debug!("POST {}", url);
        execute(self.client.post(url).json(body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, url: &str) -> Result<Value, ApiError> {
        tracing::debug!("DELETE {}", url);
        execute(self.client.delete(url)).await
    }
}

async fn execute(request: RequestBuilder) -> Result<Value, ApiError> {
    let response = request.send().await.map_err(|err| {
        tracing::error!("Request failed: {}", err);
        ApiError::Transport(err)
    })?;

    read_json(response).await
}

/// Check the status and decode the body. Empty bodies decode as `null`.
async fn read_json(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
        return Err(ApiError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&body).map_err(|err| {
        tracing::error!("Invalid JSON in response: {}", sanitize_for_log(&body));
        ApiError::Decode(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_truncates_long_bodies() {
        let body = "x".repeat(500);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.starts_with(&"x".repeat(MAX_LOG_BODY_LENGTH)));
        assert!(sanitized.contains("500 bytes total"));
    }

    #[test]
    fn test_sanitize_respects_char_boundaries() {
        let body = "é".repeat(150);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.contains("truncated"));
    }

    #[test]
    fn test_sanitize_strips_control_characters() {
        assert_eq!(sanitize_for_log("not\nfound\r\t"), "notfound");
    }

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Error HTTP: 404 - Not Found");
    }
}
