//! Gemini API client.
//!
//! Non-streaming access to the Generative Language `generateContent`
//! endpoint. Every call carries the configured request timeout so a slow
//! model call cannot hold a request open indefinitely.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::GeminiConfig;

use super::error::{ApiErrorResponse, GeminiError};
use super::types::{GenerateContentRequest, GenerateContentResponse};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API client.
///
/// Cheaply cloneable; clones share the underlying HTTP connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    model: String,
    timeout_secs: u64,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `config` - Gemini configuration containing API key, model id, and
    ///   timeout
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &GeminiConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key).expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(GeminiClientInner {
                client,
                model: config.model.clone(),
                timeout_secs: config.timeout_secs,
            }),
        }
    }

    /// Send a `generateContent` request and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, returns an API
    /// error, or produces no text. The caller never receives placeholder
    /// content on failure.
    #[instrument(skip(self, request), fields(model = %self.inner.model))]
    pub async fn generate(&self, request: &GenerateContentRequest) -> Result<String, GeminiError> {
        let url = format!("{GEMINI_API_BASE}/{}:generateContent", self.inner.model);

        let response = self
            .inner
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeminiError::Timeout(self.inner.timeout_secs)
                } else {
                    GeminiError::Http(e)
                }
            })?;

        let response = self.handle_response(response).await?;
        response.text().ok_or(GeminiError::EmptyResponse)
    }

    /// Handle a response, mapping error statuses to `GeminiError`.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|e| GeminiError::Parse(format!("Failed to parse response: {e}")))
        } else {
            Err(self.handle_error_status(status, response).await)
        }
    }

    /// Handle an error status code.
    async fn handle_error_status(
        &self,
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> GeminiError {
        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return GeminiError::RateLimited(retry_after);
        }

        // Check for authentication failures
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return GeminiError::Unauthorized("Invalid API key".to_string());
        }

        // Try to parse the API error envelope
        match response.text().await {
            Ok(body) => {
                if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                    GeminiError::Api {
                        status: api_error.error.status,
                        message: api_error.error.message,
                    }
                } else {
                    GeminiError::Api {
                        status: status.to_string(),
                        message: body,
                    }
                }
            }
            Err(e) => GeminiError::Http(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_config() -> GeminiConfig {
        GeminiConfig {
            api_key: SecretString::from("test-key"),
            model: "models/gemini-2.5-flash".to_string(),
            timeout_secs: 60,
        }
    }

    #[test]
    fn test_gemini_client_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<GeminiClient>();
    }

    #[test]
    fn test_gemini_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeminiClient>();
    }

    #[test]
    fn test_client_builds_from_config() {
        let _client = GeminiClient::new(&test_config());
    }
}
