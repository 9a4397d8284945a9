//! Gemini API client
//!
//! A thin reqwest wrapper around the `generateContent` endpoint. Issues
//! exactly one outbound request per invocation; retry and cancellation
//! are the caller's concern.

use crate::error::ApiError;
use crate::parser::parse_response;
use crate::prompt::build_prompt;
use crate::wire::GenerateRequest;
use pagegist_domain::{Credential, SummaryStyle};
use std::time::Duration;
use tracing::{debug, info};

/// Default Gemini API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default timeout for API requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the Gemini `generateContent` API.
pub struct GeminiClient {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client with the default endpoint and model.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEFAULT_MODEL)
    }

    /// Create a client against a specific endpoint and model.
    ///
    /// Useful for proxies and for pointing tests at a local server.
    pub fn with_endpoint(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            client,
        }
    }

    /// The model this client targets.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Summarize `text` in the requested style.
    ///
    /// Builds the style's prompt and issues a single request.
    pub async fn summarize(
        &self,
        text: &str,
        style: SummaryStyle,
        key: &Credential,
    ) -> Result<String, ApiError> {
        let prompt = build_prompt(text, style);
        debug!("prompt length: {} chars, style: {}", prompt.len(), style);
        self.generate(&prompt, key).await
    }

    /// Send one prompt and return the model's raw text response.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] when the request never completes
    /// - [`ApiError::Service`] on a non-2xx status, carrying the remote
    ///   error message when one was embedded
    /// - [`ApiError::Malformed`] on a 2xx body without candidate text
    pub async fn generate(&self, prompt: &str, key: &Credential) -> Result<String, ApiError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.endpoint, self.model
        );

        info!("calling generative API, model {}", self.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", key.as_str())])
            .json(&GenerateRequest::single(prompt))
            .send()
            .await?;

        let ok = response.status().is_success();
        debug!("API response status ok: {}", ok);

        let body = response.text().await?;
        parse_response(ok, &body)
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}
