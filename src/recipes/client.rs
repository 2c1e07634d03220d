use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default timeout for generation requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Client for an Ollama-compatible text-generation endpoint.
pub struct RecipeClient {
    endpoint: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl RecipeClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Recipe(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Set the maximum number of attempts (at least one)
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.endpoint)
    }

    /// Send the prompt and return the generated text.
    ///
    /// Transport failures and non-success statuses are retried with
    /// exponential backoff (1s, 2s, ...). A 404 means the model is missing
    /// and is not retried.
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = self.generate_url();
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            debug!(attempt, %url, "requesting recipe suggestions");

            match self.client.post(&url).json(&body).send().await {
                Ok(resp) if resp.status().is_success() => {
                    let parsed: GenerateResponse = resp
                        .json()
                        .await
                        .map_err(|e| AppError::Recipe(format!("invalid response: {e}")))?;
                    return Ok(parsed.response.trim().to_string());
                }
                Ok(resp) if resp.status() == reqwest::StatusCode::NOT_FOUND => {
                    return Err(AppError::Recipe(format!(
                        "model '{}' is not available",
                        self.model
                    )));
                }
                Ok(resp) => {
                    let status = resp.status();
                    let text = resp
                        .text()
                        .await
                        .unwrap_or_else(|_| "unknown error".to_string());
                    last_error = Some(AppError::Recipe(format!("HTTP {status}: {text}")));
                }
                Err(e) => {
                    last_error = Some(AppError::Recipe(format!("request failed: {e}")));
                }
            }

            if attempt < self.max_retries {
                let delay = Duration::from_secs(2u64.pow(attempt - 1));
                warn!(attempt, ?delay, "recipe request failed, retrying");
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error.unwrap_or_else(|| AppError::Recipe("max retries exceeded".into())))
    }
}
