//! HTTP client for the remote assessment model, with bounded retries

use crate::config::AiConfig;
use crate::error::AiError;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// Longest sleep between two attempts
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(300);

/// Bounded-attempt retry with exponential backoff and a per-attempt timeout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub backoff_multiplier: f64,
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&AiConfig::default())
    }
}

impl RetryPolicy {
    pub fn from_config(config: &AiConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            base_delay: Duration::from_millis(config.base_delay_ms),
            backoff_multiplier: config.backoff_multiplier,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Delay before retry number `retry` (1-based): base * multiplier^(retry - 1),
    /// saturating at `MAX_RETRY_DELAY`
    pub fn delay_for(&self, retry: u32) -> Duration {
        let exponent = i32::try_from(retry.saturating_sub(1)).unwrap_or(i32::MAX);
        let factor = self.backoff_multiplier.max(0.0).powi(exponent);
        Duration::try_from_secs_f64(self.base_delay.as_secs_f64() * factor)
            .unwrap_or(MAX_RETRY_DELAY)
            .min(MAX_RETRY_DELAY)
    }

    /// Run `operation` until it succeeds, fails with a non-retryable error,
    /// or attempts run out. Each attempt races against `timeout`; nothing is
    /// carried over between attempts.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T, AiError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, AiError>>,
    {
        let attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            let outcome = match tokio::time::timeout(self.timeout, operation(attempt)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(AiError::Timeout { secs: self.timeout.as_secs() }),
            };

            match outcome {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < attempts => {
                    let delay = self.delay_for(attempt);
                    warn!(
                        "Assessment attempt {}/{} failed ({}), retrying after {}ms",
                        attempt,
                        attempts,
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Single-shot client for an OpenAI-compatible chat completions endpoint
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl ChatClient {
    /// Build from config, reading the API key from `api_key_env`
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AiError::MissingApiKey(config.api_key_env.clone()))?;

        Ok(Self::new(&config.endpoint, &config.model, api_key))
    }

    pub fn new(endpoint: &str, model: &str, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
            model: model.to_string(),
            api_key,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One request, returning the assistant message text
    pub async fn complete(&self, system: &str, prompt: &str) -> Result<String, AiError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: prompt },
            ],
            temperature: 0.2,
            response_format: ResponseFormat { format_type: "json_object" },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AiError::HttpStatus {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| AiError::MalformedPayload(format!("unexpected response envelope: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(AiError::EmptyContent)?;

        debug!("Assessment response received ({} chars)", content.len());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            backoff_multiplier: 2.0,
            timeout: Duration::from_secs(60),
        }
    }

    #[test]
    fn test_backoff_doubles() {
        let policy = policy();
        assert_eq!(policy.delay_for(1), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(2), Duration::from_millis(2000));
        assert_eq!(policy.delay_for(3), Duration::from_millis(4000));
    }

    #[test]
    fn test_backoff_saturates_instead_of_overflowing() {
        let mut policy = policy();

        policy.backoff_multiplier = 1e20;
        assert_eq!(policy.delay_for(2), MAX_RETRY_DELAY);

        policy.backoff_multiplier = f64::INFINITY;
        assert_eq!(policy.delay_for(2), MAX_RETRY_DELAY);

        policy.backoff_multiplier = f64::NAN;
        assert_eq!(policy.delay_for(2), Duration::ZERO);

        policy.backoff_multiplier = 2.0;
        assert_eq!(policy.delay_for(u32::MAX), MAX_RETRY_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_until_success() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result = policy()
            .run(|attempt| {
                counter.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 3 {
                        Err(AiError::HttpStatus { status: 503, message: "busy".to_string() })
                    } else {
                        Ok(attempt)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_max_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result: Result<(), AiError> = policy()
            .run(|_| {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Err(AiError::EmptyContent) }
            })
            .await;

        assert!(matches!(result, Err(AiError::EmptyContent)));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_retryable_error_stops_immediately() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result: Result<(), AiError> = policy()
            .run(|_| {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Err(AiError::HttpStatus { status: 401, message: "unauthorized".to_string() }) }
            })
            .await;

        assert!(matches!(result, Err(AiError::HttpStatus { status: 401, .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_attempt_times_out() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result: Result<(), AiError> = policy()
            .run(|_| {
                counter.fetch_add(1, Ordering::SeqCst);
                async {
                    tokio::time::sleep(Duration::from_secs(600)).await;
                    Ok(())
                }
            })
            .await;

        assert!(matches!(result, Err(AiError::Timeout { secs: 60 })));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_missing_api_key() {
        let config = AiConfig {
            api_key_env: "RESUMATCH_TEST_KEY_THAT_IS_NOT_SET".to_string(),
            ..AiConfig::default()
        };

        assert!(matches!(ChatClient::from_config(&config), Err(AiError::MissingApiKey(_))));
    }
}
