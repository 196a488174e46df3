//! HTTP transport to the registry service.
//!
//! Owns the single GET-and-deserialize path: one request per call, retry
//! for transient failures, and classification of non-success statuses into
//! [`RegistryError`] kinds at this boundary, before any caching decision
//! is made. Classified errors are never cached.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, RegistryResult};

/// User agent for registry requests.
const USER_AGENT_VALUE: &str = concat!("pid-registry/", env!("CARGO_PKG_VERSION"));

/// Header carrying the subscription key.
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Pause between retry attempts.
const RETRY_BACKOFF: Duration = Duration::from_millis(200);

/// Structured error body returned with 400 responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP transport for the registry.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl HttpTransport {
    /// Build a transport from configuration.
    ///
    /// Fails with [`RegistryError::Config`] on an empty base URL or an
    /// unusable subscription key, before any request is made.
    pub fn new(config: &RegistryConfig) -> RegistryResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(RegistryError::Config {
                message: "base URL is required".to_string(),
            });
        }

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        if let Some(key) = &config.subscription_key {
            let value = HeaderValue::from_str(key).map_err(|_| RegistryError::Config {
                message: "subscription key is not a valid header value".to_string(),
            })?;
            default_headers.insert(SUBSCRIPTION_KEY_HEADER, value);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| RegistryError::Config {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
        })
    }

    /// GET `path` relative to the base URL and deserialize the body.
    ///
    /// Transient failures are retried up to the configured budget; every
    /// other error propagates as classified.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> RegistryResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut retries = 0;

        loop {
            match self.request_once(&url, path).await {
                Ok(response) => {
                    return response
                        .json()
                        .await
                        .map_err(|e| RegistryError::InvalidResponse {
                            message: format!("failed to parse response body: {}", e),
                        });
                }
                Err(e) if e.is_retryable() && retries < self.max_retries => {
                    retries += 1;
                    warn!(
                        error = %e,
                        retry = retries,
                        max_retries = self.max_retries,
                        "retrying registry request"
                    );
                    tokio::time::sleep(RETRY_BACKOFF).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Make a single request and classify the outcome.
    async fn request_once(&self, url: &str, path: &str) -> RegistryResult<reqwest::Response> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        match status.as_u16() {
            200..=299 => Ok(response),

            401 => Err(RegistryError::Unauthorized {
                message: "subscription rejected by the registry".to_string(),
            }),

            404 => Err(RegistryError::NotFound {
                path: path.to_string(),
            }),

            400 => {
                let body = response.text().await.unwrap_or_default();
                Err(RegistryError::Validation {
                    message: validation_message(&body),
                })
            }

            _ => Err(RegistryError::Unclassified {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            }),
        }
    }
}

/// Extract the human message from a 400 body.
///
/// Prefers the structured `message` field, then `error`, then the raw body.
fn validation_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            return message;
        }
    }

    if body.is_empty() {
        "request rejected".to_string()
    } else {
        body.to_string()
    }
}
