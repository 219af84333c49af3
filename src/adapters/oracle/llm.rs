//! Language-model oracle - implements both oracle ports over a messages API.
//!
//! Drives an Anthropic-style `/v1/messages` endpoint. Equivalence replies
//! are interpreted leniently (any reply containing a case-insensitive
//! "true" token counts as equivalent; anything else, including an empty
//! reply, fails open to "not equivalent"). Grouping replies are parsed
//! strictly; a malformed partition is a terminal error for the run.
//!
//! # Configuration
//!
//! ```ignore
//! let config = LlmOracleConfig::new(api_key)
//!     .with_model("claude-sonnet-4-20250514")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let oracle = LlmOracle::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::ports::{EquivalenceOracle, GroupingOracle, OracleError};

use super::partition::{parse_partition, to_zero_based};

/// Instructions for the equivalence judgment.
const EQUIVALENCE_INSTRUCTIONS: &str = "You judge whether two stated applicability \
conditions describe the same situation. Reply with exactly 'true' if they are \
semantically equivalent and 'false' otherwise. Do not explain.";

/// Instructions for the partitioning judgment.
const GROUPING_INSTRUCTIONS: &str = "You are given a JSON array of applicability \
conditions, numbered from 1 in the order given. Partition the condition numbers \
into groups that can hold at the same time without contradicting each other. A \
condition may appear in more than one group; a condition that applies under all \
circumstances belongs in every group. Reply only in the form ((1,2),(3)) with no \
other text.";

/// Messages API version header value.
const API_VERSION: &str = "2023-06-01";

/// Configuration for the language-model oracle.
#[derive(Debug, Clone)]
pub struct LlmOracleConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl LlmOracleConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "claude-sonnet-4-20250514".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 3,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Oracle backed by a language-model messages API.
pub struct LlmOracle {
    config: LlmOracleConfig,
    client: Client,
}

impl LlmOracle {
    /// Creates a new oracle with the given configuration.
    pub fn new(config: LlmOracleConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url)
    }

    /// Sends one instruction + input round trip, retrying transient
    /// failures up to the configured maximum.
    async fn ask(&self, instructions: &str, input: &str) -> Result<String, OracleError> {
        let trace_id = Uuid::new_v4();
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(%trace_id, attempt, "oracle round trip");

            match self.ask_once(instructions, input).await {
                Ok(reply) => return Ok(reply),
                Err(err) if err.is_retryable() && attempt <= self.config.max_retries => {
                    let backoff = match err {
                        OracleError::RateLimited { retry_after_secs } => {
                            Duration::from_secs(retry_after_secs)
                        }
                        _ => Duration::from_millis(500 * u64::from(attempt)),
                    };
                    warn!(%trace_id, attempt, error = %err, "retrying oracle call");
                    sleep(backoff).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn ask_once(&self, instructions: &str, input: &str) -> Result<String, OracleError> {
        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: 1024,
            system: instructions.to_string(),
            messages: vec![MessageBody {
                role: "user".to_string(),
                content: input.to_string(),
            }],
        };

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", API_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OracleError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    OracleError::network(format!("Connection failed: {}", e))
                } else {
                    OracleError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(30);
            return Err(OracleError::RateLimited { retry_after_secs });
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(OracleError::AuthenticationFailed);
        }
        if !status.is_success() {
            return Err(OracleError::unavailable(format!(
                "status {} from oracle backend",
                status
            )));
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| OracleError::malformed(e.to_string()))?;

        Ok(body
            .content
            .into_iter()
            .map(|block| block.text)
            .collect::<Vec<_>>()
            .join(""))
    }
}

/// Returns true when the reply contains a case-insensitive "true" token.
fn contains_truthy(reply: &str) -> bool {
    reply.to_lowercase().contains("true")
}

#[async_trait]
impl EquivalenceOracle for LlmOracle {
    async fn is_equivalent(&self, a: &str, b: &str) -> Result<bool, OracleError> {
        let input = format!("Condition 1: '{a}'\nCondition 2: '{b}'");
        let reply = self.ask(EQUIVALENCE_INSTRUCTIONS, &input).await?;

        if reply.trim().is_empty() {
            warn!("empty equivalence reply treated as not equivalent");
            return Ok(false);
        }

        Ok(contains_truthy(&reply))
    }
}

#[async_trait]
impl GroupingOracle for LlmOracle {
    async fn partition(&self, conditions: &[String]) -> Result<Vec<Vec<usize>>, OracleError> {
        let payload =
            serde_json::to_string(conditions).map_err(|e| OracleError::malformed(e.to_string()))?;
        let input = format!("Conditions: {payload}");

        let reply = self.ask(GROUPING_INSTRUCTIONS, &input).await?;
        let raw = parse_partition(&reply)?;
        to_zero_based(raw, conditions.len())
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<MessageBody>,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: String,
}
