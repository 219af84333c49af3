//! Oracle Ports - Natural-language judgment services.
//!
//! The pipeline treats semantic judgment about applicability conditions as
//! an opaque, fallible collaborator reached over two narrow contracts.
//! Injecting the oracles keeps the consolidation and grouping stages
//! testable with deterministic fakes instead of a live language-model
//! backend.

use async_trait::async_trait;

/// Judges whether two applicability conditions describe the same situation.
#[async_trait]
pub trait EquivalenceOracle: Send + Sync {
    /// Returns true when `a` and `b` are semantically equivalent.
    ///
    /// One call is one round trip to the backing service. Implementations
    /// interpret replies leniently and fail open toward "not equivalent";
    /// only transport-level failures surface as errors.
    async fn is_equivalent(&self, a: &str, b: &str) -> Result<bool, OracleError>;
}

/// Partitions applicability conditions into mutually-consistent groups.
#[async_trait]
pub trait GroupingOracle: Send + Sync {
    /// Partitions `conditions` into groups of zero-based indices.
    ///
    /// A condition may appear in more than one group; a universally
    /// applicable condition may appear in every group. A reply that cannot
    /// be interpreted is a hard [`OracleError::MalformedResponse`]; no
    /// best-effort partial grouping is attempted.
    async fn partition(&self, conditions: &[String]) -> Result<Vec<Vec<usize>>, OracleError>;
}

/// Oracle transport and interpretation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OracleError {
    /// Request exceeded the configured timeout.
    #[error("oracle request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Rate limited by the backing service.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Backing service is unavailable.
    #[error("oracle unavailable: {message}")]
    Unavailable { message: String },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The reply could not be interpreted under the expected format.
    #[error("malformed oracle response: {0}")]
    MalformedResponse(String),
}

impl OracleError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a malformed response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Returns true if retrying the call could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            OracleError::Timeout { .. }
                | OracleError::RateLimited { .. }
                | OracleError::Unavailable { .. }
                | OracleError::Network(_)
        )
    }
}
