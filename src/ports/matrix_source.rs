//! Matrix Source Port - Supplier of the scored pattern catalog.

use crate::domain::catalog::ScoringMatrix;
use crate::domain::foundation::ValidationError;

/// Loads the scoring matrix from wherever it is stored.
///
/// Format and storage are adapter concerns; the core only sees a validated
/// [`ScoringMatrix`].
pub trait MatrixSource: Send + Sync {
    /// Loads and validates the catalog.
    fn load(&self) -> Result<ScoringMatrix, MatrixSourceError>;
}

/// Errors raised while loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum MatrixSourceError {
    /// The backing store could not be read.
    #[error("failed to read matrix source: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be parsed.
    #[error("failed to parse matrix source: {0}")]
    Parse(String),

    /// The parsed catalog violates a matrix invariant.
    #[error("invalid matrix: {0}")]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_matrix_errors_wrap_validation_failures() {
        let err = MatrixSourceError::from(ValidationError::empty_field("patterns"));
        assert_eq!(
            err.to_string(),
            "invalid matrix: Field 'patterns' cannot be empty"
        );
    }
}
