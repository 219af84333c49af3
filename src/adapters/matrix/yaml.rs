//! YAML matrix source - loads the pattern catalog from a YAML document.
//!
//! Expected document shape:
//!
//! ```yaml
//! categories:
//!   - name: Communication Style
//!     patterns:
//!       - name: Async Messaging
//!         scores:
//!           Performance: 5
//!           Consistency: -2
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::domain::catalog::{ArchitecturePattern, ScoringMatrix};
use crate::domain::foundation::QualityAttribute;
use crate::ports::{MatrixSource, MatrixSourceError};

/// Loads a [`ScoringMatrix`] from a YAML file.
pub struct YamlMatrixSource {
    path: PathBuf,
}

impl YamlMatrixSource {
    /// Creates a source reading from the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MatrixSource for YamlMatrixSource {
    fn load(&self) -> Result<ScoringMatrix, MatrixSourceError> {
        let raw = fs::read_to_string(&self.path)?;
        let file: MatrixFile =
            serde_yaml::from_str(&raw).map_err(|e| MatrixSourceError::Parse(e.to_string()))?;

        let mut patterns = Vec::new();
        for category in file.categories {
            for pattern in category.patterns {
                let scores = pattern
                    .scores
                    .into_iter()
                    .map(|(attr, score)| (QualityAttribute::new(attr), score))
                    .collect();
                patterns.push(ArchitecturePattern::new(
                    pattern.name,
                    category.name.clone(),
                    scores,
                ));
            }
        }

        Ok(ScoringMatrix::new(patterns)?)
    }
}

#[derive(Debug, Deserialize)]
struct MatrixFile {
    categories: Vec<CategoryFile>,
}

#[derive(Debug, Deserialize)]
struct CategoryFile {
    name: String,
    patterns: Vec<PatternFile>,
}

#[derive(Debug, Deserialize)]
struct PatternFile {
    name: String,
    #[serde(default)]
    scores: HashMap<String, i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_matrix(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_categories_and_scores() {
        let file = write_matrix(
            r#"
categories:
  - name: Communication
    patterns:
      - name: Sync RPC
        scores:
          Performance: -2
          Consistency: 5
      - name: Async Messaging
        scores:
          Performance: 5
  - name: Data Access
    patterns:
      - name: Shared Database
        scores:
          Consistency: 4
"#,
        );

        let matrix = YamlMatrixSource::new(file.path()).load().unwrap();
        assert_eq!(matrix.categories(), vec!["Communication", "Data Access"]);
        assert_eq!(matrix.rows().len(), 3);

        let sync = &matrix.rows_by_category("Communication")[0];
        assert_eq!(sync.score(&"Performance".into()), -2);
    }

    #[test]
    fn pattern_without_scores_is_neutral_everywhere() {
        let file = write_matrix(
            r#"
categories:
  - name: Communication
    patterns:
      - name: Carrier Pigeon
"#,
        );

        let matrix = YamlMatrixSource::new(file.path()).load().unwrap();
        assert_eq!(matrix.rows()[0].score(&"Performance".into()), 0);
    }

    #[test]
    fn unparseable_document_is_a_parse_error() {
        let file = write_matrix("categories: [not: [valid");

        let err = YamlMatrixSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, MatrixSourceError::Parse(_)));
    }

    #[test]
    fn duplicate_pattern_names_fail_validation() {
        let file = write_matrix(
            r#"
categories:
  - name: Communication
    patterns:
      - name: Sync RPC
      - name: Sync RPC
"#,
        );

        let err = YamlMatrixSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, MatrixSourceError::Invalid(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = YamlMatrixSource::new("/nonexistent/matrix.yaml")
            .load()
            .unwrap_err();
        assert!(matches!(err, MatrixSourceError::Io(_)));
    }
}
