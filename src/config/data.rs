//! Data configuration - input file locations.

use serde::Deserialize;

/// Locations of the catalog and requirement inputs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// Path to the YAML scoring matrix.
    pub matrix_path: Option<String>,

    /// Path to the JSON requirements file.
    pub requirements_path: Option<String>,
}
