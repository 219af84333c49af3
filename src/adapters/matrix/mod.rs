//! Matrix adapters - catalog loading.

mod yaml;

pub use yaml::YamlMatrixSource;
