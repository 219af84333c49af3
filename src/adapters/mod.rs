//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `oracle` - Language-model oracle (plus deterministic mocks for tests)
//! - `matrix` - YAML-backed scoring matrix source
//! - `report` - Console and no-op report sinks, report rendering

pub mod matrix;
pub mod oracle;
pub mod report;

pub use matrix::YamlMatrixSource;
pub use oracle::{LlmOracle, LlmOracleConfig, MockEquivalenceOracle, MockGroupingOracle};
pub use report::{render_report, ConsoleReport, NoopReport};
