//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EquivalenceOracle` / `GroupingOracle` - Natural-language judgment
//!   services consulted for condition equivalence and partitioning
//! - `MatrixSource` - Supplier of the scored pattern catalog
//! - `ReportSink` - No-op-safe line-oriented reporting collaborator

mod matrix_source;
mod oracle;
mod report_sink;

pub use matrix_source::{MatrixSource, MatrixSourceError};
pub use oracle::{EquivalenceOracle, GroupingOracle, OracleError};
pub use report_sink::ReportSink;
