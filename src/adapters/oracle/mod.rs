//! Oracle adapters - language-model backed and mock implementations.

mod llm;
mod mock;
mod partition;

pub use llm::{LlmOracle, LlmOracleConfig};
pub use mock::{MockEquivalenceOracle, MockGroupingOracle};
pub use partition::{parse_partition, to_zero_based};
