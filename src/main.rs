//! Pattern Sherpa binary - wires the adapters and runs the pipeline.

use std::error::Error;
use std::fs;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use pattern_sherpa::adapters::{render_report, ConsoleReport, LlmOracle, LlmOracleConfig, YamlMatrixSource};
use pattern_sherpa::application::DecisionPipeline;
use pattern_sherpa::config::{AppConfig, RunMode};
use pattern_sherpa::domain::requirements::Requirement;
use pattern_sherpa::ports::{EquivalenceOracle, GroupingOracle, MatrixSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let matrix_path = config
        .data
        .matrix_path
        .clone()
        .ok_or("PATTERN_SHERPA__DATA__MATRIX_PATH is required")?;
    let matrix = YamlMatrixSource::new(&matrix_path).load()?;
    info!(
        categories = matrix.categories().len(),
        patterns = matrix.rows().len(),
        "loaded scoring matrix"
    );

    let requirements = match config.engine.run_mode {
        RunMode::Direct => Vec::new(),
        RunMode::FullPipeline => {
            let path = config
                .data
                .requirements_path
                .clone()
                .ok_or("PATTERN_SHERPA__DATA__REQUIREMENTS_PATH is required")?;
            load_requirements(&path)?
        }
    };

    let oracle_config = LlmOracleConfig::new(config.oracle.api_key.clone().unwrap_or_default())
        .with_model(config.oracle.model.clone())
        .with_base_url(config.oracle.base_url.clone())
        .with_timeout(config.oracle.timeout())
        .with_max_retries(config.oracle.max_retries);
    let oracle = Arc::new(LlmOracle::new(oracle_config));
    let equivalence: Arc<dyn EquivalenceOracle> = oracle.clone();
    let grouping: Arc<dyn GroupingOracle> = oracle;

    let pipeline = DecisionPipeline::new(matrix, config.engine.clone(), equivalence, grouping);
    let report = pipeline.run(&requirements).await?;
    info!(concerns = report.concerns.len(), "pipeline finished");

    render_report(&report, &ConsoleReport);
    Ok(())
}

fn load_requirements(path: &str) -> Result<Vec<Requirement>, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
