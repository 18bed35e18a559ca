//! `prism config` — print the resolved configuration.

use prism_core::config::PrismConfig;
use prism_core::errors::PipelineError;

pub fn execute(config: &PrismConfig) -> Result<(), PipelineError> {
    let toml = config.to_toml().map_err(PipelineError::Config)?;
    println!("{toml}");
    Ok(())
}
