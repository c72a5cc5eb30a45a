//! Shared setup for the command-line tools: rules loading and diagnostics.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quartet_core::RulesConfig;
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

pub const RULES_ENV: &str = "QUARTET_RULES";

const DEFAULT_FILTER: &str = "quartet_core=info,quartet_tools=info,quartet_replay=info,fuzz=info";

/// `RUST_LOG` wins when set; otherwise the tools and the engine log at `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

/// Load a TOML rules file. Missing keys fall back to the default rules.
pub fn load_rules(path: &Path) -> Result<RulesConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
    let rules: RulesConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse rules TOML: {}", path.display()))?;
    rules.validate().with_context(|| format!("Invalid rules in {}", path.display()))?;
    Ok(rules)
}

/// Rules from `path` if given, else the default rules.
pub fn rules_or_default(path: Option<&Path>) -> Result<RulesConfig> {
    path.map_or_else(|| Ok(RulesConfig::default()), load_rules)
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Failed to deserialize JSON: {}", path.display()))
}
