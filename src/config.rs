use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use notos_ranges::RangesPatch;

/// Top-level notos configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotosConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Generator session settings.
    #[serde(default)]
    pub generator: GeneratorToml,

    /// Converter session settings.
    #[serde(default)]
    pub converter: ConverterToml,
}

impl NotosConfig {
    /// Loads configuration from a TOML file. A missing file yields the
    /// defaults, so the CLI works without one.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorToml {
    /// Advance values by bounded random walk instead of holding them
    /// constant.
    #[serde(default)]
    pub use_random_walk: bool,

    /// Partial overrides of the stock walk ranges.
    #[serde(default)]
    pub ranges: RangesPatch,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConverterToml {
    #[serde(default = "default_parameter")]
    pub parameter: String,
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,
}

impl Default for ConverterToml {
    fn default() -> Self {
        Self {
            parameter: default_parameter(),
            decimal_places: default_decimal_places(),
        }
    }
}

fn default_parameter() -> String {
    "precipitation".to_string()
}

fn default_decimal_places() -> usize {
    2
}
