use serde::{Deserialize, Serialize};

/// Decimal places the factor is rounded to unless configured otherwise
pub const DEFAULT_PRECISION: u32 = 14;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    // Decimal places kept in multiplication_factor
    #[serde(default = "default_precision")]
    pub precision: u32,

    // Indented JSON instead of a single line
    #[serde(default)]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            pretty: false,
        }
    }
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
