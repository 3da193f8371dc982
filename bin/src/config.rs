use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, ValueEnum, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LogFormat {
    /// Single-line events
    #[default]
    Compact,
    /// Default tracing-subscriber layout
    Full,
    /// Multi-line, human oriented
    Pretty,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Config {
    /// Input settings
    #[serde(default)]
    pub input: InputConfig,
    /// Vertex removal settings
    #[serde(default)]
    pub removal: RemovalConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct InputConfig {
    /// OBJ file to edit; prompted for when missing
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Bounds-check texture and normal indices too
    #[serde(default)]
    pub strict_indices: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct RemovalConfig {
    /// Zero-based vertex indices to remove; prompted for when empty
    #[serde(default)]
    pub vertices: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct OutputConfig {
    /// Destination file; prompted for when missing
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Write the result back over the input file
    #[serde(default)]
    pub overwrite: bool,
    /// Read the saved file back and compare it with the edited model
    #[serde(default = "default_verify")]
    pub verify: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct LoggingConfig {
    /// tracing-subscriber filter directives
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_verify() -> bool {
    true
}

fn default_filter() -> String {
    "warn,objcull=info".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: None,
            overwrite: false,
            verify: default_verify(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: default_filter(),
            format: LogFormat::Compact,
        }
    }
}

impl Config {

    pub fn load(config_path: &Path) -> anyhow::Result<Config> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config: Config = match config_path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&config_str)?,
            Some("toml") => toml::from_str(&config_str)?,
            _ => bail!("Unsupported config file format. Use .json or .toml"),
        };
        Ok(config)
    }

    pub fn save_default(config_path: &Path) -> anyhow::Result<()> {
        let config = Config::default();
        let config_str = match config_path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::to_string_pretty(&config)?,
            _ => serde_json::to_string_pretty(&config)?, // Default to JSON
        };

        let mut file = File::create(config_path)
            .with_context(|| format!("Failed to create {}", config_path.display()))?;
        file.write_all(config_str.as_bytes())?;
        println!("Generated default configuration file: {}", config_path.display());
        Ok(())
    }

}
