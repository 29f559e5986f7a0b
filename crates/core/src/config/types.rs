use std::path::PathBuf;

use serde::Deserialize;

/// On-disk shape of `config.toml`.
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Optional seed template override used by `init` and `reset`.
    pub template: Option<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_version() -> u32 {
    1
}

/// Fully resolved configuration the CLI works from.
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// The config file that was read, when one was.
    pub config_path: Option<PathBuf>,
    /// Expanded seed template path, when overridden.
    pub template_path: Option<PathBuf>,
    pub logging: LoggingConfig,
}
