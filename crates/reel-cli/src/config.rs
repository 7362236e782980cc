use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How records are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-layout text block.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Configuration for reel.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (REEL_* prefix)
/// 3. Config file (~/.config/reel/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set.
    ///
    /// Can be set via:
    /// - ENV: REEL_LOG_LEVEL
    /// - Config: log_level = "debug"
    /// - Default: info
    pub log_level: String,

    /// Output format for records.
    ///
    /// Can be set via:
    /// - CLI: --output json
    /// - ENV: REEL_OUTPUT
    /// - Config: output = "json"
    /// - Default: text
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: String::from("info"),
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from the default config file and environment.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `config_path` (if it exists) and environment
    /// variables with the REEL_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("reel");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build()
            .context("Failed to build configuration")?;

        Ok(config)
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/reel/config.toml
/// - macOS: ~/Library/Application Support/reel/config.toml
/// - Windows: %APPDATA%\reel\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reel")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Reel Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (REEL_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Log filter used when RUST_LOG is not set (error, warn, info, debug, trace).
# Validation diagnostics are logged at info level.
#
# Can also be set via:
# - Environment: REEL_LOG_LEVEL=debug
log_level = "info"

# Output format for records: "text" or "json".
#
# Can also be set via:
# - CLI: reel --output json new --title Heat
# - Environment: REEL_OUTPUT=json
output = "text"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    ensure_config_file_at(&config_file_path())
}

fn ensure_config_file_at(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;
    }

    std::fs::write(config_path, example_config())
        .context("Failed to write config file")?;

    Ok(true)
}
