//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lumina/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::explain::ReadingLevel;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LuminaConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub reading_level: Option<ReadingLevel>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_URL: &str = "https://luminamed-ai-production.up.railway.app";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const API_URL_ENV: &str = "LUMINA_API_URL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_url: String,
    /// `None` means the request is never cut short.
    pub timeout: Option<Duration>,
    pub reading_level: ReadingLevel,
    pub log_level: LevelFilter,
}

/// Values that came from command-line flags. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub reading_level: Option<ReadingLevel>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lumina/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lumina").join("config.toml"))
}

/// Load config from `~/.lumina/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LuminaConfig::default()`.
pub fn load_config() -> Result<LuminaConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(LuminaConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<LuminaConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(LuminaConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LuminaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Lumina Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "https://luminamed-ai-production.up.railway.app"   # Or set LUMINA_API_URL
# timeout_secs = 60                  # Unset = wait as long as the transport does

# [general]
# reading_level = "intermediate"     # "basic", "intermediate", "advanced"
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &LuminaConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, std::env::var(API_URL_ENV).ok())
}

/// Same as [`resolve`] with the environment value passed in.
pub fn resolve_with_env(
    config: &LuminaConfig,
    cli: &CliOverrides,
    env_api_url: Option<String>,
) -> ResolvedConfig {
    // API URL: CLI → env → config → default
    let non_blank = |url: &String| !url.trim().is_empty();
    let api_url = cli
        .api_url
        .clone()
        .filter(non_blank)
        .or(env_api_url.filter(non_blank))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let reading_level = cli
        .reading_level
        .or(config.general.reading_level)
        .unwrap_or_default();

    ResolvedConfig {
        api_url,
        timeout: config.api.timeout_secs.map(Duration::from_secs),
        reading_level,
        log_level: resolve_log_level(config.general.log_level.as_deref()),
    }
}

fn resolve_log_level(raw: Option<&str>) -> LevelFilter {
    match raw {
        None => DEFAULT_LOG_LEVEL,
        Some(s) => s.parse().unwrap_or_else(|_| {
            warn!("Unknown log_level '{}', using {}", s, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
    }
}
