//! Configuration file support for cve-info-fetcher.
//!
//! Provides YAML-based configuration through `cve-fetcher.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::network::{LookupClientSettings, RetryPolicy};
use crate::application::dto::DEFAULT_PACING;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "cve-fetcher.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_attempts: Option<u32>,
    pub initial_backoff_secs: Option<u64>,
    pub max_backoff_secs: Option<u64>,
    pub pacing_ms: Option<u64>,
    pub output_dir: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty configuration
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "config file loaded");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref api_url) = config.api_url {
        validate_api_url(api_url)?;
    }
    if config.max_attempts == Some(0) {
        bail!(
            "Invalid config: max_attempts must be at least 1.\n\n\
             💡 Hint: Use 1 to disable retries."
        );
    }
    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: The default request timeout is 10 seconds."
        );
    }
    let initial = config
        .initial_backoff_secs
        .unwrap_or(RetryPolicy::DEFAULT_INITIAL_BACKOFF.as_secs());
    let max = config
        .max_backoff_secs
        .unwrap_or(RetryPolicy::DEFAULT_MAX_BACKOFF.as_secs());
    if initial > max {
        bail!(
            "Invalid config: initial_backoff_secs ({}) must not exceed max_backoff_secs ({}).\n\n\
             💡 Hint: Lower initial_backoff_secs or raise max_backoff_secs.",
            initial,
            max
        );
    }
    Ok(())
}

/// Checks that a lookup service URL is an absolute http(s) URL.
pub fn validate_api_url(api_url: &str) -> Result<()> {
    let trimmed = api_url.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://"))
        || trimmed.trim_end_matches('/').ends_with(':')
    {
        bail!(
            "Invalid API URL: '{}'\n\n💡 Hint: Use an absolute http(s) URL such as https://cve.circl.lu",
            api_url
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
        tracing::warn!(field = %key, "unknown config field");
    }
}

/// Values given on the command line; `None` means "not specified"
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_attempts: Option<u32>,
    pub pacing_ms: Option<u64>,
    pub output_dir: Option<PathBuf>,
}

/// Effective settings for one invocation after merging CLI, config and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub client: LookupClientSettings,
    pub pacing: Duration,
    pub output_dir: PathBuf,
}

impl RunSettings {
    /// Merges with precedence: CLI flag > config file > built-in default.
    pub fn resolve(cli: &CliOverrides, config: Option<&ConfigFile>) -> Result<Self> {
        let defaults = LookupClientSettings::default();
        let default_policy = defaults.retry_policy;

        let api_url = cli
            .api_url
            .clone()
            .or_else(|| config.and_then(|c| c.api_url.clone()))
            .unwrap_or(defaults.api_url);
        validate_api_url(&api_url)?;

        let timeout_secs = cli
            .timeout_secs
            .or_else(|| config.and_then(|c| c.timeout_secs))
            .unwrap_or(defaults.timeout.as_secs());
        if timeout_secs == 0 {
            bail!("Invalid timeout: must be greater than 0 seconds");
        }

        let max_attempts = cli
            .max_attempts
            .or_else(|| config.and_then(|c| c.max_attempts))
            .unwrap_or(default_policy.max_attempts);
        if max_attempts == 0 {
            bail!("Invalid max attempts: must be at least 1");
        }

        let initial_backoff = config
            .and_then(|c| c.initial_backoff_secs)
            .map(Duration::from_secs)
            .unwrap_or(default_policy.initial_backoff);
        let max_backoff = config
            .and_then(|c| c.max_backoff_secs)
            .map(Duration::from_secs)
            .unwrap_or(default_policy.max_backoff);

        let pacing = cli
            .pacing_ms
            .or_else(|| config.and_then(|c| c.pacing_ms))
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_PACING);

        let output_dir = cli
            .output_dir
            .clone()
            .or_else(|| config.and_then(|c| c.output_dir.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            client: LookupClientSettings {
                api_url,
                timeout: Duration::from_secs(timeout_secs),
                retry_policy: RetryPolicy::new(max_attempts, initial_backoff, max_backoff),
            },
            pacing,
            output_dir,
        })
    }
}
