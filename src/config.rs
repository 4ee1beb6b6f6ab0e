//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Overrides `submission_endpoint` when set and non-empty
pub const SUBMISSION_URL_ENV: &str = "GROWDIT_SUBMISSION_URL";

pub const DEFAULT_RESET_SECS: u64 = 10;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GrowditConfig {
    /// Where registrations are POSTed
    pub submission_endpoint: Option<String>,
    /// Dialing code the form starts on
    pub default_country_code: Option<String>,
    /// Seconds the confirmation stays up before the form resets
    pub success_reset_secs: Option<u64>,
    /// Extra string fields added to every payload
    #[serde(default)]
    pub extra_fields: BTreeMap<String, String>,
}

impl GrowditConfig {
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "growdit", "growdit-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load from the platform config dir, writing a default file on first run
    pub fn load_or_init() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_init_at(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_or_init_at(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Self::default();
        config.save_to(path)?;
        tracing::info!("Wrote default config to {}", path.display());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Endpoint after applying the environment override
    pub fn submission_endpoint(&self) -> Option<String> {
        resolve_endpoint(
            std::env::var(SUBMISSION_URL_ENV).ok(),
            self.submission_endpoint.as_deref(),
        )
    }

    pub fn reset_cooldown(&self) -> Duration {
        Duration::from_secs(self.success_reset_secs.unwrap_or(DEFAULT_RESET_SECS))
    }
}

fn resolve_endpoint(env: Option<String>, file: Option<&str>) -> Option<String> {
    env.filter(|v| !v.trim().is_empty())
        .or_else(|| file.map(str::to_string))
}
