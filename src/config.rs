//! Configuration management and validation.
//!
//! Provides the parser configuration: source-specific override data that
//! should stay visible and editable rather than hardcoded in extraction
//! logic.

use crate::constants::DUAL_ROLE_ESPN_IDS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Parser configuration
///
/// Carries the override data applied during stat classification. The
/// defaults match the upstream site's current quirks; a JSON file can
/// replace them when the site changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// ESPN ids evaluated in hitter mode in addition to pitcher mode.
    /// Two-way players accrue both batting and pitching stats, so their
    /// rows must pass through both halves of the category table.
    #[serde(default = "default_dual_role_ids")]
    pub dual_role_espn_ids: Vec<String>,
}

fn default_dual_role_ids() -> Vec<String> {
    DUAL_ROLE_ESPN_IDS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dual_role_espn_ids: default_dual_role_ids(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("failed to read config file {}", path.display()), e)
        })?;

        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        debug!("loaded configuration from {}", path.display());

        Ok(config)
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        for id in &self.dual_role_espn_ids {
            if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
                return Err(Error::configuration(format!(
                    "dual-role override id '{}' is not a numeric player id",
                    id
                )));
            }
        }

        Ok(())
    }

    /// Check whether an id is registered as a two-way player
    pub fn is_dual_role(&self, espn_id: &str) -> bool {
        self.dual_role_espn_ids.iter().any(|id| id == espn_id)
    }
}
