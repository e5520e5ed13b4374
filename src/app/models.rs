//! Data models for player extraction
//!
//! This module contains the core data structures for representing normalized
//! fantasy-baseball player records, the seasonal extraction mode, and the
//! numeric stat values produced by the stat field mapper.

use crate::constants::{FREE_AGENT_CODE, positions, stat_codes};
use crate::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Seasonal Mode
// =============================================================================

/// Seasonal extraction mode
///
/// Determines how counting stats are coerced: preseason projections report
/// whole numbers, in-season actuals report accumulated fractional values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeasonMode {
    /// Preseason projection data
    Projection,
    /// In-season accumulated data
    Actual,
}

impl SeasonMode {
    /// Check whether this mode reports counting stats as whole numbers
    pub fn is_projection(self) -> bool {
        matches!(self, SeasonMode::Projection)
    }
}

impl std::fmt::Display for SeasonMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeasonMode::Projection => write!(f, "projection"),
            SeasonMode::Actual => write!(f, "actual"),
        }
    }
}

// =============================================================================
// Stat Values
// =============================================================================

/// A single normalized stat value
///
/// Counting stats in projection mode carry whole numbers; everything else
/// carries floats. The untagged representation keeps the distinction through
/// JSON: `Int(14)` serializes as `14`, `Float(14.0)` as `14.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
}

impl StatValue {
    /// Numeric value regardless of representation
    pub fn as_f64(self) -> f64 {
        match self {
            StatValue::Int(value) => value as f64,
            StatValue::Float(value) => value,
        }
    }
}

// =============================================================================
// Player Record
// =============================================================================

/// Normalized fantasy-baseball player record
///
/// Assembled once, fully, from the cells of one table row; never mutated
/// afterwards. Stat keys present depend on the player's role and on which
/// categories the row carried; absent categories are missing keys, and a
/// sentinel-valued cell yields an explicit `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display name
    pub name: String,

    /// Team code, uppercased (e.g. "ATL")
    pub team: String,

    /// Numeric source identifier, unique per source
    pub espn_id: String,

    /// Fantasy owner; the waiver code marks a free agent
    pub owner: String,

    /// Role codes in source order; first entry is the primary role
    pub positions: Vec<String>,

    /// Overall player-rater rank
    pub overall_rank: u32,

    /// Canonical stat code to nullable value
    pub stats: HashMap<String, Option<StatValue>>,
}

impl Player {
    /// Create a new player record with validation
    pub fn new(
        name: String,
        team: String,
        espn_id: String,
        owner: String,
        positions: Vec<String>,
        overall_rank: u32,
        stats: HashMap<String, Option<StatValue>>,
    ) -> Result<Self> {
        let player = Self {
            name,
            team,
            espn_id,
            owner,
            positions,
            overall_rank,
            stats,
        };

        player.validate()?;
        Ok(player)
    }

    /// Validate record data for consistency
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::record_validation(
                "player name cannot be empty".to_string(),
            ));
        }

        if !(2..=4).contains(&self.team.len())
            || !self.team.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(Error::record_validation(format!(
                "invalid team code '{}': expected 2-4 uppercase letters",
                self.team
            )));
        }

        if self.espn_id.is_empty() || !self.espn_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::record_validation(format!(
                "invalid espn id '{}': expected a numeric identifier",
                self.espn_id
            )));
        }

        if self.positions.is_empty() || self.positions.iter().any(|p| p.trim().is_empty()) {
            return Err(Error::record_validation(
                "position list cannot be empty".to_string(),
            ));
        }

        if self.overall_rank == 0 {
            return Err(Error::record_validation(
                "overall rank must be positive".to_string(),
            ));
        }

        for code in self.stats.keys() {
            if !stat_codes::ALL.contains(&code.as_str()) {
                return Err(Error::record_validation(format!(
                    "stat code '{}' is not in the canonical vocabulary",
                    code
                )));
            }
        }

        Ok(())
    }

    /// Primary role, the first position in source order
    pub fn primary_position(&self) -> Option<&str> {
        self.positions.first().map(String::as_str)
    }

    /// Check whether the player carries pitching eligibility
    pub fn is_pitcher(&self) -> bool {
        self.positions
            .iter()
            .any(|p| p == positions::STARTING_PITCHER || p == positions::RELIEF_PITCHER)
    }

    /// Check whether the player is a free agent (waiver-code owner)
    pub fn is_free_agent(&self) -> bool {
        self.owner == FREE_AGENT_CODE
    }

    /// Get a stat by canonical code
    ///
    /// Outer `None` means the category was absent from the row; inner `None`
    /// means the source rendered the sentinel placeholder for it.
    pub fn stat(&self, code: &str) -> Option<Option<StatValue>> {
        self.stats.get(code).copied()
    }
}
