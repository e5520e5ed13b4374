//! Parsing statistics and result structures for player-rater processing

use crate::app::models::Player;

/// Parsing result with player records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully assembled player records
    pub players: Vec<Player>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of player rows encountered
    pub rows_seen: usize,

    /// Number of records successfully assembled
    pub players_parsed: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }
}
