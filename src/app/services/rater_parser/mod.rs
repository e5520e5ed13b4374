//! Row parser for ESPN player-rater markup
//!
//! This module turns the cells of one player-rater table row into a
//! normalized [`Player`](crate::app::models::Player) record, applying the
//! source's quirks along the way.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Row orchestration and record assembly
//! - [`identity`] - Player id and display-name extraction
//! - [`roles`] - Position classification, team, and ownership extraction
//! - [`stat_mapper`] - Category-label to canonical-code mapping
//! - [`field_parsers`] - Markup node queries and numeric coercion helpers
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use playerkit::app::services::rater_parser::EspnRaterParser;
//! use playerkit::app::models::SeasonMode;
//!
//! # fn example(markup: &str) -> playerkit::Result<()> {
//! let parser = EspnRaterParser::new();
//! let result = parser.parse_str(markup, SeasonMode::Actual)?;
//!
//! println!(
//!     "extracted {} players from {} rows",
//!     result.stats.players_parsed, result.stats.rows_seen
//! );
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod identity;
pub mod parser;
pub mod roles;
pub mod stat_mapper;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::EspnRaterParser;
pub use stats::{ParseResult, ParseStats};
