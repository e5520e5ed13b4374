//! Playerkit Library
//!
//! A Rust library for extracting fantasy-baseball player records from ESPN
//! player-rater HTML and normalizing them into uniform, serializable records.
//!
//! This library provides tools for:
//! - Locating a player's identity, roster status, and team within a table row
//! - Classifying positions with source-specific disambiguation rules
//! - Mapping human-readable stat category labels to canonical stat codes
//! - Mode-aware numeric coercion (preseason projections vs. in-season actuals)
//! - Assembling validated, immutable player records one row at a time

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod player_factory;
        pub mod rater_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Player, SeasonMode, StatValue};
pub use app::services::player_factory::PlayerFactory;
pub use config::Config;

/// Result type alias for playerkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for player extraction and record assembly
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The player-id pattern failed to match the row's image reference.
    /// Fatal for the row; the caller decides whether to skip or abort.
    #[error("could not find player id in image reference for '{player_text}'")]
    IdentityNotFound { player_text: String },

    /// Unrecognized data source name passed to the factory
    #[error("unknown data source: {source}")]
    UnknownSource { source: String },

    /// A row is missing structure the extractor requires
    #[error("malformed player row: {message}")]
    MarkupStructure { message: String },

    /// A non-sentinel stat value failed numeric coercion
    #[error("could not parse value '{value}' for category '{category}'")]
    StatParse { category: String, value: String },

    /// An assembled record failed validation
    #[error("record validation error: {message}")]
    RecordValidation { message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization or deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an identity-not-found error carrying the cell's visible text
    pub fn identity_not_found(player_text: impl Into<String>) -> Self {
        Self::IdentityNotFound {
            player_text: player_text.into(),
        }
    }

    /// Create an unknown-source error
    pub fn unknown_source(source: impl Into<String>) -> Self {
        Self::UnknownSource {
            source: source.into(),
        }
    }

    /// Create a markup structure error
    pub fn markup_structure(message: impl Into<String>) -> Self {
        Self::MarkupStructure {
            message: message.into(),
        }
    }

    /// Create a stat parse error for a non-sentinel value
    pub fn stat_parse(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self::StatParse {
            category: category.into(),
            value: value.into(),
        }
    }

    /// Create a record validation error
    pub fn record_validation(message: impl Into<String>) -> Self {
        Self::RecordValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
