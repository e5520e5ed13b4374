//! Record factory dispatching on data source
//!
//! The factory is the batch entry point: it accepts a source name and raw
//! markup, selects the source-specific extractor, and produces one record
//! per player row. Row-level identity failures propagate to the caller
//! unchanged; there is no automatic skipping at this level.

use scraper::ElementRef;
use tracing::debug;

use crate::app::models::{Player, SeasonMode};
use crate::app::services::rater_parser::EspnRaterParser;
use crate::config::Config;
use crate::constants::SOURCE_ESPN;
use crate::{Error, Result};

/// Factory producing player records from raw source markup
#[derive(Debug, Clone, Copy)]
pub struct PlayerFactory;

impl PlayerFactory {
    /// Create player records from raw markup with default configuration
    pub fn create_players(
        source: &str,
        raw_markup: &str,
        mode: SeasonMode,
    ) -> Result<Vec<Player>> {
        Self::create_players_with_config(source, raw_markup, mode, Config::default())
    }

    /// Create player records from raw markup with explicit configuration
    pub fn create_players_with_config(
        source: &str,
        raw_markup: &str,
        mode: SeasonMode,
        config: Config,
    ) -> Result<Vec<Player>> {
        match source {
            SOURCE_ESPN => {
                debug!("dispatching {} markup to rater parser", source);
                let parser = EspnRaterParser::with_config(config);
                Ok(parser.parse_str(raw_markup, mode)?.players)
            }
            _ => Err(Error::unknown_source(source)),
        }
    }

    /// Create one player record from the cells of one already-split row
    pub fn create_player(
        source: &str,
        cells: &[ElementRef<'_>],
        mode: SeasonMode,
        config: &Config,
    ) -> Result<Player> {
        match source {
            SOURCE_ESPN => {
                EspnRaterParser::with_config(config.clone()).extract_player(cells, mode)
            }
            _ => Err(Error::unknown_source(source)),
        }
    }
}
