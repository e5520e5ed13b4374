//! Core player-rater parser implementation
//!
//! This module provides the row orchestration: splitting raw markup into
//! table rows and cells, driving the per-row extractors, and assembling the
//! validated record.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use super::stats::{ParseResult, ParseStats};
use super::{field_parsers, identity, roles, stat_mapper};
use crate::app::models::{Player, SeasonMode};
use crate::config::Config;
use crate::constants::row_layout;
use crate::{Error, Result};

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid selector"));

static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid selector"));

/// Parser for ESPN player-rater markup
///
/// The extraction is a pure, synchronous transform: one row's cells in, one
/// validated record out, repeated per row. Rows are independent and carry no
/// shared state, so the parser holds only its configuration.
#[derive(Debug, Clone, Default)]
pub struct EspnRaterParser {
    config: Config,
}

impl EspnRaterParser {
    /// Create a parser with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with explicit configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Parse raw rater markup and assemble one record per player row
    ///
    /// Rows without data cells (header rows) are structural noise and are
    /// skipped; a row whose identity cannot be resolved aborts the parse,
    /// leaving skip-vs-abort policy to the caller.
    pub fn parse_str(&self, raw_markup: &str, mode: SeasonMode) -> Result<ParseResult> {
        // The HTML5 tree builder discards table cells outside a table
        // context, and upstream fixtures are bare cell runs. Wrapping
        // restores the implied row.
        let document = if raw_markup.to_ascii_lowercase().contains("<table") {
            Html::parse_document(raw_markup)
        } else {
            Html::parse_document(&format!("<table>{}</table>", raw_markup))
        };

        let mut stats = ParseStats::new();
        let mut players = Vec::new();

        for row in document.select(&ROW_SELECTOR) {
            let cells: Vec<ElementRef> = row.select(&CELL_SELECTOR).collect();
            if cells.is_empty() {
                continue;
            }

            stats.rows_seen += 1;
            let player = self.extract_player(&cells, mode)?;
            debug!(
                "assembled record for '{}' ({} stat categories)",
                player.name,
                player.stats.len()
            );
            stats.players_parsed += 1;
            players.push(player);
        }

        info!(
            "parsed {} players from {} rows",
            stats.players_parsed, stats.rows_seen
        );

        Ok(ParseResult { players, stats })
    }

    /// Assemble one record from the cells of one player row
    pub fn extract_player(&self, cells: &[ElementRef<'_>], mode: SeasonMode) -> Result<Player> {
        if cells.len() < row_layout::STAT_CELLS_START {
            return Err(Error::markup_structure(format!(
                "player row has {} cells, expected at least {}",
                cells.len(),
                row_layout::STAT_CELLS_START
            )));
        }

        let info_cell = cells[row_layout::INFO_CELL];

        // Identity first: a row without a resolvable id is unusable and the
        // error must carry the player text before anything else runs.
        let espn_id = identity::extract_espn_id(info_cell)?;
        let name = identity::extract_name(info_cell)?;

        let rank_text = field_parsers::trimmed_text(cells[row_layout::RANK_CELL]);
        let overall_rank: u32 = rank_text.parse().map_err(|_| {
            Error::markup_structure(format!("unparseable overall rank '{}'", rank_text))
        })?;

        let position_list = roles::extract_positions(info_cell)?;
        let team = roles::extract_team(info_cell)?;
        let owner = roles::extract_owner(cells[row_layout::OWNER_CELL]);

        let stats = stat_mapper::map_stat_cells(
            &cells[row_layout::STAT_CELLS_START..],
            &position_list,
            &espn_id,
            mode,
            &self.config,
        )?;

        Player::new(name, team, espn_id, owner, position_list, overall_rank, stats)
    }
}
