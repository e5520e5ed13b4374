//! Stat field mapping for player-rater rows
//!
//! Walks the stat cells of a row, reads each cell's category label, and maps
//! recognized labels to canonical stat codes with mode-aware numeric
//! coercion. The category table is static data so the mapping stays visible
//! and independently testable instead of being buried in branching logic.

use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use tracing::debug;

use super::field_parsers::{parse_stat_float, parse_stat_int, trimmed_text};
use crate::app::models::{SeasonMode, StatValue};
use crate::config::Config;
use crate::constants::{markers, positions, stat_codes};
use crate::Result;

static DIV_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div").expect("valid selector"));

/// Which players a category row applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Batting categories
    Hitter,
    /// Pitching categories
    Pitcher,
    /// Role-independent categories
    Any,
}

/// How a category label is recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRule {
    /// Exact label text
    Exact(&'static str),
    /// Case-sensitive substring
    Contains(&'static str),
    /// Case-insensitive substring; needle must be lowercase
    ContainsCi(&'static str),
}

impl LabelRule {
    fn matches(&self, label: &str) -> bool {
        match self {
            LabelRule::Exact(text) => label == *text,
            LabelRule::Contains(needle) => label.contains(needle),
            LabelRule::ContainsCi(needle) => label.to_lowercase().contains(needle),
        }
    }
}

/// How a recognized value is coerced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Whole number in projection mode, float in actual mode
    Count,
    /// Float in both modes
    Rate,
}

/// One row of the category table
#[derive(Debug, Clone, Copy)]
pub struct CategoryMapping {
    pub scope: Scope,
    pub rule: LabelRule,
    pub code: &'static str,
    pub coercion: Coercion,
}

/// Category-label to canonical-code mapping
pub const STAT_TABLE: &[CategoryMapping] = &[
    CategoryMapping {
        scope: Scope::Hitter,
        rule: LabelRule::Exact("Runs Scored"),
        code: stat_codes::RUNS,
        coercion: Coercion::Count,
    },
    CategoryMapping {
        scope: Scope::Hitter,
        rule: LabelRule::Exact("Home Runs"),
        code: stat_codes::HOME_RUNS,
        coercion: Coercion::Count,
    },
    CategoryMapping {
        scope: Scope::Hitter,
        rule: LabelRule::Exact("Runs Batted In"),
        code: stat_codes::RBI,
        coercion: Coercion::Count,
    },
    CategoryMapping {
        scope: Scope::Hitter,
        rule: LabelRule::Exact("Net Stolen Bases"),
        code: stat_codes::NET_STOLEN_BASES,
        coercion: Coercion::Count,
    },
    CategoryMapping {
        scope: Scope::Hitter,
        rule: LabelRule::Exact("On Base Pct"),
        code: stat_codes::ON_BASE_PCT,
        coercion: Coercion::Rate,
    },
    CategoryMapping {
        scope: Scope::Hitter,
        rule: LabelRule::Exact("Slugging Pct"),
        code: stat_codes::SLUGGING_PCT,
        coercion: Coercion::Rate,
    },
    CategoryMapping {
        scope: Scope::Pitcher,
        rule: LabelRule::Exact("Innings Pitched"),
        code: stat_codes::INNINGS_PITCHED,
        coercion: Coercion::Rate,
    },
    CategoryMapping {
        scope: Scope::Pitcher,
        rule: LabelRule::Exact("Quality Starts"),
        code: stat_codes::QUALITY_STARTS,
        coercion: Coercion::Count,
    },
    CategoryMapping {
        scope: Scope::Pitcher,
        rule: LabelRule::Exact("Earned Run Average"),
        code: stat_codes::ERA,
        coercion: Coercion::Rate,
    },
    CategoryMapping {
        scope: Scope::Pitcher,
        rule: LabelRule::Exact("Walks plus Hits Per Innings Pitched"),
        code: stat_codes::WHIP,
        coercion: Coercion::Rate,
    },
    CategoryMapping {
        scope: Scope::Pitcher,
        rule: LabelRule::Exact("Strikeouts per 9 Innings"),
        code: stat_codes::K_PER_9,
        coercion: Coercion::Rate,
    },
    CategoryMapping {
        scope: Scope::Pitcher,
        rule: LabelRule::Exact("Saves Plus Holds"),
        code: stat_codes::SAVES_PLUS_HOLDS,
        coercion: Coercion::Count,
    },
    CategoryMapping {
        scope: Scope::Any,
        rule: LabelRule::ContainsCi("rostered"),
        code: stat_codes::PCT_ROSTERED,
        coercion: Coercion::Rate,
    },
    CategoryMapping {
        scope: Scope::Any,
        rule: LabelRule::Contains("Rating"),
        code: stat_codes::RATER_RATING,
        coercion: Coercion::Rate,
    },
];

/// Map a row's stat cells to canonical codes
///
/// A player is evaluated in pitcher mode when the position list carries SP
/// or RP, and in hitter mode otherwise. Registered two-way ids are
/// evaluated in hitter mode in addition to pitcher mode, since those rows
/// accrue both batting and pitching stats. Cells with no category label are
/// expected spacer cells and are skipped; unrecognized labels are dropped.
pub fn map_stat_cells(
    cells: &[ElementRef<'_>],
    position_list: &[String],
    espn_id: &str,
    mode: SeasonMode,
    config: &Config,
) -> Result<HashMap<String, Option<StatValue>>> {
    let pitcher = position_list
        .iter()
        .any(|p| p == positions::STARTING_PITCHER || p == positions::RELIEF_PITCHER);
    let hitter = !pitcher || config.is_dual_role(espn_id);

    let mut stats = HashMap::new();

    for cell in cells {
        let Some(category) = category_label(*cell) else {
            continue;
        };
        let value = trimmed_text(*cell);

        let mut recognized = false;
        for mapping in STAT_TABLE {
            let in_scope = match mapping.scope {
                Scope::Hitter => hitter,
                Scope::Pitcher => pitcher,
                Scope::Any => true,
            };
            if !in_scope || !mapping.rule.matches(&category) {
                continue;
            }

            recognized = true;
            stats.insert(
                mapping.code.to_string(),
                coerce(&value, mapping.coercion, mode, &category)?,
            );
        }

        if !recognized {
            debug!("dropping unrecognized category '{}'", category);
        }
    }

    Ok(stats)
}

/// Read a cell's category label from its nested element's title attribute
///
/// Spacer and legend cells carry no title; those return `None`.
fn category_label(cell: ElementRef<'_>) -> Option<String> {
    cell.select(&DIV_SELECTOR)
        .next()
        .and_then(|div| div.value().attr(markers::CATEGORY_ATTR))
        .map(str::to_string)
}

fn coerce(
    value: &str,
    coercion: Coercion,
    mode: SeasonMode,
    category: &str,
) -> Result<Option<StatValue>> {
    match coercion {
        Coercion::Count if mode.is_projection() => parse_stat_int(value, category),
        _ => parse_stat_float(value, category),
    }
}
