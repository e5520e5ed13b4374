//! Position classification, team, and ownership extraction
//!
//! Derives a player's role codes from the labeled position span, with the
//! source-specific disambiguation rule for spurious relief-pitcher
//! eligibility, and reads the team code and fantasy owner.

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use super::field_parsers::{find_class_match, trimmed_text};
use crate::constants::{markers, positions};
use crate::{Error, Result};

static POSITION_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(markers::POSITION_CLASS_PATTERN).expect("valid class pattern"));

static TEAM_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(markers::TEAM_CLASS_PATTERN).expect("valid class pattern"));

/// Extract the ordered position list from the info cell
///
/// Position players can briefly show RP eligibility after their team's
/// roster gets blown up; when RP appears alongside other positions without
/// SP, it is dropped as spurious.
pub fn extract_positions(info_cell: ElementRef<'_>) -> Result<Vec<String>> {
    let span = find_class_match(info_cell, Some("span"), &POSITION_CLASS).ok_or_else(|| {
        Error::markup_structure(format!(
            "no position marker in player cell '{}'",
            trimmed_text(info_cell)
        ))
    })?;

    let mut position_list: Vec<String> = trimmed_text(span)
        .split(", ")
        .map(str::to_string)
        .collect();

    if position_list.len() > 1
        && position_list.iter().any(|p| p == positions::RELIEF_PITCHER)
        && !position_list
            .iter()
            .any(|p| p == positions::STARTING_PITCHER)
    {
        position_list.retain(|p| p != positions::RELIEF_PITCHER);
    }

    Ok(position_list)
}

/// Extract the uppercased team code from the info cell
pub fn extract_team(info_cell: ElementRef<'_>) -> Result<String> {
    let team_el = find_class_match(info_cell, None, &TEAM_CLASS).ok_or_else(|| {
        Error::markup_structure(format!(
            "no team marker in player cell '{}'",
            trimmed_text(info_cell)
        ))
    })?;

    Ok(trimmed_text(team_el).to_uppercase())
}

/// Extract the fantasy owner from the ownership cell
///
/// Unowned players render the waiver code followed by an availability date;
/// keeping the first whitespace token recovers the owner name in both cases.
pub fn extract_owner(owner_cell: ElementRef<'_>) -> String {
    trimmed_text(owner_cell)
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}
