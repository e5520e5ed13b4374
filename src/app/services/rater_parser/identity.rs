//! Player identity extraction
//!
//! Pulls the numeric source identifier out of the headshot image reference
//! and the display name out of the player link, both from the player-info
//! cell of a row.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use super::field_parsers::{first_attr, trimmed_text};
use crate::constants::markers;
use crate::{Error, Result};

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(markers::ESPN_ID_PATTERN).expect("valid id pattern"));

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("valid selector"));

static NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(markers::NAME_LINK_SELECTOR).expect("valid selector"));

/// Extract the numeric player id from the info cell's headshot image
///
/// Prefers the lazy-load attribute over the plain src. Failure to match is
/// unrecoverable for the row; the error carries the cell's visible text so
/// the offending player can be identified in logs.
pub fn extract_espn_id(info_cell: ElementRef<'_>) -> Result<String> {
    let image_ref = info_cell
        .select(&IMG_SELECTOR)
        .next()
        .and_then(|img| first_attr(img, &[markers::IMAGE_LAZY_ATTR, markers::IMAGE_SRC_ATTR]));

    image_ref
        .and_then(|url| ID_PATTERN.captures(url))
        .map(|captures| captures[1].to_string())
        .ok_or_else(|| Error::identity_not_found(trimmed_text(info_cell)))
}

/// Extract the player's display name from the info cell's anchor link
pub fn extract_name(info_cell: ElementRef<'_>) -> Result<String> {
    let anchor = info_cell.select(&NAME_SELECTOR).next().ok_or_else(|| {
        Error::markup_structure(format!(
            "no name link in player cell '{}'",
            trimmed_text(info_cell)
        ))
    })?;

    Ok(trimmed_text(anchor))
}
