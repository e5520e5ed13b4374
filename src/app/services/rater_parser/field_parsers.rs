//! Markup queries and numeric coercion for player-rater cells
//!
//! This module provides the node-query helpers the extractors use against
//! the markup collaborator, plus the sentinel-aware numeric coercions
//! shared by the stat field mapper.

use crate::app::models::StatValue;
use crate::constants::MISSING_VALUE;
use crate::{Error, Result};
use regex::Regex;
use scraper::ElementRef;

/// Find the first descendant element whose class attribute matches a pattern
///
/// The source attaches semantics through generated class names, so callers
/// match on a stable fragment (`playerpos`, `playerteam`) rather than the
/// full class list. `tag` narrows the search to one element name when given.
pub fn find_class_match<'a>(
    root: ElementRef<'a>,
    tag: Option<&str>,
    pattern: &Regex,
) -> Option<ElementRef<'a>> {
    root.descendants().filter_map(ElementRef::wrap).find(|el| {
        tag.map_or(true, |t| el.value().name() == t)
            && el
                .value()
                .attr("class")
                .is_some_and(|class| pattern.is_match(class))
    })
}

/// Collect an element's text with each fragment trimmed
pub fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Read the first present attribute from a list of candidates, in order
pub fn first_attr<'a>(el: ElementRef<'a>, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| el.value().attr(name))
}

/// Coerce a counting-stat cell value to a whole number
///
/// The sentinel placeholder yields `None`; anything else must parse, since a
/// failure means the category was assigned the wrong coercion.
pub fn parse_stat_int(value: &str, category: &str) -> Result<Option<StatValue>> {
    if value == MISSING_VALUE {
        return Ok(None);
    }

    value
        .parse::<i64>()
        .map(|v| Some(StatValue::Int(v)))
        .map_err(|_| Error::stat_parse(category, value))
}

/// Coerce a rate-stat cell value to a float
///
/// Same sentinel contract as [`parse_stat_int`].
pub fn parse_stat_float(value: &str, category: &str) -> Result<Option<StatValue>> {
    if value == MISSING_VALUE {
        return Ok(None);
    }

    value
        .parse::<f64>()
        .map(|v| Some(StatValue::Float(v)))
        .map_err(|_| Error::stat_parse(category, value))
}
