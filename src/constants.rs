//! Application constants for playerkit
//!
//! This module contains the source names, canonical stat vocabulary,
//! sentinel values, and markup marker patterns used throughout the
//! extraction pipeline.

// =============================================================================
// Data Sources
// =============================================================================

/// ESPN player-rater source name
pub const SOURCE_ESPN: &str = "ESPN";

/// All data sources the factory can dispatch to
pub const SUPPORTED_SOURCES: &[&str] = &[SOURCE_ESPN];

// =============================================================================
// Sentinels and Overrides
// =============================================================================

/// Placeholder text the source renders when a stat has no value
pub const MISSING_VALUE: &str = "--";

/// Owner code marking a free agent (waiver period)
pub const FREE_AGENT_CODE: &str = "WA";

/// ESPN ids of two-way players whose rows carry both batting and pitching
/// stats (39832 = Shohei Ohtani). Rows with these ids are evaluated in
/// hitter mode in addition to pitcher mode.
pub const DUAL_ROLE_ESPN_IDS: &[&str] = &["39832"];

// =============================================================================
// Markup Markers
// =============================================================================

/// Attribute and class patterns identifying the fragments we extract from
pub mod markers {
    /// Pattern extracting the numeric player id from a headshot image URL
    pub const ESPN_ID_PATTERN: &str = r"full/(\d+)\.png";

    /// Class fragment marking the position span inside the player-info cell
    pub const POSITION_CLASS_PATTERN: &str = "playerpos";

    /// Class fragment marking the team element inside the player-info cell
    pub const TEAM_CLASS_PATTERN: &str = "playerteam";

    /// CSS selector for the player-name anchor
    pub const NAME_LINK_SELECTOR: &str = "a.AnchorLink";

    /// Attribute carrying a stat cell's category label
    pub const CATEGORY_ATTR: &str = "title";

    /// Lazy-load image attribute, preferred over the plain src
    pub const IMAGE_LAZY_ATTR: &str = "data-src";

    /// Fallback image attribute
    pub const IMAGE_SRC_ATTR: &str = "src";
}

// =============================================================================
// Row Layout
// =============================================================================

/// Fixed cell offsets within one player-rater table row
pub mod row_layout {
    /// Overall-rank cell
    pub const RANK_CELL: usize = 0;

    /// Player-info cell (headshot, name, positions, team)
    pub const INFO_CELL: usize = 1;

    /// Ownership cell
    pub const OWNER_CELL: usize = 2;

    /// First stat cell; everything from here on is category data
    pub const STAT_CELLS_START: usize = 3;
}

// =============================================================================
// Position Codes
// =============================================================================

/// Role codes with classification significance
pub mod positions {
    /// Starting pitcher
    pub const STARTING_PITCHER: &str = "SP";

    /// Relief pitcher
    pub const RELIEF_PITCHER: &str = "RP";
}

// =============================================================================
// Canonical Stat Vocabulary
// =============================================================================

/// Canonical stat codes produced by the stat field mapper
pub mod stat_codes {
    /// Runs scored
    pub const RUNS: &str = "R";

    /// Home runs
    pub const HOME_RUNS: &str = "HR";

    /// Runs batted in
    pub const RBI: &str = "RBI";

    /// Net stolen bases
    pub const NET_STOLEN_BASES: &str = "SBN";

    /// On-base percentage
    pub const ON_BASE_PCT: &str = "OBP";

    /// Slugging percentage
    pub const SLUGGING_PCT: &str = "SLG";

    /// Innings pitched
    pub const INNINGS_PITCHED: &str = "IP";

    /// Quality starts
    pub const QUALITY_STARTS: &str = "QS";

    /// Earned run average
    pub const ERA: &str = "ERA";

    /// Walks plus hits per innings pitched
    pub const WHIP: &str = "WHIP";

    /// Strikeouts per nine innings
    pub const K_PER_9: &str = "K/9";

    /// Saves plus holds
    pub const SAVES_PLUS_HOLDS: &str = "SVHD";

    /// Percent rostered across leagues
    pub const PCT_ROSTERED: &str = "%ROST";

    /// Player-rater rating
    pub const RATER_RATING: &str = "PRTR";

    /// The complete canonical vocabulary
    pub const ALL: &[&str] = &[
        RUNS,
        HOME_RUNS,
        RBI,
        NET_STOLEN_BASES,
        ON_BASE_PCT,
        SLUGGING_PCT,
        INNINGS_PITCHED,
        QUALITY_STARTS,
        ERA,
        WHIP,
        K_PER_9,
        SAVES_PLUS_HOLDS,
        PCT_ROSTERED,
        RATER_RATING,
    ];
}
