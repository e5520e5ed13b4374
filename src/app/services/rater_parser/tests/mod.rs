//! Test utilities for player-rater parser testing
//!
//! This module provides fixture builders producing realistic rater-row
//! markup, used across the component test modules.

// Test modules
mod identity_tests;

/// Build a player-info cell with a lazy-loaded headshot
pub fn info_cell(espn_id: &str, name: &str, position_text: &str, team: &str) -> String {
    format!(
        r#"<td class="Table__TD"><div class="player-column__athlete">
            <img alt="{name}" class="player-headshot"
                 data-src="https://a.espncdn.com/combiner/i?img=/i/headshots/mlb/players/full/{espn_id}.png&amp;w=96&amp;h=70" />
            <a class="AnchorLink link clr-link" href="/mlb/player/_/id/{espn_id}" tabindex="0">{name}</a>
            <span class="playerinfo__playerpos ttu">{position_text}</span>
            <span class="playerinfo__playerteam pr2">{team}</span>
        </div></td>"#
    )
}

/// Build a player-info cell whose headshot only carries the plain src
pub fn info_cell_src_only(espn_id: &str, name: &str, position_text: &str, team: &str) -> String {
    format!(
        r#"<td class="Table__TD"><div class="player-column__athlete">
            <img alt="{name}" class="player-headshot"
                 src="https://a.espncdn.com/combiner/i?img=/i/headshots/mlb/players/full/{espn_id}.png&amp;w=96&amp;h=70" />
            <a class="AnchorLink link clr-link" href="/mlb/player/_/id/{espn_id}" tabindex="0">{name}</a>
            <span class="playerinfo__playerpos ttu">{position_text}</span>
            <span class="playerinfo__playerteam pr2">{team}</span>
        </div></td>"#
    )
}

/// Build a player-info cell with no headshot image at all
pub fn info_cell_no_image(name: &str, position_text: &str, team: &str) -> String {
    format!(
        r##"<td class="Table__TD"><div class="player-column__athlete">
            <a class="AnchorLink link clr-link" href="#" tabindex="0">{name}</a>
            <span class="playerinfo__playerpos ttu">{position_text}</span>
            <span class="playerinfo__playerteam pr2">{team}</span>
        </div></td>"##
    )
}

/// Build a stat cell with a titled category div
pub fn stat_cell(category: &str, value: &str) -> String {
    format!(
        r#"<td class="Table__TD"><div title="{category}" class="table--cell tar">{value}</div></td>"#
    )
}

/// Build a spacer cell carrying no category title
pub fn spacer_cell() -> String {
    r#"<td class="Table__TD"><div class="table--cell total">&nbsp;</div></td>"#.to_string()
}

/// Wrap a run of cells into a single-row table
pub fn wrap_cells(cells: &str) -> String {
    format!("<table><tbody><tr class=\"Table__TR\">{cells}</tr></tbody></table>")
}

/// Build a complete rater table from (rank, info cell, owner, stat cells) rows
pub fn sample_table(rows: &[(&str, String, &str, Vec<String>)]) -> String {
    let mut body = String::new();
    for (rank, info, owner, stat_cells) in rows {
        body.push_str(&format!(
            r#"<tr class="Table__TR"><td class="Table__TD">{rank}</td>{info}<td class="Table__TD">{owner}</td>{stats}</tr>"#,
            stats = stat_cells.concat(),
        ));
    }
    format!("<table class=\"Table\"><tbody>{body}</tbody></table>")
}
