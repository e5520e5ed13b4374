//! Integration tests for the rater parser through the public API
//!
//! These tests exercise the end-to-end pipeline with realistic rater-page
//! markup: identity, role classification, ownership, and mode-aware stat
//! mapping.

use playerkit::app::services::rater_parser::EspnRaterParser;
use playerkit::{Player, SeasonMode, StatValue};

/// A realistic two-row rater page: one owned outfielder, one waiver-wire
/// starting pitcher.
fn sample_page() -> &'static str {
    r#"<table class="Table Table--align-right">
      <thead>
        <tr class="Table__TR"><th>RNK</th><th>Player</th><th>Owner</th><th>R</th><th>HR</th></tr>
      </thead>
      <tbody>
        <tr class="Table__TR Table__even">
          <td class="Table__TD">1</td>
          <td class="Table__TD"><div class="player-column__athlete">
            <img alt="Ronald Acuna Jr." class="player-headshot"
                 data-src="https://a.espncdn.com/combiner/i?img=/i/headshots/mlb/players/full/36185.png&amp;w=96&amp;h=70" />
            <a class="AnchorLink link clr-link" href="/mlb/player/_/id/36185">Ronald Acuna Jr.</a>
            <span class="playerinfo__playerpos ttu">OF</span>
            <span class="playerinfo__playerteam pr2">Atl</span>
          </div></td>
          <td class="Table__TD">TeamOwner  (Wire: 1/1)</td>
          <td class="Table__TD"><div title="Runs Scored" class="table--cell tar">98</div></td>
          <td class="Table__TD"><div title="Home Runs" class="table--cell tar">14</div></td>
          <td class="Table__TD"><div title="Slugging Pct" class="table--cell tar">--</div></td>
          <td class="Table__TD"><div class="table--cell total">&nbsp;</div></td>
          <td class="Table__TD"><div title="% Rostered" class="table--cell tar">99.8</div></td>
        </tr>
        <tr class="Table__TR Table__odd">
          <td class="Table__TD">2</td>
          <td class="Table__TD"><div class="player-column__athlete">
            <img alt="Gerrit Cole" class="player-headshot"
                 data-src="https://a.espncdn.com/combiner/i?img=/i/headshots/mlb/players/full/32081.png&amp;w=96&amp;h=70" />
            <a class="AnchorLink link clr-link" href="/mlb/player/_/id/32081">Gerrit Cole</a>
            <span class="playerinfo__playerpos ttu">SP</span>
            <span class="playerinfo__playerteam pr2">NYY</span>
          </div></td>
          <td class="Table__TD">WA (Wed 1/1)</td>
          <td class="Table__TD"><div title="Innings Pitched" class="table--cell tar">180.1</div></td>
          <td class="Table__TD"><div title="Earned Run Average" class="table--cell tar">2.63</div></td>
          <td class="Table__TD"><div title="Home Runs" class="table--cell tar">1</div></td>
        </tr>
      </tbody>
    </table>"#
}

#[test]
fn test_end_to_end_actual_mode() {
    let parser = EspnRaterParser::new();
    let result = parser.parse_str(sample_page(), SeasonMode::Actual).unwrap();

    assert_eq!(result.stats.rows_seen, 2);
    assert_eq!(result.stats.players_parsed, 2);
    assert_eq!(result.players.len(), 2);

    let acuna = &result.players[0];
    assert_eq!(acuna.name, "Ronald Acuna Jr.");
    assert_eq!(acuna.team, "ATL");
    assert_eq!(acuna.espn_id, "36185");
    assert_eq!(acuna.owner, "TeamOwner");
    assert_eq!(acuna.overall_rank, 1);
    assert!(!acuna.is_free_agent());
    // In-season counting stats come back as accumulated floats
    assert_eq!(acuna.stat("HR"), Some(Some(StatValue::Float(14.0))));
    assert_eq!(acuna.stat("R"), Some(Some(StatValue::Float(98.0))));
    // Sentinel-valued cells are explicit nulls, not missing keys
    assert_eq!(acuna.stat("SLG"), Some(None));
    assert_eq!(acuna.stat("%ROST"), Some(Some(StatValue::Float(99.8))));

    let cole = &result.players[1];
    assert_eq!(cole.owner, "WA");
    assert!(cole.is_free_agent());
    assert!(cole.is_pitcher());
    assert_eq!(cole.stat("IP"), Some(Some(StatValue::Float(180.1))));
    assert_eq!(cole.stat("ERA"), Some(Some(StatValue::Float(2.63))));
    // Batting categories never attach to a pure pitcher
    assert_eq!(cole.stat("HR"), None);
}

#[test]
fn test_end_to_end_projection_mode() {
    let parser = EspnRaterParser::new();
    let result = parser
        .parse_str(sample_page(), SeasonMode::Projection)
        .unwrap();

    let acuna = &result.players[0];
    assert_eq!(acuna.stat("HR"), Some(Some(StatValue::Int(14))));
    assert_eq!(acuna.stat("R"), Some(Some(StatValue::Int(98))));
    // Rate stats stay floats regardless of mode
    assert_eq!(acuna.stat("%ROST"), Some(Some(StatValue::Float(99.8))));
}

#[test]
fn test_records_serialize_and_round_trip() {
    let parser = EspnRaterParser::new();
    let result = parser.parse_str(sample_page(), SeasonMode::Actual).unwrap();

    let json = serde_json::to_string(&result.players).unwrap();
    let restored: Vec<Player> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, result.players);

    // Projection whole numbers survive serialization as integers
    let projected = parser
        .parse_str(sample_page(), SeasonMode::Projection)
        .unwrap();
    let value = serde_json::to_value(&projected.players[0]).unwrap();
    assert_eq!(value["stats"]["HR"], serde_json::json!(14));
}

#[test]
fn test_two_way_player_accrues_both_stat_sides() {
    let markup = r#"<table><tbody><tr>
      <td>5</td>
      <td><div>
        <img data-src="https://a.espncdn.com/combiner/i?img=/i/headshots/mlb/players/full/39832.png&amp;w=96" />
        <a class="AnchorLink" href="/mlb/player/_/id/39832">Shohei Ohtani</a>
        <span class="playerinfo__playerpos ttu">DH, SP</span>
        <span class="playerinfo__playerteam pr2">LAD</span>
      </div></td>
      <td>BigSpender  (Wire: 1/1)</td>
      <td><div title="Home Runs">44</div></td>
      <td><div title="Innings Pitched">132.0</div></td>
      <td><div title="Quality Starts">18</div></td>
    </tr></tbody></table>"#;

    let result = EspnRaterParser::new()
        .parse_str(markup, SeasonMode::Actual)
        .unwrap();

    let ohtani = &result.players[0];
    assert_eq!(ohtani.positions, vec!["DH", "SP"]);
    assert_eq!(ohtani.stat("HR"), Some(Some(StatValue::Float(44.0))));
    assert_eq!(ohtani.stat("IP"), Some(Some(StatValue::Float(132.0))));
    assert_eq!(ohtani.stat("QS"), Some(Some(StatValue::Float(18.0))));
}
