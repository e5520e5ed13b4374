//! Tests for player identity extraction

use scraper::{Html, Selector};

use super::{info_cell, info_cell_no_image, info_cell_src_only, wrap_cells};
use crate::Error;
use crate::app::services::rater_parser::identity::{extract_espn_id, extract_name};

fn first_cell(document: &Html) -> scraper::ElementRef<'_> {
    let selector = Selector::parse("td").unwrap();
    document.select(&selector).next().unwrap()
}

#[test]
fn test_extract_id_from_lazy_attribute() {
    let html = wrap_cells(&info_cell("36185", "Ronald Acuna Jr.", "OF", "Atl"));
    let document = Html::parse_document(&html);

    let id = extract_espn_id(first_cell(&document)).unwrap();
    assert_eq!(id, "36185");
    assert!(id.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_extract_id_is_deterministic() {
    let html = wrap_cells(&info_cell("39832", "Shohei Ohtani", "DH, SP", "LAA"));
    let document = Html::parse_document(&html);

    let first = extract_espn_id(first_cell(&document)).unwrap();
    let second = extract_espn_id(first_cell(&document)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_lazy_attribute_preferred_over_src() {
    let html = wrap_cells(
        r##"<td><div>
            <img data-src="https://cdn.example.com/headshots/full/11111.png"
                 src="https://cdn.example.com/headshots/full/22222.png" />
            <a class="AnchorLink" href="#">Someone</a>
        </div></td>"##,
    );
    let document = Html::parse_document(&html);

    assert_eq!(extract_espn_id(first_cell(&document)).unwrap(), "11111");
}

#[test]
fn test_fallback_to_src_attribute() {
    let html = wrap_cells(&info_cell_src_only("32081", "Gerrit Cole", "SP", "NYY"));
    let document = Html::parse_document(&html);

    assert_eq!(extract_espn_id(first_cell(&document)).unwrap(), "32081");
}

#[test]
fn test_missing_image_is_identity_not_found() {
    let html = wrap_cells(&info_cell_no_image("Ronald Acuna Jr.", "OF", "Atl"));
    let document = Html::parse_document(&html);

    let result = extract_espn_id(first_cell(&document));
    // The diagnostic carries the cell's visible text so the row can be found
    match result {
        Err(Error::IdentityNotFound { player_text }) => {
            assert!(player_text.contains("Ronald"));
        }
        other => panic!("expected IdentityNotFound, got {:?}", other),
    }
}

#[test]
fn test_non_matching_image_url_is_identity_not_found() {
    let html = wrap_cells(
        r##"<td><div>
            <img data-src="https://cdn.example.com/logos/atl.svg" />
            <a class="AnchorLink" href="#">Someone</a>
        </div></td>"##,
    );
    let document = Html::parse_document(&html);

    assert!(matches!(
        extract_espn_id(first_cell(&document)),
        Err(Error::IdentityNotFound { .. })
    ));
}

#[test]
fn test_extract_name() {
    let html = wrap_cells(&info_cell("36185", "Ronald Acuna Jr.", "OF", "Atl"));
    let document = Html::parse_document(&html);

    assert_eq!(
        extract_name(first_cell(&document)).unwrap(),
        "Ronald Acuna Jr."
    );
}

#[test]
fn test_missing_name_link_is_structure_error() {
    let html = wrap_cells(
        r#"<td><div>
            <img data-src="https://cdn.example.com/headshots/full/36185.png" />
            <span class="playerinfo__playerpos ttu">OF</span>
        </div></td>"#,
    );
    let document = Html::parse_document(&html);

    assert!(matches!(
        extract_name(first_cell(&document)),
        Err(Error::MarkupStructure { .. })
    ));
}
