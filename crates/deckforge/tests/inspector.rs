//! Integration tests for the inspector: real deckstring, JSON catalog,
//! config file, text and JSON output.

use std::io::Write;

use deckforge::prelude::*;

const WILD_WITH_SIDEBOARD: &str = "AAEBAZCaBgjlsASotgSX7wTvkQXipAX9xAXPxgXGxwUQvp8EobYElrcE+dsEuNwEutwE9vAEhoMFopkF4KQFlMQFu8QFu8cFuJ4Gz54G0Z4GAAED8J8E/cQFuNkE/cQF/+EE/cQFAAA=";

const CATALOG: &str = r#"[
    { "id": 101648, "name": "The Lich King", "cardClass": "DEATHKNIGHT" },
    { "id": 69566, "name": "First Card", "manaCost": 1 },
    { "id": 90749, "name": "Sideboard Owner", "manaCost": 3 },
    { "id": 69616, "name": "Side A", "manaCost": 2 }
]"#;

fn inspector() -> DeckInspector<JsonCatalog> {
    let catalog = JsonCatalog::from_json_str(CATALOG).unwrap();
    DeckInspector::builder().catalog(catalog).build()
}

#[test]
fn test_inspect_known_deck() {
    let report = inspector().inspect(WILD_WITH_SIDEBOARD).unwrap();

    assert_eq!(report.format, Format::Wild);
    assert_eq!(report.heroes.len(), 1);
    assert_eq!(report.heroes[0].name, "The Lich King");
    assert_eq!(report.cards.len(), 24);
    assert_eq!(report.total_cards, 40);

    assert_eq!(report.cards[0].id, 69566);
    assert_eq!(report.cards[0].count, 2);
    assert_eq!(report.cards[0].name, "First Card");
    assert_eq!(report.cards[23].id, 102225);
    assert_eq!(report.cards[23].name, "Unknown card");
}

#[test]
fn test_inspect_groups_sideboard_under_owner() {
    let report = inspector().inspect(WILD_WITH_SIDEBOARD).unwrap();

    assert_eq!(report.sideboards.len(), 1);
    let sideboard = &report.sideboards[0];
    assert_eq!(sideboard.owner, 90749);
    assert_eq!(sideboard.owner_name, "Sideboard Owner");

    let ids: Vec<u32> = sideboard.cards.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![69616, 76984, 78079]);
    assert_eq!(sideboard.cards[0].name, "Side A");
}

#[test]
fn test_text_report_lists_everything() {
    let text = inspector().inspect(WILD_WITH_SIDEBOARD).unwrap().to_string();

    assert!(text.starts_with("Format: wild\nHero: The Lich King (101648)\n"));
    assert!(text.contains("\n2x (1) First Card\n"));
    assert!(text.contains("\nTotal: 40 cards\n"));
    assert!(text.contains("\nSideboard: Sideboard Owner (90749)\n  1x (2) Side A"));
}

#[test]
fn test_json_report_shape() {
    let report = inspector().inspect(WILD_WITH_SIDEBOARD).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["format"], "wild");
    assert_eq!(json["heroes"][0]["id"], 101648);
    assert_eq!(json["cards"].as_array().unwrap().len(), 24);
    assert_eq!(json["sideboards"][0]["owner"], 90749);
    assert_eq!(json["sideboards"][0]["cards"][2]["id"], 78079);
}

#[test]
fn test_inspect_is_deterministic() {
    let inspector = inspector();
    assert_eq!(
        inspector.inspect(WILD_WITH_SIDEBOARD).unwrap(),
        inspector.inspect(WILD_WITH_SIDEBOARD).unwrap()
    );
}

#[test]
fn test_config_file_round_trip() {
    let path = std::env::temp_dir()
        .join(format!("deckforge-config-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, r#"{{"include_sideboards": false, "unknown_card_name": "?"}}"#)
        .unwrap();
    drop(file);

    let config = InspectConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let report = DeckInspector::builder()
        .config(config)
        .build()
        .inspect(WILD_WITH_SIDEBOARD)
        .unwrap();
    assert!(report.sideboards.is_empty());
    assert_eq!(report.heroes[0].name, "?");
}

#[test]
fn test_missing_config_file_is_io_error() {
    let err = InspectConfig::from_path("/no/such/deckforge.json").unwrap_err();
    assert!(matches!(err, DeckforgeError::Io(_)));
}

#[test]
fn test_error_kinds_surface_through_facade() {
    let inspector = inspector();

    let err = inspector.inspect("@@@@").unwrap_err();
    assert!(matches!(
        err,
        DeckforgeError::Deckstring(DeckstringError::InvalidEncoding(_))
    ));

    // "AQEB" decodes to [0x01, 0x01, 0x01]: wrong marker byte.
    let err = inspector.inspect("AQEB").unwrap_err();
    assert!(matches!(
        err,
        DeckforgeError::Deckstring(DeckstringError::InvalidDeckstring)
    ));

    // "AAIB" decodes to [0x00, 0x02, 0x01]: version 2.
    let err = inspector.inspect("AAIB").unwrap_err();
    assert!(matches!(
        err,
        DeckforgeError::Deckstring(DeckstringError::UnsupportedVersion(2))
    ));

    // "AAEB" decodes to [0x00, 0x01, 0x01]: stops before the hero count.
    let err = inspector.inspect("AAEB").unwrap_err();
    assert!(matches!(
        err,
        DeckforgeError::Deckstring(DeckstringError::UnexpectedEndOfInput { .. })
    ));
}
