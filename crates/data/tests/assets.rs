use skirmish_core::{text_keys, Phase, Rank, TextLookup, TimingConfig};
use skirmish_data::{load_board, load_locale, load_timing_config};
use std::path::PathBuf;

fn assets_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

#[test]
fn shipped_locales_define_every_key() {
    for code in ["en_US", "fr_FR"] {
        let table = load_locale(&assets_root(), Some(code)).expect("load locale");
        assert_eq!(table.code(), code);
        assert!(
            table.missing_keys(&text_keys::ALL).is_empty(),
            "{code} is missing {:?}",
            table.missing_keys(&text_keys::ALL)
        );
    }
}

#[test]
fn french_table_translates_sacrifice_label() {
    let table = load_locale(&assets_root(), Some("fr")).expect("load locale");
    assert_eq!(table.text(text_keys::SACRIFICE_LABEL), "Sacrifier");
}

#[test]
fn unknown_locale_falls_back_to_english() {
    let table = load_locale(&assets_root(), Some("xx-YY")).expect("load locale");
    assert_eq!(table.code(), "en_US");
    assert_eq!(table.text("not.a.key"), "not.a.key");
}

#[test]
fn timing_file_matches_defaults() {
    let config = load_timing_config(&assets_root()).expect("load timing");
    assert_eq!(config, TimingConfig::default());
}

#[test]
fn missing_timing_file_uses_defaults() {
    let config = load_timing_config(&assets_root().join("locales")).expect("load timing");
    assert_eq!(config, TimingConfig::default());
}

#[test]
fn sample_board_resolves_all_cards() {
    let report = load_board(&assets_root().join("boards").join("sample.json")).expect("load board");
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    let board = report.board;
    assert_eq!(board.phase, Phase::Play);
    assert_eq!(board.turn_time_remaining, Some(20));
    assert_eq!(board.hand.len(), 4);
    assert_eq!(board.hand[1].rank, Rank::Joker);
    assert_eq!(board.opponent_cards.len(), 3);
}
