use crate::locale::LocaleTable;
use crate::schema::{Board, BoardFile, BoardLoadReport, RawCard, TimingConfig};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use skirmish_core::Card;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const TIMING_FILE: &str = "timing.json";
const LOCALES_DIR: &str = "locales";
pub const DEFAULT_LOCALE: &str = "en_US";

pub fn load_timing_config(dir: &Path) -> anyhow::Result<TimingConfig> {
    let path = dir.join(TIMING_FILE);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no timing file, using defaults");
        return Ok(TimingConfig::default());
    }
    let config: TimingConfig = load_json(&path)?;
    if config.tick_ms == 0 {
        bail!("{}: tick_ms must be positive", path.display());
    }
    Ok(config)
}

/// Loads `locales/<code>.json`, falling back to the default locale when the
/// requested one is not shipped.
pub fn load_locale(dir: &Path, locale: Option<&str>) -> anyhow::Result<LocaleTable> {
    let code = normalize_locale(locale);
    let path = dir.join(LOCALES_DIR).join(format!("{code}.json"));
    if path.exists() {
        let entries: HashMap<String, String> = load_json(&path)?;
        return Ok(LocaleTable::new(code, entries));
    }
    if code == DEFAULT_LOCALE {
        bail!("default locale file missing: {}", path.display());
    }
    tracing::warn!(requested = %code, "locale not found, falling back to {DEFAULT_LOCALE}");
    load_locale(dir, Some(DEFAULT_LOCALE))
}

pub fn load_board(path: &Path) -> anyhow::Result<BoardLoadReport> {
    let file: BoardFile = load_json(path)?;
    let mut warnings = Vec::new();
    let hand = resolve_cards(&file.hand, "hand", &mut warnings);
    let opponent_cards = resolve_cards(&file.opponent_cards, "opponent_cards", &mut warnings);
    for warning in &warnings {
        tracing::warn!(path = %path.display(), "{warning}");
    }
    Ok(BoardLoadReport {
        board: Board {
            opponent_health: file.opponent_health,
            turn_time_remaining: file.turn_time_remaining,
            phase: file.phase,
            hand,
            opponent_cards,
        },
        warnings,
    })
}

fn resolve_cards(raw: &[RawCard], field: &str, warnings: &mut Vec<String>) -> Vec<Card> {
    let mut cards = Vec::with_capacity(raw.len());
    for (idx, item) in raw.iter().enumerate() {
        match item.resolve() {
            Some(card) if cards.contains(&card) => {
                warnings.push(format!("{field}[{idx}]: duplicate card {} skipped", card.label()));
            }
            Some(card) => cards.push(card),
            None => warnings.push(format!("{field}[{idx}]: unknown rank '{}' skipped", item.rank)),
        }
    }
    cards
}

pub fn normalize_locale(locale: Option<&str>) -> String {
    let raw = locale.unwrap_or(DEFAULT_LOCALE).trim();
    if raw.is_empty() {
        return DEFAULT_LOCALE.to_string();
    }
    let lowered = raw.replace('-', "_").to_ascii_lowercase();
    match lowered.as_str() {
        "fr" | "fr_fr" => "fr_FR".to_string(),
        "en" | "en_us" => "en_US".to_string(),
        _ => raw.replace('-', "_"),
    }
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
