use skirmish_core::TextLookup;
use std::borrow::Cow;
use std::collections::HashMap;

/// Flat key to string table for one locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    code: String,
    entries: HashMap<String, String>,
}

impl LocaleTable {
    pub fn new(code: impl Into<String>, entries: HashMap<String, String>) -> Self {
        Self {
            code: code.into(),
            entries,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys from `expected` that this table does not define.
    pub fn missing_keys<'a>(&self, expected: &[&'a str]) -> Vec<&'a str> {
        expected
            .iter()
            .copied()
            .filter(|key| !self.entries.contains_key(*key))
            .collect()
    }
}

impl TextLookup for LocaleTable {
    fn text<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.entries.get(key) {
            Some(value) => Cow::Borrowed(value.as_str()),
            None => Cow::Borrowed(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_keys_pass_through() {
        let mut entries = HashMap::new();
        entries.insert("game.health".to_string(), "Health".to_string());
        let table = LocaleTable::new("en_US", entries);
        assert_eq!(table.text("game.health"), "Health");
        assert_eq!(table.text("attack.unknown"), "attack.unknown");
        assert_eq!(
            table.missing_keys(&["game.health", "game.ui.confirm"]),
            vec!["game.ui.confirm"]
        );
    }
}
