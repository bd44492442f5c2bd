//! JSON import/export for decks.
//! Decks travel as a small record without the store-assigned id: imports go
//! back through the store so ids and bounds stay under its control.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::Deck;

/// Wire form of a deck.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeckRecord {
    pub name: String,
    #[serde(default)]
    pub card_count: u32,
}

impl From<&Deck> for DeckRecord {
    fn from(deck: &Deck) -> Self {
        Self {
            name: deck.name.clone(),
            card_count: deck.card_count,
        }
    }
}

/// Writes the deck as pretty-printed JSON to the given path.
pub fn export_deck_to_path(deck: &Deck, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let record = DeckRecord::from(deck);
    let json = serde_json::to_string_pretty(&record)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Reads a deck record from a JSON file.
/// Fails if the file is missing or is not a valid deck record.
pub fn import_deck_from_path(path: &Path) -> Result<DeckRecord, Box<dyn std::error::Error>> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let record: DeckRecord = serde_json::from_str(&contents)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(name)
    }

    fn test_deck() -> Deck {
        Deck {
            id: 1,
            name: "Spanish Vocab".to_string(),
            card_count: 24,
        }
    }

    #[test]
    fn test_export_creates_file() {
        let path = temp_path("deck_export_test.json");
        let result = export_deck_to_path(&test_deck(), &path);
        assert!(result.is_ok());
        assert!(fs::metadata(&path).is_ok(), "file should exist");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_import_parses_record() {
        let path = temp_path("deck_import_test.json");
        fs::write(&path, r#"{ "name": "French Phrases", "card_count": 18 }"#).unwrap();

        let record = import_deck_from_path(&path).unwrap();
        assert_eq!(record.name, "French Phrases");
        assert_eq!(record.card_count, 18);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_card_count_defaults_to_zero() {
        let path = temp_path("deck_import_default_test.json");
        fs::write(&path, r#"{ "name": "Bare Deck" }"#).unwrap();

        let record = import_deck_from_path(&path).unwrap();
        assert_eq!(record.card_count, 0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_export_import_roundtrip() {
        let path = temp_path("deck_roundtrip_test.json");
        let deck = test_deck();

        export_deck_to_path(&deck, &path).unwrap();
        let record = import_deck_from_path(&path).unwrap();

        assert_eq!(record.name, deck.name);
        assert_eq!(record.card_count, deck.card_count);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_deck_from_path(Path::new("nonexistent_deck_xyz123.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_import_invalid_json() {
        let path = temp_path("deck_invalid_test.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        let result = import_deck_from_path(&path);
        assert!(result.is_err());

        let _ = fs::remove_file(&path);
    }
}
