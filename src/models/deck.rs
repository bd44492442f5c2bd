//! Deck is a named collection of study cards with a tracked count.
//! Card contents themselves are not modeled at this level.
use serde::{Deserialize, Serialize};

/// Maximum length of a deck name, in characters.
pub const MAX_NAME_LEN: usize = 50;
/// Maximum number of cards a deck can report.
pub const MAX_CARD_COUNT: u32 = 500;

pub type DeckId = u32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
    pub card_count: u32,
}

/// Partial update for a deck: only fields that are `Some` are applied.
#[derive(Clone, Debug, Default)]
pub struct DeckUpdate {
    pub name: Option<String>,
    pub card_count: Option<u32>,
}

impl DeckUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn card_count(mut self, card_count: u32) -> Self {
        self.card_count = Some(card_count);
        self
    }
}
