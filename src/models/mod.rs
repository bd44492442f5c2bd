pub mod deck;

pub use deck::{Deck, DeckId, DeckUpdate, MAX_CARD_COUNT, MAX_NAME_LEN};
