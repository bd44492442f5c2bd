pub mod export;
pub mod models;
pub mod store;
pub mod ui;

pub use models::{Deck, DeckId, DeckUpdate};
pub use store::DeckStore;
