//! In-memory deck store with observer notifications.
//!
//! Holds the ordered deck list, the current-deck selection, and a list of
//! observers that are called with the full deck slice after every mutation.
//! Everything runs synchronously on the UI thread; mutation-then-notify is
//! atomic because nothing else can run between frames.

use crate::models::{Deck, DeckId, DeckUpdate, MAX_CARD_COUNT, MAX_NAME_LEN};

pub type Observer = Box<dyn FnMut(&[Deck])>;

pub struct DeckStore {
    decks: Vec<Deck>,
    next_id: DeckId,
    current_deck_id: Option<DeckId>,
    observers: Vec<Observer>,
}

impl Default for DeckStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckStore {
    pub fn new() -> Self {
        Self {
            decks: Vec::new(),
            next_id: 1,
            current_deck_id: None,
            observers: Vec::new(),
        }
    }

    /// Registers an observer invoked with the full deck slice after every
    /// mutation. There is no unsubscribe; observers live as long as the store.
    pub fn subscribe(&mut self, observer: impl FnMut(&[Deck]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer(&self.decks);
        }
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn deck_by_id(&self, id: DeckId) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.id == id)
    }

    pub fn current_deck_id(&self) -> Option<DeckId> {
        self.current_deck_id
    }

    pub fn current_deck(&self) -> Option<&Deck> {
        self.current_deck_id.and_then(|id| self.deck_by_id(id))
    }

    /// Creates a deck with the next id and appends it to the list.
    /// Ids are strictly increasing and never reused, even after deletions.
    pub fn create_deck(&mut self, name: impl Into<String>, card_count: u32) -> Deck {
        let deck = Deck {
            id: self.next_id,
            name: bounded_name(name.into()),
            card_count: card_count.min(MAX_CARD_COUNT),
        };
        self.next_id += 1;
        self.decks.push(deck.clone());
        self.notify();
        deck
    }

    /// Merges the given fields into the deck, if it exists.
    /// Returns the updated deck, or `None` (without notifying) for unknown ids.
    pub fn update_deck(&mut self, id: DeckId, update: DeckUpdate) -> Option<Deck> {
        let deck = self.decks.iter_mut().find(|deck| deck.id == id)?;
        if let Some(name) = update.name {
            deck.name = bounded_name(name);
        }
        if let Some(card_count) = update.card_count {
            deck.card_count = card_count.min(MAX_CARD_COUNT);
        }
        let updated = deck.clone();
        self.notify();
        Some(updated)
    }

    /// Removes the deck, if it exists. When the current deck is deleted the
    /// selection moves to the new first deck, or to none if the list is empty.
    pub fn delete_deck(&mut self, id: DeckId) -> bool {
        let Some(index) = self.decks.iter().position(|deck| deck.id == id) else {
            return false;
        };
        self.decks.remove(index);
        if self.current_deck_id == Some(id) {
            self.current_deck_id = self.decks.first().map(|deck| deck.id);
        }
        self.notify();
        true
    }

    /// Selects the deck as current. Unknown ids leave the selection unchanged.
    pub fn set_current_deck(&mut self, id: DeckId) -> bool {
        if self.deck_by_id(id).is_some() {
            self.current_deck_id = Some(id);
            true
        } else {
            false
        }
    }
}

fn bounded_name(name: String) -> String {
    if name.chars().count() <= MAX_NAME_LEN {
        name
    } else {
        name.chars().take(MAX_NAME_LEN).collect()
    }
}
