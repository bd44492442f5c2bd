//! Create/edit form for a deck: name plus card count.

use egui::{DragValue, TextEdit};

use crate::models::{Deck, MAX_CARD_COUNT, MAX_NAME_LEN};

use super::focus::FocusRing;

#[derive(Default)]
pub struct DeckForm {
    pub name: String,
    pub card_count: u32,
    warning: Option<String>,
}

impl DeckForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_deck(deck: &Deck) -> Self {
        Self {
            name: deck.name.clone(),
            card_count: deck.card_count,
            warning: None,
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, ring: &mut FocusRing) {
        ui.label("Deck name:");
        let name = ui.add(
            TextEdit::singleline(&mut self.name)
                .char_limit(MAX_NAME_LEN)
                .hint_text("e.g. Italian Vocabulary"),
        );
        ring.track(&name);
        ui.small(format!("Max {MAX_NAME_LEN} characters"));

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Number of cards:");
            let count = ui.add(DragValue::new(&mut self.card_count).range(0..=MAX_CARD_COUNT));
            ring.track(&count);
        });

        if let Some(warning) = &self.warning {
            ui.add_space(8.0);
            ui.colored_label(ui.visuals().warn_fg_color, warning);
        }
    }

    /// Validates and returns the trimmed name and card count, or `None` with
    /// a warning displayed when the trimmed name is empty. The caller keeps
    /// the dialog open on `None` so the user can correct the input.
    pub fn submit(&mut self) -> Option<(String, u32)> {
        let name = self.name.trim();
        if name.is_empty() {
            self.warning = Some("Please enter a deck name".to_string());
            return None;
        }
        self.warning = None;
        Some((name.to_string(), self.card_count.min(MAX_CARD_COUNT)))
    }
}
