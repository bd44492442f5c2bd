//! Wires the deck store to the egui panels and the modal dialogs.
//! Handles the deck list, selection, the create/edit/delete flows, and
//! JSON export/import of the current deck.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use egui::{Align, Id, Key, Layout, ScrollArea};
use tracing::{info, warn};

use crate::export::json::{export_deck_to_path, import_deck_from_path};
use crate::models::{Deck, DeckId, DeckUpdate};
use crate::store::DeckStore;

use super::forms::DeckForm;
use super::modal::Modal;

/// Row interactions collected while the deck list renders, applied afterwards.
enum DeckAction {
    Select(DeckId),
    Edit(DeckId),
    Delete(DeckId),
}

/// The one dialog that can be open at a time.
enum DeckDialog {
    Create {
        modal: Modal,
        form: DeckForm,
    },
    Edit {
        modal: Modal,
        deck_id: DeckId,
        form: DeckForm,
    },
    ConfirmDelete {
        modal: Modal,
        deck_id: DeckId,
        deck_name: String,
    },
}

impl DeckDialog {
    fn into_modal(self) -> Modal {
        match self {
            DeckDialog::Create { modal, .. }
            | DeckDialog::Edit { modal, .. }
            | DeckDialog::ConfirmDelete { modal, .. } => modal,
        }
    }
}

enum DialogOutcome {
    Dismiss,
    Create(String, u32),
    Save(DeckId, String, u32),
    Delete(DeckId),
}

/// Main-panel display state, bound by name rather than by element position.
struct MainPanel {
    deck_title: String,
    progress_text: String,
    correct: u32,
    incorrect: u32,
}

impl MainPanel {
    fn new() -> Self {
        Self {
            deck_title: "No deck selected".to_string(),
            progress_text: String::new(),
            correct: 0,
            incorrect: 0,
        }
    }

    /// Shows the deck and resets the session counters. No study logic lives
    /// here; the counters only ever display zero until a session implements
    /// scoring.
    fn show_deck(&mut self, deck: Option<&Deck>) {
        match deck {
            Some(deck) => {
                self.deck_title = deck.name.clone();
                self.progress_text = format!("Card 1 of {}", deck.card_count);
            }
            None => {
                self.deck_title = "No deck selected".to_string();
                self.progress_text = String::new();
            }
        }
        self.correct = 0;
        self.incorrect = 0;
    }
}

pub struct UiController {
    store: DeckStore,
    /// Render cache refreshed by the store's observer notification.
    visible_decks: Rc<RefCell<Vec<Deck>>>,
    panel: MainPanel,
    dialog: Option<DeckDialog>,
    status: Option<String>,
}

impl UiController {
    pub fn new(mut store: DeckStore) -> Self {
        let visible_decks = Rc::new(RefCell::new(store.decks().to_vec()));
        let cache = Rc::clone(&visible_decks);
        store.subscribe(move |decks| *cache.borrow_mut() = decks.to_vec());

        let mut panel = MainPanel::new();
        panel.show_deck(store.current_deck());

        Self {
            store,
            visible_decks,
            panel,
            dialog: None,
            status: None,
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        // Dialog first: trapped keys must be consumed before the panels
        // render their widgets.
        self.show_dialog(ctx);
        self.show_header(ctx);
        self.show_deck_list(ctx);
        self.show_main_panel(ctx);
        self.show_status_window(ctx);
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        let mut create_trigger: Option<Id> = None;
        let mut do_export = false;
        let mut do_import = false;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading("Deck Manager");
                ui.label(Local::now().format("%Y-%m-%d").to_string());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let new_deck = ui.button("New Deck");
                    if new_deck.clicked() {
                        create_trigger = Some(new_deck.id);
                    }
                    if ui.button("Import").clicked() {
                        do_import = true;
                    }
                    if ui.button("Export").clicked() {
                        do_export = true;
                    }
                });
            });
            ui.add_space(4.0);
        });

        if let Some(trigger) = create_trigger {
            let mut modal = Modal::new("Create New Deck", "create-deck");
            modal.open(ctx, Some(trigger));
            self.dialog = Some(DeckDialog::Create {
                modal,
                form: DeckForm::new(),
            });
        }
        if do_export {
            self.handle_export();
        }
        if do_import {
            self.handle_import();
        }
    }

    fn show_deck_list(&mut self, ctx: &egui::Context) {
        let decks = self.visible_decks.borrow().clone();
        let current = self.store.current_deck_id();
        let mut action: Option<DeckAction> = None;

        egui::SidePanel::left("deck_sidebar")
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.heading("Decks");
                ui.separator();

                ScrollArea::vertical().id_source("deck_list").show(ui, |ui| {
                    for deck in &decks {
                        // Edit/Delete only show while the pointer is over the row.
                        let row_height = ui.spacing().interact_size.y;
                        let row_rect = egui::Rect::from_min_size(
                            ui.cursor().min,
                            egui::vec2(ui.available_width(), row_height),
                        );
                        let hovered = ui.rect_contains_pointer(row_rect);

                        ui.horizontal(|ui| {
                            let label = ui.selectable_label(
                                current == Some(deck.id),
                                format!("{}  ({})", deck.name, deck.card_count),
                            );
                            if label.clicked() {
                                action = Some(DeckAction::Select(deck.id));
                            }
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                let delete = ui
                                    .add_visible(hovered, egui::Button::new("Delete").small());
                                if delete.clicked() {
                                    action = Some(DeckAction::Delete(deck.id));
                                }
                                let edit =
                                    ui.add_visible(hovered, egui::Button::new("Edit").small());
                                if edit.clicked() {
                                    action = Some(DeckAction::Edit(deck.id));
                                }
                            });
                        });
                    }
                });
            });

        if let Some(action) = action {
            self.apply_deck_action(ctx, action);
        }
    }

    fn apply_deck_action(&mut self, ctx: &egui::Context, action: DeckAction) {
        match action {
            DeckAction::Select(id) => self.select_deck(id),
            DeckAction::Edit(id) => {
                if let Some(deck) = self.store.deck_by_id(id) {
                    let form = DeckForm::for_deck(deck);
                    let mut modal = Modal::new("Edit Deck", "edit-deck");
                    modal.open(ctx, None);
                    self.dialog = Some(DeckDialog::Edit {
                        modal,
                        deck_id: id,
                        form,
                    });
                }
            }
            DeckAction::Delete(id) => {
                if let Some(deck) = self.store.deck_by_id(id) {
                    let deck_name = deck.name.clone();
                    let mut modal = Modal::new("Delete Deck", "delete-deck");
                    modal.open(ctx, None);
                    self.dialog = Some(DeckDialog::ConfirmDelete {
                        modal,
                        deck_id: id,
                        deck_name,
                    });
                }
            }
        }
    }

    fn select_deck(&mut self, id: DeckId) {
        self.store.set_current_deck(id);
        self.refresh_panel();
    }

    fn refresh_panel(&mut self) {
        self.panel.show_deck(self.store.current_deck());
    }

    fn show_main_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(&self.panel.deck_title);
            if !self.panel.progress_text.is_empty() {
                ui.label(&self.panel.progress_text);
            }
            ui.separator();
            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        ui.label("Correct");
                        ui.heading(self.panel.correct.to_string());
                    });
                });
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        ui.label("Incorrect");
                        ui.heading(self.panel.incorrect.to_string());
                    });
                });
            });
        });
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };
        let mut outcome: Option<DialogOutcome> = None;

        match dialog {
            DeckDialog::Create { modal, form } => {
                // Enter anywhere in the form submits, same as the button.
                let mut submit = modal.is_open() && ctx.input(|i| i.key_pressed(Key::Enter));
                let mut cancel = false;
                modal.show(
                    ctx,
                    |ui, ring| form.ui(ui, ring),
                    |ui, ring| {
                        let confirm = ui.button("Create Deck");
                        ring.track(&confirm);
                        if confirm.clicked() {
                            submit = true;
                        }
                        let cancel_button = ui.button("Cancel");
                        ring.track(&cancel_button);
                        if cancel_button.clicked() {
                            cancel = true;
                        }
                    },
                );
                if submit {
                    if let Some((name, card_count)) = form.submit() {
                        outcome = Some(DialogOutcome::Create(name, card_count));
                    }
                } else if cancel || !modal.is_open() {
                    outcome = Some(DialogOutcome::Dismiss);
                }
            }
            DeckDialog::Edit {
                modal,
                deck_id,
                form,
            } => {
                let mut submit = modal.is_open() && ctx.input(|i| i.key_pressed(Key::Enter));
                let mut cancel = false;
                modal.show(
                    ctx,
                    |ui, ring| form.ui(ui, ring),
                    |ui, ring| {
                        let save = ui.button("Save Changes");
                        ring.track(&save);
                        if save.clicked() {
                            submit = true;
                        }
                        let cancel_button = ui.button("Cancel");
                        ring.track(&cancel_button);
                        if cancel_button.clicked() {
                            cancel = true;
                        }
                    },
                );
                if submit {
                    if let Some((name, card_count)) = form.submit() {
                        outcome = Some(DialogOutcome::Save(*deck_id, name, card_count));
                    }
                } else if cancel || !modal.is_open() {
                    outcome = Some(DialogOutcome::Dismiss);
                }
            }
            DeckDialog::ConfirmDelete {
                modal,
                deck_id,
                deck_name,
            } => {
                let mut confirm = false;
                let mut cancel = false;
                modal.show(
                    ctx,
                    |ui, _ring| {
                        ui.label(format!(
                            "Are you sure you want to delete \"{deck_name}\"? \
                             This action cannot be undone."
                        ));
                    },
                    |ui, ring| {
                        let delete = ui.button("Delete");
                        ring.track(&delete);
                        if delete.clicked() {
                            confirm = true;
                        }
                        let cancel_button = ui.button("Cancel");
                        ring.track(&cancel_button);
                        if cancel_button.clicked() {
                            cancel = true;
                        }
                    },
                );
                if confirm {
                    outcome = Some(DialogOutcome::Delete(*deck_id));
                } else if cancel || !modal.is_open() {
                    outcome = Some(DialogOutcome::Dismiss);
                }
            }
        }

        let Some(outcome) = outcome else {
            return;
        };
        if let Some(dialog) = self.dialog.take() {
            dialog.into_modal().destroy(ctx);
        }
        match outcome {
            DialogOutcome::Dismiss => {}
            DialogOutcome::Create(name, card_count) => {
                let deck = self.store.create_deck(name, card_count);
                info!(deck_id = deck.id, name = %deck.name, "deck created");
            }
            DialogOutcome::Save(id, name, card_count) => {
                let update = DeckUpdate::default().name(name).card_count(card_count);
                if self.store.update_deck(id, update).is_some() {
                    // re-select so the main panel picks up the new values
                    self.select_deck(id);
                }
            }
            DialogOutcome::Delete(id) => {
                if self.store.delete_deck(id) {
                    info!(deck_id = id, "deck deleted");
                }
                self.refresh_panel();
            }
        }
    }

    fn handle_export(&mut self) {
        let Some(deck) = self.store.current_deck().cloned() else {
            self.status = Some("No deck selected to export.".to_string());
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("{}.json", deck.name))
            .add_filter("JSON files", &["json"])
            .save_file()
        {
            match export_deck_to_path(&deck, &path) {
                Ok(()) => {
                    info!(name = %deck.name, "deck exported");
                    self.status = Some(format!("Deck '{}' exported successfully!", deck.name));
                }
                Err(e) => {
                    warn!(error = %e, "deck export failed");
                    self.status = Some(format!("Export failed: {e}"));
                }
            }
        }
    }

    fn handle_import(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };
        match import_deck_from_path(&path) {
            Ok(record) => {
                if self.store.decks().iter().any(|d| d.name == record.name) {
                    self.status = Some(format!(
                        "Deck '{}' already exists! Please rename it in the JSON file.",
                        record.name
                    ));
                    return;
                }
                // ids stay store-assigned; bounds are enforced by the store
                let deck = self.store.create_deck(record.name, record.card_count);
                info!(deck_id = deck.id, name = %deck.name, "deck imported");
                self.status = Some(format!(
                    "Deck '{}' imported successfully with {} cards!",
                    deck.name, deck.card_count
                ));
            }
            Err(e) => {
                warn!(error = %e, "deck import failed");
                self.status = Some(format!(
                    "Import failed: {e}\n\nExpected structure:\n{{\n  \"name\": \"Deck Name\",\n  \"card_count\": 0\n}}"
                ));
            }
        }
    }

    fn show_status_window(&mut self, ctx: &egui::Context) {
        let Some(message) = self.status.clone() else {
            return;
        };
        let mut dismiss = false;
        egui::Window::new("Result")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(&message);
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    dismiss = true;
                }
            });
        if dismiss {
            self.status = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> DeckStore {
        let mut store = DeckStore::new();
        store.create_deck("Spanish Vocab", 24);
        store.create_deck("French Phrases", 18);
        store.create_deck("Math Formulas", 32);
        store.set_current_deck(1);
        store
    }

    #[test]
    fn test_new_controller_fills_cache_and_panel() {
        let controller = UiController::new(seeded_store());
        assert_eq!(controller.visible_decks.borrow().len(), 3);
        assert_eq!(controller.panel.deck_title, "Spanish Vocab");
        assert_eq!(controller.panel.progress_text, "Card 1 of 24");
    }

    #[test]
    fn test_cache_follows_store_mutations() {
        let mut controller = UiController::new(seeded_store());
        controller.store.create_deck("Italian", 10);
        assert_eq!(controller.visible_decks.borrow().len(), 4);
        controller.store.delete_deck(2);
        assert_eq!(controller.visible_decks.borrow().len(), 3);
    }

    #[test]
    fn test_select_deck_resets_panel() {
        let mut controller = UiController::new(seeded_store());
        controller.panel.correct = 7;
        controller.panel.incorrect = 3;

        controller.select_deck(3);
        assert_eq!(controller.store.current_deck_id(), Some(3));
        assert_eq!(controller.panel.deck_title, "Math Formulas");
        assert_eq!(controller.panel.progress_text, "Card 1 of 32");
        assert_eq!(controller.panel.correct, 0);
        assert_eq!(controller.panel.incorrect, 0);
    }

    #[test]
    fn test_select_unknown_deck_keeps_current() {
        let mut controller = UiController::new(seeded_store());
        controller.select_deck(99);
        assert_eq!(controller.store.current_deck_id(), Some(1));
        assert_eq!(controller.panel.deck_title, "Spanish Vocab");
    }

    #[test]
    fn test_panel_placeholder_when_all_decks_deleted() {
        let mut controller = UiController::new(seeded_store());
        for id in 1..=3 {
            controller.store.delete_deck(id);
        }
        controller.refresh_panel();
        assert_eq!(controller.panel.deck_title, "No deck selected");
        assert!(controller.panel.progress_text.is_empty());
    }
}
