//! Application shell: delegates each frame to the UI controller and
//! intercepts window close requests with a confirmation dialog.

use deck_manager_app::store::DeckStore;
use deck_manager_app::ui::UiController;
use eframe::egui;

pub struct DeckManagerApp {
    controller: UiController,
    show_quit_dialog: bool,
    allowed_to_close: bool,
}

impl DeckManagerApp {
    pub fn new(store: DeckStore) -> Self {
        Self {
            controller: UiController::new(store),
            show_quit_dialog: false,
            allowed_to_close: false,
        }
    }
}

impl eframe::App for DeckManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.ui(ctx);

        if ctx.input(|i| i.viewport().close_requested()) && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_quit_dialog = true;
        }

        if self.show_quit_dialog {
            egui::Window::new("Do you want to quit?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.show_quit_dialog = false;
                            self.allowed_to_close = false;
                        }
                        if ui.button("Yes").clicked() {
                            self.show_quit_dialog = false;
                            self.allowed_to_close = true;
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
        }
    }
}
