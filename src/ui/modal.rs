//! Generic modal dialog: dimmed backdrop, centered dialog with header, body
//! and footer, Escape / backdrop-click to close, and a Tab focus trap.
//! Knows nothing about decks; body and footer content are supplied per frame.

use egui::{Align, Align2, Area, Button, Color32, Id, Key, Layout, Modifiers, Order, Sense, Vec2};

use super::focus::FocusRing;

const MIN_DIALOG_WIDTH: f32 = 320.0;

pub struct Modal {
    title: String,
    id: Id,
    is_open: bool,
    /// Widget that opened the modal; focus returns to it on close.
    trigger: Option<Id>,
    /// Set on open, consumed on the first rendered frame: focus moves to the
    /// first body/footer element once this frame's widgets exist.
    wants_initial_focus: bool,
    focus_ring: FocusRing,
}

impl Modal {
    /// `id_salt` keeps distinct dialogs from sharing egui state.
    pub fn new(title: impl Into<String>, id_salt: impl std::hash::Hash) -> Self {
        Self {
            title: title.into(),
            id: Id::new(id_salt),
            is_open: false,
            trigger: None,
            wants_initial_focus: false,
            focus_ring: FocusRing::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Opens the modal. No-op when already open: the original trigger and
    /// focus state are kept, nothing is installed twice.
    pub fn open(&mut self, ctx: &egui::Context, trigger: Option<Id>) {
        if self.is_open {
            return;
        }
        self.is_open = true;
        self.trigger = trigger.or_else(|| ctx.memory(|memory| memory.focused()));
        self.wants_initial_focus = true;
    }

    /// Closes the modal and returns focus to the trigger widget.
    /// No-op when not open.
    pub fn close(&mut self, ctx: &egui::Context) {
        if !self.is_open {
            return;
        }
        self.is_open = false;
        self.wants_initial_focus = false;
        if let Some(trigger) = self.trigger.take() {
            ctx.memory_mut(|memory| memory.request_focus(trigger));
        }
    }

    /// Closes if open, then drops the modal entirely.
    pub fn destroy(mut self, ctx: &egui::Context) {
        self.close(ctx);
    }

    /// Renders the modal for this frame. Must be called before the regular
    /// panels so trapped keys are consumed before other widgets see them.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        body: impl FnOnce(&mut egui::Ui, &mut FocusRing),
        footer: impl FnOnce(&mut egui::Ui, &mut FocusRing),
    ) {
        if !self.is_open {
            return;
        }

        let escape = ctx.input_mut(|input| input.consume_key(Modifiers::NONE, Key::Escape));
        let tab_back = ctx.input_mut(|input| input.consume_key(Modifiers::SHIFT, Key::Tab));
        let tab_forward = ctx.input_mut(|input| input.consume_key(Modifiers::NONE, Key::Tab));

        self.focus_ring.clear();
        let mut close_clicked = false;

        let dialog = Area::new(self.id.with("dialog"))
            .order(Order::Foreground)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Frame::window(&ctx.style()).show(ui, |ui| {
                    ui.set_min_width(MIN_DIALOG_WIDTH);
                    ui.horizontal(|ui| {
                        ui.heading(&self.title);
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let close = ui.add(Button::new("✕").frame(false));
                            self.focus_ring.track(&close);
                            if close.clicked() {
                                close_clicked = true;
                            }
                        });
                    });
                    ui.separator();
                    body(ui, &mut self.focus_ring);
                    ui.separator();
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        footer(ui, &mut self.focus_ring);
                    });
                });
            });
        let dialog_rect = dialog.response.rect;

        // Backdrop sits below the dialog and swallows pointer input; a click
        // that lands outside the dialog rect closes the modal.
        let screen = ctx.screen_rect();
        let backdrop = Area::new(self.id.with("backdrop"))
            .order(Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(screen, 0.0, Color32::from_black_alpha(96));
                ui.allocate_rect(screen, Sense::click())
            })
            .inner;
        let backdrop_clicked = backdrop.clicked()
            && backdrop
                .interact_pointer_pos()
                .is_some_and(|pos| !dialog_rect.contains(pos));

        if self.wants_initial_focus {
            // The close button is tracked first; prefer the first element
            // after it and fall back to the close button itself.
            if let Some(id) = self.focus_ring.get(1).or_else(|| self.focus_ring.first()) {
                ctx.memory_mut(|memory| memory.request_focus(id));
            }
            self.wants_initial_focus = false;
        } else if tab_forward || tab_back {
            let current = ctx.memory(|memory| memory.focused());
            if let Some(next) = self.focus_ring.next_focus(current, tab_back) {
                ctx.memory_mut(|memory| memory.request_focus(next));
            }
        }

        if escape || close_clicked || backdrop_clicked {
            self.close(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_is_idempotent() {
        let ctx = egui::Context::default();
        let mut modal = Modal::new("Test", "test-modal");
        let first = Id::new("first-trigger");

        modal.open(&ctx, Some(first));
        assert!(modal.is_open());

        // a second open must not replace the recorded trigger
        modal.open(&ctx, Some(Id::new("other-trigger")));
        assert!(modal.is_open());
        assert_eq!(modal.trigger, Some(first));
    }

    #[test]
    fn test_close_is_idempotent_and_clears_trigger() {
        let ctx = egui::Context::default();
        let mut modal = Modal::new("Test", "test-modal");

        modal.close(&ctx);
        assert!(!modal.is_open());

        modal.open(&ctx, Some(Id::new("trigger")));
        modal.close(&ctx);
        assert!(!modal.is_open());
        assert_eq!(modal.trigger, None);

        modal.close(&ctx);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_reopen_after_close_takes_new_trigger() {
        let ctx = egui::Context::default();
        let mut modal = Modal::new("Test", "test-modal");

        modal.open(&ctx, Some(Id::new("a")));
        modal.close(&ctx);
        modal.open(&ctx, Some(Id::new("b")));
        assert_eq!(modal.trigger, Some(Id::new("b")));
    }

    #[test]
    fn test_close_restores_focus_to_trigger() {
        let ctx = egui::Context::default();
        let mut modal = Modal::new("Test", "test-modal");
        let trigger = Id::new("trigger");

        modal.open(&ctx, Some(trigger));
        modal.close(&ctx);
        assert_eq!(ctx.memory(|memory| memory.focused()), Some(trigger));
    }
}
