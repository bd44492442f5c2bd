mod app;

use app::DeckManagerApp;
use deck_manager_app::store::DeckStore;
use tracing::info;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let mut store = DeckStore::new();
    store.create_deck("Spanish Vocab", 24);
    store.create_deck("French Phrases", 18);
    store.create_deck("Math Formulas", 32);
    store.set_current_deck(1);
    info!(decks = store.decks().len(), "seeded sample decks");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Deck Manager",
        options,
        Box::new(|_cc| Ok(Box::new(DeckManagerApp::new(store)))),
    )
}
