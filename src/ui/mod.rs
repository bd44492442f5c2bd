pub mod controller;
pub mod focus;
pub mod forms;
pub mod modal;

pub use controller::UiController;
pub use focus::FocusRing;
pub use forms::DeckForm;
pub use modal::Modal;
