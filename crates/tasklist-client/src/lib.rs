pub mod action;
pub mod controller;
pub mod derive;
pub mod fence;
pub mod form;
pub mod screen;
pub mod state;
pub mod store;

pub use action::Action;
pub use controller::{Controller, Outcome};
pub use screen::Screen;
pub use state::{AppState, View};
pub use store::{transition, Store};
