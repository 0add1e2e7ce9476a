//! Application-Layer: Controller, State, Events und Handler.

pub mod controller;
mod error;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod setup;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Vektor-Baum, Selektion, View).
pub mod state;

pub use controller::AppController;
pub use error::{AppError, MINIMUM_VECTORS};
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, SelectionState, ViewState};
