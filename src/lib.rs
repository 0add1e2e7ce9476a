//! Robohand Library.
//! Vektor-Baum, Controller und UI als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppError, AppIntent, AppState, SelectionState, ViewState,
};
pub use core::{NodeId, TreeError, VectorNode, VectorTree};
pub use shared::{RenderScene, RobohandOptions, Segment};
