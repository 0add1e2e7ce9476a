//! UI-Komponenten: Keyboard-Handling und Status-Bar.

mod keyboard;
pub mod status;

pub use keyboard::collect_keyboard_intents;
pub use status::render_status_bar;
