//! Keyboard-Shortcuts für den Canvas.
//!
//! Verarbeitet die Steuertasten und mappt sie auf `AppIntent`s.
//! egui liefert logische Tasten unabhängig von Shift/Caps-Lock, daher sind
//! alle Bindings case-insensitive. Tasten-Wiederholung löst den Befehl erneut aus.

use crate::app::AppIntent;

/// Tastenbelegung: jeweils zwei Tasten pro Achse.
const KEY_BINDINGS: [(egui::Key, AppIntent); 6] = [
    (egui::Key::A, AppIntent::SelectPreviousRequested),
    (egui::Key::D, AppIntent::SelectNextRequested),
    (egui::Key::W, AppIntent::EnlargeRequested),
    (egui::Key::S, AppIntent::ShrinkRequested),
    (egui::Key::Q, AppIntent::RotateNegativeRequested),
    (egui::Key::E, AppIntent::RotatePositiveRequested),
];

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Kombinationen mit Ctrl/Cmd oder Alt werden ignoriert.
pub fn collect_keyboard_intents(ctx: &egui::Context) -> Vec<AppIntent> {
    ctx.input(|i| {
        let mut events = Vec::new();

        if i.key_pressed(egui::Key::Escape) {
            events.push(AppIntent::ExitRequested);
        }

        if i.modifiers.command || i.modifiers.alt {
            return events;
        }

        for event in &i.events {
            // Reihenfolge der Tastendrücke im Frame beibehalten
            if let egui::Event::Key {
                key, pressed: true, ..
            } = event
            {
                if let Some((_, intent)) = KEY_BINDINGS.iter().find(|(k, _)| k == key) {
                    events.push(*intent);
                }
            }
        }

        events
    })
}
