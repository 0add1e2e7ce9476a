//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Die festen Deltas für Länge und Winkel kommen aus den Laufzeit-Optionen.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let options = &state.options;

    match intent {
        AppIntent::SelectPreviousRequested => vec![AppCommand::SelectPrevious],
        AppIntent::SelectNextRequested => vec![AppCommand::SelectNext],
        AppIntent::EnlargeRequested => vec![AppCommand::ChangeSelectedLength {
            delta: options.length_delta,
        }],
        AppIntent::ShrinkRequested => vec![AppCommand::ChangeSelectedLength {
            delta: -options.length_delta,
        }],
        AppIntent::RotateNegativeRequested => vec![AppCommand::RotateSelected {
            delta: -options.angle_delta,
        }],
        AppIntent::RotatePositiveRequested => vec![AppCommand::RotateSelected {
            delta: options.angle_delta,
        }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
