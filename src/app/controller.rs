//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Jeder Command außer `SetViewportSize` fordert danach ein Neuzeichnen an;
    /// der Viewport-Handler entscheidet selbst anhand der Größenänderung.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        let requests_repaint = !matches!(command, AppCommand::SetViewportSize { .. });

        match command {
            // === Selektion ===
            AppCommand::SelectPrevious => handlers::selection::select_previous(state),
            AppCommand::SelectNext => handlers::selection::select_next(state),

            // === Transformation ===
            AppCommand::ChangeSelectedLength { delta } => {
                handlers::transform::change_selected_length(state, delta)?
            }
            AppCommand::RotateSelected { delta } => {
                handlers::transform::rotate_selected(state, delta)?
            }

            // === Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size)?,

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::lifecycle::request_exit(state),
        }

        if requests_repaint {
            state.view.repaint_requested = true;
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
