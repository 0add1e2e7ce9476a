//! Handler für Selektions-Operationen.

use crate::app::AppState;

/// Selektiert den vorherigen Vektor. Am Listenanfang: keine Änderung.
pub fn select_previous(state: &mut AppState) {
    let old = state.selection.selected_index;
    state.selection.select_previous();
    log_selection_change(state, old);
}

/// Selektiert den nächsten Vektor. Am Listenende: keine Änderung.
pub fn select_next(state: &mut AppState) {
    let old = state.selection.selected_index;
    let count = state.node_count();
    state.selection.select_next(count);
    log_selection_change(state, old);
}

fn log_selection_change(state: &AppState, old: usize) {
    let new = state.selection.selected_index;
    if new == old {
        log::debug!("Selektion bleibt bei Index {} (Listenrand)", new);
    } else {
        log::debug!(
            "Selektion {} -> {} (Vektor {})",
            old,
            new,
            state.selected_node_id()
        );
    }
}
