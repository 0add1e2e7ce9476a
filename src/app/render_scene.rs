//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{RenderScene, Segment};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Reiner Lesedurchlauf: die Verankerung am Canvas-Mittelpunkt passiert
/// vorher über `SetViewportSize`.
pub fn build(state: &AppState) -> RenderScene {
    let tree = state.tree();
    let segments = state
        .node_order()
        .iter()
        .filter_map(|&id| tree.segment(id))
        .map(|(tail, head)| Segment { tail, head })
        .collect();

    RenderScene {
        segments,
        selected_index: state.selection.selected_index.min(state.node_count() - 1),
        options: state.options.clone(),
    }
}
