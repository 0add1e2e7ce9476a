//! Handler für den Viewport.

use crate::app::AppState;

/// Übernimmt die Canvas-Größe und verankert den ersten Vektor in der Mitte.
///
/// Fordert nur bei geänderter Größe ein Neuzeichnen an.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) -> anyhow::Result<()> {
    if state.view.viewport_size != size {
        log::debug!("Viewport-Größe: {:.0}x{:.0}", size[0], size[1]);
        state.view.viewport_size = size;
        state.view.repaint_requested = true;
    }

    let anchor = state.anchor_node_id();
    let center = state.view.center();
    state.tree_mut().set_tail_position(anchor, center)?;
    Ok(())
}
