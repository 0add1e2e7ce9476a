//! Handler für Längen- und Winkeländerungen des selektierten Vektors.

use crate::app::AppState;

/// Ändert die Länge des selektierten Vektors um `delta`.
///
/// Das Ergebnis wird auf `>= 0` geklemmt; der Vektor selbst prüft das nicht.
pub fn change_selected_length(state: &mut AppState, delta: f32) -> anyhow::Result<()> {
    let id = state.selected_node_id();
    let Some(node) = state.tree().node(id) else {
        anyhow::bail!("Selektierter Vektor {} fehlt im Baum", id);
    };

    let requested = node.length() + delta;
    let length = requested.max(0.0);
    if length != requested {
        log::debug!("Länge von Vektor {} auf 0 geklemmt", id);
    }

    state.tree_mut().set_length(id, length)?;
    log::debug!("Vektor {}: Länge {:.1}", id, length);
    Ok(())
}

/// Dreht den selektierten Vektor samt Teilbaum um `delta` Radiant.
pub fn rotate_selected(state: &mut AppState, delta: f32) -> anyhow::Result<()> {
    let id = state.selected_node_id();
    let Some(node) = state.tree().node(id) else {
        anyhow::bail!("Selektierter Vektor {} fehlt im Baum", id);
    };

    let angle = node.angle() + delta;
    state.tree_mut().set_angle(id, angle)?;
    log::debug!("Vektor {}: Winkel {:.1}°", id, angle.to_degrees());
    Ok(())
}
