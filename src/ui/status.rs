//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Vektor: {}/{}",
                state.selection.selected_index + 1,
                state.node_count()
            ));

            ui.separator();

            if let Some(node) = state.selected_node() {
                ui.label(format!(
                    "Länge: {:.1} | Winkel: {:.1}°",
                    node.length(),
                    node.angle().to_degrees()
                ));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label("A/D: Auswahl | W/S: Länge | Q/E: Drehen | Esc: Beenden");
            });
        });
    });
}
