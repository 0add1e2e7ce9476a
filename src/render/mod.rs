//! Zeichnen der Render-Szene mit dem egui-Painter.
//!
//! Alle Segmente werden in der Vektorfarbe gezeichnet, danach das selektierte
//! Segment erneut in der Selektionsfarbe, damit es immer oben liegt.

use crate::shared::{RenderScene, Segment};

/// Wandelt eine RGBA-Farbe aus den Optionen in eine egui-Farbe.
pub fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

/// Zeichnet Hintergrund und alle Segmente in `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, to_color32(scene.options.background_color));
    painter.extend(line_shapes(scene, rect.min));
}

/// Baut die Linien-Shapes in Zeichenreihenfolge.
///
/// Segment-Koordinaten sind relativ zur linken oberen Canvas-Ecke `origin`.
pub(crate) fn line_shapes(scene: &RenderScene, origin: egui::Pos2) -> Vec<egui::Shape> {
    let width = scene.options.stroke_width;
    let vector_stroke = egui::Stroke::new(width, to_color32(scene.options.vector_color));
    let selected_stroke =
        egui::Stroke::new(width, to_color32(scene.options.selected_vector_color));

    let mut shapes: Vec<egui::Shape> = scene
        .segments
        .iter()
        .map(|segment| line(segment, origin, vector_stroke))
        .collect();

    if let Some(selected) = scene.selected_segment() {
        shapes.push(line(selected, origin, selected_stroke));
    }

    shapes
}

fn line(segment: &Segment, origin: egui::Pos2, stroke: egui::Stroke) -> egui::Shape {
    let to_screen = |p: glam::Vec2| origin + egui::vec2(p.x, p.y);
    egui::Shape::line_segment([to_screen(segment.tail), to_screen(segment.head)], stroke)
}
