//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::RobohandOptions;
use glam::Vec2;

/// Ein zu zeichnendes Liniensegment in Canvas-Koordinaten (Pixel, Y nach unten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub tail: Vec2,
    pub head: Vec2,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Ein Segment pro Vektor, in Selektions-Reihenfolge
    pub segments: Vec<Segment>,
    /// Index des selektierten Segments in `segments`
    pub selected_index: usize,
    /// Laufzeit-Optionen für Farben und Linienstärke
    pub options: RobohandOptions,
}

impl RenderScene {
    /// Gibt das selektierte Segment zurück (falls vorhanden).
    pub fn selected_segment(&self) -> Option<&Segment> {
        self.segments.get(self.selected_index)
    }
}
