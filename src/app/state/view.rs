/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Aktuelle Canvas-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Signalisiert dem Host, dass neu gezeichnet werden muss
    pub repaint_requested: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: [0.0, 0.0],
            repaint_requested: true,
        }
    }

    /// Canvas-Mittelpunkt, an dem der erste Vektor verankert wird.
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::from(self.viewport_size) * 0.5
    }

    /// Liefert und löscht die Repaint-Anforderung.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }
}
