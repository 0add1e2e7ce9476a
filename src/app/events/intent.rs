/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppIntent {
    /// Vorherigen Vektor selektieren (Taste A)
    SelectPreviousRequested,
    /// Nächsten Vektor selektieren (Taste D)
    SelectNextRequested,
    /// Selektierten Vektor verlängern (Taste W)
    EnlargeRequested,
    /// Selektierten Vektor verkürzen (Taste S)
    ShrinkRequested,
    /// Selektierten Vektor im negativen Drehsinn drehen (Taste Q)
    RotateNegativeRequested,
    /// Selektierten Vektor im positiven Drehsinn drehen (Taste E)
    RotatePositiveRequested,
    /// Canvas-Größe für diesen Frame
    ViewportResized { size: [f32; 2] },
    /// Anwendung beenden
    ExitRequested,
}
