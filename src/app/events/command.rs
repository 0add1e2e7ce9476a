/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppCommand {
    /// Selektions-Cursor um eins zurück (sättigt bei 0)
    SelectPrevious,
    /// Selektions-Cursor um eins vor (sättigt beim letzten Vektor)
    SelectNext,
    /// Länge des selektierten Vektors ändern (Ergebnis wird auf >= 0 geklemmt)
    ChangeSelectedLength { delta: f32 },
    /// Selektierten Vektor samt Teilbaum um `delta` Radiant drehen
    RotateSelected { delta: f32 },
    /// Viewport-Größe setzen und ersten Vektor auf die Mitte pinnen
    SetViewportSize { size: [f32; 2] },
    /// Anwendung beenden
    RequestExit,
}
