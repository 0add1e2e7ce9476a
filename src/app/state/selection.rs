/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Index in die Selektions-Reihenfolge, immer in `[0, count - 1]`
    pub selected_index: usize,
}

impl SelectionState {
    /// Erstellt einen Selektionszustand mit dem ersten Vektor selektiert.
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    /// Cursor um eins zurück; bleibt bei 0 stehen.
    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Cursor um eins vor; bleibt beim letzten Index stehen.
    pub fn select_next(&mut self, count: usize) {
        let last = count.saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(last);
    }
}
