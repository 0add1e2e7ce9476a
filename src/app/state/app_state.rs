use crate::app::error::{AppError, MINIMUM_VECTORS};
use crate::app::setup;
use crate::core::{NodeId, VectorNode, VectorTree};
use crate::shared::RobohandOptions;

use super::{SelectionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Arena aller Vektoren
    tree: VectorTree,
    /// Flache Render-/Selektions-Reihenfolge, nie leer
    order: Vec<NodeId>,
    /// Selection-State
    pub selection: SelectionState,
    /// View-State
    pub view: ViewState,
    /// Laufzeit-Optionen (Deltas, Farben, Fenstergröße)
    pub options: RobohandOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Zustand für einen fertig verdrahteten Baum.
    ///
    /// `order` bestimmt Zeichen- und Selektions-Reihenfolge; der erste Eintrag
    /// wird am Canvas-Mittelpunkt verankert. Schlägt fehl, wenn `order` leer ist
    /// oder auf einen unbekannten Vektor verweist.
    pub fn new(
        tree: VectorTree,
        order: Vec<NodeId>,
        options: RobohandOptions,
    ) -> Result<Self, AppError> {
        if order.len() < MINIMUM_VECTORS {
            return Err(AppError::InvalidConfiguration {
                minimum: MINIMUM_VECTORS,
            });
        }
        if let Some(&missing) = order.iter().find(|&&id| !tree.contains(id)) {
            return Err(AppError::UnknownNode(missing));
        }

        Ok(Self {
            tree,
            order,
            selection: SelectionState::new(),
            view: ViewState::new(),
            options,
            should_exit: false,
        })
    }

    /// Erstellt den Zustand mit dem Standard-Roboterarm aus 8 Vektoren.
    pub fn robohand(options: RobohandOptions) -> Result<Self, AppError> {
        let (tree, order) = setup::build_robohand(&options)?;
        log::info!("Robohand mit {} Vektoren aufgebaut", order.len());
        Self::new(tree, order, options)
    }

    /// Lesezugriff auf die Vektor-Arena
    pub fn tree(&self) -> &VectorTree {
        &self.tree
    }

    pub(crate) fn tree_mut(&mut self) -> &mut VectorTree {
        &mut self.tree
    }

    /// Flache Reihenfolge aller Vektoren
    pub fn node_order(&self) -> &[NodeId] {
        &self.order
    }

    /// Gibt die Anzahl der Vektoren zurück (für Selektion und UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// ID des ersten Vektors (Anker am Canvas-Mittelpunkt)
    pub fn anchor_node_id(&self) -> NodeId {
        self.order[0]
    }

    /// ID des selektierten Vektors (Cursor wird auf die Liste geklemmt)
    pub fn selected_node_id(&self) -> NodeId {
        let last = self.order.len() - 1;
        self.order[self.selection.selected_index.min(last)]
    }

    /// Selektierter Vektor
    pub fn selected_node(&self) -> Option<&VectorNode> {
        self.tree.node(self.selected_node_id())
    }
}
