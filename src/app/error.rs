use crate::core::{NodeId, TreeError};
use thiserror::Error;

/// Mindestanzahl an Vektoren für einen Robohand-Canvas.
pub const MINIMUM_VECTORS: usize = 1;

/// Fehler beim Aufbau des Anwendungszustands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Zu wenige Vektoren in der Selektions-Reihenfolge.
    #[error("Robohand benötigt mindestens {minimum} Vektor")]
    InvalidConfiguration { minimum: usize },

    /// Die Selektions-Reihenfolge verweist auf einen unbekannten Vektor.
    #[error("Vektor {0} aus der Reihenfolge existiert nicht im Baum")]
    UnknownNode(NodeId),

    #[error(transparent)]
    Tree(#[from] TreeError),
}
