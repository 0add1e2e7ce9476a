use super::NodeId;
use thiserror::Error;

/// Fehler bei der Verdrahtung oder Mutation des Vektor-Baums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Die ID verweist auf keinen Vektor der Arena (ungültiges Argument).
    #[error("Vektor {0} existiert nicht im Baum")]
    UnknownNode(NodeId),

    /// Der Vektor gehört bereits einem anderen Eltern-Vektor.
    #[error("Vektor {child} hängt bereits an Vektor {parent}")]
    AlreadyAttached { child: NodeId, parent: NodeId },

    /// Das Anhängen würde einen Zyklus erzeugen (auch: Vektor an sich selbst).
    #[error("Anhängen von Vektor {child} an Vektor {parent} würde einen Zyklus erzeugen")]
    Cycle { parent: NodeId, child: NodeId },
}
