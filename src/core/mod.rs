//! Core-Domänentypen: Vektoren, Vektor-Baum und Fehler.

mod error;
/// Einzelnes starres Segment (Tail, Länge, Winkel)
pub mod vector_node;
/// Arena aller Vektoren mit Eltern/Kind-Verdrahtung und Kaskade
///
/// Jede Mutation eines Vektors wird sofort und rekursiv an alle
/// Nachfahren weitergereicht, damit Kind-Tails immer auf dem
/// Eltern-Head liegen.
pub mod vector_tree;

pub use error::TreeError;
pub use vector_node::{NodeId, VectorNode};
pub use vector_tree::VectorTree;
