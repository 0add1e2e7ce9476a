//! Aufbau des Standard-Roboterarms.

use crate::core::{NodeId, TreeError, VectorTree};
use crate::shared::RobohandOptions;

/// Anzahl der Vektoren im Standard-Roboterarm.
pub const ROBOHAND_NODE_COUNT: usize = 8;

/// Eltern/Kind-Kanten als Indizes in die Anlage-Reihenfolge.
///
/// Wurzel 0 trägt zwei Finger (1, 2), jeder Finger zwei Glieder,
/// Glied 6 ein weiteres.
pub const ROBOHAND_EDGES: [(usize, usize); 7] =
    [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6), (6, 7)];

/// Baut den Standard-Baum und liefert ihn samt flacher Reihenfolge.
pub fn build_robohand(
    options: &RobohandOptions,
) -> Result<(VectorTree, Vec<NodeId>), TreeError> {
    let mut tree = VectorTree::new();
    let order: Vec<NodeId> = (0..ROBOHAND_NODE_COUNT)
        .map(|_| tree.add_node(options.initial_length, options.initial_angle))
        .collect();

    for (parent, child) in ROBOHAND_EDGES {
        tree.attach_child(order[parent], order[child])?;
    }

    Ok((tree, order))
}
