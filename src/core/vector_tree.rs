use super::{NodeId, TreeError, VectorNode};
use glam::Vec2;

/// Arena aller Vektoren eines Roboterarms.
///
/// Mutationen werden eager an den Teilbaum weitergereicht: nach jedem
/// `set_*`-Aufruf liegt jeder Kind-Tail exakt auf dem Head seines Eltern-Vektors.
#[derive(Debug, Clone, Default)]
pub struct VectorTree {
    nodes: Vec<VectorNode>,
}

impl VectorTree {
    /// Erstellt eine leere Arena.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Legt einen losen Vektor (ohne Eltern, Tail im Ursprung) an.
    pub fn add_node(&mut self, length: f32, angle: f32) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(VectorNode::new(length, angle));
        id
    }

    /// Anzahl der Vektoren in der Arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true`, wenn noch kein Vektor angelegt wurde
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Prüft, ob die ID zu einem Vektor dieser Arena gehört
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Alle IDs in Anlage-Reihenfolge
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Lesezugriff auf einen Vektor
    pub fn node(&self, id: NodeId) -> Option<&VectorNode> {
        self.nodes.get(id.0)
    }

    /// Tail-Position eines Vektors
    pub fn tail_position(&self, id: NodeId) -> Option<Vec2> {
        self.node(id).map(VectorNode::tail)
    }

    /// Head-Position eines Vektors (aus Tail, Länge und Winkel berechnet)
    pub fn head_position(&self, id: NodeId) -> Option<Vec2> {
        self.node(id).map(VectorNode::head)
    }

    /// Liefert `(tail, head)` eines Vektors.
    pub fn segment(&self, id: NodeId) -> Option<(Vec2, Vec2)> {
        self.node(id).map(|node| (node.tail(), node.head()))
    }

    fn get(&self, id: NodeId) -> Result<&VectorNode, TreeError> {
        self.nodes.get(id.0).ok_or(TreeError::UnknownNode(id))
    }

    /// Hängt `child` an den Head von `parent`.
    ///
    /// Der Kind-Tail (samt Teilbaum) wird einmalig auf den aktuellen Head
    /// gesetzt. Schlägt fehl, wenn eine der IDs unbekannt ist, das Kind bereits
    /// einen Eltern-Vektor hat oder ein Zyklus entstehen würde; der Baum bleibt
    /// dann unverändert.
    pub fn attach_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.get(parent)?;
        let child_node = self.get(child)?;

        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::Cycle { parent, child });
        }
        if let Some(existing) = child_node.parent {
            return Err(TreeError::AlreadyAttached {
                child,
                parent: existing,
            });
        }

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
        let head = self.nodes[parent.0].head();
        self.place(child, head);

        log::debug!("Vektor {} an Vektor {} angehängt", child, parent);
        Ok(())
    }

    /// Entfernt `child` aus der Kind-Liste von `parent`.
    ///
    /// Gibt `true` zurück, wenn das Kind entfernt wurde. Ein nicht vorhandenes
    /// Kind ist kein Fehler. Der gelöste Vektor behält seine Geometrie.
    pub fn detach_child(&mut self, parent: NodeId, child: NodeId) -> Result<bool, TreeError> {
        self.get(parent)?;

        let children = &mut self.nodes[parent.0].children;
        let Some(pos) = children.iter().position(|&c| c == child) else {
            return Ok(false);
        };
        children.remove(pos);

        if let Some(node) = self.nodes.get_mut(child.0) {
            node.parent = None;
        }
        log::debug!("Vektor {} von Vektor {} gelöst", child, parent);
        Ok(true)
    }

    /// Setzt den Tail und verschiebt den gesamten Teilbaum mit.
    pub fn set_tail_position(&mut self, id: NodeId, tail: Vec2) -> Result<(), TreeError> {
        self.get(id)?;
        self.place(id, tail);
        Ok(())
    }

    /// Setzt die Länge; Kinder werden nur verschoben, nicht gedreht.
    pub fn set_length(&mut self, id: NodeId, length: f32) -> Result<(), TreeError> {
        self.get(id)?;
        let node = &mut self.nodes[id.0];
        node.length = length;
        let head = node.head();
        self.place_children(id, head);
        Ok(())
    }

    /// Setzt den Winkel; der Teilbaum dreht starr um dieselbe Differenz mit.
    pub fn set_angle(&mut self, id: NodeId, angle: f32) -> Result<(), TreeError> {
        self.get(id)?;
        self.rotate(id, angle);
        Ok(())
    }

    /// Läuft von `node` zur Wurzel und prüft, ob `candidate` auf dem Weg liegt.
    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    fn place(&mut self, id: NodeId, tail: Vec2) {
        let node = &mut self.nodes[id.0];
        node.tail = tail;
        let head = node.head();
        self.place_children(id, head);
    }

    fn place_children(&mut self, id: NodeId, head: Vec2) {
        for i in 0..self.nodes[id.0].children.len() {
            let child = self.nodes[id.0].children[i];
            self.place(child, head);
        }
    }

    fn rotate(&mut self, id: NodeId, angle: f32) {
        let node = &mut self.nodes[id.0];
        let delta = angle - node.angle;
        node.angle = angle;
        let head = node.head();

        for i in 0..self.nodes[id.0].children.len() {
            let child = self.nodes[id.0].children[i];
            self.place(child, head);
            let child_angle = self.nodes[child.0].angle + delta;
            self.rotate(child, child_angle);
        }
    }
}

#[cfg(test)]
mod tests;
