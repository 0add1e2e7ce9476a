use glam::Vec2;
use std::fmt;

/// Index eines Vektors in der `VectorTree`-Arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein starres Segment: Tail-Position, Länge und Winkel.
///
/// Der Head wird bei jedem Lesezugriff aus Tail, Länge und Winkel berechnet.
/// Kinder werden nur über die `VectorTree`-Arena mutiert, damit die Kaskade
/// nicht umgangen werden kann.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorNode {
    pub(crate) tail: Vec2,
    pub(crate) length: f32,
    /// Winkel in Radiant, unbeschränkt (keine Normalisierung)
    pub(crate) angle: f32,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl VectorNode {
    /// Erstellt einen losen Vektor mit Tail im Ursprung.
    pub fn new(length: f32, angle: f32) -> Self {
        Self {
            tail: Vec2::ZERO,
            length,
            angle,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Tail-Position (Startpunkt des Segments)
    pub fn tail(&self) -> Vec2 {
        self.tail
    }

    /// Head-Position: `tail + length * (cos(angle), sin(angle))`
    pub fn head(&self) -> Vec2 {
        self.tail + Vec2::from_angle(self.angle) * self.length
    }

    /// Länge des Segments (nie negativ nach Controller-Mutationen)
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Winkel in Radiant
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Kinder in Anhänge-Reihenfolge
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Eltern-Vektor, `None` für Wurzeln
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}
