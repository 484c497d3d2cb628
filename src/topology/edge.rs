use serde::{Deserialize, Serialize};

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index of the axis (0, 1, 2).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

/// One of the six faces of an axis-aligned box, named by its outward normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Face {
    pub axis: Axis,
    pub positive: bool,
}

impl Face {
    pub const PLUS_X: Self = Self::new(Axis::X, true);
    pub const MINUS_X: Self = Self::new(Axis::X, false);
    pub const PLUS_Y: Self = Self::new(Axis::Y, true);
    pub const MINUS_Y: Self = Self::new(Axis::Y, false);
    pub const PLUS_Z: Self = Self::new(Axis::Z, true);
    pub const MINUS_Z: Self = Self::new(Axis::Z, false);

    #[must_use]
    pub const fn new(axis: Axis, positive: bool) -> Self {
        Self { axis, positive }
    }

    /// Sign of the outward normal along the face axis.
    #[must_use]
    pub fn sign(self) -> f64 {
        if self.positive {
            1.0
        } else {
            -1.0
        }
    }
}

/// An edge of a box, identified by the two faces that meet along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxEdge {
    pub a: Face,
    pub b: Face,
}

impl BoxEdge {
    /// Returns the edge shared by two faces, or `None` if the faces are
    /// parallel (same axis).
    #[must_use]
    pub fn between(a: Face, b: Face) -> Option<Self> {
        if a.axis == b.axis {
            return None;
        }
        // Canonical order keeps equal edges equal regardless of argument order.
        if a.axis.index() < b.axis.index() {
            Some(Self { a, b })
        } else {
            Some(Self { a: b, b: a })
        }
    }

    /// The axis the edge runs along.
    #[must_use]
    pub fn direction(self) -> Axis {
        Axis::ALL
            .into_iter()
            .find(|axis| *axis != self.a.axis && *axis != self.b.axis)
            .unwrap_or(Axis::X)
    }

    /// Whether the edge lies on the given face.
    #[must_use]
    pub fn touches(self, face: Face) -> bool {
        self.a == face || self.b == face
    }

    /// All twelve edges of a box in a fixed order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut edges = Vec::with_capacity(12);
        for (i, &first) in Axis::ALL.iter().enumerate() {
            for &second in &Axis::ALL[i + 1..] {
                for pa in [true, false] {
                    for pb in [true, false] {
                        edges.push(Self {
                            a: Face::new(first, pa),
                            b: Face::new(second, pb),
                        });
                    }
                }
            }
        }
        edges
    }
}

/// Selects edges of a box primitive for finishing operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeSelector {
    /// Every edge running parallel to the axis.
    ParallelTo(Axis),
    /// The four edges bounding a face.
    OfFace(Face),
    /// The single edge shared by two faces.
    Between(Face, Face),
    /// Union of several selections.
    AnyOf(Vec<EdgeSelector>),
}

impl EdgeSelector {
    /// Resolves the selector to a list of box edges, in [`BoxEdge::all`] order.
    #[must_use]
    pub fn resolve(&self) -> Vec<BoxEdge> {
        BoxEdge::all()
            .into_iter()
            .filter(|edge| self.matches(*edge))
            .collect()
    }

    fn matches(&self, edge: BoxEdge) -> bool {
        match self {
            Self::ParallelTo(axis) => edge.direction() == *axis,
            Self::OfFace(face) => edge.touches(*face),
            Self::Between(a, b) => BoxEdge::between(*a, *b) == Some(edge),
            Self::AnyOf(selectors) => selectors.iter().any(|s| s.matches(edge)),
        }
    }
}

/// Profile applied to a box edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeFinish {
    /// Symmetric chamfer with the given leg length.
    Chamfer(f64),
    /// Round with the given radius.
    Fillet(f64),
}

/// A finish applied to one edge of a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeTreatment {
    pub edge: BoxEdge,
    pub finish: EdgeFinish,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn selector_loads_from_json() {
        let json = r#"{"AnyOf":[
            {"ParallelTo":"Y"},
            {"Between":[{"axis":"Z","positive":true},{"axis":"Y","positive":false}]}
        ]}"#;
        let selector: EdgeSelector = serde_json::from_str(json).unwrap();
        assert_eq!(
            selector,
            EdgeSelector::AnyOf(vec![
                EdgeSelector::ParallelTo(Axis::Y),
                EdgeSelector::Between(Face::PLUS_Z, Face::MINUS_Y),
            ])
        );
        assert_eq!(selector.resolve().len(), 5);
    }

    #[test]
    fn box_has_twelve_distinct_edges() {
        let edges = BoxEdge::all();
        assert_eq!(edges.len(), 12);
        for (i, e) in edges.iter().enumerate() {
            assert!(!edges[i + 1..].contains(e));
        }
    }

    #[test]
    fn parallel_selector_picks_four_edges() {
        let edges = EdgeSelector::ParallelTo(Axis::Y).resolve();
        assert_eq!(edges.len(), 4);
        assert!(edges.iter().all(|e| e.direction() == Axis::Y));
    }

    #[test]
    fn face_selector_picks_its_boundary() {
        let edges = EdgeSelector::OfFace(Face::MINUS_Z).resolve();
        assert_eq!(edges.len(), 4);
        assert!(edges.iter().all(|e| e.touches(Face::MINUS_Z)));
    }

    #[test]
    fn between_is_order_independent() {
        let a = EdgeSelector::Between(Face::PLUS_Z, Face::MINUS_X).resolve();
        let b = EdgeSelector::Between(Face::MINUS_X, Face::PLUS_Z).resolve();
        assert_eq!(a, b);
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn parallel_faces_share_no_edge() {
        assert!(EdgeSelector::Between(Face::PLUS_Z, Face::MINUS_Z)
            .resolve()
            .is_empty());
    }

    #[test]
    fn any_of_deduplicates() {
        let edges = EdgeSelector::AnyOf(vec![
            EdgeSelector::Between(Face::PLUS_Y, Face::PLUS_Z),
            EdgeSelector::Between(Face::PLUS_Y, Face::MINUS_Z),
            EdgeSelector::OfFace(Face::PLUS_Y),
        ])
        .resolve();
        assert_eq!(edges.len(), 4);
    }
}
