pub mod edge;
pub mod primitive;
pub mod solid;

pub use edge::{Axis, BoxEdge, EdgeFinish, EdgeSelector, EdgeTreatment, Face};
pub use primitive::{Primitive, WedgeProfile};
pub use solid::{SolidData, SolidId};

use crate::error::TopologyError;
use crate::math::transform_point;
use crate::operations::boolean::BooleanOp;
use crate::operations::query::Aabb;
use slotmap::SlotMap;

#[derive(Debug, Clone)]
struct SolidEntry {
    data: SolidData,
    bounds: Aabb,
}

/// Central arena that owns all solids built during one generation pass.
///
/// Solids reference each other via typed IDs (generational indices). Entries
/// are never mutated after insertion, so shared sub-solids stay valid.
#[derive(Debug, Default)]
pub struct SolidStore {
    solids: SlotMap<SolidId, SolidEntry>,
}

impl SolidStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of solids in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solids.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    /// Inserts a solid and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the data refers to a solid that is not in the store.
    pub fn add_solid(&mut self, data: SolidData) -> Result<SolidId, TopologyError> {
        let bounds = self.compute_bounds(&data)?;
        Ok(self.solids.insert(SolidEntry { data, bounds }))
    }

    /// Returns a reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, TopologyError> {
        self.entry(id).map(|e| &e.data)
    }

    /// Returns the cached world-space bounding box of a solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn bounds(&self, id: SolidId) -> Result<Aabb, TopologyError> {
        self.entry(id).map(|e| e.bounds)
    }

    fn entry(&self, id: SolidId) -> Result<&SolidEntry, TopologyError> {
        self.solids
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("solid".into()))
    }

    fn compute_bounds(&self, data: &SolidData) -> Result<Aabb, TopologyError> {
        let bounds = match data {
            SolidData::Primitive(primitive) => primitive.aabb(),
            SolidData::Transformed { source, matrix, .. } => {
                let inner = self.bounds(*source)?;
                if inner.is_empty() {
                    inner
                } else {
                    Aabb::from_points(inner.corners().iter().map(|c| transform_point(matrix, c)))
                }
            }
            SolidData::Boolean { op, a, b } => {
                let (a, b) = (self.bounds(*a)?, self.bounds(*b)?);
                match op {
                    BooleanOp::Union => a.union(&b),
                    BooleanOp::Subtract => a,
                    BooleanOp::Intersect => a.intersection(&b),
                }
            }
            SolidData::Compound(bodies) => {
                let mut acc = Aabb::empty();
                for body in bodies {
                    acc = acc.union(&self.bounds(*body)?);
                }
                acc
            }
        };
        Ok(bounds)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    #[test]
    fn missing_solid_is_reported() {
        let mut other = SolidStore::new();
        let id = other
            .add_solid(SolidData::Compound(Vec::new()))
            .unwrap();
        let store = SolidStore::new();
        assert!(store.solid(id).is_err());
    }

    #[test]
    fn compound_bounds_cover_members() {
        let mut store = SolidStore::new();
        let cube = store
            .add_solid(SolidData::Primitive(Primitive::Cylinder {
                radius: 1.0,
                half_height: 2.0,
            }))
            .unwrap();
        let empty = store.add_solid(SolidData::Compound(vec![])).unwrap();
        assert!(store.bounds(empty).unwrap().is_empty());

        let both = store
            .add_solid(SolidData::Compound(vec![cube, empty]))
            .unwrap();
        let b = store.bounds(both).unwrap();
        assert_eq!(b.size(), Vector3::new(2.0, 2.0, 4.0));
    }
}
