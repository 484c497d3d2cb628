use crate::error::{GeometryError, Result};
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};
use crate::topology::{SolidId, SolidStore};

use super::GeneralTransform;

/// Scales a solid per axis from a center point.
pub struct Scale {
    solid: SolidId,
    center: Point3,
    factors: Vector3,
}

impl Scale {
    /// Creates a new `Scale` operation with per-axis factors.
    #[must_use]
    pub fn new(solid: SolidId, center: Point3, factors: Vector3) -> Self {
        Self {
            solid,
            center,
            factors,
        }
    }

    /// Creates a new uniform `Scale` operation.
    #[must_use]
    pub fn uniform(solid: SolidId, center: Point3, factor: f64) -> Self {
        Self::new(solid, center, Vector3::repeat(factor))
    }

    /// Executes the scaling, adding the scaled solid to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if any factor is zero or the solid is missing.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        if self.factors.iter().any(|f| f.abs() < TOLERANCE) {
            return Err(GeometryError::ZeroVector.into());
        }
        let t_neg = Matrix4::new_translation(&(-self.center.coords));
        let scale = Matrix4::new_nonuniform_scaling(&self.factors);
        let t_pos = Matrix4::new_translation(&self.center.coords);
        GeneralTransform::new(self.solid, t_pos * scale * t_neg).execute(store)
    }
}
