use crate::error::{OperationError, Result};
use crate::math::TOLERANCE;
use crate::topology::{Primitive, SolidData, SolidId, SolidStore};

/// Creates a cylinder solid along the Z axis, centered on the origin.
pub struct MakeCylinder {
    height: f64,
    radius: f64,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation.
    #[must_use]
    pub fn new(height: f64, radius: f64) -> Self {
        Self { height, radius }
    }

    /// Executes the operation, creating the cylinder in the solid store.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or height is near zero.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        if self.radius < TOLERANCE {
            return Err(
                OperationError::InvalidInput("cylinder radius must be positive".into()).into(),
            );
        }
        if self.height < TOLERANCE {
            return Err(
                OperationError::InvalidInput("cylinder height must be positive".into()).into(),
            );
        }
        Ok(store.add_solid(SolidData::Primitive(Primitive::Cylinder {
            radius: self.radius,
            half_height: self.height / 2.0,
        }))?)
    }
}
