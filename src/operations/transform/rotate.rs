use crate::error::{OperationError, Result};
use crate::math::{rotation_matrix, Matrix4, Point3, Vector3, TOLERANCE};
use crate::topology::{SolidId, SolidStore};

use super::GeneralTransform;

/// Rotates a solid around an axis.
pub struct Rotate {
    solid: SolidId,
    axis_origin: Point3,
    axis_direction: Vector3,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in radians.
    #[must_use]
    pub fn new(solid: SolidId, axis_origin: Point3, axis_direction: Vector3, angle: f64) -> Self {
        Self {
            solid,
            axis_origin,
            axis_direction,
            angle,
        }
    }

    /// Creates a rotation about an axis through the origin, in degrees.
    #[must_use]
    pub fn degrees(solid: SolidId, axis_direction: Vector3, degrees: f64) -> Self {
        Self::new(solid, Point3::origin(), axis_direction, degrees.to_radians())
    }

    /// Executes the rotation, adding the rotated solid to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis direction is zero-length.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        let len = self.axis_direction.norm();
        if len < TOLERANCE {
            return Err(
                OperationError::InvalidInput("rotation axis must be non-zero".into()).into(),
            );
        }
        let axis = self.axis_direction / len;

        // Translate to origin, rotate, translate back
        let t_neg = Matrix4::new_translation(&(-self.axis_origin.coords));
        let rot = rotation_matrix(&axis, self.angle);
        let t_pos = Matrix4::new_translation(&self.axis_origin.coords);
        let matrix = t_pos * rot * t_neg;

        GeneralTransform::new(self.solid, matrix).execute(store)
    }
}
