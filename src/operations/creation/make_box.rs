use crate::error::{OperationError, Result};
use crate::math::{Vector3, TOLERANCE};
use crate::topology::{Primitive, SolidData, SolidId, SolidStore};

/// Creates a box solid centered on the origin.
pub struct MakeBox {
    length: f64,
    width: f64,
    height: f64,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation with extents along X, Y and Z.
    #[must_use]
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Executes the operation, creating the box in the solid store.
    ///
    /// # Errors
    ///
    /// Returns an error if any extent is not positive.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        for (name, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if value < TOLERANCE {
                return Err(OperationError::InvalidInput(format!(
                    "box {name} must be positive, got {value}"
                ))
                .into());
            }
        }
        Ok(store.add_solid(SolidData::Primitive(Primitive::Cuboid {
            half_extents: Vector3::new(self.length, self.width, self.height) * 0.5,
            edges: Vec::new(),
        }))?)
    }
}
