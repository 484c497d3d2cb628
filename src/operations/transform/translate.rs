use crate::error::Result;
use crate::math::{Matrix4, Vector3};
use crate::topology::{SolidId, SolidStore};

use super::GeneralTransform;

/// Translates a solid by a displacement vector.
pub struct Translate {
    solid: SolidId,
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(solid: SolidId, displacement: Vector3) -> Self {
        Self {
            solid,
            displacement,
        }
    }

    /// Executes the translation, adding the moved solid to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is missing from the store.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        GeneralTransform::new(self.solid, Matrix4::new_translation(&self.displacement))
            .execute(store)
    }
}
