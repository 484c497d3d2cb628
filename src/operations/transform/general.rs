use crate::error::{OperationError, Result};
use crate::math::Matrix4;
use crate::topology::{SolidData, SolidId, SolidStore};

/// Applies an arbitrary invertible 4x4 transformation matrix to a solid.
pub struct GeneralTransform {
    solid: SolidId,
    matrix: Matrix4,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(solid: SolidId, matrix: Matrix4) -> Self {
        Self { solid, matrix }
    }

    /// Executes the transformation, adding the placed solid to the store.
    ///
    /// The source solid is left untouched. Compounds stay compounds: each body
    /// is transformed on its own so body enumeration order is preserved.
    /// Stacked transforms are collapsed into a single matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is singular or the solid is missing.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        let inverse = self.matrix.try_inverse().ok_or_else(|| {
            OperationError::InvalidInput("transform matrix must be invertible".into())
        })?;
        transform_solid(store, self.solid, &self.matrix, &inverse)
    }
}

fn transform_solid(
    store: &mut SolidStore,
    solid: SolidId,
    matrix: &Matrix4,
    inverse: &Matrix4,
) -> Result<SolidId> {
    let data = match store.solid(solid)?.clone() {
        SolidData::Compound(bodies) => {
            let mut moved = Vec::with_capacity(bodies.len());
            for body in bodies {
                moved.push(transform_solid(store, body, matrix, inverse)?);
            }
            SolidData::Compound(moved)
        }
        SolidData::Transformed {
            source,
            matrix: inner,
            inverse: inner_inverse,
        } => SolidData::Transformed {
            source,
            matrix: matrix * inner,
            inverse: inner_inverse * inverse,
        },
        SolidData::Primitive(_) | SolidData::Boolean { .. } => SolidData::Transformed {
            source: solid,
            matrix: *matrix,
            inverse: *inverse,
        },
    };
    Ok(store.add_solid(data)?)
}
