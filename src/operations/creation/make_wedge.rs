use crate::error::{OperationError, Result};
use crate::math::TOLERANCE;
use crate::topology::{Primitive, SolidData, SolidId, SolidStore, WedgeProfile};

/// Creates a wedge (tapered box) centered on its bounding box.
///
/// The base rectangle `dx × dz` sits at the bottom of the local Y axis and the
/// top rectangle spans `[xmin, xmax] × [zmin, zmax]`, measured from the base
/// corner.
pub struct MakeWedge {
    profile: WedgeProfile,
}

impl MakeWedge {
    /// Creates a new `MakeWedge` operation.
    #[must_use]
    pub fn new(dx: f64, dy: f64, dz: f64, xmin: f64, zmin: f64, xmax: f64, zmax: f64) -> Self {
        Self {
            profile: WedgeProfile {
                dx,
                dy,
                dz,
                xmin,
                zmin,
                xmax,
                zmax,
            },
        }
    }

    /// Executes the operation, creating the wedge in the solid store.
    ///
    /// # Errors
    ///
    /// Returns an error if the base or height is not positive, or the top
    /// rectangle is inverted.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        let w = &self.profile;
        if w.dx < TOLERANCE || w.dy < TOLERANCE || w.dz < TOLERANCE {
            return Err(OperationError::InvalidInput(
                "wedge base and height must be positive".into(),
            )
            .into());
        }
        if w.xmax < w.xmin || w.zmax < w.zmin {
            return Err(
                OperationError::InvalidInput("wedge top rectangle is inverted".into()).into(),
            );
        }
        Ok(store.add_solid(SolidData::Primitive(Primitive::Wedge(*w)))?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::query::{BoundingBox, Volume, VolumeParams};

    #[test]
    fn frustum_volume_matches_formula() {
        let mut store = SolidStore::new();
        // 10x10 base, 6x6 top, height 10
        let solid = MakeWedge::new(10.0, 10.0, 10.0, 2.0, 2.0, 8.0, 8.0)
            .execute(&mut store)
            .unwrap();
        let expected = 10.0 / 3.0 * (100.0 + 36.0 + 60.0);
        let volume = Volume::new(solid)
            .with_params(VolumeParams { cell_size: 0.1 })
            .execute(&store)
            .unwrap();
        assert_relative_eq!(volume, expected, max_relative = 0.01);
    }

    #[test]
    fn wedge_is_centered() {
        let mut store = SolidStore::new();
        let solid = MakeWedge::new(4.0, 2.0, 6.0, 1.0, 1.0, 3.0, 5.0)
            .execute(&mut store)
            .unwrap();
        let center = BoundingBox::new(solid).execute(&store).unwrap().center();
        assert_relative_eq!(center.coords.norm(), 0.0);
    }

    #[test]
    fn inverted_top_fails() {
        let mut store = SolidStore::new();
        let result = MakeWedge::new(4.0, 2.0, 6.0, 3.0, 1.0, 1.0, 5.0).execute(&mut store);
        assert!(result.is_err());
    }
}
