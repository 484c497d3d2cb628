use crate::error::Result;
use crate::topology::{EdgeFinish, EdgeSelector, SolidId, SolidStore};

use super::edge_finish::apply_edge_finish;

/// Rounds selected edges of a box with a radius.
pub struct Fillet {
    solid: SolidId,
    selector: EdgeSelector,
    radius: f64,
}

impl Fillet {
    /// Creates a new `Fillet` operation.
    #[must_use]
    pub fn new(solid: SolidId, selector: EdgeSelector, radius: f64) -> Self {
        Self {
            solid,
            selector,
            radius,
        }
    }

    /// Executes the fillet, adding the finished solid to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not a box, the selector matches no
    /// edge, or the radius is not positive or larger than a touching face.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        apply_edge_finish(
            store,
            self.solid,
            &self.selector,
            EdgeFinish::Fillet(self.radius),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::creation::MakeBox;
    use crate::operations::query::{Volume, VolumeParams};
    use crate::topology::Axis;

    #[test]
    fn fillet_rounds_four_parallel_edges() {
        let mut store = SolidStore::new();
        let solid = MakeBox::new(10.0, 2.0, 10.0).execute(&mut store).unwrap();
        let rounded = Fillet::new(solid, EdgeSelector::ParallelTo(Axis::Y), 2.0)
            .execute(&mut store)
            .unwrap();
        let volume = Volume::new(rounded)
            .with_params(VolumeParams { cell_size: 0.05 })
            .execute(&store)
            .unwrap();
        // Each corner loses (1 - pi/4) r^2 of cross-section.
        let expected = (100.0 - 4.0 * (1.0 - PI / 4.0) * 4.0) * 2.0;
        assert_relative_eq!(volume, expected, max_relative = 0.01);
    }

    #[test]
    fn zero_radius_fails() {
        let mut store = SolidStore::new();
        let solid = MakeBox::new(1.0, 1.0, 1.0).execute(&mut store).unwrap();
        assert!(Fillet::new(solid, EdgeSelector::ParallelTo(Axis::Y), 0.0)
            .execute(&mut store)
            .is_err());
    }
}
