use crate::error::Result;
use crate::topology::{EdgeFinish, EdgeSelector, SolidId, SolidStore};

use super::edge_finish::apply_edge_finish;

/// Chamfers selected edges of a box with a symmetric distance.
pub struct Chamfer {
    solid: SolidId,
    selector: EdgeSelector,
    distance: f64,
}

impl Chamfer {
    /// Creates a new `Chamfer` operation.
    #[must_use]
    pub fn new(solid: SolidId, selector: EdgeSelector, distance: f64) -> Self {
        Self {
            solid,
            selector,
            distance,
        }
    }

    /// Executes the chamfer, adding the finished solid to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not a box, the selector matches no
    /// edge, or the distance is not positive or larger than a touching face.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        apply_edge_finish(
            store,
            self.solid,
            &self.selector,
            EdgeFinish::Chamfer(self.distance),
        )
    }
}
