use crate::error::Result;
use crate::topology::{SolidData, SolidId, SolidStore};

/// Collects solids into one multi-body solid without fusing them.
///
/// Body order is preserved and is what [`crate::operations::query::Solids`]
/// reports back.
pub struct MakeCompound {
    bodies: Vec<SolidId>,
}

impl MakeCompound {
    /// Creates a new `MakeCompound` operation. An empty list is allowed.
    #[must_use]
    pub fn new(bodies: Vec<SolidId>) -> Self {
        Self { bodies }
    }

    /// Executes the operation, creating the compound in the solid store.
    ///
    /// # Errors
    ///
    /// Returns an error if any body is missing from the store.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        Ok(store.add_solid(SolidData::Compound(self.bodies.clone()))?)
    }
}
