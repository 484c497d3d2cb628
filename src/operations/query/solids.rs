use crate::error::Result;
use crate::topology::{SolidData, SolidId, SolidStore};

/// Enumerates the individual bodies of a solid.
///
/// Compounds are flattened depth-first in insertion order; any other solid is
/// a single body. The order is stable for a given construction sequence,
/// which is what index-based instance selection relies on.
pub struct Solids {
    solid: SolidId,
}

impl Solids {
    /// Creates a new `Solids` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the bodies in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if a solid is missing from the store.
    pub fn execute(&self, store: &SolidStore) -> Result<Vec<SolidId>> {
        let mut bodies = Vec::new();
        collect_bodies(store, self.solid, &mut bodies)?;
        Ok(bodies)
    }
}

fn collect_bodies(store: &SolidStore, solid: SolidId, out: &mut Vec<SolidId>) -> Result<()> {
    match store.solid(solid)? {
        SolidData::Compound(bodies) => {
            for body in bodies {
                collect_bodies(store, *body, out)?;
            }
        }
        _ => out.push(solid),
    }
    Ok(())
}
