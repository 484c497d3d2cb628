pub mod bunker;
pub mod catwalk;

pub use bunker::Bunker;
pub use catwalk::Catwalk;

use crate::error::Result;
use crate::operations::query::{Aabb, BoundingBox, Solids, Volume, VolumeParams};
use crate::params::{CatwalkParameters, GeometryParameters};
use crate::topology::{SolidId, SolidStore};

/// A generated piece: the store holding every intermediate solid and the
/// root of the final one.
#[derive(Debug)]
pub struct GeneratedModel {
    store: SolidStore,
    solid: SolidId,
}

impl GeneratedModel {
    #[must_use]
    pub fn store(&self) -> &SolidStore {
        &self.store
    }

    #[must_use]
    pub fn solid(&self) -> SolidId {
        self.solid
    }

    /// # Errors
    ///
    /// Returns an error if the store is inconsistent.
    pub fn bounding_box(&self) -> Result<Aabb> {
        BoundingBox::new(self.solid).execute(&self.store)
    }

    /// Sampled volume of the final solid.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` has a non-positive cell size.
    pub fn volume(&self, params: VolumeParams) -> Result<f64> {
        Volume::new(self.solid).with_params(params).execute(&self.store)
    }

    /// Top-level bodies of the final solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is inconsistent.
    pub fn bodies(&self) -> Result<Vec<SolidId>> {
        Solids::new(self.solid).execute(&self.store)
    }
}

/// Generates a bunker with the default wall angle.
///
/// # Errors
///
/// Returns a geometry error for invalid parameters, before any solid is
/// built, or any kernel error raised during construction.
pub fn generate(params: &GeometryParameters) -> Result<GeneratedModel> {
    let mut store = SolidStore::new();
    let solid = Bunker::new(params.clone()).generate(&mut store)?;
    tracing::debug!(solids = store.len(), "generated bunker");
    Ok(GeneratedModel { store, solid })
}

/// Generates a catwalk platform.
///
/// # Errors
///
/// Returns a geometry error for invalid parameters or any kernel error.
pub fn generate_catwalk(params: &CatwalkParameters) -> Result<GeneratedModel> {
    let mut store = SolidStore::new();
    let solid = Catwalk::new(params.clone()).generate(&mut store)?;
    tracing::debug!(solids = store.len(), "generated catwalk");
    Ok(GeneratedModel { store, solid })
}
