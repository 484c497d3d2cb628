use rayon::prelude::*;

use crate::error::{OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::operations::boolean::contains;
use crate::topology::{SolidId, SolidStore};

/// Parameters controlling volume sampling.
#[derive(Debug, Clone, Copy)]
pub struct VolumeParams {
    /// Target edge length of a sampling cell. The grid is fitted to the
    /// bounding box, so actual cells are at most this size.
    pub cell_size: f64,
}

impl Default for VolumeParams {
    fn default() -> Self {
        Self { cell_size: 0.5 }
    }
}

/// Computes the volume of a solid.
///
/// Samples cell centers on a regular grid over the solid's bounding box and
/// counts the ones classified inside (midpoint rule). The same solid and
/// parameters always produce the same value, so volumes of different solids
/// sampled over the same box are directly comparable. Z slices are sampled
/// in parallel.
pub struct Volume {
    solid: SolidId,
    params: VolumeParams,
}

impl Volume {
    /// Creates a new `Volume` query with default sampling parameters.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self {
            solid,
            params: VolumeParams::default(),
        }
    }

    /// Sets custom sampling parameters.
    #[must_use]
    pub fn with_params(mut self, params: VolumeParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning the volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell size is not positive or the solid tree
    /// references a missing solid.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn execute(&self, store: &SolidStore) -> Result<f64> {
        if self.params.cell_size < TOLERANCE {
            return Err(
                OperationError::InvalidInput("volume cell size must be positive".into()).into(),
            );
        }
        let aabb = store.bounds(self.solid)?;
        if aabb.is_empty() {
            return Ok(0.0);
        }
        let size = aabb.size();
        let counts = size.map(|extent| ((extent / self.params.cell_size).ceil() as usize).max(1));
        let step = size.component_div(&counts.map(|n| n as f64));
        let solid = self.solid;

        let inside_per_slice = (0..counts.z)
            .into_par_iter()
            .map(|k| -> Result<usize> {
                let z = aabb.min.z + (k as f64 + 0.5) * step.z;
                let mut inside = 0usize;
                for j in 0..counts.y {
                    let y = aabb.min.y + (j as f64 + 0.5) * step.y;
                    for i in 0..counts.x {
                        let x = aabb.min.x + (i as f64 + 0.5) * step.x;
                        if contains(&Point3::new(x, y, z), solid, store)? {
                            inside += 1;
                        }
                    }
                }
                Ok(inside)
            })
            .collect::<Result<Vec<usize>>>()?;

        let inside: usize = inside_per_slice.iter().sum();
        Ok(inside as f64 * step.x * step.y * step.z)
    }
}
