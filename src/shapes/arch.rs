use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};
use crate::operations::boolean::{Intersect, Union};
use crate::operations::creation::{MakeBox, MakeCylinder};
use crate::operations::transform::{Rotate, Scale, Translate};
use crate::topology::{SolidId, SolidStore};

/// Dimensions of a pointed (gothic) arch.
///
/// The arch stands on the XY plane footprint `length` × `width`. Its straight
/// sides rise to `inner_height`, then two circular arcs meet at `height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchSpec {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub inner_height: f64,
}

impl ArchSpec {
    /// Height of the pointed crown above the springing line.
    #[must_use]
    pub fn rise(&self) -> f64 {
        self.height - self.inner_height
    }

    /// Checks that the arch has a positive footprint and crown.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidGeometry`] naming `what` otherwise.
    pub fn validate(&self, what: &str) -> std::result::Result<(), GeometryError> {
        if self.length <= 0.0 || self.width <= 0.0 || self.inner_height < 0.0 {
            return Err(GeometryError::InvalidGeometry(format!(
                "{what}: arch footprint {} x {} with springing height {} is degenerate",
                self.length, self.width, self.inner_height
            )));
        }
        if self.rise() <= 0.0 {
            return Err(GeometryError::InvalidGeometry(format!(
                "{what}: arch height {} does not clear springing height {}",
                self.height, self.inner_height
            )));
        }
        Ok(())
    }
}

/// Builds a pointed arch centered on the origin.
///
/// The crown is the lens between two Y-axis cylinders of radius `length`
/// whose centers sit on the springing line at the opposite jambs, stretched
/// vertically to the requested rise.
///
/// # Errors
///
/// Returns an error if the arch dimensions are degenerate.
pub fn arch_pointed(store: &mut SolidStore, spec: &ArchSpec) -> Result<SolidId> {
    spec.validate("pointed arch")?;
    let ArchSpec {
        length,
        width,
        height,
        inner_height,
    } = *spec;

    let natural_rise = length * 3.0_f64.sqrt() / 2.0;
    let cylinder = MakeCylinder::new(width, length).execute(store)?;
    let cylinder = Rotate::degrees(cylinder, Vector3::x(), 90.0).execute(store)?;
    let left = Translate::new(cylinder, Vector3::new(-length / 2.0, 0.0, inner_height))
        .execute(store)?;
    let right =
        Translate::new(cylinder, Vector3::new(length / 2.0, 0.0, inner_height)).execute(store)?;
    let lens = Intersect::new(left, right).execute(store)?;

    let above_spring = MakeBox::new(length, width, natural_rise).execute(store)?;
    let above_spring = Translate::new(
        above_spring,
        Vector3::new(0.0, 0.0, inner_height + natural_rise / 2.0),
    )
    .execute(store)?;
    let crown = Intersect::new(lens, above_spring).execute(store)?;
    let crown = Scale::new(
        crown,
        Point3::new(0.0, 0.0, inner_height),
        Vector3::new(1.0, 1.0, spec.rise() / natural_rise),
    )
    .execute(store)?;

    let arch = if inner_height > 0.0 {
        let jambs = MakeBox::new(length, width, inner_height).execute(store)?;
        let jambs =
            Translate::new(jambs, Vector3::new(0.0, 0.0, inner_height / 2.0)).execute(store)?;
        Union::new(jambs, crown).execute(store)?
    } else {
        crown
    };
    Translate::new(arch, Vector3::new(0.0, 0.0, -height / 2.0)).execute(store)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::boolean::{classify_point_in_solid, PointClassification};
    use crate::operations::query::{BoundingBox, Volume, VolumeParams};

    fn spec() -> ArchSpec {
        ArchSpec {
            length: 20.0,
            width: 4.0,
            height: 40.0,
            inner_height: 20.0,
        }
    }

    fn inside(store: &SolidStore, solid: SolidId, x: f64, y: f64, z: f64) -> bool {
        classify_point_in_solid(&Point3::new(x, y, z), solid, store).unwrap()
            == PointClassification::Inside
    }

    #[test]
    fn arch_is_centered_in_its_box() {
        let mut store = SolidStore::new();
        let arch = arch_pointed(&mut store, &spec()).unwrap();
        let bounds = BoundingBox::new(arch).execute(&store).unwrap();
        assert_relative_eq!(bounds.min.z, -20.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.max.z, 20.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.size().x, 20.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.size().y, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn crown_narrows_to_a_point() {
        let mut store = SolidStore::new();
        let arch = arch_pointed(&mut store, &spec()).unwrap();
        // jamb corners and apex are solid, shoulders near the top are not
        assert!(inside(&store, arch, 9.9, 0.0, -19.9));
        assert!(inside(&store, arch, 9.9, 0.0, -0.1));
        assert!(inside(&store, arch, 0.0, 0.0, 19.8));
        assert!(!inside(&store, arch, 9.0, 0.0, 19.0));
        assert!(!inside(&store, arch, -9.0, 0.0, 15.0));
    }

    #[test]
    fn arch_volume_is_between_jambs_and_full_box() {
        let mut store = SolidStore::new();
        let arch = arch_pointed(&mut store, &spec()).unwrap();
        let volume = Volume::new(arch)
            .with_params(VolumeParams { cell_size: 0.5 })
            .execute(&store)
            .unwrap();
        let jambs = 20.0 * 4.0 * 20.0;
        assert!(volume > jambs * 1.3);
        assert!(volume < jambs * 2.0);
    }

    #[test]
    fn crown_must_clear_springing_line() {
        let mut store = SolidStore::new();
        let flat = ArchSpec {
            inner_height: 40.0,
            ..spec()
        };
        assert!(arch_pointed(&mut store, &flat).is_err());
    }
}
