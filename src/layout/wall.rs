use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::{rotation_x_degrees, rotation_z_degrees, Matrix4, Vector3};
use crate::operations::creation::MakeCompound;
use crate::operations::transform::GeneralTransform;
use crate::topology::{Axis, SolidId, SolidStore};

use super::series::Series;

/// One of the four outer walls of a rectangular hull.
///
/// The canonical feature frame has its series along local +X and its outward
/// face toward local +Y. `PlusX` is the X-running wall on the +Y side;
/// `PlusY` is the Y-running wall on the +X side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Wall {
    PlusX,
    PlusY,
    MinusX,
    MinusY,
}

impl Wall {
    /// Enumeration order of walls in every instance set.
    pub const ORDER: [Wall; 4] = [Wall::PlusX, Wall::PlusY, Wall::MinusX, Wall::MinusY];

    /// The world axis the wall's series runs along.
    #[must_use]
    pub fn runs_along(self) -> Axis {
        match self {
            Wall::PlusX | Wall::MinusX => Axis::X,
            Wall::PlusY | Wall::MinusY => Axis::Y,
        }
    }

    /// Whether this wall is the 180° mirror of its partner.
    #[must_use]
    pub fn is_mirrored(self) -> bool {
        matches!(self, Wall::MinusX | Wall::MinusY)
    }

    /// Rotation about +Z taking the canonical frame onto this wall.
    #[must_use]
    pub fn rotation_degrees(self) -> f64 {
        let base = match self.runs_along() {
            Axis::X => 0.0,
            _ => -90.0,
        };
        if self.is_mirrored() {
            base + 180.0
        } else {
            base
        }
    }

    /// World direction the wall's features face.
    #[must_use]
    pub fn outward(self) -> Vector3 {
        match self {
            Wall::PlusX => Vector3::y(),
            Wall::PlusY => Vector3::x(),
            Wall::MinusX => -Vector3::y(),
            Wall::MinusY => -Vector3::x(),
        }
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Wall::PlusX => "+X",
            Wall::PlusY => "+Y",
            Wall::MinusX => "-X",
            Wall::MinusY => "-Y",
        };
        f.write_str(name)
    }
}

/// How a feature family leans on the wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tilt {
    /// Upright, regardless of the wall slope.
    Vertical,
    /// Follows the sloped outer face; `wall_angle` in degrees from horizontal.
    FollowWall { wall_angle: f64 },
}

impl Tilt {
    /// Rotation about the in-wall horizontal axis. Positive leans the top
    /// toward the hull center.
    #[must_use]
    pub fn degrees(self) -> f64 {
        match self {
            Tilt::Vertical => 0.0,
            Tilt::FollowWall { wall_angle } => 90.0 - wall_angle,
        }
    }
}

/// Hull dimensions and per-family placement rules shared by all four walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPlacement {
    pub hull_length: f64,
    pub hull_width: f64,
    pub inset: f64,
    pub padding: f64,
    pub feature_width: f64,
    pub elevation: f64,
    pub tilt: Tilt,
}

impl WallPlacement {
    /// Outward distance from the hull center to the feature's center plane.
    #[must_use]
    pub fn offset(&self, wall: Wall) -> f64 {
        let perpendicular = match wall.runs_along() {
            Axis::X => self.hull_width,
            _ => self.hull_length,
        };
        (perpendicular - self.inset + self.padding / 2.0) / 2.0 - self.feature_width / 2.0
    }

    /// Transform applied after the series slot: tilt about the element
    /// center, push outward and raise, then turn onto the wall.
    #[must_use]
    pub fn wall_transform(&self, wall: Wall) -> Matrix4 {
        let push = Matrix4::new_translation(&Vector3::new(0.0, self.offset(wall), self.elevation));
        rotation_z_degrees(wall.rotation_degrees()) * push * rotation_x_degrees(self.tilt.degrees())
    }
}

/// A placed copy of a feature element.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedInstance {
    /// Global index across all four walls.
    pub ordinal: usize,
    pub wall: Wall,
    /// Index within the wall's series.
    pub local_index: usize,
    /// Canonical frame to world.
    pub transform: Matrix4,
    /// The placed solid.
    pub solid: SolidId,
}

/// Instances in canonical order: walls `PlusX, PlusY, MinusX, MinusY`,
/// increasing local index within each wall.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceSet {
    instances: Vec<PositionedInstance>,
}

impl InstanceSet {
    #[must_use]
    pub fn instances(&self) -> &[PositionedInstance] {
        &self.instances
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PositionedInstance> {
        self.instances.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    #[must_use]
    pub fn ordinals(&self) -> Vec<usize> {
        self.instances.iter().map(|i| i.ordinal).collect()
    }

    pub fn on_wall(&self, wall: Wall) -> impl Iterator<Item = &PositionedInstance> {
        self.instances.iter().filter(move |i| i.wall == wall)
    }

    /// Collects the placed solids into one multi-body solid, in set order.
    ///
    /// # Errors
    ///
    /// Returns an error if an instance solid is not in the store.
    pub fn to_solid(&self, store: &mut SolidStore) -> Result<SolidId> {
        MakeCompound::new(self.instances.iter().map(|i| i.solid).collect()).execute(store)
    }
}

impl FromIterator<PositionedInstance> for InstanceSet {
    fn from_iter<T: IntoIterator<Item = PositionedInstance>>(iter: T) -> Self {
        Self {
            instances: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a InstanceSet {
    type Item = &'a PositionedInstance;
    type IntoIter = std::slice::Iter<'a, PositionedInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.instances.iter()
    }
}

/// Replicates a canonical series onto all four walls.
///
/// `along_x` is used for the X-running walls and `along_y` for the
/// Y-running walls; both share the same element.
pub struct WallReplicator<'a> {
    along_x: &'a Series,
    along_y: &'a Series,
    placement: WallPlacement,
}

impl<'a> WallReplicator<'a> {
    #[must_use]
    pub fn new(along_x: &'a Series, along_y: &'a Series, placement: WallPlacement) -> Self {
        Self {
            along_x,
            along_y,
            placement,
        }
    }

    /// Places every slot on its walls, assigning contiguous ordinals.
    ///
    /// # Errors
    ///
    /// Returns an error if the series element is not in the store.
    pub fn execute(&self, store: &mut SolidStore) -> Result<InstanceSet> {
        let mut instances = Vec::with_capacity(2 * (self.along_x.len() + self.along_y.len()));
        for wall in Wall::ORDER {
            let series = match wall.runs_along() {
                Axis::X => self.along_x,
                _ => self.along_y,
            };
            let wall_transform = self.placement.wall_transform(wall);
            for slot in &series.slots {
                let transform = wall_transform * slot.transform();
                let solid = GeneralTransform::new(series.element, transform).execute(store)?;
                instances.push(PositionedInstance {
                    ordinal: instances.len(),
                    wall,
                    local_index: slot.index,
                    transform,
                    solid,
                });
            }
        }
        tracing::debug!(
            instances = instances.len(),
            per_x_wall = self.along_x.len(),
            per_y_wall = self.along_y.len(),
            "replicated series onto walls"
        );
        Ok(InstanceSet { instances })
    }
}
