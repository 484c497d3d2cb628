mod bounding_box;
mod solids;
mod volume;

pub use bounding_box::{Aabb, BoundingBox};
pub use solids::Solids;
pub use volume::{Volume, VolumeParams};
