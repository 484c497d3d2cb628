pub mod select;
pub mod series;
pub mod wall;

pub use select::{select, IndexSelection, InstanceSelector};
pub use series::{series_offsets, Series, SeriesLayout, SeriesSlot};
pub use wall::{InstanceSet, PositionedInstance, Tilt, Wall, WallPlacement, WallReplicator};
