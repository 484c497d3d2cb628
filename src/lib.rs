pub mod assembly;
pub mod error;
pub mod layout;
pub mod math;
pub mod metrics;
pub mod models;
pub mod operations;
pub mod params;
pub mod shapes;
pub mod topology;

pub use assembly::{AssemblyPipeline, AssemblyStep, FeatureFamilies, FeatureFamily};
pub use error::{Result, TerrainError};
pub use layout::{IndexSelection, InstanceSet, PositionedInstance, Wall};
pub use metrics::{DerivedMetrics, WallAngleFn};
pub use models::{generate, generate_catwalk, Bunker, Catwalk, GeneratedModel};
pub use params::{CatwalkParameters, GeometryParameters};
