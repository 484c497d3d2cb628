pub mod family;
pub mod pipeline;

pub use family::{FeatureFamilies, FeatureFamily};
pub use pipeline::{AssemblyPipeline, AssemblyStep};
