use thiserror::Error;

/// Top-level error type for terrain generation.
#[derive(Debug, Error)]
pub enum TerrainError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while validating design parameters or deriving metrics.
///
/// These are always raised before any solid is constructed.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the solid store.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("solid is not a {expected} primitive")]
    NotAPrimitive { expected: &'static str },
}

/// Errors related to kernel operations and assembly.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("pipeline step references feature family {0} which was not built")]
    MissingFamily(String),
}

/// Errors raised while loading parameter presets.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse parameters: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`TerrainError`].
pub type Result<T> = std::result::Result<T, TerrainError>;
