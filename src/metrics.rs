use crate::error::GeometryError;
use crate::params::GeometryParameters;
use crate::shapes::ArchSpec;

/// Wall slope in degrees from `(inset, height)`.
pub type WallAngleFn = fn(f64, f64) -> f64;

/// Interior cavity footprint `(length, width)`.
///
/// The cavity leaves `inset + wall_width` on every side. An overhanging hull
/// (negative inset) is at least as wide at the bottom as at the top, so only
/// the wall width is subtracted.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] if either dimension is not
/// positive.
pub fn derive_interior_dims(params: &GeometryParameters) -> Result<(f64, f64), GeometryError> {
    let margin = 2.0 * (params.inset.max(0.0) + params.wall_width);
    let interior = (params.length - margin, params.width - margin);
    if interior.0 <= 0.0 || interior.1 <= 0.0 {
        return Err(GeometryError::InvalidGeometry(format!(
            "interior {} x {} is empty; inset {} and wall width {} consume a {} x {} footprint",
            interior.0, interior.1, params.inset, params.wall_width, params.length, params.width
        )));
    }
    Ok(interior)
}

/// Depth and height lost by each nested relief of a detail panel.
pub const RELIEF_STEP: f64 = 3.0;

/// The three pointed arches carved into a detail panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailArches {
    /// Raised arch on the outward half of the panel.
    pub outer: ArchSpec,
    /// Opening cut through the whole panel.
    pub inner: ArchSpec,
    /// Recess in the backing plate seen through the opening.
    pub recess: ArchSpec,
}

impl DetailArches {
    #[must_use]
    pub fn from_params(params: &GeometryParameters) -> Self {
        let panel_height = params.panel_height();
        let outer_length = params.panel_length + params.arch_padding_sides;
        let outer_height = panel_height + params.arch_padding_top;
        let spring = panel_height / 2.0 + params.arch_inner_height;
        let inner = ArchSpec {
            length: outer_length - params.inner_arch_sides,
            width: params.panel_width,
            height: outer_height - params.inner_arch_top,
            inner_height: spring - params.inner_arch_sides,
        };
        Self {
            outer: ArchSpec {
                length: outer_length,
                width: params.panel_width / 2.0,
                height: outer_height,
                inner_height: spring,
            },
            inner,
            recess: ArchSpec {
                length: inner.length - RELIEF_STEP,
                width: params.panel_width / 2.0,
                height: inner.height - RELIEF_STEP,
                inner_height: inner.inner_height,
            },
        }
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidGeometry`] if any arch is degenerate.
    pub fn validate(&self) -> std::result::Result<(), GeometryError> {
        self.outer.validate("detail arch")?;
        self.inner.validate("detail arch opening")?;
        self.recess.validate("detail arch recess")
    }
}

/// Tilt angle of the sloped walls in degrees.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] if `inset >= height` or the
/// angle function yields a non-finite value.
pub fn derive_wall_angle(
    inset: f64,
    height: f64,
    angle_fn: WallAngleFn,
) -> Result<f64, GeometryError> {
    if inset >= height {
        return Err(GeometryError::InvalidGeometry(format!(
            "inset {inset} must be smaller than height {height}"
        )));
    }
    let angle = angle_fn(inset, height);
    if !angle.is_finite() {
        return Err(GeometryError::InvalidGeometry(format!(
            "wall angle for inset {inset} and height {height} is not finite"
        )));
    }
    Ok(angle)
}

/// Number of whole features of `feature_length` plus `feature_padding` that
/// fit in `usable_length`. Partial features are never emitted.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn instance_count(usable_length: f64, feature_length: f64, feature_padding: f64) -> usize {
    let pitch = feature_length + feature_padding;
    if usable_length <= 0.0 || pitch <= 0.0 || !pitch.is_finite() {
        return 0;
    }
    (usable_length / pitch).floor() as usize
}

/// Per-wall instance counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallCounts {
    /// On each wall running along X.
    pub along_x: usize,
    /// On each wall running along Y.
    pub along_y: usize,
}

impl WallCounts {
    /// Instances over all four walls.
    #[must_use]
    pub fn total(&self) -> usize {
        2 * (self.along_x + self.along_y)
    }
}

/// Everything the bunker families need besides the raw parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub interior_length: f64,
    pub interior_width: f64,
    pub wall_angle: f64,
}

impl DerivedMetrics {
    /// Validates `params` and derives the metrics.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the parameters are invalid.
    pub fn derive(
        params: &GeometryParameters,
        angle_fn: WallAngleFn,
    ) -> Result<Self, GeometryError> {
        params.validate()?;
        let (interior_length, interior_width) = derive_interior_dims(params)?;
        let wall_angle = derive_wall_angle(params.inset, params.height, angle_fn)?;
        Ok(Self {
            interior_length,
            interior_width,
            wall_angle,
        })
    }

    /// Instance counts for features of `feature_length` separated by
    /// `feature_padding`.
    #[must_use]
    pub fn counts(&self, feature_length: f64, feature_padding: f64) -> WallCounts {
        WallCounts {
            along_x: instance_count(self.interior_length, feature_length, feature_padding),
            along_y: instance_count(self.interior_width, feature_length, feature_padding),
        }
    }
}
