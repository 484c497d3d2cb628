use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GeometryError, Result};
use crate::layout::IndexSelection;
use crate::metrics::{derive_interior_dims, DetailArches};
use crate::shapes::FrameChamfer;

type Validation = std::result::Result<(), GeometryError>;

fn positive(parameter: &'static str, value: f64) -> Validation {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min: 0.0,
            max: f64::INFINITY,
        })
    }
}

fn non_negative(parameter: &'static str, value: f64) -> Validation {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min: 0.0,
            max: f64::INFINITY,
        })
    }
}

fn invalid(message: String) -> Validation {
    Err(GeometryError::InvalidGeometry(message))
}

/// Parameters of the bunker model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryParameters {
    /// Footprint along X.
    pub length: f64,
    /// Footprint along Y.
    pub width: f64,
    pub height: f64,
    /// Horizontal run of each sloped wall. Negative values overhang.
    pub inset: f64,
    pub wall_width: f64,

    pub panel_length: f64,
    pub panel_width: f64,
    pub panel_padding: f64,

    pub arch_padding_top: f64,
    pub arch_padding_sides: f64,
    pub arch_inner_height: f64,
    pub inner_arch_top: f64,
    pub inner_arch_sides: f64,

    pub base_height: f64,

    /// Extra depth added to window cuts so they pierce the sloped wall.
    pub window_cut_width_padding: f64,
    pub window_length: f64,
    pub window_height: f64,
    pub window_frame_width: f64,
    pub window_frame_chamfer: f64,
    pub window_frame_chamfer_select: FrameChamfer,

    pub door_length: f64,
    pub door_height: f64,
    /// Depth of the door cut; deep enough to pass through any wall.
    pub door_depth: f64,
    pub door_fillet: f64,

    pub panels: IndexSelection,
    pub windows: IndexSelection,
    pub doors: IndexSelection,

    pub render_panels: bool,
    pub render_panel_details: bool,
    pub render_windows: bool,
    pub render_doors: bool,
    pub render_base: bool,
}

impl Default for GeometryParameters {
    fn default() -> Self {
        Self {
            length: 100.0,
            width: 100.0,
            height: 75.0,
            inset: 10.0,
            wall_width: 5.0,
            panel_length: 28.0,
            panel_width: 6.0,
            panel_padding: 4.0,
            arch_padding_top: 3.0,
            arch_padding_sides: 3.0,
            arch_inner_height: 6.0,
            inner_arch_top: 5.0,
            inner_arch_sides: 4.0,
            base_height: 3.0,
            window_cut_width_padding: 2.0,
            window_length: 15.0,
            window_height: 20.0,
            window_frame_width: 2.0,
            window_frame_chamfer: 1.6,
            window_frame_chamfer_select: FrameChamfer::Both,
            door_length: 23.0,
            door_height: 35.0,
            door_depth: 20.0,
            door_fillet: 4.0,
            panels: IndexSelection::all(),
            windows: IndexSelection::skipping([0]),
            doors: IndexSelection::keeping([0]),
            render_panels: true,
            render_panel_details: true,
            render_windows: true,
            render_doors: true,
            render_base: true,
        }
    }
}

impl GeometryParameters {
    /// The 120 × 150 bunker with a wide inset and low slit windows
    /// chamfered along the sill.
    #[must_use]
    pub fn skirmish_bunker() -> Self {
        Self {
            length: 120.0,
            width: 150.0,
            inset: 20.0,
            window_length: 18.0,
            window_height: 8.0,
            window_frame_chamfer: 1.6,
            window_frame_chamfer_select: FrameChamfer::Bottom,
            ..Self::default()
        }
    }

    /// Parses parameters from JSON. Missing keys take their default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json).map_err(ConfigError::from)?)
    }

    /// Depth of the window cuts and frames.
    #[must_use]
    pub fn window_cut_width(&self) -> f64 {
        self.wall_width + self.inset / 2.0 + self.window_cut_width_padding
    }

    /// Height of a structural panel cut.
    #[must_use]
    pub fn panel_height(&self) -> f64 {
        self.height - self.panel_padding
    }

    /// Checks every parameter and derived dimension.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] for a single value
    /// outside its range and [`GeometryError::InvalidGeometry`] when values
    /// are individually fine but do not fit together.
    pub fn validate(&self) -> Validation {
        positive("length", self.length)?;
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("wall_width", self.wall_width)?;
        positive("panel_length", self.panel_length)?;
        positive("panel_width", self.panel_width)?;
        non_negative("panel_padding", self.panel_padding)?;
        positive("base_height", self.base_height)?;
        non_negative("window_cut_width_padding", self.window_cut_width_padding)?;
        positive("window_length", self.window_length)?;
        positive("window_height", self.window_height)?;
        positive("window_frame_width", self.window_frame_width)?;
        non_negative("window_frame_chamfer", self.window_frame_chamfer)?;
        positive("door_length", self.door_length)?;
        positive("door_height", self.door_height)?;
        positive("door_depth", self.door_depth)?;
        non_negative("door_fillet", self.door_fillet)?;
        if !self.inset.is_finite() {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "inset",
                value: self.inset,
                min: f64::NEG_INFINITY,
                max: self.height,
            });
        }

        if self.inset >= self.height {
            invalid(format!(
                "inset {} must be smaller than height {}",
                self.inset, self.height
            ))?;
        }
        if 2.0 * self.wall_width >= self.length.min(self.width) {
            invalid(format!(
                "walls of width {} leave no room in a {} x {} footprint",
                self.wall_width, self.length, self.width
            ))?;
        }
        derive_interior_dims(self)?;

        if self.panel_height() <= 0.0 {
            invalid(format!(
                "panel padding {} leaves no panel in a hull of height {}",
                self.panel_padding, self.height
            ))?;
        }
        if self.window_length > self.panel_length {
            invalid(format!(
                "window length {} is longer than its panel slot {}",
                self.window_length, self.panel_length
            ))?;
        }
        if self.door_length > self.panel_length {
            invalid(format!(
                "door length {} is longer than its panel slot {}",
                self.door_length, self.panel_length
            ))?;
        }
        let window_clearance = self.height - 2.0 * (self.wall_width + self.panel_padding);
        if self.window_height >= window_clearance {
            invalid(format!(
                "window height {} does not fit above the floor (max {window_clearance})",
                self.window_height
            ))?;
        }
        if self.door_height + self.wall_width > self.height {
            invalid(format!(
                "door height {} plus floor {} exceeds hull height {}",
                self.door_height, self.wall_width, self.height
            ))?;
        }
        if 2.0 * self.door_fillet > self.door_length.min(self.door_height) {
            invalid(format!(
                "door fillet {} is larger than the {} x {} door",
                self.door_fillet, self.door_length, self.door_height
            ))?;
        }
        if 2.0 * self.window_frame_width >= self.window_length.min(self.window_height) {
            invalid(format!(
                "window frame width {} leaves no opening in a {} x {} window",
                self.window_frame_width, self.window_length, self.window_height
            ))?;
        }
        if self.window_frame_chamfer > self.window_frame_width {
            invalid(format!(
                "window frame chamfer {} is larger than the frame width {}",
                self.window_frame_chamfer, self.window_frame_width
            ))?;
        }
        DetailArches::from_params(self).validate()
    }
}

/// Parameters of the catwalk platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatwalkParameters {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Chamfer on the bottom edges of the platform.
    pub platform_chamfer: f64,

    /// Footprint of the piece the platform sits on.
    pub interior_length: f64,
    pub interior_width: f64,
    /// Depth of the ledge that locates the platform on the piece below.
    pub interior_height: f64,
    pub interior_overlap: f64,
    /// Clearance added around the interior footprint.
    pub fit_padding: f64,

    pub render_magnets: bool,
    pub magnet_radius: f64,
    pub magnet_height: f64,
    pub magnet_padding: f64,

    pub render_corner_walls: bool,
    pub wall_height: f64,
    pub wall_length: f64,
    pub wall_width: f64,
}

impl Default for CatwalkParameters {
    fn default() -> Self {
        Self {
            length: 187.0,
            width: 187.0,
            height: 4.0,
            platform_chamfer: 3.9,
            interior_length: 130.0,
            interior_width: 130.0,
            interior_height: 2.0,
            interior_overlap: 5.0,
            fit_padding: 0.4,
            render_magnets: true,
            magnet_radius: 1.5,
            magnet_height: 2.0,
            magnet_padding: 1.5,
            render_corner_walls: true,
            wall_height: 25.0,
            wall_length: 55.0,
            wall_width: 3.0,
        }
    }
}

impl CatwalkParameters {
    /// Parses parameters from JSON. Missing keys take their default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json).map_err(ConfigError::from)?)
    }

    /// Checks every parameter and derived dimension.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] describing the first problem found.
    pub fn validate(&self) -> Validation {
        positive("length", self.length)?;
        positive("width", self.width)?;
        positive("height", self.height)?;
        non_negative("platform_chamfer", self.platform_chamfer)?;
        positive("interior_length", self.interior_length)?;
        positive("interior_width", self.interior_width)?;
        positive("interior_height", self.interior_height)?;
        non_negative("interior_overlap", self.interior_overlap)?;
        non_negative("fit_padding", self.fit_padding)?;
        positive("magnet_radius", self.magnet_radius)?;
        positive("magnet_height", self.magnet_height)?;
        non_negative("magnet_padding", self.magnet_padding)?;
        positive("wall_height", self.wall_height)?;
        positive("wall_length", self.wall_length)?;
        positive("wall_width", self.wall_width)?;

        if self.interior_length + self.fit_padding >= self.length
            || self.interior_width + self.fit_padding >= self.width
        {
            invalid(format!(
                "interior {} x {} does not fit inside the {} x {} platform",
                self.interior_length, self.interior_width, self.length, self.width
            ))?;
        }
        if 2.0 * self.interior_overlap >= self.interior_length.min(self.interior_width) {
            invalid(format!(
                "overlap {} closes the {} x {} interior",
                self.interior_overlap, self.interior_length, self.interior_width
            ))?;
        }
        if self.interior_height >= self.height {
            invalid(format!(
                "ledge depth {} must be below platform height {}",
                self.interior_height, self.height
            ))?;
        }
        if self.magnet_height > self.height {
            invalid(format!(
                "magnet height {} exceeds platform height {}",
                self.magnet_height, self.height
            ))?;
        }
        if self.magnet_radius + self.magnet_padding >= self.interior_length.min(self.interior_width) / 2.0
        {
            invalid(format!(
                "magnets of radius {} do not fit in the interior corners",
                self.magnet_radius
            ))?;
        }
        if self.platform_chamfer >= self.height {
            invalid(format!(
                "platform chamfer {} must be below platform height {}",
                self.platform_chamfer, self.height
            ))?;
        }
        if self.wall_width >= self.wall_length {
            invalid(format!(
                "corner wall width {} must be below its length {}",
                self.wall_width, self.wall_length
            ))?;
        }
        if self.wall_height / 2.0 > self.wall_length {
            invalid(format!(
                "corner wall chamfer {} is longer than the wall {}",
                self.wall_height / 2.0,
                self.wall_length
            ))?;
        }
        Ok(())
    }
}
