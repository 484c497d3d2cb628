use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::operations::boolean::Subtract;
use crate::operations::creation::MakeBox;
use crate::operations::modification::Chamfer;
use crate::topology::{EdgeSelector, Face, SolidId, SolidStore};

/// Which outward edges of a window frame are chamfered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameChamfer {
    Top,
    Bottom,
    #[default]
    Both,
}

impl FrameChamfer {
    /// Edges of the outward (+Y) face selected by this option.
    #[must_use]
    pub fn selector(self) -> EdgeSelector {
        let top = EdgeSelector::Between(Face::PLUS_Y, Face::PLUS_Z);
        let bottom = EdgeSelector::Between(Face::PLUS_Y, Face::MINUS_Z);
        match self {
            FrameChamfer::Top => top,
            FrameChamfer::Bottom => bottom,
            FrameChamfer::Both => EdgeSelector::AnyOf(vec![top, bottom]),
        }
    }
}

/// Builds a rectangular window frame centered on the origin.
///
/// The frame is a `length` × `height` ring of `frame_width`, `depth` deep
/// along Y. A positive `chamfer` bevels the selected edges of the outward
/// face.
///
/// # Errors
///
/// Returns an error if the opening would be empty or the chamfer does not
/// fit on the frame.
pub fn window_frame(
    store: &mut SolidStore,
    length: f64,
    depth: f64,
    height: f64,
    frame_width: f64,
    chamfer: Option<(FrameChamfer, f64)>,
) -> Result<SolidId> {
    if frame_width <= 0.0 || 2.0 * frame_width >= length.min(height) {
        return Err(GeometryError::InvalidGeometry(format!(
            "frame width {frame_width} does not leave an opening in a {length} x {height} window"
        ))
        .into());
    }
    let outer = MakeBox::new(length, depth, height).execute(store)?;
    let outer = match chamfer {
        Some((select, distance)) if distance > 0.0 => {
            Chamfer::new(outer, select.selector(), distance).execute(store)?
        }
        _ => outer,
    };
    let opening = MakeBox::new(length - 2.0 * frame_width, depth, height - 2.0 * frame_width)
        .execute(store)?;
    Subtract::new(outer, opening).execute(store)
}
