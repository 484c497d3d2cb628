use crate::error::{GeometryError, Result};
use crate::math::{Matrix4, Vector3};
use crate::operations::query::BoundingBox;
use crate::topology::{SolidId, SolidStore};

/// One copy of a series element, offset along the local X axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSlot {
    pub index: usize,
    pub offset: f64,
}

impl SeriesSlot {
    #[must_use]
    pub fn transform(&self) -> Matrix4 {
        Matrix4::new_translation(&Vector3::new(self.offset, 0.0, 0.0))
    }
}

/// A centered row of copies of one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub element: SolidId,
    pub element_length: f64,
    pub spacing: f64,
    pub slots: Vec<SeriesSlot>,
}

impl Series {
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Lays out `count` copies of an element along local X, centered on the
/// origin, with `spacing` between neighbouring copies.
pub struct SeriesLayout {
    element: SolidId,
    count: usize,
    spacing: f64,
}

impl SeriesLayout {
    #[must_use]
    pub fn new(element: SolidId, count: usize, spacing: f64) -> Self {
        Self {
            element,
            count,
            spacing,
        }
    }

    /// Computes the slots. The element length is the X extent of the
    /// element's bounding box.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not in the store or the spacing
    /// is not finite.
    pub fn execute(&self, store: &SolidStore) -> Result<Series> {
        if !self.spacing.is_finite() {
            return Err(GeometryError::InvalidGeometry(format!(
                "series spacing must be finite, got {}",
                self.spacing
            ))
            .into());
        }
        let element_length = BoundingBox::new(self.element).execute(store)?.size().x;
        let slots = series_offsets(element_length, self.count, self.spacing)
            .into_iter()
            .enumerate()
            .map(|(index, offset)| SeriesSlot { index, offset })
            .collect();
        Ok(Series {
            element: self.element,
            element_length,
            spacing: self.spacing,
            slots,
        })
    }
}

/// Offsets of a centered series: copy `i` sits at
/// `i * pitch - (count - 1) * pitch / 2` with `pitch = length + spacing`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn series_offsets(element_length: f64, count: usize, spacing: f64) -> Vec<f64> {
    let pitch = element_length + spacing;
    let half_span = count.saturating_sub(1) as f64 * pitch / 2.0;
    (0..count).map(|i| i as f64 * pitch - half_span).collect()
}
