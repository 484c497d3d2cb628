use crate::error::Result;
use crate::math::{transform_point, Point3};
use crate::topology::{SolidData, SolidId, SolidStore};

use super::select::BooleanOp;

/// Classification of a point relative to a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
}

/// Classifies a point as inside or outside a solid.
///
/// Walks the CSG tree: primitives answer in their local frame, transformed
/// solids map the point back through their inverse matrix, booleans combine
/// the answers of their operands and compounds are inside if any body is.
/// Cached bounds prune whole subtrees. Boundaries count as inside.
///
/// # Errors
///
/// Returns an error if the solid or one of its operands is not in the store.
pub fn classify_point_in_solid(
    point: &Point3,
    solid_id: SolidId,
    store: &SolidStore,
) -> Result<PointClassification> {
    Ok(if contains(point, solid_id, store)? {
        PointClassification::Inside
    } else {
        PointClassification::Outside
    })
}

pub(crate) fn contains(point: &Point3, solid_id: SolidId, store: &SolidStore) -> Result<bool> {
    if !store.bounds(solid_id)?.contains(point) {
        return Ok(false);
    }
    let inside = match store.solid(solid_id)? {
        SolidData::Primitive(primitive) => primitive.contains(point),
        SolidData::Transformed {
            source, inverse, ..
        } => contains(&transform_point(inverse, point), *source, store)?,
        SolidData::Boolean { op, a, b } => {
            let in_a = contains(point, *a, store)?;
            match op {
                BooleanOp::Union => in_a || contains(point, *b, store)?,
                BooleanOp::Subtract => in_a && !contains(point, *b, store)?,
                BooleanOp::Intersect => in_a && contains(point, *b, store)?,
            }
        }
        SolidData::Compound(bodies) => {
            let mut any = false;
            for body in bodies {
                if contains(point, *body, store)? {
                    any = true;
                    break;
                }
            }
            any
        }
    };
    Ok(inside)
}
