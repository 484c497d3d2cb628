use tracing::trace;

use crate::error::Result;
use crate::topology::{SolidData, SolidId, SolidStore};

use super::select::BooleanOp;

/// Executes a boolean operation on two solids.
///
/// The result is a new CSG node; operands are left untouched. Operands whose
/// bounds do not overlap short-circuit: subtracting a disjoint solid returns
/// the first operand unchanged and intersecting yields an empty compound.
///
/// # Errors
///
/// Returns an error if either operand is not in the store.
pub fn boolean_execute(
    store: &mut SolidStore,
    solid_a: SolidId,
    solid_b: SolidId,
    op: BooleanOp,
) -> Result<SolidId> {
    let aabb_a = store.bounds(solid_a)?;
    let aabb_b = store.bounds(solid_b)?;

    if aabb_a.intersection(&aabb_b).is_empty() {
        return handle_disjoint(store, solid_a, solid_b, op);
    }

    Ok(store.add_solid(SolidData::Boolean {
        op,
        a: solid_a,
        b: solid_b,
    })?)
}

fn handle_disjoint(
    store: &mut SolidStore,
    solid_a: SolidId,
    solid_b: SolidId,
    op: BooleanOp,
) -> Result<SolidId> {
    trace!(?op, "boolean operands are disjoint");
    let id = match op {
        BooleanOp::Union => store.add_solid(SolidData::Boolean {
            op,
            a: solid_a,
            b: solid_b,
        })?,
        BooleanOp::Subtract => solid_a,
        BooleanOp::Intersect => store.add_solid(SolidData::Compound(Vec::new()))?,
    };
    Ok(id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::operations::creation::MakeBox;
    use crate::operations::transform::Translate;

    #[test]
    fn disjoint_subtract_returns_minuend() {
        let mut store = SolidStore::new();
        let a = MakeBox::new(1.0, 1.0, 1.0).execute(&mut store).unwrap();
        let b = Translate::new(a, Vector3::new(10.0, 0.0, 0.0))
            .execute(&mut store)
            .unwrap();
        let result = boolean_execute(&mut store, a, b, BooleanOp::Subtract).unwrap();
        assert_eq!(result, a);
    }

    #[test]
    fn disjoint_intersect_is_empty() {
        let mut store = SolidStore::new();
        let a = MakeBox::new(1.0, 1.0, 1.0).execute(&mut store).unwrap();
        let b = Translate::new(a, Vector3::new(10.0, 0.0, 0.0))
            .execute(&mut store)
            .unwrap();
        let result = boolean_execute(&mut store, a, b, BooleanOp::Intersect).unwrap();
        assert!(store.bounds(result).unwrap().is_empty());
    }
}
