use crate::error::{OperationError, Result, TopologyError};
use crate::math::TOLERANCE;
use crate::topology::{
    EdgeFinish, EdgeSelector, EdgeTreatment, Primitive, SolidData, SolidId, SolidStore,
};

/// Applies a finish to the selected edges of a box primitive.
///
/// A placed box (a box behind a single transform) is finished in its own
/// frame and re-placed with the same transform. A later finish on the same
/// edge replaces the earlier one.
pub(super) fn apply_edge_finish(
    store: &mut SolidStore,
    solid: SolidId,
    selector: &EdgeSelector,
    finish: EdgeFinish,
) -> Result<SolidId> {
    let size = match finish {
        EdgeFinish::Chamfer(d) | EdgeFinish::Fillet(d) => d,
    };
    if size < TOLERANCE {
        return Err(OperationError::InvalidInput(format!(
            "edge finish size must be positive, got {size}"
        ))
        .into());
    }

    match store.solid(solid)?.clone() {
        SolidData::Primitive(Primitive::Cuboid {
            half_extents,
            mut edges,
        }) => {
            let selected = selector.resolve();
            if selected.is_empty() {
                return Err(
                    OperationError::InvalidInput("edge selector matched no edges".into()).into(),
                );
            }
            for edge in selected {
                let limit = 2.0 * half_extents[edge.a.axis.index()].min(half_extents[edge.b.axis.index()]);
                if size > limit {
                    return Err(OperationError::InvalidInput(format!(
                        "edge finish {size} exceeds face extent {limit}"
                    ))
                    .into());
                }
                edges.retain(|t| t.edge != edge);
                edges.push(EdgeTreatment { edge, finish });
            }
            Ok(store.add_solid(SolidData::Primitive(Primitive::Cuboid {
                half_extents,
                edges,
            }))?)
        }
        SolidData::Transformed {
            source,
            matrix,
            inverse,
        } => {
            let finished = apply_edge_finish(store, source, selector, finish)?;
            Ok(store.add_solid(SolidData::Transformed {
                source: finished,
                matrix,
                inverse,
            })?)
        }
        _ => Err(TopologyError::NotAPrimitive { expected: "box" }.into()),
    }
}
