use crate::math::Matrix4;
use crate::operations::boolean::BooleanOp;

use super::primitive::Primitive;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the solid store.
    pub struct SolidId;
}

/// Data associated with a solid.
///
/// Solids are immutable once inserted; every operation creates a new entry
/// that refers to its inputs by ID.
#[derive(Debug, Clone)]
pub enum SolidData {
    /// A primitive in its local frame.
    Primitive(Primitive),
    /// A solid placed by an affine transform. `inverse` maps world points
    /// back into the source frame.
    Transformed {
        source: SolidId,
        matrix: Matrix4,
        inverse: Matrix4,
    },
    /// A boolean combination that behaves as a single body.
    Boolean {
        op: BooleanOp,
        a: SolidId,
        b: SolidId,
    },
    /// An ordered collection of bodies that are not fused.
    Compound(Vec<SolidId>),
}
