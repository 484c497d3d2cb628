use serde::{Deserialize, Serialize};

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BooleanOp {
    Union,
    Subtract,
    Intersect,
}

impl BooleanOp {
    /// Whether the operation can only remove material from its first operand.
    #[must_use]
    pub fn is_subtractive(self) -> bool {
        matches!(self, Self::Subtract | Self::Intersect)
    }
}
