use serde::{Deserialize, Serialize};

use crate::error::{OperationError, Result};
use crate::operations::boolean::{BooleanOp, Intersect, Subtract, Union};
use crate::operations::creation::MakeCompound;
use crate::topology::{SolidId, SolidStore};

use super::family::{FeatureFamilies, FeatureFamily};

/// One boolean step: combine the running solid with a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyStep {
    pub family: FeatureFamily,
    pub op: BooleanOp,
}

impl AssemblyStep {
    #[must_use]
    pub fn union(family: FeatureFamily) -> Self {
        Self {
            family,
            op: BooleanOp::Union,
        }
    }

    #[must_use]
    pub fn subtract(family: FeatureFamily) -> Self {
        Self {
            family,
            op: BooleanOp::Subtract,
        }
    }
}

/// An ordered list of boolean steps applied left to right.
///
/// Boolean composition is not commutative, so the order is part of the
/// model definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyPipeline {
    steps: Vec<AssemblyStep>,
}

impl AssemblyPipeline {
    #[must_use]
    pub fn new(steps: Vec<AssemblyStep>) -> Self {
        Self { steps }
    }

    /// Hull, cavity, panel cuts, detail panels, door cuts, window cuts, base,
    /// window frames.
    #[must_use]
    pub fn canonical_bunker() -> Self {
        use FeatureFamily::{
            Base, DetailPanel, DoorCut, Hull, InteriorCavity, StructuralPanel, WindowCut,
            WindowFrame,
        };
        Self::new(vec![
            AssemblyStep::union(Hull),
            AssemblyStep::subtract(InteriorCavity),
            AssemblyStep::subtract(StructuralPanel),
            AssemblyStep::union(DetailPanel),
            AssemblyStep::subtract(DoorCut),
            AssemblyStep::subtract(WindowCut),
            AssemblyStep::union(Base),
            AssemblyStep::union(WindowFrame),
        ])
    }

    /// Platform, magnet cuts, corner walls.
    #[must_use]
    pub fn catwalk() -> Self {
        Self::new(vec![
            AssemblyStep::union(FeatureFamily::Platform),
            AssemblyStep::subtract(FeatureFamily::MagnetCut),
            AssemblyStep::union(FeatureFamily::CornerWall),
        ])
    }

    #[must_use]
    pub fn steps(&self) -> &[AssemblyStep] {
        &self.steps
    }

    /// The same pipeline without any step on `family`.
    #[must_use]
    pub fn without(mut self, family: FeatureFamily) -> Self {
        self.steps.retain(|step| step.family != family);
        self
    }

    /// Applies the steps to `families`, starting from an empty solid.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::MissingFamily`] if a step names a family
    /// that was not built, or any kernel error.
    pub fn assemble(&self, store: &mut SolidStore, families: &FeatureFamilies) -> Result<SolidId> {
        let mut current: Option<SolidId> = None;
        for (index, step) in self.steps.iter().enumerate() {
            let operand = families
                .solid(step.family)
                .ok_or_else(|| OperationError::MissingFamily(step.family.to_string()))?;
            tracing::debug!(step = index, family = %step.family, op = ?step.op, "assembly step");
            current = match (current, step.op) {
                // nothing to remove material from yet
                (None, op) if op.is_subtractive() => None,
                (None, _) => Some(operand),
                (Some(acc), BooleanOp::Union) => Some(Union::new(acc, operand).execute(store)?),
                (Some(acc), BooleanOp::Subtract) => {
                    Some(Subtract::new(acc, operand).execute(store)?)
                }
                (Some(acc), BooleanOp::Intersect) => {
                    Some(Intersect::new(acc, operand).execute(store)?)
                }
            };
        }
        match current {
            Some(solid) => Ok(solid),
            None => MakeCompound::new(Vec::new()).execute(store),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::TerrainError;
    use crate::math::Vector3;
    use crate::operations::creation::MakeBox;
    use crate::operations::query::{BoundingBox, Volume, VolumeParams};
    use crate::operations::transform::Translate;

    fn volume(store: &SolidStore, solid: SolidId) -> f64 {
        Volume::new(solid)
            .with_params(VolumeParams { cell_size: 0.25 })
            .execute(store)
            .unwrap()
    }

    #[test]
    fn canonical_order_is_inspectable() {
        let steps = AssemblyPipeline::canonical_bunker();
        let families: Vec<FeatureFamily> = steps.steps().iter().map(|s| s.family).collect();
        assert_eq!(families.first(), Some(&FeatureFamily::Hull));
        assert_eq!(families.last(), Some(&FeatureFamily::WindowFrame));
        assert_eq!(steps.steps()[1].op, BooleanOp::Subtract);
        assert_eq!(steps.steps().len(), 8);
    }

    #[test]
    fn missing_family_is_an_error() {
        let mut store = SolidStore::new();
        let mut families = FeatureFamilies::new();
        families.insert(
            FeatureFamily::Platform,
            MakeBox::new(1.0, 1.0, 1.0).execute(&mut store).unwrap(),
        );
        let err = AssemblyPipeline::catwalk()
            .assemble(&mut store, &families)
            .unwrap_err();
        assert!(matches!(
            err,
            TerrainError::Operation(OperationError::MissingFamily(_))
        ));
    }

    #[test]
    fn steps_apply_left_to_right() {
        let mut store = SolidStore::new();
        let mut families = FeatureFamilies::new();
        let block = MakeBox::new(4.0, 4.0, 4.0).execute(&mut store).unwrap();
        let hole = MakeBox::new(2.0, 2.0, 2.0).execute(&mut store).unwrap();
        let post = MakeBox::new(1.0, 1.0, 6.0).execute(&mut store).unwrap();
        families.insert(FeatureFamily::Hull, block);
        families.insert(FeatureFamily::InteriorCavity, hole);
        families.insert(FeatureFamily::Base, post);

        let cut_then_add = AssemblyPipeline::new(vec![
            AssemblyStep::union(FeatureFamily::Hull),
            AssemblyStep::subtract(FeatureFamily::InteriorCavity),
            AssemblyStep::union(FeatureFamily::Base),
        ])
        .assemble(&mut store, &families)
        .unwrap();
        let add_then_cut = AssemblyPipeline::new(vec![
            AssemblyStep::union(FeatureFamily::Hull),
            AssemblyStep::union(FeatureFamily::Base),
            AssemblyStep::subtract(FeatureFamily::InteriorCavity),
        ])
        .assemble(&mut store, &families)
        .unwrap();

        // the post refills the hole's core only when added last
        let a = volume(&store, cut_then_add);
        let b = volume(&store, add_then_cut);
        assert_relative_eq!(a, 64.0 - 8.0 + 2.0 + 2.0, max_relative = 1e-6);
        assert_relative_eq!(b, 64.0 - 8.0 + 2.0, max_relative = 1e-6);
    }

    #[test]
    fn empty_pipeline_yields_empty_solid() {
        let mut store = SolidStore::new();
        let solid = AssemblyPipeline::new(Vec::new())
            .assemble(&mut store, &FeatureFamilies::new())
            .unwrap();
        assert!(BoundingBox::new(solid).execute(&store).unwrap().is_empty());
    }

    #[test]
    fn subtracting_from_nothing_stays_empty() {
        let mut store = SolidStore::new();
        let mut families = FeatureFamilies::new();
        let a = MakeBox::new(2.0, 2.0, 2.0).execute(&mut store).unwrap();
        let b = Translate::new(a, Vector3::new(1.0, 0.0, 0.0))
            .execute(&mut store)
            .unwrap();
        families.insert(FeatureFamily::MagnetCut, a);
        families.insert(FeatureFamily::CornerWall, b);
        let solid = AssemblyPipeline::new(vec![
            AssemblyStep::subtract(FeatureFamily::MagnetCut),
            AssemblyStep::union(FeatureFamily::CornerWall),
        ])
        .assemble(&mut store, &families)
        .unwrap();
        assert_relative_eq!(volume(&store, solid), 8.0, max_relative = 1e-6);
    }

    #[test]
    fn pipeline_serializes_as_data() {
        let json = serde_json::to_string(&AssemblyPipeline::catwalk()).unwrap();
        assert!(json.contains("\"MagnetCut\""));
        let back: AssemblyPipeline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AssemblyPipeline::catwalk());
        assert_eq!(
            AssemblyPipeline::catwalk()
                .without(FeatureFamily::MagnetCut)
                .steps()
                .len(),
            2
        );
    }
}
