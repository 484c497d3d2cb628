use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::InstanceSet;
use crate::topology::{SolidId, SolidStore};

/// A group of solids that enters assembly as one operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FeatureFamily {
    Hull,
    InteriorCavity,
    StructuralPanel,
    DetailPanel,
    WindowCut,
    WindowFrame,
    DoorCut,
    Base,
    Platform,
    MagnetCut,
    CornerWall,
}

impl fmt::Display for FeatureFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hull => "hull",
            Self::InteriorCavity => "interior cavity",
            Self::StructuralPanel => "structural panel cuts",
            Self::DetailPanel => "detail panels",
            Self::WindowCut => "window cuts",
            Self::WindowFrame => "window frames",
            Self::DoorCut => "door cuts",
            Self::Base => "base",
            Self::Platform => "platform",
            Self::MagnetCut => "magnet cuts",
            Self::CornerWall => "corner walls",
        };
        f.write_str(name)
    }
}

/// The solids produced for one generation pass, keyed by family.
///
/// Replicated families also keep their selected [`InstanceSet`] so callers
/// can inspect ordinals and placements.
#[derive(Debug, Clone, Default)]
pub struct FeatureFamilies {
    solids: BTreeMap<FeatureFamily, SolidId>,
    instances: BTreeMap<FeatureFamily, InstanceSet>,
}

impl FeatureFamilies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a single-solid family, replacing any earlier entry.
    pub fn insert(&mut self, family: FeatureFamily, solid: SolidId) {
        self.solids.insert(family, solid);
    }

    /// Registers a replicated family; its operand is the multi-body solid of
    /// all instances in set order.
    ///
    /// # Errors
    ///
    /// Returns an error if an instance solid is not in the store.
    pub fn insert_instances(
        &mut self,
        store: &mut SolidStore,
        family: FeatureFamily,
        instances: InstanceSet,
    ) -> Result<SolidId> {
        let solid = instances.to_solid(store)?;
        self.solids.insert(family, solid);
        self.instances.insert(family, instances);
        Ok(solid)
    }

    #[must_use]
    pub fn solid(&self, family: FeatureFamily) -> Option<SolidId> {
        self.solids.get(&family).copied()
    }

    #[must_use]
    pub fn instances(&self, family: FeatureFamily) -> Option<&InstanceSet> {
        self.instances.get(&family)
    }

    #[must_use]
    pub fn contains(&self, family: FeatureFamily) -> bool {
        self.solids.contains_key(&family)
    }

    /// Families present, in their declaration order.
    pub fn families(&self) -> impl Iterator<Item = FeatureFamily> + '_ {
        self.solids.keys().copied()
    }
}
