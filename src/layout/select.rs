use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::wall::InstanceSet;

/// Ordinal filter for a replicated feature family.
///
/// `skip` drops the listed ordinals, `keep` retains only the listed ones.
/// When both are non-empty `skip` wins and `keep` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexSelection {
    pub skip: BTreeSet<usize>,
    pub keep: BTreeSet<usize>,
}

impl IndexSelection {
    /// Selection that retains every instance.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn skipping(ordinals: impl IntoIterator<Item = usize>) -> Self {
        Self {
            skip: ordinals.into_iter().collect(),
            keep: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn keeping(ordinals: impl IntoIterator<Item = usize>) -> Self {
        Self {
            skip: BTreeSet::new(),
            keep: ordinals.into_iter().collect(),
        }
    }

    /// Whether the instance with this ordinal survives the selection.
    #[must_use]
    pub fn retains(&self, ordinal: usize) -> bool {
        if !self.skip.is_empty() {
            !self.skip.contains(&ordinal)
        } else if !self.keep.is_empty() {
            self.keep.contains(&ordinal)
        } else {
            true
        }
    }
}

/// Filters an [`InstanceSet`] by an [`IndexSelection`].
pub struct InstanceSelector<'a> {
    selection: &'a IndexSelection,
}

impl<'a> InstanceSelector<'a> {
    #[must_use]
    pub fn new(selection: &'a IndexSelection) -> Self {
        Self { selection }
    }

    /// Returns the retained instances in their original order.
    ///
    /// Ordinals that do not occur in the set are ignored. Retained instances
    /// keep their ordinal, transform and solid.
    #[must_use]
    pub fn apply(&self, set: &InstanceSet) -> InstanceSet {
        let retained: InstanceSet = set
            .iter()
            .filter(|instance| self.selection.retains(instance.ordinal))
            .cloned()
            .collect();
        tracing::debug!(
            before = set.len(),
            after = retained.len(),
            "applied index selection"
        );
        retained
    }
}

/// Filters `set` by explicit `skip` and `keep` ordinal sets.
#[must_use]
pub fn select(set: &InstanceSet, skip: &BTreeSet<usize>, keep: &BTreeSet<usize>) -> InstanceSet {
    let selection = IndexSelection {
        skip: skip.clone(),
        keep: keep.clone(),
    };
    InstanceSelector::new(&selection).apply(set)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::layout::wall::{PositionedInstance, Wall};
    use crate::math::{Matrix4, Vector3};
    use crate::operations::creation::MakeCompound;
    use crate::topology::SolidStore;

    #[allow(clippy::cast_precision_loss)]
    fn synthetic_set(n: usize) -> InstanceSet {
        let mut store = SolidStore::new();
        let solid = MakeCompound::new(Vec::new()).execute(&mut store).unwrap();
        (0..n)
            .map(|ordinal| PositionedInstance {
                ordinal,
                wall: Wall::ORDER[ordinal % 4],
                local_index: ordinal / 4,
                transform: Matrix4::new_translation(&Vector3::new(ordinal as f64, 0.0, 0.0)),
                solid,
            })
            .collect()
    }

    #[test]
    fn empty_selection_is_identity() {
        let set = synthetic_set(6);
        let out = InstanceSelector::new(&IndexSelection::all()).apply(&set);
        assert_eq!(out, set);
    }

    #[test]
    fn skip_drops_listed_ordinals() {
        let set = synthetic_set(6);
        let out = InstanceSelector::new(&IndexSelection::skipping([0, 3])).apply(&set);
        assert_eq!(out.ordinals(), vec![1, 2, 4, 5]);
    }

    #[test]
    fn keep_retains_only_listed_ordinals() {
        let set = synthetic_set(6);
        let out = InstanceSelector::new(&IndexSelection::keeping([5, 1])).apply(&set);
        assert_eq!(out.ordinals(), vec![1, 5]);
    }

    #[test]
    fn skip_wins_over_keep() {
        let set = synthetic_set(4);
        let out = select(&set, &BTreeSet::from([1]), &BTreeSet::from([0]));
        assert_eq!(out.ordinals(), vec![0, 2, 3]);
    }

    #[test]
    fn out_of_range_skip_is_noop() {
        let set = synthetic_set(4);
        let out = InstanceSelector::new(&IndexSelection::skipping([999])).apply(&set);
        assert_eq!(out, set);
    }

    #[test]
    fn retained_transforms_are_untouched() {
        let set = synthetic_set(5);
        let out = InstanceSelector::new(&IndexSelection::skipping([2])).apply(&set);
        for instance in out.iter() {
            let original = &set.instances()[instance.ordinal];
            assert_eq!(instance.transform, original.transform);
        }
    }

    proptest! {
        #[test]
        fn skip_and_keep_partition_the_set(
            n in 0usize..40,
            picked in proptest::collection::btree_set(0usize..60, 1..10),
        ) {
            let set = synthetic_set(n);
            let skipped = InstanceSelector::new(&IndexSelection::skipping(picked.clone())).apply(&set);
            let kept = InstanceSelector::new(&IndexSelection::keeping(picked.clone())).apply(&set);

            prop_assert_eq!(skipped.len() + kept.len(), set.len());
            for ordinal in kept.ordinals() {
                prop_assert!(picked.contains(&ordinal));
                prop_assert!(!skipped.ordinals().contains(&ordinal));
            }
        }
    }
}
