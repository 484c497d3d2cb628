use crate::assembly::{AssemblyPipeline, FeatureFamilies, FeatureFamily};
use crate::error::Result;
use crate::layout::{
    IndexSelection, InstanceSelector, InstanceSet, SeriesLayout, Tilt, WallPlacement,
    WallReplicator,
};
use crate::math::Vector3;
use crate::metrics::{DerivedMetrics, DetailArches, WallAngleFn, RELIEF_STEP};
use crate::operations::boolean::{Intersect, Subtract};
use crate::operations::creation::{MakeBox, MakeCompound, MakeWedge};
use crate::operations::modification::Fillet;
use crate::operations::transform::{Rotate, Translate};
use crate::params::GeometryParameters;
use crate::shapes::{arch_pointed, roof_angle, window_frame};
use crate::topology::{Axis, EdgeSelector, SolidId, SolidStore};

/// The sloped-wall bunker.
///
/// A wedge hull with a hollow interior, recessed wall panels carrying arch
/// reliefs, framed windows, doors and a base plate. Each feature family is
/// laid out along the walls and composed by the canonical pipeline.
pub struct Bunker {
    params: GeometryParameters,
    wall_angle: WallAngleFn,
}

impl Bunker {
    #[must_use]
    pub fn new(params: GeometryParameters) -> Self {
        Self {
            params,
            wall_angle: roof_angle,
        }
    }

    /// Replaces the wall angle function (defaults to [`roof_angle`]).
    #[must_use]
    pub fn with_wall_angle(mut self, wall_angle: WallAngleFn) -> Self {
        self.wall_angle = wall_angle;
        self
    }

    #[must_use]
    pub fn params(&self) -> &GeometryParameters {
        &self.params
    }

    /// Validates the parameters and derives interior size and wall angle.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`](crate::error::GeometryError) if the parameters are invalid.
    pub fn metrics(&self) -> Result<DerivedMetrics> {
        Ok(DerivedMetrics::derive(&self.params, self.wall_angle)?)
    }

    /// The canonical pipeline without the families switched off.
    #[must_use]
    pub fn pipeline(&self) -> AssemblyPipeline {
        let p = &self.params;
        let mut pipeline = AssemblyPipeline::canonical_bunker();
        for (enabled, family) in [
            (p.render_panels, FeatureFamily::StructuralPanel),
            (p.render_panels && p.render_panel_details, FeatureFamily::DetailPanel),
            (p.render_windows, FeatureFamily::WindowCut),
            (p.render_windows, FeatureFamily::WindowFrame),
            (p.render_doors, FeatureFamily::DoorCut),
            (p.render_base, FeatureFamily::Base),
        ] {
            if !enabled {
                pipeline = pipeline.without(family);
            }
        }
        pipeline
    }

    /// Builds every family the pipeline uses.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or a kernel operation
    /// fails.
    pub fn build_families(&self, store: &mut SolidStore) -> Result<FeatureFamilies> {
        let metrics = self.metrics()?;
        let p = &self.params;
        let mut families = FeatureFamilies::new();

        families.insert(FeatureFamily::Hull, self.make_hull(store)?);
        families.insert(
            FeatureFamily::InteriorCavity,
            self.make_interior_cavity(store, &metrics)?,
        );
        if p.render_panels {
            let cuts = self.make_cut_panels(store, &metrics)?;
            families.insert_instances(store, FeatureFamily::StructuralPanel, cuts)?;
            if p.render_panel_details {
                let details = self.make_detail_panels(store, &metrics)?;
                families.insert_instances(store, FeatureFamily::DetailPanel, details)?;
            }
        }
        if p.render_windows {
            let cuts = self.make_cut_windows(store, &metrics)?;
            families.insert_instances(store, FeatureFamily::WindowCut, cuts)?;
            let frames = self.make_window_frames(store, &metrics)?;
            families.insert_instances(store, FeatureFamily::WindowFrame, frames)?;
        }
        if p.render_doors {
            let doors = self.make_cut_doors(store, &metrics)?;
            families.insert_instances(store, FeatureFamily::DoorCut, doors)?;
        }
        if p.render_base {
            families.insert(FeatureFamily::Base, self.make_base(store)?);
        }

        for family in families.families() {
            if let Some(set) = families.instances(family) {
                tracing::debug!(%family, instances = set.len(), "built feature family");
            }
        }
        Ok(families)
    }

    /// Validates, builds and assembles the bunker.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or a kernel operation
    /// fails.
    pub fn generate(&self, store: &mut SolidStore) -> Result<SolidId> {
        let families = self.build_families(store)?;
        self.pipeline().assemble(store, &families)
    }

    fn make_hull(&self, store: &mut SolidStore) -> Result<SolidId> {
        let p = &self.params;
        let wedge = MakeWedge::new(
            p.length,
            p.height,
            p.width,
            p.inset,
            p.inset,
            p.length - p.inset,
            p.width - p.inset,
        )
        .execute(store)?;
        // wedge rises along local Y; stand it up so the top face is +Z
        Rotate::degrees(wedge, Vector3::x(), 90.0).execute(store)
    }

    fn make_interior_cavity(
        &self,
        store: &mut SolidStore,
        metrics: &DerivedMetrics,
    ) -> Result<SolidId> {
        let p = &self.params;
        let cavity = MakeBox::new(
            metrics.interior_length,
            metrics.interior_width,
            p.height - p.wall_width,
        )
        .execute(store)?;
        Translate::new(cavity, Vector3::new(0.0, 0.0, p.wall_width / 2.0)).execute(store)
    }

    fn make_base(&self, store: &mut SolidStore) -> Result<SolidId> {
        let p = &self.params;
        let base = MakeBox::new(p.length, p.width, p.base_height).execute(store)?;
        Translate::new(
            base,
            Vector3::new(0.0, 0.0, -(p.height / 2.0 + p.base_height / 2.0)),
        )
        .execute(store)
    }

    fn make_cut_panels(
        &self,
        store: &mut SolidStore,
        metrics: &DerivedMetrics,
    ) -> Result<InstanceSet> {
        let p = &self.params;
        let element = MakeBox::new(p.panel_length, p.panel_width, p.panel_height()).execute(store)?;
        self.along_walls(
            store,
            metrics,
            element,
            2.0 * p.panel_padding,
            self.panel_placement(metrics),
            &p.panels,
        )
    }

    fn make_detail_panels(
        &self,
        store: &mut SolidStore,
        metrics: &DerivedMetrics,
    ) -> Result<InstanceSet> {
        let p = &self.params;
        let element = self.arch_detail(store)?;
        self.along_walls(
            store,
            metrics,
            element,
            2.0 * p.panel_padding,
            self.panel_placement(metrics),
            &p.panels,
        )
    }

    /// One detail panel in the canonical frame, relief toward +Y.
    fn arch_detail(&self, store: &mut SolidStore) -> Result<SolidId> {
        let p = &self.params;
        let arches = DetailArches::from_params(p);
        let quarter = p.panel_width / 4.0;

        let outline = MakeBox::new(p.panel_length, p.panel_width, p.panel_height()).execute(store)?;
        let back = MakeBox::new(p.panel_length, p.panel_width / 2.0, p.panel_height())
            .execute(store)?;
        let back = Translate::new(back, Vector3::new(0.0, -quarter, 0.0)).execute(store)?;
        let arch = arch_pointed(store, &arches.outer)?;
        let arch = Translate::new(arch, Vector3::new(0.0, quarter, 0.0)).execute(store)?;
        let opening = arch_pointed(store, &arches.inner)?;
        let recess = arch_pointed(store, &arches.recess)?;
        let recess = Translate::new(recess, Vector3::new(0.0, -quarter, -RELIEF_STEP / 2.0))
            .execute(store)?;

        let relief = MakeCompound::new(vec![back, arch]).execute(store)?;
        let relief = Intersect::new(outline, relief).execute(store)?;
        let relief = Subtract::new(relief, opening).execute(store)?;
        let backing = Subtract::new(back, recess).execute(store)?;
        MakeCompound::new(vec![relief, backing]).execute(store)
    }

    fn make_cut_windows(
        &self,
        store: &mut SolidStore,
        metrics: &DerivedMetrics,
    ) -> Result<InstanceSet> {
        let p = &self.params;
        let element = MakeBox::new(p.window_length, p.window_cut_width(), p.window_height)
            .execute(store)?;
        self.along_walls(
            store,
            metrics,
            element,
            self.slot_spacing(p.window_length),
            self.opening_placement(-p.panel_padding),
            &p.windows,
        )
    }

    fn make_window_frames(
        &self,
        store: &mut SolidStore,
        metrics: &DerivedMetrics,
    ) -> Result<InstanceSet> {
        let p = &self.params;
        let element = window_frame(
            store,
            p.window_length,
            p.window_cut_width(),
            p.window_height,
            p.window_frame_width,
            Some((p.window_frame_chamfer_select, p.window_frame_chamfer)),
        )?;
        self.along_walls(
            store,
            metrics,
            element,
            self.slot_spacing(p.window_length),
            self.opening_placement(-p.panel_padding),
            &p.windows,
        )
    }

    fn make_cut_doors(
        &self,
        store: &mut SolidStore,
        metrics: &DerivedMetrics,
    ) -> Result<InstanceSet> {
        let p = &self.params;
        let door = MakeBox::new(p.door_length, p.door_depth, p.door_height).execute(store)?;
        let door = if p.door_fillet > 0.0 {
            Fillet::new(door, EdgeSelector::ParallelTo(Axis::Y), p.door_fillet).execute(store)?
        } else {
            door
        };
        // stand the door on the cavity floor
        let drop = -(p.height / 2.0 - p.door_height / 2.0) + p.wall_width;
        let element = Translate::new(door, Vector3::new(0.0, 0.0, drop)).execute(store)?;
        self.along_walls(
            store,
            metrics,
            element,
            self.slot_spacing(p.door_length),
            self.opening_placement(0.0),
            &p.doors,
        )
    }

    /// Spacing that keeps a feature of `length` centered in its panel slot.
    fn slot_spacing(&self, length: f64) -> f64 {
        self.params.panel_length - length + 2.0 * self.params.panel_padding
    }

    fn panel_placement(&self, metrics: &DerivedMetrics) -> WallPlacement {
        let p = &self.params;
        WallPlacement {
            hull_length: p.length,
            hull_width: p.width,
            inset: p.inset,
            padding: p.panel_padding,
            feature_width: p.panel_width,
            elevation: -p.panel_padding,
            tilt: Tilt::FollowWall {
                wall_angle: metrics.wall_angle,
            },
        }
    }

    fn opening_placement(&self, elevation: f64) -> WallPlacement {
        let p = &self.params;
        WallPlacement {
            hull_length: p.length,
            hull_width: p.width,
            inset: p.inset,
            padding: p.panel_padding,
            feature_width: p.window_cut_width(),
            elevation,
            tilt: Tilt::Vertical,
        }
    }

    /// Lays `element` out on all four walls, one per panel slot, and applies
    /// `selection`.
    fn along_walls(
        &self,
        store: &mut SolidStore,
        metrics: &DerivedMetrics,
        element: SolidId,
        spacing: f64,
        placement: WallPlacement,
        selection: &IndexSelection,
    ) -> Result<InstanceSet> {
        let counts = metrics.counts(self.params.panel_length, self.params.panel_padding);
        let along_x = SeriesLayout::new(element, counts.along_x, spacing).execute(store)?;
        let along_y = SeriesLayout::new(element, counts.along_y, spacing).execute(store)?;
        let all = WallReplicator::new(&along_x, &along_y, placement).execute(store)?;
        Ok(InstanceSelector::new(selection).apply(&all))
    }
}
