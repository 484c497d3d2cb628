use crate::assembly::{AssemblyPipeline, FeatureFamilies, FeatureFamily};
use crate::error::Result;
use crate::math::Vector3;
use crate::operations::boolean::{Subtract, Union};
use crate::operations::creation::{MakeBox, MakeCompound, MakeCylinder};
use crate::operations::modification::Chamfer;
use crate::operations::transform::{Rotate, Translate};
use crate::params::CatwalkParameters;
use crate::topology::{EdgeSelector, Face, SolidId, SolidStore};

/// Radial clearance added to each magnet pocket.
const MAGNET_CLEARANCE: f64 = 0.1;

/// A flat walkway that drops onto a piece below it.
///
/// The platform has a chamfered underside and a rectangular hole whose
/// lower ledge locates it on the piece underneath. Magnet pockets sit in the
/// ledge corners and low L-shaped walls guard the outer corners.
pub struct Catwalk {
    params: CatwalkParameters,
}

impl Catwalk {
    #[must_use]
    pub fn new(params: CatwalkParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &CatwalkParameters {
        &self.params
    }

    /// Platform, magnet cuts and corner walls, skipping disabled families.
    #[must_use]
    pub fn pipeline(&self) -> AssemblyPipeline {
        let mut pipeline = AssemblyPipeline::catwalk();
        if !self.params.render_magnets {
            pipeline = pipeline.without(FeatureFamily::MagnetCut);
        }
        if !self.params.render_corner_walls {
            pipeline = pipeline.without(FeatureFamily::CornerWall);
        }
        pipeline
    }

    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or a kernel operation
    /// fails.
    pub fn build_families(&self, store: &mut SolidStore) -> Result<FeatureFamilies> {
        self.params.validate()?;
        let mut families = FeatureFamilies::new();
        families.insert(FeatureFamily::Platform, self.make_platform(store)?);
        if self.params.render_magnets {
            families.insert(FeatureFamily::MagnetCut, self.make_magnet_cuts(store)?);
        }
        if self.params.render_corner_walls {
            families.insert(FeatureFamily::CornerWall, self.make_corner_walls(store)?);
        }
        tracing::debug!(
            families = families.families().count(),
            "built catwalk families"
        );
        Ok(families)
    }

    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or a kernel operation
    /// fails.
    pub fn generate(&self, store: &mut SolidStore) -> Result<SolidId> {
        let families = self.build_families(store)?;
        self.pipeline().assemble(store, &families)
    }

    fn make_platform(&self, store: &mut SolidStore) -> Result<SolidId> {
        let p = &self.params;
        let hole_length = p.interior_length + p.fit_padding;
        let hole_width = p.interior_width + p.fit_padding;
        let ledge_drop = Vector3::new(0.0, 0.0, -(p.height / 2.0 - p.interior_height / 2.0));

        let slab = MakeBox::new(p.length, p.width, p.height).execute(store)?;
        let slab = if p.platform_chamfer > 0.0 {
            Chamfer::new(slab, EdgeSelector::OfFace(Face::MINUS_Z), p.platform_chamfer)
                .execute(store)?
        } else {
            slab
        };
        let hole = MakeBox::new(hole_length, hole_width, p.height).execute(store)?;
        let ledge = MakeBox::new(hole_length, hole_width, p.interior_height).execute(store)?;
        let ledge = Translate::new(ledge, ledge_drop).execute(store)?;
        let ledge_hole = MakeBox::new(
            p.interior_length - 2.0 * p.interior_overlap,
            p.interior_width - 2.0 * p.interior_overlap,
            p.interior_height,
        )
        .execute(store)?;
        let ledge_hole = Translate::new(ledge_hole, ledge_drop).execute(store)?;

        let platform = Subtract::new(slab, hole).execute(store)?;
        let platform = Union::new(platform, ledge).execute(store)?;
        Subtract::new(platform, ledge_hole).execute(store)
    }

    /// Four pockets, one per interior corner, open to the underside.
    fn make_magnet_cuts(&self, store: &mut SolidStore) -> Result<SolidId> {
        let p = &self.params;
        let magnet =
            MakeCylinder::new(p.magnet_height, p.magnet_radius + MAGNET_CLEARANCE).execute(store)?;
        let x = p.interior_length / 2.0 - p.magnet_radius - p.magnet_padding;
        let y = p.interior_width / 2.0 - p.magnet_radius - p.magnet_padding;
        let z = -(p.height / 2.0 - p.magnet_height / 2.0);

        let mut pockets = Vec::with_capacity(4);
        for (sx, sy) in [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)] {
            pockets.push(Translate::new(magnet, Vector3::new(sx * x, sy * y, z)).execute(store)?);
        }
        MakeCompound::new(pockets).execute(store)
    }

    /// An L of two walls at each platform corner, free ends ramped at the top.
    fn make_corner_walls(&self, store: &mut SolidStore) -> Result<SolidId> {
        let p = &self.params;
        let wall = MakeBox::new(p.wall_length, p.wall_width, p.wall_height).execute(store)?;
        // ramp down from the top of the free end
        let taper = EdgeSelector::Between(Face::PLUS_Z, Face::MINUS_X);
        let wall = Chamfer::new(wall, taper, p.wall_height / 2.0).execute(store)?;
        // corner post at the origin, wall running toward -X
        let along_x = Translate::new(
            wall,
            Vector3::new(-(p.wall_length / 2.0 - p.wall_width / 2.0), 0.0, 0.0),
        )
        .execute(store)?;
        let along_y = Rotate::degrees(along_x, Vector3::z(), -90.0).execute(store)?;
        let corner = MakeCompound::new(vec![along_x, along_y]).execute(store)?;
        let corner = Translate::new(
            corner,
            Vector3::new(
                p.length / 2.0 - p.wall_width / 2.0,
                -(p.width / 2.0 - p.wall_width / 2.0),
                p.wall_height / 2.0 + p.height / 2.0,
            ),
        )
        .execute(store)?;

        let mut corners = Vec::with_capacity(4);
        for degrees in [0.0, -90.0, 180.0, 90.0] {
            corners.push(Rotate::degrees(corner, Vector3::z(), degrees).execute(store)?);
        }
        MakeCompound::new(corners).execute(store)
    }
}
