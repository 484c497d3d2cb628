#![allow(clippy::unwrap_used)]

mod common;

use approx::assert_relative_eq;
use nalgebra::Vector4;
use skirmish_terrain::assembly::{AssemblyPipeline, AssemblyStep};
use skirmish_terrain::error::GeometryError;
use skirmish_terrain::layout::{IndexSelection, InstanceSelector, Wall};
use skirmish_terrain::math::{Point3, Vector3};
use skirmish_terrain::operations::boolean::{classify_point_in_solid, PointClassification};
use skirmish_terrain::operations::query::{Volume, VolumeParams};
use skirmish_terrain::topology::SolidStore;
use skirmish_terrain::{generate, Bunker, FeatureFamily, GeometryParameters, TerrainError};

const COARSE: VolumeParams = VolumeParams { cell_size: 2.0 };

fn reference() -> GeometryParameters {
    GeometryParameters::skirmish_bunker()
}

#[test]
fn reference_bunker_layout() {
    common::init_tracing();
    let bunker = Bunker::new(reference());
    let metrics = bunker.metrics().unwrap();
    assert_relative_eq!(metrics.interior_length, 70.0);
    assert_relative_eq!(metrics.interior_width, 100.0);
    let counts = metrics.counts(28.0, 4.0);
    assert_eq!((counts.along_x, counts.along_y), (2, 3));

    let mut store = SolidStore::new();
    let families = bunker.build_families(&mut store).unwrap();
    let panels = families.instances(FeatureFamily::StructuralPanel).unwrap();
    assert_eq!(panels.len(), 10);
    assert_eq!(panels.ordinals(), (0..10).collect::<Vec<_>>());

    let skipped = InstanceSelector::new(&IndexSelection::skipping([0])).apply(panels);
    assert_eq!(skipped.len(), 9);
    assert_eq!(skipped.ordinals(), (1..10).collect::<Vec<_>>());
    for instance in &skipped {
        assert_eq!(instance.transform, panels.instances()[instance.ordinal].transform);
    }
}

#[test]
fn reference_bunker_generates() {
    common::init_tracing();
    let model = generate(&reference()).unwrap();
    let bounds = model.bounding_box().unwrap();
    assert_relative_eq!(bounds.min.z, -40.5, epsilon = 1e-9);
    assert_relative_eq!(bounds.max.z, 37.5, epsilon = 1e-6);
    assert!(bounds.size().x >= 120.0 - 1e-9);
    assert!(bounds.size().y >= 150.0 - 1e-9);

    let store = model.store();
    let at = |x, y, z| {
        classify_point_in_solid(&Point3::new(x, y, z), model.solid(), store).unwrap()
    };
    // hollow interior, solid floor and base
    assert_eq!(at(0.0, 0.0, 0.0), PointClassification::Outside);
    assert_eq!(at(0.0, 0.0, -36.0), PointClassification::Inside);
    assert_eq!(at(0.0, 0.0, -39.0), PointClassification::Inside);
    // the door on the first +X slot is cut through the wall
    assert_eq!(at(-18.0, 55.0, -25.0), PointClassification::Outside);
}

#[test]
fn feature_faces_point_outward_on_every_wall() {
    let bunker = Bunker::new(reference());
    let mut store = SolidStore::new();
    let families = bunker.build_families(&mut store).unwrap();
    for family in [FeatureFamily::WindowFrame, FeatureFamily::DetailPanel] {
        let set = families.instances(family).unwrap();
        for wall in Wall::ORDER {
            assert!(set.on_wall(wall).count() > 0, "{family} has no instance on {wall}");
        }
        for instance in set {
            let facing = instance.transform * Vector4::new(0.0, 1.0, 0.0, 0.0);
            let horizontal = Vector3::new(facing.x, facing.y, 0.0).normalize();
            assert_relative_eq!(horizontal, instance.wall.outward(), epsilon = 1e-9);
        }
    }
}

#[test]
fn swapping_pure_subtractions_keeps_volume() {
    let bunker = Bunker::new(reference());
    let mut store = SolidStore::new();
    let families = bunker.build_families(&mut store).unwrap();

    let canonical = bunker.pipeline().assemble(&mut store, &families).unwrap();
    let mut steps = bunker.pipeline().steps().to_vec();
    steps.swap(1, 2);
    assert_eq!(steps[1].family, FeatureFamily::StructuralPanel);
    let swapped = AssemblyPipeline::new(steps)
        .assemble(&mut store, &families)
        .unwrap();

    let a = Volume::new(canonical).with_params(COARSE).execute(&store).unwrap();
    let b = Volume::new(swapped).with_params(COARSE).execute(&store).unwrap();
    assert!(a > 0.0);
    assert_relative_eq!(a, b, epsilon = 1e-9);
}

#[test]
fn cutting_windows_after_frames_removes_the_frames() {
    let bunker = Bunker::new(reference());
    let mut store = SolidStore::new();
    let families = bunker.build_families(&mut store).unwrap();

    let canonical = bunker.pipeline().assemble(&mut store, &families).unwrap();
    let mut steps: Vec<AssemblyStep> = bunker
        .pipeline()
        .steps()
        .iter()
        .copied()
        .filter(|s| s.family != FeatureFamily::WindowCut)
        .collect();
    steps.push(AssemblyStep::subtract(FeatureFamily::WindowCut));
    let reordered = AssemblyPipeline::new(steps)
        .assemble(&mut store, &families)
        .unwrap();

    let a = Volume::new(canonical).with_params(COARSE).execute(&store).unwrap();
    let b = Volume::new(reordered).with_params(COARSE).execute(&store).unwrap();
    assert!(a > b + 1000.0, "canonical {a} vs reordered {b}");
}

#[test]
fn wall_angle_is_injectable() {
    let default = Bunker::new(reference()).metrics().unwrap();
    assert_relative_eq!(default.wall_angle, 75.068_582_821_862_45, epsilon = 1e-9);

    let upright = Bunker::new(reference()).with_wall_angle(|_, _| 90.0);
    assert_relative_eq!(upright.metrics().unwrap().wall_angle, 90.0);
    let mut store = SolidStore::new();
    let families = upright.build_families(&mut store).unwrap();
    // untilted panels keep their box extents
    let first = families.instances(FeatureFamily::StructuralPanel).unwrap().instances()[0].solid;
    let size = store.bounds(first).unwrap().size();
    assert_relative_eq!(size.y, 6.0, epsilon = 1e-9);
    assert_relative_eq!(size.z, 71.0, epsilon = 1e-9);
}

#[test]
fn invalid_geometry_fails_before_building() {
    for params in [
        GeometryParameters {
            inset: 80.0,
            ..reference()
        },
        GeometryParameters {
            length: 50.0,
            ..reference()
        },
        GeometryParameters {
            door_height: 72.0,
            ..reference()
        },
    ] {
        let mut store = SolidStore::new();
        let err = Bunker::new(params).generate(&mut store).unwrap_err();
        assert!(
            matches!(err, TerrainError::Geometry(GeometryError::InvalidGeometry(_))),
            "unexpected error {err}"
        );
        assert!(store.is_empty());
    }
}

#[test]
fn small_hull_has_no_panels() {
    let params = GeometryParameters {
        length: 60.0,
        width: 60.0,
        window_length: 12.0,
        window_height: 10.0,
        door_length: 12.0,
        door_height: 20.0,
        ..GeometryParameters::default()
    };
    let bunker = Bunker::new(params);
    let mut store = SolidStore::new();
    let families = bunker.build_families(&mut store).unwrap();
    assert!(families
        .instances(FeatureFamily::StructuralPanel)
        .unwrap()
        .is_empty());
    bunker.generate(&mut store).unwrap();
}

#[test]
fn out_of_range_selection_is_ignored() {
    let params = GeometryParameters {
        panels: IndexSelection::skipping([999]),
        doors: IndexSelection::keeping([999]),
        ..reference()
    };
    let mut store = SolidStore::new();
    let families = Bunker::new(params).build_families(&mut store).unwrap();
    assert_eq!(
        families.instances(FeatureFamily::StructuralPanel).unwrap().len(),
        10
    );
    assert!(families.instances(FeatureFamily::DoorCut).unwrap().is_empty());
}

#[test]
fn generation_is_reproducible() {
    let params = GeometryParameters::from_json(r#"{ "inset": 15, "panels": { "skip": [1, 4] } }"#)
        .unwrap();
    let a = generate(&params).unwrap();
    let b = generate(&params).unwrap();
    assert_eq!(a.bodies().unwrap().len(), b.bodies().unwrap().len());
    assert_eq!(a.bounding_box().unwrap(), b.bounding_box().unwrap());
    let va = a.volume(VolumeParams { cell_size: 4.0 }).unwrap();
    let vb = b.volume(VolumeParams { cell_size: 4.0 }).unwrap();
    assert_relative_eq!(va, vb);
}
