#![allow(clippy::unwrap_used)]

mod common;

use approx::assert_relative_eq;
use skirmish_terrain::math::Point3;
use skirmish_terrain::operations::boolean::{classify_point_in_solid, PointClassification};
use skirmish_terrain::{generate_catwalk, CatwalkParameters, GeneratedModel};

fn at(model: &GeneratedModel, x: f64, y: f64, z: f64) -> PointClassification {
    classify_point_in_solid(&Point3::new(x, y, z), model.solid(), model.store()).unwrap()
}

#[test]
fn default_catwalk() {
    common::init_tracing();
    let model = generate_catwalk(&CatwalkParameters::default()).unwrap();
    let bounds = model.bounding_box().unwrap();
    assert_relative_eq!(bounds.size().x, 187.0, epsilon = 1e-6);
    assert_relative_eq!(bounds.min.z, -2.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.max.z, 27.0, epsilon = 1e-6);

    // magnet pocket in the ledge, ledge beside it
    assert_eq!(at(&model, 62.0, 62.0, -1.0), PointClassification::Outside);
    assert_eq!(at(&model, 62.0, 50.0, -1.0), PointClassification::Inside);
    // corner wall on the deck
    assert_eq!(at(&model, 92.0, -92.0, 10.0), PointClassification::Inside);
    assert_eq!(at(&model, -92.0, 92.0, 10.0), PointClassification::Inside);
}

#[test]
fn magnets_can_be_disabled() {
    let params = CatwalkParameters {
        render_magnets: false,
        render_corner_walls: false,
        ..CatwalkParameters::default()
    };
    let model = generate_catwalk(&params).unwrap();
    assert_eq!(at(&model, 62.0, 62.0, -1.0), PointClassification::Inside);
    assert_relative_eq!(model.bounding_box().unwrap().max.z, 2.0, epsilon = 1e-9);
}

#[test]
fn catwalk_loads_from_json() {
    let params = CatwalkParameters::from_json(r#"{ "length": 150, "width": 150 }"#).unwrap();
    assert_relative_eq!(params.interior_length, 130.0);
    let model = generate_catwalk(&params).unwrap();
    assert_relative_eq!(model.bounding_box().unwrap().size().y, 150.0, epsilon = 1e-6);
}

#[test]
fn oversized_interior_is_rejected() {
    let params = CatwalkParameters {
        interior_width: 190.0,
        ..CatwalkParameters::default()
    };
    assert!(generate_catwalk(&params).is_err());
}
