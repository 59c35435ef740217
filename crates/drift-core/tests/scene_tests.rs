// Host-side tests for the scene store, layout scatter and material color.

use drift_core::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn spawn_then_lookup_returns_same_handle() {
    let mut scene = Scene::new();
    let handle = scene.spawn("knot", NodeKind::Knot, Transform::default());
    let found = scene.lookup("knot").unwrap();
    assert_eq!(handle, found);
    assert_eq!(scene.node(found).unwrap().name, "knot");
}

#[test]
fn lookup_of_unknown_name_is_an_error() {
    let scene = Scene::new();
    let err = scene.lookup("ghost").unwrap_err();
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn transform_matrix_places_origin_at_position() {
    let transform = Transform::at(Vec3::new(1.5, -8.0, 0.0));
    let placed = transform.matrix().transform_point3(Vec3::ZERO);
    assert!((placed - Vec3::new(1.5, -8.0, 0.0)).length() < 1e-6);
}

#[test]
fn ring_scatter_stays_inside_its_cube() {
    let mut rng = StdRng::seed_from_u64(7);
    for index in 0..RING_COUNT {
        let t = ring_transform(&mut rng, index, RING_COUNT);
        assert!(t.position.x >= -3.0 && t.position.x < 0.0, "x={}", t.position.x);
        assert!(
            t.position.y >= -OBJECT_SPACING - 1.5 && t.position.y < -OBJECT_SPACING + 1.5,
            "y={}",
            t.position.y
        );
        assert!(t.position.z >= -1.5 && t.position.z < 1.5, "z={}", t.position.z);
        let expected_scale = index as f32 / RING_COUNT as f32 / 2.0;
        assert!((t.scale.x - expected_scale).abs() < 1e-6);
    }
}

#[test]
fn ring_scatter_is_deterministic_for_a_seed() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    for index in 0..RING_COUNT {
        let ta = ring_transform(&mut a, index, RING_COUNT);
        let tb = ring_transform(&mut b, index, RING_COUNT);
        assert_eq!(ta.position, tb.position);
    }
}

#[test]
fn particle_field_spans_the_sections() {
    let mut rng = StdRng::seed_from_u64(42);
    let field = ParticleField::scatter(&mut rng, PARTICLE_COUNT);
    assert_eq!(field.positions.len(), PARTICLE_COUNT);
    for p in &field.positions {
        assert!(p.x >= -5.0 && p.x < 5.0);
        assert!(p.z >= -5.0 && p.z < 5.0);
        assert!(p.y > -2.5 * OBJECT_SPACING && p.y <= 0.5 * OBJECT_SPACING);
    }
}

#[test]
fn hex_color_parses_the_default() {
    let rgb = parse_hex_color("#2ec27e").unwrap();
    for (got, want) in rgb.iter().zip(DEFAULT_MATERIAL_COLOR.iter()) {
        assert!((got - want).abs() < 1e-2, "got {got}, want {want}");
    }
}

#[test]
fn hex_color_rejects_malformed_input() {
    assert!(parse_hex_color("2ec27e").is_none());
    assert!(parse_hex_color("#fff").is_none());
    assert!(parse_hex_color("#zzzzzz").is_none());
    assert!(parse_hex_color("").is_none());
}

#[test]
fn material_defaults_to_reference_color() {
    let material = MaterialParams::default();
    assert_eq!(material.color, DEFAULT_MATERIAL_COLOR);
}
