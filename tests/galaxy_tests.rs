//! Integration tests for galaxy generation and recoloring.
//!
//! These tests drive the public API the way a rendering host does: generate
//! once, keep the point metadata, and recolor or regenerate as parameters
//! change.

use galaxy_field::prelude::*;
use rand::rngs::mock::StepRng;

fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

fn white_to_black(count: u32) -> GalaxyParams {
    GalaxyParams::default()
        .with_particles_count(count)
        .with_branches(1)
        .with_galaxy_radius(10.0)
        .with_spiral_angle(0.0)
        .with_colors(Color::WHITE, Color::BLACK)
}

// ============================================================================
// Buffer Shape
// ============================================================================

#[test]
fn test_lengths_for_many_parameter_sets() {
    let mut rng = seeded(11);
    for (count, branches, radius, spiral) in [
        (1, 1, 0.5, 0.0),
        (2, 2, 1.0, -3.0),
        (100, 20, 20.0, 10.0),
        (3000, 5, 5.0, 1.0),
        (10_000, 7, 13.0, 0.1),
    ] {
        let params = GalaxyParams::default()
            .with_particles_count(count)
            .with_branches(branches)
            .with_galaxy_radius(radius)
            .with_spiral_angle(spiral);
        let field = generate(&params, &mut rng).unwrap();

        let n = count as usize;
        assert_eq!(field.positions.len(), n * 3);
        assert_eq!(field.colors.len(), n * 3);
        assert_eq!(field.points.len(), n);
    }
}

#[test]
fn test_colors_within_unit_range() {
    let params = GalaxyParams::default().with_particles_count(5000);
    let field = generate(&params, &mut seeded(2)).unwrap();
    for &c in &field.colors {
        assert!((0.0..=1.0).contains(&c), "channel out of range: {c}");
    }
}

#[test]
fn test_distances_within_radius() {
    let params = GalaxyParams::default()
        .with_particles_count(5000)
        .with_galaxy_radius(7.0);
    let field = generate(&params, &mut seeded(3)).unwrap();
    for point in &field.points {
        assert!((0.0..=7.0).contains(&point.distance));
    }
}

#[test]
fn test_positions_stay_in_height_band() {
    let params = GalaxyParams::default().with_particles_count(5000);
    let field = generate(&params, &mut seeded(4)).unwrap();
    for p in field.positions_vec3() {
        assert!(p.is_finite());
        assert!(p.y >= -0.1 && p.y < 0.1, "y out of band: {}", p.y);
    }
}

#[test]
fn test_radius_is_not_area_uniform() {
    // Linear radius sampling puts half the points inside half the radius,
    // where area-uniform sampling would put a quarter there.
    let params = GalaxyParams::default()
        .with_particles_count(10_000)
        .with_galaxy_radius(10.0);
    let field = generate(&params, &mut seeded(5)).unwrap();
    let inner = field.points.iter().filter(|p| p.distance < 5.0).count();
    let share = inner as f32 / field.len() as f32;
    assert!((share - 0.5).abs() < 0.05, "inner share {share}");
}

// ============================================================================
// Fixed-Sample Scenarios
// ============================================================================

#[test]
fn test_zero_samples_scenario() {
    let field = generate(&white_to_black(1), &mut StepRng::new(0, 0)).unwrap();

    assert_eq!(field.points[0].distance, 0.0);
    assert_eq!(field.position(0), Vec3::new(0.0, -0.1, 0.0));
    assert_eq!(field.color(0), Color::WHITE);
}

#[test]
fn test_max_samples_scenario() {
    let field = generate(&white_to_black(1), &mut StepRng::new(u64::MAX, 0)).unwrap();

    assert!((field.points[0].distance - 10.0).abs() < 1e-4);
    let color = field.color(0);
    for channel in color.to_array() {
        assert!(channel.abs() < 1e-6);
    }
}

#[test]
fn test_constant_and_step_rng_agree() {
    let a = generate(&white_to_black(3), &mut StepRng::new(u64::MAX, 0)).unwrap();
    let b = generate(&white_to_black(3), &mut ConstantSampler::MAX).unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Recoloring
// ============================================================================

#[test]
fn test_swapped_colors_invert_gradient() {
    let params = white_to_black(2);
    let mut field = generate(&params, &mut seeded(8)).unwrap();
    let original = field.clone();

    let swapped = params.with_colors(Color::BLACK, Color::WHITE);
    field.recolor(&swapped).unwrap();

    assert_eq!(
        bytemuck::cast_slice::<f32, u8>(&field.positions),
        bytemuck::cast_slice::<f32, u8>(&original.positions)
    );
    for (new, old) in field.colors.iter().zip(&original.colors) {
        assert!((new - (1.0 - old)).abs() < 1e-6, "{new} vs 1 - {old}");
    }
}

#[test]
fn test_recolor_matches_generation_bit_for_bit() {
    let params = GalaxyParams::default().with_particles_count(2000);
    let field = generate(&params, &mut seeded(21)).unwrap();

    let recolored = recolor(&field.points, &params).unwrap();
    let bits = |v: &[f32]| v.iter().map(|c| c.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&recolored), bits(&field.colors));
}

#[test]
fn test_recolor_twice_is_identical() {
    let params = GalaxyParams::default().with_particles_count(500);
    let field = generate(&params, &mut seeded(22)).unwrap();
    let new_colors = params.with_colors(
        Color::from_hex("#112233").unwrap(),
        Color::from_hex("#ddeeff").unwrap(),
    );

    let a = recolor(&field.points, &new_colors).unwrap();
    let b = recolor(&field.points, &new_colors).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_recolor_after_count_change_is_invalid_state() {
    let params = GalaxyParams::default().with_particles_count(300);
    let field = generate(&params, &mut seeded(23)).unwrap();

    let err = recolor(&field.points, &params.with_particles_count(400)).unwrap_err();
    assert!(matches!(
        err,
        GalaxyError::InvalidState {
            expected: 400,
            actual: 300
        }
    ));
}

// ============================================================================
// Invalid Input
// ============================================================================

#[test]
fn test_zero_count_is_invalid_parameter() {
    let err = generate(&white_to_black(0), &mut seeded(0)).unwrap_err();
    assert!(matches!(
        err,
        GalaxyError::InvalidParameter {
            name: "particlesCount",
            ..
        }
    ));
}

#[test]
fn test_zero_radius_is_invalid_parameter() {
    let params = white_to_black(10).with_galaxy_radius(0.0);
    let err = generate(&params, &mut seeded(0)).unwrap_err();
    assert!(matches!(
        err,
        GalaxyError::InvalidParameter {
            name: "galaxyRadius",
            ..
        }
    ));
}

#[test]
fn test_infinite_spiral_is_invalid_parameter() {
    let params = white_to_black(10).with_spiral_angle(f32::INFINITY);
    assert!(generate(&params, &mut seeded(0))
        .unwrap_err()
        .is_invalid_parameter());
}

// ============================================================================
// Host Flow
// ============================================================================

#[test]
fn test_host_flow_from_preset() {
    let params = GalaxyParams::from_json(
        r##"{
            "particlesCount": 1000,
            "galaxyRadius": 8,
            "branches": 4,
            "spiralAngleInRadians": 2.5,
            "insideColor": "#ffffff",
            "outsideColor": "#000000"
        }"##,
    )
    .unwrap();

    let mut galaxy = Galaxy::with_seed(params, 99).unwrap();
    assert_eq!(galaxy.field().len(), 1000);

    let positions = galaxy.field().positions.clone();
    let update = galaxy
        .update(params.with_colors(Color::BLACK, Color::WHITE))
        .unwrap();
    assert_eq!(update, Update::Recolor);
    assert_eq!(galaxy.field().positions, positions);

    let update = galaxy.update(galaxy.params().with_branches(6)).unwrap();
    assert_eq!(update, Update::Regenerate);
    assert_eq!(galaxy.params().branches, 6);
    assert_eq!(galaxy.params().inside_color, Color::BLACK);
}

#[test]
fn test_clamped_input_always_generates() {
    let raw = GalaxyParams::default()
        .with_particles_count(0)
        .with_branches(0)
        .with_galaxy_radius(-4.0)
        .with_spiral_angle(99.0);
    let params = raw.clamped();
    let field = generate(&params, &mut seeded(1)).unwrap();
    assert_eq!(field.len(), 100);
}
