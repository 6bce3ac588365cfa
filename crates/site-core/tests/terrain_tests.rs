// Host-side tests for the hero point field and its height function.

use site_core::{terrain_height, PointField, GRID_DEPTH, GRID_SEPARATION, GRID_WIDTH};

#[test]
fn point_field_cardinality_matches_lattice() {
    let field = PointField::new(GRID_WIDTH, GRID_DEPTH, GRID_SEPARATION);
    assert_eq!(field.point_count(), GRID_WIDTH * GRID_DEPTH);
    assert_eq!(field.positions().len(), GRID_WIDTH * GRID_DEPTH * 3);
}

#[test]
fn cardinality_is_invariant_across_updates() {
    let mut field = PointField::new(32, 32, 10.0);
    let before = field.positions().len();
    for frame in 0..500 {
        field.update_heights(frame as f32 / 60.0);
        assert_eq!(field.positions().len(), before);
    }
}

#[test]
fn updates_mutate_only_the_vertical_coordinate() {
    let mut field = PointField::new(16, 16, 10.0);
    let xz_before: Vec<(f32, f32)> = field
        .positions()
        .chunks_exact(3)
        .map(|p| (p[0], p[2]))
        .collect();

    field.update_heights(12.5);

    let xz_after: Vec<(f32, f32)> = field
        .positions()
        .chunks_exact(3)
        .map(|p| (p[0], p[2]))
        .collect();
    assert_eq!(xz_before, xz_after);
}

#[test]
fn initial_heights_are_zero() {
    let field = PointField::new(8, 8, 10.0);
    for point in field.positions().chunks_exact(3) {
        assert_eq!(point[1], 0.0);
    }
}

#[test]
fn lattice_is_centered() {
    let field = PointField::new(10, 10, 10.0);
    let sum_x: f32 = field.positions().chunks_exact(3).map(|p| p[0]).sum();
    let sum_z: f32 = field.positions().chunks_exact(3).map(|p| p[2]).sum();
    // Symmetric about the origin up to the half-step offset of an even grid.
    let half_step = 10.0 / 2.0;
    assert!((sum_x / 100.0 + half_step).abs() < 1e-3);
    assert!((sum_z / 100.0 + half_step).abs() < 1e-3);
}

#[test]
fn heights_are_finite_for_all_grid_coordinates_and_times() {
    let half_x = GRID_WIDTH as f32 * GRID_SEPARATION / 2.0;
    let half_z = GRID_DEPTH as f32 * GRID_SEPARATION / 2.0;
    // Sweep times from the first frame to hours of continuous animation.
    for &t in &[0.0, 0.016, 1.0, 60.0, 3600.0, 100_000.0] {
        for ix in (0..GRID_WIDTH).step_by(7) {
            for iz in (0..GRID_DEPTH).step_by(7) {
                let x = ix as f32 * GRID_SEPARATION - half_x;
                let z = iz as f32 * GRID_SEPARATION - half_z;
                let y = terrain_height(x, z, t);
                assert!(y.is_finite(), "non-finite height at ({x}, {z}, {t})");
            }
        }
    }
}

#[test]
fn heights_stay_within_combined_amplitude() {
    // The two wave terms bound the displacement.
    let bound = 60.0 + 15.0 + 1e-3;
    for step in 0..1000 {
        let x = (step as f32 - 500.0) * 3.7;
        let z = (step as f32 - 500.0) * 1.3;
        let y = terrain_height(x, z, step as f32 * 0.1);
        assert!(y.abs() <= bound, "height {y} exceeds amplitude bound");
    }
}

#[test]
fn height_function_is_deterministic() {
    assert_eq!(terrain_height(123.0, -456.0, 7.5), terrain_height(123.0, -456.0, 7.5));
}

#[test]
fn update_heights_matches_height_function() {
    let mut field = PointField::new(12, 9, 10.0);
    field.update_heights(3.25);
    for point in field.positions().chunks_exact(3) {
        assert_eq!(point[1], terrain_height(point[0], point[2], 3.25));
    }
}

#[test]
#[should_panic(expected = "degenerate lattice")]
fn zero_sized_lattice_is_rejected() {
    let _ = PointField::new(0, 10, 10.0);
}
