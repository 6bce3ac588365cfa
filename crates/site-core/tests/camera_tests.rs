// Host-side tests for the hero camera and viewport math.

use site_core::{capped_pixel_ratio, Camera, MAX_PIXEL_RATIO};

#[test]
fn aspect_tracks_viewport_after_resize() {
    let mut camera = Camera::hero(1.0);
    for &(w, h) in &[(1920.0_f32, 1080.0_f32), (800.0, 600.0), (375.0, 812.0), (1.0, 1.0)] {
        camera.set_aspect(w, h);
        assert!((camera.aspect - w / h).abs() < 1e-6, "aspect for {w}x{h}");
    }
}

#[test]
fn degenerate_viewport_falls_back_to_square_aspect() {
    let mut camera = Camera::hero(1.0);
    camera.set_aspect(0.0, 0.0);
    assert_eq!(camera.aspect, 1.0);
    camera.set_aspect(f32::NAN, 100.0);
    assert_eq!(camera.aspect, 1.0);
}

#[test]
fn matrices_are_finite() {
    let mut camera = Camera::hero(16.0 / 9.0);
    for &(w, h) in &[(2560.0_f32, 1440.0_f32), (320.0, 240.0)] {
        camera.set_aspect(w, h);
        let proj = camera.projection_matrix();
        let view = camera.view_matrix();
        assert!(proj.to_cols_array().iter().all(|v| v.is_finite()));
        assert!(view.to_cols_array().iter().all(|v| v.is_finite()));
    }
}

#[test]
fn view_matrix_looks_at_the_grid_center() {
    let camera = Camera::hero(1.0);
    // Transforming the target must land on the negative z axis in view space.
    let target_view = camera.view_matrix().transform_point3(camera.target);
    assert!(target_view.x.abs() < 1e-4);
    assert!(target_view.y.abs() < 1e-4);
    assert!(target_view.z < 0.0);
}

#[test]
fn pixel_ratio_is_capped() {
    assert_eq!(capped_pixel_ratio(1.0), 1.0);
    assert_eq!(capped_pixel_ratio(1.5), 1.5);
    assert_eq!(capped_pixel_ratio(3.0), MAX_PIXEL_RATIO);
    // Degenerate reports never shrink the backing store to nothing.
    assert_eq!(capped_pixel_ratio(0.0), 1.0);
}
