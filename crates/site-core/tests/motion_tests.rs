// Host-side tests for pointer-driven rotation smoothing.

use site_core::{PointerSample, RotationSmoother, ROTATION_PITCH_PER_PX, ROTATION_YAW_PER_PX};

fn sample(x: f32, y: f32) -> PointerSample {
    PointerSample {
        client_x: x,
        client_y: y,
    }
}

#[test]
fn pointer_at_viewport_center_targets_zero_rotation() {
    let mut rot = RotationSmoother::default();
    rot.set_target_from_pointer(sample(960.0, 540.0), 1920.0, 1080.0);
    assert_eq!(rot.target_yaw, 0.0);
    assert_eq!(rot.target_pitch, 0.0);
}

#[test]
fn target_scales_with_pointer_offset() {
    let mut rot = RotationSmoother::default();
    rot.set_target_from_pointer(sample(1920.0, 1080.0), 1920.0, 1080.0);
    assert!((rot.target_yaw - 960.0 * ROTATION_YAW_PER_PX).abs() < 1e-6);
    assert!((rot.target_pitch - 540.0 * ROTATION_PITCH_PER_PX).abs() < 1e-6);

    // Opposite corner flips the sign.
    rot.set_target_from_pointer(sample(0.0, 0.0), 1920.0, 1080.0);
    assert!(rot.target_yaw < 0.0);
    assert!(rot.target_pitch < 0.0);
}

#[test]
fn step_moves_monotonically_toward_target() {
    let mut rot = RotationSmoother::default();
    rot.set_target_from_pointer(sample(1920.0, 540.0), 1920.0, 1080.0);
    let mut prev_gap = (rot.target_yaw - rot.yaw).abs();
    for _ in 0..50 {
        rot.step();
        let gap = (rot.target_yaw - rot.yaw).abs();
        assert!(gap <= prev_gap, "gap widened: {gap} > {prev_gap}");
        prev_gap = gap;
    }
}

#[test]
fn step_converges_without_overshoot() {
    let mut rot = RotationSmoother::default();
    rot.target_yaw = 1.0;
    rot.target_pitch = -0.5;
    for _ in 0..500 {
        rot.step();
        assert!(rot.yaw <= rot.target_yaw);
        assert!(rot.pitch >= rot.target_pitch);
    }
    assert!((rot.yaw - rot.target_yaw).abs() < 1e-3);
    assert!((rot.pitch - rot.target_pitch).abs() < 1e-3);
}

#[test]
fn only_the_latest_pointer_sample_matters() {
    // Overwriting the target repeatedly before stepping is the same as
    // setting the last one; intermediate samples carry no state.
    let mut a = RotationSmoother::default();
    for x in [10.0, 500.0, 1400.0, 222.0] {
        a.set_target_from_pointer(sample(x, 300.0), 1920.0, 1080.0);
    }
    let mut b = RotationSmoother::default();
    b.set_target_from_pointer(sample(222.0, 300.0), 1920.0, 1080.0);
    assert_eq!(a.target_yaw, b.target_yaw);
    assert_eq!(a.target_pitch, b.target_pitch);
}

#[test]
fn model_matrix_stays_finite_under_long_runs() {
    let mut rot = RotationSmoother::default();
    for i in 0..10_000 {
        let x = (i % 1920) as f32;
        rot.set_target_from_pointer(sample(x, 540.0), 1920.0, 1080.0);
        rot.step();
    }
    assert!(rot.model_matrix().to_cols_array().iter().all(|v| v.is_finite()));
}
