use glam::Vec3;

// Shared visual tuning constants for the hero terrain, used by the web
// frontend and by host-side tests.

// Point field lattice
pub const GRID_WIDTH: usize = 160; // points along x
pub const GRID_DEPTH: usize = 160; // points along z
pub const GRID_SEPARATION: f32 = 10.0; // world units between neighbors

// Topography waves (two superposed sin/cos products)
pub const WAVE_PRIMARY_FREQ: f32 = 0.005; // large hills
pub const WAVE_PRIMARY_AMP: f32 = 60.0;
pub const WAVE_PRIMARY_DRIFT_X: f32 = 20.0; // world units per second
pub const WAVE_PRIMARY_DRIFT_Z: f32 = 10.0;
pub const WAVE_DETAIL_FREQ: f32 = 0.02; // small ridges
pub const WAVE_DETAIL_AMP: f32 = 15.0;
pub const WAVE_DETAIL_DRIFT_X: f32 = 10.0;

// Hero camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 150.0, 400.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 1.0;
pub const CAMERA_ZFAR: f32 = 10000.0;

// Pointer-driven rotation
pub const ROTATION_YAW_PER_PX: f32 = 0.001; // pointer x offset to target yaw
pub const ROTATION_PITCH_PER_PX: f32 = 0.0005; // pointer y offset to target pitch
pub const ROTATION_LERP: f32 = 0.05; // per-frame approach factor

// Presentation
pub const POINT_SIZE_PX: f32 = 2.0; // screen-space quad radius of one point
pub const POINT_OPACITY: f32 = 0.8;
pub const FOG_DENSITY: f32 = 0.001; // exp2 falloff with view distance
pub const MAX_PIXEL_RATIO: f64 = 2.0; // cap on devicePixelRatio

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}

#[inline]
pub fn camera_target_vec3() -> Vec3 {
    Vec3::from(CAMERA_TARGET)
}

/// Clamp a reported device pixel ratio to the backing-store cap.
#[inline]
pub fn capped_pixel_ratio(dpr: f64) -> f64 {
    dpr.clamp(1.0, MAX_PIXEL_RATIO)
}
