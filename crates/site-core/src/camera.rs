//! Camera types shared with the web frontend.
//!
//! These avoid platform-specific APIs so the projection math can be tested on
//! the host. The web frontend consumes them to build the hero view matrices.

use glam::{Mat4, Vec3};

use crate::constants::{
    camera_eye_vec3, camera_target_vec3, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR,
};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed hero camera, looking down at the grid center from above and
    /// behind. Aspect starts at 1 and tracks the drawable surface.
    pub fn hero(aspect: f32) -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: camera_target_vec3(),
            up: Vec3::Y,
            aspect: sanitize_aspect(aspect),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Update the aspect ratio after a viewport resize. The point field is
    /// untouched by resizes; only this ratio and the surface change.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = sanitize_aspect(width / height.max(1.0));
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[inline]
fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
