//! Pointer-driven rotation smoothing for the hero point field.
//!
//! All animation state lives in this explicit per-session record, created at
//! mount and discarded at unmount, so concurrent hero instances can never
//! bleed into each other.

use crate::constants::{ROTATION_LERP, ROTATION_PITCH_PER_PX, ROTATION_YAW_PER_PX};

/// Latest pointer sample in client coordinates. Last write wins; missed
/// intermediate samples are expected.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerSample {
    pub client_x: f32,
    pub client_y: f32,
}

#[derive(Default, Clone, Copy, Debug)]
pub struct RotationSmoother {
    pub pitch: f32, // current rotation about x
    pub yaw: f32,   // current rotation about y
    pub target_pitch: f32,
    pub target_yaw: f32,
}

impl RotationSmoother {
    /// Derive the target rotation from the pointer offset relative to the
    /// viewport center.
    pub fn set_target_from_pointer(&mut self, sample: PointerSample, vw: f32, vh: f32) {
        let dx = sample.client_x - vw / 2.0;
        let dy = sample.client_y - vh / 2.0;
        self.target_yaw = dx * ROTATION_YAW_PER_PX;
        self.target_pitch = dy * ROTATION_PITCH_PER_PX;
    }

    /// Move the current rotation a fixed fraction of the way toward the
    /// target. Called once per frame; never jumps.
    pub fn step(&mut self) {
        self.yaw += ROTATION_LERP * (self.target_yaw - self.yaw);
        self.pitch += ROTATION_LERP * (self.target_pitch - self.pitch);
    }

    /// Model matrix for the point field: yaw about y, then pitch about x.
    pub fn model_matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_rotation_y(self.yaw) * glam::Mat4::from_rotation_x(self.pitch)
    }
}
