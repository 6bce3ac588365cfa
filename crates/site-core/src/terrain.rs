//! The hero point field: a fixed lattice of points whose heights are
//! recomputed every frame from a closed-form wave formula.
//!
//! The positions live in one flat interleaved xyz buffer so the frontend can
//! upload it to the GPU without copying. Only the y component is ever
//! rewritten after construction; cardinality is invariant for the lifetime of
//! one field.

use crate::constants::{
    WAVE_DETAIL_AMP, WAVE_DETAIL_DRIFT_X, WAVE_DETAIL_FREQ, WAVE_PRIMARY_AMP,
    WAVE_PRIMARY_DRIFT_X, WAVE_PRIMARY_DRIFT_Z, WAVE_PRIMARY_FREQ,
};

pub struct PointField {
    width: usize,
    depth: usize,
    positions: Vec<f32>, // interleaved xyz, length = width * depth * 3
}

impl PointField {
    /// Build a centered flat lattice of `width x depth` points with the given
    /// spacing. Heights start at zero.
    pub fn new(width: usize, depth: usize, separation: f32) -> Self {
        assert!(width > 0 && depth > 0, "degenerate lattice");
        let mut positions = Vec::with_capacity(width * depth * 3);
        let half_x = (width as f32 * separation) / 2.0;
        let half_z = (depth as f32 * separation) / 2.0;
        for ix in 0..width {
            for iz in 0..depth {
                positions.push(ix as f32 * separation - half_x);
                positions.push(0.0);
                positions.push(iz as f32 * separation - half_z);
            }
        }
        Self {
            width,
            depth,
            positions,
        }
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.width * self.depth
    }

    /// Raw interleaved xyz positions.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// The position buffer as bytes, ready for a GPU upload.
    #[inline]
    pub fn positions_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Rewrite every point's height in place for the given elapsed time.
    /// Single writer: the owning view session calls this once per frame.
    pub fn update_heights(&mut self, elapsed_secs: f32) {
        for chunk in self.positions.chunks_exact_mut(3) {
            let x = chunk[0];
            let z = chunk[2];
            chunk[1] = terrain_height(x, z, elapsed_secs);
        }
    }
}

/// Height of the animated terrain at horizontal position `(x, z)` and elapsed
/// time `t`. Two superposed sin/cos products: broad drifting hills plus a
/// finer ridge pattern. Coefficients are visual tuning, not a contract, but
/// the result is finite for every finite input.
#[inline]
pub fn terrain_height(x: f32, z: f32, t: f32) -> f32 {
    let hills = ((x + t * WAVE_PRIMARY_DRIFT_X) * WAVE_PRIMARY_FREQ).sin()
        * ((z + t * WAVE_PRIMARY_DRIFT_Z) * WAVE_PRIMARY_FREQ).cos()
        * WAVE_PRIMARY_AMP;
    let ridges = ((x - t * WAVE_DETAIL_DRIFT_X) * WAVE_DETAIL_FREQ).sin()
        * (z * WAVE_DETAIL_FREQ).cos()
        * WAVE_DETAIL_AMP;
    hills + ridges
}
