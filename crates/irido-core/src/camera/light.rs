//! Light rotation composition.
//!
//! The light's orientation is a base quaternion plus the UI's incremental
//! Euler deltas. Both inputs stay separate; only their composition is
//! exported, as the 4-tuple the renderer's light-rotation API consumes.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Consumer of the composed light rotation.
///
/// Implemented by the renderer; receives `(w, x, y, z)`.
pub trait LightRotationSink {
    /// Replace the light orientation.
    fn set_light_rotation(&mut self, wxyz: [f32; 4]);
}

/// Compose a base light rotation with incremental Euler deltas.
///
/// The Euler triple is converted with the canonical intrinsic-XYZ formula
/// and right-multiplied: `base * euler`. The export order `(w, x, y, z)`
/// matches the renderer's API and must not be transposed.
pub fn compose_light_rotation(base: Quat, incremental_euler: Vec3) -> [f32; 4] {
    let euler = Quat::from_euler(
        EulerRot::XYZ,
        incremental_euler.x,
        incremental_euler.y,
        incremental_euler.z,
    );
    let composed = base * euler;
    [composed.w, composed.x, composed.y, composed.z]
}

/// Relative light-orientation state.
///
/// Recomputed whenever either input changes; never persisted on its own.
/// The Euler increment is relative UI state and only resets on explicit
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightRotationState {
    /// Absolute base orientation.
    pub base_rotation: Quat,
    /// Pending Euler deltas (radians, applied intrinsic-XYZ).
    pub incremental_euler: Vec3,
}

impl Default for LightRotationState {
    fn default() -> Self {
        Self {
            base_rotation: Quat::IDENTITY,
            incremental_euler: Vec3::ZERO,
        }
    }
}

impl LightRotationState {
    /// The composed orientation as `(w, x, y, z)`.
    pub fn composed(&self) -> [f32; 4] {
        compose_light_rotation(self.base_rotation, self.incremental_euler)
    }

    /// Send the composed orientation to the renderer.
    pub fn push_to(&self, sink: &mut dyn LightRotationSink) {
        sink.set_light_rotation(self.composed());
    }

    /// Clear the pending Euler deltas, keeping the base orientation.
    pub fn reset_increment(&mut self) {
        self.incremental_euler = Vec3::ZERO;
    }
}
