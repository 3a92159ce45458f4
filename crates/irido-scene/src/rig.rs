//! Render camera rig.
//!
//! The rig owns the mutable camera fields the renderer reads. Basis
//! refresh replaces eye/forward/up/right together, from the rig's own
//! rotation, zoom, and resolution — the renderer never observes a
//! partially updated frame.

use glam::{Quat, Vec3};
use irido_core::camera::basis::synthesize_camera_basis;
use irido_core::error::CameraError;
use serde::{Deserialize, Serialize};

/// The render camera the viewer drives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraRig {
    /// Camera position.
    pub eye: Vec3,
    /// Unit view direction.
    pub forward: Vec3,
    /// Up vector, scaled by zoom × aspect.
    pub up: Vec3,
    /// Right vector, scaled by zoom.
    pub right: Vec3,
    /// Scene rotation the basis is derived from.
    pub rotation: Quat,
    /// Distance scale applied to the whole frame.
    pub zoom: f32,
    /// Output width in pixels.
    pub x_resolution: u32,
    /// Output height in pixels.
    pub y_resolution: u32,
    /// Distance from the eye to the projection plane.
    pub projection_distance: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        let mut rig = Self {
            eye: Vec3::new(0.0, 0.0, 1.0),
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            rotation: Quat::IDENTITY,
            zoom: 1.0,
            x_resolution: 1280,
            y_resolution: 720,
            projection_distance: 1.0,
        };
        // Identity rotation cannot fail; this just scales `up` to the
        // default aspect.
        let _ = rig.refresh_basis();
        rig
    }
}

impl CameraRig {
    /// Height over width.
    pub fn aspect(&self) -> f32 {
        self.y_resolution as f32 / self.x_resolution as f32
    }

    /// Re-derive eye/forward/up/right from the current rotation, zoom, and
    /// resolution. All four vectors are replaced together; on error the rig
    /// is left untouched.
    ///
    /// # Errors
    /// [`CameraError::InvalidRotation`] if the stored rotation has zero
    /// norm.
    pub fn refresh_basis(&mut self) -> Result<(), CameraError> {
        let basis = synthesize_camera_basis(
            self.rotation,
            self.zoom,
            self.x_resolution as f32,
            self.y_resolution as f32,
        )?;
        self.eye = basis.eye;
        self.forward = basis.forward;
        self.up = basis.up;
        self.right = basis.right;
        Ok(())
    }
}
