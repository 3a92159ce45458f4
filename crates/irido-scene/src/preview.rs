//! Preview-scene state — the free-flight camera and the spinning test cube.
//!
//! Only the math lives here. The windowing layer feeds movement impulses
//! and mouse-look deltas in and reads matrices out; GL buffers and event
//! dispatch stay with it.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Fraction of the pending look angles carried into the next frame.
const LOOK_DAMPING: f32 = 0.5;
/// Fraction of the movement velocity carried into the next frame.
const VELOCITY_DAMPING: f32 = 0.8;

/// Movement impulse directions for [`PreviewCamera::move_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

/// Free-flight camera for the GL preview scene.
///
/// Mouse-look deltas accumulate into damped heading/pitch angles; movement
/// impulses accumulate into a velocity that decays each frame. [`Self::update`]
/// integrates both, then [`Self::matrices`] yields the projection/view/model
/// triple for the draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewCamera {
    /// Camera position.
    pub position: Vec3,
    /// Point the camera looks at; maintained one unit ahead of `position`.
    pub look_at: Vec3,
    /// World up.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clip plane distance.
    pub near_clip: f32,
    /// Far clip plane distance.
    pub far_clip: f32,
    /// Distance added per movement impulse.
    pub move_scale: f32,
    /// Radians of look rotation per pixel of mouse travel.
    pub look_scale: f32,
    aspect: f32,
    velocity: Vec3,
    pending_heading: f32,
    pending_pitch: f32,
}

impl Default for PreviewCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -1.0),
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_degrees: 45.0,
            near_clip: 0.1,
            far_clip: 1000.0,
            move_scale: 0.1,
            look_scale: 0.005,
            aspect: 16.0 / 9.0,
            velocity: Vec3::ZERO,
            pending_heading: 0.0,
            pending_pitch: 0.0,
        }
    }
}

impl PreviewCamera {
    /// Set near and far clip plane distances.
    pub fn set_clipping(&mut self, near: f32, far: f32) {
        self.near_clip = near;
        self.far_clip = far;
    }

    /// Set the vertical field of view in degrees.
    pub fn set_fov(&mut self, degrees: f32) {
        self.fov_y_degrees = degrees;
    }

    /// Set the output viewport; only the aspect ratio is retained.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    /// Current unit view direction.
    pub fn direction(&self) -> Vec3 {
        (self.look_at - self.position).normalize_or(Vec3::NEG_Z)
    }

    /// Queue one movement impulse. Applied (and then decayed) by
    /// [`Self::update`].
    pub fn move_step(&mut self, direction: MoveDirection) {
        let forward = self.direction();
        let right = forward.cross(self.up).normalize_or(Vec3::X);
        let step = match direction {
            MoveDirection::Forward => forward,
            MoveDirection::Back => -forward,
            MoveDirection::Left => -right,
            MoveDirection::Right => right,
            MoveDirection::Up => self.up,
            MoveDirection::Down => -self.up,
        };
        self.velocity += step * self.move_scale;
    }

    /// Queue a mouse-look delta in pixels.
    pub fn look_delta(&mut self, dx: f32, dy: f32) {
        self.pending_heading += dx * self.look_scale;
        self.pending_pitch += dy * self.look_scale;
    }

    /// Integrate pending look and movement into position and look-at.
    pub fn update(&mut self) {
        let mut direction = self.direction();
        let axis = direction.cross(self.up).normalize_or(Vec3::X);
        let pitch = Quat::from_axis_angle(axis, self.pending_pitch);
        let heading = Quat::from_axis_angle(self.up, self.pending_heading);
        direction = (pitch * heading).normalize() * direction;

        self.position += self.velocity;
        self.look_at = self.position + direction;

        self.pending_heading *= LOOK_DAMPING;
        self.pending_pitch *= LOOK_DAMPING;
        self.velocity *= VELOCITY_DAMPING;
    }

    /// Projection, view, and model matrices for the current state.
    pub fn matrices(&self) -> (Mat4, Mat4, Mat4) {
        let projection = Mat4::perspective_rh_gl(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near_clip,
            self.far_clip,
        );
        let view = Mat4::look_at_rh(self.position, self.look_at, self.up);
        (projection, view, Mat4::IDENTITY)
    }
}

/// Self-rotation of the preview cube: Euler angles advanced by a per-axis
/// angular speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinState {
    /// Current rotation, radians per axis.
    pub rotation: Vec3,
    /// Angular speed, radians per second per axis.
    pub speed: Vec3,
}

impl Default for SpinState {
    fn default() -> Self {
        Self {
            rotation: Vec3::ZERO,
            speed: Vec3::new(0.8, 0.6, 0.4),
        }
    }
}

impl SpinState {
    /// Advance the rotation by `dt_seconds` of spin.
    pub fn advance(&mut self, dt_seconds: f32) {
        self.rotation += self.speed * dt_seconds;
    }

    /// Model matrix for the current rotation.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}
