//! Camera basis reconstruction from a scene rotation.
//!
//! The stored quaternion describes the *scene's* rotation relative to a
//! fixed camera convention. Inverting it maps the canonical frame into
//! camera-relative-to-scene space. The inversion direction is part of the
//! contract with the renderer and must not be simplified away.

use glam::{Quat, Vec3};

use crate::error::CameraError;

/// A render-ready camera frame.
///
/// After synthesis, `forward`, `up`, and `right` are mutually orthogonal
/// (up to floating-point tolerance) with the lengths implied by zoom and
/// aspect, and `eye` lies along the rotated +Z axis scaled by zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Camera position.
    pub eye: Vec3,
    /// Unit view direction.
    pub forward: Vec3,
    /// Up vector, length `zoom × aspect`.
    pub up: Vec3,
    /// Right vector, length `zoom`.
    pub right: Vec3,
}

/// Reconstruct the camera frame from a scene rotation, zoom factor, and
/// output resolution.
///
/// The pre-rotation frame looks down −Z with the eye at `(0, 0, zoom)`;
/// `up` is scaled by `zoom × aspect` and `right` by `zoom`, where
/// `aspect = y_res / x_res`. The rotation is normalized and conjugated,
/// then applied to all four vectors.
///
/// Zero zoom and degenerate aspect ratios are accepted and yield
/// zero-length but well-defined vectors — range guarding is the caller's
/// concern, no clamping happens here.
///
/// # Errors
/// [`CameraError::InvalidRotation`] if `rotation` has zero norm.
pub fn synthesize_camera_basis(
    rotation: Quat,
    zoom: f32,
    x_res: f32,
    y_res: f32,
) -> Result<CameraBasis, CameraError> {
    if rotation.length_squared() == 0.0 {
        return Err(CameraError::InvalidRotation);
    }

    let aspect = y_res / x_res;
    let view = rotation.normalize().conjugate();

    Ok(CameraBasis {
        eye: view * Vec3::new(0.0, 0.0, zoom),
        forward: view * Vec3::new(0.0, 0.0, -1.0),
        up: view * Vec3::new(0.0, zoom * aspect, 0.0),
        right: view * Vec3::new(zoom, 0.0, 0.0),
    })
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_vec3(got: Vec3, expected: Vec3) {
        assert!(
            (got - expected).length() < EPSILON,
            "{got:?} vs {expected:?}"
        );
    }

    #[test]
    fn test_identity_rotation_unit_zoom() {
        let basis = synthesize_camera_basis(Quat::IDENTITY, 1.0, 1.0, 1.0).expect("valid rotation");
        assert_vec3(basis.eye, Vec3::new(0.0, 0.0, 1.0));
        assert_vec3(basis.forward, Vec3::new(0.0, 0.0, -1.0));
        assert_vec3(basis.up, Vec3::new(0.0, 1.0, 0.0));
        assert_vec3(basis.right, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_zero_norm_rotation_rejected() {
        let zero = Quat::from_xyzw(0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            synthesize_camera_basis(zero, 1.0, 1.0, 1.0),
            Err(CameraError::InvalidRotation)
        );
    }

    #[test]
    fn test_rotation_is_inverted_not_applied() {
        // A +90° scene yaw must swing the eye to −X (camera relative to
        // scene), not +X. Swapping the inversion direction flips the sign.
        let yaw = Quat::from_rotation_y(FRAC_PI_2);
        let basis = synthesize_camera_basis(yaw, 1.0, 1.0, 1.0).expect("valid rotation");
        assert_vec3(basis.eye, Vec3::new(-1.0, 0.0, 0.0));
        assert_vec3(basis.forward, Vec3::new(1.0, 0.0, 0.0));
        assert_vec3(basis.up, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_non_unit_rotation_is_normalized() {
        let yaw = Quat::from_rotation_y(FRAC_PI_2);
        let scaled = Quat::from_xyzw(yaw.x * 3.0, yaw.y * 3.0, yaw.z * 3.0, yaw.w * 3.0);
        let a = synthesize_camera_basis(yaw, 2.0, 640.0, 480.0).expect("valid rotation");
        let b = synthesize_camera_basis(scaled, 2.0, 640.0, 480.0).expect("valid rotation");
        assert_vec3(a.eye, b.eye);
        assert_vec3(a.up, b.up);
    }

    #[test]
    fn test_basis_orthogonal_with_scaled_lengths() {
        let rotation = Quat::from_euler(glam::EulerRot::XYZ, 0.3, -1.1, 0.7);
        let (zoom, x_res, y_res) = (2.5, 1280.0, 720.0);
        let basis =
            synthesize_camera_basis(rotation, zoom, x_res, y_res).expect("valid rotation");
        let aspect = y_res / x_res;

        assert!(basis.forward.dot(basis.up).abs() < EPSILON);
        assert!(basis.forward.dot(basis.right).abs() < EPSILON);
        assert!(basis.up.dot(basis.right).abs() < EPSILON);

        assert!((basis.forward.length() - 1.0).abs() < EPSILON);
        assert!((basis.up.length() - zoom * aspect).abs() < EPSILON);
        assert!((basis.right.length() - zoom).abs() < EPSILON);
        assert!((basis.eye.length() - zoom).abs() < EPSILON);
    }

    #[test]
    fn test_zero_zoom_accepted_and_degenerate() {
        let basis =
            synthesize_camera_basis(Quat::IDENTITY, 0.0, 1.0, 1.0).expect("valid rotation");
        assert_vec3(basis.eye, Vec3::ZERO);
        assert_vec3(basis.up, Vec3::ZERO);
        assert_vec3(basis.right, Vec3::ZERO);
        // The view direction does not depend on zoom.
        assert_vec3(basis.forward, Vec3::new(0.0, 0.0, -1.0));
    }
}
