use thiserror::Error;

/// Errors from spectral curve construction and editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpectralError {
    /// Fewer than two control points leaves the wavelength spacing
    /// undefined.
    #[error("curve needs at least 2 control points, got {0}")]
    InvalidConfiguration(usize),
    /// Point index beyond the fixed cardinality chosen at construction.
    #[error("control point {index} out of range for a {count}-point curve")]
    PointOutOfRange { index: usize, count: usize },
}

/// Errors from camera basis synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CameraError {
    /// A zero-norm quaternion has no defined inverse.
    #[error("rotation quaternion has zero norm")]
    InvalidRotation,
}

/// Errors from material providers.
///
/// A miss is recoverable by contract: callers keep whatever values they
/// already hold and carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider has no material data for this layer/wavelength.
    #[error("no material data for layer {layer} at {wavelength} nm")]
    Miss { layer: usize, wavelength: i32 },
}
