//! Irido Core — domain layer for the spectral viewer.
//!
//! This crate contains the spectral material model (per-wavelength optical
//! property curves), the wavelength-to-display-color mapping, and the
//! camera/light orientation math. No GPU or framework dependencies.
//!
//! Everything here is either pure or single-owner mutable state driven by
//! the thread that runs the frame loop; no operation blocks, suspends, or
//! spawns work.

pub mod camera;
pub mod error;
pub mod material;
pub mod spectrum;

// Re-exports for convenience.
pub use camera::basis::{CameraBasis, synthesize_camera_basis};
pub use camera::light::{LightRotationSink, LightRotationState, compose_light_rotation};
pub use error::{CameraError, ProviderError, SpectralError};
pub use material::curve::{CurvePoint, SpectralConfig, SpectralCurves};
pub use material::provider::{KEEP_CHANNEL, MaterialProvider, MaterialSample};
pub use spectrum::wavelength_to_rgba;
