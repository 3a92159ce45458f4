//! Spectral material model — per-wavelength optical property curves and the
//! provider interface to the scene layer store.

pub mod curve;
pub mod provider;

pub use curve::{CurvePoint, SpectralConfig, SpectralCurves};
pub use provider::{KEEP_CHANNEL, MaterialProvider, MaterialSample};
