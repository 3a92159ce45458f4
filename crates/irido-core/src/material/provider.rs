//! Material property provider interface.
//!
//! The scene/layer store implements [`MaterialProvider`]; the curve store
//! only ever reaches layer materials through this trait.

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Sentinel accepted by [`MaterialProvider::set_layer_material`]: a channel
/// passed as this value is left unchanged. UI code relies on it to update
/// one channel at a time.
pub const KEEP_CHANNEL: f32 = -1.0;

/// One material query result. Transient — built for the call, not retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSample {
    /// Index of the layer the sample came from.
    pub layer: usize,
    /// Wavelength in nanometers.
    pub wavelength: i32,
    /// Index of refraction at this wavelength.
    pub ior: f32,
    /// Absorption coefficient at this wavelength.
    pub absorption: f32,
}

/// Per-layer, per-wavelength optical properties.
///
/// The current contract is single-threaded (see the crate docs). If curve
/// sampling is ever parallelized across layers, implementations must make
/// [`MaterialProvider::layer_material`] safe to call concurrently.
pub trait MaterialProvider {
    /// Optical properties of `layer` at `wavelength` nm.
    ///
    /// # Errors
    /// [`ProviderError::Miss`] when the provider has no data for the layer.
    /// Misses are recoverable — callers keep their current values.
    fn layer_material(
        &self,
        layer: usize,
        wavelength: i32,
    ) -> Result<MaterialSample, ProviderError>;

    /// Store optical properties for `layer` at `wavelength` nm.
    ///
    /// Either channel may be [`KEEP_CHANNEL`] to leave it unchanged.
    fn set_layer_material(&mut self, layer: usize, wavelength: i32, ior: f32, absorption: f32);
}
