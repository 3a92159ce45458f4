//! Scene layer stack and its material tables.
//!
//! Implements the provider interface the curve store edits through. Each
//! layer keeps a sparse per-wavelength table; wavelengths without an entry
//! read back as the constant defaults, so a freshly created layer and a
//! freshly constructed curve agree without any synchronization step.

use std::collections::BTreeMap;

use irido_core::error::ProviderError;
use irido_core::material::curve::DEFAULT_IOR;
use irido_core::material::provider::{KEEP_CHANNEL, MaterialProvider, MaterialSample};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct MaterialEntry {
    ior: f32,
    absorption: f32,
}

impl Default for MaterialEntry {
    fn default() -> Self {
        Self {
            ior: DEFAULT_IOR,
            absorption: 0.0,
        }
    }
}

/// One scene layer: a display name plus its per-wavelength material table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Display name shown by the layer list.
    pub name: String,
    spectra: BTreeMap<i32, MaterialEntry>,
}

impl Layer {
    /// Create an empty layer. Every wavelength reads back as the defaults
    /// until something is written.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spectra: BTreeMap::new(),
        }
    }

    /// Number of wavelengths with explicit entries.
    pub fn sample_count(&self) -> usize {
        self.spectra.len()
    }
}

/// Ordered stack of scene layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer; returns its index.
    pub fn add_layer(&mut self, name: impl Into<String>) -> usize {
        self.layers.push(Layer::new(name));
        self.layers.len() - 1
    }

    /// Remove and return the layer at `index`, shifting later layers down.
    pub fn remove_layer(&mut self, index: usize) -> Option<Layer> {
        if index < self.layers.len() {
            Some(self.layers.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl MaterialProvider for LayerStack {
    fn layer_material(
        &self,
        layer: usize,
        wavelength: i32,
    ) -> Result<MaterialSample, ProviderError> {
        let entry = self
            .layers
            .get(layer)
            .ok_or(ProviderError::Miss { layer, wavelength })?
            .spectra
            .get(&wavelength)
            .copied()
            .unwrap_or_default();

        Ok(MaterialSample {
            layer,
            wavelength,
            ior: entry.ior,
            absorption: entry.absorption,
        })
    }

    fn set_layer_material(&mut self, layer: usize, wavelength: i32, ior: f32, absorption: f32) {
        let Some(target) = self.layers.get_mut(layer) else {
            tracing::warn!("set_layer_material: no layer {layer}, write dropped");
            return;
        };

        let entry = target.spectra.entry(wavelength).or_default();
        if ior != KEEP_CHANNEL {
            entry.ior = ior;
        }
        if absorption != KEEP_CHANNEL {
            entry.absorption = absorption;
        }
    }
}
