//! Per-wavelength optical property curves for one material layer.
//!
//! Each material carries two fixed-cardinality curves — index of refraction
//! and absorption coefficient — sampled at evenly spaced wavelengths across
//! the visible range. Wavelengths and point colors are assigned once at
//! construction; only values mutate afterwards.
//!
//! Wavelength spacing uses integer division, so when the span is not evenly
//! divisible the last point lands short of `wavelength_max`. This exact
//! rounding is part of the contract: curves constructed with the same
//! configuration sample the same wavelengths on every platform.

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, SpectralError};
use crate::material::provider::MaterialProvider;
use crate::spectrum::wavelength_to_rgba;

/// Lower edge of the sampled wavelength range, nm.
pub const WAVELENGTH_MIN: i32 = 380;
/// Upper edge of the sampled wavelength range, nm.
pub const WAVELENGTH_MAX: i32 = 760;
/// Index of refraction assigned to fresh curves (diamond-like).
pub const DEFAULT_IOR: f32 = 2.4;
/// Control points per curve in the reference configuration.
pub const DEFAULT_POINT_COUNT: usize = 20;

/// Construction parameters for [`SpectralCurves`].
///
/// Passed in explicitly by the caller — curve construction never consults
/// process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralConfig {
    /// Control points per curve. Must be at least 2.
    pub point_count: usize,
    /// First sampled wavelength, nm.
    pub wavelength_min: i32,
    /// Upper edge of the sampled range, nm.
    pub wavelength_max: i32,
    /// Initial refraction value for every point.
    pub default_ior: f32,
    /// Initial absorption value for every point.
    pub default_absorption: f32,
}

impl Default for SpectralConfig {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            wavelength_min: WAVELENGTH_MIN,
            wavelength_max: WAVELENGTH_MAX,
            default_ior: DEFAULT_IOR,
            default_absorption: 0.0,
        }
    }
}

/// One (wavelength, value) sample of an optical curve.
///
/// The display color is derived from the wavelength once, when the curve is
/// constructed, and is never recomputed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    wavelength: i32,
    /// Curve value at this wavelength — the only field that mutates.
    pub value: f32,
    color: [f32; 4],
}

impl CurvePoint {
    fn new(wavelength: i32, value: f32) -> Self {
        Self {
            wavelength,
            value,
            color: wavelength_to_rgba(wavelength as f32),
        }
    }

    /// Wavelength in nanometers. Fixed at construction.
    pub fn wavelength(&self) -> i32 {
        self.wavelength
    }

    /// RGBA display color for this point.
    pub fn color(&self) -> [f32; 4] {
        self.color
    }
}

/// Refraction and absorption curves for the currently selected material
/// layer, plus the UI's per-curve edit targets.
///
/// Point count and wavelength assignment are fixed at construction, so the
/// selected-point indices can never dangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralCurves {
    refraction: Vec<CurvePoint>,
    absorption: Vec<CurvePoint>,
    selected_refraction: usize,
    selected_absorption: usize,
}

impl SpectralCurves {
    /// Build both curves with `config.point_count` evenly spaced wavelengths
    /// over `[wavelength_min, wavelength_max]`.
    ///
    /// # Errors
    /// [`SpectralError::InvalidConfiguration`] when `point_count < 2` —
    /// spacing would be undefined.
    pub fn new(config: SpectralConfig) -> Result<Self, SpectralError> {
        if config.point_count < 2 {
            return Err(SpectralError::InvalidConfiguration(config.point_count));
        }

        // Integer step, reproduced bit-for-bit across platforms.
        let step =
            (config.wavelength_max - config.wavelength_min) / (config.point_count as i32 - 1);

        let mut refraction = Vec::with_capacity(config.point_count);
        let mut absorption = Vec::with_capacity(config.point_count);
        for i in 0..config.point_count {
            let wavelength = config.wavelength_min + i as i32 * step;
            refraction.push(CurvePoint::new(wavelength, config.default_ior));
            absorption.push(CurvePoint::new(wavelength, config.default_absorption));
        }

        Ok(Self {
            refraction,
            absorption,
            selected_refraction: 0,
            selected_absorption: 0,
        })
    }

    /// Number of control points per curve.
    pub fn point_count(&self) -> usize {
        self.refraction.len()
    }

    /// Refraction control points, ascending wavelength.
    pub fn refraction(&self) -> &[CurvePoint] {
        &self.refraction
    }

    /// Absorption control points, ascending wavelength.
    pub fn absorption(&self) -> &[CurvePoint] {
        &self.absorption
    }

    /// Overwrite every refraction point with `value`. Wavelengths, colors,
    /// and the absorption curve are untouched.
    pub fn set_constant_ior(&mut self, value: f32) {
        for point in &mut self.refraction {
            point.value = value;
        }
    }

    /// Set one refraction point's value.
    pub fn set_refraction_value(&mut self, index: usize, value: f32) -> Result<(), SpectralError> {
        let count = self.refraction.len();
        let point = self
            .refraction
            .get_mut(index)
            .ok_or(SpectralError::PointOutOfRange { index, count })?;
        point.value = value;
        Ok(())
    }

    /// Set one absorption point's value.
    pub fn set_absorption_value(&mut self, index: usize, value: f32) -> Result<(), SpectralError> {
        let count = self.absorption.len();
        let point = self
            .absorption
            .get_mut(index)
            .ok_or(SpectralError::PointOutOfRange { index, count })?;
        point.value = value;
        Ok(())
    }

    /// Index of the refraction point the UI is editing.
    pub fn selected_refraction(&self) -> usize {
        self.selected_refraction
    }

    /// Index of the absorption point the UI is editing.
    pub fn selected_absorption(&self) -> usize {
        self.selected_absorption
    }

    /// Change the refraction edit target.
    pub fn select_refraction(&mut self, index: usize) -> Result<(), SpectralError> {
        if index >= self.refraction.len() {
            return Err(SpectralError::PointOutOfRange {
                index,
                count: self.refraction.len(),
            });
        }
        self.selected_refraction = index;
        Ok(())
    }

    /// Change the absorption edit target.
    pub fn select_absorption(&mut self, index: usize) -> Result<(), SpectralError> {
        if index >= self.absorption.len() {
            return Err(SpectralError::PointOutOfRange {
                index,
                count: self.absorption.len(),
            });
        }
        self.selected_absorption = index;
        Ok(())
    }

    /// Overwrite both curves' values from the provider's data for `layer`.
    ///
    /// A per-point miss keeps that point's current values; misses are never
    /// propagated.
    pub fn pull(&mut self, provider: &dyn MaterialProvider, layer: usize) {
        for i in 0..self.refraction.len() {
            let wavelength = self.refraction[i].wavelength;
            match provider.layer_material(layer, wavelength) {
                Ok(sample) => {
                    self.refraction[i].value = sample.ior;
                    self.absorption[i].value = sample.absorption;
                }
                Err(ProviderError::Miss { .. }) => {
                    tracing::debug!("pull: layer {layer} has no data at {wavelength} nm");
                }
            }
        }
    }

    /// Write both curves' values into the provider for `layer`, in
    /// ascending-wavelength order.
    pub fn push(&self, provider: &mut dyn MaterialProvider, layer: usize) {
        for i in 0..self.refraction.len() {
            provider.set_layer_material(
                layer,
                self.refraction[i].wavelength,
                self.refraction[i].value,
                self.absorption[i].value,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::material::provider::{KEEP_CHANNEL, MaterialSample};

    const EPSILON: f32 = 1e-6;

    /// Provider that answers every query with the construction defaults,
    /// like a scene layer nothing has been written to yet.
    struct DefaultsProvider;

    impl MaterialProvider for DefaultsProvider {
        fn layer_material(
            &self,
            layer: usize,
            wavelength: i32,
        ) -> Result<MaterialSample, ProviderError> {
            Ok(MaterialSample {
                layer,
                wavelength,
                ior: DEFAULT_IOR,
                absorption: 0.0,
            })
        }

        fn set_layer_material(&mut self, _: usize, _: i32, _: f32, _: f32) {}
    }

    /// In-memory provider backed by a map, honoring the keep-channel
    /// sentinel.
    #[derive(Default)]
    struct TableProvider {
        table: HashMap<(usize, i32), (f32, f32)>,
    }

    impl MaterialProvider for TableProvider {
        fn layer_material(
            &self,
            layer: usize,
            wavelength: i32,
        ) -> Result<MaterialSample, ProviderError> {
            let (ior, absorption) = self
                .table
                .get(&(layer, wavelength))
                .copied()
                .ok_or(ProviderError::Miss { layer, wavelength })?;
            Ok(MaterialSample {
                layer,
                wavelength,
                ior,
                absorption,
            })
        }

        fn set_layer_material(&mut self, layer: usize, wavelength: i32, ior: f32, absorption: f32) {
            let entry = self
                .table
                .entry((layer, wavelength))
                .or_insert((DEFAULT_IOR, 0.0));
            if ior != KEEP_CHANNEL {
                entry.0 = ior;
            }
            if absorption != KEEP_CHANNEL {
                entry.1 = absorption;
            }
        }
    }

    #[test]
    fn test_reference_configuration_spacing() {
        let curves = SpectralCurves::new(SpectralConfig::default()).expect("valid config");
        assert_eq!(curves.point_count(), 20);
        assert_eq!(curves.refraction()[0].wavelength(), 380);
        // (760 - 380) / 19 = 20 nm exactly.
        assert_eq!(curves.refraction()[1].wavelength(), 400);
        assert_eq!(curves.refraction()[19].wavelength(), 760);
    }

    #[test]
    fn test_wavelengths_nondecreasing_and_bounded() {
        for point_count in [2, 3, 7, 20, 53] {
            let config = SpectralConfig {
                point_count,
                ..SpectralConfig::default()
            };
            let curves = SpectralCurves::new(config).expect("valid config");
            let points = curves.refraction();
            let step = (760 - 380) / (point_count as i32 - 1);

            assert_eq!(points[0].wavelength(), 380);
            for pair in points.windows(2) {
                assert!(pair[0].wavelength() <= pair[1].wavelength());
            }
            // The last point is exactly min + (n−1)·step, never past max.
            let last = points[point_count - 1].wavelength();
            assert_eq!(last, 380 + (point_count as i32 - 1) * step);
            assert!(last <= 760, "last = {last}");
        }
    }

    #[test]
    fn test_integer_division_truncates_last_wavelength() {
        // Span 380 with 8 points: step = 380 / 7 = 54, last = 380 + 7*54 = 758.
        let config = SpectralConfig {
            point_count: 8,
            ..SpectralConfig::default()
        };
        let curves = SpectralCurves::new(config).expect("valid config");
        assert_eq!(curves.refraction()[7].wavelength(), 758);
    }

    #[test]
    fn test_too_few_points_rejected() {
        for point_count in [0, 1] {
            let config = SpectralConfig {
                point_count,
                ..SpectralConfig::default()
            };
            assert_eq!(
                SpectralCurves::new(config),
                Err(SpectralError::InvalidConfiguration(point_count))
            );
        }
    }

    #[test]
    fn test_construction_defaults() {
        let curves = SpectralCurves::new(SpectralConfig::default()).expect("valid config");
        for (r, a) in curves.refraction().iter().zip(curves.absorption()) {
            assert!((r.value - DEFAULT_IOR).abs() < EPSILON);
            assert!(a.value.abs() < EPSILON);
            assert_eq!(r.wavelength(), a.wavelength());
            assert_eq!(r.color(), crate::spectrum::wavelength_to_rgba(r.wavelength() as f32));
        }
    }

    #[test]
    fn test_set_constant_ior_leaves_everything_else() {
        let mut curves = SpectralCurves::new(SpectralConfig::default()).expect("valid config");
        let colors: Vec<_> = curves.refraction().iter().map(|p| p.color()).collect();
        curves.set_constant_ior(1.33);
        for (i, point) in curves.refraction().iter().enumerate() {
            assert!((point.value - 1.33).abs() < EPSILON);
            assert_eq!(point.color(), colors[i]);
        }
        for point in curves.absorption() {
            assert!(point.value.abs() < EPSILON);
        }
    }

    #[test]
    fn test_point_edit_out_of_range() {
        let mut curves = SpectralCurves::new(SpectralConfig::default()).expect("valid config");
        assert_eq!(
            curves.set_refraction_value(20, 1.0),
            Err(SpectralError::PointOutOfRange {
                index: 20,
                count: 20
            })
        );
        assert!(curves.set_absorption_value(19, 0.25).is_ok());
        assert!((curves.absorption()[19].value - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_selection_tracked_per_curve() {
        let mut curves = SpectralCurves::new(SpectralConfig::default()).expect("valid config");
        curves.select_refraction(3).expect("in range");
        curves.select_absorption(11).expect("in range");
        assert_eq!(curves.selected_refraction(), 3);
        assert_eq!(curves.selected_absorption(), 11);
        assert!(curves.select_refraction(20).is_err());
        assert_eq!(curves.selected_refraction(), 3);
    }

    #[test]
    fn test_pull_from_defaults_provider_is_identity() {
        let mut curves = SpectralCurves::new(SpectralConfig::default()).expect("valid config");
        let before = curves.clone();
        curves.pull(&DefaultsProvider, 0);
        assert_eq!(curves, before);
    }

    #[test]
    fn test_pull_miss_keeps_last_held_values() {
        let mut curves = SpectralCurves::new(SpectralConfig::default()).expect("valid config");
        curves.set_constant_ior(1.8);
        curves.pull(&TableProvider::default(), 0);
        for point in curves.refraction() {
            assert!((point.value - 1.8).abs() < EPSILON);
        }
    }

    #[test]
    fn test_push_then_pull_round_trips() {
        let mut curves = SpectralCurves::new(SpectralConfig::default()).expect("valid config");
        for i in 0..curves.point_count() {
            curves.set_refraction_value(i, 1.3 + 0.05 * i as f32).expect("in range");
            curves.set_absorption_value(i, 0.01 * i as f32).expect("in range");
        }

        let mut provider = TableProvider::default();
        curves.push(&mut provider, 2);

        let mut restored = SpectralCurves::new(SpectralConfig::default()).expect("valid config");
        restored.pull(&provider, 2);
        assert_eq!(restored.refraction(), curves.refraction());
        assert_eq!(restored.absorption(), curves.absorption());
    }

    #[test]
    fn test_curves_serde_round_trip() {
        let mut curves = SpectralCurves::new(SpectralConfig::default()).expect("valid config");
        curves.set_constant_ior(1.52);
        let json = serde_json::to_string(&curves).expect("serialize");
        let back: SpectralCurves = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, curves);
    }
}
