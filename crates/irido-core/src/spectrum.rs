//! Wavelength to display color conversion.
//!
//! Piecewise-linear approximation of perceived color across the visible
//! spectrum, used to tint curve control points in the UI. Presentation
//! only — this never feeds the physical simulation.
//!
//! # Algorithm
//! Six chroma bands between the breakpoints 380, 440, 490, 510, 580, 645
//! and 781 nm, with linear ramps inside each band; an intensity falloff
//! toward both edges of the range (full intensity between 420 and 701 nm);
//! then a per-channel gamma:
//! ```text
//! channel = channel == 0 ? 0 : (channel × intensity)^0.80
//! ```
//! Wavelengths outside [380, 781) fall into the all-zero band with zero
//! intensity and come out black.

/// Gamma applied per channel after the intensity falloff.
const GAMMA: f32 = 0.80;

/// Map a wavelength in nanometers to an RGBA display color.
///
/// Alpha is always 1. Out-of-range wavelengths degrade to opaque black
/// rather than erroring. Pure and stateless — safe to call from any thread.
pub fn wavelength_to_rgba(nm: f32) -> [f32; 4] {
    let (r, g, b) = if (380.0..440.0).contains(&nm) {
        (-(nm - 440.0) / (440.0 - 380.0), 0.0, 1.0)
    } else if (440.0..490.0).contains(&nm) {
        (0.0, (nm - 440.0) / (490.0 - 440.0), 1.0)
    } else if (490.0..510.0).contains(&nm) {
        (0.0, 1.0, -(nm - 510.0) / (510.0 - 490.0))
    } else if (510.0..580.0).contains(&nm) {
        ((nm - 510.0) / (580.0 - 510.0), 1.0, 0.0)
    } else if (580.0..645.0).contains(&nm) {
        (1.0, -(nm - 645.0) / (645.0 - 580.0), 0.0)
    } else if (645.0..781.0).contains(&nm) {
        (1.0, 0.0, 0.0)
    } else {
        (0.0, 0.0, 0.0)
    };

    let intensity = if (380.0..420.0).contains(&nm) {
        0.3 + 0.7 * (nm - 380.0) / (420.0 - 380.0)
    } else if (420.0..701.0).contains(&nm) {
        1.0
    } else if (701.0..781.0).contains(&nm) {
        0.3 + 0.7 * (780.0 - nm) / (780.0 - 700.0)
    } else {
        0.0
    };

    [
        shape_channel(r, intensity),
        shape_channel(g, intensity),
        shape_channel(b, intensity),
        1.0,
    ]
}

/// A zero channel stays exactly zero; anything else is attenuated and
/// gamma-corrected.
fn shape_channel(channel: f32, intensity: f32) -> f32 {
    if channel == 0.0 {
        0.0
    } else {
        (channel * intensity).powf(GAMMA)
    }
}
