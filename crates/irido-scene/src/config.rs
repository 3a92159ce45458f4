//! Runtime configuration for the viewer.

use irido_core::material::curve::SpectralConfig;

/// Default window width.
const DEFAULT_WIDTH: u32 = 1280;
/// Default window height.
const DEFAULT_HEIGHT: u32 = 720;

/// Configuration assembled at startup and passed down explicitly — core
/// operations never consult process-wide state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    /// Window width in physical pixels.
    pub width: u32,
    /// Window height in physical pixels.
    pub height: u32,
    /// Curve construction parameters handed to the material model.
    pub spectral: SpectralConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let mut spectral = SpectralConfig::default();
        if let Some(count) = env_parse("IRIDO_CURVE_POINTS") {
            spectral.point_count = count;
        }
        Self {
            width: env_parse("IRIDO_WIDTH").unwrap_or(DEFAULT_WIDTH),
            height: env_parse("IRIDO_HEIGHT").unwrap_or(DEFAULT_HEIGHT),
            spectral,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}
