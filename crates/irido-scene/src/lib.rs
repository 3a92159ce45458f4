//! Irido Scene — scene-side collaborators for the spectral viewer.
//!
//! Holds the layer stack the material curves pull from and push to, the
//! render camera rig the basis synthesis writes into, the preview-scene
//! state, and the viewer's runtime configuration. Windowing, widgets, and
//! GL calls live elsewhere.

pub mod config;
pub mod layers;
pub mod preview;
pub mod rig;

// Re-exports for convenience.
pub use config::ViewerConfig;
pub use layers::{Layer, LayerStack};
pub use preview::{MoveDirection, PreviewCamera, SpinState};
pub use rig::CameraRig;
