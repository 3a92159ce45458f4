//! Camera and light orientation math.

pub mod basis;
pub mod light;

pub use basis::{CameraBasis, synthesize_camera_basis};
pub use light::{LightRotationSink, LightRotationState, compose_light_rotation};
