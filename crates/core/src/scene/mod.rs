//! Scene composition: hazard state in, drawable primitives out.

pub mod composer;
pub mod hazard;
pub mod host;

pub use composer::{CameraResetTrigger, FrameInput, FrameSummary, SceneComposer, LABEL_HEIGHT};
pub use hazard::{HazardError, HazardState};
pub use host::{CameraController, HazardLabel, RenderHost};
