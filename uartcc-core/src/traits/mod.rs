//! Collaborator traits
//!
//! These traits define the interface between the console logic and the
//! subsystems it drives: the text egress path and the lighting subsystem.

pub mod lights;
pub mod output;

pub use lights::{LightState, LightsControl, LightsError, DEFAULT_BRIGHTNESS, DEFAULT_STEP};
pub use output::{TextOutput, WriteError};
