//! Console configuration
//!
//! The firmware embeds a `console.toml` and parses it at startup with
//! [`parse_config`]. The same limits are enforced by the firmware build
//! script so a bad file never reaches the device.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ConfigError};
pub use types::*;
