//! Configuration loading
//!
//! The console configuration is compiled into the image from
//! `console.toml` (validated by build.rs) and parsed at startup.

use defmt::*;

use uartcc_core::config::{parse_config, ConsoleConfig};

/// Embedded configuration (compiled into firmware)
/// Edit console.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../console.toml");

/// Parse the embedded configuration, falling back to defaults
pub fn load_config() -> ConsoleConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            log_config_summary(&config);
            config
        }
        Err(e) => {
            // build.rs rejects invalid files, so this only happens if the
            // two validators disagree
            error!("Failed to parse embedded config: {:?}", Debug2Format(&e));
            error!("Using default configuration");
            ConsoleConfig::default()
        }
    }
}

fn log_config_summary(config: &ConsoleConfig) {
    debug!("  uart: {} baud", config.uart.baudrate);
    debug!(
        "  menu: yield {} ms, banner {}",
        config.menu.yield_ms, config.menu.banner
    );
    debug!(
        "  lights: brightness {}%, step {}%",
        config.lights.initial_brightness, config.lights.step
    );
}
