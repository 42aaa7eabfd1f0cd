//! Configuration loading
//!
//! The sign is configured by sign.toml, compiled into the firmware and
//! already validated by build.rs.

use defmt::*;

use onair_core::config::{parse_config, SignConfig};

/// Embedded configuration (compiled into firmware)
/// Edit sign.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../sign.toml");

/// Parse the embedded configuration
///
/// Falls back to the built-in defaults if parsing fails.
pub fn load() -> SignConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            // Only reachable if build.rs and the runtime parser disagree
            error!("Failed to parse embedded config: {}", e);
            error!("Using default configuration");
            SignConfig::default()
        }
    }
}
