//! Simple TOML parser for the sign configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! `sign.toml`. It does NOT support all of TOML; the build script
//! checks the file against a real TOML parser on the host.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - [section] headers
//! - [section.subsection] headers
//! - Comments (# ...)
//!
//! Unknown keys are ignored so older firmware accepts newer files.

use heapless::String;

use super::types::{
    InputMode, InputPull, PinConfig, SceneConfig, SignConfig, MAX_GPIO, MAX_INPUT_SAMPLES,
};
use crate::scene::{PaletteColor, MAX_TEXT_LEN};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Invalid value type
    InvalidValue,
    /// Value parsed but outside the allowed range
    OutOfRange,
    /// Text longer than a scene line can hold
    TextTooLong,
    /// Invalid pin string
    InvalidPin,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Poll,
    Input,
    Matrix,
    SceneOff,
    SceneOn,
}

/// Parse TOML configuration into SignConfig
///
/// Missing sections and keys keep their defaults.
pub fn parse_config(input: &str) -> Result<SignConfig, ParseError> {
    let mut config = SignConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            apply_value(section, key, value, &mut config)?;
        }
    }

    Ok(config)
}

/// Parse section header like "input" or "scene.off"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "poll" => Ok(Section::Poll),
        "input" => Ok(Section::Input),
        "matrix" => Ok(Section::Matrix),
        "scene.off" => Ok(Section::SceneOff),
        "scene.on" => Ok(Section::SceneOn),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse scene text that must fit on one line
fn parse_text(value: &str) -> Result<String<MAX_TEXT_LEN>, ParseError> {
    String::try_from(parse_string(value)).map_err(|_| ParseError::TextTooLong)
}

/// Parse a pin string like "gpio14", "!gpio14", "^!gpio14", "~gpio14"
fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let mut s = parse_string(value);
    let mut inverted = false;
    let mut pull = InputPull::None;

    // Check for modifiers
    loop {
        if let Some(rest) = s.strip_prefix('!') {
            inverted = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('^') {
            pull = InputPull::Up;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('~') {
            pull = InputPull::Down;
            s = rest;
        } else {
            break;
        }
    }

    let num = s.strip_prefix("gpio").ok_or(ParseError::InvalidPin)?;
    let pin: u8 = num.parse().map_err(|_| ParseError::InvalidPin)?;
    if pin > MAX_GPIO {
        return Err(ParseError::InvalidPin);
    }

    Ok(PinConfig {
        pin,
        inverted,
        pull,
    })
}

/// Parse the input mode: "pin", "on" or "off"
fn parse_input_mode(value: &str) -> Result<InputMode, ParseError> {
    match parse_string(value) {
        "pin" => Ok(InputMode::Pin),
        "on" => Ok(InputMode::ForceOn),
        "off" => Ok(InputMode::ForceOff),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a palette color name
fn parse_color(value: &str) -> Result<PaletteColor, ParseError> {
    match parse_string(value) {
        "black" => Ok(PaletteColor::Black),
        "red" => Ok(PaletteColor::Red),
        "dim_white" => Ok(PaletteColor::DimWhite),
        "gold" => Ok(PaletteColor::Gold),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Check `value` lies in `min..=max`
fn in_range<T: PartialOrd>(value: T, min: T, max: T) -> Result<T, ParseError> {
    if value < min || value > max {
        Err(ParseError::OutOfRange)
    } else {
        Ok(value)
    }
}

/// Apply a key-value pair to the current section
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut SignConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Poll => match key {
            "interval_ms" => {
                config.poll.interval_ms = in_range(parse_int(value)?, 1, 60_000)?;
            }
            _ => {}
        },
        Section::Input => match key {
            "mode" => config.input.mode = parse_input_mode(value)?,
            "pin" => config.input.pin = parse_pin(value)?,
            "samples" => {
                config.input.samples = in_range(parse_int(value)?, 1, MAX_INPUT_SAMPLES)?;
            }
            _ => {}
        },
        Section::Matrix => match key {
            "brightness" => config.matrix.brightness = parse_int(value)?,
            "color_depth" => config.matrix.color_depth = in_range(parse_int(value)?, 1, 8)?,
            _ => {}
        },
        Section::SceneOff => apply_scene_value(&mut config.scenes.off, key, value)?,
        Section::SceneOn => apply_scene_value(&mut config.scenes.on, key, value)?,
        Section::Root => {
            // No root-level keys yet
        }
    }

    Ok(())
}

fn apply_scene_value(scene: &mut SceneConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "line1" => scene.line1 = parse_text(value)?,
        "line1_x" => scene.line1_x = in_range(parse_int(value)?, -8, 31)?,
        "line2" => scene.line2 = parse_text(value)?,
        "line2_x" => scene.line2_x = in_range(parse_int(value)?, -8, 31)?,
        "color" => scene.color = parse_color(value)?,
        "blank" => scene.blank = parse_bool(value)?,
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenesConfig;

    #[test]
    fn test_parse_pin() {
        let pin = parse_pin("gpio14").unwrap();
        assert_eq!(pin.pin, 14);
        assert!(!pin.inverted);
        assert_eq!(pin.pull, InputPull::None);

        let pin = parse_pin("\"~gpio15\"").unwrap();
        assert_eq!(pin.pin, 15);
        assert_eq!(pin.pull, InputPull::Down);

        let pin = parse_pin("^!gpio26").unwrap();
        assert_eq!(pin.pin, 26);
        assert!(pin.inverted);
        assert_eq!(pin.pull, InputPull::Up);

        assert_eq!(parse_pin("gpio30"), Err(ParseError::InvalidPin));
        assert_eq!(parse_pin("pa4"), Err(ParseError::InvalidPin));
    }

    #[test]
    fn test_parse_section_header() {
        assert_eq!(parse_section_header("scene.on"), Ok(Section::SceneOn));
        assert_eq!(parse_section_header(" input "), Ok(Section::Input));
        assert_eq!(
            parse_section_header("scene.maybe"),
            Err(ParseError::InvalidSection)
        );
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config("# nothing here\n\n").unwrap();
        assert_eq!(config, SignConfig::default());
        assert_eq!(config.poll.interval_ms, 1000);
        assert_eq!(config.scenes, ScenesConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
[poll]
interval_ms = 500   # twice a second

[input]
mode = "pin"
pin = "^!gpio15"
samples = 3

[matrix]
brightness = 128
color_depth = 6

[scene.off]
line1 = "Studio"
line1_x = 4
blank = true

[scene.on]
line2 = "LIVE"
color = "gold"
future_key = 42
"#;

        let config = parse_config(config_str).unwrap();
        assert_eq!(config.poll.interval_ms, 500);
        assert_eq!(config.input.mode, InputMode::Pin);
        assert_eq!(config.input.pin.pin, 15);
        assert!(config.input.pin.inverted);
        assert_eq!(config.input.pin.pull, InputPull::Up);
        assert_eq!(config.input.samples, 3);
        assert_eq!(config.matrix.brightness, 128);
        assert_eq!(config.matrix.color_depth, 6);

        assert_eq!(config.scenes.off.line1.as_str(), "Studio");
        assert_eq!(config.scenes.off.line1_x, 4);
        assert_eq!(config.scenes.off.line2.as_str(), ".Dev");
        assert!(config.scenes.off.blank);

        assert_eq!(config.scenes.on.line1.as_str(), "ON");
        assert_eq!(config.scenes.on.line2.as_str(), "LIVE");
        assert_eq!(config.scenes.on.color, PaletteColor::Gold);
    }

    #[test]
    fn test_forced_input_modes() {
        let config = parse_config("[input]\nmode = \"on\"\n").unwrap();
        assert_eq!(config.input.mode, InputMode::ForceOn);

        let config = parse_config("[input]\nmode = off\n").unwrap();
        assert_eq!(config.input.mode, InputMode::ForceOff);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            parse_config("[poll]\ninterval_ms = 0\n"),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(
            parse_config("[matrix]\ncolor_depth = 9\n"),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(
            parse_config("[input]\nsamples = fast\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[scene.on]\nline1 = \"ON AIR NOW\"\n"),
            Err(ParseError::TextTooLong)
        );
        assert_eq!(
            parse_config("[scene.on]\nblank = yes\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(parse_config("[heater]\n"), Err(ParseError::InvalidSection));
    }
}
