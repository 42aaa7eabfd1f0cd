//! Build script for onair-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates sign.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// GPIOs broken out as inputs on the board
const BOARD_INPUT_PINS: [u8; 5] = [14, 15, 26, 27, 28];

/// Longest scene text line
const MAX_TEXT_LEN: usize = 8;

const COLORS: [&str; 4] = ["black", "red", "dim_white", "gold"];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate sign.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=sign.toml");

    let config_path = Path::new("sign.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: sign.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a sign.toml configuration file.           ║\n\
            ║  Please create one in the onair-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read sign.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in sign.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_poll(&config, &mut errors);
    validate_input(&config, &mut errors);
    validate_matrix(&config, &mut errors);
    validate_scenes(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid sign configuration                               ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=sign.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check an optional integer key against an inclusive range
fn check_int(
    table: &toml::value::Table,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    match table.get(key) {
        None => {}
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => {}
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
        }
        Some(_) => errors.push(format!("[{}] {} must be an integer", section, key)),
    }
}

fn validate_poll(config: &toml::Value, errors: &mut Vec<String>) {
    if let Some(poll) = config.get("poll").and_then(|p| p.as_table()) {
        check_int(poll, "poll", "interval_ms", 1, 60_000, errors);
    }
}

fn validate_input(config: &toml::Value, errors: &mut Vec<String>) {
    let input = match config.get("input").and_then(|i| i.as_table()) {
        Some(t) => t,
        None => return,
    };

    if let Some(mode) = input.get("mode") {
        match mode.as_str() {
            Some("pin" | "on" | "off") => {}
            _ => errors.push("[input] mode must be \"pin\", \"on\" or \"off\"".to_string()),
        }
    }

    if let Some(pin) = input.get("pin") {
        match pin.as_str().map(parse_pin) {
            Some(Ok(gpio)) if BOARD_INPUT_PINS.contains(&gpio) => {}
            Some(Ok(gpio)) => errors.push(format!(
                "[input] gpio{} is not an input on this board",
                gpio
            )),
            Some(Err(e)) => errors.push(format!("[input] pin: {}", e)),
            None => errors.push("[input] pin must be a string like \"~gpio14\"".to_string()),
        }
    }

    check_int(input, "input", "samples", 1, 16, errors);
}

/// Parse a pin string like "^!gpio15" into its GPIO number
fn parse_pin(s: &str) -> Result<u8, String> {
    let mut rest = s.trim();
    let mut pulls = 0;

    loop {
        if let Some(r) = rest.strip_prefix('!') {
            rest = r;
        } else if let Some(r) = rest.strip_prefix('^').or_else(|| rest.strip_prefix('~')) {
            pulls += 1;
            rest = r;
        } else {
            break;
        }
    }

    if pulls > 1 {
        return Err("at most one of ^ and ~".to_string());
    }

    rest.strip_prefix("gpio")
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| format!("'{}' is not a gpio pin", s))
}

fn validate_matrix(config: &toml::Value, errors: &mut Vec<String>) {
    if let Some(matrix) = config.get("matrix").and_then(|m| m.as_table()) {
        check_int(matrix, "matrix", "brightness", 0, 255, errors);
        check_int(matrix, "matrix", "color_depth", 1, 8, errors);
    }
}

fn validate_scenes(config: &toml::Value, errors: &mut Vec<String>) {
    let scenes = match config.get("scene") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[scene] must be a table".to_string());
            return;
        }
        None => return,
    };

    for (name, scene) in scenes {
        let section = format!("scene.{}", name);
        if name != "off" && name != "on" {
            errors.push(format!("[{}] unknown scene, expected off or on", section));
            continue;
        }

        let scene = match scene.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("[{}] must be a table", section));
                continue;
            }
        };

        for key in ["line1", "line2"] {
            if let Some(text) = scene.get(key) {
                match text.as_str() {
                    Some(t) if t.len() <= MAX_TEXT_LEN => {}
                    Some(_) => errors.push(format!(
                        "[{}] {} longer than {} characters",
                        section, key, MAX_TEXT_LEN
                    )),
                    None => errors.push(format!("[{}] {} must be a string", section, key)),
                }
            }
        }

        check_int(scene, &section, "line1_x", -8, 31, errors);
        check_int(scene, &section, "line2_x", -8, 31, errors);

        if let Some(color) = scene.get("color") {
            if !color.as_str().is_some_and(|c| COLORS.contains(&c)) {
                errors.push(format!(
                    "[{}] color must be one of {}",
                    section,
                    COLORS.join(", ")
                ));
            }
        }

        if let Some(blank) = scene.get("blank") {
            if !blank.is_bool() {
                errors.push(format!("[{}] blank must be true or false", section));
            }
        }
    }
}
