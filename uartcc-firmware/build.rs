//! Build script for uartcc-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates console.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys accepted per section: (name, kind, min, max)
///
/// Ranges must match `uartcc_core::config::types`.
const SCHEMA: &[(&str, &[(&str, Kind, i64, i64)])] = &[
    ("uart", &[("baudrate", Kind::Integer, 1200, 1_000_000)]),
    (
        "menu",
        &[
            ("yield_ms", Kind::Integer, 0, 1000),
            ("banner", Kind::Boolean, 0, 1),
        ],
    ),
    (
        "lights",
        &[
            ("initial_brightness", Kind::Integer, 0, 100),
            ("step", Kind::Integer, 1, 100),
        ],
    ),
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind {
    Integer,
    Boolean,
}

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate console.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=console.toml");

    let config_path = Path::new("console.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: console.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds console.toml as its configuration.          ║\n\
            ║  Please create one in the uartcc-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read console.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in console.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let errors = validate_sections(&config);
    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid console configuration                            ║\n\
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

    println!("cargo:warning=console.toml validated successfully");
}

/// Check every section and key against the schema
fn validate_sections(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(t) => t,
        None => return vec!["top level must be a table".to_string()],
    };

    for (section, body) in root {
        let keys = match SCHEMA.iter().find(|(name, _)| *name == section.as_str()) {
            Some((_, keys)) => *keys,
            None => {
                errors.push(format!("unknown section [{}]", section));
                continue;
            }
        };

        let body = match body {
            toml::Value::Table(t) => t,
            _ => {
                errors.push(format!("[{}] must be a table", section));
                continue;
            }
        };

        for (key, value) in body {
            let Some(&(_, kind, min, max)) = keys.iter().find(|(name, ..)| *name == key.as_str()) else {
                errors.push(format!("[{}] unknown key '{}'", section, key));
                continue;
            };

            match (kind, value) {
                (Kind::Integer, toml::Value::Integer(v)) => {
                    if *v < min || *v > max {
                        errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
                    }
                }
                (Kind::Boolean, toml::Value::Boolean(_)) => {}
                (Kind::Integer, _) => {
                    errors.push(format!("[{}] {} must be an integer", section, key));
                }
                (Kind::Boolean, _) => {
                    errors.push(format!("[{}] {} must be true or false", section, key));
                }
            }
        }
    }

    errors
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
