//! Parser for `console.toml`
//!
//! Handles only the subset the console needs:
//! - `[uart]`, `[menu]` and `[lights]` section headers
//! - `key = value` pairs with integer or boolean values
//! - `_` digit separators in integers (`115_200`)
//! - Comments (`# ...`), whole-line or trailing
//!
//! Keys may appear in any order; missing keys keep their defaults.

use core::fmt;
use core::ops::RangeInclusive;
use core::str::FromStr;

use super::types::{
    ConsoleConfig, BAUDRATE_RANGE, BRIGHTNESS_RANGE, STEP_RANGE, YIELD_MS_RANGE,
};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Line is neither a header nor `key = value`
    MalformedLine,
    /// Key not valid in its section (or outside any section)
    UnknownKey,
    /// Value has the wrong type
    InvalidValue,
    /// Value outside the accepted range
    OutOfRange,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ConfigError::InvalidSection => "invalid section header",
            ConfigError::MalformedLine => "malformed line",
            ConfigError::UnknownKey => "unknown key",
            ConfigError::InvalidValue => "invalid value",
            ConfigError::OutOfRange => "value out of range",
        };
        f.write_str(text)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Uart,
    Menu,
    Lights,
}

/// Parse TOML text into a [`ConsoleConfig`]
pub fn parse_config(input: &str) -> Result<ConsoleConfig, ConfigError> {
    let mut config = ConsoleConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header.strip_suffix(']').ok_or(ConfigError::InvalidSection)?;
            section = parse_section_header(name)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::MalformedLine)?;
        apply_value(&mut config, section, key, value)?;
    }

    Ok(config)
}

fn parse_section_header(name: &str) -> Result<Section, ConfigError> {
    match name.trim() {
        "uart" => Ok(Section::Uart),
        "menu" => Ok(Section::Menu),
        "lights" => Ok(Section::Lights),
        _ => Err(ConfigError::InvalidSection),
    }
}

fn apply_value(
    config: &mut ConsoleConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    match (section, key) {
        (Section::Uart, "baudrate") => {
            config.uart.baudrate = parse_in_range(value, BAUDRATE_RANGE)?;
        }
        (Section::Menu, "yield_ms") => {
            config.menu.yield_ms = parse_in_range(value, YIELD_MS_RANGE)?;
        }
        (Section::Menu, "banner") => {
            config.menu.banner = parse_bool(value)?;
        }
        (Section::Lights, "initial_brightness") => {
            config.lights.initial_brightness = parse_in_range(value, BRIGHTNESS_RANGE)?;
        }
        (Section::Lights, "step") => {
            config.lights.step = parse_in_range(value, STEP_RANGE)?;
        }
        _ => return Err(ConfigError::UnknownKey),
    }
    Ok(())
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn parse_int<T: FromStr>(value: &str) -> Result<T, ConfigError> {
    if value.starts_with('_') || value.ends_with('_') || value.contains("__") {
        return Err(ConfigError::InvalidValue);
    }

    let mut digits: heapless::String<16> = heapless::String::new();
    for c in value.chars().filter(|&c| c != '_') {
        digits.push(c).map_err(|_| ConfigError::OutOfRange)?;
    }
    digits.parse().map_err(|_| ConfigError::InvalidValue)
}

/// Integers that parse but overflow `T` are reported as out of range
fn parse_in_range<T>(value: &str, range: RangeInclusive<T>) -> Result<T, ConfigError>
where
    T: PartialOrd + TryFrom<i64>,
{
    let wide: i64 = parse_int(value)?;
    let narrow = T::try_from(wide).map_err(|_| ConfigError::OutOfRange)?;
    if range.contains(&narrow) {
        Ok(narrow)
    } else {
        Err(ConfigError::OutOfRange)
    }
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(parse_config(""), Ok(ConsoleConfig::default()));
        assert_eq!(parse_config("# nothing here\n\n"), Ok(ConsoleConfig::default()));
    }

    #[test]
    fn test_full_file() {
        let input = r#"
# Console settings
[uart]
baudrate = 57_600

[menu]
yield_ms = 25   # pause between lines
banner = false

[lights]
initial_brightness = 70
step = 5
"#;
        let config = parse_config(input).unwrap();
        assert_eq!(config.uart.baudrate, 57_600);
        assert_eq!(config.menu.yield_ms, 25);
        assert!(!config.menu.banner);
        assert_eq!(config.lights.initial_brightness, 70);
        assert_eq!(config.lights.step, 5);
    }

    #[test]
    fn test_partial_keeps_defaults() {
        let config = parse_config("[lights]\nstep = 20\n").unwrap();
        assert_eq!(config.lights.step, 20);
        assert_eq!(config.lights.initial_brightness, 50);
        assert_eq!(config.uart.baudrate, 115_200);
        assert_eq!(config.menu.yield_ms, 10);
        assert!(config.menu.banner);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_config("[motors]"), Err(ConfigError::InvalidSection));
        assert_eq!(parse_config("[uart"), Err(ConfigError::InvalidSection));
        assert_eq!(parse_config("baudrate = 9600"), Err(ConfigError::UnknownKey));
        assert_eq!(parse_config("[uart]\nparity = 1"), Err(ConfigError::UnknownKey));
        assert_eq!(parse_config("[uart]\nbaudrate"), Err(ConfigError::MalformedLine));
        assert_eq!(parse_config("[uart]\nbaudrate = fast"), Err(ConfigError::InvalidValue));
        assert_eq!(parse_config("[uart]\nbaudrate = _9600"), Err(ConfigError::InvalidValue));
        assert_eq!(parse_config("[menu]\nbanner = yes"), Err(ConfigError::InvalidValue));
    }

    #[test]
    fn test_ranges() {
        assert_eq!(parse_config("[uart]\nbaudrate = 300"), Err(ConfigError::OutOfRange));
        assert_eq!(parse_config("[menu]\nyield_ms = 5000"), Err(ConfigError::OutOfRange));
        assert_eq!(
            parse_config("[lights]\ninitial_brightness = 101"),
            Err(ConfigError::OutOfRange)
        );
        assert_eq!(parse_config("[lights]\nstep = 0"), Err(ConfigError::OutOfRange));
        assert_eq!(parse_config("[lights]\nstep = -10"), Err(ConfigError::OutOfRange));
        assert_eq!(parse_config("[lights]\nstep = 300"), Err(ConfigError::OutOfRange));
        assert!(parse_config("[lights]\ninitial_brightness = 0").is_ok());
    }
}
