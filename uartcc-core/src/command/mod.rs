//! Command model
//!
//! The menu produces raw `(category, action)` pairs. [`Command::parse`] is
//! the boundary where those integers become typed requests; anything that
//! does not map is reported as a [`CommandError`] instead of falling
//! through a default branch.

use core::fmt;

pub mod router;

pub use router::{CommandRouter, RouteOutcome};

/// Raw category/action pair as selected from a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandRequest {
    pub category: i32,
    pub action: i32,
}

impl CommandRequest {
    pub const fn new(category: i32, action: i32) -> Self {
        Self { category, action }
    }
}

/// Subsystem a command is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    Lights,
    Sensors,
    System,
    Diagnostics,
}

impl Category {
    /// Wire number of this category
    pub const fn id(self) -> i32 {
        match self {
            Category::Lights => 1,
            Category::Sensors => 2,
            Category::System => 3,
            Category::Diagnostics => 4,
        }
    }
}

impl TryFrom<i32> for Category {
    type Error = CommandError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Category::Lights),
            2 => Ok(Category::Sensors),
            3 => Ok(Category::System),
            4 => Ok(Category::Diagnostics),
            other => Err(CommandError::UnknownCategory(other)),
        }
    }
}

/// Operations of the lighting subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightsAction {
    TurnOn,
    TurnOff,
    IncreaseBrightness,
    DecreaseBrightness,
}

impl LightsAction {
    /// Action number within the lights category
    pub const fn id(self) -> i32 {
        match self {
            LightsAction::TurnOn => 0,
            LightsAction::TurnOff => 1,
            LightsAction::IncreaseBrightness => 2,
            LightsAction::DecreaseBrightness => 3,
        }
    }

    /// Feedback after the subsystem accepted the action
    pub const fn success_message(self) -> &'static str {
        match self {
            LightsAction::TurnOn => "Lights turned ON.",
            LightsAction::TurnOff => "Lights turned OFF.",
            LightsAction::IncreaseBrightness => "Brightness increased.",
            LightsAction::DecreaseBrightness => "Brightness decreased.",
        }
    }

    /// Feedback after the subsystem rejected the action
    pub const fn failure_message(self) -> &'static str {
        match self {
            LightsAction::TurnOn => "Failed to turn lights ON.",
            LightsAction::TurnOff => "Failed to turn lights OFF.",
            LightsAction::IncreaseBrightness => "Failed to increase brightness.",
            LightsAction::DecreaseBrightness => "Failed to decrease brightness.",
        }
    }
}

impl TryFrom<i32> for LightsAction {
    type Error = CommandError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(LightsAction::TurnOn),
            1 => Ok(LightsAction::TurnOff),
            2 => Ok(LightsAction::IncreaseBrightness),
            3 => Ok(LightsAction::DecreaseBrightness),
            other => Err(CommandError::UnknownLightsAction(other)),
        }
    }
}

/// A request that names a known subsystem operation
///
/// Sensors, system and diagnostics carry their raw action number; those
/// subsystems accept every action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Lights(LightsAction),
    Sensors(i32),
    System(i32),
    Diagnostics(i32),
}

impl Command {
    /// Turn a raw request into a typed command
    pub fn parse(request: CommandRequest) -> Result<Self, CommandError> {
        let command = match Category::try_from(request.category)? {
            Category::Lights => Command::Lights(LightsAction::try_from(request.action)?),
            Category::Sensors => Command::Sensors(request.action),
            Category::System => Command::System(request.action),
            Category::Diagnostics => Command::Diagnostics(request.action),
        };
        Ok(command)
    }

    /// Category this command belongs to
    pub fn category(&self) -> Category {
        match self {
            Command::Lights(_) => Category::Lights,
            Command::Sensors(_) => Category::Sensors,
            Command::System(_) => Category::System,
            Command::Diagnostics(_) => Category::Diagnostics,
        }
    }
}

impl TryFrom<CommandRequest> for Command {
    type Error = CommandError;

    fn try_from(request: CommandRequest) -> Result<Self, Self::Error> {
        Command::parse(request)
    }
}

/// Request that does not name a known operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Category number outside 1..=4
    UnknownCategory(i32),
    /// Lights action number outside 0..=3
    UnknownLightsAction(i32),
}

impl CommandError {
    /// Notice shown to the user
    pub const fn message(self) -> &'static str {
        match self {
            CommandError::UnknownCategory(_) => "Invalid command category.",
            CommandError::UnknownLightsAction(_) => "Invalid lights action.",
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCategory(id) => write!(f, "unknown command category {}", id),
            CommandError::UnknownLightsAction(id) => write!(f, "unknown lights action {}", id),
        }
    }
}
