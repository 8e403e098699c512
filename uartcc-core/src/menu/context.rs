//! Menu contexts and the transition table

use crate::command::{Category, CommandRequest, LightsAction};

/// Notice shown for input that matches no menu item
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// Active menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuContext {
    /// Top-level menu
    #[default]
    Main,
    /// Lights control submenu
    Lights,
}

/// Side effect of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Navigation only
    None,
    /// Hand the request to the command router
    Route(CommandRequest),
    /// Input matched no item
    InvalidChoice,
}

/// Result of evaluating one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Context for the next iteration; `None` ends the menu loop
    pub next: Option<MenuContext>,
    /// What to do before the next iteration
    pub effect: Effect,
    /// Acknowledgement written before the effect runs
    pub notice: Option<&'static str>,
}

impl Transition {
    const fn stay(context: MenuContext, effect: Effect, notice: Option<&'static str>) -> Self {
        Self {
            next: Some(context),
            effect,
            notice,
        }
    }

    const fn go(next: MenuContext, notice: &'static str) -> Self {
        Self {
            next: Some(next),
            effect: Effect::None,
            notice: Some(notice),
        }
    }

    const fn exit(notice: &'static str) -> Self {
        Self {
            next: None,
            effect: Effect::None,
            notice: Some(notice),
        }
    }

    /// Check if this transition ends the menu loop
    pub fn is_exit(&self) -> bool {
        self.next.is_none()
    }
}

impl MenuContext {
    /// Menu that "0" returns to, `None` at the top level
    pub fn parent(&self) -> Option<MenuContext> {
        match self {
            MenuContext::Main => None,
            MenuContext::Lights => Some(MenuContext::Main),
        }
    }

    /// Evaluate one input line against this menu
    ///
    /// Input must equal a single-character item exactly. No trimming, case
    /// folding or numeric parsing: `" 1"`, `"01"` and `"10"` are all invalid.
    pub fn transition(self, input: &[u8]) -> Transition {
        use MenuContext::*;

        let choice = match input {
            [digit @ b'0'..=b'4'] => *digit - b'0',
            _ => return Transition::stay(self, Effect::InvalidChoice, None),
        };

        match (self, choice) {
            (Main, 0) => Transition::exit("Exiting menu."),
            (Main, 1) => Transition::go(Lights, "Lights control selected."),
            (Main, 2) => route(self, Category::Sensors, "Sensor readings selected."),
            (Main, 3) => route(self, Category::System, "System configuration selected."),
            (Main, 4) => route(self, Category::Diagnostics, "Diagnostics and logs selected."),

            (Lights, 0) => Transition::go(Main, "Returning to main menu..."),
            (Lights, 1) => lights(LightsAction::TurnOn, "Turning lights ON..."),
            (Lights, 2) => lights(LightsAction::TurnOff, "Turning lights OFF..."),
            (Lights, 3) => lights(LightsAction::IncreaseBrightness, "Increasing brightness..."),
            (Lights, 4) => lights(LightsAction::DecreaseBrightness, "Decreasing brightness..."),

            _ => Transition::stay(self, Effect::InvalidChoice, None),
        }
    }
}

fn route(context: MenuContext, category: Category, notice: &'static str) -> Transition {
    Transition::stay(
        context,
        Effect::Route(CommandRequest::new(category.id(), 0)),
        Some(notice),
    )
}

fn lights(action: LightsAction, notice: &'static str) -> Transition {
    Transition::stay(
        MenuContext::Lights,
        Effect::Route(CommandRequest::new(Category::Lights.id(), action.id())),
        Some(notice),
    )
}
