//! Command router
//!
//! Total mapping from a [`CommandRequest`] to a subsystem call. Every
//! request ends in a user-visible notice; nothing is returned as an error.

use core::fmt::Write as _;

use heapless::String;

use super::{Category, Command, CommandError, CommandRequest, LightsAction};
use crate::traits::output::say;
use crate::traits::{LightState, LightsControl, LightsError, TextOutput};

/// What routing a request did
///
/// Informational only. The user has already been told.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RouteOutcome {
    /// Lighting action performed
    Applied,
    /// Lighting subsystem refused the action
    Failed(LightsError),
    /// Category accepted but has no behavior yet
    NotImplemented(Category),
    /// Category number not recognized
    InvalidCategory(i32),
    /// Lights action number not recognized
    InvalidAction(i32),
}

impl RouteOutcome {
    /// Check if the lighting state may have changed
    pub fn is_applied(&self) -> bool {
        matches!(self, RouteOutcome::Applied)
    }
}

/// Dispatches commands to the lighting subsystem and the placeholders
pub struct CommandRouter<L> {
    lights: L,
}

impl<L: LightsControl> CommandRouter<L> {
    pub fn new(lights: L) -> Self {
        Self { lights }
    }

    /// Lighting subsystem
    pub fn lights(&self) -> &L {
        &self.lights
    }

    pub fn lights_mut(&mut self) -> &mut L {
        &mut self.lights
    }

    pub fn into_inner(self) -> L {
        self.lights
    }

    /// Route one request, reporting the result on `out`
    pub fn route<O: TextOutput>(&mut self, request: CommandRequest, out: &mut O) -> RouteOutcome {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "route: category={} action={}",
            request.category,
            request.action
        );

        match Command::parse(request) {
            Ok(Command::Lights(action)) => self.lights_action(action, out),
            Ok(command) => {
                let category = command.category();
                say(out, not_implemented_message(category));
                RouteOutcome::NotImplemented(category)
            }
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("rejected command: {}", err);

                say(out, err.message());
                match err {
                    CommandError::UnknownCategory(id) => RouteOutcome::InvalidCategory(id),
                    CommandError::UnknownLightsAction(id) => RouteOutcome::InvalidAction(id),
                }
            }
        }
    }

    fn lights_action<O: TextOutput>(&mut self, action: LightsAction, out: &mut O) -> RouteOutcome {
        let result = match action {
            LightsAction::TurnOn => self.lights.turn_on(),
            LightsAction::TurnOff => self.lights.turn_off(),
            LightsAction::IncreaseBrightness => self.lights.increase_brightness(),
            LightsAction::DecreaseBrightness => self.lights.decrease_brightness(),
        };

        match result {
            Ok(()) => {
                say(out, action.success_message());
                say(out, &format_state(&self.lights.state()));
                RouteOutcome::Applied
            }
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::error!("lights action {} failed: {}", action, err);

                say(out, action.failure_message());
                RouteOutcome::Failed(err)
            }
        }
    }
}

fn not_implemented_message(category: Category) -> &'static str {
    match category {
        Category::Sensors => "Sensor readings not implemented.",
        Category::System => "System configuration not implemented.",
        Category::Diagnostics => "Diagnostics not implemented.",
        // Lights never reaches here
        Category::Lights => "Lights control not implemented.",
    }
}

/// Render `Lights: ON, brightness 60%`
fn format_state(state: &LightState) -> String<32> {
    let mut text = String::new();
    // Longest rendering is 28 bytes
    let _ = write!(
        text,
        "Lights: {}, brightness {}%",
        if state.on { "ON" } else { "OFF" },
        state.brightness
    );
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeLights, Transcript};

    #[test]
    fn test_turn_on_reports_state() {
        let mut router = CommandRouter::new(FakeLights::default());
        let mut out = Transcript::default();

        let outcome = router.route(CommandRequest::new(1, 0), &mut out);

        assert_eq!(outcome, RouteOutcome::Applied);
        assert!(router.lights().state().on);
        assert_eq!(out.text(), "Lights turned ON.\r\nLights: ON, brightness 50%\r\n");
    }

    #[test]
    fn test_brightness_steps() {
        let mut router = CommandRouter::new(FakeLights::default());
        let mut out = Transcript::default();

        router.route(CommandRequest::new(1, 2), &mut out);
        assert_eq!(router.lights().state().brightness, 60);
        router.route(CommandRequest::new(1, 3), &mut out);
        router.route(CommandRequest::new(1, 3), &mut out);
        assert_eq!(router.lights().state().brightness, 40);
        assert!(out.contains("Brightness decreased.\r\nLights: OFF, brightness 40%\r\n"));
    }

    #[test]
    fn test_invalid_lights_action() {
        let mut router = CommandRouter::new(FakeLights::default());
        let mut out = Transcript::default();

        let outcome = router.route(CommandRequest::new(1, 99), &mut out);

        assert_eq!(outcome, RouteOutcome::InvalidAction(99));
        assert_eq!(router.lights().state(), LightState::default());
        assert_eq!(out.text(), "Invalid lights action.\r\n");
    }

    #[test]
    fn test_invalid_category() {
        let mut router = CommandRouter::new(FakeLights::default());
        let mut out = Transcript::default();

        assert_eq!(
            router.route(CommandRequest::new(99, 0), &mut out),
            RouteOutcome::InvalidCategory(99)
        );
        assert_eq!(out.text(), "Invalid command category.\r\n");
    }

    #[test]
    fn test_placeholders() {
        let mut router = CommandRouter::new(FakeLights::default());
        let mut out = Transcript::default();

        assert_eq!(
            router.route(CommandRequest::new(2, 0), &mut out),
            RouteOutcome::NotImplemented(Category::Sensors)
        );
        assert_eq!(
            router.route(CommandRequest::new(3, 0), &mut out),
            RouteOutcome::NotImplemented(Category::System)
        );
        assert_eq!(
            router.route(CommandRequest::new(4, 0), &mut out),
            RouteOutcome::NotImplemented(Category::Diagnostics)
        );
        assert_eq!(
            out.text(),
            "Sensor readings not implemented.\r\n\
             System configuration not implemented.\r\n\
             Diagnostics not implemented.\r\n"
        );
    }

    #[test]
    fn test_subsystem_failure_is_reported() {
        let mut router = CommandRouter::new(FakeLights::failing(LightsError::Hardware));
        let mut out = Transcript::default();

        let outcome = router.route(CommandRequest::new(1, 0), &mut out);

        assert_eq!(outcome, RouteOutcome::Failed(LightsError::Hardware));
        assert!(!router.lights().state().on);
        assert_eq!(out.text(), "Failed to turn lights ON.\r\n");
    }

    #[test]
    fn test_router_totality() {
        for category in [1, 2, 3, 4, 99] {
            for action in [0, 1, 2, 3, 99] {
                let mut router = CommandRouter::new(FakeLights::default());
                let mut out = Transcript::default();

                let outcome = router.route(CommandRequest::new(category, action), &mut out);

                assert!(!out.text().is_empty());
                let mutating = category == 1 && (0..=3).contains(&action);
                assert_eq!(outcome.is_applied(), mutating);
                assert_eq!(router.lights().calls(), usize::from(mutating));
                if !mutating {
                    assert_eq!(router.lights().state(), LightState::default());
                }
            }
        }
    }

    #[test]
    fn test_state_line_fits() {
        let state = LightState {
            on: false,
            brightness: 100,
        };
        assert_eq!(format_state(&state).as_str(), "Lights: OFF, brightness 100%");
    }
}
