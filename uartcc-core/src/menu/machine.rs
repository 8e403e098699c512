//! Menu loop

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Timer};

use uartcc_protocol::Line;

use super::context::{Effect, MenuContext, INVALID_CHOICE};
use super::render::render;
use crate::command::CommandRouter;
use crate::config::MenuSettings;
use crate::queue::{LineQueue, Wait, QUEUE_DEPTH};
use crate::traits::output::{say, say_error};
use crate::traits::{LightsControl, TextOutput};

/// Whether the loop keeps going after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Flow {
    Continue,
    Exit,
}

/// Menu state machine
///
/// Sole consumer of the line queue. The context is private to the machine
/// and only changes through [`MenuContext::transition`].
pub struct MenuMachine<'q, M: RawMutex, L, const N: usize = QUEUE_DEPTH> {
    context: MenuContext,
    queue: &'q LineQueue<M, N>,
    router: CommandRouter<L>,
    read_wait: Wait,
    idle: Duration,
}

impl<'q, M: RawMutex, L: LightsControl, const N: usize> MenuMachine<'q, M, L, N> {
    /// Start in the main menu
    pub fn new(queue: &'q LineQueue<M, N>, router: CommandRouter<L>, settings: &MenuSettings) -> Self {
        Self {
            context: MenuContext::Main,
            queue,
            router,
            read_wait: Wait::Forever,
            idle: Duration::from_millis(u64::from(settings.yield_ms)),
        }
    }

    /// Bound how long each iteration waits for input
    ///
    /// The default waits forever. A bounded wait turns an idle console into
    /// a stream of "Failed to read input." notices.
    pub fn with_read_wait(mut self, wait: Wait) -> Self {
        self.read_wait = wait;
        self
    }

    /// Active menu
    pub fn context(&self) -> MenuContext {
        self.context
    }

    pub fn router(&self) -> &CommandRouter<L> {
        &self.router
    }

    pub fn into_router(self) -> CommandRouter<L> {
        self.router
    }

    /// Write the prompt for the active menu
    pub fn render<O: TextOutput>(&self, out: &mut O) {
        if let Err(_err) = render(self.context, out) {
            #[cfg(feature = "defmt")]
            defmt::warn!("menu render failed: {}", _err);
        }
    }

    /// Apply one input line to the active menu
    pub fn handle_line<O: TextOutput>(&mut self, line: &Line, out: &mut O) -> Flow {
        let transition = self.context.transition(line.as_bytes());

        if let Some(notice) = transition.notice {
            say(out, notice);
        }

        match transition.effect {
            Effect::None => {}
            Effect::Route(request) => {
                self.router.route(request, out);
            }
            Effect::InvalidChoice => say_error(out, INVALID_CHOICE),
        }

        match transition.next {
            Some(next) => {
                #[cfg(feature = "defmt")]
                if next != self.context {
                    defmt::debug!("menu: {} -> {}", self.context, next);
                }

                self.context = next;
                Flow::Continue
            }
            None => Flow::Exit,
        }
    }

    /// One iteration: render, wait for a line, apply it, yield
    pub async fn step<O: TextOutput>(&mut self, out: &mut O) -> Flow {
        self.render(out);

        let flow = match self.queue.get(self.read_wait).await {
            Ok(line) => self.handle_line(&line, out),
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("menu read failed: {}", _err);
                say_error(out, "Failed to read input.");
                Flow::Continue
            }
        };

        if flow == Flow::Continue && self.idle > Duration::from_ticks(0) {
            Timer::after(self.idle).await;
        }
        flow
    }

    /// Loop until the exit choice is made in the main menu
    pub async fn run<O: TextOutput>(&mut self, out: &mut O) {
        #[cfg(feature = "defmt")]
        defmt::info!("Starting main menu loop");

        while self.step(out).await == Flow::Continue {}

        #[cfg(feature = "defmt")]
        defmt::info!("Exiting main menu loop");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{line, FakeLights, Transcript};
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    type Queue = LineQueue<NoopRawMutex, 8>;

    fn settings() -> MenuSettings {
        MenuSettings {
            yield_ms: 0,
            ..MenuSettings::default()
        }
    }

    fn machine(queue: &Queue) -> MenuMachine<'_, NoopRawMutex, FakeLights, 8> {
        MenuMachine::new(queue, CommandRouter::new(FakeLights::default()), &settings())
    }

    #[test]
    fn test_enter_lights_without_routing() {
        let queue = Queue::new();
        let mut menu = machine(&queue);
        let mut out = Transcript::default();

        assert_eq!(menu.handle_line(&line("1"), &mut out), Flow::Continue);
        assert_eq!(menu.context(), MenuContext::Lights);
        assert_eq!(menu.router().lights().calls(), 0);
        assert_eq!(out.text(), "Lights control selected.\r\n");
    }

    #[test]
    fn test_lights_turn_on() {
        let queue = Queue::new();
        let mut menu = machine(&queue);
        let mut out = Transcript::default();

        menu.handle_line(&line("1"), &mut out);
        menu.handle_line(&line("1"), &mut out);

        assert_eq!(menu.context(), MenuContext::Lights);
        assert!(menu.router().lights().state().on);
        assert!(out.contains("Turning lights ON...\r\nLights turned ON.\r\n"));
    }

    #[test]
    fn test_exit_from_main() {
        let queue = Queue::new();
        let mut menu = machine(&queue);
        let mut out = Transcript::default();

        assert_eq!(menu.handle_line(&line("0"), &mut out), Flow::Exit);
        assert_eq!(out.text(), "Exiting menu.\r\n");
    }

    #[test]
    fn test_zero_in_submenu_returns() {
        let queue = Queue::new();
        let mut menu = machine(&queue);
        let mut out = Transcript::default();

        menu.handle_line(&line("1"), &mut out);
        assert_eq!(menu.handle_line(&line("0"), &mut out), Flow::Continue);
        assert_eq!(menu.context(), MenuContext::Main);
    }

    #[test]
    fn test_invalid_choice_keeps_context() {
        let queue = Queue::new();
        let mut menu = machine(&queue);
        let mut out = Transcript::default();

        assert_eq!(menu.handle_line(&line("12"), &mut out), Flow::Continue);
        assert_eq!(menu.context(), MenuContext::Main);
        assert_eq!(out.text(), "Error: Invalid choice. Please try again.\r\n");
    }

    #[test]
    fn test_sensors_placeholder() {
        let queue = Queue::new();
        let mut menu = machine(&queue);
        let mut out = Transcript::default();

        menu.handle_line(&line("2"), &mut out);
        assert_eq!(
            out.text(),
            "Sensor readings selected.\r\nSensor readings not implemented.\r\n"
        );
    }

    #[test]
    fn test_step_renders_then_reads() {
        let queue = Queue::new();
        queue.try_put(line("1")).unwrap();
        let mut menu = machine(&queue);
        let mut out = Transcript::default();

        assert_eq!(block_on(menu.step(&mut out)), Flow::Continue);
        assert!(out.text().starts_with("\r\n---"));
        assert!(out.text().ends_with("Enter your choice: Lights control selected.\r\n"));
    }

    #[test]
    fn test_read_failure_reprompts() {
        let queue = Queue::new();
        let mut menu = machine(&queue).with_read_wait(Wait::NoWait);
        let mut out = Transcript::default();

        assert_eq!(block_on(menu.step(&mut out)), Flow::Continue);
        assert_eq!(menu.context(), MenuContext::Main);
        assert!(out.text().ends_with("Error: Failed to read input.\r\n"));
    }

    #[test]
    fn test_run_full_session() {
        let queue = Queue::new();
        for input in ["1", "1", "3", "9", "0", "0"] {
            queue.try_put(line(input)).unwrap();
        }
        let mut menu = machine(&queue);
        let mut out = Transcript::default();

        block_on(menu.run(&mut out));

        assert!(queue.is_empty());
        let state = menu.router().lights().state();
        assert!(state.on);
        assert_eq!(state.brightness, 60);
        assert!(out.contains("Lights: ON, brightness 60%\r\n"));
        assert!(out.contains("Error: Invalid choice. Please try again.\r\n"));
        assert!(out.contains("Returning to main menu...\r\n"));
        assert!(out.text().ends_with("Exiting menu.\r\n"));
    }

    #[test]
    fn test_exit_skips_idle_wait() {
        let queue = Queue::new();
        queue.try_put(line("0")).unwrap();
        queue.try_put(line("0")).unwrap();
        let mut menu = MenuMachine::new(
            &queue,
            CommandRouter::new(FakeLights::default()),
            &MenuSettings::default(),
        );
        let mut out = Transcript::default();

        // Exit does not wait out the idle period
        assert_eq!(block_on(menu.step(&mut out)), Flow::Exit);
        assert_eq!(queue.len(), 1);
    }
}
