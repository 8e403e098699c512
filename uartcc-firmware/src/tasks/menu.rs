//! Menu task
//!
//! Sole consumer of the line queue. Runs the menu until the exit choice,
//! then leaves the lights in their last state and idles.

use defmt::*;

use uartcc_core::config::MenuSettings;
use uartcc_core::traits::{LightsControl, TextOutput};
use uartcc_core::{CommandRouter, Console, MenuMachine};
use uartcc_drivers::lights::GpioLights;

use crate::channels::LINE_QUEUE;
use crate::lights::LedPin;
use crate::uart::Uart0Tx;

#[embassy_executor::task]
pub async fn menu_task(lights: GpioLights<LedPin>, settings: MenuSettings) {
    info!("Menu task started");

    let mut console = Console::new(Uart0Tx);

    if settings.banner {
        announce(&mut console, "Welcome! Starting the menu...");
    }

    let mut menu = MenuMachine::new(&LINE_QUEUE, CommandRouter::new(lights), &settings);
    menu.run(&mut console).await;

    if settings.banner {
        announce(&mut console, "Menu exited. Shutting down.");
    }
    if console.flush().is_err() {
        warn!("Console flush failed");
    }

    let state = menu.router().lights().state();
    info!(
        "Menu exited: lights {}, brightness {}%, {} input lines dropped",
        state.on,
        state.brightness,
        LINE_QUEUE.dropped()
    );
}

fn announce(console: &mut Console<Uart0Tx>, text: &str) {
    if let Err(e) = console.message(text) {
        warn!("Console write failed: {:?}", Debug2Format(&e));
    }
}
