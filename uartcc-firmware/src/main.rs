//! UART Command Center - serial menu console firmware
//!
//! Main firmware binary for RP2040-based boards. UART0 (GPIO0 TX, GPIO1 RX)
//! carries the console; the onboard LED (GPIO25) stands in for the lamp.
//!
//! Input path: UART0 interrupt -> line framer -> line queue -> menu task.
//! Output path: menu task -> polled UART0 transmitter.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::uart::Uart;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use uartcc_drivers::lights::GpioLights;
use uartcc_hal::UartConfig;

mod channels;
mod config;
mod lights;
mod tasks;
mod uart;

bind_interrupts!(struct Irqs {
    UART0_IRQ => uart::ConsoleRxHandler;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("UART command center starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();

    // Setup UART0 for the console. The driver only configures the block;
    // data moves through the receive interrupt and the polled transmitter.
    let link = UartConfig::with_baudrate(config.uart.baudrate);
    let _console_uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart::to_embassy_config(&link));

    // Stale lines from a previous run must not reach the new menu
    channels::LINE_QUEUE.clear();
    uart::enable_rx_interrupt(Irqs);
    info!("UART0 initialized at {} baud, RX interrupt enabled", link.baudrate);

    // Onboard LED as the lamp enable line
    let led = lights::LedPin::new(Output::new(p.PIN_25, Level::Low));
    let lights = GpioLights::new_active_high(led, &config.lights);
    info!(
        "Lights initialized with default brightness: {}%",
        config.lights.initial_brightness
    );

    spawner.spawn(tasks::menu_task(lights, config.menu)).unwrap();

    info!("Menu task spawned, firmware running");

    // Keeps `_console_uart` alive for the lifetime of the firmware
    loop {
        Timer::after_secs(60).await;
        trace!(
            "Main loop heartbeat, {} input lines dropped so far",
            channels::LINE_QUEUE.dropped()
        );
    }
}
