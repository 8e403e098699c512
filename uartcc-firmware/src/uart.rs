//! UART0 console plumbing
//!
//! The receive side runs entirely in the UART0 interrupt: drain the RX
//! FIFO through the framer and enqueue completed lines with zero wait.
//! The transmit side polls the TX FIFO from the menu task.

use core::convert::Infallible;

use defmt::*;
use embassy_rp::interrupt::typelevel::{Binding, Handler, Interrupt, UART0_IRQ};
use embassy_rp::pac;
use embassy_rp::uart::{Config, DataBits as RpDataBits, Parity as RpParity, StopBits as RpStopBits};

use uartcc_core::service_rx;
use uartcc_hal::uart::{DataBits, Parity, StopBits};
use uartcc_hal::{RxFifo, UartConfig, UartTx};

use crate::channels::{FRAMER, LINE_QUEUE};

/// Translate the board-agnostic link settings for the embassy driver
pub fn to_embassy_config(link: &UartConfig) -> Config {
    let mut config = Config::default();
    config.baudrate = link.baudrate;
    config.data_bits = match link.data_bits {
        DataBits::Seven => RpDataBits::DataBits7,
        DataBits::Eight => RpDataBits::DataBits8,
    };
    config.parity = match link.parity {
        Parity::None => RpParity::ParityNone,
        Parity::Even => RpParity::ParityEven,
        Parity::Odd => RpParity::ParityOdd,
    };
    config.stop_bits = match link.stop_bits {
        StopBits::One => RpStopBits::STOP1,
        StopBits::Two => RpStopBits::STOP2,
    };
    config
}

/// Unmask the UART0 receive and receive-timeout interrupts
///
/// Takes the interrupt binding so the handler is guaranteed to be installed.
pub fn enable_rx_interrupt(_irqs: impl Binding<UART0_IRQ, ConsoleRxHandler>) {
    let regs = pac::UART0;

    // Discard bytes received before the framer was ready
    while !regs.uartfr().read().rxfe() {
        let _ = regs.uartdr().read();
    }

    regs.uarticr().write(|w| {
        w.set_rxic(true);
        w.set_rtic(true);
    });
    regs.uartimsc().modify(|w| {
        w.set_rxim(true);
        w.set_rtim(true);
    });

    UART0_IRQ::unpend();
    // SAFETY: the handler only touches the framer and the queue, both ready
    unsafe { UART0_IRQ::enable() };
}

/// UART0 "data available" interrupt handler
pub struct ConsoleRxHandler;

impl Handler<UART0_IRQ> for ConsoleRxHandler {
    unsafe fn on_interrupt() {
        let report = FRAMER.lock(|framer| service_rx(&mut framer.borrow_mut(), Uart0Fifo, &LINE_QUEUE));

        // Draining the FIFO clears both sources; acknowledge in case a byte
        // arrived between the last read and now
        pac::UART0.uarticr().write(|w| {
            w.set_rxic(true);
            w.set_rtic(true);
        });

        for _ in 0..report.dropped_lines {
            warn!("UART line queue full, dropping input line");
        }
        if report.discarded_bytes > 0 {
            debug!("Line buffer full, discarded {} bytes", report.discarded_bytes);
        }
    }
}

/// UART0 receive FIFO
///
/// Bytes flagged with a framing, parity, break or overrun error are skipped.
pub struct Uart0Fifo;

impl RxFifo for Uart0Fifo {
    fn try_read(&mut self) -> Option<u8> {
        let regs = pac::UART0;
        loop {
            if regs.uartfr().read().rxfe() {
                return None;
            }
            let dr = regs.uartdr().read();
            if dr.fe() || dr.pe() || dr.be() || dr.oe() {
                continue;
            }
            return Some(dr.data());
        }
    }
}

/// Polled UART0 transmitter
pub struct Uart0Tx;

impl UartTx for Uart0Tx {
    type Error = Infallible;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let regs = pac::UART0;
        for &byte in data {
            while regs.uartfr().read().txff() {}
            regs.uartdr().write(|w| w.set_data(byte));
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        while pac::UART0.uartfr().read().busy() {}
        Ok(())
    }
}
