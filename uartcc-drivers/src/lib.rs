//! Subsystem driver implementations
//!
//! Concrete implementations of the traits defined in uartcc-core:
//!
//! - Lighting (GPIO enable line, in-memory placeholder)

#![no_std]
#![deny(unsafe_code)]

pub mod lights;
