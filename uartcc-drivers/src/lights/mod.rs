//! Lighting subsystem implementations

pub mod gpio;
pub mod memory;

pub use gpio::GpioLights;
pub use memory::MemoryLights;
