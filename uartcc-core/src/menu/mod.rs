//! Menu navigation
//!
//! The active menu is a plain [`MenuContext`] value. Each input line is
//! evaluated by [`MenuContext::transition`], a pure function returning the
//! next context and the effect to perform. [`MenuMachine`] owns the loop:
//! render, wait for a line, apply the transition, yield.

pub mod context;
pub mod machine;
pub mod render;

pub use context::{Effect, MenuContext, Transition, INVALID_CHOICE};
pub use machine::{Flow, MenuMachine};
pub use render::render;
