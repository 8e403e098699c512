//! Embassy async tasks

pub mod menu;

pub use menu::menu_task;
