//! Menu text

use super::MenuContext;
use crate::traits::{TextOutput, WriteError};

const MAIN_HEADER: &str = "\r\n\
    --------------------------------------\r\n\
    \x20     UART Command Center Menu\r\n\
    --------------------------------------\r\n";

const MAIN_ITEMS: [&str; 5] = [
    "[1] Control Lights",
    "[2] View Sensor Readings",
    "[3] System Configuration",
    "[4] Diagnostics and Logs",
    "[0] Exit",
];

const LIGHTS_ITEMS: [&str; 7] = [
    "Lights Control Menu:",
    "[1] Turn ON",
    "[2] Turn OFF",
    "[3] Increase Brightness",
    "[4] Decrease Brightness",
    "[0] Return to Main Menu",
    "Enter your choice:",
];

/// Write the menu and prompt for `context`
pub fn render<O: TextOutput + ?Sized>(context: MenuContext, out: &mut O) -> Result<(), WriteError> {
    match context {
        MenuContext::Main => {
            out.write_text(MAIN_HEADER)?;
            for item in MAIN_ITEMS {
                out.message(item)?;
            }
            // Prompt stays on the same line as the cursor
            out.write_text("Enter your choice: ")
        }
        MenuContext::Lights => {
            for item in LIGHTS_ITEMS {
                out.message(item)?;
            }
            Ok(())
        }
    }
}
