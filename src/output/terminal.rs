//! Styled frame for interactive terminals.

use colored::Colorize;

use crate::constants::{HEADING, LOADING_PLACEHOLDER};
use crate::models::{UserSlot, ViewState};
use crate::output::FrameRenderer;

/// Indented, colored frame. Colors follow `colored`'s global override,
/// so `--no-color` and `NO_COLOR` strip them.
pub struct TerminalRenderer;

impl FrameRenderer for TerminalRenderer {
    fn render(&self, state: &ViewState) -> String {
        let mut out = format!("  {} {}\n", "▸".cyan().bold(), HEADING.bold());
        match &state.user {
            UserSlot::Present(record) => {
                out.push_str(&format!("    {}  {}\n", "Name:".cyan(), record.name.bold()));
                out.push_str(&format!("    {} {}\n", "Email:".cyan(), record.email));
            }
            UserSlot::Absent => {
                out.push_str(&format!("    {} {}\n", "◌".dimmed(), LOADING_PLACEHOLDER.dimmed()));
            }
        }
        out.push_str(&format!(
            "    {} {} seconds\n",
            "Timer:".cyan(),
            state.elapsed_seconds.to_string().green()
        ));
        out
    }
}
