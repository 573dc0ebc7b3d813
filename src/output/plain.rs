//! Unstyled frame: heading, record or placeholder, timer.

use crate::constants::{HEADING, LOADING_PLACEHOLDER};
use crate::models::{UserSlot, ViewState};
use crate::output::FrameRenderer;

pub struct PlainRenderer;

impl FrameRenderer for PlainRenderer {
    fn render(&self, state: &ViewState) -> String {
        let mut out = format!("{HEADING}\n");
        match &state.user {
            UserSlot::Present(record) => {
                out.push_str(&format!("Name: {}\n", record.name));
                out.push_str(&format!("Email: {}\n", record.email));
            }
            UserSlot::Absent => {
                out.push_str(LOADING_PLACEHOLDER);
                out.push('\n');
            }
        }
        out.push_str(&format!("Timer: {} seconds\n", state.elapsed_seconds));
        out
    }
}
