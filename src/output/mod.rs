//! Frame renderers: plain text, styled terminal, and JSON lines.

pub mod json;
pub mod live;
pub mod plain;
pub mod terminal;

use crate::models::ViewState;

/// Trait for turning the display state into one frame of output.
///
/// Renderers are pure: the same state always yields the same frame.
pub trait FrameRenderer {
    fn render(&self, state: &ViewState) -> String;
}

/// Render `state` as plain text. Shorthand for [`plain::PlainRenderer`].
pub fn render(state: &ViewState) -> String {
    plain::PlainRenderer.render(state)
}
