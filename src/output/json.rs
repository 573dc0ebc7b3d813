//! One JSON object per frame, for scripting.

use serde::Serialize;

use crate::models::{UserRecord, ViewState};
use crate::output::FrameRenderer;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonFrame<'a> {
    loading: bool,
    user: Option<&'a UserRecord>,
    elapsed_seconds: u64,
}

impl FrameRenderer for JsonRenderer {
    fn render(&self, state: &ViewState) -> String {
        let frame = JsonFrame {
            loading: state.is_loading(),
            user: state.user.record(),
            elapsed_seconds: state.elapsed_seconds,
        };
        let mut line = serde_json::to_string(&frame).unwrap_or_else(|_| "{}".to_string());
        line.push('\n');
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserSlot;

    #[test]
    fn loading_frame_has_null_user() {
        let out = JsonRenderer.render(&ViewState::default());
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["loading"], true);
        assert!(value["user"].is_null());
        assert_eq!(value["elapsed_seconds"], 0);
    }

    #[test]
    fn loaded_frame_embeds_record() {
        let state = ViewState {
            user: UserSlot::Present(UserRecord {
                name: "Ada".into(),
                email: "ada@example.com".into(),
            }),
            elapsed_seconds: 5,
        };
        let out = JsonRenderer.render(&state);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["loading"], false);
        assert_eq!(value["user"]["name"], "Ada");
        assert_eq!(value["user"]["email"], "ada@example.com");
    }
}
