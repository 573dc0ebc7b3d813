//! The user record and the display state built around it.

use serde::{Deserialize, Serialize};

/// A user record as served by `GET <base>/user/<id>`.
///
/// Unknown fields in the payload are ignored; both fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
}

/// Whether a record has been loaded yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UserSlot {
    /// Nothing loaded since mount.
    #[default]
    Absent,
    /// The most recently applied record.
    Present(UserRecord),
}

impl UserSlot {
    /// The held record, if any.
    pub fn record(&self) -> Option<&UserRecord> {
        match self {
            UserSlot::Absent => None,
            UserSlot::Present(record) => Some(record),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, UserSlot::Present(_))
    }
}

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub user: UserSlot,
    /// Whole ticks elapsed since mount.
    pub elapsed_seconds: u64,
}

impl ViewState {
    /// True while the loading placeholder is shown.
    pub fn is_loading(&self) -> bool {
        !self.user.is_present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_and_ignores_extra_fields() {
        let record: UserRecord = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@example.com","id":42}"#,
        )
        .unwrap();
        assert_eq!(record.name, "Ada");
        assert_eq!(record.email, "ada@example.com");
    }

    #[test]
    fn record_requires_both_fields() {
        let result = serde_json::from_str::<UserRecord>(r#"{"name":"Ada"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn default_state_is_loading_at_zero() {
        let state = ViewState::default();
        assert!(state.is_loading());
        assert_eq!(state.elapsed_seconds, 0);
        assert_eq!(state.user.record(), None);
    }

    #[test]
    fn present_slot_exposes_record() {
        let record = UserRecord {
            name: "Ada".into(),
            email: "ada@example.com".into(),
        };
        let slot = UserSlot::Present(record.clone());
        assert!(slot.is_present());
        assert_eq!(slot.record(), Some(&record));
    }
}
