//! Shared data types.

pub mod user;

pub use user::{UserRecord, UserSlot, ViewState};
