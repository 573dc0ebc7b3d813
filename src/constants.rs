//! App-wide constants.
//!
//! Names, config paths, environment variable names, and defaults live
//! here so a rename only touches this file.

use std::time::Duration;

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "userview";

/// Crate version baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for.
pub const TARGET: &str = env!("USERVIEW_TARGET");

/// `User-Agent` header sent with every fetch.
pub const USER_AGENT: &str = concat!("userview/", env!("CARGO_PKG_VERSION"));

/// Local config filename, looked up in the working directory.
pub const CONFIG_FILENAME: &str = ".userview.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "userview";

/// Endpoint the user records are served from.
pub const DEFAULT_BASE_URL: &str = "https://secret.url";

/// Path segment placed between the base URL and the identifier.
pub const USER_PATH_SEGMENT: &str = "user";

/// Period of the elapsed-seconds tick.
pub const DEFAULT_TICK: Duration = Duration::from_millis(1000);

/// Heading printed at the top of every frame.
pub const HEADING: &str = "User Data Component";

/// Shown while no record has been loaded.
pub const LOADING_PLACEHOLDER: &str = "Loading user data...";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "USERVIEW_BASE_URL";
pub const ENV_TICK_MS: &str = "USERVIEW_TICK_MS";
pub const ENV_LOG: &str = "USERVIEW_LOG";
