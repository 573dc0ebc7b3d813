//! Diagnostic logging setup.
//!
//! Fetch failures surface only here, so the default level keeps errors
//! visible on stderr without disturbing the frame on stdout.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::constants::ENV_LOG;

/// How chatty the logs are when `USERVIEW_LOG` is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// Pick a verbosity from the `--quiet` / `--verbose` flags.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        }
    }

    /// Filter directive used when no env filter is given.
    pub fn directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "userview=off",
            Verbosity::Normal => "userview=error",
            Verbosity::Verbose => "userview=debug",
        }
    }
}

/// Build the filter: `USERVIEW_LOG` wins, then the verbosity default.
pub fn filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(verbosity.directive()))
}

/// Install the global subscriber writing to stderr.
///
/// A second call is a no-op.
pub fn init_logging(verbosity: Verbosity, json: bool) {
    let registry = tracing_subscriber::registry().with(filter(verbosity));
    let result = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
    };
    // Already installed (tests, embedding hosts)
    let _ = result;
}
