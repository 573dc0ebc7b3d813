//! Clap argument types.

use clap::{Args, Parser, ValueEnum};

use userview::output::FrameRenderer;
use userview::output::json::JsonRenderer;
use userview::output::plain::PlainRenderer;
use userview::output::terminal::TerminalRenderer;

/// Show a user record with a live elapsed-time counter.
#[derive(Parser, Debug)]
#[command(name = "userview", version = userview::constants::VERSION)]
pub struct Cli {
    /// Log fetches and lifecycle events to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Suppress all diagnostic logging, including fetch errors.
    #[arg(long, short, global = true, default_value_t = false)]
    pub quiet: bool,

    /// Emit diagnostic logs as JSON lines.
    #[arg(long, global = true, default_value_t = false)]
    pub log_json: bool,

    /// Disable colored output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Fetch a user once, print a single frame, and exit.
    Show(ShowArgs),

    /// Keep the view mounted and redraw on every change.
    Watch(WatchArgs),

    /// Print the effective configuration as TOML.
    Config(EndpointArgs),

    /// Print version and build information.
    Version,
}

/// Overrides for the endpoint and tick settings.
#[derive(Args, Debug, Default)]
pub struct EndpointArgs {
    /// Base URL user records are served from.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Milliseconds between timer ticks.
    #[arg(long)]
    pub tick_ms: Option<u64>,
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Identifier of the user to display.
    pub user_id: String,

    #[command(flatten)]
    pub endpoint: EndpointArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,
}

/// Arguments for the `watch` subcommand.
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Identifier of the user to display first.
    pub user_id: String,

    /// Further identifiers, switched to one at a time.
    #[arg(long = "switch", value_name = "USER_ID")]
    pub switch: Vec<String>,

    /// Seconds between identifier switches.
    #[arg(long, default_value_t = 5)]
    pub every: u64,

    /// Stop after this many seconds (default: run until Ctrl-C).
    #[arg(long)]
    pub duration: Option<u64>,

    #[command(flatten)]
    pub endpoint: EndpointArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled, redrawn in place on a terminal.
    Terminal,
    /// Unstyled text, one frame after another.
    Plain,
    /// One JSON object per frame.
    Json,
}

impl OutputFormat {
    /// Renderer for this format.
    pub fn renderer(self) -> Box<dyn FrameRenderer> {
        match self {
            OutputFormat::Terminal => Box::new(TerminalRenderer),
            OutputFormat::Plain => Box::new(PlainRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }

    /// Whether frames replace each other rather than stack up.
    pub fn redraws(self) -> bool {
        self == OutputFormat::Terminal
    }
}
