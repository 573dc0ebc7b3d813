//! userview — user record viewer CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use userview::config::Config;
use userview::constants;
use userview::env::Env;
use userview::loader::{HttpUserLoader, UserLoader};
use userview::logging::{self, Verbosity};
use userview::output::FrameRenderer;
use userview::output::live::LiveDisplay;
use userview::view::UserDataView;

use std::io::{IsTerminal, Write};
use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::time::{self, Instant};

use cli::args::{Cli, Command, EndpointArgs, ShowArgs, WatchArgs};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(Verbosity::from_flags(cli.quiet, cli.verbose), cli.log_json);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Show(args) => run_show(args).await,
        Command::Watch(args) => run_watch(args).await,
        Command::Config(args) => run_config(&args),
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!("{} {}", constants::APP_NAME.bold(), constants::VERSION.green().bold());
    println!("{}  {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Print the effective configuration.
fn run_config(args: &EndpointArgs) -> Result<()> {
    let config = load_config(args)?;
    print!("{}", config.to_toml());
    Ok(())
}

/// Mount, wait for the first fetch to settle, print one frame, unmount.
async fn run_show(args: ShowArgs) -> Result<()> {
    let config = load_config(&args.endpoint)?;
    let mut view = build_view(&config)?;

    view.on_start(args.user_id);
    view.settle().await;
    let frame = args.format.renderer().render(&view.snapshot());
    view.on_stop();

    print!("{frame}");
    Ok(())
}

/// Keep the view mounted, redrawing on every change until Ctrl-C or `--duration`.
async fn run_watch(args: WatchArgs) -> Result<()> {
    let config = load_config(&args.endpoint)?;
    let mut view = build_view(&config)?;
    let renderer = args.format.renderer();
    let redraw = args.format.redraws() && std::io::stdout().is_terminal();
    let mut display = LiveDisplay::stdout(redraw);

    let duration = args.duration;
    let stop = async move {
        let deadline = async {
            match duration {
                Some(secs) => time::sleep(Duration::from_secs(secs)).await,
                None => std::future::pending::<()>().await,
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = deadline => {}
        }
    };

    let switches = Switches {
        ids: args.switch,
        every: Duration::from_secs(args.every.max(1)),
    };
    watch_loop(&mut view, args.user_id, switches, &*renderer, &mut display, stop).await
}

/// Identifiers fed to the view one at a time, `every` apart.
struct Switches {
    ids: Vec<String>,
    every: Duration,
}

/// Mount `user_id`, redraw on every change, and unmount once `stop` resolves.
///
/// `stop` is pinned once, so a signal arriving while a frame is being
/// written still ends the loop on the next pass.
async fn watch_loop<W: Write>(
    view: &mut UserDataView,
    user_id: String,
    switches: Switches,
    renderer: &dyn FrameRenderer,
    display: &mut LiveDisplay<W>,
    stop: impl Future<Output = ()>,
) -> Result<()> {
    let mut updates = view.subscribe();
    view.on_start(user_id);
    display
        .show(&renderer.render(&updates.borrow_and_update()))
        .context("failed to write frame")?;

    let mut switch_timer = time::interval_at(Instant::now() + switches.every, switches.every);
    let mut pending = switches.ids.into_iter();
    let mut next_switch = pending.next();
    tokio::pin!(stop);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let frame = renderer.render(&updates.borrow_and_update());
                display.show(&frame).context("failed to write frame")?;
            }
            _ = switch_timer.tick(), if next_switch.is_some() => {
                if let Some(user_id) = next_switch.take() {
                    view.on_input_changed(user_id);
                }
                next_switch = pending.next();
            }
            _ = &mut stop => break,
        }
    }

    view.on_stop();
    Ok(())
}

/// Load layered config and apply CLI overrides.
fn load_config(args: &EndpointArgs) -> Result<Config> {
    let cwd = std::env::current_dir().context("could not determine working directory")?;
    let mut config =
        Config::load(Some(&cwd), &Env::process()).context("failed to load configuration")?;

    if let Some(ref url) = args.base_url {
        config.set_base_url(url.clone()).context("invalid --base-url")?;
    }
    if let Some(ms) = args.tick_ms {
        config.set_tick_ms(ms).context("invalid --tick-ms")?;
    }
    Ok(config)
}

fn build_view(config: &Config) -> Result<UserDataView> {
    let loader: Arc<dyn UserLoader> = Arc::new(
        HttpUserLoader::new(config.endpoint.base_url.clone())
            .context("failed to build HTTP client")?,
    );
    Ok(UserDataView::with_tick(loader, config.tick()))
}
