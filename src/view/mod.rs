//! The user data view: fetch-on-identifier plus a live elapsed counter.
//!
//! [`UserDataView`] exposes explicit lifecycle hooks for whatever host
//! drives it:
//!
//! - [`on_start`](UserDataView::on_start) mounts: resets the display,
//!   fetches the record, and starts the one-second tick.
//! - [`on_input_changed`](UserDataView::on_input_changed) refetches for a
//!   new identifier without touching the counter.
//! - [`on_stop`](UserDataView::on_stop) unmounts: the tick is released and
//!   late fetch results are dropped.
//!
//! Every fetch carries a generation number taken at issue time. A result
//! is applied only if its generation is still the newest and the view is
//! still mounted, so a slow superseded request can never overwrite a
//! newer record.

pub mod tick;

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::constants::DEFAULT_TICK;
use crate::loader::{FetchError, UserLoader};
use crate::models::{UserRecord, UserSlot, ViewState};

pub use tick::TickGuard;

/// Mutable state shared between the view, its ticker, and fetch tasks.
#[derive(Debug, Default)]
struct Control {
    state: ViewState,
    /// Bumped on every mount; tickers from earlier mounts stop on mismatch.
    mount: u64,
    /// Generation of the most recently issued fetch.
    generation: u64,
    live: bool,
}

#[derive(Debug)]
struct Shared {
    control: Mutex<Control>,
    updates: watch::Sender<ViewState>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Control> {
        self.control.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, control: &Control) {
        self.updates.send_replace(control.state.clone());
    }
}

/// Displays one user record and the seconds elapsed since mount.
///
/// Hooks must be called from within a tokio runtime; the tick and the
/// fetches run as spawned tasks.
pub struct UserDataView {
    loader: Arc<dyn UserLoader>,
    period: Duration,
    shared: Arc<Shared>,
    ticker: Option<TickGuard>,
    fetches: JoinSet<()>,
    user_id: Option<String>,
}

impl UserDataView {
    /// Create an unmounted view with the default one-second tick.
    pub fn new(loader: Arc<dyn UserLoader>) -> Self {
        Self::with_tick(loader, DEFAULT_TICK)
    }

    /// Create an unmounted view with a custom tick period.
    pub fn with_tick(loader: Arc<dyn UserLoader>, period: Duration) -> Self {
        let (updates, _) = watch::channel(ViewState::default());
        Self {
            loader,
            period,
            shared: Arc::new(Shared {
                control: Mutex::new(Control::default()),
                updates,
            }),
            ticker: None,
            fetches: JoinSet::new(),
            user_id: None,
        }
    }

    /// Mount the view for `user_id`.
    ///
    /// Enters the loading state with the counter at zero, issues one fetch,
    /// and starts the tick. Mounting an already mounted view releases the
    /// previous mount first.
    pub fn on_start(&mut self, user_id: impl Into<String>) {
        if self.is_mounted() {
            debug!("remounting view");
            self.on_stop();
        }

        let user_id = user_id.into();
        let mount = {
            let mut control = self.shared.lock();
            control.mount += 1;
            control.live = true;
            control.state = ViewState::default();
            self.shared.publish(&control);
            control.mount
        };
        info!(user_id = %user_id, "view mounted");

        self.user_id = Some(user_id.clone());
        self.spawn_fetch(user_id);
        self.ticker = Some(self.spawn_ticker(mount));
    }

    /// React to a new identifier while mounted.
    ///
    /// Issues a fetch for the new identifier. The counter and the tick are
    /// left alone. Ignored when unmounted or when the identifier is unchanged.
    pub fn on_input_changed(&mut self, user_id: impl Into<String>) {
        let user_id = user_id.into();
        if !self.is_mounted() {
            debug!(user_id = %user_id, "identifier change ignored: view not mounted");
            return;
        }
        if self.user_id.as_deref() == Some(user_id.as_str()) {
            return;
        }

        debug!(user_id = %user_id, "identifier changed");
        self.user_id = Some(user_id.clone());
        self.spawn_fetch(user_id);
    }

    /// Unmount the view.
    ///
    /// Releases the tick and abandons in-flight fetches. The published
    /// state is frozen from this point on. Calling it twice is harmless.
    pub fn on_stop(&mut self) {
        {
            let mut control = self.shared.lock();
            if !control.live {
                return;
            }
            control.live = false;
        }
        self.ticker = None;
        self.fetches.abort_all();
        self.user_id = None;
        info!("view unmounted");
    }

    /// Whether the view is between `on_start` and `on_stop`.
    pub fn is_mounted(&self) -> bool {
        self.shared.lock().live
    }

    /// The identifier most recently supplied while mounted.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Current display state.
    pub fn snapshot(&self) -> ViewState {
        self.shared.lock().state.clone()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.shared.updates.subscribe()
    }

    /// Wait until every fetch issued so far has resolved (or been aborted).
    pub async fn settle(&mut self) {
        while self.fetches.join_next().await.is_some() {}
    }

    fn spawn_fetch(&mut self, user_id: String) {
        while self.fetches.try_join_next().is_some() {}

        let generation = {
            let mut control = self.shared.lock();
            control.generation += 1;
            control.generation
        };
        debug!(user_id = %user_id, generation, "fetch issued");

        let loader = Arc::clone(&self.loader);
        let shared = Arc::clone(&self.shared);
        self.fetches.spawn(async move {
            let result = loader.load(&user_id).await;
            apply_fetch(&shared, generation, &user_id, result);
        });
    }

    fn spawn_ticker(&self, mount: u64) -> TickGuard {
        let shared = Arc::clone(&self.shared);
        TickGuard::spawn(self.period, move || {
            let mut control = shared.lock();
            if !control.live || control.mount != mount {
                return ControlFlow::Break(());
            }
            control.state.elapsed_seconds += 1;
            shared.publish(&control);
            ControlFlow::Continue(())
        })
    }
}

impl Drop for UserDataView {
    fn drop(&mut self) {
        self.on_stop();
    }
}

/// Apply a resolved fetch if it is still the newest one and the view is live.
///
/// Failures are logged and leave the display untouched.
fn apply_fetch(
    shared: &Shared,
    generation: u64,
    user_id: &str,
    result: Result<UserRecord, FetchError>,
) {
    let mut control = shared.lock();
    if !control.live || control.generation != generation {
        debug!(
            user_id,
            generation,
            current = control.generation,
            "discarding stale fetch result"
        );
        return;
    }

    match result {
        Ok(record) => {
            info!(user_id, name = %record.name, "user record loaded");
            control.state.user = UserSlot::Present(record);
            shared.publish(&control);
        }
        Err(e) => {
            error!(user_id, error = %e, "Error fetching user data");
        }
    }
}
