//! Lifecycle tests for the user data view using a mock loader.
//!
//! Time is paused so tick counts are exact; the mock records every
//! identifier it is asked for and can delay or fail per identifier.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use userview::loader::{FetchError, UserLoader, user_url};
use userview::models::UserRecord;
use userview::output::render;
use userview::view::UserDataView;

const BASE: &str = "https://secret.url";

#[derive(Clone)]
enum Reply {
    Record(UserRecord),
    Network,
    Malformed,
}

/// A mock loader with per-identifier replies and delays.
struct MockLoader {
    replies: HashMap<String, (u64, Reply)>,
    requested: Mutex<Vec<String>>,
}

impl MockLoader {
    fn new() -> Self {
        Self {
            replies: HashMap::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn reply(mut self, id: &str, delay_ms: u64, reply: Reply) -> Self {
        self.replies.insert(id.to_string(), (delay_ms, reply));
        self
    }

    /// URLs the view asked for, in order.
    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserLoader for MockLoader {
    async fn load(&self, user_id: &str) -> Result<UserRecord, FetchError> {
        let url = user_url(BASE, user_id);
        self.requested.lock().unwrap().push(url.clone());
        let (delay, reply) = self
            .replies
            .get(user_id)
            .cloned()
            .unwrap_or((0, Reply::Network));
        sleep(Duration::from_millis(delay)).await;
        match reply {
            Reply::Record(record) => Ok(record),
            Reply::Network => Err(FetchError::transport(url, "connection refused")),
            Reply::Malformed => Err(FetchError::decode(url, "expected value at line 1 column 1")),
        }
    }
}

fn record(name: &str, email: &str) -> Reply {
    Reply::Record(UserRecord {
        name: name.to_string(),
        email: email.to_string(),
    })
}

fn mount(loader: &Arc<MockLoader>) -> UserDataView {
    UserDataView::new(Arc::clone(loader) as Arc<dyn UserLoader>)
}

#[tokio::test(start_paused = true)]
async fn mount_issues_exactly_one_fetch() {
    let loader = Arc::new(MockLoader::new().reply("42", 50, record("Ada", "ada@example.com")));
    let mut view = mount(&loader);

    view.on_start("42");
    sleep(Duration::from_secs(3)).await;

    assert_eq!(loader.requested(), vec!["https://secret.url/user/42".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn counter_tracks_mounted_seconds_regardless_of_fetch_outcome() {
    for reply in [record("Ada", "ada@example.com"), Reply::Network, Reply::Malformed] {
        let loader = Arc::new(MockLoader::new().reply("1", 300, reply));
        let mut view = mount(&loader);

        view.on_start("1");
        assert_eq!(view.snapshot().elapsed_seconds, 0);
        sleep(Duration::from_millis(7_500)).await;
        assert_eq!(view.snapshot().elapsed_seconds, 7);
        view.on_stop();
    }
}

#[tokio::test(start_paused = true)]
async fn successful_fetch_renders_both_fields_without_placeholder() {
    let loader = Arc::new(MockLoader::new().reply("42", 10, record("Ada", "ada@example.com")));
    let mut view = mount(&loader);

    view.on_start("42");
    view.settle().await;

    let frame = render(&view.snapshot());
    assert!(frame.contains("Ada"));
    assert!(frame.contains("ada@example.com"));
    assert!(!frame.contains("Loading user data..."));
}

#[tokio::test(start_paused = true)]
async fn failed_first_fetch_keeps_placeholder() {
    for reply in [Reply::Network, Reply::Malformed] {
        let loader = Arc::new(MockLoader::new().reply("1", 10, reply));
        let mut view = mount(&loader);

        view.on_start("1");
        view.settle().await;
        sleep(Duration::from_secs(30)).await;

        let frame = render(&view.snapshot());
        assert!(frame.contains("Loading user data..."));
        assert!(frame.contains("Timer: 30 seconds"));
    }
}

#[tokio::test(start_paused = true)]
async fn later_success_replaces_placeholder() {
    let loader = Arc::new(
        MockLoader::new()
            .reply("bad", 10, Reply::Network)
            .reply("good", 10, record("Grace", "grace@example.com")),
    );
    let mut view = mount(&loader);

    view.on_start("bad");
    view.settle().await;
    assert!(view.snapshot().is_loading());

    view.on_input_changed("good");
    view.settle().await;
    assert_eq!(
        view.snapshot().user.record().map(|r| r.email.as_str()),
        Some("grace@example.com")
    );
}

#[tokio::test(start_paused = true)]
async fn failed_refetch_keeps_previous_record() {
    let loader = Arc::new(
        MockLoader::new()
            .reply("1", 10, record("Ada", "ada@example.com"))
            .reply("2", 10, Reply::Malformed),
    );
    let mut view = mount(&loader);

    view.on_start("1");
    view.settle().await;
    view.on_input_changed("2");
    view.settle().await;

    let frame = render(&view.snapshot());
    assert!(frame.contains("Name: Ada"));
    assert!(!frame.contains("Loading user data..."));
}

#[tokio::test(start_paused = true)]
async fn identifier_change_refetches_without_resetting_counter() {
    let loader = Arc::new(
        MockLoader::new()
            .reply("1", 10, record("One", "one@example.com"))
            .reply("2", 10, record("Two", "two@example.com")),
    );
    let mut view = mount(&loader);

    view.on_start("1");
    sleep(Duration::from_millis(4_500)).await;
    assert_eq!(view.snapshot().elapsed_seconds, 4);

    view.on_input_changed("2");
    assert_eq!(view.snapshot().elapsed_seconds, 4);
    sleep(Duration::from_secs(1)).await;

    let state = view.snapshot();
    assert_eq!(state.elapsed_seconds, 5);
    assert_eq!(state.user.record().map(|r| r.name.as_str()), Some("Two"));
    assert_eq!(
        loader.requested(),
        vec![
            "https://secret.url/user/1".to_string(),
            "https://secret.url/user/2".to_string()
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn unmount_freezes_counter_and_drops_late_results() {
    let loader = Arc::new(MockLoader::new().reply("1", 5_000, record("Late", "late@example.com")));
    let mut view = mount(&loader);
    let mut updates = view.subscribe();

    view.on_start("1");
    sleep(Duration::from_millis(2_500)).await;
    view.on_stop();
    let frozen = view.snapshot();
    let _ = updates.borrow_and_update();

    sleep(Duration::from_secs(20)).await;

    assert_eq!(view.snapshot(), frozen);
    assert_eq!(frozen.elapsed_seconds, 2);
    assert!(frozen.is_loading());
    assert!(!updates.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_view_releases_the_tick() {
    let loader = Arc::new(MockLoader::new().reply("1", 0, Reply::Network));
    let mut view = mount(&loader);
    let mut updates = view.subscribe();

    view.on_start("1");
    sleep(Duration::from_millis(1_500)).await;
    drop(view);
    let last = updates.borrow_and_update().clone();

    sleep(Duration::from_secs(5)).await;
    assert_eq!(last.elapsed_seconds, 1);
    assert!(!matches!(updates.has_changed(), Ok(true)));
}
