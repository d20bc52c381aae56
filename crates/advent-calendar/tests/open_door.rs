//! Calendar behavior with the file-backed reveal store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use advent_arena::{ContentFetcher, FetchError, PageSource};
use advent_calendar::{Calendar, CalendarConfig, CalendarError, OpenOutcome};
use advent_models::{CollectionId, ContentItem};
use advent_persistence::{FileRevealStore, RevealStore};
use async_trait::async_trait;
use tempfile::TempDir;

/// A channel of text blocks, five per page. Its size can change between
/// requests.
struct Channel {
    total: AtomicUsize,
    broken_page: Option<u32>,
    requests: AtomicUsize,
}

impl Channel {
    fn new(total: usize) -> Arc<Self> {
        Arc::new(Self {
            total: AtomicUsize::new(total),
            broken_page: None,
            requests: AtomicUsize::new(0),
        })
    }

    fn broken_at(total: usize, page: u32) -> Arc<Self> {
        Arc::new(Self {
            total: AtomicUsize::new(total),
            broken_page: Some(page),
            requests: AtomicUsize::new(0),
        })
    }

    fn resize(&self, total: usize) {
        self.total.store(total, Ordering::SeqCst);
    }

    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSource for Channel {
    async fn fetch_page(
        &self,
        _collection: &CollectionId,
        page: u32,
    ) -> advent_arena::Result<Vec<ContentItem>> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.broken_page == Some(page) {
            return Err(FetchError::Transport {
                page,
                message: "connection reset".to_string(),
            });
        }
        let total = self.total.load(Ordering::SeqCst);
        let start = ((page as usize - 1) * 5).min(total);
        let end = (start + 5).min(total);
        Ok((start..end)
            .map(|i| ContentItem {
                title: Some(format!("Day {}", i + 1)),
                content_html: None,
                content: Some(format!("text {}", i + 1)),
                ordinal: 0,
            })
            .collect())
    }
}

fn config() -> CalendarConfig {
    CalendarConfig::new("winter-walks")
        .with_title("Winter Walks")
        .with_seed(42)
}

#[tokio::test]
async fn test_opened_doors_survive_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state").join("opened-doors.json");

    let store = Arc::new(FileRevealStore::open(&path).unwrap());
    let calendar = Calendar::load(config(), ContentFetcher::new(Channel::new(24)), store)
        .await
        .unwrap();
    assert_eq!(
        calendar.open_door(7).await.unwrap(),
        OpenOutcome::Opened("text 7".to_string())
    );
    drop(calendar);

    let channel = Channel::new(24);
    let store = Arc::new(FileRevealStore::open(&path).unwrap());
    let calendar = Calendar::load(config(), ContentFetcher::new(channel.clone()), store)
        .await
        .unwrap();

    assert_eq!(calendar.summary().opened_doors, 1);
    assert_eq!(calendar.door(7).await.unwrap().content_or_empty(), "text 7");

    let loads = channel.requests();
    assert_eq!(
        calendar.open_door(7).await.unwrap(),
        OpenOutcome::AlreadyOpen("text 7".to_string())
    );
    assert_eq!(channel.requests(), loads);
}

#[tokio::test]
async fn test_partial_collection_gives_fewer_doors() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileRevealStore::open(dir.path().join("doors.json")).unwrap());

    let calendar = Calendar::load(config(), ContentFetcher::new(Channel::broken_at(24, 3)), store)
        .await
        .unwrap();

    assert_eq!(calendar.door_count(), 10);
    assert!(calendar.summary().aborted);
    assert!(matches!(
        calendar.open_door(11).await,
        Err(CalendarError::DoorNotFound(11))
    ));
}

#[tokio::test]
async fn test_empty_collection_loads_empty_calendar() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileRevealStore::open(dir.path().join("doors.json")).unwrap());

    let calendar = Calendar::load(config(), ContentFetcher::new(Channel::broken_at(24, 1)), store)
        .await
        .unwrap();

    assert_eq!(calendar.door_count(), 0);
    assert!(calendar.doors().await.is_empty());
    assert_eq!(calendar.title(), "Winter Walks");
}

#[tokio::test]
async fn test_missing_content_then_retry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doors.json");
    let store = Arc::new(FileRevealStore::open(&path).unwrap());
    let channel = Channel::new(12);
    let calendar = Calendar::load(config(), ContentFetcher::new(channel.clone()), store.clone())
        .await
        .unwrap();
    assert_eq!(calendar.door_count(), 12);

    // The collection shrinks after the calendar was laid out
    channel.resize(3);
    let result = calendar.open_door(12).await;

    assert!(matches!(
        result,
        Err(CalendarError::ContentNotFound { index: 12 })
    ));
    assert!(!store.is_open(12).unwrap());
    assert!(!calendar.door(12).await.unwrap().is_open());
    assert!(!path.exists());

    channel.resize(12);
    let retry = calendar.open_door(12).await.unwrap();

    assert_eq!(retry, OpenOutcome::Opened("text 12".to_string()));
    assert!(std::fs::read_to_string(&path).unwrap().contains("\"12\""));
}

#[tokio::test]
async fn test_unreadable_state_fails_before_fetching() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doors.json");
    let store = Arc::new(FileRevealStore::open(&path).unwrap());
    std::fs::write(&path, "{ not json").unwrap();

    let channel = Channel::new(24);
    let result = Calendar::load(config(), ContentFetcher::new(channel.clone()), store).await;

    assert!(matches!(result, Err(CalendarError::Persistence(_))));
    assert_eq!(channel.requests(), 0);
}

#[tokio::test]
async fn test_reset_removes_state_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doors.json");
    let store = Arc::new(FileRevealStore::open(&path).unwrap());
    let calendar = Calendar::load(config(), ContentFetcher::new(Channel::new(5)), store)
        .await
        .unwrap();
    calendar.open_door(1).await.unwrap();
    assert!(path.exists());

    calendar.reset().await.unwrap();

    assert!(!path.exists());
    assert_eq!(
        calendar.open_door(1).await.unwrap(),
        OpenOutcome::Opened("text 1".to_string())
    );
}

#[tokio::test]
async fn test_state_file_read_once_at_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doors.json");
    std::fs::write(&path, r#"{"2": "kept from before"}"#).unwrap();

    let store = Arc::new(FileRevealStore::new(&path));
    let calendar = Calendar::load(config(), ContentFetcher::new(Channel::new(5)), store)
        .await
        .unwrap();

    // Later edits to the file are not picked up by this calendar
    std::fs::write(&path, r#"{"3": "written later"}"#).unwrap();

    assert_eq!(
        calendar.open_door(2).await.unwrap(),
        OpenOutcome::AlreadyOpen("kept from before".to_string())
    );
    assert_eq!(
        calendar.open_door(3).await.unwrap(),
        OpenOutcome::Opened("text 3".to_string())
    );
}
