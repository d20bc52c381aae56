//! Sequential page accumulation with partial-failure tolerance.
//!
//! Pages are requested one at a time, starting at 1, and their items are
//! appended in response order. Accumulation ends when:
//!
//! - the limit is reached (extra items from the last page are dropped),
//! - a page comes back empty, or
//! - a page request fails.
//!
//! A failed page is not retried and does not discard anything gathered
//! before it: the accumulator is the result on every terminal state.

use std::sync::Arc;

use tracing::{debug, info, warn};

use advent_models::{CollectionId, ContentItem};

use crate::client::PageSource;
use crate::error::FetchError;

/// Where an accumulation run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// More pages may be requested, starting with `next_page`.
    Fetching { next_page: u32 },
    /// Limit reached or the collection ran out of items.
    Done,
    /// A page request failed; what was accumulated so far stands.
    Aborted { failed_page: u32 },
}

/// Items gathered from a collection, plus the pagination state.
#[derive(Debug, Clone)]
pub struct Accumulation {
    items: Vec<ContentItem>,
    limit: usize,
    state: PageState,
}

impl Accumulation {
    /// Starts an accumulation capped at `limit` items.
    ///
    /// A zero limit is finished before any request is made.
    pub fn new(limit: usize) -> Self {
        let state = if limit == 0 {
            PageState::Done
        } else {
            PageState::Fetching { next_page: 1 }
        };
        Self {
            items: Vec::new(),
            limit,
            state,
        }
    }

    /// Current state.
    pub fn state(&self) -> PageState {
        self.state
    }

    /// Page to request next, or `None` once finished.
    pub fn next_page(&self) -> Option<u32> {
        match self.state {
            PageState::Fetching { next_page } => Some(next_page),
            _ => None,
        }
    }

    /// Returns true once no more pages will be requested.
    pub fn is_finished(&self) -> bool {
        self.next_page().is_none()
    }

    /// Returns true if accumulation stopped on a failed page.
    pub fn is_aborted(&self) -> bool {
        matches!(self.state, PageState::Aborted { .. })
    }

    /// Items gathered so far.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Feeds the result of requesting [`next_page`](Self::next_page).
    ///
    /// Ignored once the accumulation is finished.
    pub fn apply(&mut self, page_result: Result<Vec<ContentItem>, FetchError>) {
        let Some(page) = self.next_page() else {
            return;
        };

        match page_result {
            Ok(page_items) if page_items.is_empty() => {
                debug!(page, "Empty page, collection exhausted");
                self.state = PageState::Done;
            }
            Ok(page_items) => {
                let start = self.items.len();
                self.items
                    .extend(page_items.into_iter().enumerate().map(|(offset, mut item)| {
                        item.ordinal = start + offset + 1;
                        item
                    }));

                if self.items.len() >= self.limit {
                    self.items.truncate(self.limit);
                    self.state = PageState::Done;
                } else {
                    self.state = PageState::Fetching {
                        next_page: page + 1,
                    };
                }
            }
            Err(e) => {
                warn!(
                    page,
                    error = %e,
                    kept = self.items.len(),
                    "Page fetch failed, keeping partial results"
                );
                self.state = PageState::Aborted { failed_page: page };
            }
        }
    }

    /// Consumes the accumulation, returning at most `limit` items.
    pub fn into_items(self) -> Vec<ContentItem> {
        self.items
    }
}

/// Retrieves bounded prefixes of paginated collections.
#[derive(Clone)]
pub struct ContentFetcher {
    source: Arc<dyn PageSource>,
}

impl ContentFetcher {
    /// Creates a fetcher over a page source.
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self { source }
    }

    /// Runs pagination to completion and returns the terminal accumulation.
    ///
    /// Pages are requested strictly in sequence; page `k + 1` is only
    /// requested once page `k` has been applied.
    pub async fn accumulate(&self, collection: &CollectionId, limit: usize) -> Accumulation {
        let mut acc = Accumulation::new(limit);
        while let Some(page) = acc.next_page() {
            let result = self.source.fetch_page(collection, page).await;
            acc.apply(result);
        }

        info!(
            collection = %collection,
            limit,
            items = acc.items().len(),
            aborted = acc.is_aborted(),
            "Accumulated collection contents"
        );
        acc
    }

    /// Returns up to `limit` items from the start of the collection.
    ///
    /// Never fails: request errors just shorten the result, possibly to
    /// nothing.
    pub async fn fetch_up_to(&self, collection: &CollectionId, limit: usize) -> Vec<ContentItem> {
        self.accumulate(collection, limit).await.into_items()
    }

    /// Returns the item at 1-based `ordinal`, or `None` if pagination stopped
    /// before reaching it.
    ///
    /// Re-runs the same accumulation with `limit = ordinal`, so the result
    /// always agrees with `fetch_up_to(collection, n)[ordinal - 1]` for the
    /// same underlying data.
    pub async fn fetch_one(
        &self,
        collection: &CollectionId,
        ordinal: usize,
    ) -> Option<ContentItem> {
        if ordinal == 0 {
            return None;
        }
        let mut items = self.fetch_up_to(collection, ordinal).await;
        if items.len() < ordinal {
            debug!(collection = %collection, ordinal, available = items.len(), "Item not found");
            return None;
        }
        Some(items.swap_remove(ordinal - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Page source answering from a fixed script; unscripted pages are empty.
    struct ScriptedSource {
        pages: HashMap<u32, std::result::Result<usize, u16>>,
        requested: Mutex<Vec<u32>>,
    }

    impl ScriptedSource {
        fn new(pages: &[(u32, std::result::Result<usize, u16>)]) -> Arc<Self> {
            Arc::new(Self {
                pages: pages.iter().cloned().collect(),
                requested: Mutex::new(Vec::new()),
            })
        }

        fn requested(&self) -> Vec<u32> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageSource for ScriptedSource {
        async fn fetch_page(
            &self,
            _collection: &CollectionId,
            page: u32,
        ) -> crate::error::Result<Vec<ContentItem>> {
            self.requested.lock().unwrap().push(page);
            match self.pages.get(&page) {
                Some(Ok(count)) => Ok((0..*count)
                    .map(|i| ContentItem::html(format!("<p>page {} item {}</p>", page, i)))
                    .collect()),
                Some(Err(status)) => Err(FetchError::Status {
                    page,
                    status: *status,
                }),
                None => Ok(Vec::new()),
            }
        }
    }

    fn collection() -> CollectionId {
        CollectionId::from("test-channel")
    }

    #[test]
    fn test_accumulation_state_machine() {
        let mut acc = Accumulation::new(5);
        assert_eq!(acc.state(), PageState::Fetching { next_page: 1 });

        acc.apply(Ok(vec![ContentItem::html("a"), ContentItem::html("b")]));
        assert_eq!(acc.state(), PageState::Fetching { next_page: 2 });

        acc.apply(Err(FetchError::Status { page: 2, status: 500 }));
        assert_eq!(acc.state(), PageState::Aborted { failed_page: 2 });
        assert!(acc.is_finished());

        // Finished accumulations ignore further results
        acc.apply(Ok(vec![ContentItem::html("late")]));
        let items = acc.into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].ordinal, 2);
    }

    #[test]
    fn test_zero_limit_is_done_immediately() {
        let acc = Accumulation::new(0);
        assert_eq!(acc.state(), PageState::Done);
        assert_eq!(acc.next_page(), None);
    }

    #[tokio::test]
    async fn test_first_page_failure_returns_empty() {
        let source = ScriptedSource::new(&[(1, Err(503))]);
        let fetcher = ContentFetcher::new(source.clone());

        let items = fetcher.fetch_up_to(&collection(), 24).await;

        assert!(items.is_empty());
        assert_eq!(source.requested(), vec![1]);
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_earlier_pages() {
        let source = ScriptedSource::new(&[(1, Ok(10)), (2, Ok(10)), (3, Err(500)), (4, Ok(10))]);
        let fetcher = ContentFetcher::new(source.clone());

        let acc = fetcher.accumulate(&collection(), 24).await;

        assert!(acc.is_aborted());
        assert_eq!(acc.items().len(), 20);
        assert_eq!(source.requested(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_truncates_overshooting_page() {
        let source = ScriptedSource::new(&[(1, Ok(20)), (2, Ok(20))]);
        let fetcher = ContentFetcher::new(source.clone());

        let items = fetcher.fetch_up_to(&collection(), 24).await;

        assert_eq!(items.len(), 24);
        assert_eq!(items[23].ordinal, 24);
        assert_eq!(items[23].payload(), "<p>page 2 item 3</p>");
        assert_eq!(source.requested(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_empty_page_ends_pagination() {
        let source = ScriptedSource::new(&[(1, Ok(5)), (2, Ok(3))]);
        let fetcher = ContentFetcher::new(source.clone());

        let acc = fetcher.accumulate(&collection(), 24).await;

        assert_eq!(acc.state(), PageState::Done);
        assert_eq!(acc.items().len(), 8);
        assert_eq!(source.requested(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_fetch_one_agrees_with_fetch_up_to() {
        let source = ScriptedSource::new(&[(1, Ok(3)), (2, Ok(3)), (3, Ok(3))]);
        let fetcher = ContentFetcher::new(source);

        let all = fetcher.fetch_up_to(&collection(), 24).await;
        let fifth = fetcher.fetch_one(&collection(), 5).await.unwrap();

        assert_eq!(fifth, all[4]);
        assert_eq!(fifth.ordinal, 5);
    }

    #[tokio::test]
    async fn test_fetch_one_stops_at_ordinal() {
        let source = ScriptedSource::new(&[(1, Ok(3)), (2, Ok(3)), (3, Ok(3))]);
        let fetcher = ContentFetcher::new(source.clone());

        fetcher.fetch_one(&collection(), 2).await.unwrap();

        assert_eq!(source.requested(), vec![1]);
    }

    #[tokio::test]
    async fn test_fetch_one_not_found() {
        let source = ScriptedSource::new(&[(1, Ok(3)), (2, Err(404))]);
        let fetcher = ContentFetcher::new(source);

        assert!(fetcher.fetch_one(&collection(), 5).await.is_none());
        assert!(fetcher.fetch_one(&collection(), 0).await.is_none());
        assert!(fetcher.fetch_one(&collection(), 3).await.is_some());
    }
}
