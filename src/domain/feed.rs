//! Incremental launch list loading for the infinite-scroll catalog.
//!
//! A [`LaunchFeed`] grows a list of launches one page at a time from a
//! [`LaunchRepository`], with these guarantees:
//!
//! - no launch id appears twice in the accumulated list
//! - at most one page request is in flight per feed
//! - a short page (fewer raw records than the page size) ends the feed
//! - a failed request leaves the list and offset untouched, so a retry asks
//!   for the same offset again
//! - [`LaunchFeed::restart`] aborts the in-flight request and starts over
//!
//! The request runs in a spawned task that applies its own result. A caller
//! that stops waiting (client disconnect) therefore never leaves the feed
//! stuck in the loading state. Each restart bumps a generation counter, and
//! results from an older generation are discarded.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{Mutex, Notify};
use tokio::task::AbortHandle;

use crate::domain::entities::Launch;
use crate::domain::repositories::LaunchRepository;

/// Upper bound accepted for a page size.
pub const MAX_PAGE_SIZE: usize = 50;

/// Page size used when none is requested.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Message shown next to the retry button.
pub const LOAD_ERROR_MESSAGE: &str =
    "Não foi possível carregar os lançamentos. Tente novamente.";

/// Predicate applied to each raw page before merging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LaunchFilter {
    #[default]
    All,
    WithVideo,
}

impl LaunchFilter {
    pub fn from_video_flag(video_only: bool) -> Self {
        if video_only { Self::WithVideo } else { Self::All }
    }

    pub fn is_video_only(self) -> bool {
        self == Self::WithVideo
    }

    pub fn matches(self, launch: &Launch) -> bool {
        match self {
            Self::All => true,
            Self::WithVideo => launch.has_video(),
        }
    }
}

/// Parameters of one pagination sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedParams {
    pub page_size: usize,
    pub start_offset: usize,
    pub filter: LaunchFilter,
}

impl FeedParams {
    /// Creates parameters with the page size clamped to `1..=MAX_PAGE_SIZE`.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            start_offset: 0,
            filter: LaunchFilter::All,
        }
    }

    pub fn with_filter(mut self, filter: LaunchFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn starting_at(mut self, offset: usize) -> Self {
        self.start_offset = offset;
        self
    }
}

impl Default for FeedParams {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Result of a [`LaunchFeed::fetch_next_page`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// A page arrived; `items` are the launches newly appended to the list.
    Appended {
        items: Vec<Launch>,
        reached_end: bool,
    },
    /// Another fetch is already running; nothing was requested.
    Busy,
    /// The feed already hit end-of-data; nothing was requested.
    Exhausted,
    /// The request failed at `offset`; the list is unchanged.
    Failed { offset: usize, message: String },
    /// The request was aborted by a restart or close.
    Cancelled,
}

/// Point-in-time copy of the feed state for rendering.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub params: FeedParams,
    pub launches: Vec<Launch>,
    pub offset: usize,
    pub loading: bool,
    pub reached_end: bool,
    pub error: Option<String>,
}

struct FeedState {
    params: FeedParams,
    launches: Vec<Launch>,
    seen: HashSet<String>,
    offset: usize,
    loading: bool,
    reached_end: bool,
    error: Option<String>,
    generation: u64,
    in_flight: Option<AbortHandle>,
}

impl FeedState {
    fn new(params: FeedParams) -> Self {
        Self {
            params,
            launches: Vec::new(),
            seen: HashSet::new(),
            offset: params.start_offset,
            loading: false,
            reached_end: false,
            error: None,
            generation: 0,
            in_flight: None,
        }
    }

    /// Aborts the running request and invalidates any result it may still apply.
    fn cancel_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.generation += 1;
        self.loading = false;
    }

    fn reset(&mut self, params: FeedParams) {
        self.cancel_in_flight();
        self.params = params;
        self.launches.clear();
        self.seen.clear();
        self.offset = params.start_offset;
        self.reached_end = false;
        self.error = None;
    }

    fn apply_page(&mut self, raw: Vec<Launch>) -> FetchOutcome {
        let raw_len = raw.len();
        let filter = self.params.filter;

        let items: Vec<Launch> = raw
            .into_iter()
            .filter(|launch| filter.matches(launch))
            .filter(|launch| self.seen.insert(launch.id.clone()))
            .collect();

        self.launches.extend(items.iter().cloned());
        // Raw count, not filtered count: the upstream offset is positional.
        self.offset += raw_len;
        if raw_len < self.params.page_size {
            self.reached_end = true;
        }

        FetchOutcome::Appended {
            items,
            reached_end: self.reached_end,
        }
    }

    fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            params: self.params,
            launches: self.launches.clone(),
            offset: self.offset,
            loading: self.loading,
            reached_end: self.reached_end,
            error: self.error.clone(),
        }
    }
}

/// Paginated fetch accumulator over a [`LaunchRepository`].
pub struct LaunchFeed {
    repository: Arc<dyn LaunchRepository>,
    state: Arc<Mutex<FeedState>>,
    /// Signalled whenever `loading` goes back to false.
    settled: Arc<Notify>,
}

impl LaunchFeed {
    pub fn new(repository: Arc<dyn LaunchRepository>, params: FeedParams) -> Self {
        Self {
            repository,
            state: Arc::new(Mutex::new(FeedState::new(params))),
            settled: Arc::new(Notify::new()),
        }
    }

    /// Requests the next page at the current offset and merges it.
    ///
    /// No-op (returning [`FetchOutcome::Busy`] or [`FetchOutcome::Exhausted`])
    /// when a request is already running or the end was reached. Calling this
    /// again after [`FetchOutcome::Failed`] retries the same offset.
    pub async fn fetch_next_page(&self) -> FetchOutcome {
        let (generation, handle) = {
            let mut state = self.state.lock().await;
            if state.loading {
                return FetchOutcome::Busy;
            }
            if state.reached_end {
                return FetchOutcome::Exhausted;
            }

            state.loading = true;
            state.error = None;

            let generation = state.generation;
            let offset = state.offset;
            let page_size = state.params.page_size;
            let repository = Arc::clone(&self.repository);
            let shared = Arc::clone(&self.state);
            let settled = Arc::clone(&self.settled);

            let handle = tokio::spawn(async move {
                let result = repository
                    .list_launches(Some(page_size), Some(offset))
                    .await;

                let mut state = shared.lock().await;
                if state.generation != generation {
                    return FetchOutcome::Cancelled;
                }
                state.loading = false;
                state.in_flight = None;
                settled.notify_waiters();

                match result {
                    Ok(raw) => {
                        metrics::counter!("feed_pages_fetched_total").increment(1);
                        let outcome = state.apply_page(raw);
                        tracing::debug!(
                            offset = state.offset,
                            total = state.launches.len(),
                            reached_end = state.reached_end,
                            "Feed page merged"
                        );
                        outcome
                    }
                    Err(e) => {
                        metrics::counter!("feed_page_failures_total").increment(1);
                        tracing::warn!(offset, "Feed page request failed: {}", e);
                        state.error = Some(LOAD_ERROR_MESSAGE.to_string());
                        FetchOutcome::Failed {
                            offset,
                            message: LOAD_ERROR_MESSAGE.to_string(),
                        }
                    }
                }
            });

            state.in_flight = Some(handle.abort_handle());
            (generation, handle)
        };

        match handle.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => FetchOutcome::Cancelled,
            Err(e) => {
                tracing::error!("Feed fetch task panicked: {}", e);
                let mut state = self.state.lock().await;
                if state.generation != generation {
                    return FetchOutcome::Cancelled;
                }
                state.loading = false;
                state.in_flight = None;
                self.settled.notify_waiters();
                state.error = Some(LOAD_ERROR_MESSAGE.to_string());
                FetchOutcome::Failed {
                    offset: state.offset,
                    message: LOAD_ERROR_MESSAGE.to_string(),
                }
            }
        }
    }

    /// Cancels the in-flight request and starts a new sequence with `params`.
    ///
    /// The accumulated list is cleared and the offset rewinds to
    /// `params.start_offset`. Call [`LaunchFeed::fetch_next_page`] afterwards
    /// to load the first page.
    pub async fn restart(&self, params: FeedParams) {
        let mut state = self.state.lock().await;
        state.reset(params);
        self.settled.notify_waiters();
        tracing::debug!(
            page_size = params.page_size,
            video_only = params.filter.is_video_only(),
            "Feed restarted"
        );
    }

    /// Aborts the in-flight request without clearing the list.
    pub async fn close(&self) {
        self.state.lock().await.cancel_in_flight();
        self.settled.notify_waiters();
    }

    /// Waits until no page request is running.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.settled.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if !self.state.lock().await.loading {
                return;
            }
            notified.await;
        }
    }

    pub async fn snapshot(&self) -> FeedSnapshot {
        self.state.lock().await.snapshot()
    }

    pub async fn params(&self) -> FeedParams {
        self.state.lock().await.params
    }
}
