//! Job feed state: pagination cursor, accumulated jobs and fetch guard.

pub mod viewport;

use std::collections::HashSet;
use std::fmt::Display;

use jobs_client::{JobWithCompany, PageWindow};

pub use viewport::{ViewportMetrics, SCROLL_THRESHOLD};

/// Jobs requested per page.
pub const JOBS_PER_PAGE: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FeedStatus {
    #[default]
    Idle,
    Loading,
    Error,
}

/// Paginated job list with identifier-based deduplication.
///
/// Fetching is split into [`JobFeed::begin_fetch`] and [`JobFeed::finish_fetch`]
/// so the state is never borrowed across the network call. `begin_fetch` refuses
/// while a fetch is in flight or once the feed is exhausted, which keeps fetches
/// strictly serialized.
#[derive(Clone, Debug, Default)]
pub struct JobFeed {
    jobs: Vec<JobWithCompany>,
    seen: HashSet<String>,
    page: usize,
    status: FeedStatus,
    exhausted: bool,
    error: Option<String>,
    fetched_once: bool,
}

impl JobFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> &[JobWithCompany] {
        &self.jobs
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn status(&self) -> FeedStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FeedStatus::Loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True once any fetch has completed since the last reset.
    pub fn has_fetched(&self) -> bool {
        self.fetched_once
    }

    pub fn can_fetch(&self) -> bool {
        !self.is_loading() && !self.exhausted
    }

    /// Enter `Loading` and return the window to request, unless guarded.
    pub fn begin_fetch(&mut self) -> Option<PageWindow> {
        if !self.can_fetch() {
            return None;
        }
        self.status = FeedStatus::Loading;
        Some(PageWindow::for_page(self.page, JOBS_PER_PAGE))
    }

    /// Apply the outcome of the fetch started by `begin_fetch`.
    ///
    /// Returns how many jobs were appended.
    pub fn finish_fetch<E: Display>(&mut self, result: Result<Vec<JobWithCompany>, E>) -> usize {
        self.fetched_once = true;

        match result {
            Ok(page) => {
                let received = page.len();
                let before = self.jobs.len();

                for job in page {
                    if self.seen.insert(job.id().to_string()) {
                        self.jobs.push(job);
                    }
                }

                self.page += 1;
                self.exhausted = received < JOBS_PER_PAGE;
                self.error = None;
                self.status = FeedStatus::Idle;

                let added = self.jobs.len() - before;
                tracing::info!(
                    page = self.page,
                    received,
                    added,
                    exhausted = self.exhausted,
                    "Merged jobs page"
                );
                added
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(page = self.page, error = %message, "Failed to load jobs");
                self.error = Some(message);
                self.exhausted = true;
                self.status = FeedStatus::Error;
                0
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Start over from page 0 after a failed fetch.
    ///
    /// Outside the `Error` state this is a no-op, so a repeated click cannot
    /// discard pages that already loaded.
    pub fn retry(&mut self) -> Option<PageWindow> {
        if self.status != FeedStatus::Error {
            return None;
        }
        self.reset();
        self.begin_fetch()
    }

    /// Scroll entry point: fetch the next page if the viewport is near the bottom.
    pub fn maybe_fetch_next(&mut self, viewport: ViewportMetrics) -> Option<PageWindow> {
        if !viewport.is_near_bottom(SCROLL_THRESHOLD) {
            return None;
        }
        self.begin_fetch()
    }
}
