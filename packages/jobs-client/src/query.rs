//! The single read query behind the job feed.

/// Joined select: every job column plus the owning company.
pub const JOBS_SELECT: &str = "*,company:companies!jobs_company_id_fkey(*)";

/// Newest postings first. Nulls follow the database default for `DESC`.
pub const JOBS_ORDER: &str = "posted_date.desc";

/// An offset + count slice of the ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
}

impl PageWindow {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Window for a zero-based page number.
    pub fn for_page(page: usize, page_size: usize) -> Self {
        Self {
            offset: page * page_size,
            limit: page_size,
        }
    }

    /// Inclusive index of the last row in the window.
    pub fn last(&self) -> usize {
        (self.offset + self.limit).saturating_sub(1)
    }
}

/// Query string for one page of jobs.
pub fn jobs_query(window: PageWindow) -> Vec<(&'static str, String)> {
    vec![
        ("select", JOBS_SELECT.to_string()),
        ("order", JOBS_ORDER.to_string()),
        ("offset", window.offset.to_string()),
        ("limit", window.limit.to_string()),
    ]
}
