use async_trait::async_trait;

use crate::{PageWindow, Result};
use crate::types::JobWithCompany;

/// Anything that can hand out pages of the job feed.
///
/// Browser futures are not `Send`, so the bound is dropped on `wasm32`.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait JobSource {
    async fn fetch_page(&self, window: PageWindow) -> Result<Vec<JobWithCompany>>;
}
