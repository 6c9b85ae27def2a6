//! Offset-based pagination.
//!
//! Pages are requested with a growing `offset` until the API returns an empty
//! page. No total count is consulted, so items deleted while the listing is in
//! progress can shift later items into pages that were already read.

use crate::core::domain::error::LeasewebResult;
use std::future::Future;
use tracing::debug;

/// Page size used when listing every item of a collection.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Position of one page in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u32,
    pub limit: u32,
}

/// Fetches pages of `limit` items until an empty one is returned.
///
/// The offset advances by `limit` regardless of how many items a page held.
/// The first failing page aborts the listing and discards what was gathered.
pub(crate) async fn collect_pages<T, F, Fut>(limit: u32, mut fetch: F) -> LeasewebResult<Vec<T>>
where
    F: FnMut(Page) -> Fut,
    Fut: Future<Output = LeasewebResult<Vec<T>>>,
{
    let mut items = Vec::new();
    let mut page = Page { offset: 0, limit };

    loop {
        let batch = fetch(page).await?;
        if batch.is_empty() {
            break;
        }

        debug!(offset = page.offset, count = batch.len(), "fetched page");
        items.extend(batch);
        page.offset = page.offset.saturating_add(limit);
    }

    debug!(total = items.len(), "listing complete");
    Ok(items)
}
