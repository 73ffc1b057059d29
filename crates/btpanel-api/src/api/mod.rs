// Resource wrappers
//
// Thin typed methods over `PanelClient::call`, grouped by panel area. Each
// module is an `impl PanelClient` block; none of them add state. Listing
// helpers shared across areas live here.

mod access;
mod backups;
mod databases;
mod directory;
mod domains;
mod ftp;
mod plugins;
mod proxy;
mod rewrite;
mod sites;
mod ssl;
mod system;

use crate::error::Error;
use crate::models::{ListQuery, Page};

/// Rows requested per page while scanning a listing for an exact match.
const SCAN_PAGE_SIZE: u32 = 100;

/// Upper bound on pages walked, for panels that ignore `p`.
const SCAN_MAX_PAGES: u32 = 200;

/// Walk a searched listing page by page until a row satisfies `matches`.
///
/// The panel's search is a substring match, so the exact row may sit past
/// the first page. Scanning stops at the first short page.
pub(crate) async fn scan_listing<T, F, Fut>(
    term: &str,
    fetch: F,
    matches: impl Fn(&T) -> bool,
) -> Result<Option<T>, Error>
where
    F: Fn(ListQuery) -> Fut,
    Fut: Future<Output = Result<Page<T>, Error>>,
{
    for page in 1..=SCAN_MAX_PAGES {
        let query = ListQuery::default()
            .search(term)
            .page(page)
            .limit(SCAN_PAGE_SIZE);
        let rows = fetch(query).await?.data;
        let full = u32::try_from(rows.len()).is_ok_and(|n| n >= SCAN_PAGE_SIZE);

        if let Some(hit) = rows.into_iter().find(|row| matches(row)) {
            return Ok(Some(hit));
        }
        if !full {
            break;
        }
    }
    Ok(None)
}
