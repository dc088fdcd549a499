use anyhow::{Context, Result};
use tracing::debug;

use crate::source::PlaylistSource;
use crate::track::PlaylistEntry;

/// Largest page the Web API returns for playlist items.
pub const PAGE_SIZE: u32 = 100;

/// Reads every item of the playlist, following pages until the source
/// reports there are no more.
///
/// The offset advances by exactly [`PAGE_SIZE`] per page. Edits made to the
/// playlist while this runs can make items be skipped or read twice.
pub fn fetch_all_entries<S>(source: &S, playlist_id: &str) -> Result<Vec<PlaylistEntry>>
where
    S: PlaylistSource + ?Sized,
{
    let mut entries = Vec::new();
    let mut offset = 0;
    loop {
        let page = source
            .fetch_page(playlist_id, offset, PAGE_SIZE)
            .with_context(|| format!("failed to fetch playlist items at offset {offset}"))?;
        debug!(
            offset,
            count = page.items.len(),
            has_more = page.has_more,
            "fetched playlist page"
        );
        entries.extend(page.items);

        if !page.has_more {
            break;
        }
        offset += PAGE_SIZE;
    }
    Ok(entries)
}
