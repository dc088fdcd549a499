use anyhow::{Context, Result};
use tracing::debug;

use crate::source::PlaylistSource;
use crate::track::TrackUri;

/// Largest number of items the Web API accepts in one replace or add call.
pub const BATCH_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: usize,
    pub appends: usize,
}

/// Makes the stored playlist order equal to `tracks`.
///
/// The first batch goes out as a replace, every later batch as an append. A
/// failure stops the remaining batches and leaves what was already written.
pub fn replace_playlist<S>(source: &S, playlist_id: &str, tracks: &[TrackUri]) -> Result<WriteSummary>
where
    S: PlaylistSource + ?Sized,
{
    let (head, rest) = tracks.split_at(tracks.len().min(BATCH_SIZE));

    source
        .replace_contents(playlist_id, head)
        .context("failed to replace playlist contents")?;
    debug!(count = head.len(), "replaced playlist contents");

    let mut appends = 0;
    for (batch, chunk) in rest.chunks(BATCH_SIZE).enumerate() {
        let start = BATCH_SIZE * (batch + 1);
        source
            .append_contents(playlist_id, chunk)
            .with_context(|| {
                format!(
                    "failed to append items {start}..{} after writing {start} of {}",
                    start + chunk.len(),
                    tracks.len()
                )
            })?;
        debug!(start, count = chunk.len(), "appended batch");
        appends += 1;
    }

    Ok(WriteSummary {
        written: tracks.len(),
        appends,
    })
}
