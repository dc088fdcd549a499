use anyhow::Result;
use tracing::{info, warn};

use crate::error::ShuffleError;
use crate::fetch::fetch_all_entries;
use crate::source::PlaylistSource;
use crate::track::{PlaylistEntry, TrackUri};
use crate::write::{replace_playlist, WriteSummary};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Fetch and reorder, but print the new order instead of writing it.
    pub dry_run: bool,
    /// Drop local files and unavailable items instead of refusing to run.
    pub skip_unwritable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub fetched: usize,
    pub skipped: usize,
    /// The order that was (or, on a dry run, would have been) written.
    pub order: Vec<TrackUri>,
    pub write: Option<WriteSummary>,
}

/// Fetches the playlist, reorders its tracks with `reorder` and writes the
/// result back.
///
/// The binary passes a [`crate::shuffle::Shuffler`]; any reordering works.
pub fn shuffle_playlist<S, F>(
    source: &S,
    playlist_id: &str,
    options: RunOptions,
    reorder: F,
) -> Result<Report>
where
    S: PlaylistSource + ?Sized,
    F: FnOnce(&[TrackUri]) -> Vec<TrackUri>,
{
    println!("Retrieving Playlist Songs");
    let entries = fetch_all_entries(source, playlist_id)?;
    let fetched = entries.len();

    let (tracks, skipped) = split_entries(entries);
    if !skipped.is_empty() {
        for description in &skipped {
            warn!(%description, "playlist item cannot be written back");
        }
        if !options.skip_unwritable {
            return Err(ShuffleError::UnwritableItems { count: skipped.len() }.into());
        }
    }
    info!(fetched, playable = tracks.len(), skipped = skipped.len(), "fetched playlist");

    println!("Shuffling...");
    let order = reorder(&tracks);

    let write = if options.dry_run {
        print_tracks(&order);
        None
    } else {
        let summary = replace_playlist(source, playlist_id, &order)?;
        info!(written = summary.written, appends = summary.appends, "playlist rewritten");
        Some(summary)
    };

    println!("Shuffling Complete!");
    Ok(Report {
        fetched,
        skipped: skipped.len(),
        order,
        write,
    })
}

fn split_entries(entries: Vec<PlaylistEntry>) -> (Vec<TrackUri>, Vec<String>) {
    let mut tracks = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();
    for entry in entries {
        match entry {
            PlaylistEntry::Playable(uri) => tracks.push(uri),
            PlaylistEntry::Unwritable { description } => skipped.push(description),
        }
    }
    (tracks, skipped)
}

fn print_tracks(tracks: &[TrackUri]) {
    for (index, track) in tracks.iter().enumerate() {
        println!("{index}: {track}");
    }
}
