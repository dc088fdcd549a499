//! The remote operations the shuffler needs from a playlist backend.

use anyhow::Result;

use crate::track::{PlaylistEntry, TrackUri};

/// A single page of playlist items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<PlaylistEntry>,
    /// Whether the backend reported a further page after this one.
    pub has_more: bool,
}

/// Backend holding playlists, read by page and written by batch.
///
/// Implemented by [`crate::spotify::Session`] against the Web API. All calls
/// are blocking and made strictly one after another.
pub trait PlaylistSource {
    /// Reads up to `limit` items starting at `offset`.
    fn fetch_page(&self, playlist_id: &str, offset: u32, limit: u32) -> Result<Page>;

    /// Clears the playlist and sets its contents to exactly `tracks`.
    fn replace_contents(&self, playlist_id: &str, tracks: &[TrackUri]) -> Result<()>;

    /// Appends `tracks` to the end of the playlist.
    fn append_contents(&self, playlist_id: &str, tracks: &[TrackUri]) -> Result<()>;
}
