#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use anyhow::{bail, Result};
use spotify_playlist_shuffler::{Page, PlaylistEntry, PlaylistSource, TrackUri};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch { offset: u32, limit: u32 },
    Replace(Vec<TrackUri>),
    Append(Vec<TrackUri>),
}

/// In-memory playlist that records every call made against it.
#[derive(Default)]
pub struct FakePlaylist {
    pub id: String,
    entries: RefCell<Vec<PlaylistEntry>>,
    calls: RefCell<Vec<Call>>,
    /// Zero-based index of the write call that fails, if any.
    fail_write: Option<usize>,
    writes: Cell<usize>,
}

impl FakePlaylist {
    pub fn new(id: &str, entries: Vec<PlaylistEntry>) -> Self {
        Self {
            id: id.to_owned(),
            entries: RefCell::new(entries),
            ..Default::default()
        }
    }

    pub fn with_tracks(id: &str, count: usize) -> Self {
        Self::new(id, tracks(count).into_iter().map(PlaylistEntry::Playable).collect())
    }

    pub fn failing_write(mut self, index: usize) -> Self {
        self.fail_write = Some(index);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn entries(&self) -> Vec<PlaylistEntry> {
        self.entries.borrow().clone()
    }

    pub fn uris(&self) -> Vec<TrackUri> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|entry| entry.uri().cloned())
            .collect()
    }

    fn check(&self, playlist_id: &str) -> Result<()> {
        if playlist_id != self.id {
            bail!("playlist `{playlist_id}` not found");
        }
        Ok(())
    }

    fn begin_write(&self) -> Result<()> {
        let index = self.writes.get();
        self.writes.set(index + 1);
        if self.fail_write == Some(index) {
            bail!("simulated failure on write {index}");
        }
        Ok(())
    }
}

impl PlaylistSource for FakePlaylist {
    fn fetch_page(&self, playlist_id: &str, offset: u32, limit: u32) -> Result<Page> {
        self.calls.borrow_mut().push(Call::Fetch { offset, limit });
        self.check(playlist_id)?;

        let entries = self.entries.borrow();
        let start = (offset as usize).min(entries.len());
        let end = (start + limit as usize).min(entries.len());
        Ok(Page {
            items: entries[start..end].to_vec(),
            has_more: end < entries.len(),
        })
    }

    fn replace_contents(&self, playlist_id: &str, tracks: &[TrackUri]) -> Result<()> {
        self.calls.borrow_mut().push(Call::Replace(tracks.to_vec()));
        self.check(playlist_id)?;
        self.begin_write()?;

        *self.entries.borrow_mut() = tracks.iter().cloned().map(PlaylistEntry::Playable).collect();
        Ok(())
    }

    fn append_contents(&self, playlist_id: &str, tracks: &[TrackUri]) -> Result<()> {
        self.calls.borrow_mut().push(Call::Append(tracks.to_vec()));
        self.check(playlist_id)?;
        self.begin_write()?;

        self.entries
            .borrow_mut()
            .extend(tracks.iter().cloned().map(PlaylistEntry::Playable));
        Ok(())
    }
}

pub fn tracks(count: usize) -> Vec<TrackUri> {
    (0..count)
        .map(|i| TrackUri::new(format!("spotify:track:{i:022}")))
        .collect()
}
