use std::fmt;

/// Opaque Spotify URI of a playlist entry, e.g. `spotify:track:4uLU6hMCjMI75M1A2tKUQC`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackUri(String);

impl TrackUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TrackUri {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

impl From<&str> for TrackUri {
    fn from(uri: &str) -> Self {
        Self(uri.to_owned())
    }
}

/// One item of a playlist as returned by a page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistEntry {
    /// A track or episode that can be written back by URI.
    Playable(TrackUri),
    /// A local file or an item no longer available in the catalog.
    Unwritable { description: String },
}

impl PlaylistEntry {
    pub fn uri(&self) -> Option<&TrackUri> {
        match self {
            PlaylistEntry::Playable(uri) => Some(uri),
            PlaylistEntry::Unwritable { .. } => None,
        }
    }
}
