//! Spotify Web API backend, built on a blocking `rspotify` client.

use anyhow::{Context, Result};
use rspotify::{
    clients::{BaseClient, OAuthClient},
    model::{EpisodeId, PlayableId, PlayableItem, PlaylistId, PlaylistItem, TrackId},
    prelude::Id,
    AuthCodeSpotify, Credentials, OAuth,
};
use tracing::{debug, info};

use crate::config::{Config, SCOPES};
use crate::error::ShuffleError;
use crate::source::{Page, PlaylistSource};
use crate::track::{PlaylistEntry, TrackUri};

/// An authorized connection to the Web API, held for one run.
///
/// The token is refreshed by `rspotify` when it expires, so a session can
/// outlive the one-hour access token.
pub struct Session {
    client: AuthCodeSpotify,
}

impl Session {
    /// Runs the authorization-code flow: opens the authorize URL and reads the
    /// redirected URL back from the terminal, unless a cached token is usable.
    pub fn authenticate(config: &Config, cache_token: bool) -> Result<Self> {
        let creds = Credentials::new(&config.client_id, &config.client_secret);
        let oauth = OAuth {
            redirect_uri: config.redirect_uri.clone(),
            scopes: SCOPES.iter().map(|scope| scope.to_string()).collect(),
            ..Default::default()
        };

        let mut client_config = rspotify::Config {
            token_cached: cache_token,
            token_refreshing: true,
            ..Default::default()
        };
        if let Some(path) = &config.token_cache_path {
            client_config.cache_path = path.clone();
        }

        let client = AuthCodeSpotify::with_config(creds, oauth, client_config);
        let url = client
            .get_authorize_url(false)
            .context("failed to build the Spotify authorization URL")?;
        client
            .prompt_for_token(&url)
            .context("failed to log in to Spotify")?;
        info!("authorized with Spotify");

        Ok(Self { client })
    }
}

impl PlaylistSource for Session {
    fn fetch_page(&self, playlist_id: &str, offset: u32, limit: u32) -> Result<Page> {
        let page = self.client.playlist_items_manual(
            playlist_id_of(playlist_id)?,
            None,
            None,
            Some(limit),
            Some(offset),
        )?;
        debug!(total = page.total, offset = page.offset, "playlist items page");

        Ok(Page {
            has_more: page.next.is_some(),
            items: page.items.into_iter().map(entry_of).collect(),
        })
    }

    fn replace_contents(&self, playlist_id: &str, tracks: &[TrackUri]) -> Result<()> {
        let ids = playable_ids(tracks)?;
        self.client
            .playlist_replace_items(playlist_id_of(playlist_id)?, ids)?;
        Ok(())
    }

    fn append_contents(&self, playlist_id: &str, tracks: &[TrackUri]) -> Result<()> {
        let ids = playable_ids(tracks)?;
        let result = self
            .client
            .playlist_add_items(playlist_id_of(playlist_id)?, ids, None)?;
        debug!(snapshot_id = %result.snapshot_id, "appended items");
        Ok(())
    }
}

fn playlist_id_of(id: &str) -> Result<PlaylistId<'_>> {
    PlaylistId::from_id(id).with_context(|| format!("invalid playlist id `{id}`"))
}

fn entry_of(item: PlaylistItem) -> PlaylistEntry {
    match item.track {
        Some(PlayableItem::Track(track)) => match track.id {
            Some(id) => PlaylistEntry::Playable(TrackUri::new(id.uri())),
            None => PlaylistEntry::Unwritable {
                description: format!("local file `{}`", track.name),
            },
        },
        Some(PlayableItem::Episode(episode)) => PlaylistEntry::Playable(TrackUri::new(episode.id.uri())),
        _ => PlaylistEntry::Unwritable {
            description: "unavailable item".to_owned(),
        },
    }
}

fn playable_ids(tracks: &[TrackUri]) -> Result<Vec<PlayableId<'_>>, ShuffleError> {
    tracks.iter().map(playable_id).collect()
}

fn playable_id(uri: &TrackUri) -> Result<PlayableId<'_>, ShuffleError> {
    let raw = uri.as_str();
    let id = if raw.starts_with("spotify:episode:") {
        EpisodeId::from_uri(raw).map(PlayableId::Episode)
    } else {
        TrackId::from_uri(raw).map(PlayableId::Track)
    };
    id.map_err(|source| ShuffleError::InvalidTrackUri {
        uri: raw.to_owned(),
        source,
    })
}
