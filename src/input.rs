use std::io::{BufRead, Write};

use itertools::Itertools;

use crate::error::ShuffleError;

pub const PROMPT: &str = "Enter Playlist ID: ";

/// Asks the operator for a playlist and returns the extracted id.
pub fn prompt_playlist_id<R: BufRead, W: Write>(mut input: R, mut output: W) -> anyhow::Result<String> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_playlist_id(&line)?)
}

/// Pulls the playlist id out of a bare id, a `spotify:playlist:` URI, or a
/// share URL such as
/// `https://open.spotify.com/playlist/4gnFxHWeDZveC6COR3HWnv?si=018f62b3b9bf4513`.
///
/// The id itself is not checked; the API rejects bad ones.
pub fn parse_playlist_id(input: &str) -> Result<String, ShuffleError> {
    let input = input.trim();

    let id = if let Some(id) = input.strip_prefix("spotify:playlist:") {
        id
    } else if input.contains("://") {
        let segments = input.split(&['/', '?', '#']).collect_vec();
        segments
            .iter()
            .position(|segment| *segment == "playlist")
            .and_then(|index| segments.get(index + 1))
            .copied()
            .unwrap_or_default()
    } else {
        input
    };

    if id.is_empty() {
        return Err(ShuffleError::EmptyPlaylistId);
    }
    Ok(id.to_owned())
}
