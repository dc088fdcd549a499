use thiserror::Error;

/// Failures raised by the shuffler itself, as opposed to errors coming back
/// from the Spotify client.
#[derive(Debug, Error)]
pub enum ShuffleError {
    #[error("missing credential: set {primary} (or {fallback}) in the environment or a .env file")]
    MissingCredential {
        primary: &'static str,
        fallback: &'static str,
    },

    #[error("no playlist id given")]
    EmptyPlaylistId,

    #[error(
        "{count} playlist item(s) are local files or unavailable and cannot be written back; \
         rerun with --skip-unwritable to drop them"
    )]
    UnwritableItems { count: usize },

    #[error("invalid track uri `{uri}`")]
    InvalidTrackUri {
        uri: String,
        #[source]
        source: rspotify::model::IdError,
    },
}
