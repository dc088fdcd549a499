use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Sends `tracing` output to stderr so it never mixes with the prompt on stdout.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose {
        "spotify_playlist_shuffler=debug,rspotify=info,warn"
    } else {
        "spotify_playlist_shuffler=warn,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}
