use std::io;

use anyhow::Result;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use spotify_playlist_shuffler::{
    app::{shuffle_playlist, RunOptions},
    config::Config,
    input::{parse_playlist_id, prompt_playlist_id},
    logging::init_logging,
    shuffle::Shuffler,
    spotify::Session,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Playlist id, spotify:playlist: URI or share URL. Asked for if omitted.
    playlist: Option<String>,

    /// If specified, no changes are actually made to the playlist
    #[arg(short, long)]
    dry_run: bool,

    /// Seed for the shuffle, for a reproducible order
    #[arg(long)]
    seed: Option<u64>,

    /// Drop local files and unavailable tracks instead of aborting
    #[arg(long)]
    skip_unwritable: bool,

    /// Neither read nor write the cached OAuth token
    #[arg(long)]
    no_token_cache: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config = Config::from_env()?;
    tracing::debug!(?config, "loaded configuration");

    let playlist_id = match &args.playlist {
        Some(playlist) => parse_playlist_id(playlist)?,
        None => prompt_playlist_id(io::stdin().lock(), io::stdout())?,
    };
    tracing::debug!(%playlist_id, "target playlist");

    let session = Session::authenticate(&config, !args.no_token_cache)?;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let options = RunOptions {
        dry_run: args.dry_run,
        skip_unwritable: args.skip_unwritable,
    };

    shuffle_playlist(&session, &playlist_id, options, |tracks| {
        Shuffler::new(tracks, rng).shuffled().to_vec()
    })?;
    Ok(())
}
