//! Shuffles a Spotify playlist in place.
//!
//! The whole playlist is read page by page ([`fetch`]), permuted uniformly at
//! random ([`shuffle`]) and written back in batches of 100 ([`write`]). The
//! remote side sits behind [`source::PlaylistSource`], implemented for the Web
//! API by [`spotify::Session`].

pub mod app;
pub mod config;
pub mod error;
pub mod fetch;
pub mod input;
pub mod logging;
pub mod shuffle;
pub mod source;
pub mod spotify;
pub mod track;
pub mod write;

pub use error::ShuffleError;
pub use source::{Page, PlaylistSource};
pub use track::{PlaylistEntry, TrackUri};
