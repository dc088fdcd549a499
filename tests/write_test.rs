mod common;

use common::{tracks, Call, FakePlaylist};
use spotify_playlist_shuffler::write::{replace_playlist, WriteSummary};

#[test]
fn test_write_250_is_one_replace_and_two_appends() {
    let playlist = FakePlaylist::with_tracks("mix", 5);
    let target = tracks(250);

    let summary = replace_playlist(&playlist, "mix", &target).unwrap();

    assert_eq!(
        playlist.calls(),
        vec![
            Call::Replace(target[..100].to_vec()),
            Call::Append(target[100..200].to_vec()),
            Call::Append(target[200..].to_vec()),
        ]
    );
    assert_eq!(summary, WriteSummary { written: 250, appends: 2 });
    assert_eq!(playlist.uris(), target);
}

#[test]
fn test_write_100_is_a_single_replace() {
    let playlist = FakePlaylist::with_tracks("mix", 300);
    let target = tracks(100);

    let summary = replace_playlist(&playlist, "mix", &target).unwrap();

    assert_eq!(playlist.calls(), vec![Call::Replace(target.clone())]);
    assert_eq!(summary.appends, 0);
    assert_eq!(playlist.uris(), target);
}

#[test]
fn test_write_empty_clears_playlist() {
    let playlist = FakePlaylist::with_tracks("mix", 3);

    replace_playlist(&playlist, "mix", &[]).unwrap();

    assert_eq!(playlist.calls(), vec![Call::Replace(Vec::new())]);
    assert!(playlist.entries().is_empty());
}

#[test]
fn test_write_is_idempotent() {
    let playlist = FakePlaylist::with_tracks("mix", 42);
    let mut target = tracks(321);
    target.reverse();

    replace_playlist(&playlist, "mix", &target).unwrap();
    let first = playlist.uris();
    replace_playlist(&playlist, "mix", &target).unwrap();

    assert_eq!(first, target);
    assert_eq!(playlist.uris(), target);
}

#[test]
fn test_write_failure_stops_remaining_batches() {
    // Third write call (second append) fails.
    let playlist = FakePlaylist::with_tracks("mix", 0).failing_write(2);
    let target = tracks(350);

    let err = replace_playlist(&playlist, "mix", &target).unwrap_err();

    assert!(format!("{err:#}").contains("simulated failure on write 2"));
    assert_eq!(playlist.calls().len(), 3);
    assert_eq!(playlist.uris(), target[..200].to_vec());
}
