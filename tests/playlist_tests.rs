//! Playlist tests: reading, sequencing and the playlist → booklet pipeline.

use bookletlib::{
    booklet_tracks, create_booklet_from_playlist, parse_playlist_file, sequence_tracks,
    tracks_to_json, BookletConfig, Track,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn output_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn summary(tracks: &[Track]) -> Vec<(&str, &str, bool)> {
    tracks
        .iter()
        .map(|t| {
            (
                t.external_id.as_str(),
                t.card_label().unwrap_or("-"),
                t.include_in_booklet,
            )
        })
        .collect()
}

#[test]
fn fixture_rows_filtered() {
    let tracks = parse_playlist_file(fixture("playlist.json")).unwrap();
    let ids: Vec<&str> = tracks.iter().map(|t| t.external_id.as_str()).collect();
    // "no" row and the row without an id are dropped
    assert_eq!(ids, vec!["0007", "0003", "0015", "0021", "0022", "0030"]);
    assert_eq!(tracks[2].release_year, "1968");
}

#[test]
fn fixture_sequenced_booklet_first_by_year() {
    let tracks = sequence_tracks(parse_playlist_file(fixture("playlist.json")).unwrap()).unwrap();
    assert_eq!(
        summary(&tracks),
        vec![
            ("0003", "A0", true),
            ("0022", "A1", true),
            ("0007", "A2", true),
            ("0015", "A3", true),
            ("0030", "A4", false),
            ("0021", "A5", false),
        ]
    );

    let booklet = booklet_tracks(&tracks);
    let labels: Vec<&str> = booklet.iter().filter_map(|t| t.card_label()).collect();
    assert_eq!(labels, vec!["A0", "A1", "A2", "A3"]);
}

#[test]
fn labels_survive_json_round_trip() {
    let tracks = sequence_tracks(parse_playlist_file(fixture("playlist.json")).unwrap()).unwrap();
    let json = tracks_to_json(&tracks).unwrap();
    let back: Vec<Track> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tracks);
    assert!(json.contains("\"card_label\": \"A3\""));
}

#[test]
fn playlist_to_booklet_pipeline() {
    let out = output_dir().join("fixture_booklet.pdf");
    let config = BookletConfig::default().with_seed(7);
    let (tracks, doc) = create_booklet_from_playlist(fixture("playlist.json"), &out, &config).unwrap();
    assert_eq!(tracks.len(), 6);
    assert_eq!(doc.page_count(), 1);
    assert_eq!(doc.card_count(), 4);
    assert!(std::fs::read(&out).unwrap().starts_with(b"%PDF-"));
    println!("✓ Wrote {}", out.display());
}

#[test]
fn missing_playlist_is_playlist_error() {
    let err = parse_playlist_file(fixture("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, bookletlib::BookletError::Playlist(_)));
}
