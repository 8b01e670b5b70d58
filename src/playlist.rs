//! Playlist reader: turns playlist JSON rows into tracks.
//!
//! The playlist file is a JSON array of rows:
//!
//! ```json
//! [
//!   { "id": "0001", "title": "Heartbreak Hotel", "artist": "Elvis Presley", "year": 1956, "selected": "yes" }
//! ]
//! ```
//!
//! Rows marked `"selected": "no"` and rows without an id are skipped.

use std::path::Path;

use tracing::warn;

use crate::error::{BookletError, BookletResult};
use crate::model::{PlaylistRow, Selection, Track};

/// Read a playlist JSON file from disk.
pub fn parse_playlist_file<P: AsRef<Path>>(path: P) -> BookletResult<Vec<Track>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        BookletError::playlist(format!("failed to read '{}': {e}", path.display()))
    })?;
    parse_playlist_json(&text)
}

/// Parse playlist JSON text into tracks, in file order.
pub fn parse_playlist_json(json: &str) -> BookletResult<Vec<Track>> {
    let rows: Vec<PlaylistRow> = serde_json::from_str(json)
        .map_err(|e| BookletError::playlist(format!("invalid playlist JSON: {e}")))?;
    Ok(tracks_from_rows(rows))
}

/// Convert rows to tracks, dropping excluded rows and rows without an id.
pub fn tracks_from_rows(rows: Vec<PlaylistRow>) -> Vec<Track> {
    let mut tracks = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let selection = row.selection();
        if selection == Selection::Excluded {
            continue;
        }
        if row.id.trim().is_empty() {
            warn!(row = i, title = %row.title, "skipping playlist row without id");
            continue;
        }
        tracks.push(Track::new(
            row.id,
            row.title,
            row.artist,
            row.year,
            selection == Selection::Booklet,
        ));
    }
    tracks
}

/// Serialize tracks (including assigned card labels) to pretty JSON.
pub fn tracks_to_json(tracks: &[Track]) -> BookletResult<String> {
    Ok(serde_json::to_string_pretty(tracks)?)
}
