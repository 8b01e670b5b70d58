//! bookletlib: card booklet layout for a jukebox playlist.
//!
//! Reads a playlist, orders it and assigns each track a short card label
//! (`A0`, `A1`, ...), then lays the booklet tracks out as colored label
//! cards on duplex US Letter pages and writes a print-ready PDF.
//!
//! # Example
//! ```no_run
//! use bookletlib::{BookletConfig, booklet_tracks, create_booklet, parse_playlist_file, sequence_tracks};
//!
//! let tracks = sequence_tracks(parse_playlist_file("playlist.json").unwrap()).unwrap();
//! let doc = create_booklet("booklet.pdf", &booklet_tracks(&tracks), &BookletConfig::default()).unwrap();
//! println!("Pages: {}", doc.page_count());
//! ```

pub mod booklet;
pub mod config;
pub mod error;
pub mod model;
pub mod playlist;
pub mod sequence;

use std::path::Path;

pub use booklet::{
    create_booklet, layout_booklet, render_booklet_pdf, write_pdf, BookletSession, BookletState,
    Document,
};
pub use config::{BookletConfig, Cmyk, Palette};
pub use error::{BookletError, BookletResult};
pub use model::*;
pub use playlist::{parse_playlist_file, parse_playlist_json, tracks_to_json};
pub use sequence::{booklet_tracks, card_label_for, sequence_tracks};

/// Read a playlist file, sequence it and write the booklet PDF.
/// Returns every sequenced track (with labels) and the laid-out booklet.
pub fn create_booklet_from_playlist<P: AsRef<Path>, Q: AsRef<Path>>(
    playlist: P,
    output: Q,
    config: &BookletConfig,
) -> BookletResult<(Vec<Track>, Document)> {
    let tracks = sequence_tracks(parse_playlist_file(playlist)?)?;
    let doc = create_booklet(output, &booklet_tracks(&tracks), config)?;
    Ok((tracks, doc))
}
