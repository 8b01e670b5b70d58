//! Sequencing: orders tracks and assigns card labels.
//!
//! Booklet tracks come first, then the rest; within each group tracks are
//! ordered by release year. Labels run `A0..A9, B0..B9, ...` in that order,
//! so a letter names one column of ten cards.

use crate::error::{BookletError, BookletResult};
use crate::model::Track;

const FIRST_LETTER: u8 = b'A';
const LAST_LETTER: u8 = b'Z';
const DIGITS_PER_LETTER: usize = 10;

/// Card label for the track at sequence position `position`.
pub fn card_label_for(position: usize) -> BookletResult<String> {
    let letter = position / DIGITS_PER_LETTER;
    if letter > (LAST_LETTER - FIRST_LETTER) as usize {
        return Err(BookletError::card_label(format!(
            "sequence position {position} is past the last label {}9",
            LAST_LETTER as char
        )));
    }
    let letter = (FIRST_LETTER + letter as u8) as char;
    Ok(format!("{letter}{}", position % DIGITS_PER_LETTER))
}

/// Sort tracks into print order and assign each a card label.
pub fn sequence_tracks(mut tracks: Vec<Track>) -> BookletResult<Vec<Track>> {
    tracks.sort_by(|a, b| {
        b.include_in_booklet
            .cmp(&a.include_in_booklet)
            .then_with(|| a.release_year.cmp(&b.release_year))
    });
    for (i, track) in tracks.iter_mut().enumerate() {
        track.assign_card_label(card_label_for(i)?)?;
    }
    Ok(tracks)
}

/// The booklet subset of a sequenced playlist, order preserved.
pub fn booklet_tracks(tracks: &[Track]) -> Vec<Track> {
    tracks.iter().filter(|t| t.include_in_booklet).cloned().collect()
}
