//! Data model for playlist tracks and the cards printed for them.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{BookletError, BookletResult};

/// One song on the jukebox playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Stable identifier from the source playlist (also the audio file stem)
    pub external_id: String,
    pub title: String,
    pub artist: String,
    /// Release year as displayed on the card
    pub release_year: String,
    /// Whether the track gets a card in the printed booklet
    pub include_in_booklet: bool,
    /// Short code printed on the card (e.g. "A0"); assigned once during sequencing
    #[serde(default)]
    card_label: Option<String>,
}

impl Track {
    pub fn new(
        external_id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        release_year: impl Into<String>,
        include_in_booklet: bool,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            title: title.into(),
            artist: artist.into(),
            release_year: release_year.into(),
            include_in_booklet,
            card_label: None,
        }
    }

    pub fn card_label(&self) -> Option<&str> {
        self.card_label.as_deref()
    }

    /// Assign the card label. A label can only be set once.
    pub fn assign_card_label(&mut self, label: impl Into<String>) -> BookletResult<()> {
        let label = label.into();
        if let Some(existing) = &self.card_label {
            return Err(BookletError::card_label(format!(
                "track '{}' already labeled '{existing}', refusing '{label}'",
                self.external_id
            )));
        }
        self.card_label = Some(label);
        Ok(())
    }

    /// Builder-style variant of [`Track::assign_card_label`] for fresh tracks.
    pub fn with_card_label(mut self, label: impl Into<String>) -> Self {
        if self.card_label.is_none() {
            self.card_label = Some(label.into());
        }
        self
    }
}

/// A raw playlist row as stored in the playlist JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, deserialize_with = "year_as_string")]
    pub year: String,
    /// "yes" = printed in the booklet, "no" = dropped, anything else = audio only
    #[serde(default)]
    pub selected: Option<String>,
}

/// Selection state of a playlist row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Booklet,
    AudioOnly,
    Excluded,
}

impl PlaylistRow {
    pub fn selection(&self) -> Selection {
        match self.selected.as_deref().map(|s| s.trim().to_lowercase()) {
            Some(s) if s == "yes" => Selection::Booklet,
            Some(s) if s == "no" => Selection::Excluded,
            _ => Selection::AudioOnly,
        }
    }
}

fn year_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<Year>::deserialize(deserializer)? {
        Some(Year::Text(s)) => s,
        Some(Year::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
