//! Booklet layout: places one label card per track on duplex pages.
//!
//! Each US Letter page holds a 10 × 2 grid of cards filled column by column.
//! Pages alternate between front (even) and back (odd) placement so the
//! printed sheet lines up with its registration marks on both sides.
//!
//! Layout happens in a [`BookletSession`], which records drawing operations
//! into a [`Document`]; [`write_pdf`] turns that into PDF bytes.

mod canvas;
mod card;
mod colors;
mod constants;
mod metrics;
mod page;
mod pdf;
pub mod units;

use std::path::Path;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::BookletConfig;
use crate::error::{BookletError, BookletResult};
use crate::model::Track;
use colors::ColorAssigner;

pub use canvas::{Document, DrawOp, Font, Page, Parity, PlacedCard, Pt};
pub use constants::{CARDS_PER_PAGE, GRID_COLUMNS, GRID_ROWS};
pub use pdf::write_pdf;

/// Where the orchestrator is in producing a booklet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookletState {
    BeforeFirstPage,
    Paginating,
    Closed,
}

/// Mutable state for laying out one booklet: the finished pages, the page
/// being drawn, its color map and the random source for card colors.
pub struct BookletSession {
    config: BookletConfig,
    rng: SmallRng,
    colors: ColorAssigner,
    pages: Vec<Page>,
    current: Option<Page>,
    state: BookletState,
}

impl BookletSession {
    /// Start a session. Fails if the palette cannot separate two neighbors.
    pub fn new(config: BookletConfig) -> BookletResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let colors = ColorAssigner::new(config.palette.len(), config.max_color_draws);
        Ok(Self {
            config,
            rng,
            colors,
            pages: Vec::new(),
            current: None,
            state: BookletState::BeforeFirstPage,
        })
    }

    pub fn state(&self) -> BookletState {
        self.state
    }

    /// Number of pages begun so far, including the active one.
    pub fn page_count(&self) -> usize {
        self.pages.len() + usize::from(self.current.is_some())
    }

    /// The page currently being drawn, if any.
    pub fn current_page(&self) -> Option<&Page> {
        self.current.as_ref()
    }

    /// Finish the active page and start a new one with registration marks.
    pub fn begin_page(&mut self) {
        self.colors.reset();
        if let Some(done) = self.current.take() {
            self.pages.push(done);
        }
        let mut page = Page::new(self.pages.len());
        page::draw_registration_marks(&mut page);
        debug!(page = page.number, parity = ?page.parity, "began page");
        self.current = Some(page);
        self.state = BookletState::Paginating;
    }

    /// Draw the card for `track` at `grid_index` on the active page.
    ///
    /// Without an active page this does nothing.
    pub fn draw_card(&mut self, grid_index: usize, track: &Track) {
        let Some(page) = self.current.as_mut() else {
            return;
        };
        let row = grid_index % GRID_ROWS;
        let col = grid_index / GRID_ROWS;
        let color_index = self.colors.choose(&mut self.rng, grid_index, row, col);
        let label = track.card_label().unwrap_or_default();
        card::draw_card(
            page,
            grid_index,
            track,
            label,
            self.config.palette.pair(color_index),
        );
        page.cards.push(PlacedCard {
            grid_index,
            card_label: label.to_string(),
            color_index,
        });
    }

    /// Close the session and return the laid-out document.
    pub fn finish(mut self) -> Document {
        if let Some(done) = self.current.take() {
            self.pages.push(done);
        }
        self.state = BookletState::Closed;
        Document {
            title: self.config.title.clone(),
            pages: self.pages,
        }
    }
}

/// Lay out `tracks` in order, 20 cards per page.
///
/// Every track must already carry its card label. At least one page is
/// produced, even for an empty list.
#[tracing::instrument(skip_all, fields(tracks = tracks.len()))]
pub fn layout_booklet(tracks: &[Track], config: &BookletConfig) -> BookletResult<Document> {
    if let Some(t) = tracks.iter().find(|t| t.card_label().is_none()) {
        return Err(BookletError::card_label(format!(
            "track '{}' ({}) has no card label",
            t.external_id, t.title
        )));
    }

    let mut session = BookletSession::new(config.clone())?;
    session.begin_page();
    for (i, track) in tracks.iter().enumerate() {
        if i % CARDS_PER_PAGE == 0 && i != 0 {
            session.begin_page();
        }
        session.draw_card(i % CARDS_PER_PAGE, track);
    }
    Ok(session.finish())
}

/// Lay out `tracks` and return the booklet as PDF bytes.
pub fn render_booklet_pdf(tracks: &[Track], config: &BookletConfig) -> BookletResult<Vec<u8>> {
    let doc = layout_booklet(tracks, config)?;
    Ok(write_pdf(&doc))
}

/// Lay out `tracks` and write the booklet PDF to `path`.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display(), tracks = tracks.len()))]
pub fn create_booklet<P: AsRef<Path>>(
    path: P,
    tracks: &[Track],
    config: &BookletConfig,
) -> BookletResult<Document> {
    let doc = layout_booklet(tracks, config)?;
    let bytes = write_pdf(&doc);
    std::fs::write(path.as_ref(), &bytes)?;
    info!(
        pages = doc.page_count(),
        cards = doc.card_count(),
        bytes = bytes.len(),
        "wrote booklet"
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(n: usize) -> Vec<Track> {
        (0..n)
            .map(|i| {
                Track::new(i.to_string(), format!("Song {i}"), "Artist", "1970", true)
                    .with_card_label(format!("X{i}"))
            })
            .collect()
    }

    #[test]
    fn draw_without_page_is_noop() {
        let mut session = BookletSession::new(BookletConfig::default().with_seed(1)).unwrap();
        assert_eq!(session.state(), BookletState::BeforeFirstPage);
        session.draw_card(0, &labeled(1)[0]);
        assert_eq!(session.page_count(), 0);
        let doc = session.finish();
        assert_eq!(doc.page_count(), 0);
    }

    #[test]
    fn begin_page_tracks_parity_and_resets_colors() {
        let mut session = BookletSession::new(BookletConfig::default().with_seed(2)).unwrap();
        session.begin_page();
        assert_eq!(session.state(), BookletState::Paginating);
        session.draw_card(0, &labeled(1)[0]);
        assert!(session.colors.color_of(0).is_some());
        session.begin_page();
        assert_eq!(session.colors.color_of(0), None);
        let page = session.current_page().unwrap();
        assert_eq!(page.number, 1);
        assert_eq!(page.parity, Parity::Odd);
        assert_eq!(session.page_count(), 2);
    }

    #[test]
    fn layout_requires_labels() {
        let tracks = vec![Track::new("1", "t", "a", "2000", true)];
        let err = layout_booklet(&tracks, &BookletConfig::default()).unwrap_err();
        assert!(matches!(err, BookletError::CardLabel(_)));
    }

    #[test]
    fn invalid_palette_fails_before_layout() {
        let mut config = BookletConfig::default();
        config.palette.borders.truncate(2);
        config.palette.fills.truncate(2);
        assert!(matches!(
            layout_booklet(&labeled(3), &config),
            Err(BookletError::Config(_))
        ));
    }

    #[test]
    fn seeded_layout_is_reproducible() {
        let config = BookletConfig::default().with_seed(42);
        let a = layout_booklet(&labeled(45), &config).unwrap();
        let b = layout_booklet(&labeled(45), &config).unwrap();
        assert_eq!(a, b);
    }
}
