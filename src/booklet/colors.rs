//! Card color assignment.
//!
//! Cards are filled column by column, so the neighbors checked for a cell
//! are its predecessor in fill order (`10*col + row - 1`) and the cell in
//! the same row of the previous column (`10*(col-1) + row`). Diagonals are
//! never compared. The map is page-local and cleared with every new page.

use std::collections::HashMap;

use rand::Rng;
use tracing::warn;

use super::constants::GRID_ROWS;

pub(crate) struct ColorAssigner {
    assigned: HashMap<usize, usize>,
    palette_len: usize,
    max_draws: u32,
}

impl ColorAssigner {
    /// `palette_len` must be at least 3; the session validates the palette first.
    pub(crate) fn new(palette_len: usize, max_draws: u32) -> Self {
        Self {
            assigned: HashMap::new(),
            palette_len,
            max_draws,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.assigned.clear();
    }

    pub(crate) fn color_of(&self, card_index: usize) -> Option<usize> {
        self.assigned.get(&card_index).copied()
    }

    /// Pick a palette index for `card_index` differing from both neighbors.
    pub(crate) fn choose<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        card_index: usize,
        row: usize,
        col: usize,
    ) -> usize {
        let left = (GRID_ROWS * col + row)
            .checked_sub(1)
            .and_then(|i| self.color_of(i));
        let above = col
            .checked_sub(1)
            .and_then(|c| self.color_of(GRID_ROWS * c + row));
        let clashes = |c: usize| Some(c) == left || Some(c) == above;

        let mut color = rng.random_range(0..self.palette_len);
        let mut draws = 1;
        while clashes(color) {
            if draws > self.max_draws {
                color = (0..self.palette_len)
                    .find(|&c| !clashes(c))
                    .unwrap_or(0);
                warn!(card_index, color, draws, "color draws exhausted, using first free color");
                break;
            }
            color = rng.random_range(0..self.palette_len);
            draws += 1;
        }

        self.assigned.insert(card_index, color);
        color
    }
}
