//! Card rendering: border, ribbon banner and the four text fields.

use super::canvas::{Font, Page, Parity, Pt};
use super::constants::*;
use super::units::{mm_to_pt_abs, mm_to_pt_x, mm_to_pt_y};
use crate::config::{Cmyk, BLACK};
use crate::model::Track;

/// Top-left corner (mm) of the cell for `grid_index` on a page of `parity`.
pub(crate) fn cell_origin(grid_index: usize, parity: Parity) -> (f64, f64) {
    let row = grid_index % GRID_ROWS;
    let col = grid_index / GRID_ROWS;
    let x = match parity {
        Parity::Even => CELL_X_EVEN,
        Parity::Odd => CELL_X_ODD,
    };
    (x + col as f64 * COLUMN_PITCH, CELL_Y + row as f64 * ROW_PITCH)
}

/// Font size for the title and artist lines.
pub(crate) fn headline_font_size(text: &str) -> f32 {
    if text.chars().count() > LONG_TEXT_CHARS {
        SMALL_FONT_SIZE
    } else {
        LARGE_FONT_SIZE
    }
}

/// Ribbon outline relative to the cell origin (mm): an inset band with a
/// notch cut into each side.
pub(crate) fn ribbon_outline() -> [(f64, f64); 14] {
    let left = RIBBON_INSET;
    let right = CARD_WIDTH - RIBBON_INSET;
    let top = RIBBON_INSET;
    let bottom = CARD_HEIGHT - RIBBON_INSET;
    let notch_top = RIBBON_INSET + RIBBON_BAND;
    let notch_mid = notch_top + NOTCH_HEIGHT / 2.0;
    let notch_bottom = notch_top + NOTCH_HEIGHT;
    let right_mouth = CARD_WIDTH - (RIGHT_NOTCH_DEPTH - NOTCH_TIP);
    let right_tip = CARD_WIDTH - RIGHT_NOTCH_DEPTH;
    let left_mouth = RIBBON_INSET + LEFT_NOTCH_DEPTH - NOTCH_TIP;
    let left_tip = RIBBON_INSET + LEFT_NOTCH_DEPTH;
    [
        (left, top),
        (right, top),
        (right, notch_top),
        (right_mouth, notch_top),
        (right_tip, notch_mid),
        (right_mouth, notch_bottom),
        (right, notch_bottom),
        (right, bottom),
        (left, bottom),
        (left, notch_bottom),
        (left_mouth, notch_bottom),
        (left_tip, notch_mid),
        (left_mouth, notch_top),
        (left, notch_top),
    ]
}

/// Draw one card for `track` into its grid cell.
pub(crate) fn draw_card(
    page: &mut Page,
    grid_index: usize,
    track: &Track,
    label: &str,
    (border, fill): (Cmyk, Cmyk),
) {
    let (x, y) = cell_origin(grid_index, page.parity);
    let at = |dx: f64, dy: f64| Pt::new(mm_to_pt_x(x + dx, true), mm_to_pt_y(y + dy, true));

    let height = mm_to_pt_abs(CARD_HEIGHT);
    page.rect(
        Pt::new(mm_to_pt_x(x, true), mm_to_pt_y(y, true) - height),
        mm_to_pt_abs(CARD_WIDTH),
        height,
        border,
    );

    let ribbon = ribbon_outline().iter().map(|&(dx, dy)| at(dx, dy)).collect();
    page.polygon(ribbon, fill);

    page.centered_text(label, at(LABEL_X, SIDE_TEXT_Y), Font::Bold, SIDE_FONT_SIZE, BLACK);
    page.centered_text(
        &track.release_year,
        at(YEAR_X, SIDE_TEXT_Y),
        Font::Regular,
        SIDE_FONT_SIZE,
        BLACK,
    );
    page.centered_text(
        &track.title,
        at(CENTER_X, TITLE_Y),
        Font::Bold,
        headline_font_size(&track.title),
        BLACK,
    );
    page.centered_text(
        &track.artist,
        at(CENTER_X, ARTIST_Y),
        Font::Regular,
        headline_font_size(&track.artist),
        BLACK,
    );
}
