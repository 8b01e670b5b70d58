//! Shared constants for the booklet layout (millimeters unless noted).

// ── Page & units ────────────────────────────────────────────────────
pub(crate) const MM_PER_INCH: f64 = 25.4;
pub(crate) const POINTS_PER_INCH: f64 = 72.0;
pub(crate) const PAGE_MARGIN: f64 = 20.0;
pub(crate) const PAGE_HEIGHT: f64 = 279.4; // US Letter, long edge
pub(crate) const PAGE_WIDTH_PT: f32 = 612.0;
pub(crate) const PAGE_HEIGHT_PT: f32 = 792.0;

// ── Grid ────────────────────────────────────────────────────────────
pub const GRID_ROWS: usize = 10;
pub const GRID_COLUMNS: usize = 2;
pub const CARDS_PER_PAGE: usize = GRID_ROWS * GRID_COLUMNS;

// ── Card cells ──────────────────────────────────────────────────────
pub(crate) const CELL_X_EVEN: f64 = 11.8;
pub(crate) const CELL_X_ODD: f64 = 2.18;
pub(crate) const CELL_Y: f64 = 2.56;
pub(crate) const COLUMN_PITCH: f64 = 65.0;
pub(crate) const ROW_PITCH: f64 = 19.0;
pub(crate) const CARD_WIDTH: f64 = 64.0;
pub(crate) const CARD_HEIGHT: f64 = 18.0;

// ── Ribbon banner ───────────────────────────────────────────────────
pub(crate) const RIBBON_INSET: f64 = 1.64;
pub(crate) const RIBBON_BAND: f64 = 4.61; // solid band above and below the notches
pub(crate) const NOTCH_HEIGHT: f64 = 5.5;
pub(crate) const RIGHT_NOTCH_DEPTH: f64 = 9.95; // measured from the card's right edge
pub(crate) const LEFT_NOTCH_DEPTH: f64 = 8.66; // measured from the inset left edge
pub(crate) const NOTCH_TIP: f64 = 2.3;

// ── Card text ───────────────────────────────────────────────────────
pub(crate) const LABEL_X: f64 = 4.64;
pub(crate) const YEAR_X: f64 = 59.36;
pub(crate) const SIDE_TEXT_Y: f64 = 11.5;
pub(crate) const CENTER_X: f64 = 32.0;
pub(crate) const TITLE_Y: f64 = 8.0;
pub(crate) const ARTIST_Y: f64 = 14.0;
pub(crate) const SIDE_FONT_SIZE: f32 = 11.0;
pub(crate) const LARGE_FONT_SIZE: f32 = 12.0;
pub(crate) const SMALL_FONT_SIZE: f32 = 8.0;
pub(crate) const LONG_TEXT_CHARS: usize = 20;

// ── Registration marks ──────────────────────────────────────────────
pub(crate) const MARK_AREA_WIDTH: f64 = 142.98;
pub(crate) const MARK_AREA_HEIGHT: f64 = 194.12;
pub(crate) const DUPLEX_GUTTER: f64 = 2.52;
pub(crate) const FIDUCIAL_ARM: f64 = 3.0;
pub(crate) const GUIDE_X: f64 = 6.24;
pub(crate) const GUIDE_Y: f64 = 49.06;
pub(crate) const GUIDE_SPACING: f64 = 96.0;
pub(crate) const GUIDE_RADIUS: f64 = 3.0;
