//! Page canvas: records drawing operations in PDF points.
//!
//! Pages are kept as plain operation lists so the layout can be inspected
//! without parsing PDF output; `pdf.rs` serializes them afterwards.

use serde::Serialize;

use crate::config::Cmyk;

/// A point in PDF user space (points, origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pt {
    pub x: f64,
    pub y: f64,
}

impl Pt {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Font {
    Regular,
    Bold,
}

/// Duplex side of a sheet. Even pages are fronts, odd pages backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(page_number: usize) -> Self {
        if page_number % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawOp {
    /// Stroked line segment
    Line { from: Pt, to: Pt, stroke: Cmyk },
    /// Stroked circle outline
    Circle { center: Pt, radius: f64, stroke: Cmyk },
    /// Filled and stroked rectangle; `origin` is the bottom-left corner
    Rect { origin: Pt, width: f64, height: f64, color: Cmyk },
    /// Filled and stroked closed polygon
    Polygon { points: Vec<Pt>, color: Cmyk },
    /// Single line of text horizontally centered on `anchor` (baseline)
    CenteredText { text: String, anchor: Pt, font: Font, size: f32, color: Cmyk },
}

/// A card placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedCard {
    pub grid_index: usize,
    pub card_label: String,
    pub color_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Zero-based page number within the booklet
    pub number: usize,
    pub parity: Parity,
    pub ops: Vec<DrawOp>,
    pub cards: Vec<PlacedCard>,
}

impl Page {
    pub(crate) fn new(number: usize) -> Self {
        Self {
            number,
            parity: Parity::of(number),
            ops: Vec::new(),
            cards: Vec::new(),
        }
    }

    pub(crate) fn line(&mut self, from: Pt, to: Pt, stroke: Cmyk) {
        self.ops.push(DrawOp::Line { from, to, stroke });
    }

    pub(crate) fn circle(&mut self, center: Pt, radius: f64, stroke: Cmyk) {
        self.ops.push(DrawOp::Circle { center, radius, stroke });
    }

    pub(crate) fn rect(&mut self, origin: Pt, width: f64, height: f64, color: Cmyk) {
        self.ops.push(DrawOp::Rect { origin, width, height, color });
    }

    pub(crate) fn polygon(&mut self, points: Vec<Pt>, color: Cmyk) {
        self.ops.push(DrawOp::Polygon { points, color });
    }

    pub(crate) fn centered_text(&mut self, text: &str, anchor: Pt, font: Font, size: f32, color: Cmyk) {
        self.ops.push(DrawOp::CenteredText {
            text: text.to_string(),
            anchor,
            font,
            size,
            color,
        });
    }
}

/// A laid-out booklet: every page with its drawing operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub title: Option<String>,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn card_count(&self) -> usize {
        self.pages.iter().map(|p| p.cards.len()).sum()
    }
}
