//! Registration marks drawn on every new page.
//!
//! Back pages (odd) mirror the mark positions to the right so front and
//! back stay in register once the duplex sheet is cut.

use super::canvas::{Page, Parity, Pt};
use super::constants::*;
use super::units::{mm_to_pt_abs, mm_to_pt_x, mm_to_pt_y};
use crate::config::LIGHT_GREY;

/// Corner positions (mm) of the four fiducial crosses.
pub(crate) fn fiducial_corners(parity: Parity) -> [(f64, f64); 4] {
    let (left, right) = match parity {
        Parity::Even => (0.0, MARK_AREA_WIDTH + DUPLEX_GUTTER),
        Parity::Odd => (-DUPLEX_GUTTER, MARK_AREA_WIDTH),
    };
    [
        (left, 0.0),
        (right, 0.0),
        (right, MARK_AREA_HEIGHT),
        (left, MARK_AREA_HEIGHT),
    ]
}

/// Centers (mm) of the two punch guide circles.
pub(crate) fn guide_centers(parity: Parity) -> [(f64, f64); 2] {
    let x = match parity {
        Parity::Even => GUIDE_X,
        Parity::Odd => MARK_AREA_WIDTH - GUIDE_X,
    };
    [(x, GUIDE_Y), (x, GUIDE_Y + GUIDE_SPACING)]
}

pub(crate) fn draw_registration_marks(page: &mut Page) {
    for (x, y) in fiducial_corners(page.parity) {
        draw_fiducial(page, x, y);
    }
    for (x, y) in guide_centers(page.parity) {
        page.circle(
            Pt::new(mm_to_pt_x(x, true), mm_to_pt_y(y, true)),
            mm_to_pt_abs(GUIDE_RADIUS),
            LIGHT_GREY,
        );
    }
}

fn draw_fiducial(page: &mut Page, x: f64, y: f64) {
    page.line(
        Pt::new(mm_to_pt_x(x - FIDUCIAL_ARM, true), mm_to_pt_y(y, true)),
        Pt::new(mm_to_pt_x(x + FIDUCIAL_ARM, true), mm_to_pt_y(y, true)),
        LIGHT_GREY,
    );
    page.line(
        Pt::new(mm_to_pt_x(x, true), mm_to_pt_y(y - FIDUCIAL_ARM, true)),
        Pt::new(mm_to_pt_x(x, true), mm_to_pt_y(y + FIDUCIAL_ARM, true)),
        LIGHT_GREY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booklet::canvas::DrawOp;

    fn assert_points(actual: &[(f64, f64)], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(
                (a.0 - e.0).abs() < 1e-9 && (a.1 - e.1).abs() < 1e-9,
                "{a:?} != {e:?}"
            );
        }
    }

    #[test]
    fn even_page_marks_anchor_left() {
        assert_points(
            &fiducial_corners(Parity::Even),
            &[(0.0, 0.0), (145.5, 0.0), (145.5, 194.12), (0.0, 194.12)],
        );
        assert_points(&guide_centers(Parity::Even), &[(6.24, 49.06), (6.24, 145.06)]);
    }

    #[test]
    fn odd_page_marks_mirror_right() {
        assert_points(
            &fiducial_corners(Parity::Odd),
            &[(-2.52, 0.0), (142.98, 0.0), (142.98, 194.12), (-2.52, 194.12)],
        );
        assert_points(&guide_centers(Parity::Odd), &[(136.74, 49.06), (136.74, 145.06)]);
    }

    #[test]
    fn marks_are_eight_lines_and_two_circles() {
        let mut page = Page::new(0);
        draw_registration_marks(&mut page);
        let lines = page.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count();
        let circles: Vec<&DrawOp> = page
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .collect();
        assert_eq!(lines, 8);
        assert_eq!(circles.len(), 2);
        if let DrawOp::Circle { center, radius, stroke } = circles[0] {
            assert!((center.x - mm_to_pt_x(6.24, true)).abs() < 1e-9);
            assert!((center.y - mm_to_pt_y(49.06, true)).abs() < 1e-9);
            assert!((radius - 3.0 / 25.4 * 72.0).abs() < 1e-9);
            assert_eq!(*stroke, LIGHT_GREY);
        }
    }

    #[test]
    fn first_fiducial_crosses_at_card_area_origin() {
        let mut page = Page::new(0);
        draw_registration_marks(&mut page);
        let DrawOp::Line { from, to, .. } = &page.ops[0] else {
            panic!("expected a line");
        };
        let x0 = mm_to_pt_x(0.0, true);
        let y0 = mm_to_pt_y(0.0, true);
        assert!((from.x - (x0 - mm_to_pt_abs(3.0))).abs() < 1e-9);
        assert!((to.x - (x0 + mm_to_pt_abs(3.0))).abs() < 1e-9);
        assert!((from.y - y0).abs() < 1e-9 && (to.y - y0).abs() < 1e-9);
    }
}
