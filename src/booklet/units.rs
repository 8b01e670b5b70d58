//! Millimeter → PDF point conversion.
//!
//! Layout coordinates are millimeters from the top-left corner of the card
//! area. PDF user space has its origin at the bottom-left of the sheet, so
//! the vertical conversion flips the axis after applying the page margin.

use super::constants::*;

/// Horizontal position in points; `apply_margin` shifts by the page margin.
pub fn mm_to_pt_x(mm: f64, apply_margin: bool) -> f64 {
    let mm = if apply_margin { mm + PAGE_MARGIN } else { mm };
    mm_to_pt_abs(mm)
}

/// Vertical position in points; `apply_margin` shifts by the page margin and
/// flips from top-down to bottom-up.
pub fn mm_to_pt_y(mm: f64, apply_margin: bool) -> f64 {
    let mm = if apply_margin { PAGE_HEIGHT - (mm + PAGE_MARGIN) } else { mm };
    mm_to_pt_abs(mm)
}

/// A length (width, height, radius) in points.
pub fn mm_to_pt_abs(mm: f64) -> f64 {
    mm / MM_PER_INCH * POINTS_PER_INCH
}

pub fn pt_to_mm(pt: f64) -> f64 {
    pt / POINTS_PER_INCH * MM_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn zero_without_margin_is_origin() {
        assert_eq!(mm_to_pt_x(0.0, false), 0.0);
        assert_eq!(mm_to_pt_y(0.0, false), 0.0);
        assert_eq!(mm_to_pt_abs(0.0), 0.0);
    }

    #[test]
    fn one_inch_is_72_points() {
        assert!((mm_to_pt_abs(25.4) - 72.0).abs() < EPS);
        assert!((mm_to_pt_x(25.4, false) - 72.0).abs() < EPS);
    }

    #[test]
    fn margin_shifts_x() {
        let expected = 20.0 / 25.4 * 72.0;
        assert!((mm_to_pt_x(0.0, true) - expected).abs() < EPS);
        assert!((mm_to_pt_x(10.0, true) - (30.0 / 25.4 * 72.0)).abs() < EPS);
    }

    #[test]
    fn y_flips_to_top_of_printable_area() {
        let top = (279.4 - 20.0) / 25.4 * 72.0;
        assert!((mm_to_pt_y(0.0, true) - top).abs() < EPS);
        // moving down the page in mm lowers the PDF y coordinate
        assert!(mm_to_pt_y(10.0, true) < mm_to_pt_y(0.0, true));
        assert!((mm_to_pt_y(0.0, true) - mm_to_pt_y(10.0, true) - mm_to_pt_abs(10.0)).abs() < EPS);
    }

    #[test]
    fn conversion_is_linear_and_invertible() {
        for mm in [0.0, 0.5, 1.64, 18.0, 64.0, 142.98, 279.4, -2.52] {
            let pt = mm_to_pt_x(mm, false);
            assert!((mm_to_pt_x(pt_to_mm(pt), false) - pt).abs() < EPS);
            assert!((pt_to_mm(pt) - mm).abs() < EPS);
            assert!((mm_to_pt_abs(2.0 * mm) - 2.0 * mm_to_pt_abs(mm)).abs() < EPS);
        }
    }
}
