//! Walks a generated curve into a raster canvas.

use crate::{bitmap::BinaryImage, curve::HilbertCurve};

/// Rasterize `curve` into a square canvas of side `2 * curve.side()`.
///
/// Each curve point `(x, y)` is plotted at its doubled position
/// `(2y, 2x)`, leaving a one-pixel gap between consecutive points that is
/// filled by also plotting `(y + last_y, x + last_x)` — the coordinate sum
/// with the previous point, which for adjacent points lands exactly on the
/// gap pixel. The cursor starts at the origin.
///
/// Every coordinate is below `curve.side()`, so both the doubled position
/// and the coordinate sum stay inside the canvas.
pub fn draw_curve(curve: &HilbertCurve) -> BinaryImage {
    let side = curve.side() * 2;
    let mut image = BinaryImage::new(side, side);

    let mut last_x = 0;
    let mut last_y = 0;
    for (x, y) in curve.points() {
        image.set_pixel(y + last_y, x + last_x);
        image.set_pixel(2 * y, 2 * x);
        last_x = x;
        last_y = y;
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_1_pixels() {
        let curve = HilbertCurve::generate(1).unwrap();
        let image = draw_curve(&curve);
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 4);

        // Points (0,0),(1,0),(1,1),(0,1) doubled plus their connective sums.
        let expected = [(0, 0), (0, 1), (0, 2), (1, 2), (2, 0), (2, 1), (2, 2)];
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(
                    image.get_pixel(row, col),
                    expected.contains(&(row, col)),
                    "pixel ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn canvas_dimensions_double_the_grid() {
        for order in 1..=4 {
            let curve = HilbertCurve::generate(order).unwrap();
            let image = draw_curve(&curve);
            assert_eq!(image.width(), 1 << (order + 1));
            assert_eq!(image.height(), 1 << (order + 1));
        }
    }

    #[test]
    fn origin_is_always_set() {
        let curve = HilbertCurve::generate(3).unwrap();
        let image = draw_curve(&curve);
        assert!(image.get_pixel(0, 0));
    }
}
