//! Integration tests checking continuity, coverage, and reflection
//! properties of the generated curve.
#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use hilbertgen::{
        curve::{HilbertCurve, curve_index, curve_length},
        error,
    };

    /// Consecutive points must differ by Manhattan distance exactly 1.
    fn curve_continuous(order: u32, curve: &HilbertCurve) {
        let mut points = curve.points();
        let mut prev = points.next().expect("curve is non-empty");
        for (offset, pt) in points.enumerate() {
            let dist =
                (pt.0 as i64 - prev.0 as i64).abs() + (pt.1 as i64 - prev.1 as i64).abs();
            assert_eq!(
                dist,
                1,
                "order {order} is discontinuous at offset {}: {prev:?} -> {pt:?}",
                offset + 1
            );
            prev = pt;
        }
    }

    /// The curve must visit every cell of the `2^order` grid exactly once.
    fn curve_covers_grid(order: u32, curve: &HilbertCurve) {
        let side = 1u32 << order;
        let mut seen = HashSet::new();
        for (x, y) in curve.points() {
            assert!(x < side && y < side, "order {order}: ({x}, {y}) out of grid");
            assert!(
                seen.insert((x, y)),
                "order {order}: ({x}, {y}) visited twice"
            );
        }
        assert_eq!(seen.len() as u32, curve_length(order));
    }

    /// Every point must map back to its own offset.
    fn curve_reflects(order: u32, curve: &HilbertCurve) {
        for (offset, (x, y)) in curve.points().enumerate() {
            let back = curve_index(order, x, y);
            assert_eq!(
                back, offset as u32,
                "order {order} does not reflect: {offset} -> ({x}, {y}) -> {back}"
            );
        }
    }

    macro_rules! order_tests {
        ($($order:expr),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<continuous_order_ $order>]() -> error::Result<()> {
                        let curve = HilbertCurve::generate($order)?;
                        curve_continuous($order, &curve);
                        Ok(())
                    }

                    #[test]
                    fn [<covers_grid_order_ $order>]() -> error::Result<()> {
                        let curve = HilbertCurve::generate($order)?;
                        curve_covers_grid($order, &curve);
                        Ok(())
                    }

                    #[test]
                    fn [<reflects_order_ $order>]() -> error::Result<()> {
                        let curve = HilbertCurve::generate($order)?;
                        curve_reflects($order, &curve);
                        Ok(())
                    }
                }
            )*
        };
    }

    order_tests!(1, 2, 3, 4, 5);

    #[test]
    fn length_is_fourth_power() {
        for order in 1..=13u32 {
            assert_eq!(curve_length(order), 4u32.pow(order));
        }
    }
}
