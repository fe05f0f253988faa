// ── Coordinate value type ─────────────────────────────────────────────────────
//
// Pure Rust; no platform imports.  `Coord` is `Copy` and has no mutators:
// once built, a coordinate never changes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in 2D Cartesian space.
///
/// Fields are plain `f64`s with no range restriction.  All operations are
/// total; non-finite components simply flow through IEEE-754 arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    ///
    /// Computed with `hypot`, so finite inputs never overflow or underflow in
    /// the intermediate squares.  Non-finite components follow IEEE-754
    /// `hypot`: an infinite difference yields infinity, otherwise a NaN
    /// difference (including `inf - inf`) yields NaN.  No guarding is done.
    pub fn distance(&self, other: &Coord) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Renders as `(x, y)` using the shortest round-trip float form, so
/// `Coord::new(39.0, 80.0)` prints `(39, 80)`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Coord {
    fn from(value: (f64, f64)) -> Self {
        Coord::new(value.0, value.1)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_origin() {
        let c = Coord::default();
        assert_eq!(c.x, 0.0);
        assert_eq!(c.y, 0.0);
    }

    #[test]
    fn new_keeps_values() {
        for &(x, y) in &[(39.0, 80.0), (-1.5, 2.25), (1e300, -1e-300), (0.0, -0.0)] {
            let c = Coord::new(x, y);
            assert_eq!(c.x, x);
            assert_eq!(c.y, y);
        }
    }

    #[test]
    fn from_tuple() {
        assert_eq!(Coord::from((3.0, 4.0)), Coord::new(3.0, 4.0));
    }

    #[test]
    fn distance_three_four_five() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
    }

    /// Squaring 2e200 would overflow to infinity; the result must not.
    #[test]
    fn distance_huge_but_finite() {
        let a = Coord::new(1e200, 0.0);
        let b = Coord::new(-1e200, 0.0);
        let d = a.distance(&b);
        assert!(d.is_finite(), "got {d}");
        assert!((d - 2e200).abs() <= 2e200 * 1e-15);
    }

    /// Squaring 1e-200 would underflow to zero; distinct points must not.
    #[test]
    fn distance_tiny_but_nonzero() {
        let d = Coord::new(1e-200, 0.0).distance(&Coord::default());
        assert!(d > 0.0, "distinct points gave {d}");
        assert!((d - 1e-200).abs() <= 1e-200 * 1e-15);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (Coord::new(0.0, 0.0), Coord::new(39.0, 80.0)),
            (Coord::new(-7.5, 2.0), Coord::new(3.25, -11.0)),
            (Coord::new(1e10, 1e10), Coord::new(-1e10, 3.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.distance(&b), b.distance(&a));
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        for c in [Coord::default(), Coord::new(39.0, 80.0), Coord::new(-0.1, 1e9)] {
            assert_eq!(c.distance(&c), 0.0);
        }
    }

    #[test]
    fn distance_origin_to_demo_point() {
        let d = Coord::default().distance(&Coord::new(39.0, 80.0));
        assert!((d - 7921.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn nan_propagates() {
        let a = Coord::new(f64::NAN, 0.0);
        assert!(a.distance(&Coord::default()).is_nan());
        assert!(Coord::default().distance(&a).is_nan());
    }

    #[test]
    fn infinity_propagates() {
        let a = Coord::new(f64::INFINITY, 0.0);
        assert_eq!(a.distance(&Coord::default()), f64::INFINITY);
        // inf - inf is NaN.
        assert!(a.distance(&a).is_nan());
    }

    #[test]
    fn display_demo_point() {
        let s = Coord::new(39.0, 80.0).to_string();
        assert_eq!(s, "(39, 80)");
        assert!(s.contains("39") && s.contains("80"));
    }

    #[test]
    fn display_default() {
        assert_eq!(Coord::default().to_string(), "(0, 0)");
    }

    #[test]
    fn display_fractional_and_negative() {
        assert_eq!(Coord::new(1.5, -2.25).to_string(), "(1.5, -2.25)");
    }

    #[test]
    fn display_is_deterministic() {
        let c = Coord::new(0.1, 0.2);
        assert_eq!(c.to_string(), c.to_string());
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&Coord::new(39.0, 80.0)).expect("serialize");
        assert_eq!(json, r#"{"x":39.0,"y":80.0}"#);
    }
}
