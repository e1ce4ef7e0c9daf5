//! Integer points in the plane and the slope order around a fixed origin.
//!
//! Purpose
//! - `Point`: immutable 2D point with a total order (y first, then x).
//! - `Slope`: comparable slope value with sentinels for vertical and coincident
//!   pairs, so slopes can be used directly as sort keys.
//!
//! Conventions
//! - Finite slopes are exact rationals `dy/dx` reduced by their gcd with `dx > 0`.
//!   Equality is structural and ordering uses `i128` cross products, so no two
//!   distinct slopes ever compare equal, whatever the `i32` coordinates.
//! - Horizontal slopes are the single class `0/1`.
//! - Ordering of slopes: `Degenerate < Finite(_) < Vertical`.

use nalgebra::Vector2;
use std::cmp::Ordering;
use std::fmt;

/// Reduced fraction `dy / dx` with `dx > 0` and `gcd(|dy|, dx) == 1`.
///
/// The canonical form makes the derived `Eq`/`Hash` agree with `Ord`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    dy: i64,
    dx: i64,
}

impl Ratio {
    #[inline]
    pub fn numer(self) -> i64 {
        self.dy
    }

    #[inline]
    pub fn denom(self) -> i64 {
        self.dx
    }

    /// Nearest `f64`; for display only, never for comparison.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.dy as f64 / self.dx as f64
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        // both denominators are positive, so cross-multiplying keeps the order
        (i128::from(self.dy) * i128::from(other.dx))
            .cmp(&(i128::from(other.dy) * i128::from(self.dx)))
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Slope of the segment from one point to another.
///
/// Variant order encodes the sentinel rules, so the derived `Ord` is the slope order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slope {
    /// Both endpoints coincide; below every other slope.
    Degenerate,
    Finite(Ratio),
    /// Same x, different y; above every finite slope.
    Vertical,
}

impl Slope {
    /// Slope of the displacement `(dx, dy)`, normalised to its canonical form.
    ///
    /// Inputs up to `|2^62|` are safe; point differences stay below `2^33`.
    pub fn of(dy: i64, dx: i64) -> Self {
        match (dx, dy) {
            (0, 0) => Slope::Degenerate,
            (0, _) => Slope::Vertical,
            (_, 0) => Slope::Finite(Ratio { dy: 0, dx: 1 }),
            (dx, dy) => {
                let g = gcd(dy.abs(), dx.abs());
                let sign = dx.signum();
                Slope::Finite(Ratio {
                    dy: sign * dy / g,
                    dx: sign * dx / g,
                })
            }
        }
    }

    /// Finite ratio, if any.
    #[inline]
    pub fn ratio(self) -> Option<Ratio> {
        match self {
            Slope::Finite(r) => Some(r),
            _ => None,
        }
    }

    #[inline]
    pub fn is_degenerate(self) -> bool {
        matches!(self, Slope::Degenerate)
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slope::Degenerate => write!(f, "-inf"),
            Slope::Finite(r) if r.dx == 1 => write!(f, "{}", r.dy),
            Slope::Finite(r) => write!(f, "{}/{}", r.dy, r.dx),
            Slope::Vertical => write!(f, "+inf"),
        }
    }
}

pub(crate) fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Immutable point with `i32` coordinates.
///
/// Invariants:
/// - Ordered by `y`, ties broken by `x`; consistent with `Eq`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Position vector with widened components (exact for any pair of points).
    #[inline]
    pub fn to_vector(&self) -> Vector2<i64> {
        Vector2::new(i64::from(self.x), i64::from(self.y))
    }

    /// Slope from `self` to `other`.
    ///
    /// Differences are taken in `i64`, so no `i32` input overflows.
    #[inline]
    pub fn slope_to(&self, other: &Point) -> Slope {
        let d = other.to_vector() - self.to_vector();
        Slope::of(d.y, d.x)
    }

    /// Compare `a` and `b` by their slope to `self`.
    #[inline]
    pub fn slope_cmp(&self, a: &Point, b: &Point) -> Ordering {
        self.slope_to(a).cmp(&self.slope_to(b))
    }

    /// Stable in-place sort of `buf` by slope to `self`.
    pub fn sort_by_slope(&self, buf: &mut [Point]) {
        buf.sort_by_cached_key(|q| self.slope_to(q));
    }

    /// Owned copy of `points` sorted by slope to `self` (stable for ties).
    pub fn slope_order(&self, points: &[Point]) -> Vec<Point> {
        let mut out = points.to_vec();
        self.sort_by_slope(&mut out);
        out
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
