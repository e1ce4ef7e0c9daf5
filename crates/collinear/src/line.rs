//! Collinear point sets compared by content.
//!
//! A `Line` is an order-independent set of points. Two lines discovered through
//! different enumeration orders compare equal when they hold the same points,
//! which is what lets an ordered result set deduplicate them.

use crate::point::Point;
use std::collections::btree_set::{self, BTreeSet};
use std::fmt;

/// Ordered, duplicate-free set of points forming a segment.
///
/// Invariants:
/// - Members are kept sorted by `Point` order (backed by a `BTreeSet`).
/// - `Eq`/`Ord` compare the sorted sequences lexicographically; a proper prefix
///   sorts first.
/// - The extractor only exposes lines with at least four points.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line {
    points: BTreeSet<Point>,
}

impl Line {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `p`; returns `false` if it was already a member.
    #[inline]
    pub fn add(&mut self, p: Point) -> bool {
        self.points.insert(p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.points.contains(p)
    }

    /// Members in `Point` order.
    #[inline]
    pub fn points(&self) -> btree_set::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn to_vec(&self) -> Vec<Point> {
        self.points.iter().copied().collect()
    }

    /// Lowest endpoint by `Point` order.
    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Highest endpoint by `Point` order.
    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn is_subset(&self, other: &Line) -> bool {
        self.points.is_subset(&other.points)
    }

    /// Exact collinearity check via integer cross products against the endpoints.
    ///
    /// Independent of `Slope`; sets with fewer than three points are
    /// trivially collinear.
    pub fn is_collinear(&self) -> bool {
        let (Some(a), Some(b)) = (self.first(), self.last()) else {
            return true;
        };
        let dir = b.to_vector() - a.to_vector();
        self.points.iter().all(|p| {
            let d = p.to_vector() - a.to_vector();
            // |i32 differences| < 2^33, so the products fit in i128 with room to spare
            i128::from(dir.x) * i128::from(d.y) == i128::from(dir.y) * i128::from(d.x)
        })
    }
}

impl FromIterator<Point> for Line {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for Line {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a Point;
    type IntoIter = btree_set::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}
