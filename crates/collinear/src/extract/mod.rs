//! Collinear segment extraction over a fixed point set.
//!
//! Purpose
//! - `Extractor` owns an immutable point array and answers two queries:
//!   - `lines_brute`: every collinear 4-subset (exhaustive, O(n⁴)).
//!   - `lines_fast`: every maximal segment of ≥4 collinear points
//!     (slope sort and scan per origin, O(n² log n)).
//!
//! Why two contracts
//! - Brute reports one `Line` per collinear 4-combination, so a run of k points
//!   yields C(k, 4) lines. Fast reports each maximal run once. Both are kept
//!   as-is; callers that want maximal segments use `lines_fast`.
//!
//! Deduplication
//! - Results are `BTreeSet<Line>` keyed on point content. The fast scan finds a
//!   segment of m points once per member origin; the set collapses the repeats.
//!
//! Concurrency
//! - Every call allocates its own scratch buffer and result set; the point array
//!   is never mutated, so `&Extractor` can be shared across threads.

use crate::line::Line;
use crate::point::Point;
use crate::source::{self, InputError};
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

/// Ordered, duplicate-free set of extracted lines.
pub type Lines = BTreeSet<Line>;

/// Smallest number of points reported as a line.
pub const MIN_LINE_POINTS: usize = 4;

/// Extraction strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// All collinear 4-subsets.
    Brute,
    /// Maximal segments of at least four points.
    Fast,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Brute => "brute",
            Algorithm::Fast => "fast",
        }
    }
}

/// Immutable point set plus the two extraction algorithms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extractor {
    points: Vec<Point>,
}

impl Extractor {
    /// Copy `points` into a new extractor; input order is the index order.
    pub fn new<I: IntoIterator<Item = Point>>(points: I) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Build from the text point-source format.
    pub fn from_source(text: &str) -> Result<Self, InputError> {
        source::parse_points(text).map(Self::from)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InputError> {
        source::read_points(reader).map(Self::from)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        source::load_points(path).map(Self::from)
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn lines(&self, algo: Algorithm) -> Lines {
        match algo {
            Algorithm::Brute => self.lines_brute(),
            Algorithm::Fast => self.lines_fast(),
        }
    }

    /// All segments of exactly four collinear points (one per 4-combination).
    ///
    /// Combinations are enumerated by descending index ranges `i > j > k > l`;
    /// slopes are measured from `p_i`. Combinations containing coincident points
    /// collapse below four members and are skipped.
    pub fn lines_brute(&self) -> Lines {
        let pts = &self.points;
        let mut lines = Lines::new();
        for i in 3..pts.len() {
            let origin = &pts[i];
            for j in 2..i {
                let s1 = origin.slope_to(&pts[j]);
                if s1.is_degenerate() {
                    continue;
                }
                for k in 1..j {
                    let s2 = origin.slope_to(&pts[k]);
                    if s2 != s1 {
                        continue;
                    }
                    for l in 0..k {
                        if origin.slope_to(&pts[l]) != s1 {
                            continue;
                        }
                        let line: Line = [pts[i], pts[j], pts[k], pts[l]].into_iter().collect();
                        if line.len() == MIN_LINE_POINTS {
                            lines.insert(line);
                        }
                    }
                }
            }
        }
        tracing::debug!(points = pts.len(), lines = lines.len(), "lines_brute");
        lines
    }

    /// All maximal segments of at least four collinear points.
    ///
    /// For each origin, a scratch copy of the points is sorted by slope to the
    /// origin and scanned for runs of equal slope. A run of ≥3 plus the origin is
    /// a candidate line; the `Degenerate` class (the origin and its duplicates)
    /// never forms one.
    pub fn lines_fast(&self) -> Lines {
        let pts = &self.points;
        let mut lines = Lines::new();
        if pts.len() < MIN_LINE_POINTS {
            return lines;
        }
        let mut scratch: Vec<Point> = Vec::with_capacity(pts.len());
        for origin in pts {
            scratch.clear();
            scratch.extend_from_slice(pts);
            origin.sort_by_slope(&mut scratch);

            for run in scratch.chunk_by(|a, b| origin.slope_to(a) == origin.slope_to(b)) {
                if run.len() < MIN_LINE_POINTS - 1 || origin.slope_to(&run[0]).is_degenerate() {
                    continue;
                }
                let mut line = Line::new();
                line.add(*origin);
                line.extend(run.iter().copied());
                if line.len() >= MIN_LINE_POINTS {
                    lines.insert(line);
                }
            }
        }
        tracing::debug!(points = pts.len(), lines = lines.len(), "lines_fast");
        lines
    }
}

impl From<Vec<Point>> for Extractor {
    #[inline]
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl From<&[Point]> for Extractor {
    #[inline]
    fn from(points: &[Point]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }
}

impl FromIterator<Point> for Extractor {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter)
    }
}
