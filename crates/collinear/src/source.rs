//! Point-source loader for the whitespace text format.
//!
//! Format
//! - First token: declared point count (non-negative integer).
//! - Then `count` pairs of integers `x y`, one point per pair, in index order.
//!
//! Any failure is reported as `InputError`; a partially read point list is never
//! returned.

use crate::point::Point;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Errors surfaced while reading a point source.
#[derive(Debug)]
pub enum InputError {
    /// The source could not be read.
    Io(io::Error),
    /// The source holds no tokens at all.
    MissingCount,
    /// The first token is not a non-negative integer.
    InvalidCount { token: String },
    /// A coordinate token is not an `i32`. `position` is the 0-based token index
    /// after the count header.
    InvalidCoordinate { position: usize, token: String },
    /// The stream ended after the `x` of point `point`.
    TruncatedPair { point: usize },
    /// The number of pairs read differs from the declared count.
    CountMismatch { declared: usize, found: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(err) => write!(f, "point source could not be read: {err}"),
            InputError::MissingCount => write!(f, "point source is empty (missing count header)"),
            InputError::InvalidCount { token } => {
                write!(f, "invalid point count {token:?} (expected a non-negative integer)")
            }
            InputError::InvalidCoordinate { position, token } => write!(
                f,
                "invalid coordinate {token:?} at token {position} (expected a 32-bit integer)"
            ),
            InputError::TruncatedPair { point } => {
                write!(f, "point {point} is missing its y coordinate")
            }
            InputError::CountMismatch { declared, found } => write!(
                f,
                "point count mismatch: header declares {declared}, source holds {found}"
            ),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

/// Parse a complete point source held in memory.
pub fn parse_points(text: &str) -> Result<Vec<Point>, InputError> {
    let mut tokens = text.split_whitespace();
    let header = tokens.next().ok_or(InputError::MissingCount)?;
    let declared: usize = header.parse().map_err(|_| InputError::InvalidCount {
        token: header.to_string(),
    })?;

    // Cap the preallocation; the header is untrusted.
    let mut points = Vec::with_capacity(declared.min(1 << 16));
    let mut coords = tokens.enumerate().map(|(position, token)| {
        token
            .parse::<i32>()
            .map_err(|_| InputError::InvalidCoordinate {
                position,
                token: token.to_string(),
            })
    });
    while let Some(x) = coords.next() {
        let x = x?;
        let y = coords.next().ok_or(InputError::TruncatedPair {
            point: points.len(),
        })??;
        points.push(Point::new(x, y));
    }

    if points.len() != declared {
        return Err(InputError::CountMismatch {
            declared,
            found: points.len(),
        });
    }
    Ok(points)
}

/// Read a point source to the end and parse it.
pub fn read_points<R: Read>(mut reader: R) -> Result<Vec<Point>, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_points(&text)
}

pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, InputError> {
    let text = fs::read_to_string(path)?;
    parse_points(&text)
}

/// Render points in the same text format `parse_points` accepts.
pub fn format_points(points: &[Point]) -> String {
    let mut out = format!("{}\n", points.len());
    for p in points {
        out.push_str(&format!("{} {}\n", p.x(), p.y()));
    }
    out
}
