//! Collinear segment extraction over integer point sets.
//!
//! Layout
//! - `point`: `Point` (y-then-x order) and `Slope` (sentinel-aware slope order).
//! - `line`: `Line`, a content-compared set of collinear points.
//! - `extract`: `Extractor` with the brute-force and sort-and-scan algorithms.
//! - `source`: loader for the `count` + `x y` pairs text format.
//! - `rand`: reproducible point clouds with planted lines.

pub mod extract;
pub mod line;
pub mod point;
pub mod rand;
pub mod source;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use extract::{Algorithm, Extractor, Lines, MIN_LINE_POINTS};
pub use line::Line;
pub use point::{Point, Ratio, Slope};
pub use source::InputError;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::extract::{Algorithm, Extractor, Lines};
    pub use crate::line::Line;
    pub use crate::point::{Point, Ratio, Slope};
    pub use crate::rand::{draw_cloud, draw_planted, parabola, CloudCfg, PlantedCfg, ReplayToken};
    pub use crate::source::{format_points, load_points, parse_points, InputError};
}
