//! Reproducible point clouds for tests, benches and the CLI.
//!
//! Model
//! - Noise: `noise` points drawn uniformly from `[-bound, bound]²`.
//! - Planted lines: `lines` runs of `run_len` evenly stepped collinear points,
//!   each from a random start along a random primitive direction.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Noise points may accidentally be collinear with each other or with a planted
//! run; callers that need exact answers should use `parabola`.

use crate::point::{gcd, Point};
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform noise configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub noise: usize,
    /// Half-extent of the sampling box. Clamped to at least 1.
    pub bound: i32,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            noise: 64,
            bound: 1000,
        }
    }
}

/// Noise plus planted collinear runs.
#[derive(Clone, Copy, Debug)]
pub struct PlantedCfg {
    pub cloud: CloudCfg,
    pub lines: usize,
    /// Points per planted run. Values below 2 plant nothing.
    pub run_len: usize,
}

impl Default for PlantedCfg {
    fn default() -> Self {
        Self {
            cloud: CloudCfg::default(),
            lines: 4,
            run_len: 5,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finaliser
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform noise points.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    sample_box(&mut rng, cfg)
}

/// Noise points followed by planted runs, shuffled into one sequence.
pub fn draw_planted(cfg: PlantedCfg, tok: ReplayToken) -> Vec<Point> {
    use rand::seq::SliceRandom;

    let mut rng = tok.to_std_rng();
    let mut pts = sample_box(&mut rng, cfg.cloud);
    if cfg.run_len >= 2 {
        for _ in 0..cfg.lines {
            pts.extend(plant_run(&mut rng, cfg.cloud.bound.max(1), cfg.run_len));
        }
    }
    pts.shuffle(&mut rng);
    pts
}

/// Largest `n` accepted by `parabola`: `(n - 1)²` is the last square in `i32`.
pub const PARABOLA_MAX: usize = 46_341;

/// `n` points on `y = x²` (x = 0..n): no three are collinear.
///
/// # Panics
/// If `n > PARABOLA_MAX`.
pub fn parabola(n: usize) -> Vec<Point> {
    assert!(
        n <= PARABOLA_MAX,
        "parabola: {n} points exceed the i32 range (max {PARABOLA_MAX})"
    );
    (0..n as i32).map(|x| Point::new(x, x * x)).collect()
}

fn sample_box<R: Rng>(rng: &mut R, cfg: CloudCfg) -> Vec<Point> {
    let b = cfg.bound.max(1);
    (0..cfg.noise)
        .map(|_| Point::new(rng.gen_range(-b..=b), rng.gen_range(-b..=b)))
        .collect()
}

/// One run of `len` points `start + k * dir` kept inside `[-bound, bound]²`.
///
/// `len` is capped at `2 * bound + 1`, the most distinct points a box side holds.
fn plant_run<R: Rng>(rng: &mut R, bound: i32, len: usize) -> Vec<Point> {
    let len = len.min(2 * bound as usize + 1);
    let dir = primitive_direction(rng, bound, len);
    let span = dir * (len as i64 - 1);
    let b = i64::from(bound);
    // Start range such that the whole run stays in the box along each axis.
    let lo = Vector2::new((-b).max(-b - span.x), (-b).max(-b - span.y));
    let hi = Vector2::new(b.min(b - span.x), b.min(b - span.y));
    let start = Vector2::new(rng.gen_range(lo.x..=hi.x), rng.gen_range(lo.y..=hi.y));
    (0..len as i64)
        .map(|k| {
            let p = start + dir * k;
            Point::new(p.x as i32, p.y as i32)
        })
        .collect()
}

/// Random nonzero step with coprime components, short enough for `len` points
/// to fit in a box of half-extent `bound`.
fn primitive_direction<R: Rng>(rng: &mut R, bound: i32, len: usize) -> Vector2<i64> {
    let reach = (2 * i64::from(bound) / (len as i64 - 1).max(1)).clamp(1, 8);
    loop {
        let dx = rng.gen_range(-reach..=reach);
        let dy = rng.gen_range(-reach..=reach);
        if (dx, dy) != (0, 0) && gcd(dx.abs(), dy.abs()) == 1 {
            return Vector2::new(dx, dy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Line;

    #[test]
    fn reproducible_draw() {
        let cfg = PlantedCfg::default();
        let tok = ReplayToken { seed: 42, index: 7 };
        assert_eq!(draw_planted(cfg, tok), draw_planted(cfg, tok));
        let other = ReplayToken { seed: 42, index: 8 };
        assert_ne!(draw_planted(cfg, tok), draw_planted(cfg, other));
    }

    #[test]
    fn cloud_respects_bounds() {
        let cfg = CloudCfg {
            noise: 500,
            bound: 3,
        };
        let pts = draw_cloud(cfg, ReplayToken { seed: 1, index: 0 });
        assert_eq!(pts.len(), 500);
        assert!(pts.iter().all(|p| p.x().abs() <= 3 && p.y().abs() <= 3));
    }

    #[test]
    fn planted_runs_are_collinear_and_in_bounds() {
        let mut rng = ReplayToken { seed: 9, index: 3 }.to_std_rng();
        for len in [2usize, 4, 7, 20] {
            for _ in 0..50 {
                let run = plant_run(&mut rng, 10, len);
                assert_eq!(run.len(), len);
                assert!(run.iter().all(|p| p.x().abs() <= 10 && p.y().abs() <= 10));
                let line: Line = run.iter().copied().collect();
                assert_eq!(line.len(), len, "run points must be distinct");
                assert!(line.is_collinear());
            }
        }
    }

    #[test]
    fn planted_count_includes_noise_and_runs() {
        let cfg = PlantedCfg {
            cloud: CloudCfg {
                noise: 10,
                bound: 50,
            },
            lines: 3,
            run_len: 6,
        };
        let pts = draw_planted(cfg, ReplayToken { seed: 0, index: 0 });
        assert_eq!(pts.len(), 10 + 3 * 6);
    }

    #[test]
    fn parabola_has_no_three_collinear() {
        let pts = parabola(12);
        for (i, a) in pts.iter().enumerate() {
            for (j, b) in pts.iter().enumerate().skip(i + 1) {
                for c in pts.iter().skip(j + 1) {
                    assert_ne!(a.slope_to(b), a.slope_to(c));
                }
            }
        }
    }

    #[test]
    fn parabola_reaches_the_i32_limit() {
        let pts = parabola(PARABOLA_MAX);
        assert_eq!(pts.last(), Some(&Point::new(46_340, 2_147_395_600)));
    }

    #[test]
    #[should_panic(expected = "exceed the i32 range")]
    fn parabola_rejects_overflowing_sizes() {
        parabola(PARABOLA_MAX + 1);
    }
}
