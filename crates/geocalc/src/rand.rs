//! Random points and lines on an integer grid (replay tokens).
//!
//! Purpose
//! - Fill a session or a benchmark with reproducible inputs. Coordinates are
//!   whole numbers inside `PointBounds` (default 10..=490, the canvas area the
//!   console snapshot targets).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw `k` of seed `s` can be regenerated without replaying draws `0..k`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shapes::{Line, Point};

/// Inclusive integer bounds for both coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointBounds {
    pub min: i64,
    pub max: i64,
}

impl Default for PointBounds {
    fn default() -> Self {
        Self { min: 10, max: 490 }
    }
}

impl PointBounds {
    fn sample<R: Rng>(&self, rng: &mut R) -> Point {
        let lo = self.min.min(self.max);
        let hi = self.min.max(self.max);
        Point::new(rng.gen_range(lo..=hi) as f64, rng.gen_range(lo..=hi) as f64)
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
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
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

/// `n` points with integer coordinates inside `bounds`. Duplicates are possible.
pub fn random_points(n: usize, bounds: PointBounds, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..n).map(|_| bounds.sample(&mut rng)).collect()
}

/// `n` non-degenerate lines; zero-length draws are re-sampled.
///
/// Returns fewer than `n` lines only if `bounds` holds a single point.
pub fn random_lines(n: usize, bounds: PointBounds, tok: ReplayToken) -> Vec<Line> {
    let mut rng = tok.to_std_rng();
    if bounds.min == bounds.max {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let start = bounds.sample(&mut rng);
        let end = bounds.sample(&mut rng);
        if let Ok(line) = Line::new(start, end) {
            out.push(line);
        }
    }
    out
}
