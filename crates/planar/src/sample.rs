//! Random triangles (jittered around a random center) with replay tokens.
//!
//! Purpose
//! - Deterministic scenes for benches, batch files and randomized tests.
//!
//! Model
//! - Pick a center in `[−extent, extent]²` and a random phase, place three
//!   vertices at angles `phase + k·2π/3` plus bounded jitter, with radii in
//!   `[radius_min, radius_max]`. Every angular gap stays below π, so the
//!   center is interior and vertices come out counterclockwise.
//! - A replay token `(seed, index)` is mixed into a single `StdRng`, so any
//!   draw can be reproduced on its own.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::triangle::Triangle;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TriangleCfg {
    /// Centers are uniform in `[−center_extent, center_extent]²`.
    pub center_extent: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Angular jitter as a fraction of the 2π/3 spacing. Clamped to [0, 0.24].
    pub angle_jitter_frac: f64,
}

impl Default for TriangleCfg {
    fn default() -> Self {
        Self {
            center_extent: 4.0,
            radius_min: 0.5,
            radius_max: 1.5,
            angle_jitter_frac: 0.2,
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
    fn rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x = (x ^ (x >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            x = (x ^ (x >> 27)).wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw one counterclockwise triangle. `None` only if the draw is degenerate.
pub fn draw_triangle(cfg: TriangleCfg, tok: ReplayToken) -> Option<Triangle> {
    let mut rng = tok.rng();
    let extent = cfg.center_extent.max(0.0);
    let r_lo = cfg.radius_min.max(1e-9);
    let r_hi = cfg.radius_max.max(r_lo);
    let jitter = cfg.angle_jitter_frac.clamp(0.0, 0.24);
    let spacing = std::f64::consts::TAU / 3.0;

    let center = if extent > 0.0 {
        Vector2::new(rng.gen_range(-extent..=extent), rng.gen_range(-extent..=extent))
    } else {
        Vector2::zeros()
    };
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut vertex = |k: usize| {
        let theta = phase + k as f64 * spacing + (rng.gen::<f64>() * 2.0 - 1.0) * jitter * spacing;
        let r = rng.gen_range(r_lo..=r_hi);
        center + Vector2::new(theta.cos(), theta.sin()) * r
    };
    let (a, b, c) = (vertex(0), vertex(1), vertex(2));
    Triangle::new(a, b, c).ok()
}

/// Two triangles for pair `index`, drawn from tokens `2·index` and `2·index + 1`.
pub fn draw_pair(cfg: TriangleCfg, seed: u64, index: u64) -> Option<(Triangle, Triangle)> {
    let first = draw_triangle(cfg, ReplayToken { seed, index: 2 * index })?;
    let second = draw_triangle(
        cfg,
        ReplayToken {
            seed,
            index: 2 * index + 1,
        },
    )?;
    Some((first, second))
}
