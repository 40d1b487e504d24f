//! Random 2-complexes (replayable), for property tests and benchmarks.
//!
//! Model
//! - `n` vertices `0..n`, all present.
//! - Each pair becomes an edge with probability `p_edge`.
//! - Each triple whose three edges exist becomes a triangle with probability
//!   `p_triangle` (a Linial–Meshulam-style draw over the clique complex).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::complex::Complex;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomComplexCfg {
    pub vertices: usize,
    pub p_edge: f64,
    pub p_triangle: f64,
}

impl Default for RandomComplexCfg {
    fn default() -> Self {
        Self {
            vertices: 12,
            p_edge: 0.4,
            p_triangle: 0.5,
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
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
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

/// Draw a random complex of dimension at most 2.
pub fn random_complex(cfg: RandomComplexCfg, tok: ReplayToken) -> Complex {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertices;
    let pe = cfg.p_edge.clamp(0.0, 1.0);
    let pt = cfg.p_triangle.clamp(0.0, 1.0);
    let mut c = Complex::new();
    let mut adj = vec![vec![false; n]; n];
    for v in 0..n {
        c.add_simplex(&[v]);
    }
    for u in 0..n {
        for v in u + 1..n {
            if rng.gen_bool(pe) {
                adj[u][v] = true;
                c.add_simplex(&[u, v]);
            }
        }
    }
    for a in 0..n {
        for b in a + 1..n {
            if !adj[a][b] {
                continue;
            }
            for d in b + 1..n {
                if adj[a][d] && adj[b][d] && rng.gen_bool(pt) {
                    c.add_simplex(&[a, b, d]);
                }
            }
        }
    }
    c
}

/// Random connected complex: a random complex plus a path through all vertices.
pub fn random_connected_complex(cfg: RandomComplexCfg, tok: ReplayToken) -> Complex {
    let mut c = random_complex(cfg, tok);
    for v in 1..cfg.vertices {
        c.add_simplex(&[v - 1, v]);
    }
    c
}
