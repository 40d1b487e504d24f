//! Fundamental group presentations of simplicial complexes.
//!
//! Purpose
//! - Turn a (connected component of a) simplicial complex into a finite
//!   presentation of its fundamental group.
//!
//! Algorithm
//! - Disconnected input is restricted to the base point's component.
//! - A spanning tree `T` of the 1-skeleton contracts to the base point; every
//!   edge outside `T` becomes a free generator (indexed in edge order).
//! - Each triangle `[a,b,c]` contributes the relator `z0 * z1⁻¹ * z2` where
//!   `z0, z1, z2` are the images of its faces `[b,c], [a,c], [a,b]`
//!   (identity on tree edges). This is the boundary loop
//!   `[a,b][b,c][c,a]` read from `b`, so the convention is orientation-consistent.
//! - Zero generators short-circuit to the trivial group.
//!
//! Code cross-refs: `complex::{SimplicialComplex, Skeleton, SpanningTree}`,
//! `group::{FreeGroupEngine, FreeGroup, Presentation}`.

mod build;
mod types;

pub use build::{extract_relators, fundamental_group, fundamental_group_with, reduce_skeleton};
pub use types::{BuildCfg, EdgeReduction, GeneratorSet, Pi1Error};

#[cfg(test)]
mod tests;
