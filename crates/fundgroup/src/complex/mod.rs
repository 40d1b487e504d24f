//! Simplicial complexes and their 1-skeleta.
//!
//! Purpose
//! - `SimplicialComplex` is the capability interface the presentation builder
//!   consumes: vertices, 1-skeleton, 2-cells in a stable order, and the
//!   induced subcomplex of a connected component.
//! - `Complex` is the concrete store used throughout the crate; `Skeleton`
//!   and `SpanningTree` are the graph side (backed by `petgraph`).
//!
//! Conventions
//! - Simplices are sorted vertex lists; cells are enumerated lexicographically.
//! - Face `i` of a simplex omits vertex `i`. For a triangle `[a,b,c]` the
//!   boundary edges are `[b,c], [a,c], [a,b]`, each oriented low → high.

mod capability;
mod skeleton;
mod store;
mod types;

pub use capability::SimplicialComplex;
pub use skeleton::{Skeleton, SpanningTree};
pub use store::{Complex, MAX_CLOSURE_VERTICES};
pub use types::{edge, Edge, Simplex, Vertex};
