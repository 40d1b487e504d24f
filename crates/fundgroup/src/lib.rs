//! Fundamental group presentations of finite simplicial complexes.
//!
//! Layout
//! - `complex`: capability trait, concrete store, 1-skeleton and spanning trees.
//! - `group`: free-group words, presentations, Tietze simplification, abelianization.
//! - `pi1`: the presentation builder (spanning-tree reduction + relators from triangles).
//! - `standard`, `random`: fixtures with known groups and replayable random complexes.
//!
//! API Policy
//! - `api` is the curated surface for the CLI and bindings; module paths may
//!   move between versions.

pub mod api;
pub mod complex;
pub mod group;
pub mod pi1;
pub mod random;
pub mod standard;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use complex::{Complex, SimplicialComplex};
pub use group::{AbelianInvariants, FreeGroup, FreeGroupEngine, Presentation};
pub use pi1::{fundamental_group, BuildCfg, Pi1Error};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::complex::{edge, Complex, Edge, Simplex, SimplicialComplex, Vertex};
    pub use crate::group::{AbelianInvariants, FreeGroup, FreeGroupEngine, Presentation, Word};
    pub use crate::pi1::{fundamental_group, fundamental_group_with, BuildCfg, Pi1Error};
}
