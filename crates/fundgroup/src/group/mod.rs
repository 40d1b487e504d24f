//! Free groups, finite presentations, and their simplification.
//!
//! Purpose
//! - `FreeGroupEngine` is the backend interface the presentation builder is
//!   written against; `FreeGroup` is the in-house engine over reduced `Word`s.
//! - `Presentation` holds named generators and relators; `simplify` applies
//!   Tietze moves; `AbelianInvariants` reads off the abelianization.
//!
//! Why in-house
//! - Relators from triangles have at most three letters and the groups are
//!   small; free reduction, generator elimination and a Smith normal form
//!   cover what callers ask of the engine.

mod abelian;
mod engine;
mod presentation;
mod simplify;
mod word;

pub use abelian::{abelian_invariants, relation_matrix, smith_diagonal, AbelianInvariants};
pub use engine::{FreeGroup, FreeGroupEngine};
pub use presentation::Presentation;
pub use simplify::{simplify, SimplifyCfg};
pub use word::{Letter, Word};

#[cfg(test)]
mod tests;
