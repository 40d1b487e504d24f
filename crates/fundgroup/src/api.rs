//! Curated surface for the CLI and the Python bindings.
//!
//! Both front ends take plain vertex lists; these helpers keep the
//! conversions in one place.

use crate::complex::{Complex, Vertex};
use crate::group::{AbelianInvariants, Presentation};
use crate::pi1::{fundamental_group, BuildCfg, Pi1Error};
use crate::standard;

pub use crate::group::SimplifyCfg;
pub use crate::pi1::{reduce_skeleton, EdgeReduction};
pub use crate::random::{random_complex, random_connected_complex, RandomComplexCfg, ReplayToken};

/// 2-skeleton of the complex spanned by `simplices`; all the builder reads.
pub fn two_skeleton(simplices: &[Vec<Vertex>]) -> Complex {
    Complex::from_simplices_up_to(simplices, 2)
}

/// Build a complex from vertex lists and compute its presentation.
pub fn presentation_from_simplices(
    simplices: &[Vec<Vertex>],
    base_point: Option<Vertex>,
    simplify: bool,
) -> Result<Presentation, Pi1Error> {
    let complex = two_skeleton(simplices);
    fundamental_group(&complex, base_point, BuildCfg { simplify })
}

/// Abelian invariants of the fundamental group given by vertex lists.
pub fn abelian_invariants_from_simplices(
    simplices: &[Vec<Vertex>],
    base_point: Option<Vertex>,
) -> Result<AbelianInvariants, Pi1Error> {
    presentation_from_simplices(simplices, base_point, true).map(|p| p.abelian_invariants())
}

/// Names accepted by [`standard_complex`].
pub const STANDARD_NAMES: &[&str] = &[
    "circle",
    "disk",
    "sphere",
    "torus",
    "rp2",
    "klein",
    "wedge2",
];

/// Look up a standard triangulation by name.
pub fn standard_complex(name: &str) -> Option<Complex> {
    let c = match name {
        "circle" => standard::circle(3),
        "disk" => standard::disk(),
        "sphere" => standard::sphere(2),
        "torus" => standard::torus(),
        "rp2" => standard::real_projective_plane(),
        "klein" => standard::klein_bottle(),
        "wedge2" => standard::wedge_of_circles(2),
        _ => return None,
    };
    Some(c)
}
