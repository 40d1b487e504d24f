//! Print raw and simplified presentations of the standard triangulations.
//!
//! Purpose
//! - Quick visual check of the relator convention: the abelianizations must
//!   read Z^2 (torus), Z/2 (RP²) and Z + Z/2 (Klein bottle).
//!
//! Run: `cargo run -p fundgroup --example standard_surfaces`

use fundgroup::api::{standard_complex, STANDARD_NAMES};
use fundgroup::{fundamental_group, BuildCfg};

fn main() {
    for &name in STANDARD_NAMES {
        let complex = standard_complex(name).expect("known standard name");
        let raw = fundamental_group(&complex, None, BuildCfg { simplify: false })
            .expect("standard complexes are connected");
        let simplified =
            fundamental_group(&complex, None, BuildCfg::default()).expect("connected");
        println!(
            "{name}: f={:?} chi={} raw_gens={} raw_rels={}",
            complex.f_vector(),
            complex.euler_characteristic(),
            raw.num_generators(),
            raw.num_relators()
        );
        println!("  pi1 = {simplified}");
        println!("  H1  = {}", simplified.abelian_invariants());
    }
}
