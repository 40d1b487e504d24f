use super::*;
use crate::complex::{Complex, SimplicialComplex};
use crate::group::{simplify, AbelianInvariants, SimplifyCfg, Word};
use crate::random::{random_complex, random_connected_complex, RandomComplexCfg, ReplayToken};
use crate::standard;
use crate::complex::{Simplex, Skeleton, Vertex};
use proptest::prelude::*;
use std::cell::Cell;

const RAW: BuildCfg = BuildCfg { simplify: false };

fn ab(rank: usize, torsion: &[u64]) -> AbelianInvariants {
    AbelianInvariants {
        rank,
        torsion: torsion.to_vec(),
    }
}

#[test]
fn hollow_triangle_is_infinite_cyclic() {
    let c = standard::circle(3);
    let reduction = reduce_skeleton(&c.skeleton());
    assert_eq!(reduction.tree.len(), 2);
    assert_eq!(reduction.generators.len(), 1);
    assert_eq!(reduction.generators.edges(), &[[1, 2]]);

    let p = fundamental_group(&c, None, RAW).unwrap();
    assert_eq!(p.num_generators(), 1);
    assert_eq!(p.num_relators(), 0);
    assert!(p.is_free());
    assert_eq!(p.to_string(), "<e0>");
}

#[test]
fn filled_triangle_is_trivial() {
    let c = standard::disk();
    let p = fundamental_group(&c, None, RAW).unwrap();
    assert_eq!(p.num_generators(), 1);
    assert_eq!(p.num_relators(), 1);
    // only [1,2] is off-tree; it is face 0, so the relator is that generator
    assert_eq!(p.relators(), &[Word::generator(0)]);
    assert!(p.abelian_invariants().is_trivial());

    let s = fundamental_group(&c, None, BuildCfg::default()).unwrap();
    assert!(s.is_trivial());
}

#[test]
fn tree_skeleton_gives_trivial_group_without_relators() {
    let path = Complex::from_simplices([[0, 1], [1, 2], [2, 3], [1, 4]]);
    let p = fundamental_group(&path, None, RAW).unwrap();
    assert!(p.is_trivial());
    assert_eq!(p.num_relators(), 0);

    let point = Complex::from_simplices([[42]]);
    assert!(fundamental_group(&point, None, BuildCfg::default())
        .unwrap()
        .is_trivial());
}

#[test]
fn relator_factors_follow_face_order() {
    // Square 0-1-2-3 with diagonal [0,2] and triangle [0,1,2] filled.
    // Tree: [0,1], [0,2], [0,3]; generators: [1,2] -> e0, [2,3] -> e1.
    let c = Complex::from_simplices(vec![vec![0, 1, 2], vec![2, 3], vec![0, 3]]);
    let reduction = reduce_skeleton(&c.skeleton());
    assert_eq!(reduction.tree.edges(), &[[0, 1], [0, 2], [0, 3]]);
    assert_eq!(reduction.generators.edges(), &[[1, 2], [2, 3]]);
    assert_eq!(reduction.generators.index_of([3, 2]), Some(1));

    let p = fundamental_group(&c, None, RAW).unwrap();
    assert_eq!(p.relator_strings(), vec!["e0".to_string()]);
    let s = fundamental_group(&c, None, BuildCfg::default()).unwrap();
    assert_eq!(s.generator_names(), &["e1".to_string()]);
    assert!(s.is_free());
}

#[test]
fn inverse_factor_uses_middle_face() {
    // Two triangles sharing [0,2]; tree [0,1],[0,2],[0,3]; generators [1,2], [2,3].
    // Triangle [0,2,3]: faces [2,3] (e1), [0,3] (tree), [0,2] (tree) -> e1.
    // Triangle [0,1,2]: faces [1,2] (e0), [0,2], [0,1] -> e0.
    let c = Complex::from_simplices([[0, 1, 2], [0, 2, 3]]);
    let p = fundamental_group(&c, None, RAW).unwrap();
    assert_eq!(p.relator_strings(), vec!["e0".to_string(), "e1".to_string()]);

    // Star of 0 plus the triangle [1,2,3]: all three faces are off-tree,
    // so the relator shows every factor, the middle one inverted.
    let c = Complex::from_simplices(vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2, 3]]);
    let r = reduce_skeleton(&c.skeleton());
    assert_eq!(r.generators.edges(), &[[1, 2], [1, 3], [2, 3]]);
    let p = fundamental_group(&c, None, RAW).unwrap();
    assert_eq!(p.relator_strings(), vec!["e2*e1^-1*e0".to_string()]);
}

#[test]
fn disconnected_needs_base_point() {
    let c = Complex::from_simplices(vec![vec![0, 1, 2], vec![5, 6], vec![6, 7], vec![5, 7]]);
    assert_eq!(
        fundamental_group(&c, None, BuildCfg::default()),
        Err(Pi1Error::MissingBasePoint)
    );
    assert_eq!(
        fundamental_group(&c, Some(99), BuildCfg::default()),
        Err(Pi1Error::UnknownBasePoint(99))
    );

    for (bp, cfg) in [(0, RAW), (6, RAW), (7, BuildCfg::default())] {
        let via_base = fundamental_group(&c, Some(bp), cfg).unwrap();
        let comp = c.connected_component(bp).unwrap();
        let direct = fundamental_group(&comp, None, cfg).unwrap();
        assert_eq!(via_base, direct);
    }
    let circle_part = fundamental_group(&c, Some(5), BuildCfg::default()).unwrap();
    assert_eq!(circle_part.abelian_invariants(), ab(1, &[]));
}

#[test]
fn connected_ignores_base_point() {
    let c = standard::torus();
    let with = fundamental_group(&c, Some(12345), BuildCfg::default()).unwrap();
    let without = fundamental_group(&c, None, BuildCfg::default()).unwrap();
    assert_eq!(with, without);
}

/// Delegates to `Complex`, counting connectivity queries.
struct CountingComplex {
    inner: Complex,
    connectivity_queries: Cell<usize>,
}

impl CountingComplex {
    fn new(inner: Complex) -> Self {
        Self {
            inner,
            connectivity_queries: Cell::new(0),
        }
    }
}

impl SimplicialComplex for CountingComplex {
    fn vertices(&self) -> Vec<Vertex> {
        self.inner.vertices()
    }

    fn skeleton(&self) -> Skeleton {
        self.inner.skeleton()
    }

    fn triangles(&self) -> Vec<Simplex> {
        self.inner.triangles()
    }

    fn connected_component(&self, v: Vertex) -> Option<Self> {
        self.inner.connected_component(v).map(Self::new)
    }

    fn is_connected(&self) -> bool {
        self.connectivity_queries
            .set(self.connectivity_queries.get() + 1);
        self.inner.is_connected()
    }
}

#[test]
fn builder_asks_the_complex_for_connectivity() {
    let torus = CountingComplex::new(standard::torus());
    let p = fundamental_group(&torus, None, BuildCfg::default()).unwrap();
    assert_eq!(p.abelian_invariants(), ab(2, &[]));
    assert_eq!(torus.connectivity_queries.get(), 1);

    let two = CountingComplex::new(Complex::from_simplices(vec![
        vec![0, 1, 2],
        vec![5, 6],
        vec![6, 7],
        vec![5, 7],
    ]));
    assert_eq!(
        fundamental_group(&two, None, RAW),
        Err(Pi1Error::MissingBasePoint)
    );
    let circle = fundamental_group(&two, Some(5), RAW).unwrap();
    assert_eq!(circle.num_generators(), 1);
    assert_eq!(two.connectivity_queries.get(), 2);
}

#[test]
fn empty_complex_is_rejected() {
    assert_eq!(
        fundamental_group(&Complex::new(), Some(0), BuildCfg::default()),
        Err(Pi1Error::EmptyComplex)
    );
    assert_eq!(
        Pi1Error::MissingBasePoint.to_string(),
        "this complex is not connected, so you must specify a base point"
    );
}

#[test]
fn standard_surfaces_abelianize_correctly() {
    let cases = [
        ("sphere", standard::sphere(2), ab(0, &[])),
        ("torus", standard::torus(), ab(2, &[])),
        ("rp2", standard::real_projective_plane(), ab(0, &[2])),
        ("klein", standard::klein_bottle(), ab(1, &[2])),
        ("wedge3", standard::wedge_of_circles(3), ab(3, &[])),
        ("circle", standard::circle(6), ab(1, &[])),
        ("3-simplex", standard::simplex(3), ab(0, &[])),
    ];
    for (name, c, expected) in cases {
        let raw = fundamental_group(&c, None, RAW).unwrap();
        let simp = fundamental_group(&c, None, BuildCfg::default()).unwrap();
        assert_eq!(raw.abelian_invariants(), expected, "{name} (raw)");
        assert_eq!(simp.abelian_invariants(), expected, "{name} (simplified)");
    }
}

#[test]
fn unsimplified_sizes_match_cell_counts() {
    // generators = E - V + 1, relators = number of triangles
    for (c, gens, rels) in [
        (standard::torus(), 15, 14),
        (standard::real_projective_plane(), 10, 10),
        (standard::klein_bottle(), 17, 16),
        (standard::sphere(2), 3, 4),
    ] {
        let p = fundamental_group(&c, None, RAW).unwrap();
        assert_eq!(p.num_generators(), gens);
        assert_eq!(p.num_relators(), rels);
        assert!(p.relators().iter().all(|r| r.len() <= 3));
    }
}

#[test]
fn simplified_surface_shapes() {
    let torus = fundamental_group(&standard::torus(), None, BuildCfg::default()).unwrap();
    assert_eq!(torus.num_generators(), 2);
    assert_eq!(torus.num_relators(), 1);
    assert_eq!(torus.relators()[0].len(), 4);

    let rp2 = fundamental_group(&standard::real_projective_plane(), None, BuildCfg::default())
        .unwrap();
    assert_eq!(rp2.num_generators(), 1);
    assert_eq!(rp2.num_relators(), 1);
    assert_eq!(rp2.relators()[0].len(), 2);
    assert_eq!(rp2.relators()[0].exponent_sum(0).abs(), 2);

    let klein = fundamental_group(&standard::klein_bottle(), None, BuildCfg::default()).unwrap();
    assert_eq!(klein.num_generators(), 2);
    assert_eq!(klein.num_relators(), 1);
    assert_eq!(klein.relators()[0].len(), 4);

    let sphere = fundamental_group(&standard::sphere(2), None, BuildCfg::default()).unwrap();
    assert!(sphere.is_trivial());
    assert_eq!(sphere.to_string(), "<>");
}

#[test]
fn simplify_later_matches_simplify_now() {
    for c in [
        standard::torus(),
        standard::klein_bottle(),
        standard::real_projective_plane(),
    ] {
        let raw = fundamental_group(&c, None, RAW).unwrap();
        let later = simplify(raw, SimplifyCfg::default());
        let now = fundamental_group(&c, None, BuildCfg::default()).unwrap();
        assert_eq!(later, now);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn generator_count_is_cycle_rank(seed in any::<u64>(), n in 3usize..14) {
        let cfg = RandomComplexCfg { vertices: n, p_edge: 0.35, p_triangle: 0.4 };
        let c = random_connected_complex(cfg, ReplayToken::new(seed, 0));
        let sk = c.skeleton();
        prop_assert!(sk.is_connected());
        let red = reduce_skeleton(&sk);
        prop_assert_eq!(red.tree.len(), sk.vertex_count() - 1);
        prop_assert_eq!(red.generators.len(), sk.edge_count() + 1 - sk.vertex_count());

        let p = fundamental_group(&c, None, RAW).unwrap();
        prop_assert_eq!(p.num_generators(), red.generators.len());
        if p.num_generators() > 0 {
            prop_assert_eq!(p.num_relators(), c.triangles().len());
        }
    }

    #[test]
    fn simplification_preserves_abelianization(seed in any::<u64>(), index in 0u64..4) {
        let cfg = RandomComplexCfg { vertices: 9, p_edge: 0.5, p_triangle: 0.5 };
        let c = random_connected_complex(cfg, ReplayToken::new(seed, index));
        let raw = fundamental_group(&c, None, RAW).unwrap();
        let simp = fundamental_group(&c, None, BuildCfg::default()).unwrap();
        let (a, b) = (raw.abelian_invariants(), simp.abelian_invariants());
        prop_assert_eq!(&a, &b);
        prop_assert!(simp.num_generators() <= raw.num_generators());
        prop_assert!(a.rank <= simp.num_generators());
    }

    #[test]
    fn base_point_component_equals_direct_build(seed in any::<u64>()) {
        let cfg = RandomComplexCfg { vertices: 10, p_edge: 0.15, p_triangle: 0.6 };
        let c = random_complex(cfg, ReplayToken::new(seed, 7));
        let bp = (seed % 10) as usize;
        let comp = c.connected_component(bp).unwrap();
        let direct = fundamental_group(&comp, None, RAW).unwrap();
        let via = fundamental_group(&c, Some(bp), RAW).unwrap();
        prop_assert_eq!(via, direct);
        if !c.is_connected() {
            prop_assert_eq!(fundamental_group(&c, None, RAW), Err(Pi1Error::MissingBasePoint));
        }
    }
}
