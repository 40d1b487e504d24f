use super::*;
use nalgebra::dmatrix;

fn w(letters: &[(usize, bool)]) -> Word {
    Word::from_letters(letters.iter().map(|&(g, inv)| Letter::new(g, inv)))
}

#[test]
fn words_reduce_freely() {
    let a = Word::generator(0);
    let b = Word::generator(1);
    let ab = &a * &b;
    assert_eq!(ab.len(), 2);
    assert!(ab.mul(&ab.inverse()).is_identity());
    assert_eq!(w(&[(0, false), (1, false), (1, true), (2, false)]), w(&[(0, false), (2, false)]));
    assert_eq!(Word::identity().mul(&a), a);
    assert_eq!(ab.to_string(), "e0*e1");
    assert_eq!(ab.inverse().to_string(), "e1^-1*e0^-1");
    assert_eq!(Word::identity().to_string(), "1");
}

#[test]
fn cyclic_reduction_and_canonical_form() {
    // a b c a^-1 -> b c
    let r = w(&[(0, false), (1, false), (2, false), (0, true)]);
    assert_eq!(r.cyclically_reduced(), w(&[(1, false), (2, false)]));
    // rotations and inverses share one canonical form
    let x = w(&[(0, false), (1, false), (0, true), (1, true)]);
    let y = x.rotated(2);
    assert_eq!(x.cyclic_canonical(), y.cyclic_canonical());
    assert_eq!(x.cyclic_canonical(), x.inverse().cyclic_canonical());
    assert_ne!(
        x.cyclic_canonical(),
        w(&[(0, false), (0, false)]).cyclic_canonical()
    );
}

#[test]
fn substitution_and_counts() {
    // r = a b a^-1, b := c^2
    let r = w(&[(0, false), (1, false), (0, true)]);
    let s = r.substitute(1, &w(&[(2, false), (2, false)]));
    assert_eq!(s.len(), 4);
    assert_eq!(s.occurrences(0), 2);
    assert_eq!(s.exponent_sum(0), 0);
    assert_eq!(s.exponent_sum(2), 2);
    // a := b^-1 collapses a b into the identity
    let t = w(&[(0, false), (1, false)]).substitute(0, &w(&[(1, true)]));
    assert!(t.is_identity());
}

#[test]
fn engine_builds_relators() {
    let fg = FreeGroup::free_group(2);
    assert_eq!(fg.rank(), 2);
    let a = fg.generator(0);
    let one = fg.one();
    let r = fg.mul(&fg.mul(&a, &fg.inverse(&one)), &a);
    assert_eq!(r, w(&[(0, false), (0, false)]));
    let p = fg.quotient(vec![r]);
    assert_eq!(p.num_generators(), 2);
    assert_eq!(p.to_string(), "<e0, e1 | e0*e0>");
    assert!(FreeGroup::trivial().is_trivial());
}

#[test]
fn simplify_eliminates_solvable_generators() {
    // <a, b | a b^-1> == Z, b survives after a := b
    let p = Presentation::new(2, vec![w(&[(0, false), (1, true)])]);
    let s = simplify(p, SimplifyCfg::default());
    assert_eq!(s.num_generators(), 1);
    assert_eq!(s.num_relators(), 0);
    assert_eq!(s.generator_names(), &["e1".to_string()]);

    // <a | a> is trivial
    let p = Presentation::new(1, vec![Word::generator(0)]);
    assert!(simplify(p, SimplifyCfg::default()).is_trivial());
}

#[test]
fn simplify_keeps_surface_relator() {
    // <a, b | a b a^-1 b^-1> admits no elimination
    let comm = w(&[(0, false), (1, false), (0, true), (1, true)]);
    let p = Presentation::new(2, vec![comm.clone(), comm.rotated(1), Word::identity()]);
    let s = simplify(p, SimplifyCfg::default());
    assert_eq!(s.num_generators(), 2);
    assert_eq!(s.relators(), &[comm]);
}

#[test]
fn simplify_without_elimination_only_tidies() {
    let cfg = SimplifyCfg {
        eliminate_generators: false,
        ..SimplifyCfg::default()
    };
    let p = Presentation::new(
        2,
        vec![
            Word::identity(),
            w(&[(1, false), (0, false), (1, true)]),
            Word::generator(0),
        ],
    );
    let s = simplify(p, cfg);
    assert_eq!(s.num_generators(), 2);
    assert_eq!(s.relators(), &[Word::generator(0)]);
}

#[test]
fn smith_form_diagonals() {
    assert_eq!(smith_diagonal(dmatrix![2, 4; 6, 8]), vec![2, 4]);
    assert_eq!(smith_diagonal(dmatrix![2, 0; 0, 3]), vec![1, 6]);
    assert_eq!(smith_diagonal(dmatrix![1, 1; 1, 1]), vec![1]);
    assert!(smith_diagonal(nalgebra::DMatrix::<i64>::zeros(0, 3)).is_empty());
}

#[test]
fn abelian_invariants_of_small_presentations() {
    // Klein bottle <a, b | a b a b^-1>: Z + Z/2
    let k = Presentation::new(2, vec![w(&[(0, false), (1, false), (0, false), (1, true)])]);
    let ab = k.abelian_invariants();
    assert_eq!(ab, AbelianInvariants { rank: 1, torsion: vec![2] });
    assert_eq!(ab.to_string(), "Z + Z/2");

    assert_eq!(Presentation::free(3).abelian_invariants().to_string(), "Z^3");
    assert!(Presentation::trivial().abelian_invariants().is_trivial());
    assert_eq!(Presentation::trivial().abelian_invariants().to_string(), "0");
}

#[test]
fn relation_matrix_counts_exponents() {
    let m = relation_matrix(2, &[w(&[(0, false), (1, true), (0, false)])]);
    assert_eq!(m, dmatrix![2i64, -1]);
}
