//! Tietze-style simplification of presentations.
//!
//! Moves, repeated until nothing changes:
//! 1. cyclically reduce relators, drop trivial ones, drop repeats up to
//!    rotation and inversion;
//! 2. eliminate a generator occurring exactly once in some relator
//!    `r ~ g^ε w`: set `g = w^{-ε}`, substitute, drop `r` and `g`.
//!    The shortest such relator is used (first on ties).
//!
//! Every move preserves the isomorphism type. The procedure is deterministic.

use std::collections::HashSet;

use super::presentation::Presentation;
use super::word::Word;

/// Simplification knobs.
#[derive(Clone, Copy, Debug)]
pub struct SimplifyCfg {
    /// Run generator elimination (move 2). Off = relator cleanup only.
    pub eliminate_generators: bool,
    /// Skip eliminations whose substituted word is longer than this.
    pub max_substitution_len: usize,
}

impl Default for SimplifyCfg {
    fn default() -> Self {
        Self {
            eliminate_generators: true,
            max_substitution_len: usize::MAX,
        }
    }
}

/// Simplify `p`; surviving generators keep their names.
pub fn simplify(p: Presentation, cfg: SimplifyCfg) -> Presentation {
    let (names, mut rels) = p.into_parts();
    let (gens_in, rels_in) = (names.len(), rels.len());
    let mut alive = vec![true; names.len()];
    loop {
        rels = tidy(rels);
        if !cfg.eliminate_generators {
            break;
        }
        let Some((ri, pos)) = pick_elimination(&rels, cfg.max_substitution_len) else {
            break;
        };
        let r = rels.remove(ri).rotated(pos);
        let head = r.letters()[0];
        let w = Word::from_letters(r.letters()[1..].iter().copied());
        let value = if head.inv { w } else { w.inverse() };
        rels = rels
            .iter()
            .map(|s| s.substitute(head.gen, &value))
            .collect();
        alive[head.gen] = false;
    }

    let mut remap: Vec<Option<usize>> = vec![None; names.len()];
    let mut kept = Vec::new();
    for (g, name) in names.into_iter().enumerate() {
        if alive[g] {
            remap[g] = Some(kept.len());
            kept.push(name);
        }
    }
    let rels: Vec<Word> = rels.iter().map(|r| r.relabel(|g| remap[g])).collect();
    tracing::debug!(
        generators_in = gens_in,
        relators_in = rels_in,
        generators_out = kept.len(),
        relators_out = rels.len(),
        "simplified presentation"
    );
    Presentation::with_names(kept, rels)
}

/// Move 1.
fn tidy(rels: Vec<Word>) -> Vec<Word> {
    let mut seen: HashSet<Word> = HashSet::new();
    let mut out = Vec::with_capacity(rels.len());
    for r in rels {
        let r = r.cyclically_reduced();
        if r.is_identity() {
            continue;
        }
        if seen.insert(r.cyclic_canonical()) {
            out.push(r);
        }
    }
    out
}

/// `(relator index, letter position)` of the next elimination, if any.
fn pick_elimination(rels: &[Word], max_len: usize) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, usize)> = None;
    for (ri, r) in rels.iter().enumerate() {
        if r.len() - 1 > max_len {
            continue;
        }
        if best.is_some_and(|(len, _, _)| r.len() >= len) {
            continue;
        }
        if let Some(pos) = r.letters().iter().position(|l| r.occurrences(l.gen) == 1) {
            best = Some((r.len(), ri, pos));
        }
    }
    best.map(|(_, ri, pos)| (ri, pos))
}
