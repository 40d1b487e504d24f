//! Free-group / presentation engine interface and the in-house engine.

use super::presentation::Presentation;
use super::simplify::{simplify, SimplifyCfg};
use super::word::Word;

/// What the presentation builder needs from a group-theory backend.
///
/// Elements are opaque; the builder only composes generators, inverses and
/// the identity into relators and hands them back for the quotient.
pub trait FreeGroupEngine: Sized {
    type Element: Clone;
    type Presentation;

    /// Free group on `rank` generators.
    fn free_group(rank: usize) -> Self;
    fn rank(&self) -> usize;
    fn one(&self) -> Self::Element;
    /// Generator by index, `index < rank()`.
    fn generator(&self, index: usize) -> Self::Element;
    fn inverse(&self, x: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    /// `F / ⟨⟨relators⟩⟩`.
    fn quotient(&self, relators: Vec<Self::Element>) -> Self::Presentation;
    /// An isomorphic presentation with (usually) fewer generators/relators.
    fn simplify(&self, p: Self::Presentation) -> Self::Presentation;
    /// Presentation of the trivial group.
    fn trivial() -> Self::Presentation;
}

/// Free group over reduced `Word`s; simplification by Tietze moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct FreeGroup {
    rank: usize,
    pub cfg: SimplifyCfg,
}

impl FreeGroup {
    pub fn with_cfg(rank: usize, cfg: SimplifyCfg) -> Self {
        Self { rank, cfg }
    }
}

impl FreeGroupEngine for FreeGroup {
    type Element = Word;
    type Presentation = Presentation;

    fn free_group(rank: usize) -> Self {
        Self::with_cfg(rank, SimplifyCfg::default())
    }

    fn rank(&self) -> usize {
        self.rank
    }

    fn one(&self) -> Word {
        Word::identity()
    }

    fn generator(&self, index: usize) -> Word {
        debug_assert!(index < self.rank, "generator {index} out of rank {}", self.rank);
        Word::generator(index)
    }

    fn inverse(&self, x: &Word) -> Word {
        x.inverse()
    }

    fn mul(&self, a: &Word, b: &Word) -> Word {
        a.mul(b)
    }

    fn quotient(&self, relators: Vec<Word>) -> Presentation {
        Presentation::new(self.rank, relators)
    }

    fn simplify(&self, p: Presentation) -> Presentation {
        simplify(p, self.cfg)
    }

    fn trivial() -> Presentation {
        Presentation::trivial()
    }
}
