//! Finitely presented groups: named generators plus relators.

use std::fmt;

use super::abelian::{abelian_invariants, AbelianInvariants};
use super::word::Word;

/// `⟨ generators | relators ⟩`.
///
/// Invariants:
/// - every letter of every relator indexes into `names`;
/// - names are unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Presentation {
    names: Vec<String>,
    relators: Vec<Word>,
}

impl Presentation {
    /// Generators named `e0, e1, ...`.
    pub fn new(rank: usize, relators: Vec<Word>) -> Self {
        Self::with_names(default_names(rank), relators)
    }

    pub fn with_names(names: Vec<String>, relators: Vec<Word>) -> Self {
        debug_assert!(relators
            .iter()
            .all(|r| r.letters().iter().all(|l| l.gen < names.len())));
        Self { names, relators }
    }

    /// The trivial group: no generators, no relators.
    pub fn trivial() -> Self {
        Self::default()
    }

    /// Free group of rank `n`.
    pub fn free(rank: usize) -> Self {
        Self::new(rank, Vec::new())
    }

    #[inline]
    pub fn num_generators(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn num_relators(&self) -> usize {
        self.relators.len()
    }

    #[inline]
    pub fn generator_names(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn relators(&self) -> &[Word] {
        &self.relators
    }

    /// Relators rendered with this presentation's generator names.
    pub fn relator_strings(&self) -> Vec<String> {
        self.relators
            .iter()
            .map(|r| r.display_with(&self.names))
            .collect()
    }

    /// No generators. Sufficient, not necessary, for the group to be trivial;
    /// a simplified presentation of a trivial group usually reaches it.
    pub fn is_trivial(&self) -> bool {
        self.names.is_empty()
    }

    /// No relator says anything (all are the identity word).
    pub fn is_free(&self) -> bool {
        self.relators.iter().all(Word::is_identity)
    }

    /// Invariants of the abelianization `G / [G, G]`.
    pub fn abelian_invariants(&self) -> AbelianInvariants {
        abelian_invariants(self.names.len(), &self.relators)
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<Word>) {
        (self.names, self.relators)
    }
}

pub(crate) fn default_names(rank: usize) -> Vec<String> {
    (0..rank).map(|i| format!("e{i}")).collect()
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.names.join(", "))?;
        if !self.relators.is_empty() {
            write!(f, " | {}", self.relator_strings().join(", "))?;
        }
        write!(f, ">")
    }
}
