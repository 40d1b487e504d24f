//! Free-group words as freely reduced letter sequences.

use std::fmt;
use std::ops::Mul;

/// Generator `gen` or its inverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter {
    pub gen: usize,
    pub inv: bool,
}

impl Letter {
    #[inline]
    pub fn new(gen: usize, inv: bool) -> Self {
        Self { gen, inv }
    }

    #[inline]
    pub fn inverse(self) -> Self {
        Self {
            gen: self.gen,
            inv: !self.inv,
        }
    }

    /// `self * other == 1`.
    #[inline]
    pub fn cancels(self, other: Letter) -> bool {
        self.gen == other.gen && self.inv != other.inv
    }
}

/// Element of a free group.
///
/// Invariant: freely reduced (no adjacent `x x⁻¹`). The empty word is the identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    #[inline]
    pub fn identity() -> Self {
        Self::default()
    }

    #[inline]
    pub fn generator(gen: usize) -> Self {
        Self {
            letters: vec![Letter::new(gen, false)],
        }
    }

    /// Freely reduce an arbitrary letter sequence.
    pub fn from_letters(letters: impl IntoIterator<Item = Letter>) -> Self {
        let mut w = Self::identity();
        for l in letters {
            w.push(l);
        }
        w
    }

    /// Append one letter, cancelling against the tail.
    pub fn push(&mut self, l: Letter) {
        match self.letters.last() {
            Some(&last) if last.cancels(l) => {
                self.letters.pop();
            }
            _ => self.letters.push(l),
        }
    }

    #[inline]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn inverse(&self) -> Self {
        Self {
            letters: self.letters.iter().rev().map(|l| l.inverse()).collect(),
        }
    }

    /// Word concatenation followed by free reduction at the seam.
    pub fn mul(&self, other: &Word) -> Self {
        let mut out = self.clone();
        for &l in &other.letters {
            out.push(l);
        }
        out
    }

    /// Conjugate-reduce: strip matching `x ... x⁻¹` ends.
    pub fn cyclically_reduced(&self) -> Self {
        let mut lo = 0;
        let mut hi = self.letters.len();
        while hi - lo >= 2 && self.letters[lo].cancels(self.letters[hi - 1]) {
            lo += 1;
            hi -= 1;
        }
        Self {
            letters: self.letters[lo..hi].to_vec(),
        }
    }

    /// Cyclic rotation starting at position `k`. Only meaningful on cyclically
    /// reduced words, where every rotation stays freely reduced.
    pub fn rotated(&self, k: usize) -> Self {
        if self.letters.is_empty() {
            return Self::identity();
        }
        let k = k % self.letters.len();
        let mut letters = Vec::with_capacity(self.letters.len());
        letters.extend_from_slice(&self.letters[k..]);
        letters.extend_from_slice(&self.letters[..k]);
        Self { letters }
    }

    /// Least representative among all rotations of `self` and its inverse.
    /// Two cyclically reduced relators define the same normal closure element
    /// up to conjugation and inversion iff their canonical forms agree.
    pub fn cyclic_canonical(&self) -> Self {
        let inv = self.inverse();
        (0..self.letters.len())
            .flat_map(|k| [self.rotated(k), inv.rotated(k)])
            .min()
            .unwrap_or_default()
    }

    /// Occurrences of `gen` with either sign.
    pub fn occurrences(&self, gen: usize) -> usize {
        self.letters.iter().filter(|l| l.gen == gen).count()
    }

    /// Signed count of `gen` (inverse letters count −1).
    pub fn exponent_sum(&self, gen: usize) -> i64 {
        self.letters
            .iter()
            .filter(|l| l.gen == gen)
            .map(|l| if l.inv { -1 } else { 1 })
            .sum()
    }

    /// Replace every occurrence of `gen` by `value` (inverse letters by `value⁻¹`).
    pub fn substitute(&self, gen: usize, value: &Word) -> Self {
        let value_inv = value.inverse();
        let mut out = Self::identity();
        for &l in &self.letters {
            if l.gen != gen {
                out.push(l);
                continue;
            }
            let sub = if l.inv { &value_inv } else { value };
            for &m in &sub.letters {
                out.push(m);
            }
        }
        out
    }

    /// Rewrite generator indices through `map`; letters mapping to `None` are dropped.
    pub fn relabel(&self, map: impl Fn(usize) -> Option<usize>) -> Self {
        Self::from_letters(
            self.letters
                .iter()
                .filter_map(|l| map(l.gen).map(|g| Letter::new(g, l.inv))),
        )
    }

    /// Render with the given generator names, e.g. `e0*e1^-1`; identity is `1`.
    pub fn display_with(&self, names: &[String]) -> String {
        if self.letters.is_empty() {
            return "1".to_string();
        }
        let parts: Vec<String> = self
            .letters
            .iter()
            .map(|l| {
                let name = names
                    .get(l.gen)
                    .cloned()
                    .unwrap_or_else(|| format!("e{}", l.gen));
                if l.inv {
                    format!("{name}^-1")
                } else {
                    name
                }
            })
            .collect();
        parts.join("*")
    }
}

impl Mul for &Word {
    type Output = Word;

    fn mul(self, rhs: &Word) -> Word {
        Word::mul(self, rhs)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(&[]))
    }
}
