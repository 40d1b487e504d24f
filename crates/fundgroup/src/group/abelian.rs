//! Abelianization via the Smith normal form of the exponent-sum matrix.
//!
//! For `⟨x_1..x_n | r_1..r_m⟩` the abelianization is `Z^n / row-span(M)` with
//! `M[i][j]` the exponent sum of `x_j` in `r_i`. Its diagonal form gives
//! `Z^rank ⊕ Z/d_1 ⊕ ... ⊕ Z/d_k` with `d_1 | d_2 | ... | d_k`, `d_i > 1`.

use std::fmt;

use nalgebra::DMatrix;

use super::word::Word;

/// `Z^rank ⊕ Z/torsion[0] ⊕ ...`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbelianInvariants {
    pub rank: usize,
    /// Invariant factors > 1, each dividing the next.
    pub torsion: Vec<u64>,
}

impl AbelianInvariants {
    pub fn is_trivial(&self) -> bool {
        self.rank == 0 && self.torsion.is_empty()
    }
}

impl fmt::Display for AbelianInvariants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        match self.rank {
            0 => {}
            1 => parts.push("Z".to_string()),
            r => parts.push(format!("Z^{r}")),
        }
        parts.extend(self.torsion.iter().map(|d| format!("Z/{d}")));
        if parts.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", parts.join(" + "))
        }
    }
}

/// Rows: relators; columns: generators; entries: exponent sums.
pub fn relation_matrix(rank: usize, relators: &[Word]) -> DMatrix<i64> {
    let mut m = DMatrix::<i64>::zeros(relators.len(), rank);
    for (i, r) in relators.iter().enumerate() {
        for l in r.letters() {
            m[(i, l.gen)] += if l.inv { -1 } else { 1 };
        }
    }
    m
}

pub fn abelian_invariants(rank: usize, relators: &[Word]) -> AbelianInvariants {
    let diag = smith_diagonal(relation_matrix(rank, relators));
    AbelianInvariants {
        rank: rank - diag.len(),
        torsion: diag.into_iter().filter(|&d| d > 1).collect(),
    }
}

/// Non-zero invariant factors of an integer matrix, in divisibility order.
pub fn smith_diagonal(mut m: DMatrix<i64>) -> Vec<u64> {
    let (rows, cols) = m.shape();
    let mut diag: Vec<u64> = Vec::new();
    for t in 0..rows.min(cols) {
        let Some((pi, pj)) = smallest_entry(&m, t, |_, _| true) else {
            break;
        };
        m.swap_rows(t, pi);
        m.swap_columns(t, pj);
        loop {
            let p = m[(t, t)];
            let mut clean = true;
            for i in t + 1..rows {
                let q = m[(i, t)] / p;
                if q != 0 {
                    for k in t..cols {
                        let v = m[(t, k)];
                        m[(i, k)] -= q * v;
                    }
                }
                clean &= m[(i, t)] == 0;
            }
            for j in t + 1..cols {
                let q = m[(t, j)] / p;
                if q != 0 {
                    for k in t..rows {
                        let v = m[(k, t)];
                        m[(k, j)] -= q * v;
                    }
                }
                clean &= m[(t, j)] == 0;
            }
            if clean {
                break;
            }
            // A remainder smaller than the pivot survives in row or column t.
            let (pi, pj) = smallest_entry(&m, t, |i, j| i == t || j == t)
                .unwrap_or((t, t));
            m.swap_rows(t, pi);
            m.swap_columns(t, pj);
        }
        diag.push(m[(t, t)].unsigned_abs());
    }
    for a in 0..diag.len() {
        for b in a + 1..diag.len() {
            let g = gcd(diag[a], diag[b]);
            let l = diag[a] / g * diag[b];
            diag[a] = g;
            diag[b] = l;
        }
    }
    diag
}

/// Position of the smallest non-zero `|m[(i,j)]|` with `i, j >= t` and `keep(i, j)`.
fn smallest_entry(
    m: &DMatrix<i64>,
    t: usize,
    keep: impl Fn(usize, usize) -> bool,
) -> Option<(usize, usize)> {
    let (rows, cols) = m.shape();
    let mut best: Option<(u64, usize, usize)> = None;
    for i in t..rows {
        for j in t..cols {
            let v = m[(i, j)].unsigned_abs();
            if v == 0 || !keep(i, j) {
                continue;
            }
            if best.map_or(true, |(b, _, _)| v < b) {
                best = Some((v, i, j));
            }
        }
    }
    best.map(|(_, i, j)| (i, j))
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
