//! Simplices, edges and vertex identifiers.
//!
//! A `Simplex` is kept sorted and duplicate-free so that equal cells compare
//! equal and the lexicographic order on `Vec<Vertex>` gives a stable cell order.

use std::fmt;

/// Vertex identifier.
pub type Vertex = usize;

/// Unordered vertex pair in canonical form `[u, v]` with `u < v`.
pub type Edge = [Vertex; 2];

/// Canonical form of an unordered pair.
#[inline]
pub fn edge(u: Vertex, v: Vertex) -> Edge {
    if u <= v {
        [u, v]
    } else {
        [v, u]
    }
}

/// Sorted, duplicate-free, non-empty vertex sequence.
///
/// Invariants:
/// - `vertices` is strictly increasing.
/// - `dim() == vertices.len() - 1`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Simplex {
    vertices: Vec<Vertex>,
}

impl Simplex {
    /// Canonicalize `vertices` (sort, dedup). Returns `None` for an empty list.
    pub fn new(vertices: impl IntoIterator<Item = Vertex>) -> Option<Self> {
        let mut vertices: Vec<Vertex> = vertices.into_iter().collect();
        vertices.sort_unstable();
        vertices.dedup();
        if vertices.is_empty() {
            return None;
        }
        Some(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.vertices.len() - 1
    }

    #[inline]
    pub fn contains(&self, v: Vertex) -> bool {
        self.vertices.binary_search(&v).is_ok()
    }

    /// Codimension-1 faces; face `i` omits vertex `i`.
    ///
    /// A vertex has no faces here (the empty simplex is not represented).
    pub fn faces(&self) -> Vec<Simplex> {
        if self.vertices.len() < 2 {
            return Vec::new();
        }
        (0..self.vertices.len())
            .map(|i| {
                let mut vs = self.vertices.clone();
                vs.remove(i);
                Simplex { vertices: vs }
            })
            .collect()
    }

    /// All non-empty faces (including `self`), by dimension then lexicographic.
    ///
    /// `2^n - 1` faces for `n` vertices; callers bound `n`.
    pub fn closure(&self) -> Vec<Simplex> {
        self.faces_up_to(self.dim())
    }

    /// Faces of dimension `<= max_dim` (including `self` when it qualifies),
    /// by dimension then lexicographic.
    pub fn faces_up_to(&self, max_dim: usize) -> Vec<Simplex> {
        let n = self.vertices.len();
        let mut out = Vec::new();
        for k in 1..=n.min(max_dim.saturating_add(1)) {
            // `pick` walks the k-subsets of positions in lexicographic order.
            let mut pick: Vec<usize> = (0..k).collect();
            loop {
                out.push(Simplex {
                    vertices: pick.iter().map(|&i| self.vertices[i]).collect(),
                });
                let Some(i) = (0..k).rev().find(|&i| pick[i] != i + n - k) else {
                    break;
                };
                pick[i] += 1;
                for j in i + 1..k {
                    pick[j] = pick[j - 1] + 1;
                }
            }
        }
        out
    }

    /// Boundary edges of a 2-simplex `[a, b, c]` in face order: `[b,c], [a,c], [a,b]`.
    pub fn boundary_edges(&self) -> Option<[Edge; 3]> {
        match self.vertices[..] {
            [a, b, c] => Some([[b, c], [a, c], [a, b]]),
            _ => None,
        }
    }

    /// The edge spanned by a 1-simplex.
    pub fn as_edge(&self) -> Option<Edge> {
        match self.vertices[..] {
            [u, v] => Some([u, v]),
            _ => None,
        }
    }
}

impl fmt::Display for Simplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}
