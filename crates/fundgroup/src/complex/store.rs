//! Concrete simplicial complex: simplices bucketed by dimension.

use std::collections::{BTreeSet, HashSet};

use super::capability::SimplicialComplex;
use super::skeleton::Skeleton;
use super::types::{Simplex, Vertex};

/// Finite simplicial complex stored as ordered sets of cells per dimension.
///
/// Invariants:
/// - closed under faces: inserting a simplex inserts all of its faces;
/// - `cells[d]` holds exactly the `d`-simplices, in lexicographic order;
/// - no trailing empty dimension buckets;
/// - with a dimension cap `k`, only the `k`-skeleton is stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Complex {
    cells: Vec<BTreeSet<Simplex>>,
    max_dim: Option<usize>,
}

/// Largest simplex (in vertices) an uncapped complex closes under faces.
pub const MAX_CLOSURE_VERTICES: usize = 20;

impl Complex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty complex that keeps only faces of dimension `<= max_dim`.
    ///
    /// The fundamental group only reads the 2-skeleton, so `with_max_dim(2)`
    /// accepts simplices of any size at `O(n^3)` faces each.
    pub fn with_max_dim(max_dim: usize) -> Self {
        Self {
            cells: Vec::new(),
            max_dim: Some(max_dim),
        }
    }

    /// Like [`Complex::from_simplices`], keeping only the `max_dim`-skeleton.
    pub fn from_simplices_up_to<I, S>(simplices: I, max_dim: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[Vertex]>,
    {
        let mut c = Self::with_max_dim(max_dim);
        for s in simplices {
            c.add_simplex(s.as_ref());
        }
        c
    }

    /// Dimension cap, if any.
    pub fn max_dim(&self) -> Option<usize> {
        self.max_dim
    }

    /// Build from a list of simplices (typically the maximal ones).
    ///
    /// Vertex lists are canonicalized (sorted, deduplicated); empty lists are skipped.
    pub fn from_simplices<I, S>(simplices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[Vertex]>,
    {
        let mut c = Self::new();
        for s in simplices {
            c.add_simplex(s.as_ref());
        }
        c
    }

    /// Insert a simplex and all of its faces (up to the dimension cap).
    ///
    /// Returns `false`, inserting nothing, for an empty list or, without a
    /// cap, for more than [`MAX_CLOSURE_VERTICES`] vertices.
    pub fn add_simplex(&mut self, vertices: &[Vertex]) -> bool {
        let Some(s) = Simplex::new(vertices.iter().copied()) else {
            return false;
        };
        if self.contains(&s) {
            return true;
        }
        let faces = match self.max_dim {
            Some(k) => s.faces_up_to(k),
            None if s.vertices().len() > MAX_CLOSURE_VERTICES => {
                tracing::warn!(
                    vertices = s.vertices().len(),
                    limit = MAX_CLOSURE_VERTICES,
                    "simplex too large to close under faces; skipped"
                );
                return false;
            }
            None => s.closure(),
        };
        for face in faces {
            let d = face.dim();
            if self.cells.len() <= d {
                self.cells.resize_with(d + 1, BTreeSet::new);
            }
            self.cells[d].insert(face);
        }
        true
    }

    pub fn contains(&self, s: &Simplex) -> bool {
        self.cells.get(s.dim()).is_some_and(|set| set.contains(s))
    }

    /// Top dimension; `None` for the empty complex.
    pub fn dimension(&self) -> Option<usize> {
        self.cells.len().checked_sub(1)
    }

    /// The `d`-simplices in lexicographic order.
    pub fn n_cells(&self, d: usize) -> Vec<Simplex> {
        self.cells
            .get(d)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of `d`-simplices.
    pub fn n_cells_count(&self, d: usize) -> usize {
        self.cells.get(d).map_or(0, BTreeSet::len)
    }

    /// `[f_0, f_1, ...]`: cell counts per dimension.
    pub fn f_vector(&self) -> Vec<usize> {
        self.cells.iter().map(BTreeSet::len).collect()
    }

    /// Alternating sum of the f-vector.
    pub fn euler_characteristic(&self) -> i64 {
        self.cells
            .iter()
            .enumerate()
            .map(|(d, set)| {
                let n = set.len() as i64;
                if d % 2 == 0 {
                    n
                } else {
                    -n
                }
            })
            .sum()
    }

    /// Maximal simplices (facets) in order of dimension, then lexicographic.
    pub fn facets(&self) -> Vec<Simplex> {
        let mut out = Vec::new();
        for (d, set) in self.cells.iter().enumerate() {
            let upper = self.cells.get(d + 1);
            for s in set {
                let covered = upper.is_some_and(|up| {
                    up.iter()
                        .any(|t| s.vertices().iter().all(|&v| t.contains(v)))
                });
                if !covered {
                    out.push(s.clone());
                }
            }
        }
        out
    }

    /// Induced subcomplex on a vertex set.
    pub fn induced(&self, keep: &HashSet<Vertex>) -> Self {
        let cells: Vec<BTreeSet<Simplex>> = self
            .cells
            .iter()
            .map(|set| {
                set.iter()
                    .filter(|s| s.vertices().iter().all(|v| keep.contains(v)))
                    .cloned()
                    .collect()
            })
            .collect();
        let mut out = Self {
            cells,
            max_dim: self.max_dim,
        };
        while out.cells.last().is_some_and(BTreeSet::is_empty) {
            out.cells.pop();
        }
        out
    }

    /// One subcomplex per connected component, ordered by smallest vertex.
    pub fn components(&self) -> Vec<Self> {
        self.skeleton()
            .components()
            .into_iter()
            .map(|vs| self.induced(&vs.into_iter().collect()))
            .collect()
    }
}

impl SimplicialComplex for Complex {
    fn vertices(&self) -> Vec<Vertex> {
        self.cells
            .first()
            .map(|set| set.iter().map(|s| s.vertices()[0]).collect())
            .unwrap_or_default()
    }

    fn skeleton(&self) -> Skeleton {
        let edges = self
            .cells
            .get(1)
            .into_iter()
            .flatten()
            .filter_map(Simplex::as_edge);
        Skeleton::new(self.vertices(), edges)
    }

    fn triangles(&self) -> Vec<Simplex> {
        self.n_cells(2)
    }

    fn connected_component(&self, v: Vertex) -> Option<Self> {
        let comp = self.skeleton().component_of(v)?;
        Some(self.induced(&comp.into_iter().collect()))
    }

    fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
