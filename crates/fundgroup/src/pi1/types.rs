//! Configuration, errors, and the edge reduction produced by the builder.

use std::collections::HashMap;
use std::fmt;

use crate::complex::{edge, Edge, SpanningTree, Vertex};

/// Builder configuration.
#[derive(Clone, Copy, Debug)]
pub struct BuildCfg {
    /// Hand the quotient to the engine's simplification before returning.
    pub simplify: bool,
}

impl Default for BuildCfg {
    fn default() -> Self {
        Self { simplify: true }
    }
}

/// Caller-correctable failures of the presentation builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pi1Error {
    /// The complex has no vertices.
    EmptyComplex,
    /// The complex is disconnected and no base point was given.
    MissingBasePoint,
    /// The complex is disconnected and the base point is not one of its vertices.
    UnknownBasePoint(Vertex),
}

impl fmt::Display for Pi1Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pi1Error::EmptyComplex => write!(f, "complex is empty (no vertices)"),
            Pi1Error::MissingBasePoint => write!(
                f,
                "this complex is not connected, so you must specify a base point"
            ),
            Pi1Error::UnknownBasePoint(v) => {
                write!(f, "base point {v} is not a vertex of the complex")
            }
        }
    }
}

impl std::error::Error for Pi1Error {}

/// Non-tree edges, indexed `0..k` in skeleton enumeration order.
#[derive(Clone, Debug, Default)]
pub struct GeneratorSet {
    edges: Vec<Edge>,
    index: HashMap<Edge, usize>,
}

impl GeneratorSet {
    pub(crate) fn push(&mut self, e: Edge) {
        let e = edge(e[0], e[1]);
        if !self.index.contains_key(&e) {
            self.index.insert(e, self.edges.len());
            self.edges.push(e);
        }
    }

    /// Generator index of an unordered pair.
    #[inline]
    pub fn index_of(&self, e: Edge) -> Option<usize> {
        self.index.get(&edge(e[0], e[1])).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edge of each generator, by index.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Spanning tree of a connected 1-skeleton and the generators it leaves over.
#[derive(Clone, Debug, Default)]
pub struct EdgeReduction {
    pub tree: SpanningTree,
    pub generators: GeneratorSet,
}
