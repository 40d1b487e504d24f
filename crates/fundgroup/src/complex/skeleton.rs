//! 1-skeleton graph and spanning trees.
//!
//! The graph is a `petgraph` undirected graph whose node weights are the
//! complex's vertex ids. Edge enumeration order is the insertion order, which
//! `Complex` makes lexicographic.

use std::collections::{HashMap, HashSet};

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::Bfs;

use super::types::{edge, Edge, Vertex};

/// Undirected graph of 0- and 1-simplices.
#[derive(Clone, Debug, Default)]
pub struct Skeleton {
    graph: UnGraph<Vertex, ()>,
    index: HashMap<Vertex, NodeIndex>,
    edges: Vec<Edge>,
}

impl Skeleton {
    /// Build from a vertex list and an edge list.
    ///
    /// Edge endpoints missing from `vertices` are added; self-loops and
    /// repeated edges are dropped. Edge order is preserved.
    pub fn new(
        vertices: impl IntoIterator<Item = Vertex>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Self {
        let mut sk = Self::default();
        for v in vertices {
            sk.node(v);
        }
        let mut seen: HashSet<Edge> = HashSet::new();
        for [u, v] in edges {
            if u == v {
                continue;
            }
            let e = edge(u, v);
            if !seen.insert(e) {
                continue;
            }
            let (a, b) = (sk.node(e[0]), sk.node(e[1]));
            sk.graph.add_edge(a, b, ());
            sk.edges.push(e);
        }
        sk
    }

    fn node(&mut self, v: Vertex) -> NodeIndex {
        if let Some(&ix) = self.index.get(&v) {
            return ix;
        }
        let ix = self.graph.add_node(v);
        self.index.insert(v, ix);
        ix
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.graph.node_weights().copied().collect()
    }

    /// Edges in enumeration order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn contains_vertex(&self, v: Vertex) -> bool {
        self.index.contains_key(&v)
    }

    /// Number of connected components (0 for the empty graph).
    pub fn component_count(&self) -> usize {
        connected_components(&self.graph)
    }

    /// Non-empty and a single component.
    pub fn is_connected(&self) -> bool {
        self.component_count() == 1
    }

    /// Sorted vertices of the component containing `v`.
    pub fn component_of(&self, v: Vertex) -> Option<Vec<Vertex>> {
        let &start = self.index.get(&v)?;
        let mut bfs = Bfs::new(&self.graph, start);
        let mut out = Vec::new();
        while let Some(nx) = bfs.next(&self.graph) {
            out.push(self.graph[nx]);
        }
        out.sort_unstable();
        Some(out)
    }

    /// All components, each sorted, ordered by smallest vertex.
    pub fn components(&self) -> Vec<Vec<Vertex>> {
        let mut uf = UnionFind::<usize>::new(self.graph.node_count());
        for e in self.graph.edge_indices() {
            if let Some((a, b)) = self.graph.edge_endpoints(e) {
                uf.union(a.index(), b.index());
            }
        }
        let mut groups: HashMap<usize, Vec<Vertex>> = HashMap::new();
        for nx in self.graph.node_indices() {
            groups.entry(uf.find(nx.index())).or_default().push(self.graph[nx]);
        }
        let mut out: Vec<Vec<Vertex>> = groups
            .into_values()
            .map(|mut g| {
                g.sort_unstable();
                g
            })
            .collect();
        out.sort_unstable_by_key(|g| g[0]);
        out
    }

    /// Minimum spanning forest; a spanning tree when the graph is connected.
    ///
    /// All edges weigh the same, so Kruskal reduces to one union-find scan in
    /// edge enumeration order. The result is deterministic for a given skeleton.
    pub fn spanning_tree(&self) -> SpanningTree {
        let mut uf = UnionFind::<usize>::new(self.graph.node_count());
        let mut tree = SpanningTree::default();
        for &e in &self.edges {
            let a = self.index[&e[0]].index();
            let b = self.index[&e[1]].index();
            if uf.union(a, b) {
                tree.insert(e);
            }
        }
        tree
    }
}

/// Acyclic edge subset of a skeleton, with O(1) membership.
#[derive(Clone, Debug, Default)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    set: HashSet<Edge>,
}

impl SpanningTree {
    fn insert(&mut self, e: Edge) {
        if self.set.insert(e) {
            self.edges.push(e);
        }
    }

    /// Membership for an unordered pair (either orientation).
    #[inline]
    pub fn contains(&self, e: Edge) -> bool {
        self.set.contains(&edge(e[0], e[1]))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Tree edges in the order they were selected.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
