//! The narrow view of a complex that the presentation builder needs.

use super::skeleton::Skeleton;
use super::types::{Simplex, Vertex};

/// Capability interface over a finite simplicial complex.
///
/// Implementors must be closed under faces. `triangles()` must return the
/// same order on every call; the relator list follows it.
pub trait SimplicialComplex: Sized {
    /// Vertices (0-simplices), sorted.
    fn vertices(&self) -> Vec<Vertex>;

    /// 1-skeleton with edges in a stable enumeration order.
    fn skeleton(&self) -> Skeleton;

    /// 2-simplices in a stable order.
    fn triangles(&self) -> Vec<Simplex>;

    /// Induced subcomplex on the connected component containing `v`.
    /// `None` when `v` is not a vertex.
    fn connected_component(&self, v: Vertex) -> Option<Self>;

    fn is_empty(&self) -> bool {
        self.vertices().is_empty()
    }

    fn is_connected(&self) -> bool {
        self.skeleton().is_connected()
    }
}
