//! Spanning-tree reduction and relator extraction.

use crate::complex::{Edge, Simplex, SimplicialComplex, Skeleton, Vertex};
use crate::group::{FreeGroup, FreeGroupEngine, Presentation};

use super::types::{BuildCfg, EdgeReduction, GeneratorSet, Pi1Error};

/// Presentation of the fundamental group of `complex` with the in-house engine.
///
/// `base_point` is only consulted when the complex is disconnected; then the
/// group of the component containing it is returned.
pub fn fundamental_group<C: SimplicialComplex>(
    complex: &C,
    base_point: Option<Vertex>,
    cfg: BuildCfg,
) -> Result<Presentation, Pi1Error> {
    fundamental_group_with::<FreeGroup, C>(complex, base_point, cfg)
}

/// Same as [`fundamental_group`] over an arbitrary engine `E`.
pub fn fundamental_group_with<E, C>(
    complex: &C,
    base_point: Option<Vertex>,
    cfg: BuildCfg,
) -> Result<E::Presentation, Pi1Error>
where
    E: FreeGroupEngine,
    C: SimplicialComplex,
{
    if complex.is_empty() {
        return Err(Pi1Error::EmptyComplex);
    }
    if !complex.is_connected() {
        let v = base_point.ok_or(Pi1Error::MissingBasePoint)?;
        let component = complex
            .connected_component(v)
            .ok_or(Pi1Error::UnknownBasePoint(v))?;
        tracing::debug!(base_point = v, "restricting to base point component");
        return fundamental_group_with::<E, C>(&component, Some(v), cfg);
    }

    let skeleton = complex.skeleton();
    let reduction = reduce_skeleton(&skeleton);
    let rank = reduction.generators.len();
    tracing::debug!(
        vertices = skeleton.vertex_count(),
        edges = skeleton.edge_count(),
        tree_edges = reduction.tree.len(),
        generators = rank,
        "spanning tree reduction"
    );
    if rank == 0 {
        return Ok(E::trivial());
    }

    let group = E::free_group(rank);
    let triangles = complex.triangles();
    let relators = extract_relators(&group, &reduction, &triangles);
    tracing::debug!(relators = relators.len(), "relators extracted");
    let quotient = group.quotient(relators);
    if cfg.simplify {
        Ok(group.simplify(quotient))
    } else {
        Ok(quotient)
    }
}

/// Spanning tree plus the non-tree edges as generators, in edge order.
pub fn reduce_skeleton(skeleton: &Skeleton) -> EdgeReduction {
    let tree = skeleton.spanning_tree();
    let mut generators = GeneratorSet::default();
    for &e in skeleton.edges() {
        if !tree.contains(e) {
            generators.push(e);
        }
    }
    EdgeReduction { tree, generators }
}

/// One relator `z0 * z1⁻¹ * z2` per triangle, `z_i` the image of boundary edge `i`.
///
/// Cells that are not triangles are skipped.
pub fn extract_relators<E: FreeGroupEngine>(
    group: &E,
    reduction: &EdgeReduction,
    triangles: &[Simplex],
) -> Vec<E::Element> {
    triangles
        .iter()
        .filter_map(Simplex::boundary_edges)
        .map(|[e0, e1, e2]| {
            let z0 = edge_element(group, reduction, e0);
            let z1 = edge_element(group, reduction, e1);
            let z2 = edge_element(group, reduction, e2);
            group.mul(&group.mul(&z0, &group.inverse(&z1)), &z2)
        })
        .collect()
}

/// Identity for tree edges, the edge's generator otherwise.
fn edge_element<E: FreeGroupEngine>(group: &E, reduction: &EdgeReduction, e: Edge) -> E::Element {
    if reduction.tree.contains(e) {
        return group.one();
    }
    match reduction.generators.index_of(e) {
        Some(i) => group.generator(i),
        // Boundary edge missing from the skeleton: the complex is not closed
        // under faces. Treat it as contractible.
        None => group.one(),
    }
}
