//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The query engine calls routing via the [`Router`] trait, so applications
//! can swap in custom implementations (precomputed all-pairs tables, A*)
//! without touching the engine.  The default [`DijkstraRouter`] searches the
//! graph once per query.
//!
//! # Cost units
//!
//! Edge weights and path totals are minutes (`f64`).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tc_core::{EdgeId, VertexId};

use crate::graph::TransitGraph;
use crate::{RouterError, RouterResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a routing query: an ordered list of `EdgeId`s and the total
/// weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Edges to traverse in order, from source to destination.
    pub edges: Vec<EdgeId>,
    /// Sum of the edge weights, in minutes.
    pub total_weight: f64,
}

impl Path {
    /// `true` if the source and destination are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable minimum-weight path search.
pub trait Router: Send + Sync {
    /// Compute the minimum-weight path from `from` to `to`.
    ///
    /// Returns [`RouterError::NoRoute`] if `to` is unreachable.  `from == to`
    /// is an empty path, not an error.
    fn route(&self, graph: &TransitGraph, from: VertexId, to: VertexId) -> RouterResult<Path>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR incidence index.
///
/// Weights must be non-negative; the graph builder only produces wait times
/// and ride times, both of which are.
#[derive(Debug, Default, Clone, Copy)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &TransitGraph, from: VertexId, to: VertexId) -> RouterResult<Path> {
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the cheapest
/// vertex first.  Ties break on vertex id for deterministic output.
#[derive(Copy, Clone, PartialEq)]
struct Frontier {
    cost:   f64,
    vertex: VertexId,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra(graph: &TransitGraph, from: VertexId, to: VertexId) -> RouterResult<Path> {
    let n = graph.vertex_count();
    for v in [from, to] {
        if v.index() >= n {
            return Err(RouterError::VertexNotFound(v));
        }
    }

    if from == to {
        return Ok(Path { edges: vec![], total_weight: 0.0 });
    }

    // dist[v] = best known cost to reach v.
    let mut dist      = vec![f64::INFINITY; n];
    // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached vertices.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(Frontier { cost: 0.0, vertex: from });

    while let Some(Frontier { cost, vertex }) = heap.pop() {
        if vertex == to {
            return Ok(reconstruct(graph, &prev_edge, from, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[vertex.index()] {
            continue;
        }

        for &edge in graph.out_edges(vertex) {
            let e = &graph.edges[edge.index()];
            let new_cost = cost + e.weight;

            if new_cost < dist[e.to.index()] {
                dist[e.to.index()] = new_cost;
                prev_edge[e.to.index()] = edge;
                heap.push(Frontier { cost: new_cost, vertex: e.to });
            }
        }
    }

    Err(RouterError::NoRoute { from, to })
}

fn reconstruct(
    graph: &TransitGraph,
    prev_edge: &[EdgeId],
    from: VertexId,
    to: VertexId,
    total_weight: f64,
) -> Path {
    let mut edges = Vec::new();
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        edges.push(e);
        cur = graph.edges[e.index()].from;
    }
    edges.reverse();
    Path { edges, total_weight }
}
