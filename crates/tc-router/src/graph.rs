//! Weighted directed graph and builder.
//!
//! # Data layout
//!
//! Edges are stored in an edge list indexed by `EdgeId`, in the order they
//! were added.  Outgoing edges are reached through a **Compressed Sparse Row**
//! incidence index: given a `VertexId v`, the ids of its outgoing edges are
//!
//! ```text
//! out_edge_ids[ vertex_out_start[v] .. vertex_out_start[v+1] ]
//! ```
//!
//! Unlike a sorted-edge CSR, edge ids are never renumbered, so metadata keyed
//! by `EdgeId` stays valid and the incidence lists can be persisted and
//! restored verbatim.

use tc_core::{EdgeId, VertexId};

use crate::{RouterError, RouterResult};

/// One directed, weighted edge.  Weights are minutes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub from:   VertexId,
    pub to:     VertexId,
    pub weight: f64,
}

// ── TransitGraph ──────────────────────────────────────────────────────────────

/// Immutable directed graph.  Construct with [`TransitGraphBuilder`] or
/// restore with [`TransitGraph::from_incidence`].
#[derive(Clone, Debug, PartialEq)]
pub struct TransitGraph {
    /// Edge list.  Indexed by `EdgeId`.
    pub edges: Vec<Edge>,

    /// CSR row pointer into `out_edge_ids`.  Length = `vertex_count + 1`.
    pub vertex_out_start: Vec<u32>,

    /// Outgoing edge ids grouped by source vertex.
    pub out_edge_ids: Vec<EdgeId>,
}

impl TransitGraph {
    pub fn vertex_count(&self) -> usize {
        self.vertex_out_start.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> RouterResult<&Edge> {
        self.edges.get(id.index()).ok_or(RouterError::EdgeNotFound(id))
    }

    /// Ids of all outgoing edges of `v`, as a contiguous slice.
    #[inline]
    pub fn out_edges(&self, v: VertexId) -> &[EdgeId] {
        let start = self.vertex_out_start[v.index()] as usize;
        let end   = self.vertex_out_start[v.index() + 1] as usize;
        &self.out_edge_ids[start..end]
    }

    #[inline]
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.out_edges(v).len()
    }

    /// Per-vertex incidence lists in vertex order.
    pub fn incidence_lists(&self) -> impl ExactSizeIterator<Item = &[EdgeId]> + '_ {
        (0..self.vertex_count()).map(|v| self.out_edges(VertexId(v as u32)))
    }

    /// Rebuild a graph from an edge list plus one incidence list per vertex.
    ///
    /// Every edge must appear in exactly one list, namely the list of its
    /// source vertex, and every vertex id must be in range.
    pub fn from_incidence(edges: Vec<Edge>, incidence: Vec<Vec<EdgeId>>) -> RouterResult<Self> {
        let vertex_count = incidence.len();
        for (i, e) in edges.iter().enumerate() {
            for v in [e.from, e.to] {
                if v.index() >= vertex_count {
                    return Err(RouterError::Inconsistent(format!(
                        "edge {i} references {v} but the graph has {vertex_count} vertices"
                    )));
                }
            }
        }

        let mut seen = vec![false; edges.len()];
        let mut vertex_out_start = Vec::with_capacity(vertex_count + 1);
        let mut out_edge_ids = Vec::with_capacity(edges.len());
        vertex_out_start.push(0u32);

        for (v, list) in incidence.into_iter().enumerate() {
            for id in list {
                let edge = edges.get(id.index()).ok_or(RouterError::EdgeNotFound(id))?;
                if edge.from.index() != v {
                    return Err(RouterError::Inconsistent(format!(
                        "{id} listed under vertex {v} but leaves {}",
                        edge.from
                    )));
                }
                if std::mem::replace(&mut seen[id.index()], true) {
                    return Err(RouterError::Inconsistent(format!("{id} listed twice")));
                }
                out_edge_ids.push(id);
            }
            vertex_out_start.push(out_edge_ids.len() as u32);
        }

        if let Some(missing) = seen.iter().position(|s| !s) {
            return Err(RouterError::Inconsistent(format!(
                "{} missing from every incidence list",
                EdgeId(missing as u32)
            )));
        }

        Ok(TransitGraph { edges, vertex_out_start, out_edge_ids })
    }
}

// ── TransitGraphBuilder ───────────────────────────────────────────────────────

/// Append-only construction of a [`TransitGraph`].
///
/// Edge ids are issued sequentially by [`add_edge`](Self::add_edge) and are
/// preserved by [`build`](Self::build).
#[derive(Debug, Default)]
pub struct TransitGraphBuilder {
    vertex_count: usize,
    edges:        Vec<Edge>,
}

impl TransitGraphBuilder {
    pub fn new(vertex_count: usize) -> Self {
        Self { vertex_count, edges: Vec::new() }
    }

    pub fn with_capacity(vertex_count: usize, edges: usize) -> Self {
        Self { vertex_count, edges: Vec::with_capacity(edges) }
    }

    /// Add a directed edge and return its id (sequential from 0).
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> EdgeId {
        debug_assert!(from.index() < self.vertex_count && to.index() < self.vertex_count);
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge { from, to, weight });
        id
    }

    pub fn vertex_count(&self) -> usize { self.vertex_count }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce a [`TransitGraph`].
    ///
    /// Counting sort on source vertex: O(V + E), stable, so each incidence
    /// list is in ascending edge-id order.
    pub fn build(self) -> TransitGraph {
        let vertex_count = self.vertex_count;

        let mut vertex_out_start = vec![0u32; vertex_count + 1];
        for e in &self.edges {
            vertex_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=vertex_count {
            vertex_out_start[i] += vertex_out_start[i - 1];
        }

        let mut cursor: Vec<u32> = vertex_out_start[..vertex_count].to_vec();
        let mut out_edge_ids = vec![EdgeId::INVALID; self.edges.len()];
        for (i, e) in self.edges.iter().enumerate() {
            let slot = &mut cursor[e.from.index()];
            out_edge_ids[*slot as usize] = EdgeId(i as u32);
            *slot += 1;
        }
        debug_assert_eq!(vertex_out_start[vertex_count] as usize, self.edges.len());

        TransitGraph { edges: self.edges, vertex_out_start, out_edge_ids }
    }
}
