//! Turns a frozen [`Catalogue`] into a routing graph.
//!
//! # Construction
//!
//! 1. Two vertices per stop: wait-entry `2i`, wait-exit `2i + 1`.
//! 2. One Wait edge per stop (entry → exit), weight = boarding wait.
//! 3. Per route, the stored stop sequence is cut into segments:
//!    - `Loop`: the whole sequence is one segment.
//!    - `OutAndBack`: `[0 ..= mid]` and `[mid ..]` with `mid = len / 2`.
//!      The stored sequence is already the mirrored round trip, so each half
//!      is one direction of travel sharing the turnaround stop.
//! 4. For every segment `s0 .. s(k-1)` and every `i < j`, one Ride edge
//!    `exit(s_i) → entry(s_j)` whose weight is the accumulated road distance
//!    over `s_i .. s_j` at route speed, with `span_count = j - i`.
//!
//! Step 4 emits the transitive closure of rides inside a segment, so a path
//! never contains two consecutive Ride edges: changing vehicles always costs
//! one Wait.

use log::info;

use tc_catalogue::{Catalogue, RouteKind};
use tc_core::{EdgeId, RouteId, RoutingSettings, StopId, VertexId};

use crate::graph::{Edge, TransitGraph, TransitGraphBuilder};
use crate::{RouterError, RouterResult};

/// What an edge models.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EdgeInfo {
    /// Boarding wait at `stop`.
    Wait { stop: StopId },
    /// Riding `route` across `span_count` consecutive stop-to-stop hops.
    Ride { route: RouteId, span_count: u32 },
}

// ── RoutingGraph ──────────────────────────────────────────────────────────────

/// The built graph plus everything the query engine needs to interpret it.
///
/// Immutable once built or restored.
#[derive(Clone, Debug)]
pub struct RoutingGraph {
    settings:      RoutingSettings,
    graph:         TransitGraph,
    /// Wait-entry vertex of each stop.  Indexed by `StopId`.
    stop_vertices: Vec<VertexId>,
    /// Metadata of each edge.  Indexed by `EdgeId`.
    edge_info:     Vec<EdgeInfo>,
}

impl RoutingGraph {
    /// Assemble a routing graph from restored parts.
    ///
    /// Accepts exactly the shapes [`GraphBuilder`] produces:
    /// - every edge weight is finite and non-negative;
    /// - `stop_vertices` is injective and in range;
    /// - each stop has exactly one Wait edge, tagged with that stop, leaving
    ///   its wait-entry vertex and weighing `settings.wait_minutes()`;
    /// - every Ride edge runs from a wait-exit vertex to a wait-entry vertex.
    pub fn from_parts(
        settings: RoutingSettings,
        graph: TransitGraph,
        stop_vertices: Vec<VertexId>,
        edge_info: Vec<EdgeInfo>,
    ) -> RouterResult<Self> {
        if edge_info.len() != graph.edge_count() {
            return Err(RouterError::Inconsistent(format!(
                "{} edges but metadata for {}",
                graph.edge_count(),
                edge_info.len()
            )));
        }
        if let Some(&v) = stop_vertices
            .iter()
            .find(|v| v.index() >= graph.vertex_count())
        {
            return Err(RouterError::VertexNotFound(v));
        }
        check_shape(settings, &graph, &stop_vertices, &edge_info)?;
        Ok(Self { settings, graph, stop_vertices, edge_info })
    }

    pub fn settings(&self) -> RoutingSettings {
        self.settings
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    /// Wait-entry vertex of `stop`.
    ///
    /// # Panics
    /// Panics if `stop` is not a stop of the catalogue this graph was built
    /// from.  Callers resolve names against the catalogue first.
    #[inline]
    pub fn wait_vertex(&self, stop: StopId) -> VertexId {
        self.stop_vertices[stop.index()]
    }

    pub fn stop_vertices(&self) -> &[VertexId] {
        &self.stop_vertices
    }

    pub fn edge_infos(&self) -> &[EdgeInfo] {
        &self.edge_info
    }

    /// Raw edge and its metadata.  An unknown id is a caller bug.
    pub fn edge_detail(&self, id: EdgeId) -> RouterResult<(&Edge, &EdgeInfo)> {
        let edge = self.graph.edge(id)?;
        let info = self
            .edge_info
            .get(id.index())
            .ok_or(RouterError::EdgeNotFound(id))?;
        Ok((edge, info))
    }
}

// ── Shape checks ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq)]
enum Role {
    Free,
    Entry(StopId),
    Exit(StopId),
}

fn inconsistent(msg: String) -> RouterError {
    RouterError::Inconsistent(msg)
}

fn check_shape(
    settings: RoutingSettings,
    graph: &TransitGraph,
    stop_vertices: &[VertexId],
    edge_info: &[EdgeInfo],
) -> RouterResult<()> {
    for (i, e) in graph.edges.iter().enumerate() {
        if let Some(v) = [e.from, e.to].into_iter().find(|v| v.index() >= graph.vertex_count()) {
            return Err(RouterError::VertexNotFound(v));
        }
        if !e.weight.is_finite() || e.weight < 0.0 {
            return Err(inconsistent(format!("edge {i} has weight {}", e.weight)));
        }
    }

    let mut roles = vec![Role::Free; graph.vertex_count()];
    for (i, &v) in stop_vertices.iter().enumerate() {
        let stop = StopId(i as u32);
        if roles[v.index()] != Role::Free {
            return Err(inconsistent(format!("{v} is the wait-entry of two stops")));
        }
        roles[v.index()] = Role::Entry(stop);
    }

    // Wait edges claim the exit vertex of their stop.
    let wait = settings.wait_minutes();
    let mut has_wait = vec![false; stop_vertices.len()];
    for (i, (e, info)) in graph.edges.iter().zip(edge_info).enumerate() {
        let EdgeInfo::Wait { stop } = *info else { continue };
        let Some(&entry) = stop_vertices.get(stop.index()) else {
            return Err(inconsistent(format!("wait edge {i} names unknown {stop}")));
        };
        if e.from != entry {
            return Err(inconsistent(format!(
                "wait edge {i} of {stop} leaves {} instead of {entry}",
                e.from
            )));
        }
        if e.weight != wait {
            return Err(inconsistent(format!(
                "wait edge {i} weighs {} but the boarding wait is {wait}",
                e.weight
            )));
        }
        if std::mem::replace(&mut has_wait[stop.index()], true) {
            return Err(inconsistent(format!("{stop} has more than one wait edge")));
        }
        if roles[e.to.index()] != Role::Free {
            return Err(inconsistent(format!("wait edge {i} ends at {} which is taken", e.to)));
        }
        roles[e.to.index()] = Role::Exit(stop);
    }
    if let Some(i) = has_wait.iter().position(|w| !w) {
        return Err(inconsistent(format!("{} has no wait edge", StopId(i as u32))));
    }

    for (i, (e, info)) in graph.edges.iter().zip(edge_info).enumerate() {
        if !matches!(info, EdgeInfo::Ride { .. }) {
            continue;
        }
        let from_exit = matches!(roles[e.from.index()], Role::Exit(_));
        let to_entry = matches!(roles[e.to.index()], Role::Entry(_));
        if !(from_exit && to_entry) {
            return Err(inconsistent(format!(
                "ride edge {i} runs {} -> {}, not wait-exit -> wait-entry",
                e.from, e.to
            )));
        }
    }
    Ok(())
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Deterministic route-graph construction from a catalogue.
///
/// # Example
///
/// ```
/// use tc_catalogue::{Catalogue, RouteKind};
/// use tc_core::{GeoPoint, RoutingSettings};
/// use tc_router::GraphBuilder;
///
/// let mut c = Catalogue::new();
/// c.add_stop("A", GeoPoint::new(0.0, 0.0));
/// c.add_stop("B", GeoPoint::new(0.0, 1.0));
/// c.add_distance("A", "B", 1000).unwrap();
/// c.add_route("R", &["A", "B", "A"], RouteKind::OutAndBack, Some("B")).unwrap();
///
/// let g = GraphBuilder::new(&c, RoutingSettings::new(2, 60.0).unwrap()).build();
/// assert_eq!(g.graph().vertex_count(), 4);
/// assert_eq!(g.graph().edge_count(), 4); // 2 waits + A→B + B→A
/// ```
pub struct GraphBuilder<'a> {
    catalogue: &'a Catalogue,
    settings:  RoutingSettings,
    graph:     TransitGraphBuilder,
    edge_info: Vec<EdgeInfo>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(catalogue: &'a Catalogue, settings: RoutingSettings) -> Self {
        let edges = edge_estimate(catalogue);
        Self {
            catalogue,
            settings,
            graph: TransitGraphBuilder::with_capacity(catalogue.stop_count() * 2, edges),
            edge_info: Vec::with_capacity(edges),
        }
    }

    #[inline]
    fn entry(stop: StopId) -> VertexId {
        VertexId(stop.0 * 2)
    }

    #[inline]
    fn exit(stop: StopId) -> VertexId {
        VertexId(stop.0 * 2 + 1)
    }

    fn push(&mut self, from: VertexId, to: VertexId, weight: f64, info: EdgeInfo) {
        let id = self.graph.add_edge(from, to, weight);
        debug_assert_eq!(id.index(), self.edge_info.len());
        self.edge_info.push(info);
    }

    /// Consume the builder and produce the routing graph.
    pub fn build(mut self) -> RoutingGraph {
        let catalogue = self.catalogue;
        let wait = self.settings.wait_minutes();

        let mut stop_vertices = Vec::with_capacity(catalogue.stop_count());
        for (stop, _) in catalogue.stops() {
            stop_vertices.push(Self::entry(stop));
            self.push(Self::entry(stop), Self::exit(stop), wait, EdgeInfo::Wait { stop });
        }

        for (route_id, route) in catalogue.routes() {
            match route.kind {
                RouteKind::Loop => self.add_segment(route_id, &route.stops),
                RouteKind::OutAndBack => {
                    let mid = route.stops.len() / 2;
                    self.add_segment(route_id, &route.stops[..=mid]);
                    self.add_segment(route_id, &route.stops[mid..]);
                }
            }
        }

        let graph = self.graph.build();
        info!(
            "routing graph built: {} stops, {} routes, {} vertices, {} edges",
            catalogue.stop_count(),
            catalogue.route_count(),
            graph.vertex_count(),
            graph.edge_count()
        );

        RoutingGraph {
            settings: self.settings,
            graph,
            stop_vertices,
            edge_info: self.edge_info,
        }
    }

    /// Emit one Ride edge for every ordered pair `i < j` of the segment.
    fn add_segment(&mut self, route: RouteId, stops: &[StopId]) {
        for (i, &origin) in stops.iter().enumerate() {
            let mut metres = 0u64;
            for j in i + 1..stops.len() {
                metres += self.catalogue.distance(stops[j - 1], stops[j]) as u64;
                let weight = self.settings.ride_minutes(metres as f64);
                self.push(
                    Self::exit(origin),
                    Self::entry(stops[j]),
                    weight,
                    EdgeInfo::Ride { route, span_count: (j - i) as u32 },
                );
            }
        }
    }
}

/// Wait edges plus `k (k - 1) / 2` Ride edges per segment of `k` stops.
pub(crate) fn edge_estimate(catalogue: &Catalogue) -> usize {
    let pairs = |k: usize| k * k.saturating_sub(1) / 2;
    let rides: usize = catalogue
        .routes()
        .map(|(_, r)| match r.kind {
            RouteKind::Loop => pairs(r.stops.len()),
            RouteKind::OutAndBack => {
                let mid = r.stops.len() / 2;
                pairs(mid + 1) + pairs(r.stops.len() - mid)
            }
        })
        .sum();
    catalogue.stop_count() + rides
}
