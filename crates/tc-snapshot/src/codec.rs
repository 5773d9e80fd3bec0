//! Conversion between a live [`TransitIndex`] and snapshot bytes.
//!
//! # Decoding
//!
//! 1. Validate the header and decode the bitcode payload.
//! 2. Replay stops, then distances, then routes into a fresh [`Catalogue`].
//!    Any dangling stop name aborts the load with the catalogue's own error.
//! 3. Restore the graph verbatim from its edge and incidence lists, resolve
//!    the stop→vertex table and edge metadata by name, and let
//!    [`RoutingGraph::from_parts`] and [`TransitIndex::from_parts`] check
//!    that the graph has exactly the shape a build produces.
//!
//! The graph builder is never run on this path.

use log::info;

use tc_catalogue::{Catalogue, RouteKind};
use tc_core::{EdgeId, GeoPoint, RoutingSettings, StopId, VertexId};
use tc_index::TransitIndex;
use tc_render::RenderSettings;
use tc_router::{Edge, EdgeInfo, RoutingGraph, TransitGraph};

use crate::dto::{
    DistanceDto, EdgeDto, EdgeInfoDto, GraphDto, IndexDto, RenderDto, RouteDto, RoutingDto,
    StopDto, StopVertexDto,
};
use crate::{header, SnapshotError, SnapshotResult};

// ── Encode ────────────────────────────────────────────────────────────────────

/// Serialize the whole index.  Equal indexes produce identical bytes.
pub fn encode(index: &TransitIndex) -> Vec<u8> {
    let payload = bitcode::encode(&to_dto(index));
    let bytes = header::wrap(&payload);
    info!("snapshot encoded: {} bytes payload, {} bytes total", payload.len(), bytes.len());
    bytes
}

fn to_dto(index: &TransitIndex) -> IndexDto {
    let catalogue = index.catalogue();
    let routing = index.routing();
    let stop_name = |id: StopId| catalogue.stop(id).name.clone();

    let stops = catalogue
        .stops()
        .map(|(_, s)| StopDto { name: s.name.clone(), lat: s.pos.lat, lon: s.pos.lon })
        .collect();

    let routes = catalogue
        .routes()
        .map(|(_, r)| RouteDto {
            name:            r.name.clone(),
            stops:           r.stops.iter().map(|&s| stop_name(s)).collect(),
            is_roundtrip:    r.kind.is_loop(),
            second_terminal: r.second_terminal.map(stop_name),
        })
        .collect();

    let mut pairs: Vec<_> = catalogue.distances().iter().collect();
    pairs.sort_unstable();
    let distances = pairs
        .into_iter()
        .map(|(from, to, metres)| DistanceDto { from: stop_name(from), to: stop_name(to), metres })
        .collect();

    let settings = routing.settings();
    let graph = routing.graph();

    IndexDto {
        stops,
        routes,
        distances,
        render: RenderDto::from(index.render_settings()),
        routing: RoutingDto {
            bus_wait_time: settings.bus_wait_time,
            bus_velocity:  settings.bus_velocity,
        },
        graph: GraphDto {
            edges:     graph
                .edges
                .iter()
                .map(|e| EdgeDto { from: e.from.0, to: e.to.0, weight: e.weight })
                .collect(),
            incidence: graph
                .incidence_lists()
                .map(|list| list.iter().map(|e| e.0).collect())
                .collect(),
        },
        stop_vertices: catalogue
            .stops()
            .map(|(id, s)| StopVertexDto {
                stop:   s.name.clone(),
                vertex: routing.wait_vertex(id).0,
            })
            .collect(),
        edge_info: routing
            .edge_infos()
            .iter()
            .map(|info| match *info {
                EdgeInfo::Wait { stop } => EdgeInfoDto::Wait { stop: stop_name(stop) },
                EdgeInfo::Ride { route, span_count } => EdgeInfoDto::Ride {
                    route: catalogue.route(route).name.clone(),
                    span_count,
                },
            })
            .collect(),
    }
}

// ── Decode ────────────────────────────────────────────────────────────────────

/// Reconstruct an index from snapshot bytes.  All-or-nothing.
pub fn decode(bytes: &[u8]) -> SnapshotResult<TransitIndex> {
    let payload = header::unwrap(bytes)?;
    let dto: IndexDto = bitcode::decode(payload)?;
    let index = from_dto(dto)?;
    info!(
        "snapshot decoded: {} stops, {} routes, {} edges",
        index.catalogue().stop_count(),
        index.catalogue().route_count(),
        index.routing().graph().edge_count()
    );
    Ok(index)
}

fn from_dto(dto: IndexDto) -> SnapshotResult<TransitIndex> {
    let catalogue = replay_catalogue(&dto.stops, &dto.distances, &dto.routes)?;
    if catalogue.stop_count() != dto.stops.len() || catalogue.route_count() != dto.routes.len() {
        return Err(SnapshotError::Inconsistent(format!(
            "duplicate names: {} stop and {} route records for {} stops and {} routes",
            dto.stops.len(),
            dto.routes.len(),
            catalogue.stop_count(),
            catalogue.route_count()
        )));
    }

    let settings = RoutingSettings::new(dto.routing.bus_wait_time, dto.routing.bus_velocity)?;
    let render = RenderSettings::from(dto.render);
    render.validate()?;

    let edges = dto
        .graph
        .edges
        .into_iter()
        .map(|e| Edge { from: VertexId(e.from), to: VertexId(e.to), weight: e.weight })
        .collect();
    let incidence = dto
        .graph
        .incidence
        .into_iter()
        .map(|list| list.into_iter().map(EdgeId).collect())
        .collect();
    let graph = TransitGraph::from_incidence(edges, incidence)?;

    let mut stop_vertices = vec![VertexId::INVALID; catalogue.stop_count()];
    for StopVertexDto { stop, vertex } in dto.stop_vertices {
        let id = catalogue.stop_id(&stop).ok_or_else(|| {
            SnapshotError::Inconsistent(format!("vertex table names unknown stop {stop:?}"))
        })?;
        let slot = &mut stop_vertices[id.index()];
        if *slot != VertexId::INVALID {
            return Err(SnapshotError::Inconsistent(format!(
                "vertex table lists stop {stop:?} twice"
            )));
        }
        *slot = VertexId(vertex);
    }
    if let Some(i) = stop_vertices.iter().position(|v| *v == VertexId::INVALID) {
        return Err(SnapshotError::Inconsistent(format!(
            "stop {:?} has no vertex",
            catalogue.stop(StopId(i as u32)).name
        )));
    }

    let edge_info = dto
        .edge_info
        .into_iter()
        .map(|info| resolve_edge_info(&catalogue, info))
        .collect::<SnapshotResult<Vec<_>>>()?;

    let routing = RoutingGraph::from_parts(settings, graph, stop_vertices, edge_info)?;
    Ok(TransitIndex::from_parts(catalogue, routing, render)?)
}

/// Same insertion order as a live build: stops, distances, routes.
fn replay_catalogue(
    stops: &[StopDto],
    distances: &[DistanceDto],
    routes: &[RouteDto],
) -> SnapshotResult<Catalogue> {
    let mut catalogue = Catalogue::new();
    for s in stops {
        catalogue.add_stop(s.name.clone(), GeoPoint::new(s.lat, s.lon));
    }
    for d in distances {
        catalogue.add_distance(&d.from, &d.to, d.metres)?;
    }
    for r in routes {
        catalogue.add_route(
            r.name.clone(),
            &r.stops,
            RouteKind::from_roundtrip(r.is_roundtrip),
            r.second_terminal.as_deref(),
        )?;
    }
    Ok(catalogue)
}

fn resolve_edge_info(catalogue: &Catalogue, info: EdgeInfoDto) -> SnapshotResult<EdgeInfo> {
    match info {
        EdgeInfoDto::Wait { stop } => catalogue
            .stop_id(&stop)
            .map(|stop| EdgeInfo::Wait { stop })
            .ok_or_else(|| {
                SnapshotError::Inconsistent(format!("wait edge at unknown stop {stop:?}"))
            }),
        EdgeInfoDto::Ride { route, span_count } => catalogue
            .route_id(&route)
            .map(|route| EdgeInfo::Ride { route, span_count })
            .ok_or_else(|| {
                SnapshotError::Inconsistent(format!("ride edge on unknown route {route:?}"))
            }),
    }
}
