//! Domain-level queries over a [`TransitIndex`].
//!
//! Not-found is an ordinary result: statistics return `None` for unknown
//! names and [`QueryEngine::build_route`] returns `Ok(None)` when no path
//! exists.  `Err` is reserved for malformed vertex or edge ids, which can
//! only come from a caller bug or a corrupt index.

use log::debug;

use tc_catalogue::{RouteStats, StopStats};
use tc_core::{EdgeId, StopId};
use tc_render::MapRenderer;
use tc_router::{DijkstraRouter, EdgeInfo, Router, RouterError};

use crate::{IndexResult, TransitIndex};

/// One traversed edge of an itinerary.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Leg {
    pub edge:   EdgeId,
    pub info:   EdgeInfo,
    /// Minutes.
    pub weight: f64,
}

/// Minimum-time path between two stops.
#[derive(Clone, Debug, PartialEq)]
pub struct Itinerary {
    /// Alternating Wait and Ride legs, starting with a Wait.  Empty when
    /// origin and destination coincide.
    pub legs:       Vec<Leg>,
    /// Minutes.
    pub total_time: f64,
}

/// An edge resolved to display names.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LegDetail<'a> {
    Wait { stop_name: &'a str, time: f64 },
    Ride { route_name: &'a str, span_count: u32, time: f64 },
}

pub struct QueryEngine<'a, R: Router = DijkstraRouter> {
    index:  &'a TransitIndex,
    router: R,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a TransitIndex) -> Self {
        Self { index, router: DijkstraRouter }
    }
}

impl<'a, R: Router> QueryEngine<'a, R> {
    /// Use a custom [`Router`] implementation.
    pub fn with_router(index: &'a TransitIndex, router: R) -> Self {
        Self { index, router }
    }

    pub fn route_info(&self, name: &str) -> Option<RouteStats> {
        self.index.catalogue().route_statistics(name)
    }

    pub fn stop_info(&self, name: &str) -> Option<StopStats<'a>> {
        self.index.catalogue().stop_statistics(name)
    }

    /// Minimum-time itinerary from the wait-entry of `from` to the
    /// wait-entry of `to`.
    ///
    /// Both ids must come from this index's catalogue; names are resolved by
    /// the caller.
    pub fn build_route(&self, from: StopId, to: StopId) -> IndexResult<Option<Itinerary>> {
        let routing = self.index.routing();
        let (src, dst) = (routing.wait_vertex(from), routing.wait_vertex(to));

        let path = match self.router.route(routing.graph(), src, dst) {
            Ok(path) => path,
            Err(RouterError::NoRoute { .. }) => {
                debug!("no route from {from} to {to}");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let legs = path
            .edges
            .iter()
            .map(|&edge| {
                let (e, info) = routing.edge_detail(edge)?;
                Ok(Leg { edge, info: *info, weight: e.weight })
            })
            .collect::<IndexResult<Vec<_>>>()?;

        Ok(Some(Itinerary { legs, total_time: path.total_weight }))
    }

    /// Weight and Wait/Ride metadata of one edge, with names resolved.
    pub fn edge_detail(&self, edge: EdgeId) -> IndexResult<LegDetail<'a>> {
        let catalogue = self.index.catalogue();
        let (e, info) = self.index.routing().edge_detail(edge)?;
        Ok(match *info {
            EdgeInfo::Wait { stop } => LegDetail::Wait {
                stop_name: &catalogue.stop(stop).name,
                time:      e.weight,
            },
            EdgeInfo::Ride { route, span_count } => LegDetail::Ride {
                route_name: &catalogue.route(route).name,
                span_count,
                time:       e.weight,
            },
        })
    }

    /// The network map as an SVG document.
    pub fn render_map(&self) -> String {
        MapRenderer::new(self.index.catalogue(), self.index.render_settings()).render_svg()
    }
}
