//! The unit of persistence.

use log::info;

use tc_catalogue::Catalogue;
use tc_core::RoutingSettings;
use tc_render::RenderSettings;
use tc_router::{EdgeInfo, GraphBuilder, RoutingGraph};

use crate::{IndexError, IndexResult, QueryEngine};

/// Catalogue, routing graph with its edge metadata, and render settings.
#[derive(Clone, Debug)]
pub struct TransitIndex {
    catalogue: Catalogue,
    routing:   RoutingGraph,
    render:    RenderSettings,
}

impl TransitIndex {
    /// Freeze `catalogue` and run the graph builder over it.
    pub fn build(catalogue: Catalogue, routing: RoutingSettings, render: RenderSettings) -> Self {
        let graph = GraphBuilder::new(&catalogue, routing).build();
        info!(
            "index built: {} stops, {} routes, {} distances",
            catalogue.stop_count(),
            catalogue.route_count(),
            catalogue.distances().len()
        );
        Self { catalogue, routing: graph, render }
    }

    /// Assemble an index from restored parts without rebuilding the graph.
    ///
    /// Checks that the graph's stop table and edge metadata only refer to
    /// entities the catalogue actually holds.
    pub fn from_parts(
        catalogue: Catalogue,
        routing: RoutingGraph,
        render: RenderSettings,
    ) -> IndexResult<Self> {
        let stops = catalogue.stop_count();
        let routes = catalogue.route_count();

        if routing.stop_vertices().len() != stops {
            return Err(IndexError::Inconsistent(format!(
                "graph maps {} stops, catalogue holds {stops}",
                routing.stop_vertices().len()
            )));
        }
        for (i, info) in routing.edge_infos().iter().enumerate() {
            let dangling = match *info {
                EdgeInfo::Wait { stop } => stop.index() >= stops,
                EdgeInfo::Ride { route, .. } => route.index() >= routes,
            };
            if dangling {
                return Err(IndexError::Inconsistent(format!(
                    "edge {i} metadata {info:?} points outside the catalogue"
                )));
            }
        }

        Ok(Self { catalogue, routing, render })
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn routing(&self) -> &RoutingGraph {
        &self.routing
    }

    pub fn render_settings(&self) -> &RenderSettings {
        &self.render
    }

    /// Query engine over this index using Dijkstra.
    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(self)
    }
}
