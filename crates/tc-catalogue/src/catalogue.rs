//! The entity catalogue.
//!
//! # Storage
//!
//! Stops and routes are kept in insertion-ordered arenas and addressed by
//! [`StopId`] / [`RouteId`].  Name lookup goes through hash maps from name to
//! id.  The stop→routes membership index is a `Vec` parallel to the stop
//! arena and is updated inside [`Catalogue::add_route`], so no caller can
//! observe a route that is missing from it.
//!
//! # Duplicate names
//!
//! Re-adding a name replaces the entity *in place*: the id is kept, the
//! attributes are overwritten, and (for routes) the membership index is
//! rewritten.  Last write wins.

use std::collections::BTreeSet;

use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};

use tc_core::{GeoPoint, RouteId, StopId};

use crate::{
    CatalogueError, CatalogueResult, DistanceTable, Route, RouteKind, RouteStats, Stop, StopStats,
};

#[derive(Clone, Debug, Default)]
pub struct Catalogue {
    stops:         Vec<Stop>,
    stop_by_name:  FxHashMap<String, StopId>,
    routes:        Vec<Route>,
    route_by_name: FxHashMap<String, RouteId>,
    /// Routes serving each stop.  Indexed by `StopId`.
    stop_routes:   Vec<BTreeSet<RouteId>>,
    distances:     DistanceTable,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Insert a stop, or overwrite the coordinates of an existing stop with
    /// the same name.  Returns the stop's id either way.
    pub fn add_stop(&mut self, name: impl Into<String>, pos: GeoPoint) -> StopId {
        let name = name.into();
        if let Some(&id) = self.stop_by_name.get(&name) {
            debug!("stop {name:?} redefined, keeping {id}");
            self.stops[id.index()].pos = pos;
            return id;
        }

        let id = StopId(self.stops.len() as u32);
        self.stop_by_name.insert(name.clone(), id);
        self.stops.push(Stop { name, pos });
        self.stop_routes.push(BTreeSet::new());
        id
    }

    /// Insert a route.  Every stop name must already be in the catalogue.
    ///
    /// `stop_names` is stored as given; out-and-back callers pass the
    /// mirrored sequence (see [`mirror_out_and_back`]).
    ///
    /// [`mirror_out_and_back`]: crate::mirror_out_and_back
    pub fn add_route<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stop_names: &[S],
        kind: RouteKind,
        second_terminal: Option<&str>,
    ) -> CatalogueResult<RouteId> {
        let name = name.into();
        if stop_names.is_empty() {
            return Err(CatalogueError::EmptyRoute(name));
        }

        let context = || format!("route {name:?}");
        let stops = stop_names
            .iter()
            .map(|s| self.resolve(s.as_ref(), context))
            .collect::<CatalogueResult<Vec<_>>>()?;
        let second_terminal = second_terminal
            .map(|s| self.resolve(s, context))
            .transpose()?;

        if stops.iter().all(|&s| s == stops[0]) {
            warn!("route {name:?} never leaves its first stop");
        }

        let route = Route { name: name.clone(), stops, kind, second_terminal };

        let id = match self.route_by_name.get(&name) {
            Some(&id) => {
                debug!("route {name:?} redefined, keeping {id}");
                for stop in &self.routes[id.index()].stops {
                    self.stop_routes[stop.index()].remove(&id);
                }
                self.routes[id.index()] = route;
                id
            }
            None => {
                let id = RouteId(self.routes.len() as u32);
                self.route_by_name.insert(name, id);
                self.routes.push(route);
                id
            }
        };

        for stop in &self.routes[id.index()].stops {
            self.stop_routes[stop.index()].insert(id);
        }
        Ok(id)
    }

    /// Store a directional road distance in metres, replacing any earlier
    /// entry for the same ordered pair.
    pub fn add_distance(&mut self, from: &str, to: &str, metres: u32) -> CatalogueResult<()> {
        let context = || format!("distance {from:?} -> {to:?}");
        let a = self.resolve(from, context)?;
        let b = self.resolve(to, context)?;
        self.distances.set(a, b, metres);
        Ok(())
    }

    fn resolve(&self, name: &str, context: impl Fn() -> String) -> CatalogueResult<StopId> {
        self.stop_id(name).ok_or_else(|| CatalogueError::UnknownStop {
            name:    name.to_owned(),
            context: context(),
        })
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_by_name.get(name).copied()
    }

    pub fn route_id(&self, name: &str) -> Option<RouteId> {
        self.route_by_name.get(name).copied()
    }

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| self.stop(id))
    }

    pub fn find_route(&self, name: &str) -> Option<&Route> {
        self.route_id(name).map(|id| self.route(id))
    }

    /// # Panics
    /// Panics if `id` was not issued by this catalogue.
    #[inline]
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    /// # Panics
    /// Panics if `id` was not issued by this catalogue.
    #[inline]
    pub fn route(&self, id: RouteId) -> &Route {
        &self.routes[id.index()]
    }

    /// Road distance in metres with the reverse-pair and zero fallbacks.
    #[inline]
    pub fn distance(&self, from: StopId, to: StopId) -> u32 {
        self.distances.get(from, to)
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    // ── Iteration (arena order) ───────────────────────────────────────────

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn stops(&self) -> impl ExactSizeIterator<Item = (StopId, &Stop)> + '_ {
        self.stops.iter().enumerate().map(|(i, s)| (StopId(i as u32), s))
    }

    pub fn routes(&self) -> impl ExactSizeIterator<Item = (RouteId, &Route)> + '_ {
        self.routes.iter().enumerate().map(|(i, r)| (RouteId(i as u32), r))
    }

    /// Ids of the routes serving `stop`, in id order.
    pub fn routes_through(&self, stop: StopId) -> impl Iterator<Item = RouteId> + '_ {
        self.stop_routes[stop.index()].iter().copied()
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Stop counts, road distance, and great-circle length of a route.
    /// `None` if no route has this name.
    pub fn route_statistics(&self, name: &str) -> Option<RouteStats> {
        let route = self.find_route(name)?;

        let unique: FxHashSet<StopId> = route.stops.iter().copied().collect();
        let mut way = 0u64;
        let mut route_length = 0.0;
        for pair in route.stops.windows(2) {
            way += self.distance(pair[0], pair[1]) as u64;
            route_length += self.stop(pair[0]).pos.distance_m(self.stop(pair[1]).pos);
        }

        Some(RouteStats {
            stop_count: route.stops.len(),
            unique_stop_count: unique.len(),
            way,
            route_length,
        })
    }

    /// Names of the routes serving a stop.  `None` if no stop has this name;
    /// an existing stop with no routes yields an empty set.
    pub fn stop_statistics(&self, name: &str) -> Option<StopStats<'_>> {
        let id = self.stop_id(name)?;
        Some(StopStats {
            routes: self
                .routes_through(id)
                .map(|r| self.route(r).name.as_str())
                .collect(),
        })
    }
}
