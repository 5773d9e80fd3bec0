//! Derived per-route and per-stop statistics.  Never stored; recomputed on
//! every query from the catalogue.

use std::collections::BTreeSet;

/// Statistics of one route, accumulated over consecutive stop pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteStats {
    /// Length of the stored stop sequence.
    pub stop_count:        usize,
    /// Number of distinct stops in the sequence.
    pub unique_stop_count: usize,
    /// Cumulative road distance in metres.
    pub way:               u64,
    /// Cumulative great-circle distance in metres.
    pub route_length:      f64,
}

impl RouteStats {
    /// Road distance over straight-line distance.  `None` when the route
    /// never leaves its starting point.
    pub fn curvature(&self) -> Option<f64> {
        if self.route_length > 0.0 {
            Some(self.way as f64 / self.route_length)
        } else {
            None
        }
    }
}

/// Routes serving one stop.  Iterates in lexicographic name order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopStats<'a> {
    pub routes: BTreeSet<&'a str>,
}
