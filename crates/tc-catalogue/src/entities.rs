//! Stops and routes.

use tc_core::{GeoPoint, StopId};

/// A named geographic point of service.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub name: String,
    pub pos:  GeoPoint,
}

/// How the stored stop sequence of a route is travelled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// Closed loop; the stored sequence already ends where it starts.
    Loop,
    /// There-and-back; the stored sequence is the full mirrored round trip.
    OutAndBack,
}

impl RouteKind {
    /// Map the `is_roundtrip` flag of the input document.
    pub fn from_roundtrip(is_roundtrip: bool) -> Self {
        if is_roundtrip { RouteKind::Loop } else { RouteKind::OutAndBack }
    }

    pub fn is_loop(self) -> bool {
        self == RouteKind::Loop
    }
}

/// A named ordered sequence of stops.
///
/// `stops` is never empty.  For [`RouteKind::OutAndBack`] it holds
/// `2n - 1` entries for `n` outbound stops and is a palindrome around its
/// midpoint; `second_terminal` is the outbound end stop.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub name:            String,
    pub stops:           Vec<StopId>,
    pub kind:            RouteKind,
    pub second_terminal: Option<StopId>,
}

impl Route {
    pub fn first_stop(&self) -> StopId {
        self.stops[0]
    }
}

/// Expand an outbound stop list into the stored round-trip sequence.
///
/// `[S0, S1, .., Sn]` becomes `[S0, S1, .., Sn, .., S1, S0]`: the inbound
/// half is the reversed outbound list with the shared turnaround removed.
/// Returns the sequence and the second terminal (`Sn`), or `None` for an
/// empty input.
pub fn mirror_out_and_back<S: Clone>(outbound: &[S]) -> Option<(Vec<S>, S)> {
    let last = outbound.last()?.clone();
    let mut full = Vec::with_capacity(outbound.len() * 2 - 1);
    full.extend_from_slice(outbound);
    full.extend(outbound.iter().rev().skip(1).cloned());
    Some((full, last))
}
