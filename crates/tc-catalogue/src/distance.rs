//! Directional stop-to-stop road distances.
//!
//! Entries are keyed by an ordered `(from, to)` pair and are *not* assumed
//! symmetric.  Lookup checks the exact pair first, then the reversed pair,
//! and falls back to `0`, so the graph builder can always ask for a distance
//! between consecutive route stops without checking for holes.

use rustc_hash::FxHashMap;

use tc_core::StopId;

#[derive(Clone, Debug, Default)]
pub struct DistanceTable {
    entries: FxHashMap<(StopId, StopId), u32>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `metres` for the ordered pair, replacing any earlier entry.
    pub fn set(&mut self, from: StopId, to: StopId, metres: u32) {
        self.entries.insert((from, to), metres);
    }

    /// Exact ordered-pair entry, without the reverse fallback.
    pub fn get_exact(&self, from: StopId, to: StopId) -> Option<u32> {
        self.entries.get(&(from, to)).copied()
    }

    /// Road distance in metres: exact pair, else reversed pair, else `0`.
    pub fn get(&self, from: StopId, to: StopId) -> u32 {
        self.get_exact(from, to)
            .or_else(|| self.get_exact(to, from))
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All stored `(from, to, metres)` triples in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (StopId, StopId, u32)> + '_ {
        self.entries.iter().map(|(&(from, to), &d)| (from, to, d))
    }
}
