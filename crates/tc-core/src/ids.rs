//! Strongly typed, zero-cost identifier wrappers.
//!
//! Stops and routes live in arenas inside the catalogue; the graph indexes
//! vertices and edges the same way.  Every cross-structure reference goes
//! through one of these ids instead of a borrowed entity, so the catalogue,
//! the distance table, and the graph never hold pointers into each other.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into `Vec`s via `id.0 as usize`, but callers should prefer
//! the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel for "no valid ID" (`u32::MAX`).
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Slot of a stop in the catalogue arena, issued at first insertion.
    pub struct StopId(u32);
}

typed_id! {
    /// Slot of a route in the catalogue arena, issued at first insertion.
    pub struct RouteId(u32);
}

typed_id! {
    /// Index of a routing-graph vertex.  Each stop owns two consecutive
    /// vertices: wait-entry and wait-exit.
    pub struct VertexId(u32);
}

typed_id! {
    /// Index of a directed routing-graph edge.
    pub struct EdgeId(u32);
}
