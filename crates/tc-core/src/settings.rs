//! Routing parameters shared by the graph builder and the snapshot codec.
//!
//! # Units
//!
//! | Field           | Unit      | Meaning                                  |
//! |-----------------|-----------|------------------------------------------|
//! | `bus_wait_time` | minutes   | weight of every Wait edge                |
//! | `bus_velocity`  | km/h      | converted to m/min for Ride edge weights |
//!
//! Road distances are metres, so every edge weight comes out in minutes.

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Metres per minute in one km/h.
const KMH_TO_M_PER_MIN: f64 = 1000.0 / 60.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Fixed boarding wait at every stop, in minutes.
    pub bus_wait_time: u32,
    /// Route speed in km/h.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Validated constructor.  The speed must be finite and strictly positive
    /// or every Ride weight would be infinite.
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> CoreResult<Self> {
        let s = Self { bus_wait_time, bus_velocity };
        s.validate()?;
        Ok(s)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(CoreError::Config(format!(
                "bus_velocity must be a positive finite speed, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    /// Route speed in metres per minute.
    #[inline]
    pub fn metres_per_minute(&self) -> f64 {
        self.bus_velocity * KMH_TO_M_PER_MIN
    }

    /// Minutes needed to cover `distance_m` metres at route speed.
    #[inline]
    pub fn ride_minutes(&self, distance_m: f64) -> f64 {
        distance_m / self.metres_per_minute()
    }

    /// Wait-edge weight in minutes.
    #[inline]
    pub fn wait_minutes(&self) -> f64 {
        self.bus_wait_time as f64
    }
}
