//! Input documents.
//!
//! Build mode reads a [`BaseDocument`]; serve mode reads a [`StatDocument`].
//! Both are plain `serde` structs, so a malformed document fails up front
//! with a precise `serde_json` error instead of halfway through loading.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use tc_core::RoutingSettings;
use tc_render::RenderSettings;

use crate::JsonResult;

#[derive(Clone, Debug, Deserialize)]
pub struct BaseDocument {
    #[serde(default)]
    pub base_requests:          Vec<BaseRequest>,
    #[serde(default)]
    pub render_settings:        RenderSettings,
    pub routing_settings:       RoutingSettings,
    #[serde(default)]
    pub serialization_settings: Option<SerializationSettings>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

#[derive(Clone, Debug, Deserialize)]
pub struct StopRequest {
    pub name:           String,
    pub latitude:       f64,
    pub longitude:      f64,
    /// Destination stop name → metres.
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BusRequest {
    pub name:         String,
    /// Outbound stops.  A round trip lists its closing stop explicitly.
    pub stops:        Vec<String>,
    pub is_roundtrip: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SerializationSettings {
    pub file: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StatDocument {
    #[serde(default)]
    pub stat_requests:          Vec<StatRequest>,
    #[serde(default)]
    pub serialization_settings: Option<SerializationSettings>,
}

/// A serve-mode query.  `id` is echoed back verbatim, whatever JSON value
/// it is.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: Value, name: String },
    Stop { id: Value, name: String },
    Map { id: Value },
    Route { id: Value, from: String, to: String },
}

impl StatRequest {
    pub fn id(&self) -> &Value {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Map { id }
            | StatRequest::Route { id, .. } => id,
        }
    }
}

impl BaseDocument {
    pub fn from_reader<R: Read>(reader: R) -> JsonResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl StatDocument {
    pub fn from_reader<R: Read>(reader: R) -> JsonResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
