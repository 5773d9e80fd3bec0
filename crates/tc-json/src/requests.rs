//! Build-mode loading and serve-mode answering.

use std::io::Write;

use log::{debug, info};
use serde_json::Value;

use tc_catalogue::{mirror_out_and_back, Catalogue, RouteKind};
use tc_core::GeoPoint;
use tc_index::{LegDetail, QueryEngine, TransitIndex};

use crate::{BaseDocument, BaseRequest, JsonResult, ResponseBuilder, StatRequest};

const NOT_FOUND: &str = "not found";

// ── Build mode ────────────────────────────────────────────────────────────────

/// Populate a catalogue from `base_requests`.
///
/// Stops go in first so distances and routes may name stops declared later
/// in the document; distances are applied once every stop exists.
pub fn load_catalogue(doc: &BaseDocument) -> JsonResult<Catalogue> {
    let mut catalogue = Catalogue::new();

    for req in &doc.base_requests {
        if let BaseRequest::Stop(stop) = req {
            catalogue.add_stop(stop.name.clone(), GeoPoint::new(stop.latitude, stop.longitude));
        }
    }
    for req in &doc.base_requests {
        if let BaseRequest::Stop(stop) = req {
            for (to, &metres) in &stop.road_distances {
                catalogue.add_distance(&stop.name, to, metres)?;
            }
        }
    }
    for req in &doc.base_requests {
        let BaseRequest::Bus(bus) = req else { continue };
        let name = bus.name.clone();
        if bus.is_roundtrip {
            catalogue.add_route(name, &bus.stops, RouteKind::Loop, None)?;
        } else if let Some((full, terminal)) = mirror_out_and_back(&bus.stops) {
            catalogue.add_route(name, &full, RouteKind::OutAndBack, Some(terminal.as_str()))?;
        } else {
            // Empty stop list; rejected by the catalogue.
            catalogue.add_route(name, &bus.stops, RouteKind::OutAndBack, None)?;
        }
    }

    info!(
        "catalogue loaded: {} stops, {} routes, {} distances",
        catalogue.stop_count(),
        catalogue.route_count(),
        catalogue.distances().len()
    );
    Ok(catalogue)
}

/// Validate the settings blocks, load the catalogue and build the index.
pub fn build_index(doc: &BaseDocument) -> JsonResult<TransitIndex> {
    doc.routing_settings.validate()?;
    doc.render_settings.validate()?;
    let catalogue = load_catalogue(doc)?;
    Ok(TransitIndex::build(catalogue, doc.routing_settings, doc.render_settings.clone()))
}

// ── Serve mode ────────────────────────────────────────────────────────────────

/// Answer every request in order.  The result is a JSON array with one
/// object per request.
pub fn process_stat_requests(index: &TransitIndex, requests: &[StatRequest]) -> JsonResult<Value> {
    let query = index.query();
    let mut out = ResponseBuilder::new();
    out.start_array()?;
    for req in requests {
        out.start_object()?.key("request_id")?.value(req.id().clone())?;
        match req {
            StatRequest::Bus { name, .. } => bus_response(&query, name, &mut out)?,
            StatRequest::Stop { name, .. } => stop_response(&query, name, &mut out)?,
            StatRequest::Map { .. } => {
                out.key("map")?.value(query.render_map())?;
            }
            StatRequest::Route { from, to, .. } => {
                route_response(index, &query, from, to, &mut out)?
            }
        }
        out.end_object()?;
    }
    out.end_array()?;
    debug!("answered {} stat requests", requests.len());
    out.build()
}

/// Pretty-print `responses` followed by a newline.
pub fn write_responses<W: Write>(mut writer: W, responses: &Value) -> JsonResult<()> {
    serde_json::to_writer_pretty(&mut writer, responses)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn not_found(out: &mut ResponseBuilder) -> JsonResult<()> {
    out.key("error_message")?.value(NOT_FOUND)?;
    Ok(())
}

fn bus_response(query: &QueryEngine<'_>, name: &str, out: &mut ResponseBuilder) -> JsonResult<()> {
    let Some(stats) = query.route_info(name) else { return not_found(out) };
    out.key("curvature")?
        .value(stats.curvature())?
        .key("route_length")?
        .value(stats.way)?
        .key("stop_count")?
        .value(stats.stop_count)?
        .key("unique_stop_count")?
        .value(stats.unique_stop_count)?;
    Ok(())
}

fn stop_response(query: &QueryEngine<'_>, name: &str, out: &mut ResponseBuilder) -> JsonResult<()> {
    let Some(stats) = query.stop_info(name) else { return not_found(out) };
    out.key("buses")?.start_array()?;
    for route in stats.routes {
        out.value(route)?;
    }
    out.end_array()?;
    Ok(())
}

fn route_response(
    index: &TransitIndex,
    query: &QueryEngine<'_>,
    from: &str,
    to: &str,
    out: &mut ResponseBuilder,
) -> JsonResult<()> {
    let catalogue = index.catalogue();
    let (Some(from), Some(to)) = (catalogue.stop_id(from), catalogue.stop_id(to)) else {
        return not_found(out);
    };
    let Some(itinerary) = query.build_route(from, to)? else { return not_found(out) };

    out.key("items")?.start_array()?;
    for leg in &itinerary.legs {
        out.start_object()?;
        match query.edge_detail(leg.edge)? {
            LegDetail::Wait { stop_name, time } => {
                out.key("type")?
                    .value("Wait")?
                    .key("stop_name")?
                    .value(stop_name)?
                    .key("time")?
                    .value(time)?;
            }
            LegDetail::Ride { route_name, span_count, time } => {
                out.key("type")?
                    .value("Bus")?
                    .key("bus")?
                    .value(route_name)?
                    .key("span_count")?
                    .value(span_count)?
                    .key("time")?
                    .value(time)?;
            }
        }
        out.end_object()?;
    }
    out.end_array()?.key("total_time")?.value(itinerary.total_time)?;
    Ok(())
}
