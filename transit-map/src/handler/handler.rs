//! Answering stat requests against a built catalogue.

use std::cell::OnceCell;

use tracing::debug;

use crate::catalogue::TransportCatalogue;
use crate::input::StatRequest;
use crate::render::MapRenderer;

use super::dto::{BusResponse, MapResponse, StatResponse, StopResponse};

/// Read-only query front end over a catalogue.
///
/// Unknown names become `not found` responses; nothing here fails. The map
/// is rendered on first request and reused afterwards.
pub struct RequestHandler<'a> {
    catalogue: &'a TransportCatalogue,
    renderer: &'a MapRenderer,
    map: OnceCell<String>,
}

impl<'a> RequestHandler<'a> {
    pub fn new(catalogue: &'a TransportCatalogue, renderer: &'a MapRenderer) -> Self {
        Self {
            catalogue,
            renderer,
            map: OnceCell::new(),
        }
    }

    /// Answer every request, in order.
    pub fn handle_all(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        requests.iter().map(|r| self.handle(r)).collect()
    }

    /// Answer one request.
    pub fn handle(&self, request: &StatRequest) -> StatResponse {
        let response = match request {
            StatRequest::Bus { id, name } => self.bus(*id, name),
            StatRequest::Stop { id, name } => self.stop(*id, name),
            StatRequest::Map { id } => StatResponse::Map(MapResponse {
                request_id: *id,
                map: self.render_map().to_string(),
            }),
        };

        if let StatResponse::Error(err) = &response {
            debug!(request_id = err.request_id, request = ?request, "query not found");
        }
        response
    }

    /// The SVG map of the whole network.
    pub fn render_map(&self) -> &str {
        self.map
            .get_or_init(|| self.renderer.render(self.catalogue).to_string())
    }

    fn bus(&self, id: i64, name: &str) -> StatResponse {
        match self.catalogue.bus_info(name) {
            Some(metrics) => StatResponse::Bus(BusResponse::from_metrics(id, metrics)),
            None => StatResponse::not_found(id),
        }
    }

    fn stop(&self, id: i64, name: &str) -> StatResponse {
        match self.catalogue.served_buses(name) {
            Ok(buses) => StatResponse::Stop(StopResponse {
                request_id: id,
                buses: buses.into_iter().map(str::to_string).collect(),
            }),
            Err(_) => StatResponse::not_found(id),
        }
    }
}
