//! The transport catalogue: arena storage plus name indices.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use crate::domain::{Bus, BusId, Coordinates, RouteMetrics, Stop, StopId};

use super::distances::DistanceTable;
use super::error::CatalogueError;
use super::metrics::compute_route_metrics;

/// Indexed store of stops, buses and declared distances.
///
/// Stops and buses live in append-only arenas; [`StopId`] and [`BusId`] are
/// indices into them and stay valid for the catalogue's lifetime. Names map
/// to the most recently added record with that name.
#[derive(Debug, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    stop_index: HashMap<String, StopId>,

    /// Names of the buses passing through each stop, parallel to `stops`.
    served_by: Vec<BTreeSet<String>>,

    buses: Vec<Bus>,
    bus_index: HashMap<String, BusId>,

    distances: DistanceTable,
}

impl TransportCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop, replacing any earlier stop of the same name in the index.
    pub fn add_stop(&mut self, name: impl Into<String>, coordinates: Coordinates) -> StopId {
        let name = name.into();
        let id = StopId(self.stops.len());

        if self.stop_index.contains_key(&name) {
            warn!(stop = %name, "duplicate stop name, later record wins");
        }

        self.stops.push(Stop::new(name.clone(), coordinates));
        self.served_by.push(BTreeSet::new());
        self.stop_index.insert(name, id);
        id
    }

    /// Declare road distances from `from` to each named neighbour.
    ///
    /// Reverse directions are filled in only where not yet declared.
    pub fn add_distances<'a, I>(&mut self, from: &str, distances: I) -> Result<(), CatalogueError>
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let from_id = self
            .find_stop(from)
            .ok_or_else(|| CatalogueError::UnknownStop(from.to_string()))?;

        for (to, meters) in distances {
            let to_id = self
                .find_stop(to)
                .ok_or_else(|| CatalogueError::UnknownStop(to.to_string()))?;
            self.distances.declare(from_id, to_id, meters);
        }

        Ok(())
    }

    /// Add a bus over already-known stops and compute its metrics.
    ///
    /// Fails without modifying the catalogue if any stop name is unknown.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<BusId, CatalogueError> {
        let name = name.into();

        let stops = stop_names
            .iter()
            .map(|stop| {
                let stop = stop.as_ref();
                self.find_stop(stop)
                    .ok_or_else(|| CatalogueError::UnknownStopOnRoute {
                        bus: name.clone(),
                        stop: stop.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let metrics = compute_route_metrics(&stops, is_roundtrip, &self.stops, &self.distances);

        if let Some(&previous) = self.bus_index.get(&name) {
            warn!(bus = %name, "duplicate bus name, later record wins");
            for stop in self.buses[previous.0].stops() {
                self.served_by[stop.0].remove(&name);
            }
        }

        for stop in &stops {
            self.served_by[stop.0].insert(name.clone());
        }

        debug!(
            bus = %name,
            stops = metrics.stop_count,
            unique_stops = metrics.unique_stop_count,
            route_length = metrics.route_length,
            geo_length = metrics.geo_length,
            "bus added"
        );

        let id = BusId(self.buses.len());
        self.buses
            .push(Bus::new(name.clone(), stops, is_roundtrip, metrics));
        self.bus_index.insert(name, id);
        Ok(id)
    }

    /// Look up a stop by exact name.
    pub fn find_stop(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    /// Look up a bus by exact name.
    pub fn find_bus(&self, name: &str) -> Option<BusId> {
        self.bus_index.get(name).copied()
    }

    /// Resolve a stop key.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    /// Resolve a bus key.
    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.0]
    }

    /// Check whether a stop of this name exists.
    ///
    /// Distinguishes "stop with no buses" from "no such stop".
    pub fn is_existing_stop(&self, name: &str) -> bool {
        self.stop_index.contains_key(name)
    }

    /// Cached metrics of a bus, or `None` if the bus is unknown.
    pub fn bus_info(&self, name: &str) -> Option<&RouteMetrics> {
        self.find_bus(name).map(|id| self.bus(id).metrics())
    }

    /// Names of the buses through a stop, sorted byte-wise.
    pub fn served_buses(&self, stop: &str) -> Result<Vec<&str>, CatalogueError> {
        let id = self
            .find_stop(stop)
            .ok_or_else(|| CatalogueError::UnknownStop(stop.to_string()))?;
        Ok(self.served_by[id.0].iter().map(String::as_str).collect())
    }

    /// Declared distance between two named stops.
    ///
    /// Undeclared pairs and unknown names read as 0.
    pub fn distance(&self, from: &str, to: &str) -> u32 {
        match (self.find_stop(from), self.find_stop(to)) {
            (Some(from), Some(to)) => self.distances.get_or_zero(from, to),
            _ => 0,
        }
    }

    /// Declared distance between two stop keys, 0 if undeclared.
    pub fn distance_between(&self, from: StopId, to: StopId) -> u32 {
        self.distances.get_or_zero(from, to)
    }

    /// Indexed stops, in insertion order.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops
            .iter()
            .enumerate()
            .filter(|(i, stop)| self.stop_index.get(stop.name()) == Some(&StopId(*i)))
            .map(|(_, stop)| stop)
    }

    /// Indexed buses, in insertion order.
    pub fn buses(&self) -> impl Iterator<Item = &Bus> {
        self.buses
            .iter()
            .enumerate()
            .filter(|(i, bus)| self.bus_index.get(bus.name()) == Some(&BusId(*i)))
            .map(|(_, bus)| bus)
    }

    /// Buses that appear on the map: indexed, non-empty, sorted by name.
    pub fn rendered_buses(&self) -> Vec<&Bus> {
        let mut buses: Vec<&Bus> = self.buses().filter(|bus| !bus.is_empty()).collect();
        buses.sort_by(|a, b| a.name().cmp(b.name()));
        buses
    }

    /// Number of indexed stops.
    pub fn stop_count(&self) -> usize {
        self.stop_index.len()
    }

    /// Number of indexed buses.
    pub fn bus_count(&self) -> usize {
        self.bus_index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("Tolstopaltsevo", Coordinates::new(55.611087, 37.20829));
        catalogue.add_stop("Marushkino", Coordinates::new(55.595884, 37.209755));
        catalogue.add_stop("Rasskazovka", Coordinates::new(55.632761, 37.333324));
        catalogue.add_stop("Prazhskaya", Coordinates::new(55.611678, 37.603831));
        catalogue
            .add_distances("Tolstopaltsevo", [("Marushkino", 3900)])
            .unwrap();
        catalogue
            .add_distances("Marushkino", [("Rasskazovka", 9900), ("Marushkino", 100)])
            .unwrap();
        catalogue
            .add_distances("Rasskazovka", [("Marushkino", 9500)])
            .unwrap();
        catalogue
            .add_bus(
                "750",
                &["Tolstopaltsevo", "Marushkino", "Marushkino", "Rasskazovka"],
                false,
            )
            .unwrap();
        catalogue
    }

    #[test]
    fn find_stop_and_bus() {
        let catalogue = sample();
        let id = catalogue.find_stop("Marushkino").unwrap();
        assert_eq!(catalogue.stop(id).name(), "Marushkino");
        assert!(catalogue.find_stop("Biryulyovo").is_none());

        let bus = catalogue.find_bus("750").unwrap();
        assert_eq!(catalogue.bus(bus).name(), "750");
        assert!(catalogue.find_bus("751").is_none());
    }

    #[test]
    fn bus_info_out_and_back() {
        let catalogue = sample();
        let info = catalogue.bus_info("750").unwrap();

        assert_eq!(info.stop_count, 7);
        assert_eq!(info.unique_stop_count, 3);
        // Out: 3900 + 100 + 9900. Back: 9500 + 100 + 3900.
        assert_eq!(info.route_length, 27_400);
        assert!(!info.is_roundtrip);
        assert!(info.curvature() > 1.0);
    }

    #[test]
    fn bus_info_unknown() {
        assert!(sample().bus_info("751").is_none());
    }

    #[test]
    fn distances_by_name() {
        let catalogue = sample();
        assert_eq!(catalogue.distance("Tolstopaltsevo", "Marushkino"), 3900);
        assert_eq!(catalogue.distance("Marushkino", "Tolstopaltsevo"), 3900);
        assert_eq!(catalogue.distance("Marushkino", "Rasskazovka"), 9900);
        assert_eq!(catalogue.distance("Rasskazovka", "Marushkino"), 9500);
        assert_eq!(catalogue.distance("Tolstopaltsevo", "Prazhskaya"), 0);
        assert_eq!(catalogue.distance("Nowhere", "Marushkino"), 0);
    }

    #[test]
    fn served_buses_sorted() {
        let mut catalogue = sample();
        catalogue
            .add_bus("14", &["Prazhskaya", "Marushkino"], true)
            .unwrap();
        catalogue
            .add_bus("256", &["Marushkino", "Rasskazovka"], true)
            .unwrap();

        assert_eq!(
            catalogue.served_buses("Marushkino").unwrap(),
            vec!["14", "256", "750"]
        );
        assert_eq!(catalogue.served_buses("Prazhskaya").unwrap(), vec!["14"]);
    }

    #[test]
    fn served_buses_of_stop_without_routes() {
        let mut catalogue = sample();
        catalogue.add_stop("Biryulyovo", Coordinates::new(55.574371, 37.6517));

        assert!(catalogue.is_existing_stop("Biryulyovo"));
        assert!(catalogue.served_buses("Biryulyovo").unwrap().is_empty());
    }

    #[test]
    fn served_buses_of_unknown_stop() {
        let catalogue = sample();
        assert!(!catalogue.is_existing_stop("Nowhere"));
        assert_eq!(
            catalogue.served_buses("Nowhere"),
            Err(CatalogueError::UnknownStop("Nowhere".into()))
        );
    }

    #[test]
    fn add_bus_with_unknown_stop_fails_cleanly() {
        let mut catalogue = sample();
        let err = catalogue
            .add_bus("13", &["Marushkino", "Nowhere"], true)
            .unwrap_err();

        assert_eq!(
            err,
            CatalogueError::UnknownStopOnRoute {
                bus: "13".into(),
                stop: "Nowhere".into(),
            }
        );
        assert!(catalogue.find_bus("13").is_none());
        assert_eq!(catalogue.served_buses("Marushkino").unwrap(), vec!["750"]);
    }

    #[test]
    fn add_distances_with_unknown_stop_fails() {
        let mut catalogue = sample();
        assert_eq!(
            catalogue.add_distances("Nowhere", [("Marushkino", 10)]),
            Err(CatalogueError::UnknownStop("Nowhere".into()))
        );
        assert_eq!(
            catalogue.add_distances("Marushkino", [("Nowhere", 10)]),
            Err(CatalogueError::UnknownStop("Nowhere".into()))
        );
    }

    #[test]
    fn empty_bus_is_queryable_but_not_rendered() {
        let mut catalogue = sample();
        let empty: [&str; 0] = [];
        catalogue.add_bus("0", &empty, true).unwrap();

        let info = catalogue.bus_info("0").unwrap();
        assert_eq!(info.stop_count, 0);
        assert_eq!(info.route_length, 0);

        let rendered: Vec<&str> = catalogue
            .rendered_buses()
            .iter()
            .map(|b| b.name())
            .collect();
        assert_eq!(rendered, vec!["750"]);
    }

    #[test]
    fn rendered_buses_sorted_by_name() {
        let mut catalogue = sample();
        catalogue
            .add_bus("14", &["Prazhskaya", "Marushkino"], true)
            .unwrap();
        catalogue
            .add_bus("2", &["Marushkino", "Rasskazovka"], true)
            .unwrap();

        let rendered: Vec<&str> = catalogue
            .rendered_buses()
            .iter()
            .map(|b| b.name())
            .collect();
        assert_eq!(rendered, vec!["14", "2", "750"]);
    }

    #[test]
    fn duplicate_stop_name_last_write_wins() {
        let mut catalogue = TransportCatalogue::new();
        let first = catalogue.add_stop("A", Coordinates::new(1.0, 1.0));
        let second = catalogue.add_stop("A", Coordinates::new(2.0, 2.0));

        assert_ne!(first, second);
        assert_eq!(catalogue.find_stop("A"), Some(second));
        assert_eq!(catalogue.stop(second).coordinates().lat, 2.0);
        assert_eq!(catalogue.stop_count(), 1);
        assert_eq!(catalogue.stops().count(), 1);
    }

    #[test]
    fn duplicate_bus_name_last_write_wins() {
        let mut catalogue = sample();
        catalogue
            .add_bus("750", &["Marushkino", "Rasskazovka"], true)
            .unwrap();

        assert_eq!(catalogue.bus_count(), 1);
        assert_eq!(catalogue.bus_info("750").unwrap().stop_count, 2);
        assert_eq!(catalogue.buses().count(), 1);
        assert_eq!(catalogue.rendered_buses().len(), 1);
        assert!(catalogue.served_buses("Tolstopaltsevo").unwrap().is_empty());
        assert_eq!(catalogue.served_buses("Marushkino").unwrap(), vec!["750"]);
    }

    #[test]
    fn counts_and_iteration_order() {
        let catalogue = sample();
        assert_eq!(catalogue.stop_count(), 4);
        assert_eq!(catalogue.bus_count(), 1);

        let names: Vec<&str> = catalogue.stops().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["Tolstopaltsevo", "Marushkino", "Rasskazovka", "Prazhskaya"]
        );
    }

    #[test]
    fn distance_between_keys() {
        let catalogue = sample();
        let t = catalogue.find_stop("Tolstopaltsevo").unwrap();
        let m = catalogue.find_stop("Marushkino").unwrap();
        assert_eq!(catalogue.distance_between(t, m), 3900);
        assert_eq!(catalogue.distance_between(m, m), 100);
    }
}
