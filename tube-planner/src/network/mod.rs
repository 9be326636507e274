//! Transit network connection records.
//!
//! A network is a flat list of bidirectional connections between
//! (station, line) pairs: rail links between adjacent stops on one line,
//! and interchanges between lines at one station or between nearby
//! stations on foot. This module provides the record types, a fluent
//! builder, JSON loading for alternative datasets, and the embedded
//! London network.

mod error;
mod london;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Line, Minutes, Station};

pub use error::NetworkError;
pub use london::london_network;

/// Travel between two adjacent stops on the same line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailLink {
    pub from: Station,
    pub to: Station,
    pub line: Line,
    pub minutes: Minutes,
}

/// A transfer between two lines.
///
/// When `from_station == to_station` this is a change of line within one
/// station; otherwise it is a walk to a nearby, physically distinct station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interchange {
    pub from_station: Station,
    pub from_line: Line,
    pub to_station: Station,
    pub to_line: Line,
    pub minutes: Minutes,
}

impl Interchange {
    /// Returns true if both ends are at the same station.
    pub fn is_same_station(&self) -> bool {
        self.from_station == self.to_station
    }
}

/// A single connection record.
///
/// Connections are symmetric: the graph builder inserts an edge in each
/// direction with the same weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Connection {
    Rail(RailLink),
    Interchange(Interchange),
}

impl Connection {
    /// Returns the two (station, line) endpoints of this connection.
    pub fn endpoints(&self) -> ((&Station, &Line), (&Station, &Line)) {
        match self {
            Connection::Rail(link) => ((&link.from, &link.line), (&link.to, &link.line)),
            Connection::Interchange(ic) => (
                (&ic.from_station, &ic.from_line),
                (&ic.to_station, &ic.to_line),
            ),
        }
    }

    /// Returns the travel time of this connection.
    pub fn minutes(&self) -> Minutes {
        match self {
            Connection::Rail(link) => link.minutes,
            Connection::Interchange(ic) => ic.minutes,
        }
    }

    /// Check that the connection joins two distinct vertices.
    pub fn validate(&self) -> Result<(), DomainError> {
        let ((station_a, line_a), (station_b, line_b)) = self.endpoints();
        if station_a == station_b && line_a == line_b {
            return Err(DomainError::SelfLoop {
                station: station_a.clone(),
                line: line_a.clone(),
            });
        }
        Ok(())
    }
}

/// A validated list of connection records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    connections: Vec<Connection>,
}

impl Network {
    /// Create a network from connection records, validating each one.
    pub fn new(connections: Vec<Connection>) -> Result<Self, DomainError> {
        for connection in &connections {
            connection.validate()?;
        }
        Ok(Self { connections })
    }

    /// Parse a network from a JSON array of tagged connection records.
    ///
    /// # Example
    ///
    /// ```
    /// use tube_planner::network::Network;
    ///
    /// let json = r#"[
    ///     {"kind": "rail", "from": "Paddington", "to": "Bond Street",
    ///      "line": "Elizabeth", "minutes": 3}
    /// ]"#;
    /// let network = Network::from_json_str(json).unwrap();
    /// assert_eq!(network.len(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, NetworkError> {
        let connections: Vec<Connection> = serde_json::from_str(json)?;
        Ok(Self::new(connections)?)
    }

    /// Read and parse a JSON network file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialise the network as a JSON array.
    pub fn to_json_string(&self) -> Result<String, NetworkError> {
        Ok(serde_json::to_string_pretty(&self.connections)?)
    }

    /// Returns the connection records.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Returns the number of connection records.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Returns true if there are no connections.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

/// Builder for creating a network.
///
/// Provides a fluent API for adding connections. Names are validated as
/// they are added; the first failure is reported by [`NetworkBuilder::build`].
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    connections: Vec<Connection>,
    error: Option<DomainError>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rail link between two adjacent stops.
    pub fn rail(self, line: &str, from: &str, to: &str, minutes: u32) -> Self {
        self.push_with(|| {
            Ok(Connection::Rail(RailLink {
                from: Station::new(from)?,
                to: Station::new(to)?,
                line: Line::new(line)?,
                minutes: Minutes::new(minutes),
            }))
        })
    }

    /// Add rail links along a line, stop by stop.
    ///
    /// Each entry in `stops` is the next station and the minutes taken to
    /// reach it from the previous one.
    pub fn rail_sequence(mut self, line: &str, first: &str, stops: &[(&str, u32)]) -> Self {
        let mut previous = first;
        for &(station, minutes) in stops {
            self = self.rail(line, previous, station, minutes);
            previous = station;
        }
        self
    }

    /// Add an interchange between any two (station, line) pairs.
    pub fn interchange(
        self,
        from_station: &str,
        from_line: &str,
        to_station: &str,
        to_line: &str,
        minutes: u32,
    ) -> Self {
        self.push_with(|| {
            Ok(Connection::Interchange(Interchange {
                from_station: Station::new(from_station)?,
                from_line: Line::new(from_line)?,
                to_station: Station::new(to_station)?,
                to_line: Line::new(to_line)?,
                minutes: Minutes::new(minutes),
            }))
        })
    }

    /// Add a change between two lines within one station.
    pub fn change(self, station: &str, from_line: &str, to_line: &str, minutes: u32) -> Self {
        self.interchange(station, from_line, station, to_line, minutes)
    }

    /// Build the network, or return the first validation error.
    pub fn build(self) -> Result<Network, DomainError> {
        match self.error {
            Some(err) => Err(err),
            None => Network::new(self.connections),
        }
    }

    fn push_with(mut self, make: impl FnOnce() -> Result<Connection, DomainError>) -> Self {
        if self.error.is_some() {
            return self;
        }
        match make() {
            Ok(connection) => self.connections.push(connection),
            Err(err) => self.error = Some(err),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> Station {
        Station::new(s).unwrap()
    }

    fn line(s: &str) -> Line {
        Line::new(s).unwrap()
    }

    #[test]
    fn empty_network() {
        let network = NetworkBuilder::new().build().unwrap();
        assert!(network.is_empty());
        assert_eq!(network.len(), 0);
    }

    #[test]
    fn builder_rail_and_change() {
        let network = NetworkBuilder::new()
            .rail("Elizabeth", "Paddington", "Bond Street", 3)
            .change("Paddington", "Bakerloo", "Elizabeth", 6)
            .build()
            .unwrap();

        assert_eq!(network.len(), 2);
        assert_eq!(
            network.connections()[0],
            Connection::Rail(RailLink {
                from: station("Paddington"),
                to: station("Bond Street"),
                line: line("Elizabeth"),
                minutes: Minutes::new(3),
            })
        );
        match &network.connections()[1] {
            Connection::Interchange(ic) => assert!(ic.is_same_station()),
            other => panic!("expected interchange, got {:?}", other),
        }
    }

    #[test]
    fn rail_sequence_links_consecutive_stops() {
        let network = NetworkBuilder::new()
            .rail_sequence(
                "Bakerloo",
                "Queen's Park",
                &[("Kilburn Park", 2), ("Maida Vale", 2), ("Warwick Avenue", 1)],
            )
            .build()
            .unwrap();

        assert_eq!(network.len(), 3);
        let ((from, _), (to, _)) = network.connections()[2].endpoints();
        assert_eq!(from.as_str(), "Maida Vale");
        assert_eq!(to.as_str(), "Warwick Avenue");
        assert_eq!(network.connections()[2].minutes(), Minutes::new(1));
    }

    #[test]
    fn builder_reports_first_error() {
        let result = NetworkBuilder::new()
            .rail("Bakerloo", "", "Paddington", 2)
            .rail("", "Paddington", "Edgware Road", 2)
            .build();
        assert_eq!(result, Err(DomainError::EmptyName("station")));
    }

    #[test]
    fn self_interchange_rejected() {
        let result = NetworkBuilder::new()
            .change("Bank", "Central", "Central", 3)
            .build();
        assert!(matches!(result, Err(DomainError::SelfLoop { .. })));
    }

    #[test]
    fn rail_self_loop_rejected() {
        let result = NetworkBuilder::new()
            .rail("Central", "Bank", "Bank", 2)
            .build();
        assert!(matches!(result, Err(DomainError::SelfLoop { .. })));
    }

    #[test]
    fn walk_between_stations_is_not_same_station() {
        let network = NetworkBuilder::new()
            .interchange("Bank", "Central", "Monument", "District", 4)
            .build()
            .unwrap();
        let Connection::Interchange(ic) = &network.connections()[0] else {
            panic!("expected interchange");
        };
        assert!(!ic.is_same_station());
    }

    #[test]
    fn json_tagged_records() {
        let json = r#"[
            {"kind": "rail", "from": "A", "to": "B", "line": "Red", "minutes": 2},
            {"kind": "interchange", "from_station": "B", "from_line": "Red",
             "to_station": "B", "to_line": "Blue", "minutes": 4}
        ]"#;
        let network = Network::from_json_str(json).unwrap();
        assert_eq!(network.len(), 2);
        assert_eq!(network.connections()[1].minutes(), Minutes::new(4));
    }

    #[test]
    fn json_unknown_kind_rejected() {
        let json = r#"[{"kind": "ferry", "from": "A", "to": "B", "minutes": 2}]"#;
        let err = Network::from_json_str(json).unwrap_err();
        assert!(matches!(err, NetworkError::Json { .. }));
    }

    #[test]
    fn json_self_interchange_rejected() {
        let json = r#"[{"kind": "interchange", "from_station": "B", "from_line": "Red",
                        "to_station": "B", "to_line": "Red", "minutes": 4}]"#;
        let err = Network::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::Domain(DomainError::SelfLoop { .. })
        ));
    }

    #[test]
    fn json_roundtrip_via_file() {
        let network = NetworkBuilder::new()
            .rail("Jubilee", "Baker Street", "Bond Street", 2)
            .change("Bond Street", "Jubilee", "Central", 4)
            .build()
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("network.json");
        std::fs::write(&path, network.to_json_string().unwrap()).unwrap();

        let loaded = Network::from_path(&path).unwrap();
        assert_eq!(loaded, network);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Network::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }
}
