//! The multi-layer transit graph.
//!
//! Each vertex is a (station, line) pair rather than a bare station, so a
//! change of line is an edge of its own with its own weight. The graph is
//! immutable once built: search state lives with the query, not here.

mod builder;

use std::collections::HashMap;
use std::fmt;

use crate::domain::{DomainError, Line, Minutes, Station};
use crate::network::{Connection, Network};

pub use builder::GraphBuilder;

/// Stable ordinal of a vertex, assigned in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Returns the ordinal as an index into per-vertex arrays.
    pub fn index(self) -> usize {
        self.0
    }
}

/// What kind of movement an edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Travel between adjacent stops on one line
    Rail,
    /// Changing lines without leaving the station
    LineInterchange,
    /// Walking to a nearby, physically distinct station
    StationInterchange,
}

impl EdgeKind {
    /// Derive the edge kind for a connection record.
    pub fn of(connection: &Connection) -> Self {
        match connection {
            Connection::Rail(_) => EdgeKind::Rail,
            Connection::Interchange(ic) if ic.is_same_station() => EdgeKind::LineInterchange,
            Connection::Interchange(_) => EdgeKind::StationInterchange,
        }
    }

    /// Returns true for either kind of interchange.
    pub fn is_interchange(self) -> bool {
        !matches!(self, EdgeKind::Rail)
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EdgeKind::Rail => "rail",
            EdgeKind::LineInterchange => "line interchange",
            EdgeKind::StationInterchange => "station interchange",
        })
    }
}

/// A directed half of a bidirectional connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub to: VertexId,
    pub minutes: Minutes,
    pub kind: EdgeKind,
}

/// A (station, line) pair and its outgoing edges.
#[derive(Debug, Clone)]
pub struct Vertex {
    station: Station,
    line: Line,
    edges: Vec<Edge>,
}

impl Vertex {
    fn new(station: Station, line: Line) -> Self {
        Self {
            station,
            line,
            edges: Vec::new(),
        }
    }

    pub fn station(&self) -> &Station {
        &self.station
    }

    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Returns the outgoing edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// The transit graph and its (station, line) index.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    vertices: Vec<Vertex>,
    index: HashMap<Station, HashMap<Line, VertexId>>,
}

impl TransitGraph {
    /// Build a graph from connection records.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SelfLoop` if a connection would join a vertex
    /// to itself.
    pub fn build(connections: &[Connection]) -> Result<Self, DomainError> {
        let mut builder = GraphBuilder::new();
        for connection in connections {
            builder.add_connection(connection)?;
        }
        Ok(builder.build())
    }

    /// Build a graph from a validated network.
    pub fn from_network(network: &Network) -> Result<Self, DomainError> {
        Self::build(network.connections())
    }

    /// Returns the vertex with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this graph.
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Returns all vertices, indexed by `VertexId`.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of directed edges (twice the connection count).
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.edges.len()).sum()
    }

    /// Check whether any line serves the named station.
    pub fn has_station(&self, station: &str) -> bool {
        self.index.contains_key(station)
    }

    /// Look up the vertex for a (station, line) pair.
    pub fn lookup(&self, station: &str, line: &str) -> Option<VertexId> {
        self.index.get(station)?.get(line).copied()
    }

    /// Check whether the (station, line) pair exists.
    pub fn has_vertex(&self, station: &str, line: &str) -> bool {
        self.lookup(station, line).is_some()
    }

    /// Returns every vertex at the named station, one per line.
    pub fn vertices_at(&self, station: &str) -> impl Iterator<Item = VertexId> + '_ {
        self.index
            .get(station)
            .into_iter()
            .flat_map(|lines| lines.values().copied())
    }

    /// Returns the names of all stations in the graph.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.index.keys()
    }
}
