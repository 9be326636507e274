//! Graph construction from connection records.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::domain::{DomainError, Line, Station};
use crate::network::Connection;

use super::{Edge, EdgeKind, TransitGraph, Vertex, VertexId};

/// Incrementally materialises vertices and edges.
///
/// Vertices are deduplicated by (station, line) identity and created lazily
/// the first time a connection mentions them.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    vertices: Vec<Vertex>,
    index: HashMap<Station, HashMap<Line, VertexId>>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one connection as a symmetric pair of edges.
    ///
    /// Both edges carry the connection's weight and derived kind.
    pub fn add_connection(&mut self, connection: &Connection) -> Result<(), DomainError> {
        connection.validate()?;

        let ((station_a, line_a), (station_b, line_b)) = connection.endpoints();
        let a = self.vertex_id(station_a, line_a);
        let b = self.vertex_id(station_b, line_b);
        let minutes = connection.minutes();
        let kind = EdgeKind::of(connection);

        trace!(
            from = %station_a,
            to = %station_b,
            %kind,
            minutes = minutes.get(),
            "adding connection"
        );

        self.vertices[a.index()].edges.push(Edge {
            to: b,
            minutes,
            kind,
        });
        self.vertices[b.index()].edges.push(Edge {
            to: a,
            minutes,
            kind,
        });
        Ok(())
    }

    /// Look up or create the vertex for a (station, line) pair.
    fn vertex_id(&mut self, station: &Station, line: &Line) -> VertexId {
        if let Some(id) = self
            .index
            .get(station.as_str())
            .and_then(|lines| lines.get(line.as_str()))
        {
            return *id;
        }

        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(station.clone(), line.clone()));
        self.index
            .entry(station.clone())
            .or_default()
            .insert(line.clone(), id);
        id
    }

    /// Finish construction.
    pub fn build(self) -> TransitGraph {
        let graph = TransitGraph {
            vertices: self.vertices,
            index: self.index,
        };
        debug!(
            stations = graph.index.len(),
            vertices = graph.len(),
            edges = graph.edge_count(),
            "transit graph built"
        );
        graph
    }
}
