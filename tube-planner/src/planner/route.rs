//! Route types and path reconstruction.

use crate::domain::{Line, Minutes, Station};
use crate::graph::{EdgeKind, TransitGraph, VertexId};

/// Per-vertex search result: best known time and how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Label {
    pub time: Minutes,
    /// Predecessor vertex and the kind of edge taken from it.
    /// `None` for a seeded origin.
    pub previous: Option<(VertexId, EdgeKind)>,
}

/// A vertex visited by a route, with the elapsed time on arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStop {
    pub vertex: VertexId,
    pub station: Station,
    pub line: Line,
    /// Cumulative travel time from the start of the trip.
    pub elapsed: Minutes,
}

/// The fastest trip between two stations.
///
/// # Invariants
///
/// - `stops.len() == edge_kinds.len() + 1`
/// - `edge_kinds[i]` is the edge taken from `stops[i]` to `stops[i + 1]`
/// - elapsed times are non-decreasing, starting at zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stops: Vec<RouteStop>,
    edge_kinds: Vec<EdgeKind>,
}

impl Route {
    /// Walk predecessor labels back from `terminal` to a seeded origin.
    pub(super) fn reconstruct(
        graph: &TransitGraph,
        labels: &[Option<Label>],
        terminal: VertexId,
    ) -> Self {
        let mut stops = Vec::new();
        let mut edge_kinds = Vec::new();
        let mut current = Some(terminal);

        while let Some(id) = current {
            let Some(label) = labels[id.index()] else {
                break;
            };
            let vertex = graph.vertex(id);
            stops.push(RouteStop {
                vertex: id,
                station: vertex.station().clone(),
                line: vertex.line().clone(),
                elapsed: label.time,
            });
            current = label.previous.map(|(previous, kind)| {
                edge_kinds.push(kind);
                previous
            });
        }

        stops.reverse();
        edge_kinds.reverse();
        Self { stops, edge_kinds }
    }

    /// Returns the visited stops, origin first.
    pub fn stops(&self) -> &[RouteStop] {
        &self.stops
    }

    /// Returns the kind of each edge taken, in travel order.
    pub fn edge_kinds(&self) -> &[EdgeKind] {
        &self.edge_kinds
    }

    /// Returns the first stop.
    pub fn origin(&self) -> &RouteStop {
        &self.stops[0]
    }

    /// Returns the final stop.
    pub fn destination(&self) -> &RouteStop {
        &self.stops[self.stops.len() - 1]
    }

    /// Total travel time of the trip.
    pub fn total(&self) -> Minutes {
        self.destination().elapsed
    }

    /// Returns the number of edges traversed.
    pub fn edge_count(&self) -> usize {
        self.edge_kinds.len()
    }

    /// Iterate over `(from, kind, to)` for each edge taken.
    pub fn legs(&self) -> impl Iterator<Item = (&RouteStop, EdgeKind, &RouteStop)> {
        self.stops
            .windows(2)
            .zip(&self.edge_kinds)
            .map(|(pair, kind)| (&pair[0], *kind, &pair[1]))
    }

    /// Number of interchanges of either kind.
    pub fn interchanges(&self) -> usize {
        self.edge_kinds.iter().filter(|k| k.is_interchange()).count()
    }
}
