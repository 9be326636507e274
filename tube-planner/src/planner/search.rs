//! Shortest-path search over the transit graph.
//!
//! A multi-source Dijkstra: every line at the start station is a valid
//! origin at time zero, and the search stops at the first vertex settled
//! at the destination station, on whichever line that happens to be.

use std::fmt;

use tracing::{debug, trace};

use crate::domain::{Minutes, Station};
use crate::graph::{TransitGraph, VertexId};

use super::queue::VertexQueue;
use super::route::{Label, Route};

/// Which end of the trip a station name was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationRole {
    Start,
    Destination,
}

impl fmt::Display for StationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StationRole::Start => "initial station",
            StationRole::Destination => "destination",
        })
    }
}

/// Error from a shortest-path search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// No line serves the named station
    #[error("{station} is not a valid {role}")]
    UnknownStation { role: StationRole, station: String },

    /// Both stations exist but no path joins them
    #[error("no route found from {from} to {to}")]
    NoRoute { from: Station, to: Station },
}

/// Per-query mutable state, indexed by `VertexId`.
///
/// Kept apart from the graph so the same graph can answer any number of
/// queries without being reset.
struct SearchState {
    labels: Vec<Option<Label>>,
    queue: VertexQueue,
    settled: usize,
}

impl SearchState {
    fn new(vertex_count: usize) -> Self {
        Self {
            labels: vec![None; vertex_count],
            queue: VertexQueue::with_capacity(vertex_count),
            settled: 0,
        }
    }

    /// Record `label` for `id` if it is strictly faster than the current one.
    fn improve(&mut self, id: VertexId, label: Label) {
        let slot = &mut self.labels[id.index()];
        if slot.is_some_and(|current| label.time >= current.time) {
            return;
        }
        *slot = Some(label);
        self.queue.push_or_decrease(id, label.time);
    }
}

/// Fastest-trip planner over an immutable transit graph.
pub struct Planner<'a> {
    graph: &'a TransitGraph,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a TransitGraph) -> Self {
        Self { graph }
    }

    /// Resolve a station name given for one end of the trip.
    pub fn station(&self, name: &str, role: StationRole) -> Result<Station, SearchError> {
        let unknown = || SearchError::UnknownStation {
            role,
            station: name.to_string(),
        };
        if !self.graph.has_station(name) {
            return Err(unknown());
        }
        Station::new(name).map_err(|_| unknown())
    }

    /// Find the fastest trip from `start` to `destination`.
    ///
    /// Returns `Ok(None)` when the two stations are the same; no search is
    /// run in that case. Ties between equally fast routes are broken by
    /// extraction order and are not otherwise specified.
    ///
    /// # Errors
    ///
    /// - `UnknownStation` if either name matches no vertex
    /// - `NoRoute` if the stations are in disconnected parts of the network.
    ///   Edges whose cumulative time would overflow `u32` are never taken,
    ///   so a destination reachable only that way is also `NoRoute`.
    pub fn find_shortest_path(
        &self,
        start: &str,
        destination: &str,
    ) -> Result<Option<Route>, SearchError> {
        let start = self.station(start, StationRole::Start)?;
        let destination = self.station(destination, StationRole::Destination)?;

        if start == destination {
            debug!(station = %start, "start is the destination, nothing to search");
            return Ok(None);
        }

        let mut state = SearchState::new(self.graph.len());

        for id in self.graph.vertices_at(start.as_str()) {
            state.improve(
                id,
                Label {
                    time: Minutes::ZERO,
                    previous: None,
                },
            );
        }
        debug!(
            from = %start,
            to = %destination,
            origins = state.queue.len(),
            "starting search"
        );

        while let Some((id, time)) = state.queue.pop_min() {
            state.settled += 1;
            let vertex = self.graph.vertex(id);

            if vertex.station() == &destination {
                let route = Route::reconstruct(self.graph, &state.labels, id);
                debug!(
                    total = time.get(),
                    stops = route.stops().len(),
                    settled = state.settled,
                    "route found"
                );
                return Ok(Some(route));
            }

            trace!(
                station = %vertex.station(),
                line = %vertex.line(),
                time = time.get(),
                "settled vertex"
            );

            for edge in vertex.edges() {
                // An overflowing time can never beat a label that fits
                let Ok(candidate) = time.checked_add(edge.minutes) else {
                    continue;
                };
                state.improve(
                    edge.to,
                    Label {
                        time: candidate,
                        previous: Some((id, edge.kind)),
                    },
                );
            }
        }

        debug!(settled = state.settled, "queue exhausted without reaching destination");
        Err(SearchError::NoRoute {
            from: start,
            to: destination,
        })
    }
}
