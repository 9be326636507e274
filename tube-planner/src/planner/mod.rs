//! Fastest-trip planner.
//!
//! This module implements the core planning algorithm: a Dijkstra search
//! over (station, line) vertices, seeded from every line at the start
//! station, followed by path reconstruction that keeps the kind of each
//! edge taken so the trip can be narrated.

mod queue;
mod route;
mod search;


pub use queue::VertexQueue;
pub use route::{Route, RouteStop};
pub use search::{Planner, SearchError, StationRole};
