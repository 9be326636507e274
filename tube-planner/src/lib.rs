//! London transit trip planner.
//!
//! Finds the fastest trip between two stations on a fixed network and
//! prints it as numbered directions. Vertices are (station, line) pairs,
//! so changing line and walking between nearby stations are edges with
//! their own travel times.

pub mod directions;
pub mod domain;
pub mod graph;
pub mod logging;
pub mod network;
pub mod planner;
