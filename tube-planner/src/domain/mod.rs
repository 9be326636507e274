//! Domain types for the tube planner.
//!
//! This module contains the validated value types shared by the network,
//! graph and planner layers. All types enforce their invariants at
//! construction time.

mod error;
mod minutes;
mod names;

pub use error::DomainError;
pub use minutes::Minutes;
pub use names::{Line, Station};
