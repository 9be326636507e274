//! Domain error types.
//!
//! These errors represent validation failures in the network data.
//! They are distinct from search outcomes and I/O errors.

use super::{Line, Station};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A station or line name was empty
    #[error("{0} name cannot be empty")]
    EmptyName(&'static str),

    /// A connection joins a (station, line) vertex to itself
    #[error("connection at {station} joins the {line} line to itself")]
    SelfLoop { station: Station, line: Line },

    /// Travel time arithmetic overflowed
    #[error("travel time overflow")]
    TimeOverflow,
}
