//! Travel time type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// A non-negative travel time in whole minutes.
///
/// Unreached vertices are represented as `Option<Minutes>::None` rather
/// than a large sentinel value, so addition never has to guard against
/// "infinity". Addition is checked: an overflow is a `DomainError`.
///
/// # Examples
///
/// ```
/// use tube_planner::domain::Minutes;
///
/// let a = Minutes::new(7);
/// let b = Minutes::new(3);
/// assert_eq!(a.checked_add(b).unwrap(), Minutes::new(10));
/// assert_eq!(a.to_string(), "7 minutes");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Minutes(u32);

impl Minutes {
    /// Zero minutes: the time at every seeded origin.
    pub const ZERO: Minutes = Minutes(0);

    pub const fn new(mins: u32) -> Self {
        Minutes(mins)
    }

    /// Returns the number of minutes.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Add two travel times, failing on overflow.
    pub fn checked_add(self, other: Minutes) -> Result<Minutes, DomainError> {
        self.0
            .checked_add(other.0)
            .map(Minutes)
            .ok_or(DomainError::TimeOverflow)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes", self.0)
    }
}
