//! Station and line name types.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// The name of a physical station, e.g. "Queen's Park".
///
/// Station names are free text (spaces and punctuation are common) but
/// must not be empty. Two vertices at the same `Station` on different
/// lines are the same physical place.
///
/// # Examples
///
/// ```
/// use tube_planner::domain::Station;
///
/// let qp = Station::new("Queen's Park").unwrap();
/// assert_eq!(qp.as_str(), "Queen's Park");
///
/// assert!(Station::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Station(String);

impl Station {
    /// Create a station name, rejecting the empty string.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyName("station"));
        }
        Ok(Station(name))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Station {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Station::new(value)
    }
}

impl From<Station> for String {
    fn from(station: Station) -> Self {
        station.0
    }
}

impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The name of a transit line, e.g. "Bakerloo".
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Line(String);

impl Line {
    /// Create a line name, rejecting the empty string.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyName("line"));
        }
        Ok(Line(name))
    }

    /// Returns the line name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Line {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Line::new(value)
    }
}

impl From<Line> for String {
    fn from(line: Line) -> Self {
        line.0
    }
}

impl Borrow<str> for Line {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({})", self.0)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_accepts_free_text() {
        assert!(Station::new("Bond Street").is_ok());
        assert!(Station::new("Queen's Park").is_ok());
        assert!(Station::new("Heathrow Terminals 2 & 3").is_ok());
        assert!(Station::new("X").is_ok());
    }

    #[test]
    fn empty_names_rejected() {
        assert_eq!(Station::new(""), Err(DomainError::EmptyName("station")));
        assert_eq!(Line::new(""), Err(DomainError::EmptyName("line")));
    }

    #[test]
    fn display_and_debug() {
        let station = Station::new("Paddington").unwrap();
        assert_eq!(format!("{}", station), "Paddington");
        assert_eq!(format!("{:?}", station), "Station(Paddington)");

        let line = Line::new("Elizabeth").unwrap();
        assert_eq!(format!("{}", line), "Elizabeth");
        assert_eq!(format!("{:?}", line), "Line(Elizabeth)");
    }

    #[test]
    fn names_are_case_sensitive() {
        let a = Station::new("Bank").unwrap();
        let b = Station::new("bank").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn deserialize_rejects_empty() {
        let ok: Result<Station, _> = serde_json::from_str(r#""Oxford Circus""#);
        assert_eq!(ok.unwrap().as_str(), "Oxford Circus");

        let err: Result<Line, _> = serde_json::from_str(r#""""#);
        assert!(err.is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty name is accepted and returned unchanged
        #[test]
        fn roundtrip(s in ".{1,40}") {
            let station = Station::new(s.clone()).unwrap();
            prop_assert_eq!(station.as_str(), s.as_str());
        }

        /// Serialising then deserialising preserves the name
        #[test]
        fn serde_roundtrip(s in "[A-Za-z' &]{1,30}") {
            let line = Line::new(s).unwrap();
            let json = serde_json::to_string(&line).unwrap();
            let back: Line = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, line);
        }
    }
}
