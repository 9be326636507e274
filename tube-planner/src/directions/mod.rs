//! Step-by-step directions for a planned trip.
//!
//! Turns a [`Route`] into numbered directives: consecutive rail edges on
//! one line collapse into a single "travel through stops" block, and each
//! interchange is a directive of its own.

use std::fmt;

use crate::domain::{Line, Minutes, Station};
use crate::graph::EdgeKind;
use crate::planner::Route;

/// A stop passed through during a travel block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopView {
    pub station: Station,
    pub elapsed: Minutes,
}

/// One numbered directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Start of the trip
    Begin { station: Station },
    /// Ride one line through a sequence of stops
    Travel { line: Line, stops: Vec<StopView> },
    /// Change line without leaving the station
    ChangeLine {
        station: Station,
        line: Line,
        elapsed: Minutes,
    },
    /// Walk to a nearby station
    Walk {
        from: Station,
        to: Station,
        elapsed: Minutes,
    },
    /// End of the trip
    Arrive { station: Station, elapsed: Minutes },
}

/// Directions for a trip, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directions {
    /// Start and destination are the same station
    AlreadyThere,
    /// Numbered steps, beginning with `Step::Begin` and ending with `Step::Arrive`
    Trip(Vec<Step>),
}

impl Directions {
    /// Build directions from a search result.
    ///
    /// `None` (start equals destination) yields [`Directions::AlreadyThere`].
    pub fn new(route: Option<&Route>) -> Self {
        let Some(route) = route else {
            return Directions::AlreadyThere;
        };

        let mut steps = vec![Step::Begin {
            station: route.origin().station.clone(),
        }];

        for (from, kind, to) in route.legs() {
            match kind {
                EdgeKind::Rail => {
                    let stop = StopView {
                        station: to.station.clone(),
                        elapsed: to.elapsed,
                    };
                    match steps.last_mut() {
                        Some(Step::Travel { line, stops }) if *line == to.line => stops.push(stop),
                        _ => steps.push(Step::Travel {
                            line: to.line.clone(),
                            stops: vec![stop],
                        }),
                    }
                }
                EdgeKind::LineInterchange => steps.push(Step::ChangeLine {
                    station: to.station.clone(),
                    line: to.line.clone(),
                    elapsed: to.elapsed,
                }),
                EdgeKind::StationInterchange => steps.push(Step::Walk {
                    from: from.station.clone(),
                    to: to.station.clone(),
                    elapsed: to.elapsed,
                }),
            }
        }

        let last = route.destination();
        steps.push(Step::Arrive {
            station: last.station.clone(),
            elapsed: last.elapsed,
        });
        Directions::Trip(steps)
    }

    /// Returns the steps, or an empty slice if no trip is needed.
    pub fn steps(&self) -> &[Step] {
        match self {
            Directions::AlreadyThere => &[],
            Directions::Trip(steps) => steps,
        }
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps = match self {
            Directions::AlreadyThere => return writeln!(f, "Already at destination!"),
            Directions::Trip(steps) => steps,
        };

        for (idx, step) in steps.iter().enumerate() {
            let n = idx + 1;
            match step {
                Step::Begin { station } => {
                    writeln!(f, "{n}) Begin journey at {station} station. ({})", Minutes::ZERO)?
                }
                Step::Travel { line, stops } => {
                    writeln!(f, "{n}) Travel on the {line} line, through station stops:")?;
                    for stop in stops {
                        writeln!(f, "- {} ({})", stop.station, stop.elapsed)?;
                    }
                }
                Step::ChangeLine {
                    station,
                    line,
                    elapsed,
                } => writeln!(
                    f,
                    "{n}) Get off at {station} and interchange to the {line} line. ({elapsed})"
                )?,
                Step::Walk { from, to, elapsed } => writeln!(
                    f,
                    "{n}) From {from}, interchange on foot to nearby {to} station. ({elapsed})"
                )?,
                Step::Arrive { station, elapsed } => {
                    writeln!(f, "{n}) Reach destination at {station} station. ({elapsed})")?
                }
            }
        }
        Ok(())
    }
}
