//! Profile interface - shared contract between the graph builder and the
//! per-mode tag rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use waygraph_common::Error;

use crate::profiles::tag_lookup::TagLookup;

/// Travel mode a graph is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walking,
    Bicycling,
    Driving,
}

impl TravelMode {
    pub fn all() -> &'static [TravelMode] {
        &[TravelMode::Walking, TravelMode::Bicycling, TravelMode::Driving]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Driving => "driving",
        }
    }

    /// Parse the exact literal mode name. Anything else is `None`.
    pub fn parse(s: &str) -> Option<TravelMode> {
        match s {
            "walking" => Some(TravelMode::Walking),
            "bicycling" => Some(TravelMode::Bicycling),
            "driving" => Some(TravelMode::Driving),
            _ => None,
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TravelMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TravelMode::parse(s).ok_or_else(|| Error::unknown_travel_mode(s))
    }
}

/// Mode-specific tag semantics.
///
/// `highway` is passed in already resolved; the shared `access` check has
/// already run by the time a profile is consulted.
pub trait Profile {
    fn is_way_eligible(highway: &str, tags: &TagLookup<'_>) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for mode in TravelMode::all() {
            assert_eq!(TravelMode::parse(mode.name()), Some(*mode));
            assert_eq!(mode.to_string(), mode.name());
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(TravelMode::parse("Walking"), None);
        assert_eq!(TravelMode::parse(" driving"), None);
        assert_eq!(TravelMode::parse("transit"), None);
        assert_eq!(TravelMode::parse(""), None);
    }

    #[test]
    fn test_from_str_error_has_suggestion() {
        let err = "drivng".parse::<TravelMode>().unwrap_err();
        assert!(err.to_string().contains("did you mean 'driving'"));
        assert_eq!("bicycling".parse::<TravelMode>().unwrap(), TravelMode::Bicycling);
    }
}
