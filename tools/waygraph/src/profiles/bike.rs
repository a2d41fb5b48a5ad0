//! Bicycle routing profile - Tag semantics for bicycle routing

use crate::profile_abi::Profile;
use crate::profiles::tag_lookup::TagLookup;

/// Highway classes open to bicycles
const BIKE_FRIENDLY_HIGHWAYS: &[&str] = &[
    "cycleway",
    "path",
    "residential",
    "living_street",
    "service",
    "track",
    "unclassified",
    "tertiary",
    "secondary",
    "primary",
];

pub struct BikeProfile;

impl Profile for BikeProfile {
    fn is_way_eligible(highway: &str, tags: &TagLookup<'_>) -> bool {
        if tags.is("bicycle", "no") {
            return false;
        }

        // Trunk and motorways - never for bikes
        if highway == "motorway" || highway == "trunk" {
            return false;
        }

        BIKE_FRIENDLY_HIGHWAYS.contains(&highway)
    }
}
