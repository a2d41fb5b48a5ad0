//! Pedestrian routing profile - Tag semantics for walking

use crate::profile_abi::Profile;
use crate::profiles::tag_lookup::TagLookup;

/// Highway classes a pedestrian may use
const WALKABLE_HIGHWAYS: &[&str] = &[
    // Dedicated pedestrian infrastructure
    "footway",
    "path",
    "pedestrian",
    "steps",
    "sidewalk",
    "crossing",
    // Roads, usually with sidewalks
    "residential",
    "living_street",
    "service",
    "track",
    "unclassified",
    "tertiary",
    "secondary",
    "primary",
];

pub struct FootProfile;

impl Profile for FootProfile {
    fn is_way_eligible(highway: &str, tags: &TagLookup<'_>) -> bool {
        if tags.is("foot", "no") {
            return false;
        }

        WALKABLE_HIGHWAYS.contains(&highway)
    }
}
