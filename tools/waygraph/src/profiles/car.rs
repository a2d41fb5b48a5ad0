//! Car routing profile - Tag semantics for automobile routing

use crate::profile_abi::Profile;
use crate::profiles::tag_lookup::TagLookup;

/// Highway classes open to motor vehicles
const DRIVABLE_HIGHWAYS: &[&str] = &[
    "motorway",
    "trunk",
    "primary",
    "secondary",
    "tertiary",
    "residential",
    "service",
    "unclassified",
];

pub struct CarProfile;

impl Profile for CarProfile {
    fn is_way_eligible(highway: &str, tags: &TagLookup<'_>) -> bool {
        if tags.is("motor_vehicle", "no") || tags.is("motorcar", "no") {
            return false;
        }

        DRIVABLE_HIGHWAYS.contains(&highway)
    }
}
