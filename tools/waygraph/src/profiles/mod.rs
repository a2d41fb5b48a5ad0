//! Built-in routing profiles for different travel modes
//!
//! Each profile implements the tag semantics deciding whether a way can be
//! travelled in its mode. The shared checks (a `highway` key must exist,
//! `access=no|private` closes the way to everyone) run here before dispatch.

pub mod bike;
pub mod car;
pub mod foot;
pub mod tag_lookup;

pub use bike::BikeProfile;
pub use car::CarProfile;
pub use foot::FootProfile;
pub use tag_lookup::TagLookup;

use crate::parse::Tags;
use crate::profile_abi::{Profile, TravelMode};

/// Decide whether a way with `tags` can be travelled in `mode`.
///
/// `None` for either argument means ineligible: untagged ways are not
/// routable, and an unrecognised mode admits nothing.
pub fn is_way_eligible(tags: Option<&Tags>, mode: Option<TravelMode>) -> bool {
    let Some(tags) = tags else {
        return false;
    };
    let tags = TagLookup::new(tags);

    let Some(highway) = tags.get_str("highway") else {
        return false;
    };

    // Explicit access restrictions apply to every mode
    if tags.is_any("access", &["no", "private"]) {
        return false;
    }

    match mode {
        Some(TravelMode::Walking) => FootProfile::is_way_eligible(highway, &tags),
        Some(TravelMode::Bicycling) => BikeProfile::is_way_eligible(highway, &tags),
        Some(TravelMode::Driving) => CarProfile::is_way_eligible(highway, &tags),
        None => false,
    }
}

/// String-keyed variant of [`is_way_eligible`]; only the exact literals
/// `walking`, `bicycling` and `driving` name a mode.
pub fn is_way_eligible_for(tags: Option<&Tags>, travel_mode: &str) -> bool {
    is_way_eligible(tags, TravelMode::parse(travel_mode))
}

/// A way is one-way when `oneway` is `yes`, `true` or `1`.
pub fn is_oneway(tags: Option<&Tags>) -> bool {
    tags.is_some_and(|t| TagLookup::new(t).is_any("oneway", &["yes", "true", "1"]))
}
