//! Overpass QL query text for each travel mode
//!
//! Queries select the candidate ways inside a bounding box, recurse down to
//! their nodes (`(._;>;);`) and request full bodies as JSON, which is the
//! shape [`crate::parse`] decodes.

use crate::bbox::BoundingBox;
use crate::profile_abi::TravelMode;

/// Way filters per mode. These pre-select data server-side; the profiles
/// still make the final eligibility decision.
fn way_filters(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Driving => {
            r#"["highway"]["highway"~"motorway|trunk|primary|secondary|tertiary|residential|service"]"#
        }
        TravelMode::Bicycling => r#"["highway"]["bicycle"~"yes|designated|permissive"]"#,
        TravelMode::Walking => {
            r#"["highway"~"footway|path|pedestrian|steps|track|residential|service"]"#
        }
    }
}

/// Render the query for `mode` restricted to `bbox`
pub fn overpass_query(bbox: &BoundingBox, mode: TravelMode) -> String {
    format!(
        "[out:json];\n(\n  way\n    {filters}\n    ({bbox});\n);\n(._;>;);\nout body;\n",
        filters = way_filters(mode),
        bbox = bbox,
    )
}
