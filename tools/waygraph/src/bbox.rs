//! Padded bounding box around an origin and a destination

use serde::{Deserialize, Serialize};
use std::fmt;
use waygraph_common::{Error, Result};

/// Margin added on every side of the box, in degrees
pub const BBOX_PADDING_DEG: f64 = 0.05;

/// WGS84 coordinate as sent by clients (`{"latitude": .., "longitude": ..}`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Rectangle in Overpass order: south, west, north, east
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.south, self.west, self.north, self.east)
    }
}

/// Smallest box containing both coordinates, padded by [`BBOX_PADDING_DEG`].
pub fn bounding_box(
    origin: Option<&Coordinate>,
    destination: Option<&Coordinate>,
) -> Result<BoundingBox> {
    let (Some(origin), Some(destination)) = (origin, destination) else {
        return Err(Error::InvalidInput("invalid coordinates".to_string()));
    };

    let min_lon = origin.longitude.min(destination.longitude) - BBOX_PADDING_DEG;
    let max_lon = origin.longitude.max(destination.longitude) + BBOX_PADDING_DEG;
    let min_lat = origin.latitude.min(destination.latitude) - BBOX_PADDING_DEG;
    let max_lat = origin.latitude.max(destination.latitude) + BBOX_PADDING_DEG;

    Ok(BoundingBox {
        south: min_lat,
        west: min_lon,
        north: max_lat,
        east: max_lon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_scarborough_to_downtown() {
        let origin = Coordinate::new(43.76, -79.20);
        let destination = Coordinate::new(43.65, -79.38);

        let bbox = bounding_box(Some(&origin), Some(&destination)).unwrap();

        assert_abs_diff_eq!(bbox.south, 43.60, epsilon = 1e-9);
        assert_abs_diff_eq!(bbox.west, -79.43, epsilon = 1e-9);
        assert_abs_diff_eq!(bbox.north, 43.81, epsilon = 1e-9);
        assert_abs_diff_eq!(bbox.east, -79.15, epsilon = 1e-9);
    }

    #[test]
    fn test_order_independent() {
        let a = Coordinate::new(43.762812, -79.2000279);
        let b = Coordinate::new(43.6544382, -79.3806994);

        assert_eq!(
            bounding_box(Some(&a), Some(&b)).unwrap(),
            bounding_box(Some(&b), Some(&a)).unwrap()
        );
    }

    #[test]
    fn test_order_is_south_west_north_east() {
        let p = Coordinate::new(1.0, 2.0);
        let bbox = bounding_box(Some(&p), Some(&p)).unwrap();
        let BoundingBox {
            south: s,
            west: w,
            north: n,
            east: e,
        } = bbox;

        assert_abs_diff_eq!(s, 0.95, epsilon = 1e-12);
        assert_abs_diff_eq!(w, 1.95, epsilon = 1e-12);
        assert_abs_diff_eq!(n, 1.05, epsilon = 1e-12);
        assert_abs_diff_eq!(e, 2.05, epsilon = 1e-12);
        assert!(s < n && w < e);
    }

    #[test]
    fn test_missing_coordinate_is_invalid_input() {
        let p = Coordinate::new(43.7, -79.4);

        assert!(matches!(bounding_box(None, Some(&p)), Err(Error::InvalidInput(_))));
        assert!(matches!(bounding_box(Some(&p), None), Err(Error::InvalidInput(_))));
        assert!(matches!(bounding_box(None, None), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_display() {
        let bbox = BoundingBox {
            south: 43.5,
            west: -79.5,
            north: 43.75,
            east: -79.25,
        };
        assert_eq!(bbox.to_string(), "43.5,-79.5,43.75,-79.25");
    }
}
