//! Route request model
//!
//! Mirrors the payload clients send:
//! `{"origin": {"location": {...}}, "destination": {"location": {...}}, "travelMode": "driving"}`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use waygraph_common::{Error, Result};

use crate::bbox::{bounding_box, BoundingBox, Coordinate};
use crate::overpass::overpass_query;
use crate::profile_abi::TravelMode;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub location: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    #[serde(default)]
    pub origin: Option<Place>,
    #[serde(default)]
    pub destination: Option<Place>,
    pub travel_mode: String,
}

impl RouteRequest {
    pub fn new(origin: Coordinate, destination: Coordinate, travel_mode: &str) -> Self {
        Self {
            origin: Some(Place { location: origin }),
            destination: Some(Place {
                location: destination,
            }),
            travel_mode: travel_mode.to_string(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Parse(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Padded box around origin and destination
    pub fn bounding_box(&self) -> Result<BoundingBox> {
        bounding_box(
            self.origin.as_ref().map(|p| &p.location),
            self.destination.as_ref().map(|p| &p.location),
        )
    }

    /// The requested mode; unknown names are `InvalidInput`
    pub fn travel_mode(&self) -> Result<TravelMode> {
        self.travel_mode.parse()
    }

    /// Overpass QL fetching the candidate ways for this request
    pub fn overpass_query(&self) -> Result<String> {
        let bbox = self.bounding_box()?;
        let mode = self.travel_mode()?;
        Ok(overpass_query(&bbox, mode))
    }
}
