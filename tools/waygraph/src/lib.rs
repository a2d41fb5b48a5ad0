pub mod bbox;
pub mod cli;
pub mod geo;
pub mod graph;
pub mod ingest;
pub mod overpass;
pub mod parse;
pub mod profile_abi;
pub mod profiles;
pub mod request;

pub use bbox::{bounding_box, BoundingBox, Coordinate};
pub use geo::haversine_km;
pub use graph::{build_graph, BuildStats, Edge, Graph, Point};
pub use parse::{Element, Tags};
pub use profile_abi::TravelMode;
pub use profiles::{is_oneway, is_way_eligible, is_way_eligible_for};
pub use request::RouteRequest;
