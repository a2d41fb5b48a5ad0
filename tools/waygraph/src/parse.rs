//! Overpass JSON decoding
//!
//! Reads the `{"elements": [...]}` document returned by an Overpass
//! `[out:json]` query. Entries that are not usable nodes or ways are kept
//! as [`Element::Other`] so the builder can ignore them.

use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use waygraph_common::{Error, Result};

/// Tag map of an OSM element
pub type Tags = BTreeMap<String, String>;

/// Numbers and booleans are kept as their JSON text; null values are dropped.
fn tag_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn optional_tags<'de, D>(deserializer: D) -> std::result::Result<Option<Tags>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Value>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|map| {
        map.into_iter()
            .filter_map(|(key, value)| tag_value(value).map(|v| (key, v)))
            .collect()
    }))
}

/// `null` and missing tags both mean no tags
fn node_tags<'de, D>(deserializer: D) -> std::result::Result<Tags, D::Error>
where
    D: Deserializer<'de>,
{
    optional_tags(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Node {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, deserialize_with = "node_tags")]
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Way {
    pub id: i64,
    #[serde(default)]
    pub nodes: Vec<i64>,
    /// `None` when the element carried no tags at all
    #[serde(default, deserialize_with = "optional_tags")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Node(Node),
    Way(Way),
    /// Relations, areas, and anything that failed to decode
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct OverpassResponse {
    elements: Vec<serde_json::Value>,
}

/// Decoded elements plus the number of entries that could not be decoded
#[derive(Debug, Default)]
pub struct ParsedElements {
    pub elements: Vec<Element>,
    pub skipped: usize,
}

impl ParsedElements {
    fn from_values(values: Vec<serde_json::Value>) -> Self {
        let mut skipped = 0;
        let elements = values
            .into_iter()
            .map(|value| match serde_json::from_value::<Element>(value) {
                Ok(element) => element,
                Err(e) => {
                    debug!("Skipping malformed element: {e}");
                    skipped += 1;
                    Element::Other
                }
            })
            .collect();

        ParsedElements { elements, skipped }
    }
}

/// Parse an Overpass JSON document held in memory
pub fn parse_elements_str(json: &str) -> Result<ParsedElements> {
    let response: OverpassResponse =
        serde_json::from_str(json).map_err(|e| Error::Parse(e.to_string()))?;
    Ok(ParsedElements::from_values(response.elements))
}

/// Parse an Overpass JSON document from any reader
pub fn parse_elements_reader<R: Read>(reader: R) -> Result<ParsedElements> {
    let response: OverpassResponse =
        serde_json::from_reader(reader).map_err(|e| Error::Parse(e.to_string()))?;
    Ok(ParsedElements::from_values(response.elements))
}

/// Parse an Overpass JSON file
pub fn parse_elements_file<P: AsRef<Path>>(path: P) -> Result<ParsedElements> {
    let file = File::open(path.as_ref())?;
    let parsed = parse_elements_reader(BufReader::new(file))?;

    debug!(
        "Parsed {} elements from {} ({} skipped)",
        parsed.elements.len(),
        path.as_ref().display(),
        parsed.skipped
    );

    Ok(parsed)
}
