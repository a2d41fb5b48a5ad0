use crate::geo::haversine_km;
use crate::parse::{Element, Node, Tags, Way};
use crate::profile_abi::TravelMode;
use crate::profiles::{is_oneway, is_way_eligible};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use waygraph_common::{Error, Result};

/// A located vertex, taken from a node element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tags: Tags,
}

impl From<&Node> for Point {
    fn from(node: &Node) -> Self {
        Point {
            id: node.id,
            lat: node.lat,
            lon: node.lon,
            tags: node.tags.clone(),
        }
    }
}

/// Directed edge derived from two consecutive nodes of a way
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: i64,
    pub to: i64,
    pub way_id: i64,
    pub distance_km: f64,
}

/// Counters collected while building. Callers decide whether to report them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Node elements inserted, duplicates included
    pub points_created: usize,
    pub paths_seen: usize,
    pub paths_filtered: usize,
    pub edges_created: usize,
    /// Consecutive pairs dropped because an endpoint had no node element
    pub edges_skipped: usize,
}

impl BuildStats {
    pub fn paths_admitted(&self) -> usize {
        self.paths_seen - self.paths_filtered
    }
}

/// Routable graph: points by id, and each point's outgoing edges in
/// insertion order. Parallel edges from different ways are kept.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Graph {
    points: FxHashMap<i64, Point>,
    edges: FxHashMap<i64, Vec<Edge>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    points: Vec<Point>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Build a graph for `mode` from a flat element list.
    ///
    /// Pass 1 inserts every node (a repeated id overwrites the earlier one).
    /// Pass 2 turns each eligible way into edges between consecutive nodes,
    /// in both directions unless the way is one-way. Pairs with an unknown
    /// endpoint are skipped individually. `mode = None` admits no way.
    pub fn from_elements(elements: &[Element], mode: Option<TravelMode>) -> (Graph, BuildStats) {
        let mut graph = Graph::default();
        let mut stats = BuildStats::default();

        // Pass 1: points
        for element in elements {
            if let Element::Node(node) = element {
                graph.points.insert(node.id, Point::from(node));
                graph.edges.insert(node.id, Vec::new());
                stats.points_created += 1;
            }
        }

        // Pass 2: edges from ways
        for element in elements {
            if let Element::Way(way) = element {
                stats.paths_seen += 1;

                if !is_way_eligible(way.tags.as_ref(), mode) {
                    stats.paths_filtered += 1;
                    continue;
                }

                graph.add_way(way, &mut stats);
            }
        }

        (graph, stats)
    }

    fn add_way(&mut self, way: &Way, stats: &mut BuildStats) {
        let oneway = is_oneway(way.tags.as_ref());

        for window in way.nodes.windows(2) {
            let (from, to) = (window[0], window[1]);

            let (Some(a), Some(b)) = (self.points.get(&from), self.points.get(&to)) else {
                stats.edges_skipped += 1;
                continue;
            };

            let distance_km = haversine_km(a.lat, a.lon, b.lat, b.lon);

            self.push_edge(Edge {
                from,
                to,
                way_id: way.id,
                distance_km,
            });
            stats.edges_created += 1;

            if oneway {
                continue;
            }

            self.push_edge(Edge {
                from: to,
                to: from,
                way_id: way.id,
                distance_km,
            });
            stats.edges_created += 1;
        }
    }

    fn push_edge(&mut self, edge: Edge) {
        self.edges.entry(edge.from).or_default().push(edge);
    }

    pub fn point(&self, id: i64) -> Option<&Point> {
        self.points.get(&id)
    }

    pub fn contains_point(&self, id: i64) -> bool {
        self.points.contains_key(&id)
    }

    /// Outgoing edges of `id`, in the order they were derived
    pub fn edges_from(&self, id: i64) -> &[Edge] {
        self.edges.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values().flatten()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Write the graph as JSON. Points are sorted by id; edges keep their
    /// per-point order.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut ids: Vec<i64> = self.points.keys().copied().collect();
        ids.sort_unstable();

        let points = ids.iter().filter_map(|id| self.points.get(id)).cloned().collect();
        let edges = ids
            .iter()
            .flat_map(|id| self.edges_from(*id).iter().copied())
            .collect();

        let serializable = SerializableGraph { points, edges };

        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, &serializable).map_err(|e| Error::Parse(e.to_string()))?;
        Ok(())
    }

    /// Load a graph written by [`Graph::save`], rejecting edges whose
    /// endpoints are not points of the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let serializable: SerializableGraph =
            serde_json::from_reader(reader).map_err(|e| Error::Parse(e.to_string()))?;

        let mut graph = Graph::default();
        for point in serializable.points {
            graph.edges.insert(point.id, Vec::new());
            graph.points.insert(point.id, point);
        }

        for edge in serializable.edges {
            if !graph.contains_point(edge.from) || !graph.contains_point(edge.to) {
                return Err(Error::Parse(format!(
                    "edge {} -> {} (way {}) references an unknown point",
                    edge.from, edge.to, edge.way_id
                )));
            }
            graph.push_edge(edge);
        }

        Ok(graph)
    }
}

/// Build a graph for a travel mode given by name.
///
/// Only `walking`, `bicycling` and `driving` are modes; any other string
/// yields a graph with every point and no edges.
pub fn build_graph(elements: &[Element], travel_mode: &str) -> (Graph, BuildStats) {
    Graph::from_elements(elements, TravelMode::parse(travel_mode))
}
