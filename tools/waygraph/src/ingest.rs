//! Overpass file to graph pipeline

use log::{info, warn};
use std::path::PathBuf;
use waygraph_common::{suggest_travel_mode, Result};

use crate::graph::{BuildStats, Graph};
use crate::parse::parse_elements_file;
use crate::profile_abi::TravelMode;

pub struct BuildConfig {
    /// Overpass `[out:json]` response
    pub input: PathBuf,
    /// Travel mode name, passed through as given
    pub travel_mode: String,
    /// Where to write the graph, if anywhere
    pub output: Option<PathBuf>,
}

pub struct BuildReport {
    pub graph: Graph,
    pub stats: BuildStats,
    pub elements_read: usize,
    pub elements_skipped: usize,
}

/// Decode the input, build the graph for the configured mode, and
/// optionally save it.
///
/// An unknown travel mode is not an error: the graph keeps its points and
/// gets no edges. A warning with a spelling suggestion is logged instead.
pub fn run_build(config: &BuildConfig) -> Result<BuildReport> {
    info!("Reading Overpass data: {}", config.input.display());
    let parsed = parse_elements_file(&config.input)?;

    let mode = TravelMode::parse(&config.travel_mode);
    if mode.is_none() {
        match suggest_travel_mode(&config.travel_mode) {
            Some(s) => warn!(
                "Unknown travel mode '{}' (did you mean '{s}'?); no ways will be admitted",
                config.travel_mode
            ),
            None => warn!(
                "Unknown travel mode '{}'; no ways will be admitted",
                config.travel_mode
            ),
        }
    }

    let (graph, stats) = Graph::from_elements(&parsed.elements, mode);

    info!(
        "Graph created with {} nodes and {} ways (filtered out {} ways)",
        stats.points_created,
        stats.paths_admitted(),
        stats.paths_filtered
    );
    if stats.edges_skipped > 0 {
        info!(
            "Skipped {} segments with endpoints missing from the input",
            stats.edges_skipped
        );
    }

    if let Some(output) = &config.output {
        graph.save(output)?;
        info!("Saved graph to {}", output.display());
    }

    Ok(BuildReport {
        graph,
        stats,
        elements_read: parsed.elements.len(),
        elements_skipped: parsed.skipped,
    })
}
