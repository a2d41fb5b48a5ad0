//! CLI commands for waygraph

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::bbox::{bounding_box, Coordinate};
use crate::ingest::{run_build, BuildConfig};
use crate::request::RouteRequest;

#[derive(Parser)]
#[command(name = "waygraph")]
#[command(about = "Build travel-mode routing graphs from Overpass map data", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a routing graph from an Overpass JSON response
    Build {
        /// Overpass `[out:json]` response file
        #[arg(short, long)]
        input: PathBuf,

        /// Travel mode: walking, bicycling or driving
        #[arg(short, long)]
        mode: String,

        /// Write the graph as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the padded bounding box around two coordinates
    Bbox {
        /// Origin coordinate (lat,lon)
        #[arg(long)]
        from: String,
        /// Destination coordinate (lat,lon)
        #[arg(long)]
        to: String,
    },

    /// Print the Overpass query for a trip
    Query {
        /// Origin coordinate (lat,lon)
        #[arg(long, required_unless_present = "request")]
        from: Option<String>,
        /// Destination coordinate (lat,lon)
        #[arg(long, required_unless_present = "request")]
        to: Option<String>,
        /// Travel mode: walking, bicycling or driving
        #[arg(short, long, required_unless_present = "request")]
        mode: Option<String>,
        /// Route request JSON file instead of --from/--to/--mode
        #[arg(long, conflicts_with_all = ["from", "to", "mode"])]
        request: Option<PathBuf>,
    },
}

/// Parse `lat,lon`
pub fn parse_coord(s: &str) -> Result<Coordinate> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        bail!("Coordinate must be in format 'lat,lon', got '{s}'");
    }
    let lat = parts[0]
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid latitude in '{s}'"))?;
    let lon = parts[1]
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid longitude in '{s}'"))?;
    Ok(Coordinate::new(lat, lon))
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Build {
                input,
                mode,
                output,
            } => {
                let config = BuildConfig {
                    input,
                    travel_mode: mode,
                    output,
                };
                let report = run_build(&config).with_context(|| {
                    format!("Failed to build graph from {}", config.input.display())
                })?;

                println!("Travel mode:      {}", config.travel_mode);
                println!("Elements read:    {}", report.elements_read);
                println!("Elements skipped: {}", report.elements_skipped);
                println!("Points:           {}", report.graph.point_count());
                println!(
                    "Ways:             {} admitted, {} filtered",
                    report.stats.paths_admitted(),
                    report.stats.paths_filtered
                );
                println!("Edges:            {}", report.graph.edge_count());
            }
            Commands::Bbox { from, to } => {
                let origin = parse_coord(&from)?;
                let destination = parse_coord(&to)?;
                let bbox = bounding_box(Some(&origin), Some(&destination))?;
                println!("{bbox}");
            }
            Commands::Query {
                from,
                to,
                mode,
                request,
            } => {
                let query = match request {
                    Some(path) => RouteRequest::from_file(&path)
                        .and_then(|r| r.overpass_query())
                        .with_context(|| format!("Invalid route request {}", path.display()))?,
                    None => {
                        let origin = parse_coord(from.as_deref().unwrap_or_default())?;
                        let destination = parse_coord(to.as_deref().unwrap_or_default())?;
                        RouteRequest::new(origin, destination, mode.as_deref().unwrap_or_default())
                            .overpass_query()?
                    }
                };
                print!("{query}");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(
            parse_coord("43.65, -79.38").unwrap(),
            Coordinate::new(43.65, -79.38)
        );
        assert!(parse_coord("43.65").is_err());
        assert!(parse_coord("43.65,-79.38,1").is_err());
        assert!(parse_coord("north,-79.38").is_err());
    }

    #[test]
    fn test_parse_build_args() {
        let cli = Cli::try_parse_from([
            "waygraph", "build", "--input", "data.json", "--mode", "walking",
        ])
        .unwrap();
        match cli.command {
            Commands::Build { mode, output, .. } => {
                assert_eq!(mode, "walking");
                assert!(output.is_none());
            }
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn test_query_requires_request_or_coordinates() {
        assert!(Cli::try_parse_from(["waygraph", "query"]).is_err());
        assert!(Cli::try_parse_from(["waygraph", "query", "--request", "r.json"]).is_ok());
        assert!(Cli::try_parse_from([
            "waygraph", "query", "--request", "r.json", "--mode", "driving"
        ])
        .is_err());
    }
}
