use assert_cmd::Command;
use predicates::prelude::*;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/toronto_sample.json");

fn waygraph() -> Command {
    Command::cargo_bin("waygraph").expect("binary built")
}

#[test]
fn test_build_prints_summary() {
    waygraph()
        .args(["build", "--input", FIXTURE, "--mode", "walking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Points:           6"))
        .stdout(predicate::str::contains("Edges:            6"));
}

#[test]
fn test_build_writes_graph() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("graph.json");

    waygraph()
        .args(["build", "--input", FIXTURE, "--mode", "driving", "--output"])
        .arg(&output)
        .assert()
        .success();

    let graph = waygraph::Graph::load(&output).unwrap();
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_build_unknown_mode_warns() {
    waygraph()
        .env("RUST_LOG", "warn")
        .args(["build", "--input", FIXTURE, "--mode", "walkng"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edges:            0"))
        .stderr(predicate::str::contains("did you mean 'walking'"));
}

#[test]
fn test_build_missing_input_fails() {
    waygraph()
        .args(["build", "--input", "/nonexistent/overpass.json", "--mode", "walking"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to build graph"));
}

#[test]
fn test_bbox() {
    waygraph()
        .args(["bbox", "--from", "1.5,2.5", "--to", "1.25,2.25"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1.2"));
}

#[test]
fn test_query_from_request_file() {
    let dir = tempfile::tempdir().unwrap();
    let request = dir.path().join("request.json");
    std::fs::write(
        &request,
        r#"{"origin": {"location": {"latitude": 43.762812, "longitude": -79.2000279}},
            "destination": {"location": {"latitude": 43.6544382, "longitude": -79.3806994}},
            "travelMode": "bicycling"}"#,
    )
    .unwrap();

    waygraph()
        .arg("query")
        .arg("--request")
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("[out:json];"))
        .stdout(predicate::str::contains("yes|designated|permissive"));
}

#[test]
fn test_query_unknown_mode_fails() {
    waygraph()
        .args(["query", "--from", "43.7,-79.2", "--to", "43.6,-79.4", "--mode", "drivng"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean 'driving'"));
}

#[test]
fn test_query_from_coordinates() {
    waygraph()
        .args(["query", "--from", "43.7,-79.2", "--to", "43.6,-79.4", "--mode", "driving"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[out:json];"))
        .stdout(predicate::str::contains("motorway|trunk"))
        .stdout(predicate::str::ends_with("out body;\n"));
}
