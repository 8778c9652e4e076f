//! End-to-end CLI tests using `assert_cmd`.
//!
//! These tests invoke the actual compiled binary against synthetic Plotly
//! HTML fixtures written to a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn cmd() -> Command {
    Command::cargo_bin("plotsplit").unwrap()
}

/// A minimal generated network plot: no edge or legend traces, a combined
/// node trace with two nodes "A" and "B".
fn two_node_fixture() -> String {
    let traces = serde_json::json!([{
        "hoverinfo": "text",
        "hovertext": ["hover A", "hover B"],
        "marker": {
            "color": [5, 10],
            "colorbar": {"title": "degree"},
            "colorscale": "Viridis",
        },
        "mode": "markers+text",
        "text": ["A", "B"],
        "x": [0, 1],
        "y": [0, 1],
        "type": "scatter",
    }]);
    let layout = serde_json::json!({
        "updatemenus": [{"buttons": [{"label": "placeholder"}]}],
        "annotations": [{"text": "Show Edges for:"}],
    });
    format!(
        "<html><body><div id=\"net\"></div><script>Plotly.newPlot(\"net\", {}, {}, {{\"responsive\":true}})</script></body></html>",
        traces, layout
    )
}

fn write_fixture(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("network.html");
    fs::write(&path, two_node_fixture()).unwrap();
    path
}

// ─── Help / version ─────────────────────────────────────────────────────

#[test]
fn test_help_shows_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("split"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn test_version_shows_name() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("plotsplit"));
}

#[test]
fn test_split_help() {
    cmd()
        .args(["split", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PATH"))
        .stdout(predicate::str::contains("--output"));
}

// ─── split ──────────────────────────────────────────────────────────────

#[test]
fn test_split_missing_file_fails() {
    let dir = tempdir().unwrap();
    cmd()
        .args(["split", dir.path().join("absent.html").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_split_file_without_plot_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plain.html");
    fs::write(&path, "<html><body>no plot</body></html>").unwrap();

    cmd()
        .args(["split", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plotly.newPlot"));
}

#[test]
fn test_split_two_node_plot() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir);

    cmd()
        .args(["split", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 traces"))
        .stdout(predicate::str::contains("Node trace has 2 nodes"))
        .stdout(predicate::str::contains("Now have 2 traces"));

    let rewritten = fs::read_to_string(&path).unwrap();

    // Dropdown: "All" plus one option per node
    assert!(rewritten.contains(r#""label":"All""#));
    assert!(rewritten.contains(r#""label":"A""#));
    assert!(rewritten.contains(r#""label":"B""#));
    // "A" option's visibility over the node segment
    assert!(rewritten.contains(r#""visible":[true,false]"#));
    assert!(rewritten.contains(r#""visible":[false,true]"#));
    // Shared color bounds from the original full color array
    assert!(rewritten.contains(r#""cmin":5"#));
    assert!(rewritten.contains(r#""cmax":10"#));
    // Caption relabeled
    assert!(rewritten.contains("Show Node:"));
    assert!(!rewritten.contains("Show Edges for:"));
    // Config text survives byte-identical
    assert!(rewritten.contains(r#"{"responsive":true}"#));
    // Surrounding markup untouched
    assert!(rewritten.starts_with("<html><body><div id=\"net\">"));
    assert!(rewritten.ends_with("</script></body></html>"));
}

#[test]
fn test_split_colorbar_appears_once() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir);

    cmd().args(["split", path.to_str().unwrap()]).assert().success();

    let rewritten = fs::read_to_string(&path).unwrap();
    assert_eq!(rewritten.matches(r#""colorbar""#).count(), 1);
}

#[test]
fn test_split_output_flag_leaves_input_untouched() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir);
    let out = dir.path().join("rewritten.html");

    cmd()
        .args([
            "split",
            path.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path).unwrap(), two_node_fixture());
    assert!(fs::read_to_string(&out).unwrap().contains(r#""label":"All""#));
}

#[test]
fn test_split_refuses_already_split_file() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir);

    cmd().args(["split", path.to_str().unwrap()]).assert().success();
    let first_pass = fs::read_to_string(&path).unwrap();

    cmd()
        .args(["split", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to split again"));

    // Second run must not have modified the file
    assert_eq!(fs::read_to_string(&path).unwrap(), first_pass);
}

// ─── inspect ────────────────────────────────────────────────────────────

#[test]
fn test_inspect_lists_traces() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir);

    cmd()
        .args(["inspect", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("net"))
        .stdout(predicate::str::contains("markers+text"))
        .stdout(predicate::str::contains("2 points"));

    // Inspection never modifies the file
    assert_eq!(fs::read_to_string(&path).unwrap(), two_node_fixture());
}

#[test]
fn test_inspect_warns_on_split_file() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir);

    cmd().args(["split", path.to_str().unwrap()]).assert().success();

    cmd()
        .args(["inspect", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("already contains per-node traces"));
}
