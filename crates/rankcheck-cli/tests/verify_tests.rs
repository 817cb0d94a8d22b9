//! Integration tests for the verify command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn rankcheck_cmd() -> Command {
    Command::cargo_bin("rankcheck").unwrap()
}

/// Canonical path graph 0 -> 1 -> 2 plus a candidate score file.
fn setup_path_graph(candidate: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let graph = dir.path().join("graph_out.txt");
    let scores = dir.path().join("candidate.txt");
    fs::write(&graph, "3\t2\n0\t1\n1\t2\n").unwrap();
    fs::write(&scores, candidate).unwrap();
    (dir, graph, scores)
}

#[test]
fn test_verify_accepts_matching_scores() {
    // Converged scores for the path graph at damping 0.85.
    let (_dir, graph, candidate) = setup_path_graph("0.184417\n0.341171\n0.474412\n");

    rankcheck_cmd()
        .arg("verify")
        .arg(&graph)
        .arg(&candidate)
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph:           3 nodes, 2 edges"))
        .stdout(predicate::str::contains("Verification passed: 3 values"));
}

#[test]
fn test_verify_detects_mismatch() {
    let (_dir, graph, candidate) = setup_path_graph("0.184417\n0.5\n0.474412\n");

    rankcheck_cmd()
        .arg("verify")
        .arg(&graph)
        .arg(&candidate)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("index 1 diverges"));
}

#[test]
fn test_verify_tolerance_flag_loosens_the_bound() {
    // Two-decimal scores are off by a few thousandths: outside the
    // default tolerance, inside a hundredth.
    let (_dir, graph, candidate) = setup_path_graph("0.18\n0.34\n0.47\n");

    rankcheck_cmd()
        .arg("verify")
        .arg(&graph)
        .arg(&candidate)
        .assert()
        .failure()
        .code(4);

    rankcheck_cmd()
        .arg("verify")
        .arg(&graph)
        .arg(&candidate)
        .arg("--tolerance")
        .arg("0.01")
        .assert()
        .success()
        .stdout(predicate::str::contains("Verification passed"));
}

#[test]
fn test_verify_rejects_nan_tolerance() {
    let (_dir, graph, candidate) = setup_path_graph("0.184417\n0.341171\n0.474412\n");

    rankcheck_cmd()
        .arg("verify")
        .arg(&graph)
        .arg(&candidate)
        .arg("--tolerance")
        .arg("NaN")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("tolerance must be finite"));
}

#[test]
fn test_verify_short_candidate() {
    let (_dir, graph, candidate) = setup_path_graph("0.184417\n0.341171\n");

    rankcheck_cmd()
        .arg("verify")
        .arg(&graph)
        .arg(&candidate)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("has 2 entries"));
}

#[test]
fn test_verify_long_candidate() {
    let (_dir, graph, candidate) =
        setup_path_graph("0.184417\n0.341171\n0.474412\n0.474412\n");

    rankcheck_cmd()
        .arg("verify")
        .arg(&graph)
        .arg(&candidate)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_verify_malformed_candidate() {
    let (_dir, graph, candidate) = setup_path_graph("0.184417\noops\n0.474412\n");

    rankcheck_cmd()
        .arg("verify")
        .arg(&graph)
        .arg(&candidate)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("malformed line"));
}

#[test]
fn test_verify_missing_graph() {
    let dir = TempDir::new().unwrap();
    let candidate = dir.path().join("candidate.txt");
    fs::write(&candidate, "0.5\n").unwrap();

    rankcheck_cmd()
        .arg("verify")
        .arg(dir.path().join("absent.txt"))
        .arg(&candidate)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("file not found"));
}
