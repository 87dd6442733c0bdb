//! End-to-end tests for the topo-mask binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const CYCLOPS_LOOK: &str = "1@1-2@0.5^0.35-3@0-4@0;1@4-2@0.5^0.75-3@1-4@0-5@180";

fn topo_mask() -> Command {
    Command::cargo_bin("topo-mask").expect("binary should build")
}

fn write_temp(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(file.path(), contents).expect("Failed to write temp file");
    file
}

#[test]
fn test_identify_ranks_exact_look_first() {
    topo_mask()
        .args(["identify", CYCLOPS_LOOK, "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rank\tid\tdisplay_name"))
        .stdout(predicate::str::contains("1\tcyclops\tCyclops\t1.5000"))
        .stdout(predicate::str::contains("2\timp\tImp\t1.4500"));
}

#[test]
fn test_identify_reads_stdin() {
    topo_mask()
        .arg("identify")
        .write_stdin(format!("{CYCLOPS_LOOK}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Cyclops"));
}

#[test]
fn test_identify_reads_file() {
    let file = write_temp(&format!("{CYCLOPS_LOOK}\n"));
    topo_mask()
        .args(["identify", "--file"])
        .arg(file.path())
        .args(["--limit", "1", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"cyclops\""))
        .stdout(predicate::str::contains("\"imp\"").not());
}

#[test]
fn test_identify_min_score_filters_everything() {
    topo_mask()
        .args(["identify", CYCLOPS_LOOK, "--min-score", "1.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No creature accepts"));
}

#[test]
fn test_identify_with_custom_catalog() {
    let catalog = write_temp(
        r#"{
            "version": "1.0.0",
            "created_at": "2026-01-01T00:00:00Z",
            "compatibility": [ { "a": 1, "b": 9, "factor": 1.0 } ],
            "creatures": [
                { "id": "lantern", "display_name": "Lantern Ghost", "configuration": "1@9-2@0.5^0.5-3@0" }
            ]
        }"#,
    );

    topo_mask()
        .args(["identify", "1@1-2@0.5^0.5-3@0", "--format", "tsv", "--catalog"])
        .arg(catalog.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1\tlantern\tLantern Ghost\t1.5000"));
}

#[test]
fn test_identify_missing_catalog_fails() {
    topo_mask()
        .args(["identify", "1@1", "--catalog", "/nonexistent/catalog.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_compare_identical_configurations() {
    topo_mask()
        .args([
            "compare",
            "1@1-2@0.5^0.5-3@0",
            "1@1-2@0.5^0.5-3@0",
            "--format",
            "tsv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("forward\t1.5000\t0\t1\ttrue"));
}

#[test]
fn test_compare_symmetric_reports_both_directions() {
    topo_mask()
        .args([
            "compare",
            "1@1-2@0.5^0.5-3@1-4@0",
            "1@1-2@0.5^0.5-3@0-4@180",
            "--symmetric",
            "--format",
            "tsv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("forward\t0.7500"))
        .stdout(predicate::str::contains("reverse\t1.5000"));
}

#[test]
fn test_compare_ignores_surrounding_whitespace() {
    topo_mask()
        .args([
            "compare",
            "1@1-2@0.5^0.5-3@1-4@0\n",
            "1@1-2@0.5^0.5-3@0-4@180\n",
            "--format",
            "tsv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("forward\t0.7500"));

    topo_mask()
        .args(["compare", "1@1", " cyclops\n", "--reference"])
        .assert()
        .success();
}

#[test]
fn test_compare_against_catalog_creature() {
    topo_mask()
        .args(["compare", CYCLOPS_LOOK, "cyclops", "--reference", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"best\": 1.5"));
}

#[test]
fn test_compare_unknown_creature_fails() {
    topo_mask()
        .args(["compare", "1@1", "no_such_creature", "--reference"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_inspect_normalizes_configuration() {
    topo_mask()
        .args(["inspect", "1@1-2@0.5^0.5-3@0-9@junk", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"normalized\": \"1@1-2@0.5^0.5-3@0-4@0\""))
        .stdout(predicate::str::contains("\"main_unit\": 0"));
}

#[test]
fn test_inspect_empty_text_shows_default_element() {
    topo_mask()
        .args(["inspect", "", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0\ttrue\t0\t0\t0\t0\ttrue\t-"));
}

#[test]
fn test_catalog_list() {
    topo_mask()
        .args(["catalog", "list", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("imp\tImp\t2\t6"))
        .stdout(predicate::str::contains("cyclops\tCyclops"));
}

#[test]
fn test_catalog_list_by_tag() {
    topo_mask()
        .args(["catalog", "list", "--tag", "flying", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gargoyle"))
        .stdout(predicate::str::contains("cyclops").not());
}

#[test]
fn test_catalog_show() {
    topo_mask()
        .args(["catalog", "show", "imp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creature: Imp"))
        .stdout(predicate::str::contains("horn"));
}

#[test]
fn test_catalog_show_unknown_fails() {
    topo_mask()
        .args(["catalog", "show", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Creature 'nobody' not found"));
}

#[test]
fn test_catalog_export_round_trips() {
    let output = NamedTempFile::new().expect("Failed to create temp file");

    topo_mask()
        .args(["catalog", "export", "--output"])
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 creatures"));

    let exported = std::fs::read_to_string(output.path()).unwrap();
    let catalog = topo_mask::CreatureCatalog::from_json(&exported).unwrap();
    assert_eq!(catalog.len(), 4);
    assert!(!catalog.compatibility.is_empty());
}
