// Integration tests for `exosift run`.
// Run with: cargo test -p exosift-cli --test run_tests -- --nocapture

use std::path::PathBuf;
use std::process::Command;

fn exosift() -> Command {
    Command::new(env!("CARGO_BIN_EXE_exosift"))
}

fn write_catalog(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

const CATALOG: &str = "\
toi,orbper,trandur,trandept,tmag
101.01,5.1,2.3,1200,9.8
102.01,12.0,3.4,800,13.5
103.01,45.0,14.2,120,15.1
";

// ---------------------------------------------------------------------------
// run --json: totals and class counts
// ---------------------------------------------------------------------------

#[test]
fn run_reports_class_counts_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, "catalog.csv", CATALOG);

    let output = exosift()
        .args(["run", path.to_str().unwrap(), "--json"])
        .output()
        .expect("exosift run --json");

    assert!(output.status.success(), "exit code was {:?}", output.status);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    assert_eq!(report["total_rows"], 3);
    assert_eq!(report["class_counts"]["CP"], 1);
    assert_eq!(report["class_counts"]["PC"], 1);
    assert_eq!(report["class_counts"]["APC"], 1);
}

// ---------------------------------------------------------------------------
// run --output: augmented catalog lands on disk, rows in input order
// ---------------------------------------------------------------------------

#[test]
fn run_output_writes_augmented_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, "catalog.csv", CATALOG);
    let out_path = dir.path().join("scored.csv");

    let output = exosift()
        .args([
            "run",
            path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("exosift run --output");

    assert!(output.status.success());

    let content = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("toi,orbper,trandur,trandept,tmag,score,class")
    );
    assert_eq!(lines.next(), Some("101.01,5.1,2.3,1200,9.8,100,CP"));
    assert_eq!(lines.next(), Some("102.01,12.0,3.4,800,13.5,71,PC"));
    assert_eq!(lines.next(), Some("103.01,45.0,14.2,120,15.1,44.5,APC"));
}

// ---------------------------------------------------------------------------
// exit codes: the shell contract
// ---------------------------------------------------------------------------

#[test]
fn run_missing_file_exits_3_and_names_the_path() {
    let output = exosift()
        .args(["run", "no/such/catalog.csv"])
        .output()
        .expect("exosift run");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no/such/catalog.csv"), "stderr: {stderr}");
}

#[test]
fn run_unresolvable_schema_exits_4_with_all_missing_roles() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, "wrong.csv", "toi,orbper,trandur\n1.01,5.0,2.0\n");

    let output = exosift()
        .args(["run", path.to_str().unwrap()])
        .output()
        .expect("exosift run");

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("trandept"), "stderr: {stderr}");
    assert!(stderr.contains("tmag"), "stderr: {stderr}");
}

#[test]
fn run_bad_map_spec_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, "catalog.csv", CATALOG);

    let output = exosift()
        .args(["run", path.to_str().unwrap(), "--map", "orbital-period"])
        .output()
        .expect("exosift run --map");

    assert_eq!(output.status.code(), Some(2));
}

// ---------------------------------------------------------------------------
// --map: manual override redirects resolution
// ---------------------------------------------------------------------------

#[test]
fn run_map_override_redirects_a_role() {
    let dir = tempfile::tempdir().unwrap();
    // Without the override, "period_published" wins by table order.
    let path = write_catalog(
        &dir,
        "catalog.csv",
        "toi,period_published,period_fit,trandur,trandept,tmag\n\
         1.01,80.0,5.0,2.0,900,9.0\n",
    );
    let out_path = dir.path().join("scored.csv");

    let output = exosift()
        .args([
            "run",
            path.to_str().unwrap(),
            "--map",
            "orbper=period_fit",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("exosift run --map");

    assert!(output.status.success());
    let content = std::fs::read_to_string(&out_path).unwrap();
    // period_fit = 5.0 days: the period feature is met, score hits 100.
    assert!(content.contains("100,CP"), "content: {content}");
}
