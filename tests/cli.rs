use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn sweepmap() -> Command {
    Command::cargo_bin("sweepmap").unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// 3 x 2 map with value `x + 10 * y`.
fn small_map(dir: &Path) -> PathBuf {
    let mut samples = Vec::new();
    for y in 0..2 {
        for x in 0..3 {
            samples.push(format!(
                r#"{{"x_index": {x}, "y_index": {y}, "value": {}, "x_variable": {}, "y_variable": {}}}"#,
                x + 10 * y,
                x as f64 * 0.5,
                y as f64 * 0.25
            ));
        }
    }
    write(dir, "map.json", &format!("[{}]", samples.join(",")))
}

#[test]
fn summary_reports_bounds() {
    let dir = TempDir::new().unwrap();
    let map = small_map(dir.path());

    sweepmap()
        .arg("summary")
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::contains("grid: 3 x 2 (x 0..=2, y 0..=1)"))
        .stdout(predicate::str::contains("values: 0 ..= 12"))
        .stdout(predicate::str::contains("normalization: Inclusive"));
}

#[test]
fn cell_prints_value_and_color() {
    let dir = TempDir::new().unwrap();
    let map = small_map(dir.path());

    sweepmap()
        .args(["cell", map.to_str().unwrap(), "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("value: 12"))
        .stdout(predicate::str::contains("fraction: 1.0000"))
        .stdout(predicate::str::contains("color: #ff0000 (Hue)"));
}

#[test]
fn legacy_normalization_leaves_last_column_uncolored() {
    let dir = TempDir::new().unwrap();
    let map = small_map(dir.path());

    sweepmap()
        .args(["cell", map.to_str().unwrap(), "2", "1", "--legacy-normalization"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color: none"));
}

#[test]
fn cell_outside_grid_fails() {
    let dir = TempDir::new().unwrap();
    let map = small_map(dir.path());

    sweepmap()
        .args(["cell", map.to_str().unwrap(), "5", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No cell at (5, 5)"));
}

#[test]
fn incomplete_map_is_rejected() {
    let dir = TempDir::new().unwrap();
    let map = write(
        dir.path(),
        "holes.json",
        r#"[{"x_index": 0, "y_index": 0, "value": 1, "x_variable": 0, "y_variable": 0},
            {"x_index": 1, "y_index": 1, "value": 2, "x_variable": 1, "y_variable": 1}]"#,
    );

    sweepmap()
        .arg("summary")
        .arg(&map)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn missing_map_file_fails() {
    sweepmap()
        .args(["summary", "/nonexistent/map.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/map.json"));
}

#[test]
fn zoom_converts_pixels_to_bins() {
    sweepmap()
        .args(["--preset", "physics", "zoom", "100", "300", "--from", "0", "--to", "999999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pixels: 100..300\n"))
        .stdout(predicate::str::contains("time: 38350..=442449"));
}

#[test]
fn zoom_repairs_selection_outside_plot() {
    sweepmap()
        .args(["zoom", "10", "700", "--from", "0", "--to", "999999", "--preset", "physics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pixels: 81..576 (corrected)"))
        .stdout(predicate::str::contains("time: 0..=999999"));
}

#[test]
fn zoom_rejects_reversed_window() {
    sweepmap()
        .args(["zoom", "60", "100", "--from", "10", "--to", "5"])
        .assert()
        .failure();
}

#[test]
fn layout_file_overrides_preset() {
    let dir = TempDir::new().unwrap();
    let layout = write(
        dir.path(),
        "layout.json",
        r#"{
            "map": {"x_offset": 0, "y_offset": 0, "scale": 1, "limits": "grid"},
            "time_series": {"left_offset": 0, "width": 100, "height": 10, "bin_size": 10}
        }"#,
    );

    sweepmap()
        .args(["zoom", "0", "50", "--from", "0", "--to", "999", "--layout"])
        .arg(&layout)
        .assert()
        .success()
        .stdout(predicate::str::contains("time: 0..=499"));
}

#[test]
fn locate_with_fixed_physics_axes() {
    sweepmap()
        .args(["--preset", "physics", "locate", "153", "146"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cell: 100, 100"));

    sweepmap()
        .args(["--preset", "physics", "locate", "0", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cell: 0, 0"));
}

#[test]
fn locate_prints_physical_values() {
    let dir = TempDir::new().unwrap();
    let injection = write(dir.path(), "injection.json", "[0.0, 12.345, 20.0]");
    let feedback = write(dir.path(), "feedback.json", "[0.1, 0.25]");

    sweepmap()
        .args(["--preset", "physics", "locate", "54", "47", "--injection"])
        .arg(&injection)
        .arg("--feedback")
        .arg(&feedback)
        .assert()
        .success()
        .stdout(predicate::str::contains("injection 12.3 (1), feedback 0.25 (1)"));
}

#[test]
fn locate_uses_grid_limits_from_map() {
    let dir = TempDir::new().unwrap();
    let map = small_map(dir.path());

    sweepmap()
        .args(["locate", "105", "500", "--map"])
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::contains("cell: 1, 1"));

    sweepmap()
        .args(["locate", "105", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no map is loaded"));
}

#[test]
fn window_marks_center_and_reports_partial() {
    let dir = TempDir::new().unwrap();
    let map = small_map(dir.path());

    sweepmap()
        .args(["window", map.to_str().unwrap(), "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("origin: 0, 0 size: 3 x 2 (partial)"))
        .stdout(predicate::str::contains("[11]"))
        .stdout(predicate::str::contains("image: 30 x 20 px at 10 px per cell"));
}

#[test]
fn sparse_map_fails_with_missing_cell() {
    let dir = TempDir::new().unwrap();
    let map = write(
        dir.path(),
        "sparse.json",
        r#"[{"x_index": 0, "y_index": 0, "value": 1, "x_variable": 0, "y_variable": 0},
            {"x_index": 4000000000, "y_index": 4000000000, "value": 2, "x_variable": 0, "y_variable": 0}]"#,
    );

    sweepmap()
        .arg("summary")
        .arg(&map)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no sample at (0, 1)"));
}

#[test]
fn zoom_snaps_to_sample_interval() {
    sweepmap()
        .args(["zoom", "100", "200", "--from", "0", "--to", "999", "--interval", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("time: 150..=489"));

    sweepmap()
        .args(["zoom", "100", "200", "--from", "0", "--to", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("time: 158..=481"));
}

#[test]
fn log_file_receives_debug_output() {
    let dir = TempDir::new().unwrap();
    let map = small_map(dir.path());
    let log = dir.path().join("sweepmap.log");

    sweepmap()
        .arg("--log")
        .arg(&log)
        .arg("summary")
        .arg(&map)
        .assert()
        .success();

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting sweepmap"));
    assert!(contents.contains("Aggregated 6 samples"));
}
