//! JSON readers for map datasets and calibration tables.

use super::Sample;
use crate::error::{Result, SweepmapError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Decode a map dataset from a JSON array of samples.
pub fn parse_samples(json: &str) -> Result<Vec<Sample>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a map dataset file.
pub fn load_samples(path: &Path) -> Result<Vec<Sample>> {
    let samples: Vec<Sample> = serde_json::from_reader(open(path)?)?;
    tracing::debug!("Read {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Decode an injection or feedback table from a JSON array of numbers.
pub fn parse_calibration_values(json: &str) -> Result<Vec<f64>> {
    Ok(serde_json::from_str(json)?)
}

/// Read an injection or feedback table file.
pub fn load_calibration_values(path: &Path) -> Result<Vec<f64>> {
    Ok(serde_json::from_reader(open(path)?)?)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| SweepmapError::file_open(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sample_records() {
        let json = r#"[
            {"x_index": 0, "y_index": 1, "value": 2.5, "x_variable": 10.0, "y_variable": -3.0},
            {"x_index": 1, "y_index": 1, "value": 4.0, "x_variable": 11.0, "y_variable": -3.0}
        ]"#;
        let samples = parse_samples(json).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].y_index, 1);
        assert_eq!(samples[1].x_variable, 11.0);
    }

    #[test]
    fn rejects_negative_index() {
        let json = r#"[{"x_index": -1, "y_index": 0, "value": 1.0, "x_variable": 0, "y_variable": 0}]"#;
        assert!(matches!(parse_samples(json), Err(SweepmapError::Json(_))));
    }

    #[test]
    fn rejects_missing_field() {
        let json = r#"[{"x_index": 0, "y_index": 0, "x_variable": 0, "y_variable": 0}]"#;
        assert!(parse_samples(json).is_err());
    }

    #[test]
    fn parses_calibration_table() {
        let values = parse_calibration_values("[0.5, 1.25, 3]").unwrap();
        assert_eq!(values, vec![0.5, 1.25, 3.0]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_samples(Path::new("/nonexistent/map.json")).unwrap_err();
        assert!(matches!(err, SweepmapError::FileOpen { .. }));
        assert!(err.to_string().contains("/nonexistent/map.json"));
    }
}
