//! CSV serialization of formatted export rows.

use anyhow::{Context, Result};
use std::path::Path;

use crate::row::{ColumnSchema, ExportRow};

/// Write the header row and all data rows to `path`.
///
/// The file is created if absent and truncated if it exists.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_csv(path: &Path, schema: ColumnSchema, rows: &[ExportRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;

    writer
        .write_record(schema.headers())
        .context("Failed to write CSV header")?;

    for row in rows {
        writer
            .write_record(row.to_record(schema))
            .context("Failed to write CSV row")?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush output file {}", path.display()))?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_row(id: u64) -> ExportRow {
        ExportRow {
            date: NaiveDate::from_ymd_opt(2016, 3, 4).unwrap(),
            client: "Acme Corp".to_string(),
            project: "Website".to_string(),
            task: "Development".to_string(),
            notes: "Fixed \"the\" bug, twice".to_string(),
            hours: 1.06,
            hours_rounded: 1.25,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            created_on: "2016-03-04T17:30:00Z".to_string(),
            updated_on: "2016-03-05T09:00:00Z".to_string(),
            harvest_id: id,
            project_id: 7,
            user_id: 11,
            project_hourly_rate: Some(125.0),
            task_id: 2,
            client_id: 3,
        }
    }

    #[test]
    fn test_round_trip_full_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![sample_row(401), sample_row(402)];

        write_csv(&path, ColumnSchema::Full, &rows).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(headers, ColumnSchema::Full.headers());

        let records: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 2);

        // Text fields survive quoting, numeric fields compare numerically
        assert_eq!(&records[0][4], "Fixed \"the\" bug, twice");
        assert!((records[0][5].parse::<f64>().unwrap() - 1.06).abs() < f64::EPSILON);
        assert!((records[0][6].parse::<f64>().unwrap() - 1.25).abs() < f64::EPSILON);
        assert_eq!(&records[0][11], "401");
        assert_eq!(&records[1][11], "402");
    }

    #[test]
    fn test_round_trip_minimal_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_csv(&path, ColumnSchema::Minimal, &[sample_row(401)]).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap().len(),
            ColumnSchema::Minimal.headers().len()
        );
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "2016-03-04");
        assert_eq!(&record[1], "Acme Corp");
        assert_eq!(&record[7], "Lovelace");
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale content\nwith lines\nand more lines\n").unwrap();

        write_csv(&path, ColumnSchema::Minimal, &[sample_row(401)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale content"));
        assert_eq!(content.lines().count(), 2); // header + one row
    }
}
