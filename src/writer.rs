//! Append-only CSV output
//!
//! The output file is opened in append mode and created on first use. The
//! header row is written exactly once, when the file does not yet exist;
//! every later invocation appends data rows only. Quoting of fields that
//! contain commas, quotes, or newlines is handled by the csv crate.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;

/// Append one record to the CSV file at `path`, creating it if absent
///
/// When the file is created by this call, `headers` is written as the
/// first row before the record. The existence check happens before the
/// open, so a file created empty by an earlier failed invocation will not
/// receive a second header; a crash between the header write and the row
/// write can leave a header-only file (the two writes are not atomic).
pub fn append_record(path: &Path, headers: &[String], record: &[String]) -> Result<()> {
    let file_existed = path.exists();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open output file {}", path.display()))?;

    // Flexible: row length is allowed to differ from header length
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(file);

    if !file_existed {
        writer
            .write_record(headers)
            .with_context(|| format!("Failed to write header row to {}", path.display()))?;
        log::debug!("Created {} and wrote header row", path.display());
    }

    writer
        .write_record(record)
        .with_context(|| format!("Failed to write data row to {}", path.display()))?;

    writer
        .flush()
        .with_context(|| format!("Failed to flush output file {}", path.display()))?;

    log::debug!("Appended {}-field row to {}", record.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn strings(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_write_creates_file_with_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output.csv");

        append_record(&path, &strings(&["Name", "Age"]), &strings(&["Alice", "30"])).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Name,Age\nAlice,30\n");
    }

    #[test]
    fn test_second_write_appends_without_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output.csv");
        let headers = strings(&["Name", "Age"]);

        append_record(&path, &headers, &strings(&["Alice", "30"])).unwrap();
        append_record(&path, &headers, &strings(&["Bob", "41"])).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Name,Age\nAlice,30\nBob,41\n");
    }

    #[test]
    fn test_existing_file_never_gains_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output.csv");

        std::fs::write(&path, "Name,Age\nAlice,30\n").unwrap();
        append_record(&path, &strings(&["Name", "Age"]), &strings(&["Bob", "41"])).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("Name,Age").count(), 1);
    }

    #[test]
    fn test_csv_significant_characters_are_quoted() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output.csv");

        append_record(
            &path,
            &strings(&["a", "b", "c"]),
            &strings(&["has,comma", "has\"quote", "plain"]),
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a,b,c\n\"has,comma\",\"has\"\"quote\",plain\n");
    }

    #[test]
    fn test_newline_fields_are_quoted() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output.csv");

        // Headers are written verbatim, so they can carry newlines too;
        // both rows must quote the field with the newline preserved.
        append_record(
            &path,
            &strings(&["multi\nheader", "b"]),
            &strings(&["line one\nline two", "plain"]),
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "\"multi\nheader\",b\n\"line one\nline two\",plain\n"
        );
    }

    #[test]
    fn test_empty_record_appends_empty_row() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output.csv");

        append_record(&path, &strings(&["Name"]), &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Name\n\n");
    }

    #[test]
    fn test_open_failure_is_contextualized() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing-dir").join("output.csv");

        let result = append_record(&path, &strings(&["Name"]), &strings(&["Alice"]));
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Failed to open output file"));
    }
}
