//! Delimited-text and JSON projections of the activity log.

use std::path::Path;

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use canopy_core::error::{AppError, ErrorKind};
use canopy_core::result::AppResult;
use canopy_entity::activity::Activity;
use canopy_entity::record::RecordCategory;

/// Delimiter used when none, or a reserved one, is configured.
pub const DEFAULT_DELIMITER: char = ',';

/// Column headers of the delimited export, in order.
pub const EXPORT_COLUMNS: [&str; 5] = ["Action", "User", "Details", "Timestamp", "Category"];

/// Output format for activity exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Delimited text with a header row.
    #[default]
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

impl ExportFormat {
    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Renders activity records for download. Never mutates the log.
#[derive(Debug, Clone, Copy)]
pub struct ActivityExporter {
    delimiter: char,
}

impl ActivityExporter {
    /// Create an exporter using `delimiter` between fields.
    ///
    /// Quotes and line breaks cannot separate fields; they fall back to
    /// [`DEFAULT_DELIMITER`].
    pub fn new(delimiter: char) -> Self {
        if matches!(delimiter, '"' | '\r' | '\n') {
            warn!(?delimiter, "Reserved export delimiter, using ','");
            return Self {
                delimiter: DEFAULT_DELIMITER,
            };
        }
        Self { delimiter }
    }

    /// Render records in the requested format.
    pub fn render(&self, format: ExportFormat, records: &[Activity]) -> AppResult<String> {
        match format {
            ExportFormat::Csv => Ok(self.to_delimited(records)),
            ExportFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        }
    }

    /// Flat table: header row, then one row per record in display order.
    ///
    /// Fields containing the delimiter, quotes, or line breaks are quoted
    /// with embedded quotes doubled. Timestamps are RFC 3339 in UTC.
    pub fn to_delimited(&self, records: &[Activity]) -> String {
        let mut out = String::new();
        self.push_row(&mut out, EXPORT_COLUMNS);

        for record in records {
            let timestamp = record
                .timestamp()
                .to_rfc3339_opts(SecondsFormat::Secs, true);
            self.push_row(
                &mut out,
                [
                    record.action(),
                    record.user(),
                    record.details(),
                    timestamp.as_str(),
                    record.category().as_str(),
                ],
            );
        }

        out
    }

    /// Render and write the export to `path`. Returns the number of records.
    pub async fn write_to(
        &self,
        path: impl AsRef<Path>,
        format: ExportFormat,
        records: &[Activity],
    ) -> AppResult<usize> {
        let path = path.as_ref();
        let body = self.render(format, records)?;

        tokio::fs::write(path, body).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Io,
                format!("Failed to write export to '{}': {e}", path.display()),
                e,
            )
        })?;

        info!(
            path = %path.display(),
            count = records.len(),
            format = format.extension(),
            "Activity log exported"
        );
        Ok(records.len())
    }

    fn push_row<'a>(&self, out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                out.push(self.delimiter);
            }
            self.push_field(out, field);
        }
        out.push('\n');
    }

    fn push_field(&self, out: &mut String, field: &str) {
        let needs_quotes = field.contains(self.delimiter)
            || field.contains(['"', '\n', '\r'])
            || field.starts_with(' ')
            || field.ends_with(' ');

        if needs_quotes {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
}

impl Default for ActivityExporter {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_entity::activity::ActivityCategory;
    use chrono::{TimeZone, Utc};

    fn sample() -> Activity {
        let ts = Utc
            .with_ymd_and_hms(2026, 10, 17, 9, 30, 0)
            .single()
            .expect("valid time");
        Activity::at(
            ActivityCategory::Donation,
            "Donation Received",
            "James Miller",
            "250.00 USD, paid by \"card\"",
            ts,
        )
    }

    #[test]
    fn test_header_and_row() {
        let csv = ActivityExporter::default().to_delimited(&[sample()]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Action,User,Details,Timestamp,Category");
        assert_eq!(
            lines[1],
            "Donation Received,James Miller,\"250.00 USD, paid by \"\"card\"\"\",2026-10-17T09:30:00Z,donation"
        );
    }

    #[test]
    fn test_empty_log_exports_header_only() {
        let csv = ActivityExporter::default().to_delimited(&[]);
        assert_eq!(csv, "Action,User,Details,Timestamp,Category\n");
    }

    #[test]
    fn test_custom_delimiter_changes_quoting() {
        let csv = ActivityExporter::new(';').to_delimited(&[sample()]);
        let row = csv.lines().nth(1).expect("row");
        assert!(row.starts_with("Donation Received;James Miller;"));
        assert!(row.contains("\"250.00 USD, paid by \"\"card\"\"\""));
    }

    #[test]
    fn test_reserved_delimiter_falls_back_to_comma() {
        let record = Activity::at(ActivityCategory::Admin, "a\"b", "u", "d", Utc::now());
        let csv = ActivityExporter::new('"').to_delimited(&[record]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Action,User,Details,Timestamp,Category");
        assert!(lines[1].starts_with("\"a\"\"b\",u,d,"));
        assert!(lines[1].ends_with(",admin"));
    }

    #[test]
    fn test_json_render() {
        let json = ActivityExporter::default()
            .render(ExportFormat::Json, &[sample()])
            .expect("render");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(parsed[0]["action"], "Donation Received");
        assert_eq!(parsed[0]["type"], "donation");
    }

    #[tokio::test]
    async fn test_write_to_file() {
        let path = std::env::temp_dir().join(format!("canopy-export-{}.csv", std::process::id()));
        let written = ActivityExporter::default()
            .write_to(&path, ExportFormat::Csv, &[sample(), sample()])
            .await
            .expect("write");
        assert_eq!(written, 2);

        let body = tokio::fs::read_to_string(&path).await.expect("read back");
        assert_eq!(body.lines().count(), 3);
        let _ = tokio::fs::remove_file(&path).await;
    }
}
