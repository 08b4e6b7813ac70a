//! Per-file metadata record and its two encodings (JSON element, CSV row).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

/// CSV header line; field order matches [`FileRecord::to_csv_row`].
pub const CSV_HEADER: &str = "Name,DirectoryName,CreationTimeUtc,LastWriteTimeUtc";

/// Metadata for one file. Timestamps the platform cannot supply are `None` and are
/// omitted from the JSON encoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_name: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_utc"
    )]
    pub creation_time_utc: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_utc"
    )]
    pub last_write_time_utc: Option<DateTime<Utc>>,
}

impl FileRecord {
    /// Build a record for `path` from already-read metadata.
    pub fn from_metadata(path: &Path, meta: &Metadata) -> Self {
        FileRecord {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            directory_name: path.parent().map(|p| p.display().to_string()),
            creation_time_utc: meta.created().ok().map(to_utc),
            last_write_time_utc: meta.modified().ok().map(to_utc),
        }
    }

    /// One JSON object, no trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// One CSV row in [`CSV_HEADER`] order, no trailing newline.
    pub fn to_csv_row(&self) -> String {
        let created = self.creation_time_utc.map(format_utc).unwrap_or_default();
        let written = self.last_write_time_utc.map(format_utc).unwrap_or_default();
        [
            csv_field(&self.name),
            csv_field(self.directory_name.as_deref().unwrap_or("")),
            csv_field(&created),
            csv_field(&written),
        ]
        .join(",")
    }
}

fn to_utc(t: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(t)
}

/// RFC 3339, `Z` suffix, fractional seconds only when present.
pub fn format_utc(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn serialize_utc<S: Serializer>(t: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error> {
    match t {
        Some(t) => s.serialize_str(&format_utc(*t)),
        None => s.serialize_none(),
    }
}

/// Quote a field only when it would otherwise break the row.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
