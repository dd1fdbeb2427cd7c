//! Spot list export.
//!
//! Renders spots as CSV. Every data field is wrapped in double quotes; quotes
//! inside a field are written as-is and will break the row for strict readers.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::CSV_HEADERS;
use crate::error::Result;

/// A DX spot as displayed on the dashboard.
///
/// Fields hold the already formatted text; nothing is validated here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    /// Spot time as displayed
    #[serde(default)]
    pub formatted_time: String,
    /// Frequency as displayed
    #[serde(default)]
    pub formatted_freq: String,
    /// Spotted station
    #[serde(default)]
    pub callsign: String,
    /// Reporting station
    #[serde(default)]
    pub spotter: String,
    /// Free-text comment
    #[serde(default)]
    pub comment: String,
    /// Band label
    #[serde(default)]
    pub band: String,
}

impl Spot {
    /// Fields in CSV column order.
    #[must_use]
    pub fn fields(&self) -> [&str; 6] {
        [
            self.formatted_time.as_str(),
            self.formatted_freq.as_str(),
            self.callsign.as_str(),
            self.spotter.as_str(),
            self.comment.as_str(),
            self.band.as_str(),
        ]
    }

    fn csv_row(&self) -> String {
        self.fields()
            .iter()
            .map(|cell| format!("\"{}\"", cell))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Render spots as CSV text.
///
/// The first line is the unquoted header row; each spot follows on its own
/// line. No trailing newline.
#[must_use]
pub fn export_to_csv(spots: &[Spot]) -> String {
    let mut lines = Vec::with_capacity(spots.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    lines.extend(spots.iter().map(Spot::csv_row));
    lines.join("\n")
}

/// Write spots as CSV to a file, creating parent directories as needed.
pub fn write_csv(path: &Path, spots: &[Spot]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, export_to_csv(spots))?;
    tracing::debug!(path = %path.display(), count = spots.len(), "Exported spots");
    Ok(())
}
