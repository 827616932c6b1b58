//! Capture-date extraction
//!
//! Tries EXIF metadata first, then the file's modification time. The
//! outcome keeps "no date found" and "file unreadable" distinct so the
//! organizer can log them differently while routing both to the
//! unknown-date bucket.

pub mod exif;

use chrono::{DateTime, Local, NaiveDateTime};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Where an extracted timestamp came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    /// Embedded EXIF metadata
    Exif,
    /// File system modification time
    FileModified,
}

/// A capture timestamp together with its provenance
#[derive(Debug, Clone, Copy)]
pub struct ExtractedDate {
    pub timestamp: NaiveDateTime,
    pub source: DateSource,
}

/// Outcome of a capture-date lookup
#[derive(Debug, Clone)]
pub enum DateOutcome {
    /// A usable timestamp was found
    Found(ExtractedDate),
    /// The file is readable but no date could be determined
    NotFound,
    /// The file could not be read at all
    ReadError(String),
}

/// Extract a best-effort capture date for a file.
///
/// EXIF date tags win over the modification time; a file without a usable
/// tag falls back to its mtime, which succeeds for any stat-able file.
pub fn extract(path: &Path) -> DateOutcome {
    match exif::date_from_exif(path) {
        Ok(Some(timestamp)) => {
            debug!(?path, %timestamp, "Extracted date from EXIF");
            return DateOutcome::Found(ExtractedDate {
                timestamp,
                source: DateSource::Exif,
            });
        }
        Ok(None) => {
            debug!(?path, "No EXIF date, falling back to modification time");
        }
        Err(e) => {
            warn!(?path, error = %e, "Cannot read file for date extraction");
            return DateOutcome::ReadError(e.to_string());
        }
    }

    match fs::metadata(path).and_then(|m| m.modified()) {
        Ok(modified) => {
            let timestamp = DateTime::<Local>::from(modified).naive_local();
            DateOutcome::Found(ExtractedDate {
                timestamp,
                source: DateSource::FileModified,
            })
        }
        Err(e) => {
            warn!(?path, error = %e, "Modification time unavailable");
            DateOutcome::NotFound
        }
    }
}
