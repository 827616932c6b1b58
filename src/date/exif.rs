//! EXIF date-tag lookup

use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use exif::{In, Reader, Tag};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::trace;

/// Date tags recognized for capture-time extraction, in priority order
const DATE_TAGS: &[Tag] = &[Tag::DateTimeOriginal, Tag::DateTimeDigitized, Tag::DateTime];

/// Scan a file's EXIF data for a usable capture date.
///
/// `Ok(None)` means the file carries no EXIF container or no tag with a
/// well-formed value; only an I/O-level failure is an error.
pub fn date_from_exif(path: &Path) -> Result<Option<NaiveDateTime>> {
    let file = File::open(path).map_err(|e| Error::ExifRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut reader = BufReader::new(file);

    let exif = match Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(exif::Error::Io(e)) => {
            return Err(Error::ExifRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
        // Absent or unsupported EXIF container, not an error for us
        Err(_) => return Ok(None),
    };

    for tag in DATE_TAGS {
        if let Some(field) = exif.get_field(*tag, In::PRIMARY)
            && let Some(datetime) = parse_exif_datetime(&field.display_value().to_string())
        {
            trace!(?path, ?tag, "Found EXIF date");
            return Ok(Some(datetime));
        }
    }

    Ok(None)
}

/// Parse the fixed EXIF datetime format "YYYY:MM:DD HH:MM:SS".
///
/// Anything else is treated as malformed and skipped by the caller.
fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim().trim_matches('"');
    NaiveDateTime::parse_from_str(s, "%Y:%m:%d %H:%M:%S").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_exif_datetime() {
        let dt = parse_exif_datetime("2024:01:15 14:30:00").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.second(), 0);

        // display_value() wraps ASCII values in quotes
        let dt = parse_exif_datetime("\"2024:01:15 14:30:00\"").unwrap();
        assert_eq!(dt.year(), 2024);
    }

    #[test]
    fn test_malformed_values_rejected() {
        assert!(parse_exif_datetime("2024-01-15 14:30:00").is_none());
        assert!(parse_exif_datetime("2024:13:01 00:00:00").is_none());
        assert!(parse_exif_datetime("yesterday").is_none());
        assert!(parse_exif_datetime("").is_none());
    }
}
