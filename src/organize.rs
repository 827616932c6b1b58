//! Photo organizing pipeline
//!
//! Scans the immediate children of the source directory, extracts a
//! capture date per image, and moves each file into
//! `dest/YYYY/YYYY-MM-MonthName/`, or into the unknown-date bucket when no
//! date can be determined. Files are moved one by one; a failure on one
//! file never aborts the rest of the batch.

use crate::config::{Config, NO_DATE_FOLDER};
use crate::date::{self, DateOutcome, ExtractedDate};
use crate::error::{Error, Result};
use crate::months;
use chrono::{Datelike, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// Result of processing a single file
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Source file path
    pub source: PathBuf,
    /// Where the file went (or would go, on a dry run)
    pub destination: Option<PathBuf>,
    /// Extracted date, if any
    pub date: Option<ExtractedDate>,
    /// What happened
    pub outcome: FileOutcome,
    /// Error message when the outcome is `Failed`
    pub error: Option<String>,
}

/// What happened to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Moved into a year/month folder
    Organized,
    /// Moved into the unknown-date bucket
    Undated,
    /// Move failed; the file stays where it was
    Failed,
}

/// Per-run counters
#[derive(Debug, Default, Clone)]
pub struct OrganizeStats {
    pub total: usize,
    pub organized: usize,
    pub undated: usize,
    pub failed: usize,
}

impl OrganizeStats {
    pub fn summary(&self) -> String {
        format!(
            "Total: {}, Organized: {}, Undated: {}, Failed: {}",
            self.total, self.organized, self.undated, self.failed
        )
    }
}

/// Organizes the image files of one source directory
pub struct Organizer {
    config: Config,
    stats: OrganizeStats,
}

impl Organizer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            stats: OrganizeStats::default(),
        }
    }

    /// Run the pipeline over every image in the source directory
    pub fn run(&mut self) -> Result<Vec<FileReport>> {
        info!(
            source = %self.config.source_dir.display(),
            dest = %self.config.dest_dir.display(),
            dry_run = self.config.dry_run,
            "Scanning source directory"
        );

        let files = self.collect_files()?;
        info!(count = files.len(), "Found image files");

        self.stats.total = files.len();

        let mut reports = Vec::with_capacity(files.len());
        for path in files {
            let report = self.process_file(&path);
            match report.outcome {
                FileOutcome::Organized => self.stats.organized += 1,
                FileOutcome::Undated => self.stats.undated += 1,
                FileOutcome::Failed => self.stats.failed += 1,
            }
            reports.push(report);
        }

        info!("{}", self.stats.summary());
        Ok(reports)
    }

    /// Get the counters accumulated by [`run`](Self::run)
    pub fn stats(&self) -> &OrganizeStats {
        &self.stats
    }

    /// Immediate children of the source directory with a supported extension.
    ///
    /// Subdirectories and files outside the allow-list are skipped without
    /// being counted.
    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.config.source_dir)
            .min_depth(1)
            .max_depth(1)
        {
            let entry = entry?;
            let path = entry.path();
            if path.is_file()
                && let Some(ext) = path.extension().and_then(|e| e.to_str())
                && self.config.is_image(ext)
            {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    fn process_file(&self, path: &Path) -> FileReport {
        debug!(?path, "Processing file");

        match date::extract(path) {
            DateOutcome::Found(date) => {
                let dir = month_dir(&self.config.dest_dir, &date.timestamp);
                self.place(path, &dir, Some(date))
            }
            DateOutcome::NotFound => {
                debug!(?path, "No capture date, routing to unknown-date bucket");
                self.place(path, &self.config.dest_dir.join(NO_DATE_FOLDER), None)
            }
            DateOutcome::ReadError(reason) => {
                warn!(?path, %reason, "Unreadable file, routing to unknown-date bucket");
                self.place(path, &self.config.dest_dir.join(NO_DATE_FOLDER), None)
            }
        }
    }

    /// Move one file into `dir`, creating the folder on demand and
    /// suffixing the file name until it does not collide.
    fn place(&self, path: &Path, dir: &Path, date: Option<ExtractedDate>) -> FileReport {
        let outcome = if date.is_some() {
            FileOutcome::Organized
        } else {
            FileOutcome::Undated
        };

        match self.try_place(path, dir) {
            Ok(dest) => {
                info!(
                    source = ?path,
                    destination = ?dest,
                    date_source = ?date.map(|d| d.source),
                    "Placed file"
                );
                FileReport {
                    source: path.to_path_buf(),
                    destination: Some(dest),
                    date,
                    outcome,
                    error: None,
                }
            }
            Err(e) => {
                error!(?path, error = %e, "Failed to move file");
                FileReport {
                    source: path.to_path_buf(),
                    destination: None,
                    date,
                    outcome: FileOutcome::Failed,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    fn try_place(&self, path: &Path, dir: &Path) -> Result<PathBuf> {
        let filename = path
            .file_name()
            .ok_or_else(|| Error::InvalidFilename(path.to_path_buf()))?;
        let dest = resolve_collision(dir.join(filename))?;

        if !self.config.dry_run {
            fs::create_dir_all(dir)?;
            move_file(path, &dest)?;
        }

        Ok(dest)
    }
}

/// Destination folder for a timestamp: `base/YYYY/YYYY-MM-MonthName`
pub fn month_dir(base: &Path, timestamp: &NaiveDateTime) -> PathBuf {
    let year = timestamp.year();
    let month = timestamp.month();
    let name = months::by_number(month).map(|m| m.name).unwrap_or("Unknown");
    base.join(year.to_string())
        .join(format!("{year}-{month:02}-{name}"))
}

/// Resolve a destination collision by appending `_1`, `_2`, ... before the
/// extension until the name is free. Never overwrites.
fn resolve_collision(path: PathBuf) -> Result<PathBuf> {
    if !path.exists() {
        return Ok(path);
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::InvalidFilename(path.clone()))?
        .to_string();

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    let parent = path.parent().map(|p| p.to_path_buf()).unwrap_or_default();

    for i in 1..10_000 {
        let candidate = parent.join(format!("{stem}_{i}{extension}"));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(Error::NameExhausted(path))
}

/// Move a file, falling back to copy+delete across filesystems
fn move_file(source: &Path, dest: &Path) -> Result<()> {
    if fs::rename(source, dest).is_ok() {
        return Ok(());
    }

    fs::copy(source, dest)?;

    // Carry the mtime over; a plain rename would have kept it
    if let Ok(metadata) = fs::metadata(source)
        && let Ok(mtime) = metadata.modified()
    {
        let _ = filetime::set_file_mtime(dest, filetime::FileTime::from_system_time(mtime));
    }

    fs::remove_file(source)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::DateSource;
    use chrono::NaiveDate;
    use std::fs::File;
    use std::io::Write;

    fn config(source: &Path, dest: &Path) -> Config {
        Config {
            source_dir: source.to_path_buf(),
            dest_dir: dest.to_path_buf(),
            dry_run: false,
            verbose: false,
        }
    }

    fn write_file(path: &Path, contents: &[u8]) {
        File::create(path).unwrap().write_all(contents).unwrap();
    }

    /// Minimal little-endian TIFF carrying a single DateTime tag in IFD0
    fn tiff_with_datetime(datetime: &str) -> Vec<u8> {
        assert_eq!(datetime.len(), 19);
        let mut buf = vec![
            0x49, 0x49, 0x2A, 0x00, // "II" + TIFF magic
            0x08, 0x00, 0x00, 0x00, // offset of IFD0
            0x01, 0x00, // one entry
            0x32, 0x01, // tag 0x0132 DateTime
            0x02, 0x00, // type ASCII
            0x14, 0x00, 0x00, 0x00, // count 20
            0x1A, 0x00, 0x00, 0x00, // value offset
            0x00, 0x00, 0x00, 0x00, // no next IFD
        ];
        buf.extend_from_slice(datetime.as_bytes());
        buf.push(0);
        buf
    }

    #[test]
    fn test_month_dir_format() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(
            month_dir(Path::new("/sorted"), &ts),
            PathBuf::from("/sorted/2024/2024-01-January")
        );

        let ts = NaiveDate::from_ymd_opt(1999, 12, 31)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            month_dir(Path::new("/sorted"), &ts),
            PathBuf::from("/sorted/1999/1999-12-December")
        );
    }

    #[test]
    fn test_resolve_collision_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("photo.jpg");

        // No collision: the path comes back untouched
        assert_eq!(resolve_collision(base.clone()).unwrap(), base);

        write_file(&base, b"a");
        assert_eq!(
            resolve_collision(base.clone()).unwrap(),
            dir.path().join("photo_1.jpg")
        );

        write_file(&dir.path().join("photo_1.jpg"), b"b");
        assert_eq!(
            resolve_collision(base).unwrap(),
            dir.path().join("photo_2.jpg")
        );
    }

    #[test]
    fn test_run_sorts_exif_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in");
        let dest = dir.path().join("out");
        fs::create_dir_all(&source).unwrap();

        write_file(
            &source.join("shot.tif"),
            &tiff_with_datetime("2024:01:15 14:30:00"),
        );

        let mut organizer = Organizer::new(config(&source, &dest));
        let reports = organizer.run().unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].outcome, FileOutcome::Organized);
        assert_eq!(
            reports[0].destination.as_deref(),
            Some(dest.join("2024/2024-01-January/shot.tif").as_path())
        );
        assert!(dest.join("2024/2024-01-January/shot.tif").exists());
        assert!(!source.join("shot.tif").exists());
        assert_eq!(organizer.stats().organized, 1);
    }

    #[test]
    fn test_run_skips_non_images_and_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in");
        fs::create_dir_all(source.join("album")).unwrap();

        write_file(&source.join("notes.txt"), b"not a photo");
        write_file(&source.join("pic.jpg"), b"junk bytes");

        let mut organizer = Organizer::new(config(&source, &source));
        let reports = organizer.run().unwrap();

        // Only pic.jpg is considered; it has no EXIF so mtime applies
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].outcome, FileOutcome::Organized);
        assert_eq!(
            reports[0].date.map(|d| d.source),
            Some(DateSource::FileModified)
        );
        assert!(source.join("notes.txt").exists());
        assert!(source.join("album").exists());
        assert_eq!(organizer.stats().total, 1);
    }

    #[test]
    fn test_uppercase_extension_recognized() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in");
        fs::create_dir_all(&source).unwrap();

        write_file(&source.join("IMG_0001.CR2"), b"raw-ish bytes");

        let mut organizer = Organizer::new(config(&source, &source));
        let reports = organizer.run().unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].outcome, FileOutcome::Organized);
    }

    #[test]
    fn test_second_run_suffixes_instead_of_overwriting() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in");
        let dest = dir.path().join("out");
        fs::create_dir_all(&source).unwrap();

        let tiff = tiff_with_datetime("2024:01:15 14:30:00");
        write_file(&source.join("shot.tif"), &tiff);
        Organizer::new(config(&source, &dest)).run().unwrap();

        // Same name arrives again
        write_file(&source.join("shot.tif"), &tiff);
        let reports = Organizer::new(config(&source, &dest)).run().unwrap();

        assert_eq!(reports[0].outcome, FileOutcome::Organized);
        assert!(dest.join("2024/2024-01-January/shot.tif").exists());
        assert!(dest.join("2024/2024-01-January/shot_1.tif").exists());
    }

    #[test]
    fn test_dry_run_moves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in");
        let dest = dir.path().join("out");
        fs::create_dir_all(&source).unwrap();

        write_file(
            &source.join("shot.tif"),
            &tiff_with_datetime("2024:01:15 14:30:00"),
        );

        let mut cfg = config(&source, &dest);
        cfg.dry_run = true;
        let mut organizer = Organizer::new(cfg);
        let reports = organizer.run().unwrap();

        assert_eq!(reports[0].outcome, FileOutcome::Organized);
        assert!(source.join("shot.tif").exists());
        assert!(!dest.exists());
        assert_eq!(organizer.stats().organized, 1);
    }

    #[test]
    fn test_undated_file_goes_to_bucket() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in");
        fs::create_dir_all(&source).unwrap();

        let path = source.join("mystery.jpg");
        write_file(&path, b"junk");

        // Drive the placement directly with no date
        let organizer = Organizer::new(config(&source, &source));
        let report = organizer.place(&path, &source.join(NO_DATE_FOLDER), None);

        assert_eq!(report.outcome, FileOutcome::Undated);
        assert!(source.join(NO_DATE_FOLDER).join("mystery.jpg").exists());
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_source_file_is_failed() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path();

        let organizer = Organizer::new(config(source, source));
        let report = organizer.place(
            &source.join("gone.jpg"),
            &source.join(NO_DATE_FOLDER),
            None,
        );

        assert_eq!(report.outcome, FileOutcome::Failed);
        assert!(report.error.is_some());
    }
}
