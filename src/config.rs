//! Runtime configuration for the photo organizer

use std::path::PathBuf;

/// Image extensions the organizer will consider, lowercase.
///
/// Files with any other extension are ignored entirely and never counted
/// as errors.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "tiff", "tif", "bmp", "gif", "webp", "heic", "raw", "cr2", "nef", "arw",
];

/// Folder receiving files whose capture date could not be determined
pub const NO_DATE_FOLDER: &str = "No_Date_Found";

/// Configuration for one organizer run, assembled from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for image files (immediate children only)
    pub source_dir: PathBuf,

    /// Root directory receiving the year/month folders
    pub dest_dir: PathBuf,

    /// Report what would happen without moving anything
    pub dry_run: bool,

    /// Verbose logging
    pub verbose: bool,
}

impl Config {
    /// Check whether a file extension is on the image allow-list
    pub fn is_image(&self, ext: &str) -> bool {
        let ext_lower = ext.to_ascii_lowercase();
        IMAGE_EXTENSIONS.iter().any(|e| *e == ext_lower)
    }
}
