//! CLI argument parsing with clap

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Organize photos into year/month folders by capture date
///
/// Extracts the capture time from EXIF metadata, falling back to the file
/// modification time; files whose date cannot be determined go to the
/// No_Date_Found folder.
#[derive(Parser, Debug)]
#[command(name = "organize-photos")]
#[command(version, about, long_about = None)]
pub struct OrganizeArgs {
    /// Directory containing the photos to organize
    #[arg(short, long, default_value = ".")]
    pub source: PathBuf,

    /// Destination root for the year/month folders (defaults to the source)
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Show what would be done without moving any files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl OrganizeArgs {
    /// Convert the parsed arguments into a run configuration
    pub fn to_config(&self) -> Config {
        Config {
            source_dir: self.source.clone(),
            dest_dir: self.dest.clone().unwrap_or_else(|| self.source.clone()),
            dry_run: self.dry_run,
            verbose: self.verbose,
        }
    }
}

/// Rename month folders to the YYYY-MM-MonthName scheme
///
/// Recognizes names like `01`, `06-Jun` or `January01` and renames them
/// after asking which year to use.
#[derive(Parser, Debug)]
#[command(name = "rename-folders")]
#[command(version, about, long_about = None)]
pub struct RenameArgs {
    /// Directory whose subfolders are renamed (defaults to the current directory)
    #[arg(short = 'C', long)]
    pub dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dest_defaults_to_source() {
        let args = OrganizeArgs::parse_from(["organize-photos", "--source", "/photos"]);
        let config = args.to_config();
        assert_eq!(config.source_dir, PathBuf::from("/photos"));
        assert_eq!(config.dest_dir, PathBuf::from("/photos"));
        assert!(!config.dry_run);
    }

    #[test]
    fn test_explicit_dest() {
        let args = OrganizeArgs::parse_from([
            "organize-photos",
            "--source",
            "/photos",
            "--dest",
            "/sorted",
            "--dry-run",
        ]);
        let config = args.to_config();
        assert_eq!(config.dest_dir, PathBuf::from("/sorted"));
        assert!(config.dry_run);
    }
}
