//! Interactive photo organizer
//!
//! Confirms intent, then moves every image in the source directory into
//! `YYYY/YYYY-MM-MonthName` folders under the destination, with a
//! `No_Date_Found` bucket for files whose date cannot be determined.

use anyhow::Result;
use clap::Parser;
use photo_tidy::console::{self, Prompter, StdinPrompter, Theme};
use photo_tidy::organize::{FileOutcome, Organizer};
use photo_tidy::{OrganizeArgs, logging};
use tracing::info;

fn main() -> Result<()> {
    let args = OrganizeArgs::parse();
    let config = args.to_config();

    let log_path = logging::default_log_path("Organize");
    let _guard = logging::init(&log_path, config.verbose)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Photo organizer starting"
    );

    console::print_title("Photo Organizer");

    if !config.source_dir.exists() {
        console::print_error(&format!(
            "Source folder '{}' does not exist.",
            config.source_dir.display()
        ));
        std::process::exit(1);
    }

    println!("This will organize photos in: {}", config.source_dir.display());
    println!("Photos will be MOVED (not copied) into year/month folders.");
    println!("Make sure you have a backup of your photos before proceeding!");
    println!();

    let mut prompter = StdinPrompter;
    if !prompter.confirm("Do you want to proceed? (yes/no): ")? {
        println!("Operation cancelled.");
        return Ok(());
    }

    console::print_separator();

    let dry_run = config.dry_run;
    let dest_root = config.dest_dir.clone();
    let mut organizer = Organizer::new(config);
    let reports = organizer.run()?;

    for report in &reports {
        let source = report.source.display().to_string();
        let dest = report
            .destination
            .as_ref()
            .map(|p| p.strip_prefix(&dest_root).unwrap_or(p).display().to_string())
            .unwrap_or_default();

        match report.outcome {
            FileOutcome::Organized => {
                console::print_result("✓", Theme::SUCCESS, &source, &format!("→ {dest}"));
            }
            FileOutcome::Undated => {
                console::print_result("⊘", Theme::WARNING, &source, &format!("→ {dest}"));
            }
            FileOutcome::Failed => {
                let reason = report.error.as_deref().unwrap_or("unknown error");
                console::print_result("✗", Theme::ERROR, &source, reason);
            }
        }
    }

    console::print_separator();
    println!("Organization complete!");

    let stats = organizer.stats();
    console::print_stat(
        "Photos organized by date",
        &stats.organized.to_string(),
        Theme::SUCCESS,
    );
    console::print_stat(
        "Photos without date info",
        &stats.undated.to_string(),
        Theme::WARNING,
    );
    console::print_stat(
        "Errors encountered",
        &stats.failed.to_string(),
        Theme::ERROR,
    );

    if dry_run {
        console::print_hint("Dry run: no files were moved.");
    }

    console::print_separator();
    console::print_hint(&format!("Log file: {}", log_path.display()));

    info!(log_file = %log_path.display(), "Run complete");

    Ok(())
}
