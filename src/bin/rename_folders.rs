//! Interactive folder renamer
//!
//! Renames month-named subdirectories of the target directory to the
//! `YYYY-MM-MonthName` scheme after asking which year to use.

use anyhow::Result;
use clap::Parser;
use photo_tidy::console::{self, Prompter, StdinPrompter, Theme};
use photo_tidy::rename::{self, RenameOutcome};
use photo_tidy::{RenameArgs, logging};
use tracing::info;

fn main() -> Result<()> {
    let args = RenameArgs::parse();

    let log_path = logging::default_log_path("Rename");
    let _guard = logging::init(&log_path, args.verbose)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Folder renamer starting"
    );

    let root = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    console::print_title("Folder Date Renamer");
    println!(
        "This will rename folders in {} to the YYYY-MM-Month format.",
        root.display()
    );
    println!();

    let names = rename::list_subdirs(&root)?;
    if names.is_empty() {
        println!("No folders found in {}.", root.display());
        return Ok(());
    }

    println!("Found {} folder(s):", names.len());
    for name in &names {
        println!("  - {name}");
    }

    let (plans, unrecognized) = rename::build_plans(&names);

    println!();
    println!("Parsing folder names:");
    for plan in &plans {
        console::print_result(
            "✓",
            Theme::SUCCESS,
            &plan.old_name,
            &format!(
                "-> will become YYYY-{:02}-{}",
                plan.month.number, plan.month.name
            ),
        );
    }
    for name in &unrecognized {
        console::print_result("✗", Theme::WARNING, name, "-> could not parse date format");
    }

    if plans.is_empty() {
        println!();
        println!("No folders with recognizable date formats found.");
        return Ok(());
    }

    println!();
    println!("{} folder(s) can be renamed.", plans.len());

    let mut prompter = StdinPrompter;
    let year = prompter.prompt_year()?;

    println!();
    println!("Preview of new names with year {year}:");
    for plan in &plans {
        println!("  {} -> {}", plan.old_name, plan.target_name(year));
    }

    println!();
    if !prompter.confirm("Proceed with renaming? (y/N): ")? {
        println!("Renaming cancelled.");
        return Ok(());
    }

    println!();
    println!("Renaming folders...");
    let reports = rename::apply_plans(&root, year, &plans);

    let mut renamed = 0usize;
    for report in &reports {
        match &report.outcome {
            RenameOutcome::Renamed => {
                renamed += 1;
                console::print_result(
                    "✓",
                    Theme::SUCCESS,
                    &report.old_name,
                    &format!("-> {}", report.new_name),
                );
            }
            RenameOutcome::TargetExists => {
                console::print_result(
                    "✗",
                    Theme::WARNING,
                    &report.old_name,
                    &format!("-> {} (target already exists)", report.new_name),
                );
            }
            RenameOutcome::Failed(reason) => {
                console::print_result(
                    "✗",
                    Theme::ERROR,
                    &report.old_name,
                    &format!("-> {} (error: {reason})", report.new_name),
                );
            }
        }
    }

    println!();
    println!(
        "Completed! Successfully renamed {renamed} out of {} folders.",
        reports.len()
    );
    console::print_hint(&format!("Log file: {}", log_path.display()));

    info!(renamed, attempted = reports.len(), "Run complete");

    Ok(())
}
