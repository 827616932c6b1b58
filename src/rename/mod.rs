//! Folder renaming to the canonical `YYYY-MM-MonthName` scheme
//!
//! The library side is non-interactive: list subdirectories, build rename
//! plans, apply them. The binary owns the prompts and wiring.

pub mod parser;

use crate::error::Result;
use parser::MonthMatch;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};
use walkdir::WalkDir;

/// A folder recognized as renameable, waiting for a year binding
#[derive(Debug, Clone)]
pub struct RenamePlan {
    /// Current folder name
    pub old_name: String,
    /// Month recognized in the name
    pub month: MonthMatch,
}

impl RenamePlan {
    /// Final folder name once a year is chosen
    pub fn target_name(&self, year: i32) -> String {
        format!("{year}-{:02}-{}", self.month.number, self.month.name)
    }
}

/// Per-folder result of applying a plan
#[derive(Debug, Clone)]
pub struct RenameReport {
    pub old_name: String,
    pub new_name: String,
    pub outcome: RenameOutcome,
}

/// What happened to one folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    /// The target name already exists; the folder is left untouched
    TargetExists,
    Failed(String),
}

/// Names of the immediate subdirectories of `root` (no files, no recursion)
pub fn list_subdirs(root: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_dir()
            && let Some(name) = entry.file_name().to_str()
        {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

/// Partition folder names into rename plans and unrecognized leftovers
pub fn build_plans(names: &[String]) -> (Vec<RenamePlan>, Vec<String>) {
    let mut plans = Vec::new();
    let mut unrecognized = Vec::new();

    for name in names {
        match parser::parse_month_token(name) {
            Some(month) => plans.push(RenamePlan {
                old_name: name.clone(),
                month,
            }),
            None => unrecognized.push(name.clone()),
        }
    }

    (plans, unrecognized)
}

/// Apply the plans under `root` with the chosen year.
///
/// An existing target is a reported conflict, not an overwrite, and gets no
/// suffix (unlike file moves). Per-item failures do not stop the remaining
/// renames.
pub fn apply_plans(root: &Path, year: i32, plans: &[RenamePlan]) -> Vec<RenameReport> {
    let mut reports = Vec::with_capacity(plans.len());

    for plan in plans {
        let new_name = plan.target_name(year);
        let target = root.join(&new_name);

        let outcome = if target.exists() {
            warn!(old = %plan.old_name, new = %new_name, "Target folder already exists, skipping");
            RenameOutcome::TargetExists
        } else {
            match fs::rename(root.join(&plan.old_name), &target) {
                Ok(()) => {
                    info!(old = %plan.old_name, new = %new_name, "Renamed folder");
                    RenameOutcome::Renamed
                }
                Err(e) => {
                    error!(old = %plan.old_name, error = %e, "Rename failed");
                    RenameOutcome::Failed(e.to_string())
                }
            }
        };

        reports.push(RenameReport {
            old_name: plan.old_name.clone(),
            new_name,
            outcome,
        });
    }

    reports
}
