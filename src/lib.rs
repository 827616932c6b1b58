//! Photo Tidy - local photo and folder organization utilities
//!
//! Two interactive command-line tools built on one library:
//! - `organize-photos` moves image files into `YYYY/YYYY-MM-MonthName`
//!   folders based on their EXIF capture time, falling back to the file
//!   modification time, with an unknown-date bucket for everything else
//! - `rename-folders` normalizes loosely-named month folders (`01`,
//!   `06-Jun`, `January01`, ...) to the `YYYY-MM-MonthName` scheme

pub mod cli;
pub mod config;
pub mod console;
pub mod date;
pub mod error;
pub mod logging;
pub mod months;
pub mod organize;
pub mod rename;

pub use cli::{OrganizeArgs, RenameArgs};
pub use config::Config;
pub use console::{Prompter, StdinPrompter};
pub use error::{Error, Result};
pub use organize::Organizer;
