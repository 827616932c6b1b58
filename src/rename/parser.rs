//! Folder-name month recognition
//!
//! An ordered list of independent matchers, each handling one shape of
//! month-bearing folder name. The first matcher that produces a result
//! wins, making the priority order explicit and each shape testable on
//! its own.

use crate::months::{self, MonthEntry};
use regex::Regex;
use std::sync::OnceLock;

/// A recognized month token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthMatch {
    /// 1-based month number
    pub number: u32,
    /// Canonical full month name
    pub name: &'static str,
}

impl From<&'static MonthEntry> for MonthMatch {
    fn from(entry: &'static MonthEntry) -> Self {
        Self {
            number: entry.number,
            name: entry.name,
        }
    }
}

type Matcher = fn(&str) -> Option<MonthMatch>;

/// Matchers in priority order; the first hit wins
const MATCHERS: &[Matcher] = &[
    bare_month_number,
    digits_separator_letters,
    letters_separator_digits,
    digits_then_letters,
    letters_then_digits,
    letters_only,
];

/// Recognize an embedded month in a folder name
pub fn parse_month_token(name: &str) -> Option<MonthMatch> {
    let token = name.trim();
    MATCHERS.iter().find_map(|matcher| matcher(token))
}

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).unwrap())
}

/// Whichever captured group names a month wins. The other group is not
/// cross-checked against it, so "03-January" resolves to January.
fn month_from_groups(caps: &regex::Captures<'_>) -> Option<MonthMatch> {
    caps.iter()
        .skip(1)
        .flatten()
        .find_map(|group| months::by_name(group.as_str()).map(MonthMatch::from))
}

/// `01`, `7` - a bare month number in range
fn bare_month_number(token: &str) -> Option<MonthMatch> {
    static RE: OnceLock<Regex> = OnceLock::new();
    if !regex(&RE, r"^\d{1,2}$").is_match(token) {
        return None;
    }
    let number: u32 = token.parse().ok()?;
    months::by_number(number).map(MonthMatch::from)
}

/// `01-Jan`, `01_January`, `01 Jan`
fn digits_separator_letters(token: &str) -> Option<MonthMatch> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = regex(&RE, r"^(\d{1,2})[-_\s]([A-Za-z]+)$").captures(token)?;
    month_from_groups(&caps)
}

/// `Jan-01`, `January_01`, `Jan 01`
fn letters_separator_digits(token: &str) -> Option<MonthMatch> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = regex(&RE, r"^([A-Za-z]+)[-_\s](\d{1,2})$").captures(token)?;
    month_from_groups(&caps)
}

/// `01Jan`, `01January`
fn digits_then_letters(token: &str) -> Option<MonthMatch> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = regex(&RE, r"^(\d{1,2})([A-Za-z]+)$").captures(token)?;
    month_from_groups(&caps)
}

/// `Jan01`, `January01`
fn letters_then_digits(token: &str) -> Option<MonthMatch> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = regex(&RE, r"^([A-Za-z]+)(\d{1,2})$").captures(token)?;
    month_from_groups(&caps)
}

/// `Jan`, `january` - a bare month name or abbreviation
fn letters_only(token: &str) -> Option<MonthMatch> {
    static RE: OnceLock<Regex> = OnceLock::new();
    if !regex(&RE, r"^[A-Za-z]+$").is_match(token) {
        return None;
    }
    months::by_name(token).map(MonthMatch::from)
}
