//! Console output styling and interactive prompts
//!
//! The print helpers give both binaries a consistent look; the
//! [`Prompter`] trait keeps the blocking stdin reads behind a seam so the
//! interactive flows can be driven from tests without a terminal.

use crossterm::style::{Color, Stylize, style};
use std::io::{self, BufRead, Write};

/// Status colors shared by both tools
pub struct Theme;

impl Theme {
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const HINT: Color = Color::DarkGrey;
}

/// Print a horizontal separator line
pub fn print_separator() {
    println!("{}", "─".repeat(50));
}

/// Print a bold title followed by a separator
pub fn print_title(title: &str) {
    println!("{}", style(title).bold());
    print_separator();
}

/// Print one per-item result line: icon, subject, dimmed detail
pub fn print_result(icon: &str, color: Color, subject: &str, detail: &str) {
    println!(
        "  {} {} {}",
        style(icon).with(color).bold(),
        subject,
        style(detail).with(Theme::HINT)
    );
}

/// Print a summary statistic
pub fn print_stat(label: &str, value: &str, color: Color) {
    println!(
        "  {}: {}",
        style(label).with(Theme::HINT),
        style(value).with(color).bold()
    );
}

/// Print an error message
pub fn print_error(msg: &str) {
    println!("{} {}", style("✗").with(Theme::ERROR).bold(), msg);
}

/// Print a dimmed hint line
pub fn print_hint(msg: &str) {
    println!("{} {}", style("→").with(Theme::HINT), msg);
}

/// Interactive question-and-answer capability.
///
/// `read_line` is the only required method; the provided methods build the
/// confirmation and year questions on top of it.
pub trait Prompter {
    /// Show `prompt` and read one line of input
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Yes/no question; only `y`/`yes` (any case) count as yes
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.read_line(prompt)?;
        let answer = answer.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    /// Ask for a year until a valid one in 1900-2100 arrives
    fn prompt_year(&mut self) -> io::Result<i32> {
        loop {
            let line = self.read_line("Enter the year to use for renaming (e.g., 2024): ")?;
            match line.trim().parse::<i32>() {
                Ok(year) if (1900..=2100).contains(&year) => return Ok(year),
                Ok(_) => println!("Please enter a year between 1900 and 2100."),
                Err(_) => println!("Please enter a valid year (numbers only)."),
            }
        }
    }
}

/// Prompter backed by standard input
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}
