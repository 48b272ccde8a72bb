//! Colored terminal output for graph commands.
//!
//! Data (JSON, outlines, trees) goes to stdout uncolored so it can be piped;
//! `colored` honours NO_COLOR on its own.

use std::fmt::Display;
use std::path::Path;

use colored::Colorize;

pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Confirmation line after a graph mutation.
pub fn done(msg: &(impl Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Raw document output.
pub fn data(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}

/// `label: path`, dimmed with a marker when the file is absent.
pub fn config_file(label: &str, path: Option<&Path>) {
    match path {
        Some(path) if path.exists() => println!("{}: {}", label.cyan(), path.display()),
        Some(path) => println!(
            "{}: {} {}",
            label.cyan(),
            path.display().to_string().dimmed(),
            "(not found)".dimmed()
        ),
        None => println!("{}: {}", label.cyan(), "unavailable".dimmed()),
    }
}
