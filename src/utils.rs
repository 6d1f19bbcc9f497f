use std::fmt;

use terminal_size::{Width, terminal_size};

use crate::app::Verbosity;

/// A trait for dumping a value to stdout, cut to the terminal width unless the verbosity is
/// [`Verbosity::Verbose`].
pub trait PrintableView
where
    Self: fmt::Display,
{
    fn print(&self, verbosity: Verbosity) {
        let width = match (verbosity, terminal_size()) {
            (Verbosity::Verbose, _) | (_, None) => None,
            (_, Some((Width(w), _))) => Some(w as usize),
        };
        for line in self.to_string().lines() {
            println!("{}", fit_line(line, width));
        }
    }
}

fn fit_line(line: &str, width: Option<usize>) -> String {
    match width {
        Some(w) if line.chars().count() > w => {
            let kept = line.chars().take(w.saturating_sub(3)).collect::<String>();
            format!("{}...", kept)
        }
        _ => line.to_string(),
    }
}
