use colored::*;

/// Terminal styling for the separation report.
///
/// Built once from `--no-color`; disabling it switches `colored` off for the whole process.
pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    /// Actor names in hop lines and the search banner.
    pub fn person_name(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    /// The movie linking two people in a hop line.
    pub fn movie_title(&self, text: &str) -> ColoredString {
        text.cyan().italic()
    }

    /// The degree count of a found path.
    pub fn success(&self, text: &str) -> ColoredString {
        text.green().bold()
    }

    /// "Not connected." and aborted-search notices, plus error prefixes on stderr.
    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn step_number(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.dimmed()
    }
}
