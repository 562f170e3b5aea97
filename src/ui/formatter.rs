use super::format::{self, NextStep};
use crate::config::Config;
use crate::style::Styler;
use std::io::{self, Write};
use std::process;

/// Writes rendered lines to stdout
///
/// Every method takes the stdout lock for its own lines only, so separate
/// calls from different threads may interleave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    styler: Styler,
}

impl Formatter {
    pub fn new(styler: Styler) -> Self {
        Self { styler }
    }

    /// Build a formatter from the color mode in `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.styler())
    }

    pub fn styler(&self) -> &Styler {
        &self.styler
    }

    pub fn log(&self, action: &str, value: &str) {
        emit(&format::log(&self.styler, action, value));
    }

    pub fn error(&self, action: &str, message: &str) {
        emit(&format::error(&self.styler, action, message));
    }

    pub fn warn(&self, name: &str, message: Option<&str>) {
        emit(&format::warn(&self.styler, name, message));
    }

    pub fn status(&self, name: &str, message: &str, ok: bool) {
        emit(&format::status(&self.styler, name, message, ok));
    }

    pub fn header(&self, title: &str) {
        emit(&format::header(&self.styler, title));
    }

    pub fn blank(&self) {
        emit(&format::blank());
    }

    pub fn success(&self, message: &str) {
        emit(&format::success(&self.styler, message));
    }

    pub fn fail(&self, message: &str) {
        emit(&format::fail(&self.styler, message));
    }

    pub fn info(&self, label: &str, value: &str) {
        emit(&format::info(&self.styler, label, value));
    }

    pub fn hint(&self, message: &str) {
        emit(&format::hint(&self.styler, message));
    }

    pub fn detail(&self, message: &str) {
        emit(&format::detail(&self.styler, message));
    }

    /// Print the error line, then exit the process with status 1
    pub fn fatal(&self, action: &str, message: &str) -> ! {
        self.error(action, message);
        let _ = io::stdout().flush();
        process::exit(1)
    }

    pub fn next_step(&self, description: &str, command: &str) {
        emit(&format::next_step(&self.styler, description, command));
    }

    pub fn next_steps(&self, steps: &[NextStep]) {
        for step in steps {
            self.next_step(step.description, step.command);
        }
    }

    pub fn diagnostic(&self, component: &str, message: &str) {
        emit(&format::diagnostic(&self.styler, component, message));
    }
}

// A closed stdout is not worth a panic for a status line.
fn emit(text: &str) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{}", text);
}
