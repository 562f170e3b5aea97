//! Line renderers.
//!
//! Each function returns the exact text an output operation writes, without
//! the trailing newline. Output is a pure function of the arguments and the
//! styler's capability flag.

use crate::style::Styler;

/// Width of the rule under a section header
pub const RULE_WIDTH: usize = 40;

/// Minimum width of the label column in `info` lines
pub const LABEL_WIDTH: usize = 10;

/// A suggested follow-up command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextStep<'a> {
    pub description: &'a str,
    pub command: &'a str,
}

impl<'a> NextStep<'a> {
    pub fn new(description: &'a str, command: &'a str) -> Self {
        Self {
            description,
            command,
        }
    }
}

impl<'a> From<(&'a str, &'a str)> for NextStep<'a> {
    fn from((description, command): (&'a str, &'a str)) -> Self {
        Self::new(description, command)
    }
}

fn tag(s: &Styler, name: &str) -> String {
    s.cyan(&format!("[{}]", name))
}

/// `[action] value`
pub fn log(s: &Styler, action: &str, value: &str) -> String {
    format!("{} {}", tag(s, action), value)
}

/// `[action] message` with the message in red
pub fn error(s: &Styler, action: &str, message: &str) -> String {
    format!("{} {}", tag(s, action), s.red(message))
}

/// `● [name] message`, or `● name` when there is no message
pub fn warn(s: &Styler, name: &str, message: Option<&str>) -> String {
    let dot = s.yellow("●");
    match message {
        Some(message) => format!("{} {} {}", dot, tag(s, name), message),
        None => format!("{} {}", dot, name),
    }
}

pub fn status(s: &Styler, name: &str, message: &str, ok: bool) -> String {
    if ok {
        format!("{} {} {}", s.green("●"), tag(s, name), s.gray(message))
    } else {
        format!("{} {} {}", s.red("○"), tag(s, name), s.red(message))
    }
}

/// Blank line, bold title, gray rule
pub fn header(s: &Styler, title: &str) -> String {
    format!("\n{}\n{}", s.bold(title), s.gray(&"─".repeat(RULE_WIDTH)))
}

pub fn blank() -> String {
    String::new()
}

pub fn success(s: &Styler, message: &str) -> String {
    format!("{} {}", s.green("✓"), message)
}

pub fn fail(s: &Styler, message: &str) -> String {
    format!("{} {}", s.red("✗"), message)
}

/// Labels shorter than [`LABEL_WIDTH`] are padded; longer ones are kept whole
pub fn info(s: &Styler, label: &str, value: &str) -> String {
    format!("  {:<width$} {}", label, s.cyan(value), width = LABEL_WIDTH)
}

pub fn hint(s: &Styler, message: &str) -> String {
    s.gray(&format!("  {}", message))
}

pub fn detail(s: &Styler, message: &str) -> String {
    format!("    {} {}", s.gray("→"), message)
}

pub fn next_step(s: &Styler, description: &str, command: &str) -> String {
    format!("  {} {}: {}", s.gray("→"), description, s.cyan(command))
}

/// One line per step, in order
pub fn next_steps(s: &Styler, steps: &[NextStep]) -> Vec<String> {
    steps
        .iter()
        .map(|step| next_step(s, step.description, step.command))
        .collect()
}

/// `⚠ [component] message` with the message in yellow
pub fn diagnostic(s: &Styler, component: &str, message: &str) -> String {
    format!("{} {} {}", s.yellow("⚠"), tag(s, component), s.yellow(message))
}
