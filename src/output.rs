//! Process-wide formatter and the free functions that write through it.

use crate::style::Styler;
use crate::ui::{Formatter, NextStep};
use std::sync::OnceLock;

static FORMATTER: OnceLock<Formatter> = OnceLock::new();

/// Install the process-wide formatter
///
/// Call once at startup, before any output. Returns the formatter back if
/// one was already installed (explicitly or by an earlier output call).
pub fn init(formatter: Formatter) -> Result<(), Formatter> {
    FORMATTER.set(formatter)
}

/// The process-wide formatter, auto-detecting color if none was installed
pub fn formatter() -> &'static Formatter {
    FORMATTER.get_or_init(|| Formatter::new(Styler::default()))
}

/// Log an action with a value: `[action] value`
pub fn log(action: &str, value: &str) {
    formatter().log(action, value);
}

/// Log an error: `[action] message`, message in red
pub fn error(action: &str, message: &str) {
    formatter().error(action, message);
}

/// Warning with a yellow dot: `● [name] message`, or `● name` alone
pub fn warn(name: &str, message: Option<&str>) {
    formatter().warn(name, message);
}

/// Status line with a green `●` when `ok`, red `○` otherwise
pub fn status(name: &str, message: &str, ok: bool) {
    formatter().status(name, message, ok);
}

/// Section header: blank line, bold title, 40-character rule
pub fn header(title: &str) {
    formatter().header(title);
}

pub fn blank() {
    formatter().blank();
}

pub fn success(message: &str) {
    formatter().success(message);
}

pub fn fail(message: &str) {
    formatter().fail(message);
}

/// Indented `label value` pair with the label in a 10-character column
pub fn info(label: &str, value: &str) {
    formatter().info(label, value);
}

pub fn hint(message: &str) {
    formatter().hint(message);
}

pub fn detail(message: &str) {
    formatter().detail(message);
}

/// Log an error and exit with status 1
pub fn fatal(action: &str, message: &str) -> ! {
    formatter().fatal(action, message)
}

/// Suggest a next step: `→ description: command`
pub fn next_step(description: &str, command: &str) {
    formatter().next_step(description, command);
}

pub fn next_steps(steps: &[NextStep]) {
    formatter().next_steps(steps);
}

/// Diagnostic warning: `⚠ [component] message`
pub fn diagnostic(component: &str, message: &str) {
    formatter().diagnostic(component, message);
}

/// Every output operation under one handle
pub struct Stdio {
    pub log: fn(&str, &str),
    pub error: fn(&str, &str),
    pub warn: fn(&str, Option<&str>),
    pub status: fn(&str, &str, bool),
    pub header: fn(&str),
    pub blank: fn(),
    pub success: fn(&str),
    pub fail: fn(&str),
    pub info: fn(&str, &str),
    pub hint: fn(&str),
    pub detail: fn(&str),
    pub fatal: fn(&str, &str) -> !,
    pub next_step: fn(&str, &str),
    pub next_steps: fn(&[NextStep]),
    pub diagnostic: fn(&str, &str),
}

/// Each field is the free function of the same name.
///
/// ```
/// use tana_stdio::{NextStep, STDIO};
///
/// let io = &STDIO;
/// (io.header)("deploy");
/// (io.log)("deploy", "uploading bundle");
/// (io.warn)("cache", None);
/// (io.status)("api", "healthy", true);
/// (io.info)("region", "eu-west-1");
/// (io.next_steps)(&[NextStep::new("follow logs", "tana logs --follow")]);
/// (io.success)("deployed");
/// ```
pub static STDIO: Stdio = Stdio {
    log,
    error,
    warn,
    status,
    header,
    blank,
    success,
    fail,
    info,
    hint,
    detail,
    fatal,
    next_step,
    next_steps,
    diagnostic,
};
