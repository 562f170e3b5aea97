pub mod format;
mod formatter;

pub use format::{NextStep, LABEL_WIDTH, RULE_WIDTH};
pub use formatter::Formatter;
