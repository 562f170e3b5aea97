//! # tana-stdio
//!
//! Terminal output helpers shared by Tana command-line tools, so every tool
//! prints actions, results, warnings and suggestions the same way.
//!
//! ```text
//! [build] compiling contract...
//! ✓ build complete
//! ```
//!
//! ## Usage
//!
//! ```
//! use tana_stdio::{log, success, next_steps, NextStep};
//!
//! log("build", "compiling contract...");
//! success("build complete");
//! next_steps(&[NextStep::new("start the server", "npm run dev")]);
//! ```
//!
//! Color is decided once per process. Install a formatter at startup to pick
//! it explicitly, otherwise the color library's detection is used:
//!
//! ```
//! use tana_stdio::{Config, Formatter};
//!
//! let config = Config::load().unwrap_or_default();
//! let _ = tana_stdio::init(Formatter::from_config(&config));
//! ```

pub mod config;
pub mod error;
mod macros;
mod output;
pub mod style;
pub mod ui;

pub use config::Config;
pub use error::{Result, StdioError};
pub use output::*;
pub use style::{ColorMode, Styler};
pub use ui::{Formatter, NextStep};
