mod config_cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tana_stdio::config::COLOR_ENV;
use tana_stdio::{ColorMode, Config, Formatter, NextStep};

pub use config_cmd::ConfigSubcommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "tana-stdio")]
#[command(about = "Print consistent, color-coded status lines from shell scripts")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// When to use color (overrides the config file and TANA_STDIO_COLOR)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    /// Verbose output (show debug information on stderr)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// [action] value
    Log {
        action: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// [action] message, message in red
    Error {
        action: String,
        #[arg(allow_hyphen_values = true)]
        message: String,
    },
    /// ● [name] message, or ● name without a message
    Warn {
        name: String,
        #[arg(allow_hyphen_values = true)]
        message: Option<String>,
    },
    /// ● [name] message for success, ○ with --fail
    Status {
        name: String,
        #[arg(allow_hyphen_values = true)]
        message: String,
        /// Render as a failure
        #[arg(long)]
        fail: bool,
    },
    /// Section header with a rule underneath
    Header {
        #[arg(allow_hyphen_values = true)]
        title: String,
    },
    /// Empty line
    Blank,
    /// ✓ message
    Success {
        #[arg(allow_hyphen_values = true)]
        message: String,
    },
    /// ✗ message
    Fail {
        #[arg(allow_hyphen_values = true)]
        message: String,
    },
    /// Indented label/value pair
    Info {
        label: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Subdued, indented message
    Hint {
        #[arg(allow_hyphen_values = true)]
        message: String,
    },
    /// → message, indented under the previous line
    Detail {
        #[arg(allow_hyphen_values = true)]
        message: String,
    },
    /// Print an error and exit with status 1
    Fatal {
        action: String,
        #[arg(allow_hyphen_values = true)]
        message: String,
    },
    /// → description: command
    NextStep {
        description: String,
        #[arg(allow_hyphen_values = true)]
        command: String,
    },
    /// One next-step line per DESCRIPTION=COMMAND argument
    NextSteps {
        #[arg(value_name = "DESCRIPTION=COMMAND")]
        steps: Vec<String>,
    },
    /// ⚠ [component] message
    Diagnostic {
        component: String,
        #[arg(allow_hyphen_values = true)]
        message: String,
    },
    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommand),
}

impl Args {
    pub fn execute(&self) -> Result<()> {
        let _ = tana_stdio::init(Formatter::from_config(&self.output_config()));

        match &self.command {
            Command::Config(cmd) => return config_cmd::handle_config(cmd),
            Command::Log { action, value } => tana_stdio::log(action, value),
            Command::Error { action, message } => tana_stdio::error(action, message),
            Command::Warn { name, message } => tana_stdio::warn(name, message.as_deref()),
            Command::Status {
                name,
                message,
                fail,
            } => tana_stdio::status(name, message, !fail),
            Command::Header { title } => tana_stdio::header(title),
            Command::Blank => tana_stdio::blank(),
            Command::Success { message } => tana_stdio::success(message),
            Command::Fail { message } => tana_stdio::fail(message),
            Command::Info { label, value } => tana_stdio::info(label, value),
            Command::Hint { message } => tana_stdio::hint(message),
            Command::Detail { message } => tana_stdio::detail(message),
            Command::Fatal { action, message } => tana_stdio::fatal(action, message),
            Command::NextStep {
                description,
                command,
            } => tana_stdio::next_step(description, command),
            Command::NextSteps { steps } => {
                let parsed = match parse_steps(steps) {
                    Ok(parsed) => parsed,
                    Err(bad) => tana_stdio::fatal(
                        "next-steps",
                        &format!("expected DESCRIPTION=COMMAND, got '{}'", bad),
                    ),
                };
                tana_stdio::next_steps(&parsed);
            }
            Command::Diagnostic { component, message } => {
                tana_stdio::diagnostic(component, message)
            }
        }
        Ok(())
    }

    /// Config for rendering: file, then environment, then `--color`.
    /// A source that fails to load is skipped with a warning.
    fn output_config(&self) -> Config {
        let file = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring config file: {}", e);
            Config::default()
        });
        let mut config = match file.clone().apply_env() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", COLOR_ENV, e);
                file
            }
        };
        if let Some(color) = self.color {
            config.color = color;
        }
        tracing::debug!("Color mode: {}", config.color);
        config
    }
}

/// Split each argument at its first `=`, returning the first malformed one
fn parse_steps(raw: &[String]) -> std::result::Result<Vec<NextStep<'_>>, &str> {
    raw.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(NextStep::from)
                .ok_or(arg.as_str())
        })
        .collect()
}
