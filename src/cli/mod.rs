pub mod args;

pub use args::Args;

/// Execute CLI command
pub fn execute(args: Args) -> anyhow::Result<()> {
    args.execute()
}
