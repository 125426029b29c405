use std::path::PathBuf;

use clap::Parser;

use claude_md_deploy::config::CliOverrides;

#[derive(Parser)]
#[command(
    name = "claude-md-deploy",
    about = "Deploy CLAUDE.md templates to auto-detected filesystem locations",
    version
)]
pub struct Cli {
    /// Directory containing <key>/CLAUDE.md templates (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Show what would be deployed without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Never prompt; skip templates without a detected path or with an existing file.
    ///
    /// Without this flag, answers are read line by line when stdin is not a terminal.
    #[arg(long)]
    pub no_interactive: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            templates_dir: self.templates_dir.clone(),
            dry_run: self.dry_run,
            interactive: self.no_interactive.then_some(false),
        }
    }
}
