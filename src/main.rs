mod cli;

use std::process::ExitCode;

use clap::Parser;
use console::style;
use is_terminal::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use claude_md_deploy::config::{load_user_config, resolve_options};
use claude_md_deploy::{Deployer, InquirePrompter, LinePrompter};
use cli::Cli;

const EXIT_INTERRUPTED: i32 = 130;

/// `-v` and `-vv` override `RUST_LOG`; without them warnings only.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("claude_md_deploy=warn")),
        1 => EnvFilter::new("claude_md_deploy=info"),
        _ => EnvFilter::new("claude_md_deploy=debug"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Prompts read keys in raw mode and see Ctrl-C themselves; this only
    // fires between prompts.
    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!(
            "\n\n{} Deployment cancelled by user",
            style("warning:").yellow().bold()
        );
        std::process::exit(EXIT_INTERRUPTED);
    }) {
        tracing::warn!("could not install Ctrl-C handler: {e}");
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(report) => {
            eprintln!("{report:?}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every discovered template was deployed.
fn run(cli: &Cli) -> miette::Result<bool> {
    let user_config = load_user_config()?;
    let options = resolve_options(cli.overrides(), user_config.as_ref());
    tracing::debug!("options: {options:?}");

    let results = if std::io::stdin().is_terminal() {
        Deployer::new(options, InquirePrompter).run()?
    } else {
        let stdin = std::io::stdin();
        Deployer::new(options, LinePrompter::new(stdin.lock())).run()?
    };
    Ok(results.all_succeeded())
}
