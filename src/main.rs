#![forbid(unsafe_code)]
//! windsurfrules command line interface

use std::path::PathBuf;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use windsurfrules::commands::{execute_generate, GenerateOptions};
use windsurfrules::RulesError;

#[derive(Parser)]
#[command(name = "windsurfrules")]
#[command(about = "Regenerate .windsurfrules from the files in .cursor/rules")]
#[command(version)]
struct Cli {
    /// Project root that relative paths resolve against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Config file path (default: <root>/.windsurfrules.config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rules directory holding the fragments
    #[arg(long)]
    rules_dir: Option<PathBuf>,

    /// Aggregate file to overwrite
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = GenerateOptions {
        root: cli.root,
        config: cli.config,
        rules_dir: cli.rules_dir,
        output: cli.output,
        verbose: cli.verbose,
    };

    if let Err(err) = execute_generate(options) {
        match err.downcast_ref::<RulesError>() {
            Some(RulesError::RulesDirNotFound { .. }) => eprintln!("{}", err),
            _ => eprintln!("{} {:#}", style("✗").red(), err),
        }
        std::process::exit(1);
    }
}
