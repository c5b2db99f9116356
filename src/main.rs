//! StyleBoard - outfit composer for wardrobe style boards
//!
//! Classifies wardrobe items into board roles, lays boards out into a main
//! piece and two side columns, and shuffles unlocked items.

use clap::{Parser, Subcommand};
use styleboard::cli::{BoardArgs, ClassifyArgs, ConfigArgs, ExitCode, WardrobeArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// StyleBoard - compose and shuffle outfit boards from your wardrobe
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show which board role a category maps to
    Classify(ClassifyArgs),
    /// Manage wardrobe items
    Wardrobe(WardrobeArgs),
    /// Work with style boards
    Board(BoardArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    // Logs go to stderr so `--json` output on stdout stays parseable
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Classify(args) => args.execute(),
        Command::Wardrobe(args) => args.execute(),
        Command::Board(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    let exit_code = match result {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code
        }
    };

    std::process::exit(exit_code.code());
}
