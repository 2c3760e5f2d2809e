//! langid CLI
//!
//! Command-line entry points around the fastText language identification
//! models: a `train` pipeline that turns a labelled CSV corpus into a
//! saved model, and a `repl` for interactively testing one.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod repl;
mod train;

#[derive(Parser, Debug)]
#[command(name = "langid")]
#[command(author, version, about = "fastText language identification toolkit")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Train a model from a labelled CSV corpus and evaluate it
    Train(train::TrainOpts),

    /// Load a model and test it interactively from the terminal
    Repl(repl::ReplOpts),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(opts) => {
            init_logging(opts.verbose);
            train::run(opts)
        }
        Commands::Repl(opts) => {
            init_logging(opts.verbose);
            repl::run(opts)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "langid=debug,langid_model=debug"
    } else {
        "langid=info,langid_model=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
