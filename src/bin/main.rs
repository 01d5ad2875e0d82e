//! svmprep command line interface
//!
//! Converts the Abalone and Census Income datasets from CSV into the
//! libsvm sparse text format, one subcommand per dataset.

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process;
use svmprep::core::Result;
use svmprep::data::libsvm;
use svmprep::pipeline::{abalone, income, PipelineOutput};

#[derive(Parser)]
#[command(name = "svmprep")]
#[command(about = "Preprocess tabular datasets into the LibSVM text format")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the Abalone dataset (labeled train and test splits)
    Abalone(ConvertArgs),
    /// Convert the Income dataset (labeled train, unlabeled test)
    Income(ConvertArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Training data file (CSV)
    #[arg(long)]
    train: PathBuf,

    /// Test data file (CSV)
    #[arg(long)]
    test: PathBuf,

    /// Output file for the converted training split
    #[arg(long)]
    out_train: PathBuf,

    /// Output file for the converted test split
    #[arg(long)]
    out_test: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Abalone(args) => convert_command(&args, abalone::run(&args.train, &args.test)),
        Commands::Income(args) => convert_command(&args, income::run(&args.train, &args.test)),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn convert_command(args: &ConvertArgs, output: Result<PipelineOutput>) -> Result<()> {
    let output = output?;

    libsvm::write_file(&args.out_train, &output.train_x, Some(output.train_y.as_slice()))?;
    info!("Training split written to {:?}", args.out_train);

    let test_labels = if output.test_y.is_empty() {
        None
    } else {
        Some(output.test_y.as_slice())
    };
    libsvm::write_file(&args.out_test, &output.test_x, test_labels)?;
    info!("Test split written to {:?}", args.out_test);

    Ok(())
}
