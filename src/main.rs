use std::io;
use std::path::PathBuf;

use clap::Parser;
use csv_quiz::{terminal, QuizConfig, DEFAULT_DATASET_PATH};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file suggested when asking for the dataset path
    #[arg(long, default_value = DEFAULT_DATASET_PATH)]
    default_path: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("csv_quiz=warn")),
        )
        .init();

    let args = Args::parse();
    let config = QuizConfig::new(args.default_path);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    if let Err(e) = csv_quiz::run_session(&config, &mut input, &mut output) {
        terminal::report_error(&e);
        std::process::exit(1);
    }
}
