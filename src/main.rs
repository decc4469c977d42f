// Trains a perceptron and answers queries with it.
//
//   perceptron [--config FILE] [--dataset FILE] [--trace] [INPUT...]
//
// Without a dataset the umbrella set is used; without inputs, `1` and `0`
// are queried. `--trace` prints one JSON record per epoch. Set RUST_LOG=debug
// to see every update.
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use perceptron::data::dataset;
use perceptron::train::LogObserver;
use perceptron::{rain_dataset, PerceptronTrainer, Result, TrainConfig};

/// Train a single-input perceptron and query it
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "perceptron")]
#[command(version)]
pub struct Cli {
    /// JSON training config (learning_rate, max_epochs, init)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Training set as JSON or CSV; defaults to the umbrella set
    #[arg(long, value_name = "FILE")]
    pub dataset: Option<PathBuf>,

    /// Print one JSON record per epoch
    #[arg(long)]
    pub trace: bool,

    /// Inputs to classify after training
    #[arg(value_name = "INPUT", allow_negative_numbers = true, default_values_t = [1.0, 0.0])]
    pub inputs: Vec<f64>,
}

fn run() -> Result<()> {
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => TrainConfig::load_json(path)?,
        None => TrainConfig::default(),
    };
    let examples = match &args.dataset {
        Some(path) => dataset::load(path)?,
        None => rain_dataset(),
    };

    let mut trainer = PerceptronTrainer::new(config)?;
    let report = trainer.fit(&examples, LogObserver)?;
    let predictor = report.predictor;

    if report.converged {
        println!("Converged after {} epoch(s).", report.epochs_run);
    } else {
        println!("Did not converge within {} epoch(s).", report.epochs_run);
    }
    println!("Learned {predictor}");
    println!("Training accuracy: {:.1}%", predictor.accuracy(&examples) * 100.0);

    if args.trace {
        println!();
        for stats in &report.trace {
            println!("{}", serde_json::to_string(stats)?);
        }
    }

    println!();
    for input in &args.inputs {
        println!("{input} -> {}", predictor.predict(*input));
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
