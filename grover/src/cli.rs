//! The command line interface.

use clap::{crate_version, Args, Parser};
use std::fs;
use std::path::PathBuf;

use crate::amplify::Amplifier;
use crate::error::GroverError;

pub mod amplify;
pub mod search;

/// CLI arguments.
#[derive(Parser, Debug)]
#[clap(version = crate_version!(), long_about = None)]
#[clap(about = "Grover search command line interface")]
pub enum Cli {
    /// Search a list of items for a target value.
    Search(search::SearchArgs),
    /// Amplify explicitly given basis states.
    Amplify(amplify::AmplifyArgs),
}

/// Error type for the CLI.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum CliError {
    /// Error reading or writing files.
    #[display("IO error: {_0}")]
    IO(std::io::Error),
    /// Error building or running the search.
    #[display("{_0}")]
    Grover(GroverError),
    /// Error encoding the results.
    #[display("JSON error: {_0}")]
    Json(serde_json::Error),
}

impl Cli {
    pub fn run(self) -> Result<(), CliError> {
        match self {
            Cli::Search(args) => args.run(),
            Cli::Amplify(args) => args.run(),
        }
    }
}

/// Options controlling how the circuit is run.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Number of shots to sample.
    #[arg(long, short, default_value_t = crate::amplify::DEFAULT_SHOTS)]
    shots: usize,

    /// Number of Grover iterations. Defaults to floor(pi/4 * sqrt(N/r)).
    #[arg(long)]
    iterations: Option<usize>,

    /// Seed the sampler, for reproducible counts.
    #[arg(long)]
    seed: Option<u64>,

    /// Refuse to simulate registers wider than this.
    #[arg(long, default_value_t = crate::simulator::DEFAULT_MAX_QUBITS)]
    max_qubits: usize,
}

impl RunArgs {
    pub fn amplifier(&self) -> Amplifier {
        let mut amp = Amplifier::new();
        amp.shots(self.shots).max_qubits(self.max_qubits);
        amp.iterations = self.iterations;
        amp.seed = self.seed;
        amp
    }
}

/// Options controlling what is printed and where.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Print the results as JSON.
    #[arg(long)]
    json: bool,

    /// Print the search circuit as OpenQASM instead of the results.
    #[arg(long, conflicts_with = "json")]
    qasm: bool,

    /// Output to a file instead of printing the result.
    #[arg(long, short)]
    out: Option<PathBuf>,
}

impl OutputArgs {
    fn emit(&self, text: String) -> Result<(), CliError> {
        if let Some(out_path) = &self.out {
            fs::write(out_path, text)?;
        } else {
            println!("{text}");
        }
        Ok(())
    }
}
