//! The `search` CLI subcommand.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

use crate::report::Summary;

use super::{CliError, OutputArgs, RunArgs};

/// Search a list of items for a target value.
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Value to search for.
    target: String,

    /// Items of the database, in order.
    #[arg(required_unless_present = "input")]
    items: Vec<String>,

    /// Read the database from a file, one item per line.
    #[arg(long, short, conflicts_with = "items")]
    input: Option<PathBuf>,

    /// Mark every occurrence of the target instead of only the first.
    #[arg(long)]
    multi: bool,

    #[command(flatten)]
    config: RunArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl SearchArgs {
    /// Run the `search` command using the provided arguments.
    pub fn run(self) -> Result<(), CliError> {
        let database: Vec<String> = match &self.input {
            Some(path) => fs::read_to_string(path)?
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect(),
            None => self.items.clone(),
        };

        let amp = self.config.amplifier();
        let outcome = if self.multi {
            amp.search_multi(&database, &self.target)?
        } else {
            amp.search_single(&database, &self.target)?
        };

        let text = if self.output.qasm {
            outcome.circuit.to_qasm()
        } else {
            let summary = Summary::new(
                outcome.qubits,
                outcome.marked.clone(),
                outcome.iterations,
                &outcome.counts,
                outcome.report(&database),
            );
            if self.output.json {
                serde_json::to_string_pretty(&summary)?
            } else {
                summary.to_string()
            }
        };
        self.output.emit(text)
    }
}
