//! The `amplify` CLI subcommand.

use clap::Parser;

use crate::report::{unlabelled_rows, Summary};

use super::{CliError, OutputArgs, RunArgs};

/// Amplify explicitly given basis states.
#[derive(Parser, Debug)]
pub struct AmplifyArgs {
    /// Number of qubits in the search register.
    #[arg(long, short)]
    qubits: usize,

    /// Comma-separated indices of the states to mark.
    #[arg(long, short, value_delimiter = ',', required = true)]
    marked: Vec<usize>,

    #[command(flatten)]
    config: RunArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl AmplifyArgs {
    /// Run the `amplify` command using the provided arguments.
    pub fn run(self) -> Result<(), CliError> {
        let run = self.config.amplifier().run(self.qubits, &self.marked)?;

        let text = if self.output.qasm {
            run.circuit.to_qasm()
        } else {
            let summary = Summary::new(
                self.qubits,
                run.marked,
                run.iterations,
                &run.counts,
                unlabelled_rows(&run.counts),
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
