// Grover - amplitude amplification search circuits
//          with a built-in state-vector simulator
// Copyright (C) 2021 - Aleks Kissinger
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The amplitude-amplification driver.

use crate::circuit::Circuit;
use crate::diffusion::diffusion;
use crate::error::GroverError;
use crate::oracle::{multi_oracle, validate_marked};
use crate::simulator::{Counts, Simulator, StateVectorSimulator, DEFAULT_MAX_QUBITS};
use std::f64::consts::PI;

/// Number of shots used when none is configured.
pub const DEFAULT_SHOTS: usize = 1000;

/// floor(pi/4 * sqrt(N/r)) for N = 2^nqubits and r marked states
///
/// This truncates, so the final rotation can fall short of or overshoot the
/// marked subspace slightly. With no marked states there is nothing to rotate
/// towards, and the result is 0.
pub fn optimal_iterations(nqubits: usize, nmarked: usize) -> usize {
    if nmarked == 0 {
        return 0;
    }
    let size = 2f64.powi(nqubits as i32);
    (PI / 4.0 * (size / nmarked as f64).sqrt()).floor() as usize
}

/// The full search circuit: Hadamards on every qubit, `iterations` rounds of
/// oracle followed by diffusion, then qubit `i` measured into bit `i`.
///
/// If `iterations` is `None`, [`optimal_iterations`] is used for the number of
/// distinct marked indices.
pub fn grover_circuit(
    nqubits: usize,
    marked: &[usize],
    iterations: Option<usize>,
) -> Result<Circuit, GroverError> {
    let marked = validate_marked(nqubits, marked)?;
    let iterations = iterations.unwrap_or_else(|| optimal_iterations(nqubits, marked.len()));
    build(nqubits, &marked, iterations)
}

fn build(nqubits: usize, marked: &[usize], iterations: usize) -> Result<Circuit, GroverError> {
    let oracle = multi_oracle(nqubits, marked)?;
    let diffusion = diffusion(nqubits);

    let mut circ = Circuit::with_bits(nqubits, nqubits);
    circ.h_layer();
    for _ in 0..iterations {
        circ.append(&oracle)?;
        circ.append(&diffusion)?;
    }
    circ.measure_all();
    Ok(circ)
}

/// Run a search with the default configuration and return the circuit
/// together with the observed counts.
pub fn amplify(
    nqubits: usize,
    marked: &[usize],
    iterations: Option<usize>,
) -> Result<(Circuit, Counts), GroverError> {
    let mut amp = Amplifier::new();
    amp.iterations = iterations;
    let run = amp.run(nqubits, marked)?;
    Ok((run.circuit, run.counts))
}

/// The result of [`Amplifier::run`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Amplified {
    /// distinct marked indices, in the order they were first given
    pub marked: Vec<usize>,
    pub iterations: usize,
    pub circuit: Circuit,
    pub counts: Counts,
}

/// Settings for a search run
///
/// ```
/// use grover::amplify::Amplifier;
/// let run = Amplifier::new().shots(200).seed(42).run(2, &[3, 3]).unwrap();
/// assert_eq!(run.marked, vec![3]);
/// assert_eq!(run.circuit.num_qubits(), 2);
/// assert_eq!(run.counts.get("11"), Some(&200));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Amplifier {
    pub shots: usize,
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
    pub max_qubits: usize,
}

impl Default for Amplifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Amplifier {
    pub fn new() -> Amplifier {
        Amplifier {
            shots: DEFAULT_SHOTS,
            iterations: None,
            seed: None,
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }

    pub fn shots(&mut self, shots: usize) -> &mut Self {
        self.shots = shots;
        self
    }

    pub fn iterations(&mut self, iterations: usize) -> &mut Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    pub fn max_qubits(&mut self, max_qubits: usize) -> &mut Self {
        self.max_qubits = max_qubits;
        self
    }

    /// A state-vector simulator with this configuration's seed and qubit limit
    pub fn simulator(&self) -> StateVectorSimulator {
        let mut sim = StateVectorSimulator::new();
        sim.max_qubits(self.max_qubits);
        if let Some(seed) = self.seed {
            sim.seed(seed);
        }
        sim
    }

    /// iteration count used for `nmarked` distinct marked states
    pub fn iterations_for(&self, nqubits: usize, nmarked: usize) -> usize {
        self.iterations
            .unwrap_or_else(|| optimal_iterations(nqubits, nmarked))
    }

    pub fn run(&self, nqubits: usize, marked: &[usize]) -> Result<Amplified, GroverError> {
        self.run_with(&mut self.simulator(), nqubits, marked)
    }

    /// Build the search circuit and execute it on `sim`.
    ///
    /// The register width is checked against `sim` before anything is built,
    /// since the circuit grows with the square root of the search space.
    pub fn run_with(
        &self,
        sim: &mut impl Simulator,
        nqubits: usize,
        marked: &[usize],
    ) -> Result<Amplified, GroverError> {
        let marked = validate_marked(nqubits, marked)?;
        sim.check_width(nqubits)?;
        let iterations = self.iterations_for(nqubits, marked.len());
        log::info!(
            "amplifying {:?} in a space of 2^{} with {} iterations",
            marked,
            nqubits,
            iterations
        );

        let circuit = build(nqubits, &marked, iterations)?;
        log::debug!("search circuit:\n{}", circuit.stats());

        let counts = sim.run(&circuit, self.shots)?;
        log::info!("{} shots gave {} distinct outcomes", self.shots, counts.len());
        Ok(Amplified {
            marked,
            iterations,
            circuit,
            counts,
        })
    }
}
