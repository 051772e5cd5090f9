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

//! The boundary between the search driver and circuit execution.
//!
//! The driver only depends on the [`Simulator`] trait. [`StateVectorSimulator`]
//! is the bundled implementation: it evolves the full state vector exactly and
//! then samples measurement outcomes from it.

use crate::circuit::Circuit;
use crate::error::SimError;
use crate::gate::*;
use crate::state::StateVector;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;

/// Observed classical bitstrings and how many shots produced each of them.
///
/// Character `i` of a bitstring is classical bit `i`.
pub type Counts = FxHashMap<String, usize>;

/// Something that can execute a measured circuit a fixed number of times.
pub trait Simulator {
    /// Fails if a register of `nqubits` qubits is beyond what this simulator
    /// can run. Callers check this before building a circuit.
    fn check_width(&self, _nqubits: usize) -> Result<(), SimError> {
        Ok(())
    }

    fn run(&mut self, circ: &Circuit, shots: usize) -> Result<Counts, SimError>;
}

/// Widest register [`StateVectorSimulator`] accepts unless told otherwise.
pub const DEFAULT_MAX_QUBITS: usize = 24;

/// Samples measurement outcomes from an exact state vector.
///
/// Only terminal measurements are supported: once a qubit is measured, no
/// further gate may touch it.
pub struct StateVectorSimulator {
    pub rng: SmallRng,
    pub max_qubits: usize,
}

impl Default for StateVectorSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StateVectorSimulator {
    pub fn new() -> StateVectorSimulator {
        StateVectorSimulator {
            rng: SmallRng::from_os_rng(),
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }

    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn max_qubits(&mut self, max_qubits: usize) -> &mut Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Checks the circuit can be sampled and returns, for each classical bit,
    /// the qubit measured into it.
    fn readout(&self, circ: &Circuit) -> Result<Vec<Option<usize>>, SimError> {
        let qubits = circ.num_qubits();
        let bits = circ.num_bits();
        self.check_width(qubits)?;

        let mut measured = vec![false; qubits];
        let mut readout = vec![None; bits];
        for g in &circ.gates {
            if g.t == Measure {
                if !g.has_valid_arity() {
                    return Err(SimError::BadArity(g.to_qasm()));
                }
                let (qubit, bit) = (g.qs[0], g.bits[0]);
                if qubit >= qubits {
                    return Err(SimError::QubitOutOfRange { qubit, qubits });
                }
                if bit >= bits {
                    return Err(SimError::BitOutOfRange { bit, bits });
                }
                measured[qubit] = true;
                readout[bit] = Some(qubit);
            } else if let Some(&q) = g.qs.iter().find(|&&q| q < qubits && measured[q]) {
                return Err(SimError::MidCircuitMeasurement(q));
            }
        }

        if readout.iter().all(Option::is_none) {
            return Err(SimError::NoMeasurements);
        }
        Ok(readout)
    }
}

/// classical bitstring produced by measuring the given basis state
fn bitstring(index: usize, qubits: usize, readout: &[Option<usize>]) -> String {
    readout
        .iter()
        .map(|q| match q {
            Some(q) if (index >> (qubits - 1 - q)) & 1 == 1 => '1',
            _ => '0',
        })
        .collect()
}

impl Simulator for StateVectorSimulator {
    fn check_width(&self, nqubits: usize) -> Result<(), SimError> {
        if nqubits > self.max_qubits {
            return Err(SimError::TooManyQubits {
                qubits: nqubits,
                max: self.max_qubits,
            });
        }
        Ok(())
    }

    fn run(&mut self, circ: &Circuit, shots: usize) -> Result<Counts, SimError> {
        let readout = self.readout(circ)?;
        let state = StateVector::from_circuit(circ)?;

        let cumulative: Vec<f64> = state
            .probabilities()
            .iter()
            .scan(0.0, |acc, &p| {
                *acc += p;
                Some(*acc)
            })
            .collect();
        let total = cumulative.last().copied().unwrap_or(0.0);
        let last = cumulative.len() - 1;

        let mut hits: FxHashMap<usize, usize> = FxHashMap::default();
        for _ in 0..shots {
            let x = self.rng.random::<f64>() * total;
            let i = cumulative.partition_point(|&c| c <= x).min(last);
            *hits.entry(i).or_insert(0) += 1;
        }
        log::debug!(
            "sampled {} shots over {} distinct basis states",
            shots,
            hits.len()
        );

        let qubits = circ.num_qubits();
        let mut counts = Counts::default();
        for (i, n) in hits {
            *counts.entry(bitstring(i, qubits, &readout)).or_insert(0) += n;
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn sim() -> StateVectorSimulator {
        let mut sim = StateVectorSimulator::new();
        sim.seed(1337);
        sim
    }

    #[rstest]
    fn basis_state_is_deterministic(mut sim: StateVectorSimulator) {
        let mut c = Circuit::new(3);
        c.x_layer([0, 2]);
        c.measure_all();
        let counts = sim.run(&c, 100).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("101"), Some(&100));
    }

    #[rstest]
    fn counts_sum_to_shots(mut sim: StateVectorSimulator) {
        let mut c = Circuit::new(4);
        c.h_layer();
        c.measure_all();
        for shots in [0, 1, 17, 1000] {
            let counts = sim.run(&c, shots).unwrap();
            assert_eq!(counts.values().sum::<usize>(), shots);
            assert!(counts.keys().all(|k| k.len() == 4));
        }
    }

    #[rstest]
    fn superposition_hits_both_outcomes(mut sim: StateVectorSimulator) {
        let mut c = Circuit::new(1);
        c.h_layer();
        c.measure_all();
        let counts = sim.run(&c, 1000).unwrap();
        let zeros = counts.get("0").copied().unwrap_or(0);
        let ones = counts.get("1").copied().unwrap_or(0);
        assert_eq!(zeros + ones, 1000);
        assert!(zeros > 400 && ones > 400);
    }

    #[test]
    fn seeded_runs_repeat() {
        let mut c = Circuit::new(3);
        c.h_layer();
        c.measure_all();
        let a = StateVectorSimulator::new().seed(5).run(&c, 500).unwrap();
        let b = StateVectorSimulator::new().seed(5).run(&c, 500).unwrap();
        assert_eq!(a, b);
    }

    #[rstest]
    fn partial_measurement(mut sim: StateVectorSimulator) {
        let mut c = Circuit::with_bits(2, 3);
        c.x_layer([1]);
        c.push(Gate::measure(1, 0));
        c.push(Gate::measure(0, 2));
        let counts = sim.run(&c, 10).unwrap();
        assert_eq!(counts.get("100"), Some(&10));
    }

    #[rstest]
    fn rejects_bad_circuits(mut sim: StateVectorSimulator) {
        let mut c = Circuit::new(2);
        c.h_layer();
        assert_eq!(sim.run(&c, 10), Err(SimError::NoMeasurements));

        let mut c = Circuit::with_bits(1, 1);
        c.push(Gate::measure(0, 0));
        c.push(Gate::new(HAD, vec![0]));
        assert_eq!(sim.run(&c, 10), Err(SimError::MidCircuitMeasurement(0)));

        let mut c = Circuit::with_bits(1, 1);
        c.push(Gate::measure(0, 1));
        assert_eq!(
            sim.run(&c, 10),
            Err(SimError::BitOutOfRange { bit: 1, bits: 1 })
        );

        let mut c = Circuit::new(4);
        c.measure_all();
        sim.max_qubits(3);
        assert_eq!(
            sim.run(&c, 10),
            Err(SimError::TooManyQubits { qubits: 4, max: 3 })
        );
    }
}
