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

//! Exact state-vector evolution for the gate set used by the search circuits.

use crate::circuit::Circuit;
use crate::error::SimError;
use crate::gate::*;
use itertools::Itertools;
use ndarray::parallel::prelude::*;
use ndarray::prelude::*;
use ndarray::*;
use num::Complex;

pub type Amplitude = Complex<f64>;

/// A pure state of `n` qubits
///
/// Amplitudes are stored as a tensor with one axis of size 2 per qubit, where
/// axis `i` is qubit `i`. Iterating in logical (row-major) order therefore
/// visits basis states in increasing index order, with qubit 0 as the most
/// significant bit.
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    amps: ArrayD<Amplitude>,
}

impl StateVector {
    /// The computational basis state |0...0>
    pub fn zero(nqubits: usize) -> StateVector {
        let mut amps = ArrayD::zeros(vec![2; nqubits]);
        if let Some(a) = amps.first_mut() {
            *a = Complex::new(1.0, 0.0);
        }
        StateVector { amps }
    }

    /// The uniform superposition over all basis states
    pub fn uniform(nqubits: usize) -> StateVector {
        let mut s = StateVector::zero(nqubits);
        for q in 0..nqubits {
            s.hadamard_at(q);
        }
        s
    }

    /// Run the unitary part of a circuit on |0...0>. Measurements are skipped.
    pub fn from_circuit(circ: &Circuit) -> Result<StateVector, SimError> {
        let mut s = StateVector::zero(circ.num_qubits());
        s.apply_circuit(circ)?;
        Ok(s)
    }

    pub fn num_qubits(&self) -> usize {
        self.amps.ndim()
    }

    /// amplitude of the basis state with the given index
    pub fn amplitude(&self, index: usize) -> Option<Amplitude> {
        self.amps
            .as_slice()
            .and_then(|amps| amps.get(index))
            .copied()
    }

    pub fn amplitudes(&self) -> impl Iterator<Item = Amplitude> + '_ {
        self.amps.iter().copied()
    }

    /// outcome probabilities, indexed by basis state
    pub fn probabilities(&self) -> Vec<f64> {
        self.amps.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Apply every unitary gate of the circuit in order.
    pub fn apply_circuit(&mut self, circ: &Circuit) -> Result<(), SimError> {
        for g in &circ.gates {
            self.apply(g)?;
        }
        Ok(())
    }

    /// Apply a single gate. Measurements leave the state untouched; they are
    /// read out by the simulator.
    pub fn apply(&mut self, g: &Gate) -> Result<(), SimError> {
        self.check_gate(g)?;
        match g.t {
            HAD => self.hadamard_at(g.qs[0]),
            NOT | CNOT | TOFF | MCX => self.mcx_at(g.controls(), g.qs[g.qs.len() - 1]),
            Measure => {}
        }
        Ok(())
    }

    fn check_gate(&self, g: &Gate) -> Result<(), SimError> {
        if !g.has_valid_arity() || !g.qs.iter().all_unique() {
            return Err(SimError::BadArity(g.to_qasm()));
        }
        let qubits = self.num_qubits();
        match g.qs.iter().find(|&&q| q >= qubits) {
            Some(&qubit) => Err(SimError::QubitOutOfRange { qubit, qubits }),
            None => Ok(()),
        }
    }

    /// split into two non-overlapping pieces, where every control is 1 and the
    /// target is 0 and 1, respectively
    fn slice_pair_mut(
        &mut self,
        controls: &[usize],
        target: usize,
    ) -> (ArrayViewMut<Amplitude, IxDyn>, ArrayViewMut<Amplitude, IxDyn>) {
        let ndim = self.amps.ndim();
        let slice = |t: usize| -> SliceInfo<Vec<SliceInfoElem>, IxDyn, IxDyn> {
            SliceInfo::try_from(Vec::from_iter((0..ndim).map(|i| {
                if i == target {
                    SliceInfoElem::from(t)
                } else if controls.contains(&i) {
                    SliceInfoElem::from(1)
                } else {
                    SliceInfoElem::from(..)
                }
            })))
            .unwrap()
        };
        let slice0 = slice(0);
        let slice1 = slice(1);

        self.amps.multi_slice_mut((slice0.as_ref(), slice1.as_ref()))
    }

    fn hadamard_at(&mut self, q: usize) {
        let n = Complex::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        let (mut ma, mut mb) = self.slice_pair_mut(&[], q);

        par_azip!((a in &mut ma, b in &mut mb) {
            let a1 = *a;
            *a = n * (*a + *b);
            *b = n * (a1 - *b);
        });
    }

    /// X on `target`, controlled on all of `controls`
    fn mcx_at(&mut self, controls: &[usize], target: usize) {
        let (mut ma, mut mb) = self.slice_pair_mut(controls, target);
        par_azip!((a in &mut ma, b in &mut mb) {
            std::mem::swap(a, b);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    fn assert_state(s: &StateVector, expected: &[f64]) {
        assert_eq!(s.amplitudes().count(), expected.len());
        for (a, &e) in s.amplitudes().zip(expected) {
            assert_abs_diff_eq!(a.re, e, epsilon = 1e-12);
            assert_abs_diff_eq!(a.im, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_state() {
        let s = StateVector::zero(3);
        assert_eq!(s.num_qubits(), 3);
        assert_state(&s, &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn uniform_state() {
        let s = StateVector::uniform(2);
        assert_state(&s, &[0.5, 0.5, 0.5, 0.5]);
        let total: f64 = StateVector::uniform(5).probabilities().iter().sum();
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn qubit_zero_is_most_significant() {
        let mut s = StateVector::zero(3);
        s.apply(&Gate::new(NOT, vec![0])).unwrap();
        assert_eq!(s.amplitude(4), Some(Complex::new(1.0, 0.0)));

        let mut s = StateVector::zero(3);
        s.apply(&Gate::new(NOT, vec![2])).unwrap();
        assert_eq!(s.amplitude(1), Some(Complex::new(1.0, 0.0)));
    }

    #[rstest]
    #[case(0b000, 0b000)]
    #[case(0b100, 0b100)]
    #[case(0b110, 0b111)]
    #[case(0b111, 0b110)]
    #[case(0b011, 0b011)]
    fn toffoli(#[case] input: usize, #[case] output: usize) {
        let mut c = Circuit::new(3);
        c.x_layer((0..3).filter(|q| input & (1 << (2 - q)) != 0));
        c.push(Gate::mcx(&[0, 1], 2));
        let s = StateVector::from_circuit(&c).unwrap();
        let mut expected = vec![0.0; 8];
        expected[output] = 1.0;
        assert_state(&s, &expected);
    }

    #[test]
    fn mcx_needs_every_control() {
        let mut c = Circuit::new(4);
        c.x_layer([0, 1, 2]);
        c.push(Gate::mcx(&[0, 1, 2], 3));
        let s = StateVector::from_circuit(&c).unwrap();
        assert_abs_diff_eq!(s.probabilities()[0b1111], 1.0, epsilon = 1e-12);

        let mut c = Circuit::new(4);
        c.x_layer([0, 2]);
        c.push(Gate::mcx(&[0, 1, 2], 3));
        let s = StateVector::from_circuit(&c).unwrap();
        assert_abs_diff_eq!(s.probabilities()[0b1010], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn h_x_h_is_z() {
        let mut c = Circuit::new(1);
        c.push(Gate::new(NOT, vec![0]));
        c.push(Gate::new(HAD, vec![0]));
        c.push(Gate::new(NOT, vec![0]));
        c.push(Gate::new(HAD, vec![0]));
        let s = StateVector::from_circuit(&c).unwrap();
        assert_state(&s, &[0.0, -1.0]);
    }

    #[test]
    fn controlled_phase_from_mcx() {
        let mut c = Circuit::new(2);
        c.h_layer();
        c.push(Gate::new(HAD, vec![1]));
        c.push(Gate::mcx(&[0], 1));
        c.push(Gate::new(HAD, vec![1]));
        let s = StateVector::from_circuit(&c).unwrap();
        assert_state(&s, &[0.5, 0.5, 0.5, -0.5]);
    }

    #[test]
    fn amplitude_by_index() {
        let mut c = Circuit::new(3);
        c.x_layer([0, 2]);
        let s = StateVector::from_circuit(&c).unwrap();
        assert_eq!(s.amplitude(0b101), Some(Complex::new(1.0, 0.0)));
        assert_eq!(s.amplitude(0b100), Some(Complex::new(0.0, 0.0)));
        assert_eq!(s.amplitude(8), None);
    }

    #[test]
    fn bad_gates() {
        let mut s = StateVector::zero(2);
        assert_eq!(
            s.apply(&Gate::new(HAD, vec![2])),
            Err(SimError::QubitOutOfRange {
                qubit: 2,
                qubits: 2
            })
        );
        assert!(matches!(
            s.apply(&Gate::new(CNOT, vec![1, 1])),
            Err(SimError::BadArity(_))
        ));
        assert!(matches!(
            s.apply(&Gate::new(TOFF, vec![0, 1])),
            Err(SimError::BadArity(_))
        ));
    }
}
