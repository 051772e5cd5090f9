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

//! Phase oracles marking one or more basis states.

use crate::circuit::Circuit;
use crate::error::GroverError;
use crate::gate::*;
use itertools::Itertools;

/// Flip the sign of |1...1> on the given register.
///
/// This is a multi-controlled X on the last qubit, controlled on all the
/// others, conjugated by Hadamards on the last qubit. On a single qubit there
/// are no controls, and it reduces to H X H = Z.
pub fn push_phase_flip_all_ones(circ: &mut Circuit) {
    let n = circ.num_qubits();
    if n == 0 {
        return;
    }
    let target = n - 1;
    let controls: Vec<usize> = (0..target).collect();
    circ.push(Gate::new(HAD, vec![target]));
    circ.push(Gate::mcx(&controls, target));
    circ.push(Gate::new(HAD, vec![target]));
}

/// The qubits that are 0 in the MSB-first binary expansion of `index`
pub fn zero_bits(nqubits: usize, index: usize) -> impl Iterator<Item = usize> {
    (0..nqubits).filter(move |q| (index >> (nqubits - 1 - q)) & 1 == 0)
}

/// Checks every marked index fits in the register and drops repeats, keeping
/// the first occurrence of each index.
///
/// A repeated index would flip the same sign twice and cancel out, so the
/// result is what the oracle and the iteration count should be built from.
pub fn validate_marked(nqubits: usize, marked: &[usize]) -> Result<Vec<usize>, GroverError> {
    if nqubits == 0 {
        return Err(GroverError::NoQubits);
    }
    if marked.is_empty() {
        return Err(GroverError::NoMarkedStates);
    }
    // indices of at least 2^64 are impossible, so any index fits a register that wide
    let fits = |m: usize| nqubits >= usize::BITS as usize || m >> nqubits == 0;
    if let Some(&index) = marked.iter().find(|&&m| !fits(m)) {
        return Err(GroverError::InvalidIndex {
            index,
            qubits: nqubits,
        });
    }
    Ok(marked.iter().copied().unique().collect())
}

/// An oracle flipping the sign of the basis state `marked`.
pub fn oracle(nqubits: usize, marked: usize) -> Result<Circuit, GroverError> {
    multi_oracle(nqubits, &[marked])
}

/// An oracle flipping the sign of each of the basis states in `marked`.
///
/// Each index gets its own X / phase flip / X block. The blocks commute, so
/// their order does not matter.
pub fn multi_oracle(nqubits: usize, marked: &[usize]) -> Result<Circuit, GroverError> {
    let marked = validate_marked(nqubits, marked)?;
    let mut circ = Circuit::new(nqubits);
    for m in marked {
        let mut flips = Circuit::new(nqubits);
        flips.x_layer(zero_bits(nqubits, m));

        circ += &flips;
        push_phase_flip_all_ones(&mut circ);
        circ += &flips.to_adjoint()?;
    }
    Ok(circ)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateVector;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    fn assert_flips(s: &StateVector, marked: &[usize]) {
        let n = s.num_qubits();
        let amp = 1.0 / f64::sqrt((1usize << n) as f64);
        for (i, a) in s.amplitudes().enumerate() {
            let expected = if marked.contains(&i) { -amp } else { amp };
            assert_abs_diff_eq!(a.re, expected, epsilon = 1e-12);
            assert_abs_diff_eq!(a.im, 0.0, epsilon = 1e-12);
        }
    }

    #[rstest]
    fn flips_only_marked(#[values(1, 2, 3, 4)] n: usize) {
        for m in 0..(1 << n) {
            let mut s = StateVector::uniform(n);
            s.apply_circuit(&oracle(n, m).unwrap()).unwrap();
            assert_flips(&s, &[m]);
        }
    }

    #[test]
    fn multi_flips_each_marked() {
        let mut s = StateVector::uniform(3);
        s.apply_circuit(&multi_oracle(3, &[5, 7]).unwrap()).unwrap();
        assert_flips(&s, &[5, 7]);

        let mut s = StateVector::uniform(4);
        s.apply_circuit(&multi_oracle(4, &[0, 9, 3, 15]).unwrap())
            .unwrap();
        assert_flips(&s, &[0, 3, 9, 15]);
    }

    #[test]
    fn repeated_marks_do_not_cancel() {
        let c = multi_oracle(3, &[5, 5, 7, 5]).unwrap();
        assert_eq!(c, multi_oracle(3, &[5, 7]).unwrap());
    }

    #[test]
    fn single_qubit_oracle() {
        let c = oracle(1, 1).unwrap();
        assert_eq!(
            c.to_string(),
            "qreg q[1];\nh q[0];\nx q[0];\nh q[0];\n"
        );
        let c = oracle(1, 0).unwrap();
        assert_eq!(c.num_gates_of_type(NOT), 3);
    }

    #[test]
    fn oracle_gates() {
        // 5 = 101, so only qubit 1 is flipped
        let c = oracle(3, 5).unwrap();
        assert_eq!(
            c.to_string(),
            "qreg q[3];\nx q[1];\nh q[2];\nccx q[0], q[1], q[2];\nh q[2];\nx q[1];\n"
        );
        let c = oracle(5, 0).unwrap();
        assert_eq!(c.num_gates_of_type(MCX), 1);
        assert_eq!(c.num_gates_of_type(NOT), 10);
    }

    #[rstest]
    #[case(3, &[8])]
    #[case(3, &[1, 2, 100])]
    #[case(1, &[2])]
    fn rejects_out_of_range(#[case] n: usize, #[case] marked: &[usize]) {
        let index = *marked.iter().find(|&&m| m >= 1 << n).unwrap();
        assert_eq!(
            multi_oracle(n, marked),
            Err(GroverError::InvalidIndex { index, qubits: n })
        );
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(multi_oracle(3, &[]), Err(GroverError::NoMarkedStates));
        assert_eq!(oracle(0, 0), Err(GroverError::NoQubits));
    }
}
