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

use crate::error::GroverError;
use crate::gate::*;
use std::collections::VecDeque;
use std::fmt;

/// A type for quantum circuits
///
/// A circuit acts on `nqubits` qubits and writes measurement results into
/// `nbits` classical bits.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Circuit {
    nqubits: usize,
    nbits: usize,
    pub gates: VecDeque<Gate>,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct CircuitStats {
    pub qubits: usize,
    pub total: usize,
    pub oneq: usize,
    pub twoq: usize,
    pub moreq: usize,
    pub measurements: usize,
}

impl CircuitStats {
    pub fn make(c: &Circuit) -> Self {
        let mut s = CircuitStats {
            qubits: c.num_qubits(),
            total: c.num_gates(),
            oneq: 0,
            twoq: 0,
            moreq: 0,
            measurements: 0,
        };
        for g in &c.gates {
            if g.t == Measure {
                s.measurements += 1;
                continue;
            }
            match g.qs.len() {
                1 => {
                    s.oneq += 1;
                }
                2 => {
                    s.twoq += 1;
                }
                _ => {
                    s.moreq += 1;
                }
            }
        }
        s
    }
}

impl fmt::Display for CircuitStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circuit with {} qubits, {} gates\n  1-qubit: {}\n  2-qubit: {}\n  n-qubit: {}\n  measurements: {}", self.qubits, self.total, self.oneq, self.twoq, self.moreq, self.measurements)
    }
}

impl Circuit {
    pub fn new(nqubits: usize) -> Circuit {
        Circuit::with_bits(nqubits, 0)
    }

    pub fn with_bits(nqubits: usize, nbits: usize) -> Circuit {
        Circuit {
            gates: VecDeque::new(),
            nqubits,
            nbits,
        }
    }

    pub fn num_qubits(&self) -> usize {
        self.nqubits
    }

    pub fn num_bits(&self) -> usize {
        self.nbits
    }

    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    pub fn num_gates_of_type(&self, t: GType) -> usize {
        self.gates.iter().filter(|g| g.t == t).count()
    }

    pub fn push(&mut self, g: Gate) {
        self.gates.push_back(g);
    }

    /// Hadamard on every qubit
    pub fn h_layer(&mut self) {
        for q in 0..self.nqubits {
            self.push(Gate::new(HAD, vec![q]));
        }
    }

    /// NOT on each of the given qubits
    pub fn x_layer(&mut self, qs: impl IntoIterator<Item = usize>) {
        for q in qs {
            self.push(Gate::new(NOT, vec![q]));
        }
    }

    /// Measure qubit `i` into classical bit `i` for every qubit, growing the
    /// classical register if needed.
    pub fn measure_all(&mut self) {
        self.nbits = self.nbits.max(self.nqubits);
        for q in 0..self.nqubits {
            self.push(Gate::measure(q, q));
        }
    }

    pub fn reverse(&mut self) {
        self.gates.make_contiguous().reverse();
    }

    /// Replace the circuit with its inverse.
    ///
    /// Every unitary gate we support is self-inverse, so this is just the
    /// reversed gate list. Circuits containing measurements have no adjoint.
    pub fn adjoint(&mut self) -> Result<(), GroverError> {
        if let Some(g) = self.gates.iter().find(|g| !g.t.is_unitary()) {
            return Err(GroverError::NotUnitary(g.t));
        }
        self.reverse();
        Ok(())
    }

    pub fn to_adjoint(&self) -> Result<Circuit, GroverError> {
        let mut c = self.clone();
        c.adjoint()?;
        Ok(c)
    }

    /// Append the gates of `other`, which must act on the same number of qubits.
    pub fn append(&mut self, other: &Circuit) -> Result<(), GroverError> {
        if self.nqubits != other.nqubits {
            return Err(GroverError::QubitMismatch(self.nqubits, other.nqubits));
        }
        *self += other;
        Ok(())
    }

    pub fn to_qasm(&self) -> String {
        String::from("OPENQASM 2.0;\ninclude \"qelib1.inc\";\n") + &self.to_string()
    }

    pub fn stats(&self) -> CircuitStats {
        CircuitStats::make(self)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "qreg q[{}];", self.num_qubits())?;
        if self.nbits > 0 {
            writeln!(f, "creg c[{}];", self.num_bits())?;
        }

        for g in &self.gates {
            writeln!(f, "{};", g.to_qasm())?;
        }

        Ok(())
    }
}

impl std::ops::Add<Circuit> for Circuit {
    type Output = Circuit;
    fn add(mut self, mut rhs: Circuit) -> Self::Output {
        if self.num_qubits() != rhs.num_qubits() {
            panic!("Cannot append circuits with different numbers of qubits");
        }
        self.nbits = self.nbits.max(rhs.nbits);
        self.gates.append(&mut rhs.gates);
        self
    }
}

impl std::ops::Add<&Circuit> for Circuit {
    type Output = Circuit;
    fn add(mut self, rhs: &Circuit) -> Self::Output {
        if self.num_qubits() != rhs.num_qubits() {
            panic!("Cannot append circuits with different numbers of qubits");
        }
        self += rhs;
        self
    }
}

impl std::ops::Add<&Circuit> for &Circuit {
    type Output = Circuit;
    fn add(self, rhs: &Circuit) -> Self::Output {
        self.clone() + rhs
    }
}

impl std::ops::AddAssign<&Circuit> for Circuit {
    fn add_assign(&mut self, rhs: &Self) {
        self.nbits = self.nbits.max(rhs.nbits);
        self.gates.extend(rhs.gates.iter().cloned());
    }
}
