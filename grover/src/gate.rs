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

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum GType {
    NOT,
    HAD,
    CNOT,
    TOFF,
    MCX,
    Measure,
}

pub use GType::*;

impl GType {
    pub fn qasm_name(&self) -> &'static str {
        match self {
            NOT => "x",
            HAD => "h",
            CNOT => "cx",
            TOFF => "ccx",
            MCX => "mcx",
            Measure => "measure",
        }
    }

    /// number of qubits the gate acts on
    ///
    /// If the gate type requires a fixed number of qubits, return it,
    /// otherwise None.
    pub fn num_qubits(&self) -> Option<usize> {
        match self {
            CNOT => Some(2),
            TOFF => Some(3),
            MCX => None,
            _ => Some(1),
        }
    }

    /// true for the gate types that act on the state as a unitary
    pub fn is_unitary(&self) -> bool {
        *self != Measure
    }
}

/// A gate applied to a list of qubits
///
/// For controlled gates, `qs` lists the controls followed by the target.
/// A measurement reads `qs[0]` into the classical bit `bits[0]`.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Gate {
    pub t: GType,
    pub qs: Vec<usize>,
    pub bits: Vec<usize>,
}

impl Gate {
    pub fn new(t: GType, qs: Vec<usize>) -> Gate {
        Gate {
            t,
            qs,
            bits: vec![],
        }
    }

    /// An X on `target` controlled on every qubit in `controls` being 1
    ///
    /// The gate type is chosen by the number of controls, so zero controls
    /// gives a plain NOT.
    pub fn mcx(controls: &[usize], target: usize) -> Gate {
        let t = match controls.len() {
            0 => NOT,
            1 => CNOT,
            2 => TOFF,
            _ => MCX,
        };
        let mut qs = controls.to_vec();
        qs.push(target);
        Gate::new(t, qs)
    }

    pub fn measure(qubit: usize, bit: usize) -> Gate {
        Gate {
            t: Measure,
            qs: vec![qubit],
            bits: vec![bit],
        }
    }

    pub fn qasm_name(&self) -> &'static str {
        self.t.qasm_name()
    }

    /// the qubit a controlled gate acts on, i.e. the last one in `qs`
    pub fn target(&self) -> Option<usize> {
        self.qs.last().copied()
    }

    /// the control qubits of the gate, empty for single-qubit gates
    pub fn controls(&self) -> &[usize] {
        match self.t {
            CNOT | TOFF | MCX => &self.qs[..self.qs.len().saturating_sub(1)],
            _ => &[],
        }
    }

    /// checks the number of qubits and classical bits matches the gate type
    pub fn has_valid_arity(&self) -> bool {
        match self.t {
            Measure => self.qs.len() == 1 && self.bits.len() == 1,
            MCX => !self.qs.is_empty() && self.bits.is_empty(),
            t => t.num_qubits() == Some(self.qs.len()) && self.bits.is_empty(),
        }
    }

    pub fn to_qasm(&self) -> String {
        let mut s = String::from(self.qasm_name());

        s += " ";
        let qs: Vec<String> = self.qs.iter().map(|i| format!("q[{i}]")).collect();
        s += &qs.join(", ");

        if self.t == Measure {
            let bits: Vec<String> = self.bits.iter().map(|i| format!("c[{i}]")).collect();
            s += " -> ";
            s += &bits.join(", ");
        }

        s
    }
}
