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

//! Error types for building and running search circuits.

use crate::gate::GType;

/// Errors raised while building circuits or running a search.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GroverError {
    /// The search target is not present in the database.
    #[display("Target '{target}' not found in database.")]
    NotFound { target: String },
    /// A marked index does not fit in the register.
    #[display("Marked index {index} does not fit in {qubits} qubits")]
    InvalidIndex { index: usize, qubits: usize },
    /// The oracle was asked to mark nothing.
    #[display("At least one marked index is required")]
    NoMarkedStates,
    /// Circuits need at least one qubit.
    #[display("The search register needs at least one qubit")]
    NoQubits,
    /// Two circuits over different registers were composed.
    #[display("Cannot append a circuit on {_1} qubits to one on {_0} qubits")]
    QubitMismatch(usize, usize),
    /// The adjoint of a non-unitary gate was requested.
    #[display("Gate '{}' has no adjoint", _0.qasm_name())]
    NotUnitary(GType),
    /// The simulator rejected or failed to run the circuit.
    #[display("Simulation failed: {_0}")]
    #[from]
    Simulation(SimError),
}

impl std::error::Error for GroverError {}

/// Errors raised by a [`crate::simulator::Simulator`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SimError {
    #[display("{qubits} qubits exceeds the simulator limit of {max}")]
    TooManyQubits { qubits: usize, max: usize },
    #[display("Circuit contains no measurements")]
    NoMeasurements,
    #[display("Qubit {qubit} is out of range for a register of {qubits} qubits")]
    QubitOutOfRange { qubit: usize, qubits: usize },
    #[display("Classical bit {bit} is out of range for a register of {bits} bits")]
    BitOutOfRange { bit: usize, bits: usize },
    #[display("Gate '{_0}' has the wrong number of arguments")]
    BadArity(String),
    #[display("Qubit {_0} is used after it has been measured")]
    MidCircuitMeasurement(usize),
}

impl std::error::Error for SimError {}
