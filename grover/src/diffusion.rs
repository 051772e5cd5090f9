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

use crate::circuit::Circuit;
use crate::oracle::push_phase_flip_all_ones;

/// The Grover diffusion operator on `nqubits` qubits.
///
/// Hadamards and NOTs on every qubit map the uniform superposition to
/// |1...1>, whose sign is flipped before the layers are undone. Up to a
/// global phase of -1 this is the inversion about the mean, 2|s><s| - I.
pub fn diffusion(nqubits: usize) -> Circuit {
    let mut prep = Circuit::new(nqubits);
    prep.h_layer();
    prep.x_layer(0..nqubits);

    let mut circ = prep.clone();
    push_phase_flip_all_ones(&mut circ);
    prep.reverse();
    circ + prep
}
