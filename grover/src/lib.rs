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

//! Grover search circuits and a state-vector simulator to run them on.
//!
//! The [`oracle`] and [`diffusion`] modules build the two halves of a Grover
//! iteration, [`amplify`] composes them into a measured circuit and runs it on
//! a [`simulator::Simulator`], and [`search`] maps a classical database
//! lookup onto marked basis states.
//!
//! ```
//! use grover::search::search_multi;
//! let db = ["Bob", "Eve", "Mallory", "Trent", "Peggy", "Alice", "Victor", "Alice"];
//! let outcome = search_multi(&db, &"Alice").unwrap();
//! assert_eq!(outcome.marked, vec![5, 7]);
//! ```

pub mod amplify;
pub mod circuit;
pub mod cli;
pub mod diffusion;
pub mod error;
pub mod gate;
pub mod oracle;
pub mod report;
pub mod search;
pub mod simulator;
pub mod state;
