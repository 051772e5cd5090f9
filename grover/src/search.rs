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

//! Searching a classical database with amplitude amplification.
//!
//! The database is only used to size the register and to find the indices
//! holding the target. Those indices become the marked states of the search.

use crate::amplify::Amplifier;
use crate::circuit::Circuit;
use crate::error::GroverError;
use crate::report::{self, ReportRow};
use crate::simulator::Counts;
use std::fmt;

/// ceil(log2(len)) qubits, but at least one
pub fn qubits_for(len: usize) -> usize {
    (len.next_power_of_two().trailing_zeros() as usize).max(1)
}

/// index of the first element equal to `target`
pub fn find_first<T: PartialEq>(database: &[T], target: &T) -> Option<usize> {
    database.iter().position(|v| v == target)
}

/// indices of every element equal to `target`, in increasing order
pub fn find_all<T: PartialEq>(database: &[T], target: &T) -> Vec<usize> {
    database
        .iter()
        .enumerate()
        .filter(|(_, v)| *v == target)
        .map(|(i, _)| i)
        .collect()
}

/// What a database search marked, ran, and observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub marked: Vec<usize>,
    pub qubits: usize,
    pub iterations: usize,
    pub circuit: Circuit,
    pub counts: Counts,
}

impl SearchOutcome {
    /// Observed outcomes labelled with database entries, most frequent first.
    pub fn report<T: fmt::Display>(&self, database: &[T]) -> Vec<ReportRow> {
        report::rows(&self.counts, database)
    }

    /// Fraction of shots that landed on a marked index.
    pub fn success_rate(&self) -> f64 {
        report::success_rate(&self.counts, &self.marked)
    }
}

fn not_found<T: fmt::Display>(target: &T) -> GroverError {
    GroverError::NotFound {
        target: target.to_string(),
    }
}

impl Amplifier {
    /// Search for the first occurrence of `target`.
    ///
    /// Later duplicates are deliberately not marked: only the first match is
    /// the solution of a single-solution search.
    pub fn search_single<T: PartialEq + fmt::Display>(
        &self,
        database: &[T],
        target: &T,
    ) -> Result<SearchOutcome, GroverError> {
        let index = find_first(database, target).ok_or_else(|| not_found(target))?;
        self.search_indices(database.len(), vec![index])
    }

    /// Search for every occurrence of `target`.
    pub fn search_multi<T: PartialEq + fmt::Display>(
        &self,
        database: &[T],
        target: &T,
    ) -> Result<SearchOutcome, GroverError> {
        let marked = find_all(database, target);
        if marked.is_empty() {
            return Err(not_found(target));
        }
        self.search_indices(database.len(), marked)
    }

    fn search_indices(&self, len: usize, marked: Vec<usize>) -> Result<SearchOutcome, GroverError> {
        let qubits = qubits_for(len);
        for &m in &marked {
            log::info!("target is at index {m} (|{m:0qubits$b}>)");
        }
        let run = self.run(qubits, &marked)?;
        Ok(SearchOutcome {
            marked: run.marked,
            qubits,
            iterations: run.iterations,
            circuit: run.circuit,
            counts: run.counts,
        })
    }
}

/// Search for the first occurrence of `target` with the default configuration.
pub fn search_single<T: PartialEq + fmt::Display>(
    database: &[T],
    target: &T,
) -> Result<SearchOutcome, GroverError> {
    Amplifier::new().search_single(database, target)
}

/// Search for every occurrence of `target` with the default configuration.
pub fn search_multi<T: PartialEq + fmt::Display>(
    database: &[T],
    target: &T,
) -> Result<SearchOutcome, GroverError> {
    Amplifier::new().search_multi(database, target)
}
