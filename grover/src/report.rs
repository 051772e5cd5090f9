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

//! Turning measurement counts back into database answers.

use crate::simulator::Counts;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// One observed bitstring, decoded to an index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub bits: String,
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// set when the index only exists because the register was padded to a
    /// power of two
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub out_of_range: bool,
    pub count: usize,
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}⟩ (index {}", self.bits, self.index)?;
        if self.out_of_range {
            write!(f, ", out of range")?;
        } else if let Some(label) = &self.label {
            write!(f, ", '{label}'")?;
        }
        write!(f, "): {} times", self.count)
    }
}

/// Index of a bitstring whose first character is the most significant bit.
pub fn decode(bits: &str) -> usize {
    bits.chars()
        .fold(0, |acc, c| (acc << 1) | usize::from(c == '1'))
}

fn sorted(rows: impl Iterator<Item = ReportRow>) -> Vec<ReportRow> {
    rows.sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.bits.cmp(&b.bits)))
        .collect()
}

/// Rows for every observed bitstring, labelled with the database entry at
/// its index, most frequent first.
pub fn rows<T: fmt::Display>(counts: &Counts, database: &[T]) -> Vec<ReportRow> {
    sorted(counts.iter().map(|(bits, &count)| {
        let index = decode(bits);
        let label = database.get(index).map(|v| v.to_string());
        ReportRow {
            bits: bits.clone(),
            index,
            out_of_range: label.is_none(),
            label,
            count,
        }
    }))
}

/// Rows without database labels, most frequent first.
pub fn unlabelled_rows(counts: &Counts) -> Vec<ReportRow> {
    sorted(counts.iter().map(|(bits, &count)| ReportRow {
        bits: bits.clone(),
        index: decode(bits),
        label: None,
        out_of_range: false,
        count,
    }))
}

/// Fraction of all shots that decoded to one of `marked`; 0 when there were
/// no shots.
pub fn success_rate(counts: &Counts, marked: &[usize]) -> f64 {
    let total: usize = counts.values().sum();
    if total == 0 {
        return 0.0;
    }
    let hits: usize = counts
        .iter()
        .filter(|(bits, _)| marked.contains(&decode(bits)))
        .map(|(_, &n)| n)
        .sum();
    hits as f64 / total as f64
}

/// Everything a finished search reports, in a form that can be printed or
/// serialised.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub qubits: usize,
    pub marked: Vec<usize>,
    pub iterations: usize,
    pub shots: usize,
    pub success_rate: f64,
    pub rows: Vec<ReportRow>,
}

impl Summary {
    pub fn new(
        qubits: usize,
        marked: Vec<usize>,
        iterations: usize,
        counts: &Counts,
        rows: Vec<ReportRow>,
    ) -> Summary {
        Summary {
            qubits,
            iterations,
            shots: counts.values().sum(),
            success_rate: success_rate(counts, &marked),
            marked,
            rows,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marked = self
            .marked
            .iter()
            .map(|&m| format!("{m} (|{m:0w$b}⟩)", w = self.qubits))
            .join(", ");
        writeln!(
            f,
            "Marked {marked} with {} iterations over {} qubits",
            self.iterations, self.qubits
        )?;
        writeln!(f, "\nMeasurement results:")?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        write!(
            f,
            "\nSuccess rate: {:.1}% of {} shots",
            100.0 * self.success_rate,
            self.shots
        )
    }
}
