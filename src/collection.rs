//! Ordered run collection
//!
//! The collection is the sole owner of runs. Insertion order equals
//! chronological order equals sequence-number order. Sequence numbers
//! are allocated from a monotonic counter and are never reused, so a
//! deletion leaves the numbering of the remaining runs untouched.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Run;

/// Ordered, owning sequence of [`Run`] entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunCollection {
    runs: Vec<Run>,
    /// Highest sequence number ever assigned; survives deletions
    last_sequence: u32,
}

impl RunCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a run from raw input and append it.
    ///
    /// The new run's trend is classified against the current last run.
    /// A validation failure leaves the collection untouched; no
    /// partially-constructed run is ever inserted.
    pub fn add_run(
        &mut self,
        distance_km: Decimal,
        minutes: u32,
        seconds: u32,
        date: NaiveDate,
    ) -> Result<&Run> {
        let sequence = self.last_sequence + 1;
        let run = Run::create(sequence, distance_km, minutes, seconds, date, self.runs.last())?;

        debug!(sequence, %distance_km, trend = ?run.trend, "run added");
        self.last_sequence = sequence;
        self.runs.push(run);
        Ok(&self.runs[self.runs.len() - 1])
    }

    /// Remove the run at `index` without renumbering the remainder.
    /// Out-of-range indices are a soft failure.
    pub fn delete_run(&mut self, index: usize) -> Option<Run> {
        if index >= self.runs.len() {
            return None;
        }
        let run = self.runs.remove(index);
        debug!(sequence = run.sequence_number, "run deleted");
        Some(run)
    }

    /// The ordered run slice, as consumed by the statistics engines
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn get(&self, index: usize) -> Option<&Run> {
        self.runs.get(index)
    }

    /// Lookup by identity, used after a selected run may have been deleted
    pub fn find(&self, id: Uuid) -> Option<&Run> {
        self.runs.iter().find(|run| run.id == id)
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Run> {
        self.runs.iter()
    }
}

impl<'a> IntoIterator for &'a RunCollection {
    type Item = &'a Run;
    type IntoIter = std::slice::Iter<'a, Run>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}
