//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use fa_agent::HouseholdStore;
use fa_behavior::StepReport;
use fa_core::Tick;
use fa_sim::{SimObserver, TickSummary};

use crate::row::{FriendWeightRow, HouseholdSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes household snapshots, tick summaries, and
/// (optionally) per-step friend weights to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:         W,
    record_weights: bool,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, record_weights: false, last_error: None }
    }

    /// Also write one row per `(household, friend)` pair on every step.
    pub fn with_friend_weights(mut self, enabled: bool) -> Self {
        self.record_weights = enabled;
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_household_step(&mut self, report: &StepReport) {
        if !self.record_weights || report.weights.is_empty() {
            return;
        }
        let rows: Vec<FriendWeightRow> = report
            .weights
            .iter()
            .map(|&(friend, weight)| FriendWeightRow {
                tick:      report.tick.0,
                agent_id:  report.agent.0,
                friend_id: friend.0,
                weight,
            })
            .collect();
        let result = self.writer.write_friend_weights(&rows);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, households: &HouseholdStore) {
        let rows: Vec<HouseholdSnapshotRow> = households
            .snapshots()
            .iter()
            .map(|h| HouseholdSnapshotRow::new(tick, h))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
