//! The `OutputWriter` trait implemented by backend writers.

use crate::{FriendWeightRow, HouseholdSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for simulation output.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of household snapshots.
    fn write_snapshots(&mut self, rows: &[HouseholdSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the friend weights used by one household step.
    fn write_friend_weights(&mut self, rows: &[FriendWeightRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
