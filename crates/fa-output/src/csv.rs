//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `household_snapshots.csv`
//! - `tick_summaries.csv`
//! - `friend_weights.csv`
//!
//! Booleans are written as `0`/`1`; a missing `belief_diff` is an empty
//! field.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{FriendWeightRow, HouseholdSnapshotRow, OutputResult, TickSummaryRow};

pub const SNAPSHOT_HEADER: [&str; 13] = [
    "agent_id",
    "tick",
    "x",
    "y",
    "in_floodplain",
    "flood_depth_estimated",
    "flood_damage_estimated",
    "flood_depth_actual",
    "flood_damage_actual",
    "belief",
    "is_adapted",
    "friends_count",
    "belief_diff",
];

pub const SUMMARY_HEADER: [&str; 5] =
    ["tick", "stepped_agents", "adapted_households", "mean_belief", "flood_shock"];

pub const WEIGHT_HEADER: [&str; 4] = ["tick", "agent_id", "friend_id", "weight"];

/// Writes simulation output to CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    weights:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("household_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        let mut weights = Writer::from_path(dir.join("friend_weights.csv"))?;
        weights.write_record(WEIGHT_HEADER)?;

        Ok(Self { snapshots, summaries, weights, finished: false })
    }
}

fn flag(b: bool) -> String {
    (b as u8).to_string()
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[HouseholdSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                flag(row.in_floodplain),
                row.flood_depth_estimated.to_string(),
                row.flood_damage_estimated.to_string(),
                row.flood_depth_actual.to_string(),
                row.flood_damage_actual.to_string(),
                row.belief.to_string(),
                flag(row.is_adapted),
                row.friends_count.to_string(),
                row.belief_diff.map(|d| d.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.stepped_agents.to_string(),
            row.adapted_households.to_string(),
            row.mean_belief.to_string(),
            flag(row.flood_shock),
        ])?;
        Ok(())
    }

    fn write_friend_weights(&mut self, rows: &[FriendWeightRow]) -> OutputResult<()> {
        for row in rows {
            self.weights.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.friend_id.to_string(),
                row.weight.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.weights.flush()?;
        Ok(())
    }
}
