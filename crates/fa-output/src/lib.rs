//! `fa-output`: simulation output writers for the flood adaptation model.
//!
//! | Backend | Files created                                                        |
//! |---------|----------------------------------------------------------------------|
//! | CSV     | `household_snapshots.csv`, `tick_summaries.csv`, `friend_weights.csv` |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `fa_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fa_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{FriendWeightRow, HouseholdSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
