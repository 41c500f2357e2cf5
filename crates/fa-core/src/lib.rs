//! `fa-core`: foundational types for the flood adaptation model.
//!
//! This crate is a dependency of every other `fa-*` crate.  It has no `fa-*`
//! dependencies and a single required external one (`rand`), plus optional
//! `serde`.
//!
//! # What lives here
//!
//! | Module   | Contents                                         |
//! |----------|--------------------------------------------------|
//! | [`ids`]  | `AgentId`, `BandId`                              |
//! | [`geo`]  | `Point`, `BoundingBox`, Euclidean distance       |
//! | [`time`] | `Tick`                                           |
//! | [`rng`]  | `AgentRng` (per-household), `SimRng` (global)    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{BoundingBox, Point};
pub use ids::{AgentId, BandId};
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
