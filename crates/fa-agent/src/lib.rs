//! `fa-agent`: Structure-of-Arrays household registry.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`store`]    | `HouseholdStore` (SoA arrays), `HouseholdInit`            |
//! | [`state`]    | `AdaptationState` (one-way adaptation flag)               |
//! | [`snapshot`] | `HouseholdSnapshot`, `PopulationDump`                     |
//! | [`error`]    | `AgentError`, `AgentResult<T>`                            |
//!
//! Households never hold references to one another.  Social ties are lists
//! of `AgentId`s that index back into the same store, so the registry is the
//! single owner of all household state.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on snapshot/state types. |

pub mod error;
pub mod snapshot;
pub mod state;
pub mod store;


pub use error::{AgentError, AgentResult};
pub use snapshot::{HouseholdSnapshot, PopulationDump};
pub use state::AdaptationState;
pub use store::{HouseholdInit, HouseholdStore};
