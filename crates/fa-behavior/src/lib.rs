//! `fa-behavior`: the per-household belief-update pipeline.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`weights`]      | `min_max_weights`: distance → influence weight            |
//! | [`neighborhood`] | `Neighborhood`, `Neighbor`: friends with fresh weights    |
//! | [`belief`]       | `revise_belief`, `blend`, `BeliefRevision`                 |
//! | [`adaptation`]   | `AdaptationRule`: one-way threshold transition            |
//! | [`params`]       | `InfluenceParams` (hop radius, gate, threshold)            |
//! | [`context`]      | `StepContext<'a>`: what a step may read besides the store |
//! | [`model`]        | `Steppable` trait, `StepReport`                            |
//! | [`household`]    | `Household`: runs the pipeline                            |
//! | [`government`]   | `Government`: steps without side effects                  |
//! | [`error`]        | `BehaviorError`, `BehaviorResult<T>`                       |
//!
//! # Pipeline
//!
//! Each household step runs, in order:
//!
//! 1. **Neighbor discovery**: `SocialNetwork::neighbors_at_radius`.
//! 2. **Weights**: distances to the *current* friends, min-max scaled.
//! 3. **Belief revision**: sequential fold over friends in id order.
//! 4. **Adaptation**: `NotAdapted → Adapted` once belief exceeds the
//!    threshold.
//! 5. **Diagnostics**: mean absolute belief difference appended to the
//!    household's history.
//!
//! Steps 2 and 3 are coupled through [`Neighborhood`]: the belief engine
//! only accepts a `Neighborhood`, and one can only be built from a freshly
//! gathered friend list, so stale weights from an earlier tick cannot reach
//! the update.

pub mod adaptation;
pub mod belief;
pub mod context;
pub mod error;
pub mod government;
pub mod household;
pub mod model;
pub mod neighborhood;
pub mod params;
pub mod weights;


pub use adaptation::AdaptationRule;
pub use belief::{blend, revise_belief, BeliefRevision};
pub use context::StepContext;
pub use error::{BehaviorError, BehaviorResult};
pub use government::Government;
pub use household::Household;
pub use model::{StepReport, Steppable};
pub use neighborhood::{Neighbor, Neighborhood};
pub use params::InfluenceParams;
pub use weights::min_max_weights;
