//! Simulation observer trait for progress reporting and data collection.

use fa_agent::HouseholdStore;
use fa_behavior::StepReport;
use fa_core::Tick;

use crate::Activation;

/// Aggregates for one completed tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickSummary {
    pub tick:               Tick,
    /// Every agent activated this tick, households and governments.
    pub stepped:            usize,
    /// Total adapted households after the tick.
    pub adapted_households: usize,
    pub mean_belief:        f64,
    /// `true` if the flood shock fired this tick.
    pub flood_shock:        bool,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         println!("{}: {} adapted", summary.tick, summary.adapted_households);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the flood shock has written actual exposure.
    fn on_flood_shock(&mut self, _tick: Tick, _flooded: usize) {}

    /// Called once per tick with the order agents are about to step in.
    fn on_activation_order(&mut self, _tick: Tick, _order: &[Activation]) {}

    /// Called after each household step.
    fn on_household_step(&mut self, _report: &StepReport) {}

    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `run.output_interval_ticks` ticks),
    /// after the tick's steps.
    fn on_snapshot(&mut self, _tick: Tick, _households: &HouseholdStore) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
